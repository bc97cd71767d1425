pub mod circle_burst;
pub mod gravity_field;
pub mod liquid_burst;

use crate::error::ConfigError;
use crate::phase::PhaseTable;
use crate::surface::SurfaceSpec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    GravityField,
    CircleBurst,
    LiquidBurst,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::GravityField, Variant::CircleBurst, Variant::LiquidBurst];

    pub fn name(self) -> &'static str {
        match self {
            Variant::GravityField => "gravity-field",
            Variant::CircleBurst => "circle-burst",
            Variant::LiquidBurst => "liquid-burst",
        }
    }

    pub fn surface_spec(self) -> SurfaceSpec {
        match self {
            Variant::GravityField => gravity_field::SURFACE,
            Variant::CircleBurst => circle_burst::SURFACE,
            Variant::LiquidBurst => liquid_burst::SURFACE,
        }
    }

    pub fn phase_table(self) -> PhaseTable {
        match self {
            Variant::GravityField => gravity_field::phase_table(),
            Variant::CircleBurst => circle_burst::phase_table(),
            Variant::LiquidBurst => liquid_burst::phase_table(),
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownVariant(s.to_owned()))
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
