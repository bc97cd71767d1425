//! Tuning for the three field variants.
//!
//! All per-frame constants are expressed against a 60 fps reference frame
//! (see [`crate::math::REFERENCE_FPS`]); the engine rescales them by the real
//! frame delta. Every section implements `Default` with the stock look, and
//! `#[serde(default)]` lets a host override only the fields it cares about:
//!
//! ```json
//! { "liquid_burst": { "clear_radius": 240.0 }, "max_dt": 0.033 }
//! ```

use crate::draw::Color;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Upper bound on a single frame delta in seconds. Longer gaps (tab
    /// switches, debugger pauses) are simulated as one frame of this length.
    /// At 0.05 s (three reference frames) the attractor still closes less
    /// than a tenth of its gap to the pointer in one tick.
    pub max_dt: f32,
    pub gravity_field: GravityFieldConfig,
    pub circle_burst: CircleBurstConfig,
    pub liquid_burst: LiquidBurstConfig,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            max_dt: 0.05,
            gravity_field: GravityFieldConfig::default(),
            circle_burst: CircleBurstConfig::default(),
            liquid_burst: LiquidBurstConfig::default(),
        }
    }
}

impl EffectConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("max_dt", self.max_dt)?;
        self.gravity_field.validate()?;
        self.circle_burst.validate()?;
        self.liquid_burst.validate()
    }
}

/// Orbiting trails around an eased, pointer-following attractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityFieldConfig {
    pub max_particles: usize,
    /// One particle per this many pixels of viewport width, capped at
    /// `max_particles`.
    pub width_per_particle: f32,
    pub ring_min_radius: f32,
    pub ring_spread: f32,
    pub orbit_speed_min: f32,
    pub orbit_speed_spread: f32,
    pub attractor_mass: f32,
    pub attractor_ease: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub gravity_scale: f32,
    pub standoff_scale: f32,
    pub damping: f32,
    pub max_speed: f32,
    pub wrap_margin: f32,
    pub trail_min: usize,
    pub trail_spread: usize,
    pub hue_drift: f32,
    pub fade_alpha: f32,
}

impl Default for GravityFieldConfig {
    fn default() -> Self {
        Self {
            max_particles: 150,
            width_per_particle: 12.0,
            ring_min_radius: 100.0,
            ring_spread: 300.0,
            orbit_speed_min: 2.0,
            orbit_speed_spread: 2.0,
            attractor_mass: 800.0,
            attractor_ease: 0.02,
            min_distance: 50.0,
            max_distance: 500.0,
            gravity_scale: 0.05,
            standoff_scale: 0.1,
            damping: 0.998,
            max_speed: 8.0,
            wrap_margin: 50.0,
            trail_min: 15,
            trail_spread: 20,
            hue_drift: 0.1,
            fade_alpha: 0.15,
        }
    }
}

impl GravityFieldConfig {
    pub fn particle_count(&self, viewport_width: f32) -> usize {
        let by_width = (viewport_width.max(0.0) / self.width_per_particle).floor() as usize;
        by_width.min(self.max_particles)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        positive("gravity_field.width_per_particle", self.width_per_particle)?;
        non_negative("gravity_field.min_distance", self.min_distance)?;
        if self.max_distance <= self.min_distance {
            return Err(ConfigError::invalid(
                "gravity_field.max_distance",
                format!("must exceed min_distance ({})", self.min_distance),
            ));
        }
        unit("gravity_field.attractor_ease", self.attractor_ease)?;
        unit("gravity_field.damping", self.damping)?;
        positive("gravity_field.max_speed", self.max_speed)?;
        non_negative("gravity_field.wrap_margin", self.wrap_margin)?;
        if self.trail_min == 0 {
            return Err(ConfigError::invalid("gravity_field.trail_min", "trail capacity must be at least 1"));
        }
        Ok(())
    }
}

/// A pulsing disc that bursts into dots which settle and dodge the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleBurstConfig {
    pub particle_count: usize,
    pub core_radius: f32,
    /// Pulse progress gained per reference frame.
    pub pulse_rate: f32,
    /// Seconds the disc pulses before bursting.
    pub pulse_duration: f32,
    pub burst_speed_min: f32,
    pub burst_speed_spread: f32,
    pub size_min: f32,
    pub size_spread: f32,
    pub friction_min: f32,
    pub friction_spread: f32,
    pub repel_radius: f32,
    pub repel_strength: f32,
    /// Relative size increase at zero distance from the pointer.
    pub grow: f32,
    pub return_force: f32,
    pub settle_speed: f32,
    pub restitution: f32,
    pub max_speed: f32,
    pub fade_alpha: f32,
    pub ink: Color,
}

impl Default for CircleBurstConfig {
    fn default() -> Self {
        Self {
            particle_count: 120,
            core_radius: 80.0,
            pulse_rate: 0.03,
            pulse_duration: 50.0 / 60.0,
            burst_speed_min: 8.0,
            burst_speed_spread: 12.0,
            size_min: 4.0,
            size_spread: 10.0,
            friction_min: 0.96,
            friction_spread: 0.02,
            repel_radius: 150.0,
            repel_strength: 8.0,
            grow: 0.5,
            return_force: 0.02,
            settle_speed: 0.5,
            restitution: 0.5,
            max_speed: 40.0,
            fade_alpha: 0.2,
            ink: Color::rgb(0x11, 0x11, 0x11),
        }
    }
}

impl CircleBurstConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive("circle_burst.pulse_duration", self.pulse_duration)?;
        positive("circle_burst.repel_radius", self.repel_radius)?;
        unit("circle_burst.friction_min", self.friction_min)?;
        unit("circle_burst.friction_min + friction_spread", self.friction_min + self.friction_spread)?;
        non_negative("circle_burst.restitution", self.restitution)?;
        positive("circle_burst.max_speed", self.max_speed)
    }
}

/// Orbit, merge, burst, then a pointer-reactive dot field around a clear
/// centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidBurstConfig {
    pub orbiter_count: usize,
    pub orbit_duration: f32,
    pub merge_duration: f32,
    pub burst_duration: f32,
    pub orbit_distance_min: f32,
    pub orbit_distance_spread: f32,
    pub orbiter_size_min: f32,
    pub orbiter_size_spread: f32,
    pub orbiter_speed_min: f32,
    pub orbiter_speed_spread: f32,
    pub merged_radius: f32,
    pub burst_core_radius: f32,
    /// Orbiter distance multiplier per reference frame while merging.
    pub spiral: f32,
    pub particle_count: usize,
    pub clear_radius: f32,
    pub max_target_attempts: u32,
    pub dot_size_min: f32,
    pub dot_size_spread: f32,
    pub wobble_speed_min: f32,
    pub wobble_speed_spread: f32,
    pub max_delay: f32,
    pub wave_radius: f32,
    pub wave_exponent: f32,
    pub wave_strength: f32,
    pub dead_zone_strength: f32,
    pub dead_zone_exponent: f32,
    pub return_force: f32,
    pub damping: f32,
    pub drift: f32,
    pub max_speed: f32,
    pub dark_color: Color,
    pub light_color: Color,
}

impl Default for LiquidBurstConfig {
    fn default() -> Self {
        Self {
            orbiter_count: 10,
            orbit_duration: 1.5,
            merge_duration: 1.0,
            burst_duration: 1.0,
            orbit_distance_min: 140.0,
            orbit_distance_spread: 40.0,
            orbiter_size_min: 10.0,
            orbiter_size_spread: 8.0,
            orbiter_speed_min: 0.015,
            orbiter_speed_spread: 0.01,
            merged_radius: 80.0,
            burst_core_radius: 100.0,
            spiral: 0.92,
            particle_count: 250,
            clear_radius: 320.0,
            max_target_attempts: 64,
            dot_size_min: 2.0,
            dot_size_spread: 2.0,
            wobble_speed_min: 0.02,
            wobble_speed_spread: 0.03,
            max_delay: 0.3,
            wave_radius: 120.0,
            wave_exponent: 1.5,
            wave_strength: 1.5,
            dead_zone_strength: 1.2,
            dead_zone_exponent: 2.0,
            return_force: 0.015,
            damping: 0.92,
            drift: 0.4,
            max_speed: 30.0,
            dark_color: Color::rgb(0xa8, 0x55, 0xf7),
            light_color: Color::rgb(0x6b, 0x21, 0xa8),
        }
    }
}

impl LiquidBurstConfig {
    /// Seconds each dot spends travelling from the centre to its target.
    pub fn travel_time(&self) -> f32 {
        (self.burst_duration - self.max_delay).max(f32::EPSILON)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        positive("liquid_burst.orbit_duration", self.orbit_duration)?;
        positive("liquid_burst.merge_duration", self.merge_duration)?;
        positive("liquid_burst.burst_duration", self.burst_duration)?;
        non_negative("liquid_burst.max_delay", self.max_delay)?;
        if self.max_delay >= self.burst_duration {
            return Err(ConfigError::invalid(
                "liquid_burst.max_delay",
                format!("must be shorter than burst_duration ({})", self.burst_duration),
            ));
        }
        unit("liquid_burst.spiral", self.spiral)?;
        unit("liquid_burst.damping", self.damping)?;
        non_negative("liquid_burst.clear_radius", self.clear_radius)?;
        if self.max_target_attempts == 0 {
            return Err(ConfigError::invalid("liquid_burst.max_target_attempts", "must be at least 1"));
        }
        positive("liquid_burst.wave_radius", self.wave_radius)?;
        positive("liquid_burst.max_speed", self.max_speed)
    }
}

// ---------- validation helpers ----------

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("expected a positive number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("expected a non-negative number, got {value}")))
    }
}

/// Per-frame multipliers must lie in (0, 1].
fn unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("expected a value in (0, 1], got {value}")))
    }
}
