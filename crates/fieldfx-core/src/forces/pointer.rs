use crate::math::direction;
use glam::Vec2;

/// Radial push away from the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsor {
    pub radius: f32,
    pub strength: f32,
    /// Falloff exponent on `(R - d) / R`; above 1 sharpens the edge.
    pub exponent: f32,
}

/// Result of [`repulsion`] for one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsion {
    pub force: Vec2,
    /// `(R - d) / R` in [0,1]; 0 outside the radius. Variants use it to
    /// swell particles near the cursor.
    pub proximity: f32,
}

impl Repulsion {
    pub const NONE: Repulsion = Repulsion {
        force: Vec2::ZERO,
        proximity: 0.0,
    };
}

/// Force magnitude `((R - d) / R)^exponent · strength` directed from the
/// pointer to the particle. A particle exactly on the pointer has no
/// defined direction and receives nothing.
pub fn repulsion(repulsor: &Repulsor, pointer: Vec2, pos: Vec2) -> Repulsion {
    let Some((away, dist)) = direction(pointer, pos) else {
        return Repulsion::NONE;
    };
    if dist >= repulsor.radius {
        return Repulsion::NONE;
    }

    let proximity = (repulsor.radius - dist) / repulsor.radius;
    let falloff = if repulsor.exponent == 1.0 {
        proximity
    } else {
        proximity.powf(repulsor.exponent)
    };
    Repulsion {
        force: away * falloff * repulsor.strength,
        proximity,
    }
}
