use crate::math::{direction, ease_fraction};
use glam::Vec2;

/// The invisible body the gravity field orbits. It trails the pointer with
/// exponential smoothing instead of tracking it 1:1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    pub position: Vec2,
    pub mass: f32,
}

impl Attractor {
    pub fn new(position: Vec2, mass: f32) -> Self {
        Self { position, mass }
    }

    /// Close `rate` of the gap to `target` per reference frame, over `k`
    /// reference frames.
    pub fn follow(&mut self, target: Vec2, rate: f32, k: f32) {
        self.position += (target - self.position) * ease_fraction(rate, k);
    }
}

/// Inverse-square pull inside a distance band, linear push-back below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityWell {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Multiplier on the `M·m/d²` term.
    pub scale: f32,
    /// Multiplier on `(min_distance - d)` inside the standoff zone.
    pub standoff: f32,
}

/// Force on a particle of `mass` at `pos` from `attractor`.
///
/// * `min < d < max`: `M·m/d² · scale` towards the attractor.
/// * `d <= min`: `(min - d) · standoff` away from it, which keeps bodies in
///   a ring instead of collapsing onto the singularity.
/// * `d >= max` or `d == 0`: no force.
pub fn central_force(well: &GravityWell, attractor: &Attractor, pos: Vec2, mass: f32) -> Vec2 {
    let Some((dir, dist)) = direction(pos, attractor.position) else {
        return Vec2::ZERO;
    };

    if dist > well.min_distance && dist < well.max_distance {
        let magnitude = attractor.mass * mass / (dist * dist);
        dir * magnitude * well.scale
    } else if dist <= well.min_distance {
        -dir * (well.min_distance - dist) * well.standoff
    } else {
        Vec2::ZERO
    }
}
