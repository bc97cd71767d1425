use crate::math::direction;
use glam::Vec2;

/// Circular region around the surface centre that particles are pushed out
/// of so foreground content stays unobstructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadZone {
    pub center: Vec2,
    pub radius: f32,
    pub strength: f32,
    pub exponent: f32,
}

/// `((C - d) / C)^exponent · strength` away from the centre while inside
/// the zone. Zero outside it and exactly at the centre.
pub fn repulsion(zone: &DeadZone, pos: Vec2) -> Vec2 {
    let Some((away, dist)) = direction(zone.center, pos) else {
        return Vec2::ZERO;
    };
    if dist >= zone.radius {
        return Vec2::ZERO;
    }
    let depth = (zone.radius - dist) / zone.radius;
    away * depth.powf(zone.exponent) * zone.strength
}
