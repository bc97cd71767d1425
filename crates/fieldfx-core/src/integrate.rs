use crate::math::{clamp_speed, per_frame};
use crate::particle::Particle;
use crate::surface::Viewport;
use glam::Vec2;

/// Semi-implicit Euler step with per-frame damping and a speed cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    /// Multiplier on the summed force before it is added to velocity.
    pub force_scale: f32,
    /// Velocity multiplier per reference frame.
    pub damping: f32,
    pub max_speed: f32,
}

impl Integrator {
    /// Advance `p` by `k` reference frames:
    ///
    /// 1. `velocity += force · force_scale · k`
    /// 2. `velocity *= damping^k`
    /// 3. clamp speed to `max_speed`
    /// 4. `position += (velocity + offset) · k`
    ///
    /// `offset` is a positional wobble that bypasses velocity entirely.
    pub fn step(&self, p: &mut Particle, force: Vec2, offset: Vec2, k: f32) {
        p.velocity += force * self.force_scale * k;
        p.velocity *= per_frame(self.damping, k);
        p.velocity = clamp_speed(p.velocity, self.max_speed);
        p.position += (p.velocity + offset) * k;
    }

    pub fn with_damping(self, damping: f32) -> Self {
        Self { damping, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    /// Leaving by more than `margin` re-enters at the far margin.
    Wrap { margin: f32 },
    /// Clamp inside the surface inset by the particle size and bounce with
    /// `restitution` of the normal velocity.
    Reflect { restitution: f32 },
    /// Clamp inside the surface inset by the particle size; velocity kept.
    Clamp,
}

impl Boundary {
    pub fn apply(self, p: &mut Particle, viewport: Viewport) {
        match self {
            Boundary::Wrap { margin } => {
                let max_x = viewport.width + margin;
                let max_y = viewport.height + margin;
                if p.position.x < -margin {
                    p.position.x = max_x;
                } else if p.position.x > max_x {
                    p.position.x = -margin;
                }
                if p.position.y < -margin {
                    p.position.y = max_y;
                } else if p.position.y > max_y {
                    p.position.y = -margin;
                }
            }
            Boundary::Reflect { restitution } => {
                let (lo, hi) = inset(p.size, viewport);
                if p.position.x < lo.x {
                    p.position.x = lo.x;
                    p.velocity.x *= -restitution;
                } else if p.position.x > hi.x {
                    p.position.x = hi.x;
                    p.velocity.x *= -restitution;
                }
                if p.position.y < lo.y {
                    p.position.y = lo.y;
                    p.velocity.y *= -restitution;
                } else if p.position.y > hi.y {
                    p.position.y = hi.y;
                    p.velocity.y *= -restitution;
                }
            }
            Boundary::Clamp => {
                let (lo, hi) = inset(p.size, viewport);
                p.position = p.position.clamp(lo, hi);
            }
        }
    }
}

/// Surface rectangle shrunk by `size` on every side, collapsing to the
/// centre line when the surface is smaller than the particle.
fn inset(size: f32, viewport: Viewport) -> (Vec2, Vec2) {
    let size = size.max(0.0);
    let lo = Vec2::splat(size);
    let hi = Vec2::new(viewport.width - size, viewport.height - size);
    let center = viewport.center();
    (lo.min(center), hi.max(center))
}

/// Mark `p` settled once its speed drops below `threshold`, recording its
/// position as the rest target. One-way: a settled particle never
/// unsettles. Returns `true` on the frame the transition happens.
pub fn detect_settle(p: &mut Particle, threshold: f32) -> bool {
    if !p.settled && p.speed() < threshold {
        p.settled = true;
        p.target = p.position;
        true
    } else {
        false
    }
}
