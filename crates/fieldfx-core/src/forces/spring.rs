use glam::Vec2;

/// Spring pull from `pos` back to `target`, proportional to the offset.
/// No overshoot guard; integration damping settles it.
#[inline]
pub fn return_to(target: Vec2, pos: Vec2, stiffness: f32) -> Vec2 {
    (target - pos) * stiffness
}
