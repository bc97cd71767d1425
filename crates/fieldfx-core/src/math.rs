use glam::Vec2;

/// Frame rate the per-frame tuning constants were authored against.
pub const REFERENCE_FPS: f32 = 60.0;

/// Number of reference frames covered by `dt` seconds.
#[inline]
pub fn frame_scale(dt: f32) -> f32 {
    dt * REFERENCE_FPS
}

/// Apply a per-reference-frame multiplier over `k` reference frames.
///
/// `per_frame(0.92, 1.0) == 0.92`, `per_frame(0.92, 2.0) == 0.92 * 0.92`.
#[inline]
pub fn per_frame(factor: f32, k: f32) -> f32 {
    factor.powf(k)
}

/// Fraction of the remaining gap closed by exponential smoothing with a
/// per-reference-frame `rate` over `k` reference frames.
#[inline]
pub fn ease_fraction(rate: f32, k: f32) -> f32 {
    1.0 - (1.0 - rate.clamp(0.0, 1.0)).powf(k)
}

/// Cubic ease-out on [0,1].
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Rescale `v` so its length does not exceed `max`.
#[inline]
pub fn clamp_speed(v: Vec2, max: f32) -> Vec2 {
    let speed = v.length();
    if speed > max && speed > 0.0 {
        v * (max / speed)
    } else {
        v
    }
}

/// Unit vector from `from` towards `to` together with the distance, or
/// `None` when the points coincide.
#[inline]
pub fn direction(from: Vec2, to: Vec2) -> Option<(Vec2, f32)> {
    let delta = to - from;
    let dist = delta.length();
    if dist > f32::EPSILON && dist.is_finite() {
        Some((delta / dist, dist))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_frame_compounds() {
        assert!((per_frame(0.92, 2.0) - 0.92 * 0.92).abs() < 1e-6);
        assert_eq!(per_frame(0.5, 0.0), 1.0);
    }

    #[test]
    fn ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(3.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn direction_of_coincident_points_is_none() {
        assert!(direction(Vec2::ONE, Vec2::ONE).is_none());
        let (dir, dist) = direction(Vec2::ZERO, Vec2::new(3.0, 4.0)).unwrap();
        assert_eq!(dist, 5.0);
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }
}
