use fieldfx_core::forces::dead_zone::{self, DeadZone};
use fieldfx_core::forces::gravity::{central_force, Attractor, GravityWell};
use fieldfx_core::forces::pointer::{repulsion, Repulsion, Repulsor};
use fieldfx_core::forces::spring::return_to;
use glam::Vec2;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Gravity band as the gravity field uses it.
fn default_well() -> GravityWell {
    GravityWell {
        min_distance: 50.0,
        max_distance: 500.0,
        scale: 0.05,
        standoff: 0.1,
    }
}

fn attractor_at(x: f32, y: f32) -> Attractor {
    Attractor::new(Vec2::new(x, y), 800.0)
}

fn assert_finite(v: Vec2, label: &str) {
    assert!(v.x.is_finite() && v.y.is_finite(), "{label}: non-finite force {v:?}");
}

// ---------------------------------------------------------------------------
// 1. Central gravity
// ---------------------------------------------------------------------------

#[test]
fn test_gravity_pulls_inside_band() {
    let attractor = attractor_at(0.0, 0.0);
    let force = central_force(&default_well(), &attractor, Vec2::new(100.0, 0.0), 2.0);

    // 800 * 2 / 100^2 * 0.05
    let expected = 800.0 * 2.0 / 10_000.0 * 0.05;
    assert!(force.x < 0.0, "force should point at the attractor: {force:?}");
    assert!(
        (force.length() - expected).abs() < 1e-5,
        "magnitude {} != {expected}",
        force.length()
    );
}

#[test]
fn test_gravity_pushes_back_inside_min_distance() {
    let attractor = attractor_at(0.0, 0.0);
    let force = central_force(&default_well(), &attractor, Vec2::new(30.0, 0.0), 1.0);

    // (50 - 30) * 0.1 outward
    assert!(force.x > 0.0, "standoff should push outward: {force:?}");
    assert!((force.x - 2.0).abs() < 1e-5, "standoff force {}", force.x);
}

#[test]
fn test_gravity_vanishes_beyond_max_distance() {
    let attractor = attractor_at(0.0, 0.0);
    let force = central_force(&default_well(), &attractor, Vec2::new(0.0, 600.0), 3.0);
    assert_eq!(force, Vec2::ZERO);
}

#[test]
fn test_gravity_zero_distance_is_zero_force() {
    let attractor = attractor_at(250.0, 250.0);
    let force = central_force(&default_well(), &attractor, Vec2::new(250.0, 250.0), 1.0);
    assert_finite(force, "coincident");
    assert_eq!(force, Vec2::ZERO);
}

// ---------------------------------------------------------------------------
// 2. Attractor easing
// ---------------------------------------------------------------------------

#[test]
fn test_attractor_closes_fixed_fraction_per_frame() {
    let mut attractor = attractor_at(0.0, 0.0);
    attractor.follow(Vec2::new(100.0, 0.0), 0.02, 1.0);
    assert!((attractor.position.x - 2.0).abs() < 1e-4, "x = {}", attractor.position.x);
}

#[test]
fn test_attractor_easing_is_frame_rate_independent() {
    let target = Vec2::new(400.0, -200.0);

    let mut at_60 = attractor_at(0.0, 0.0);
    for _ in 0..60 {
        at_60.follow(target, 0.02, 1.0);
    }
    let mut at_30 = attractor_at(0.0, 0.0);
    for _ in 0..30 {
        at_30.follow(target, 0.02, 2.0);
    }

    let gap = at_60.position.distance(at_30.position);
    assert!(gap < 1e-2, "30 fps and 60 fps diverged by {gap}");
}

#[test]
fn test_attractor_zero_frames_does_not_move() {
    let mut attractor = attractor_at(10.0, 10.0);
    attractor.follow(Vec2::new(500.0, 500.0), 0.02, 0.0);
    assert_eq!(attractor.position, Vec2::new(10.0, 10.0));
}

// ---------------------------------------------------------------------------
// 3. Pointer repulsion
// ---------------------------------------------------------------------------

#[test]
fn test_repulsion_points_away_from_pointer() {
    let repulsor = Repulsor {
        radius: 150.0,
        strength: 8.0,
        exponent: 1.0,
    };
    let r = repulsion(&repulsor, Vec2::new(100.0, 100.0), Vec2::new(100.0, 175.0));

    assert!(r.force.y > 0.0 && r.force.x.abs() < 1e-6, "force {:?}", r.force);
    assert!((r.proximity - 0.5).abs() < 1e-6, "proximity {}", r.proximity);
    assert!((r.force.length() - 4.0).abs() < 1e-5, "magnitude {}", r.force.length());
}

#[test]
fn test_repulsion_exponent_sharpens_falloff() {
    let linear = Repulsor {
        radius: 120.0,
        strength: 1.5,
        exponent: 1.0,
    };
    let sharp = Repulsor { exponent: 1.5, ..linear };
    let pos = Vec2::new(60.0, 0.0);

    let a = repulsion(&linear, Vec2::ZERO, pos).force.length();
    let b = repulsion(&sharp, Vec2::ZERO, pos).force.length();
    assert!(b < a, "exponent 1.5 ({b}) should be weaker than linear ({a}) mid-radius");
}

#[test]
fn test_repulsion_outside_radius_and_at_pointer_is_none() {
    let repulsor = Repulsor {
        radius: 120.0,
        strength: 1.5,
        exponent: 1.5,
    };
    assert_eq!(repulsion(&repulsor, Vec2::ZERO, Vec2::new(120.0, 0.0)), Repulsion::NONE);
    assert_eq!(repulsion(&repulsor, Vec2::ZERO, Vec2::new(500.0, 500.0)), Repulsion::NONE);
    assert_eq!(repulsion(&repulsor, Vec2::new(3.0, 4.0), Vec2::new(3.0, 4.0)), Repulsion::NONE);
}

// ---------------------------------------------------------------------------
// 4. Dead zone and spring
// ---------------------------------------------------------------------------

#[test]
fn test_dead_zone_pushes_out_and_fades_at_edge() {
    let zone = DeadZone {
        center: Vec2::new(400.0, 300.0),
        radius: 320.0,
        strength: 1.2,
        exponent: 2.0,
    };
    let near = dead_zone::repulsion(&zone, Vec2::new(410.0, 300.0));
    let far = dead_zone::repulsion(&zone, Vec2::new(700.0, 300.0));
    let outside = dead_zone::repulsion(&zone, Vec2::new(800.0, 300.0));

    assert!(near.x > far.x && far.x > 0.0, "near {near:?}, far {far:?}");
    assert_eq!(outside, Vec2::ZERO);
    assert_eq!(dead_zone::repulsion(&zone, zone.center), Vec2::ZERO);
}

#[test]
fn test_spring_is_proportional_to_offset() {
    let f = return_to(Vec2::new(10.0, 0.0), Vec2::new(0.0, 20.0), 0.5);
    assert_eq!(f, Vec2::new(5.0, -10.0));
    assert_eq!(return_to(Vec2::ONE, Vec2::ONE, 0.02), Vec2::ZERO);
}
