use fieldfx_core::integrate::{detect_settle, Boundary, Integrator};
use fieldfx_core::particle::{sample_burst_target, Particle, ParticleStore};
use fieldfx_core::surface::Viewport;
use fieldfx_core::trail::Trail;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const VIEW: Viewport = Viewport::new(1280.0, 800.0);

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

fn moving(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
    let mut p = Particle::at(Vec2::new(x, y));
    p.velocity = Vec2::new(vx, vy);
    p
}

// ---------------------------------------------------------------------------
// 1. Store
// ---------------------------------------------------------------------------

#[test]
fn test_seed_replaces_batch() {
    let mut store = ParticleStore::new();
    store.seed(5, |i| Particle::at(Vec2::splat(i as f32)));
    assert_eq!(store.len(), 5);

    store.seed(3, |_| Particle::default());
    assert_eq!(store.len(), 3, "seeding must discard the previous batch");
    assert!(store.iter().all(|p| p.position == Vec2::ZERO));

    store.clear();
    assert!(store.is_empty());
}

#[test]
fn test_seed_passes_indices_in_order() {
    let mut store = ParticleStore::new();
    store.seed(4, |i| Particle::at(Vec2::new(i as f32, 0.0)));
    let xs: Vec<f32> = store.iter().map(|p| p.position.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
}

// ---------------------------------------------------------------------------
// 2. Burst target sampling
// ---------------------------------------------------------------------------

#[test]
fn test_burst_targets_respect_clear_radius() {
    let mut rng = rng(7);
    let center = VIEW.center();
    for i in 0..1000 {
        let sample = sample_burst_target(&mut rng, VIEW, 320.0, 64);
        let d = sample.point.distance(center);
        assert!(d >= 320.0, "sample {i} at distance {d} lies inside the clear radius");
        assert!(VIEW.contains(sample.point), "sample {i} left the surface: {:?}", sample.point);
        assert!(!sample.exhausted, "a 1280x800 surface has room outside r=320");
    }
}

#[test]
fn test_burst_targets_on_surface_smaller_than_clear_radius() {
    let small = Viewport::new(300.0, 200.0);
    let mut rng = rng(11);
    for _ in 0..1000 {
        let sample = sample_burst_target(&mut rng, small, 320.0, 64);
        assert!(sample.exhausted);
        let d = sample.point.distance(small.center());
        assert!(d >= 320.0, "projected target at {d} is inside the clear radius");
        assert!(d.is_finite());
    }
}

#[test]
fn test_burst_target_zero_clear_radius_accepts_first_draw() {
    let mut rng = rng(3);
    let sample = sample_burst_target(&mut rng, VIEW, 0.0, 1);
    assert!(!sample.exhausted);
    assert!(VIEW.contains(sample.point));
}

// ---------------------------------------------------------------------------
// 3. Trails
// ---------------------------------------------------------------------------

#[test]
fn test_trail_evicts_oldest_at_capacity() {
    let mut trail = Trail::new(3);
    for i in 0..5 {
        trail.push(Vec2::new(i as f32, 0.0));
    }
    assert_eq!(trail.len(), 3);
    assert_eq!(trail.oldest(), Some(Vec2::new(2.0, 0.0)));
    assert_eq!(trail.newest(), Some(Vec2::new(4.0, 0.0)));
}

#[test]
fn test_trail_capacity_never_zero() {
    let mut trail = Trail::new(0);
    trail.push(Vec2::ONE);
    trail.push(Vec2::ZERO);
    assert_eq!(trail.len(), 1);
    assert_eq!(trail.newest(), Some(Vec2::ZERO));
}

// ---------------------------------------------------------------------------
// 4. Integration
// ---------------------------------------------------------------------------

#[test]
fn test_integrator_caps_speed() {
    let integrator = Integrator {
        force_scale: 1.0,
        damping: 1.0,
        max_speed: 8.0,
    };
    let mut p = moving(0.0, 0.0, 0.0, 0.0);
    integrator.step(&mut p, Vec2::new(1000.0, 1000.0), Vec2::ZERO, 1.0);
    assert!(p.speed() <= 8.0 + 1e-4, "speed {} above cap", p.speed());
}

#[test]
fn test_integrator_damping_scales_with_frame_count() {
    let integrator = Integrator {
        force_scale: 1.0,
        damping: 0.9,
        max_speed: 100.0,
    };
    let mut two_small = moving(0.0, 0.0, 10.0, 0.0);
    integrator.step(&mut two_small, Vec2::ZERO, Vec2::ZERO, 1.0);
    integrator.step(&mut two_small, Vec2::ZERO, Vec2::ZERO, 1.0);

    let mut one_big = moving(0.0, 0.0, 10.0, 0.0);
    integrator.step(&mut one_big, Vec2::ZERO, Vec2::ZERO, 2.0);

    assert!(
        (two_small.velocity.x - one_big.velocity.x).abs() < 1e-4,
        "{} vs {}",
        two_small.velocity.x,
        one_big.velocity.x
    );
}

#[test]
fn test_offset_moves_without_touching_velocity() {
    let integrator = Integrator {
        force_scale: 1.0,
        damping: 1.0,
        max_speed: 10.0,
    };
    let mut p = moving(0.0, 0.0, 0.0, 0.0);
    integrator.step(&mut p, Vec2::ZERO, Vec2::new(0.4, -0.4), 1.0);
    assert_eq!(p.velocity, Vec2::ZERO);
    assert_eq!(p.position, Vec2::new(0.4, -0.4));
}

// ---------------------------------------------------------------------------
// 5. Boundaries and settling
// ---------------------------------------------------------------------------

#[test]
fn test_wrap_keeps_particles_within_margin() {
    let boundary = Boundary::Wrap { margin: 50.0 };
    let cases = [(-80.0, 10.0), (1400.0, 10.0), (10.0, -51.0), (10.0, 900.0)];
    for (x, y) in cases {
        let mut p = Particle::at(Vec2::new(x, y));
        boundary.apply(&mut p, VIEW);
        assert!(
            p.position.x >= -50.0 && p.position.x <= VIEW.width + 50.0,
            "x {} escaped for start ({x}, {y})",
            p.position.x
        );
        assert!(
            p.position.y >= -50.0 && p.position.y <= VIEW.height + 50.0,
            "y {} escaped for start ({x}, {y})",
            p.position.y
        );
    }
}

#[test]
fn test_clamp_insets_by_size_and_keeps_velocity() {
    let mut p = moving(2000.0, -20.0, 5.0, -5.0).with_size(3.0);
    Boundary::Clamp.apply(&mut p, VIEW);
    assert_eq!(p.position, Vec2::new(VIEW.width - 3.0, 3.0));
    assert_eq!(p.velocity, Vec2::new(5.0, -5.0));
}

#[test]
fn test_settle_is_one_way() {
    let mut p = moving(10.0, 20.0, 0.1, 0.0);
    assert!(detect_settle(&mut p, 0.5), "slow particle should settle");
    assert_eq!(p.target, Vec2::new(10.0, 20.0));

    p.velocity = Vec2::new(30.0, 0.0);
    p.position = Vec2::new(90.0, 20.0);
    assert!(!detect_settle(&mut p, 0.5));
    assert!(p.settled, "a settled particle must stay settled");
    assert_eq!(p.target, Vec2::new(10.0, 20.0), "rest target is recorded once");
}
