//! Liquid merge burst: orbiters circle the centre, spiral into one disc,
//! the disc bursts into dots that fly to targets outside a clear zone, and
//! the dots then ripple away from the pointer while springing home.

use crate::draw::{Color, DrawCommand, DrawList, GradientStop};
use crate::forces::dead_zone::{self, DeadZone};
use crate::forces::pointer::{self, Repulsor};
use crate::forces::spring;
use crate::input::Theme;
use crate::integrate::{Boundary, Integrator};
use crate::math::{ease_out_cubic, per_frame};
use crate::particle::{sample_burst_target, Particle};
use crate::phase::{Phase, PhaseRule, PhaseTable};
use crate::scene::{Frame, Orbiter, Scene};
use crate::surface::{Container, Positioning, SurfaceSpec, AURA_CONTAINER};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use tracing::{debug, warn};

pub const SURFACE: SurfaceSpec = SurfaceSpec {
    id: "liquid-burst",
    containers: &[
        Container::prepend(".hero-section"),
        Container::prepend("#hero"),
        Container::prepend("section"),
        AURA_CONTAINER,
    ],
    positioning: Positioning::Absolute,
    z_index: 0,
    background: "transparent",
};

/// Orbit radius wobble amplitude in pixels.
const ORBIT_WOBBLE: f32 = 15.0;
/// Merge progress after which the central disc appears.
const DISC_REVEAL: f32 = 0.3;
/// Burst progress over which the central disc shrinks away.
const DISC_SHRINK: f32 = 0.3;
/// Spatial frequency coupling a dot's drift to its target position.
const DRIFT_COUPLING: f32 = 0.005;

pub fn phase_table() -> PhaseTable {
    PhaseTable::new(Phase::Orbit)
        .with(
            Phase::Orbit,
            PhaseRule {
                enter: spawn_orbiters,
                update: orbit,
                draw: draw_orbit,
                next: |s| (s.phase_time > s.config.liquid_burst.orbit_duration).then_some(Phase::Merge),
            },
        )
        .with(
            Phase::Merge,
            PhaseRule {
                enter: PhaseRule::noop_enter,
                update: merge,
                draw: draw_merge,
                next: |s| (s.phase_time > s.config.liquid_burst.merge_duration).then_some(Phase::Burst),
            },
        )
        .with(
            Phase::Burst,
            PhaseRule {
                enter: spawn_dots,
                update: fly,
                draw: draw_burst,
                next: |s| (s.phase_time > s.config.liquid_burst.burst_duration).then_some(Phase::Reactive),
            },
        )
        .with(
            Phase::Reactive,
            PhaseRule {
                enter: snap_to_targets,
                update: react,
                draw: draw_dots,
                next: PhaseRule::terminal,
            },
        )
}

/// Fill colour for the active theme.
pub fn ink(scene: &Scene) -> Color {
    let cfg = &scene.config.liquid_burst;
    match scene.theme() {
        Theme::Dark => cfg.dark_color,
        Theme::Light => cfg.light_color,
    }
}

// ---------------------------------------------------------------------------
// Orbit
// ---------------------------------------------------------------------------

fn spawn_orbiters(scene: &mut Scene) {
    let cfg = &scene.config.liquid_burst;
    let count = cfg.orbiter_count;
    let rng = &mut scene.rng;

    scene.orbiters = (0..count)
        .map(|i| Orbiter {
            angle: TAU * i as f32 / count as f32,
            distance: cfg.orbit_distance_min + rng.gen::<f32>() * cfg.orbit_distance_spread,
            size: cfg.orbiter_size_min + rng.gen::<f32>() * cfg.orbiter_size_spread,
            speed: cfg.orbiter_speed_min + rng.gen::<f32>() * cfg.orbiter_speed_spread,
            phase: rng.gen::<f32>() * TAU,
        })
        .collect();
}

fn orbit(scene: &mut Scene, frame: &Frame) {
    for orb in &mut scene.orbiters {
        orb.angle += orb.speed * frame.k;
    }
}

fn draw_orbit(scene: &Scene, _frame: &Frame, list: &mut DrawList) {
    list.push(DrawCommand::Clear);
    let color = ink(scene);
    let t = scene.phase_time;
    for orb in &scene.orbiters {
        let distance = orb.distance + (t * 3.0 + orb.phase).sin() * ORBIT_WOBBLE;
        let size = orb.size * (1.0 + (t * 4.0 + orb.phase).sin() * 0.2);
        list.circle(orb.position(scene.center, distance), size, color);
    }
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

/// Eased merge progress in [0,1].
pub fn merge_progress(scene: &Scene) -> f32 {
    ease_out_cubic(scene.phase_time / scene.config.liquid_burst.merge_duration)
}

fn merge(scene: &mut Scene, frame: &Frame) {
    let eased = merge_progress(scene);
    let shrink = per_frame(scene.config.liquid_burst.spiral, frame.k);
    for orb in &mut scene.orbiters {
        orb.angle += orb.speed * (1.0 + eased * 4.0) * frame.k;
        orb.distance *= shrink;
    }
    scene.core_radius = eased * scene.config.liquid_burst.merged_radius;
}

fn draw_merge(scene: &Scene, _frame: &Frame, list: &mut DrawList) {
    list.push(DrawCommand::Clear);
    let color = ink(scene);
    let eased = merge_progress(scene);
    let core = scene.core_radius;

    if eased > DISC_REVEAL {
        let glow = scene.config.liquid_burst.dark_color;
        list.push(DrawCommand::Glow {
            center: scene.center,
            inner_radius: core * 0.5,
            outer_radius: core * 2.0,
            stops: vec![
                GradientStop::new(0.0, glow.with_alpha(eased * 0.2)),
                GradientStop::new(1.0, glow.with_alpha(0.0)),
            ],
        });
        list.circle(scene.center, core, color);
    }

    for orb in &scene.orbiters {
        let size = orb.size * (1.0 - eased);
        if size > 1.0 && orb.distance > 5.0 {
            list.circle(orb.position(scene.center, orb.distance), size, color);
        }
    }
}

// ---------------------------------------------------------------------------
// Burst
// ---------------------------------------------------------------------------

fn spawn_dots(scene: &mut Scene) {
    let cfg = &scene.config.liquid_burst;
    let viewport = scene.viewport;
    let center = scene.center;
    let count = cfg.particle_count;
    let rng = &mut scene.rng;
    let mut exhausted = 0usize;

    scene.particles.seed(count, |_| {
        let sample = sample_burst_target(&mut *rng, viewport, cfg.clear_radius, cfg.max_target_attempts);
        if sample.exhausted {
            exhausted += 1;
        }

        let mut p = Particle::at(center).with_size(cfg.dot_size_min + rng.gen::<f32>() * cfg.dot_size_spread);
        p.target = sample.point;
        p.wobble = rng.gen::<f32>() * TAU;
        p.wobble_speed = cfg.wobble_speed_min + rng.gen::<f32>() * cfg.wobble_speed_spread;
        p.delay = rng.gen::<f32>() * cfg.max_delay;
        p
    });
    scene.orbiters.clear();

    if exhausted > 0 {
        warn!(
            exhausted,
            clear_radius = cfg.clear_radius,
            "clear radius leaves little room on this surface, some targets were projected"
        );
    }
    debug!(count, "liquid burst seeded");
}

fn fly(scene: &mut Scene, _frame: &Frame) {
    let travel = scene.config.liquid_burst.travel_time();
    let center = scene.center;
    let t = scene.phase_time;
    for p in scene.particles.iter_mut() {
        p.progress = ((t - p.delay).max(0.0) / travel).min(1.0);
        p.position = center + (p.target - center) * ease_out_cubic(p.progress);
    }
}

fn draw_burst(scene: &Scene, frame: &Frame, list: &mut DrawList) {
    let cfg = &scene.config.liquid_burst;
    let progress = (scene.phase_time / cfg.burst_duration).min(1.0);

    list.push(DrawCommand::Clear);
    if progress < DISC_SHRINK {
        let radius = cfg.burst_core_radius * (1.0 - progress / DISC_SHRINK);
        list.circle(scene.center, radius, ink(scene));
    }
    draw_particles(scene, frame, list);
}

// ---------------------------------------------------------------------------
// Reactive
// ---------------------------------------------------------------------------

/// Land every dot exactly on its target at rest.
fn snap_to_targets(scene: &mut Scene) {
    for p in scene.particles.iter_mut() {
        p.position = p.target;
        p.velocity = Vec2::ZERO;
        p.progress = 1.0;
    }
}

fn react(scene: &mut Scene, frame: &Frame) {
    let Scene {
        config,
        particles,
        input,
        viewport,
        center,
        ..
    } = scene;
    let cfg = &config.liquid_burst;

    let wave = Repulsor {
        radius: cfg.wave_radius,
        strength: cfg.wave_strength,
        exponent: cfg.wave_exponent,
    };
    let zone = DeadZone {
        center: *center,
        radius: cfg.clear_radius,
        strength: cfg.dead_zone_strength,
        exponent: cfg.dead_zone_exponent,
    };
    let integrator = Integrator {
        force_scale: 1.0,
        damping: cfg.damping,
        max_speed: cfg.max_speed,
    };

    for p in particles.iter_mut() {
        p.wobble += p.wobble_speed * frame.k;
        let drift = Vec2::new(
            (p.wobble + p.target.x * DRIFT_COUPLING).sin(),
            (p.wobble + p.target.y * DRIFT_COUPLING).cos(),
        ) * cfg.drift;

        let force = pointer::repulsion(&wave, input.pointer, p.position).force
            + dead_zone::repulsion(&zone, p.position)
            + spring::return_to(p.target, p.position, cfg.return_force);

        integrator.step(p, force, drift, frame.k);
        Boundary::Clamp.apply(p, *viewport);
    }
}

fn draw_dots(scene: &Scene, frame: &Frame, list: &mut DrawList) {
    list.push(DrawCommand::Clear);
    draw_particles(scene, frame, list);
}

fn draw_particles(scene: &Scene, _frame: &Frame, list: &mut DrawList) {
    let color = ink(scene);
    for p in &scene.particles {
        list.circle(p.position, p.size, color);
    }
}
