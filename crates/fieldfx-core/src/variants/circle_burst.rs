//! A pulsing disc that bursts into dots. Dots coast to rest, remember where
//! they stopped, and spring back there after the pointer pushes them away.

use crate::draw::{Color, DrawCommand, DrawList};
use crate::forces::pointer::{self, Repulsor};
use crate::forces::spring;
use crate::integrate::{detect_settle, Boundary, Integrator};
use crate::math::REFERENCE_FPS;
use crate::particle::Particle;
use crate::phase::{Phase, PhaseRule, PhaseTable};
use crate::scene::{Frame, Scene};
use crate::surface::{Positioning, SurfaceSpec, AURA_CONTAINER};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use tracing::debug;

pub const SURFACE: SurfaceSpec = SurfaceSpec {
    id: "circle-burst",
    containers: &[AURA_CONTAINER],
    positioning: Positioning::Fixed,
    z_index: -1,
    background: "#ffffff",
};

/// Halo drawn around the pulsing disc.
const HALO_WIDTH: f32 = 20.0;

pub fn phase_table() -> PhaseTable {
    PhaseTable::new(Phase::Pulse)
        .with(
            Phase::Pulse,
            PhaseRule {
                enter: PhaseRule::noop_enter,
                update: hold,
                draw: draw_pulse,
                next: pulse_done,
            },
        )
        .with(
            Phase::Reactive,
            PhaseRule {
                enter: burst,
                update: scatter,
                draw: draw_scatter,
                next: PhaseRule::terminal,
            },
        )
}

/// Pulse progress in reference-frame units.
pub fn pulse_progress(scene: &Scene) -> f32 {
    scene.phase_time * REFERENCE_FPS * scene.config.circle_burst.pulse_rate
}

fn hold(_scene: &mut Scene, _frame: &Frame) {}

fn draw_pulse(scene: &Scene, _frame: &Frame, list: &mut DrawList) {
    let cfg = &scene.config.circle_burst;
    list.push(DrawCommand::Fill { color: Color::WHITE });

    let radius = cfg.core_radius * (1.0 + (pulse_progress(scene) * 5.0).sin() * 0.1);
    list.circle(scene.center, radius, cfg.ink);
    list.circle(scene.center, radius + HALO_WIDTH, Color::rgba(0, 0, 0, 0.05));
}

fn pulse_done(scene: &Scene) -> Option<Phase> {
    (scene.phase_time > scene.config.circle_burst.pulse_duration).then_some(Phase::Reactive)
}

fn burst(scene: &mut Scene) {
    let cfg = &scene.config.circle_burst;
    let center = scene.center;
    let count = cfg.particle_count;
    let rng = &mut scene.rng;

    scene.particles.seed(count, |i| {
        let angle = TAU * i as f32 / count as f32 + (rng.gen::<f32>() - 0.5) * 0.3;
        let speed = cfg.burst_speed_min + rng.gen::<f32>() * cfg.burst_speed_spread;
        let size = cfg.size_min + rng.gen::<f32>() * cfg.size_spread;

        let mut p = Particle::at(center).with_size(size);
        p.velocity = Vec2::from_angle(angle) * speed;
        p.friction = cfg.friction_min + rng.gen::<f32>() * cfg.friction_spread;
        p
    });
    debug!(count, "circle burst");
}

fn scatter(scene: &mut Scene, frame: &Frame) {
    let Scene {
        config,
        particles,
        input,
        viewport,
        ..
    } = scene;
    let cfg = &config.circle_burst;

    let repulsor = Repulsor {
        radius: cfg.repel_radius,
        strength: cfg.repel_strength,
        exponent: 1.0,
    };
    let integrator = Integrator {
        force_scale: 1.0,
        damping: 1.0,
        max_speed: cfg.max_speed,
    };
    let boundary = Boundary::Reflect {
        restitution: cfg.restitution,
    };

    for p in particles.iter_mut() {
        let push = pointer::repulsion(&repulsor, input.pointer, p.position);
        p.size = p.base_size * (1.0 + push.proximity * cfg.grow);

        let mut force = push.force;
        if p.settled {
            force += spring::return_to(p.target, p.position, cfg.return_force);
        }

        integrator.with_damping(p.friction).step(p, force, Vec2::ZERO, frame.k);
        detect_settle(p, cfg.settle_speed);
        boundary.apply(p, *viewport);
    }
}

fn draw_scatter(scene: &Scene, _frame: &Frame, list: &mut DrawList) {
    let cfg = &scene.config.circle_burst;
    list.push(DrawCommand::Fill {
        color: Color::WHITE.with_alpha(cfg.fade_alpha),
    });
    for p in &scene.particles {
        list.circle(p.position, p.size, cfg.ink);
    }
}
