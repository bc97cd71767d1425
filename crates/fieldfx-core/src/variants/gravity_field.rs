//! Trails orbiting an invisible attractor that eases after the pointer.
//!
//! Single-phase: the field is seeded on entry to [`Phase::Reactive`] and
//! stays there.

use crate::draw::{Color, DrawCommand, DrawList, GradientStop};
use crate::forces::gravity::{self, GravityWell};
use crate::integrate::{Boundary, Integrator};
use crate::particle::Particle;
use crate::phase::{Phase, PhaseRule, PhaseTable};
use crate::scene::{Frame, Scene};
use crate::surface::{Positioning, SurfaceSpec, AURA_CONTAINER};
use crate::trail::Trail;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use tracing::debug;

pub const SURFACE: SurfaceSpec = SurfaceSpec {
    id: "gravity-field",
    containers: &[AURA_CONTAINER],
    positioning: Positioning::Fixed,
    z_index: -1,
    background: "linear-gradient(135deg, #0f0f1a 0%, #1a1a2e 50%, #0a0a15 100%)",
};

/// (radius, alpha) of the stacked attractor halo, outermost first.
const GLOW_LAYERS: [(f32, f32); 4] = [(200.0, 0.03), (120.0, 0.05), (60.0, 0.08), (20.0, 0.15)];

const BASE_HUE: f32 = 200.0;
const HUE_RANGE: f32 = 80.0;

pub fn phase_table() -> PhaseTable {
    PhaseTable::new(Phase::Reactive).with(
        Phase::Reactive,
        PhaseRule {
            enter: seed_field,
            update: update_field,
            draw: draw_field,
            next: PhaseRule::terminal,
        },
    )
}

fn seed_field(scene: &mut Scene) {
    let cfg = &scene.config.gravity_field;
    let count = cfg.particle_count(scene.viewport.width);
    let origin = scene.attractor.position;
    let rng = &mut scene.rng;

    scene.particles.seed(count, |i| {
        let angle = TAU * i as f32 / count as f32 + rng.gen::<f32>() * 0.5;
        let radius = cfg.ring_min_radius + rng.gen::<f32>() * cfg.ring_spread;
        let tangent = Vec2::new(angle.sin(), -angle.cos());
        let speed_x = cfg.orbit_speed_min + rng.gen::<f32>() * cfg.orbit_speed_spread;
        let speed_y = cfg.orbit_speed_min + rng.gen::<f32>() * cfg.orbit_speed_spread;

        let mut p = Particle::at(origin + Vec2::from_angle(angle) * radius)
            .with_size(1.0 + rng.gen::<f32>() * 3.0);
        p.velocity = Vec2::new(tangent.x * speed_x, tangent.y * speed_y);
        p.mass = 1.0 + rng.gen::<f32>() * 2.0;
        p.hue = BASE_HUE + rng.gen::<f32>() * 60.0;
        p.trail = Some(Trail::new(cfg.trail_min + rng.gen_range(0..cfg.trail_spread.max(1))));
        p.alpha = 0.6 + rng.gen::<f32>() * 0.4;
        p
    });
    debug!(count, "gravity field seeded");
}

fn update_field(scene: &mut Scene, frame: &Frame) {
    let Scene {
        config,
        particles,
        attractor,
        input,
        viewport,
        hue,
        ..
    } = scene;
    let cfg = &config.gravity_field;

    attractor.follow(input.pointer, cfg.attractor_ease, frame.k);
    let attractor = *attractor;

    let well = GravityWell {
        min_distance: cfg.min_distance,
        max_distance: cfg.max_distance,
        scale: cfg.gravity_scale,
        standoff: cfg.standoff_scale,
    };
    let integrator = Integrator {
        force_scale: 1.0,
        damping: cfg.damping,
        max_speed: cfg.max_speed,
    };
    let boundary = Boundary::Wrap {
        margin: cfg.wrap_margin,
    };

    for p in particles.iter_mut() {
        let position = p.position;
        if let Some(trail) = p.trail.as_mut() {
            trail.push(position);
        }

        let force = gravity::central_force(&well, &attractor, p.position, p.mass);
        integrator.step(p, force, Vec2::ZERO, frame.k);
        boundary.apply(p, *viewport);

        p.hue = BASE_HUE + p.speed() / cfg.max_speed * HUE_RANGE + *hue * 0.1;
    }

    *hue = (*hue + cfg.hue_drift * frame.k) % 360.0;
}

fn draw_field(scene: &Scene, _frame: &Frame, list: &mut DrawList) {
    let cfg = &scene.config.gravity_field;
    list.push(DrawCommand::Fill {
        color: Color::rgba(15, 15, 26, cfg.fade_alpha),
    });

    let halo_hue = scene.hue * 0.2;
    for (radius, alpha) in GLOW_LAYERS {
        list.push(DrawCommand::Glow {
            center: scene.attractor.position,
            inner_radius: 0.0,
            outer_radius: radius,
            stops: vec![
                GradientStop::new(0.0, Color::hsla(220.0 + halo_hue, 80.0, 60.0, alpha)),
                GradientStop::new(0.5, Color::hsla(260.0 + halo_hue, 70.0, 50.0, alpha * 0.5)),
                GradientStop::new(1.0, Color::TRANSPARENT),
            ],
        });
    }

    for p in &scene.particles {
        if let Some(trail) = p.trail.as_ref().filter(|t| t.len() > 1) {
            let mut points = trail.to_vec();
            points.push(p.position);
            list.push(DrawCommand::Trail {
                points,
                width: p.size * 0.8,
                from: Color::hsla(p.hue, 80.0, 60.0, 0.0),
                to: Color::hsla(p.hue, 80.0, 60.0, p.alpha * 0.5),
            });
        }

        list.push(DrawCommand::Glow {
            center: p.position,
            inner_radius: 0.0,
            outer_radius: p.size * 3.0,
            stops: vec![
                GradientStop::new(0.0, Color::hsla(p.hue, 90.0, 70.0, p.alpha)),
                GradientStop::new(0.5, Color::hsla(p.hue, 80.0, 50.0, p.alpha * 0.5)),
                GradientStop::new(1.0, Color::hsla(p.hue, 70.0, 40.0, 0.0)),
            ],
        });
        list.circle(p.position, p.size, Color::hsla(p.hue, 100.0, 80.0, p.alpha));
    }
}
