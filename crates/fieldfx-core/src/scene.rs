use crate::config::EffectConfig;
use crate::forces::gravity::Attractor;
use crate::input::{InputState, Theme};
use crate::particle::ParticleStore;
use crate::surface::Viewport;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Timing for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Seconds since the previous frame, already clamped.
    pub dt: f32,
    /// `dt` in reference frames.
    pub k: f32,
}

impl Frame {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            k: crate::math::frame_scale(dt),
        }
    }
}

/// Body circling the centre during the orbit and merge phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbiter {
    pub angle: f32,
    pub distance: f32,
    pub size: f32,
    /// Radians per reference frame.
    pub speed: f32,
    pub phase: f32,
}

impl Orbiter {
    pub fn position(&self, center: Vec2, distance: f32) -> Vec2 {
        center + Vec2::from_angle(self.angle) * distance
    }
}

/// Everything a phase rule reads or mutates.
pub struct Scene {
    pub config: EffectConfig,
    pub viewport: Viewport,
    pub center: Vec2,
    pub particles: ParticleStore,
    pub orbiters: Vec<Orbiter>,
    pub attractor: Attractor,
    pub input: InputState,
    /// Seconds since the active phase was entered.
    pub phase_time: f32,
    /// Seconds since the engine started.
    pub elapsed: f32,
    /// Slowly rotating global hue offset, degrees.
    pub hue: f32,
    /// Radius of the central disc while merging.
    pub core_radius: f32,
    pub rng: SmallRng,
}

impl Scene {
    pub fn new(config: EffectConfig, viewport: Viewport, seed: u64) -> Self {
        let center = viewport.center();
        let attractor = Attractor::new(center, config.gravity_field.attractor_mass);
        Self {
            config,
            viewport,
            center,
            particles: ParticleStore::new(),
            orbiters: Vec::new(),
            attractor,
            input: InputState::centered(viewport),
            phase_time: 0.0,
            elapsed: 0.0,
            hue: 0.0,
            core_radius: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Adopt a new viewport size and recompute the cached centre.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.center = viewport.center();
    }

    pub fn theme(&self) -> Theme {
        self.input.theme
    }
}
