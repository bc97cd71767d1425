use crate::surface::Viewport;
use crate::trail::Trail;
use glam::Vec2;
use rand::Rng;

/// One simulated body.
///
/// Fields that only some variants use keep neutral defaults elsewhere; the
/// per-particle random constants (`friction`, `wobble_speed`, `delay`, ...)
/// are fixed when the particle is generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Current drawn radius, may grow transiently near the pointer.
    pub size: f32,
    pub base_size: f32,
    pub mass: f32,
    /// Burst destination, or the rest position once settled.
    pub target: Vec2,
    pub settled: bool,
    /// Per-reference-frame velocity multiplier used by variants with
    /// per-particle drag.
    pub friction: f32,
    pub wobble: f32,
    pub wobble_speed: f32,
    /// Seconds before this particle starts its burst flight.
    pub delay: f32,
    /// Burst flight progress in [0,1].
    pub progress: f32,
    pub hue: f32,
    pub alpha: f32,
    pub trail: Option<Trail>,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: 1.0,
            base_size: 1.0,
            mass: 1.0,
            target: Vec2::ZERO,
            settled: false,
            friction: 1.0,
            wobble: 0.0,
            wobble_speed: 0.0,
            delay: 0.0,
            progress: 0.0,
            hue: 0.0,
            alpha: 1.0,
            trail: None,
        }
    }
}

impl Particle {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            target: position,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self.base_size = size;
        self
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Flat particle collection for the active phase batch.
///
/// The store only allocates and iterates; all per-frame mutation lives in
/// the phase rules.
#[derive(Debug, Default, Clone)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current batch with `count` particles from `generator`.
    pub fn seed<F>(&mut self, count: usize, generator: F)
    where
        F: FnMut(usize) -> Particle,
    {
        self.particles.clear();
        self.particles.reserve(count);
        self.particles.extend((0..count).map(generator));
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut ParticleStore {
    type Item = &'a mut Particle;
    type IntoIter = std::slice::IterMut<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Result of [`sample_burst_target`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSample {
    pub point: Vec2,
    /// Every attempt landed inside the clear radius and the point was
    /// projected out of it instead.
    pub exhausted: bool,
}

/// Draw a burst destination uniformly inside `viewport`, rejecting points
/// closer than `clear_radius` to its centre.
///
/// Retries are capped at `max_attempts`. When every candidate is rejected
/// (a clear radius that covers most or all of the surface) the last
/// candidate is pushed radially to just outside the clear radius, so the
/// dead zone is never targeted even though the point may then fall outside
/// the surface.
pub fn sample_burst_target<R: Rng + ?Sized>(
    rng: &mut R,
    viewport: Viewport,
    clear_radius: f32,
    max_attempts: u32,
) -> TargetSample {
    let center = viewport.center();
    let mut candidate = center;
    for _ in 0..max_attempts.max(1) {
        candidate = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        if candidate.distance(center) >= clear_radius {
            return TargetSample {
                point: candidate,
                exhausted: false,
            };
        }
    }

    let outward = (candidate - center).try_normalize().unwrap_or(Vec2::X);
    TargetSample {
        point: center + outward * (clear_radius + 1.0),
        exhausted: true,
    }
}
