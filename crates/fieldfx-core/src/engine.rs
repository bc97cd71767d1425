use crate::config::EffectConfig;
use crate::draw::{DrawList, ParticleVertex};
use crate::input::Theme;
use crate::particle::ParticleStore;
use crate::phase::{Phase, PhaseTable};
use crate::scene::{Frame, Scene};
use crate::surface::Viewport;
use crate::variants::Variant;
use glam::Vec2;
use tracing::{debug, info};

/// One running field: a variant's phase table driving a [`Scene`].
///
/// The engine does no scheduling of its own. A host frame driver calls
/// [`Engine::tick`] once per display refresh with the elapsed time, which
/// keeps the simulation testable with synthetic deltas.
pub struct Engine {
    variant: Variant,
    table: PhaseTable,
    phase: Phase,
    scene: Scene,
    draw_list: DrawList,
    frames: u64,
}

impl Engine {
    pub fn new(variant: Variant, config: &EffectConfig, viewport: Viewport, seed: u64) -> Self {
        let table = variant.phase_table();
        let phase = table.initial();
        let mut engine = Self {
            variant,
            table,
            phase,
            scene: Scene::new(config.clone(), viewport, seed),
            draw_list: DrawList::new(),
            frames: 0,
        };
        if let Some(rule) = engine.table.rule(phase).copied() {
            (rule.enter)(&mut engine.scene);
        }
        info!(%variant, %phase, width = viewport.width, height = viewport.height, "engine started");
        engine
    }

    /// Advance one frame by `dt` seconds and return the frame's draw list.
    ///
    /// Non-finite or negative deltas count as zero; deltas above
    /// `max_dt` are clamped to it.
    pub fn tick(&mut self, dt: f32) -> &DrawList {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.scene.config.max_dt)
        } else {
            0.0
        };
        let frame = Frame::new(dt);
        self.scene.phase_time += dt;
        self.scene.elapsed += dt;
        self.frames += 1;
        self.draw_list.clear();

        let Some(rule) = self.table.rule(self.phase).copied() else {
            return &self.draw_list;
        };
        (rule.update)(&mut self.scene, &frame);
        (rule.draw)(&self.scene, &frame, &mut self.draw_list);
        if let Some(next) = (rule.next)(&self.scene) {
            self.enter(next);
        }
        &self.draw_list
    }

    /// Switch to `next`, running its entry hook. Backward or repeated
    /// transitions are ignored.
    fn enter(&mut self, next: Phase) {
        if next.ordinal() <= self.phase.ordinal() {
            return;
        }
        let Some(rule) = self.table.rule(next).copied() else {
            return;
        };
        debug!(
            from = %self.phase,
            to = %next,
            after = self.scene.phase_time,
            "phase transition"
        );
        self.phase = next;
        self.scene.phase_time = 0.0;
        (rule.enter)(&mut self.scene);
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.scene.input.pointer = position;
    }

    /// Pointer left the document: park it at the viewport centre.
    pub fn pointer_leave(&mut self) {
        let viewport = self.scene.viewport;
        self.scene.input.pointer_leave(viewport);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.scene.input.theme = theme;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.scene.resize(viewport);
    }

    /// Pack current particles for hosts that render from linear memory.
    pub fn write_vertices(&self, out: &mut Vec<ParticleVertex>) {
        out.clear();
        out.extend(self.scene.particles.iter().map(|p| ParticleVertex {
            x: p.position.x,
            y: p.position.y,
            size: p.size,
            alpha: p.alpha,
        }));
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.scene.particles
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }
}
