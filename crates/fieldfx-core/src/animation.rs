use crate::config::EffectConfig;
use crate::draw::DrawList;
use crate::engine::Engine;
use crate::input::Theme;
use crate::surface::{FrameHandle, SurfaceHost, SurfaceManager};
use crate::variants::Variant;
use glam::Vec2;
use tracing::info;

/// Turns host frame timestamps (milliseconds, as passed to
/// `requestAnimationFrame` callbacks) into frame deltas in seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous timestamp; zero on the first call or if
    /// the clock went backwards.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last {
            Some(last) if timestamp_ms > last => ((timestamp_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        self.last = Some(timestamp_ms);
        dt
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// A mounted field: surface, engine and frame clock with a teardown guard.
///
/// After [`Animation::destroy`] every entry point is a no-op, so a frame
/// callback the host had already queued can fire once more harmlessly.
pub struct Animation<H: SurfaceHost> {
    surface: SurfaceManager<H>,
    engine: Engine,
    clock: FrameClock,
    destroyed: bool,
}

impl<H: SurfaceHost> Animation<H> {
    pub fn mount(host: H, variant: Variant, config: &EffectConfig, seed: u64) -> Self {
        let mut surface = SurfaceManager::new(host, variant.surface_spec());
        let viewport = surface.create();
        let engine = Engine::new(variant, config, viewport, seed);
        Self {
            surface,
            engine,
            clock: FrameClock::new(),
            destroyed: false,
        }
    }

    /// Run one frame for the host timestamp. Returns `None` once destroyed.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Option<&DrawList> {
        if self.destroyed {
            return None;
        }
        self.surface.take_pending_frame();
        let dt = self.clock.advance(timestamp_ms);
        Some(self.engine.tick(dt))
    }

    /// Record the host's handle for the next frame request so destroy can
    /// cancel it. Returns `false` (and keeps nothing) once destroyed; the
    /// host should cancel the request itself in that case.
    pub fn frame_requested(&mut self, handle: FrameHandle) -> bool {
        if self.destroyed {
            return false;
        }
        self.surface.set_pending_frame(handle);
        true
    }

    pub fn resize(&mut self) {
        if self.destroyed {
            return;
        }
        let viewport = self.surface.resize();
        self.engine.resize(viewport);
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        if !self.destroyed {
            self.engine.set_pointer(position);
        }
    }

    pub fn pointer_leave(&mut self) {
        if !self.destroyed {
            self.engine.pointer_leave();
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if !self.destroyed {
            self.engine.set_theme(theme);
        }
    }

    /// Cancel the pending frame and remove the surface. Idempotent.
    pub fn destroy(&mut self) {
        if !self.destroyed {
            info!(variant = %self.engine.variant(), frames = self.engine.frames(), "animation destroyed");
        }
        self.destroyed = true;
        self.surface.destroy();
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn surface(&self) -> &SurfaceManager<H> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut SurfaceManager<H> {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1234.0), 0.0);
        let dt = clock.advance(1234.0 + 16.0);
        assert!((dt - 0.016).abs() < 1e-6, "dt = {dt}");
    }

    #[test]
    fn backwards_clock_yields_zero() {
        let mut clock = FrameClock::new();
        clock.advance(100.0);
        assert_eq!(clock.advance(50.0), 0.0);
        assert!(clock.advance(150.0) > 0.0);
    }
}
