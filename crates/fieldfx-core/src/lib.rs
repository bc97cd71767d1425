//! Decorative 2D particle fields for full-viewport canvas backgrounds.
//!
//! The simulation is platform-agnostic: [`engine::Engine`] advances a
//! [`scene::Scene`] by one frame and fills a [`draw::DrawList`], while
//! [`surface::SurfaceManager`] owns the mounted drawing surface through a
//! [`surface::SurfaceHost`] implementation supplied by the embedder.
pub mod animation;
pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod forces;
pub mod headless;
pub mod input;
pub mod integrate;
pub mod math;
pub mod particle;
pub mod phase;
pub mod scene;
pub mod surface;
pub mod trail;
pub mod variants;

pub use animation::{Animation, FrameClock};
pub use config::EffectConfig;
pub use engine::Engine;
pub use error::ConfigError;
pub use variants::Variant;
