//! Ownership of the single mounted drawing surface.
//!
//! The document side is abstracted behind [`SurfaceHost`]; the wasm front
//! implements it over `web-sys`, [`crate::headless::HeadlessHost`] keeps an
//! in-memory document for tests and native runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Element ids of every surface any field variant may have mounted.
/// Creating a surface removes all of them first.
pub const KNOWN_SURFACE_IDS: [&str; 4] = ["gravity-field", "aurora-bg", "circle-burst", "liquid-burst"];

/// Legacy background wrapper the page may still contain.
pub const AURA_CONTAINER: Container = Container {
    selector: ".aura-background-component",
    placement: Placement::Replace,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

/// How the surface is inserted into a matching container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Insert as first child and make the container a positioning context.
    Prepend,
    /// Empty the container, then append.
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    pub selector: &'static str,
    pub placement: Placement,
}

impl Container {
    pub const fn prepend(selector: &'static str) -> Self {
        Self {
            selector,
            placement: Placement::Prepend,
        }
    }
}

/// Where a surface ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    Container(Container),
    /// No container matched; first child of `<body>`.
    BodyStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    Fixed,
    Absolute,
}

/// Static description of a variant's surface element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSpec {
    pub id: &'static str,
    /// Candidate containers, tried in order.
    pub containers: &'static [Container],
    pub positioning: Positioning,
    pub z_index: i32,
    pub background: &'static str,
}

impl SurfaceSpec {
    /// Inline style for a full-viewport, click-through surface.
    pub fn css(&self) -> String {
        let (position, height) = match self.positioning {
            Positioning::Fixed => ("fixed", "100%"),
            Positioning::Absolute => ("absolute", "100vh"),
        };
        format!(
            "position: {position}; top: 0; left: 0; width: 100%; height: {height}; \
             z-index: {}; pointer-events: none; background: {};",
            self.z_index, self.background
        )
    }
}

/// Opaque id of a pending animation-frame request.
pub type FrameHandle = i32;

/// Document operations the surface manager needs.
///
/// None of these fail: a host that cannot perform an operation degrades
/// (missing elements are ignored, a missing 2D context renders nothing).
pub trait SurfaceHost {
    fn viewport(&self) -> Viewport;
    /// Remove the element with `id` if present. Returns whether one was removed.
    fn remove_element(&mut self, id: &str) -> bool;
    fn has_container(&self, selector: &str) -> bool;
    fn insert_surface(&mut self, spec: &SurfaceSpec, mount: Mount);
    fn resize_surface(&mut self, viewport: Viewport);
    /// Detach the surface. Returns `false` if it was not attached.
    fn remove_surface(&mut self) -> bool;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

pub struct SurfaceManager<H: SurfaceHost> {
    host: H,
    spec: SurfaceSpec,
    mount: Option<Mount>,
    viewport: Viewport,
    pending_frame: Option<FrameHandle>,
}

impl<H: SurfaceHost> SurfaceManager<H> {
    pub fn new(host: H, spec: SurfaceSpec) -> Self {
        let viewport = host.viewport();
        Self {
            host,
            spec,
            mount: None,
            viewport,
            pending_frame: None,
        }
    }

    /// Tear down stale surfaces, mount a fresh one and size it to the
    /// viewport.
    pub fn create(&mut self) -> Viewport {
        for id in KNOWN_SURFACE_IDS {
            if self.host.remove_element(id) {
                debug!(id, "removed stale surface");
            }
        }

        let mount = self
            .spec
            .containers
            .iter()
            .copied()
            .find(|c| self.host.has_container(c.selector))
            .map(Mount::Container)
            .unwrap_or(Mount::BodyStart);

        self.host.insert_surface(&self.spec, mount);
        self.mount = Some(mount);
        info!(id = self.spec.id, ?mount, "surface mounted");
        self.resize()
    }

    /// Re-read the viewport and resize the backing surface. Callers must
    /// recompute anything derived from the old size.
    pub fn resize(&mut self) -> Viewport {
        self.viewport = self.host.viewport();
        if self.mount.is_some() {
            self.host.resize_surface(self.viewport);
        }
        self.viewport
    }

    /// Cancel the pending frame and detach the surface. Safe to call any
    /// number of times, including after the surface was removed externally.
    pub fn destroy(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.host.cancel_frame(handle);
        }
        if self.mount.take().is_some() {
            let removed = self.host.remove_surface();
            debug!(id = self.spec.id, removed, "surface destroyed");
        }
    }

    pub fn set_pending_frame(&mut self, handle: FrameHandle) {
        self.pending_frame = Some(handle);
    }

    pub fn take_pending_frame(&mut self) -> Option<FrameHandle> {
        self.pending_frame.take()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    pub fn mount(&self) -> Option<Mount> {
        self.mount
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn spec(&self) -> &SurfaceSpec {
        &self.spec
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
