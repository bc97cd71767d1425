use crate::surface::{FrameHandle, Mount, SurfaceHost, SurfaceSpec, Viewport};

/// A surface as the in-memory document sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSurface {
    pub id: String,
    pub mount: Mount,
    pub size: Viewport,
}

/// In-memory [`SurfaceHost`]: a flat set of element ids and container
/// selectors, no rendering.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    viewport: Viewport,
    elements: Vec<String>,
    containers: Vec<String>,
    surface: Option<HeadlessSurface>,
    cancelled: Vec<FrameHandle>,
}

impl HeadlessHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
            containers: Vec::new(),
            surface: None,
            cancelled: Vec::new(),
        }
    }

    pub fn with_container(mut self, selector: &str) -> Self {
        self.containers.push(selector.to_owned());
        self
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.push(id.to_owned());
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e == id)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn surface(&self) -> Option<&HeadlessSurface> {
        self.surface.as_ref()
    }

    pub fn cancelled_frames(&self) -> &[FrameHandle] {
        &self.cancelled
    }

    /// Simulate page code removing the surface behind the manager's back.
    pub fn detach_externally(&mut self) {
        if let Some(surface) = self.surface.take() {
            self.elements.retain(|e| *e != surface.id);
        }
    }
}

impl SurfaceHost for HeadlessHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn remove_element(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e != id);
        if self.surface.as_ref().is_some_and(|s| s.id == id) {
            self.surface = None;
        }
        self.elements.len() != before
    }

    fn has_container(&self, selector: &str) -> bool {
        self.containers.iter().any(|c| c == selector)
    }

    fn insert_surface(&mut self, spec: &SurfaceSpec, mount: Mount) {
        self.elements.push(spec.id.to_owned());
        self.surface = Some(HeadlessSurface {
            id: spec.id.to_owned(),
            mount,
            size: Viewport::new(0.0, 0.0),
        });
    }

    fn resize_surface(&mut self, viewport: Viewport) {
        if let Some(surface) = self.surface.as_mut() {
            surface.size = viewport;
        }
    }

    fn remove_surface(&mut self) -> bool {
        match self.surface.take() {
            Some(surface) => {
                self.elements.retain(|e| *e != surface.id);
                true
            }
            None => false,
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}
