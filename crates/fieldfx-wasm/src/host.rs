use fieldfx_core::surface::{FrameHandle, Mount, Placement, SurfaceHost, SurfaceSpec, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

/// [`SurfaceHost`] over the live DOM.
///
/// Every operation degrades instead of failing: a missing body, container
/// or 2D context leaves the canvas unmounted or rendering nothing.
pub struct WebHost {
    window: Window,
    document: Document,
    canvas: Option<HtmlCanvasElement>,
    context: Option<CanvasRenderingContext2d>,
}

impl WebHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            canvas: None,
            context: None,
        }
    }

    pub fn context(&self) -> Option<&CanvasRenderingContext2d> {
        self.context.as_ref()
    }

    fn create_canvas(&self, spec: &SurfaceSpec) -> Option<HtmlCanvasElement> {
        let canvas = self
            .document
            .create_element("canvas")
            .ok()?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        canvas.set_id(spec.id);
        let _ = canvas.set_attribute("style", &spec.css());
        Some(canvas)
    }

    fn prepend_to_body(&self, canvas: &HtmlCanvasElement) {
        if let Some(body) = self.document.body() {
            let _ = body.insert_before(canvas, body.first_child().as_ref());
        }
    }
}

impl SurfaceHost for WebHost {
    fn viewport(&self) -> Viewport {
        let dimension = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        Viewport::new(dimension(self.window.inner_width()), dimension(self.window.inner_height()))
    }

    fn remove_element(&mut self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.remove();
                true
            }
            None => false,
        }
    }

    fn has_container(&self, selector: &str) -> bool {
        matches!(self.document.query_selector(selector), Ok(Some(_)))
    }

    fn insert_surface(&mut self, spec: &SurfaceSpec, mount: Mount) {
        let Some(canvas) = self.create_canvas(spec) else {
            return;
        };

        let container = match mount {
            Mount::Container(c) => self
                .document
                .query_selector(c.selector)
                .ok()
                .flatten()
                .map(|el| (el, c.placement)),
            Mount::BodyStart => None,
        };

        match container {
            Some((el, Placement::Prepend)) => {
                if let Some(html) = el.dyn_ref::<HtmlElement>() {
                    let _ = html.style().set_property("position", "relative");
                }
                let _ = el.insert_before(&canvas, el.first_child().as_ref());
            }
            Some((el, Placement::Replace)) => {
                el.set_inner_html("");
                let _ = el.append_child(&canvas);
            }
            None => self.prepend_to_body(&canvas),
        }

        self.context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
        self.canvas = Some(canvas);
    }

    fn resize_surface(&mut self, viewport: Viewport) {
        if let Some(canvas) = &self.canvas {
            canvas.set_width(viewport.width.max(0.0) as u32);
            canvas.set_height(viewport.height.max(0.0) as u32);
        }
    }

    fn remove_surface(&mut self) -> bool {
        self.context = None;
        match self.canvas.take() {
            Some(canvas) => {
                let attached = canvas.parent_node().is_some();
                canvas.remove();
                attached
            }
            None => false,
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}
