mod host;
mod logging;
mod render;

use fieldfx_core::draw::ParticleVertex;
use fieldfx_core::input::Theme;
use fieldfx_core::{Animation, ConfigError, EffectConfig, Variant};
use glam::Vec2;
use host::WebHost;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, MouseEvent, MutationObserver, MutationObserverInit, Window};

type FrameCallback = Closure<dyn FnMut(f64)>;
type EventCallback = Closure<dyn FnMut(Event)>;
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

struct Runtime {
    animation: Animation<WebHost>,
    vertices: Vec<ParticleVertex>,
}

impl Runtime {
    /// Replay the last frame onto the canvas and refresh the vertex export.
    fn present(&mut self) {
        let animation = &self.animation;
        let viewport = animation.surface().viewport();
        if let Some(ctx) = animation.surface().host().context() {
            render::replay(
                ctx,
                viewport.width as f64,
                viewport.height as f64,
                animation.engine().draw_list(),
            );
        }
        animation.engine().write_vertices(&mut self.vertices);
    }
}

/// A mounted background field driven by `requestAnimationFrame`.
#[wasm_bindgen]
pub struct FieldEffect {
    window: Window,
    runtime: Rc<RefCell<Runtime>>,
    frame: Rc<RefCell<Option<FrameCallback>>>,
    listeners: Vec<(EventTarget, &'static str, EventCallback)>,
    observer: Option<(MutationObserver, ObserverCallback)>,
}

#[wasm_bindgen]
impl FieldEffect {
    /// Mount `variant` (`"gravity-field"`, `"circle-burst"` or
    /// `"liquid-burst"`) with an optional partial JSON config.
    #[wasm_bindgen(constructor)]
    pub fn new(variant: &str, config_json: Option<String>) -> Result<FieldEffect, JsValue> {
        logging::init();
        let variant: Variant = variant.parse().map_err(to_js)?;
        let config = match config_json.as_deref().map(str::trim) {
            Some(json) if !json.is_empty() => EffectConfig::from_json(json).map_err(to_js)?,
            _ => EffectConfig::default(),
        };

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("fieldfx: no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("fieldfx: no document"))?;
        let theme = document_theme(&document);

        let mut animation = Animation::mount(WebHost::new(window.clone(), document), variant, &config, random_seed());
        animation.set_theme(theme);

        web_sys::console::log_1(
            &format!(
                "fieldfx {} mounted: {} particles",
                variant,
                animation.engine().particles().len()
            )
            .into(),
        );

        Ok(FieldEffect {
            window,
            runtime: Rc::new(RefCell::new(Runtime {
                animation,
                vertices: Vec::new(),
            })),
            frame: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
            observer: None,
        })
    }

    /// Bind input listeners and start the frame loop. No-op if already
    /// running or destroyed.
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.frame.borrow().is_some() || self.runtime.borrow().animation.is_destroyed() {
            return Ok(());
        }
        self.bind_events()?;

        let runtime = Rc::clone(&self.runtime);
        let frame = Rc::clone(&self.frame);
        let window = self.window.clone();
        *self.frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            let mut guard = runtime.borrow_mut();
            let rt = &mut *guard;
            if rt.animation.on_frame(timestamp).is_none() {
                return;
            }
            rt.present();
            schedule(&window, &frame, &mut rt.animation);
        }));

        schedule(&self.window, &self.frame, &mut self.runtime.borrow_mut().animation);
        Ok(())
    }

    /// Advance by `dt` seconds and render, for hosts running their own
    /// loop. Returns the time spent in milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> f32 {
        let start = js_sys::Date::now();
        let mut guard = self.runtime.borrow_mut();
        let rt = &mut *guard;
        if !rt.animation.is_destroyed() {
            rt.animation.engine_mut().tick(dt);
            rt.present();
        }
        (js_sys::Date::now() - start) as f32
    }

    /// Stop the loop, unbind listeners and remove the canvas. Idempotent.
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.runtime.borrow_mut().animation.destroy();
        for (target, event, callback) in self.listeners.drain(..) {
            let _ = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
        self.frame.borrow_mut().take();
    }

    #[wasm_bindgen]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.runtime.borrow_mut().animation.set_pointer(Vec2::new(x, y));
    }

    #[wasm_bindgen]
    pub fn pointer_leave(&mut self) {
        self.runtime.borrow_mut().animation.pointer_leave();
    }

    #[wasm_bindgen]
    pub fn set_dark_mode(&mut self, dark: bool) {
        let theme = if dark { Theme::Dark } else { Theme::Light };
        self.runtime.borrow_mut().animation.set_theme(theme);
    }

    #[wasm_bindgen]
    pub fn resize(&mut self) {
        self.runtime.borrow_mut().animation.resize();
    }

    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.frame.borrow().is_some() && !self.runtime.borrow().animation.is_destroyed()
    }

    #[wasm_bindgen]
    pub fn phase(&self) -> String {
        self.runtime.borrow().animation.engine().phase().name().to_owned()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.runtime.borrow().animation.engine().particles().len()
    }

    /// Pointer to `[x, y, size, alpha]` f32 records for the last frame.
    #[wasm_bindgen]
    pub fn vertex_buffer_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<ParticleVertex, f32>(&self.runtime.borrow().vertices).as_ptr()
    }

    #[wasm_bindgen]
    pub fn vertex_buffer_byte_length(&self) -> usize {
        self.runtime.borrow().vertices.len() * std::mem::size_of::<ParticleVertex>()
    }
}

impl FieldEffect {
    fn bind_events(&mut self) -> Result<(), JsValue> {
        let document = self
            .window
            .document()
            .ok_or_else(|| JsValue::from_str("fieldfx: no document"))?;

        let rt = Rc::clone(&self.runtime);
        self.listen(self.window.clone().into(), "resize", move |_| {
            rt.borrow_mut().animation.resize();
        })?;

        let rt = Rc::clone(&self.runtime);
        self.listen(document.clone().into(), "mousemove", move |event: Event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let pointer = Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32);
                rt.borrow_mut().animation.set_pointer(pointer);
            }
        })?;

        let rt = Rc::clone(&self.runtime);
        self.listen(document.clone().into(), "mouseleave", move |_| {
            rt.borrow_mut().animation.pointer_leave();
        })?;

        if let Some(root) = document.document_element() {
            let rt = Rc::clone(&self.runtime);
            let doc = document.clone();
            let callback: ObserverCallback = Closure::new(move |_records: js_sys::Array, _observer: MutationObserver| {
                rt.borrow_mut().animation.set_theme(document_theme(&doc));
            });
            let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
            let init = MutationObserverInit::new();
            init.set_attributes(true);
            init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
            observer.observe_with_options(&root, &init)?;
            self.observer = Some((observer, callback));
        }
        Ok(())
    }

    fn listen<F>(&mut self, target: EventTarget, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback: EventCallback = Closure::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push((target, event, callback));
        Ok(())
    }
}

impl Drop for FieldEffect {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Request the next frame and hand its handle to the animation so destroy
/// can cancel it.
fn schedule(window: &Window, frame: &RefCell<Option<FrameCallback>>, animation: &mut Animation<WebHost>) {
    let slot = frame.borrow();
    let Some(callback) = slot.as_ref() else {
        return;
    };
    if let Ok(handle) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        if !animation.frame_requested(handle) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

fn document_theme(document: &Document) -> Theme {
    document
        .document_element()
        .map(|root| Theme::from_class_list(root.class_name().split_whitespace()))
        .unwrap_or_default()
}

fn random_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(_) => (js_sys::Math::random() * u64::MAX as f64) as u64,
    }
}

fn to_js(err: ConfigError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
