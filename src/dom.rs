use crate::css::px;
use crate::geometry::backing_size;
use fx_core::page::{Callback, Page, Span};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Attaches `handler` for `event` on `target` for the page's lifetime.
pub fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] {} listener rejected: {:?}", event, e);
    }
    closure.forget();
}

pub fn listen_mouse(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    listen(target, event, move |ev: web::Event| {
        if let Ok(mouse) = ev.dyn_into::<web::MouseEvent>() {
            handler(mouse);
        }
    });
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = backing_size(rect.width(), rect.height(), dpr);
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// [`Page`] over the live document.
pub struct DomPage {
    window: web::Window,
    document: web::Document,
    body: web::Element,
}

impl DomPage {
    pub fn new(window: web::Window, document: web::Document, body: web::Element) -> Self {
        Self {
            window,
            document,
            body,
        }
    }

    fn style_of(node: &web::Element) -> Option<web::CssStyleDeclaration> {
        node.dyn_ref::<web::HtmlElement>().map(|el| el.style())
    }

    fn create(&self, class: &str) -> Option<web::Element> {
        let el = self.document.create_element("div").ok()?;
        el.set_class_name(class);
        Some(el)
    }
}

impl Page for DomPage {
    type Node = web::Element;

    fn add_class(&self, node: &web::Element, class: &str) {
        _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &web::Element, class: &str) {
        _ = node.class_list().remove_1(class);
    }

    fn set_style(&self, node: &web::Element, property: &str, value: &str) {
        if let Some(style) = Self::style_of(node) {
            _ = style.set_property(property, value);
        }
    }

    fn set_root_property(&self, name: &str, value: &str) {
        if let Some(root) = self.document.document_element() {
            self.set_style(&root, name, value);
        }
    }

    fn find_by_id(&self, id: &str) -> Option<web::Element> {
        self.document.get_element_by_id(id)
    }

    fn attribute(&self, node: &web::Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_text(&self, node: &web::Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn span(&self, node: &web::Element) -> Span {
        let rect = node.get_bounding_client_rect();
        Span {
            top: rect.top() + scroll_y(&self.window),
            height: rect.height(),
        }
    }

    fn offset_height(&self, node: &web::Element) -> f64 {
        match node.dyn_ref::<web::HtmlElement>() {
            Some(el) => el.offset_height() as f64,
            None => node.get_bounding_client_rect().height(),
        }
    }

    fn replace_children_with_clones(&self, parent: &web::Element, sources: &[web::Element]) {
        parent.set_inner_html("");
        for source in sources {
            match source.clone_node_with_deep(true) {
                Ok(copy) => {
                    _ = parent.append_child(&copy);
                }
                Err(e) => log::warn!("[dom] clone failed: {:?}", e),
            }
        }
    }

    fn child_count(&self, node: &web::Element) -> usize {
        node.child_element_count() as usize
    }

    fn spawn_visual(&self, class: &str, x: f64, y: f64, background: &str) -> Option<web::Element> {
        let el = self.create(class)?;
        self.set_style(&el, "left", &px(x));
        self.set_style(&el, "top", &px(y));
        self.set_style(&el, "background", background);
        self.body.append_child(&el).ok()?;
        Some(el)
    }

    fn append_child(&self, parent: &web::Element, class: &str) -> Option<web::Element> {
        let el = self.create(class)?;
        parent.append_child(&el).ok()?;
        Some(el)
    }

    fn remove(&self, node: &web::Element) {
        node.remove();
    }

    fn navigate_to_fragment(&self, id: &str) {
        if let Err(e) = self.window.location().set_hash(id) {
            log::warn!("[dom] fragment jump failed: {:?}", e);
        }
    }

    fn defer(&self, delay: Duration, task: Callback) {
        let cb = Closure::once_into_js(move || task());
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        {
            log::warn!("[dom] timer rejected: {:?}", e);
        }
    }
}
