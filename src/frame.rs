use fx_core::FrameRegistry;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request(tick: &Tick) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drives every registered consumer once per animation frame. An empty
/// registry never requests a frame.
pub fn start_loop(frames: FrameRegistry) {
    if frames.is_empty() {
        log::info!("[frame] no consumers; loop not started");
        return;
    }
    log::info!(
        "[frame] starting loop: {}",
        frames.names().collect::<Vec<_>>().join(", ")
    );
    let frames = RefCell::new(frames);
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time_ms: f64| {
        frames.borrow_mut().run(time_ms);
        request(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request(&tick);
}
