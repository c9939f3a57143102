//! GSAP-backed [`Animator`].
//!
//! The engine is a page global loaded by a script tag. [`GsapAnimator::detect`]
//! returns `None` when it is absent, and the caller falls back to
//! [`fx_core::NoAnimation`].

use crate::css::{clear_vars, prop_vars, scroll_vars, tween_vars, Var, Vars};
use fx_core::motion::{Animator, Props, Tween};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = fromTo)]
    fn gsap_from_to(targets: &JsValue, from: &Object, to: &Object) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = killTweensOf)]
    fn gsap_kill_tweens_of(targets: &JsValue) -> Result<JsValue, JsValue>;
}

fn to_js(var: &Var) -> JsValue {
    match var {
        Var::Num(n) => JsValue::from_f64(*n),
        Var::Text(t) => JsValue::from_str(t),
        Var::Bool(b) => JsValue::from_bool(*b),
        Var::Object(vars) => object(vars).into(),
    }
}

fn object(vars: &Vars) -> Object {
    let obj = Object::new();
    for (key, var) in vars {
        _ = Reflect::set(&obj, &JsValue::from_str(key), &to_js(var));
    }
    obj
}

fn targets(nodes: &[web::Element]) -> JsValue {
    nodes.iter().collect::<Array>().into()
}

/// Sets a one-shot callback on the tween vars. A tween killed before it ends
/// never calls it, so its closure is never freed: one per interrupted toggle.
fn attach(obj: &Object, key: &str, callback: Option<fx_core::page::Callback>) {
    if let Some(f) = callback {
        let cb = Closure::once_into_js(move || f());
        _ = Reflect::set(obj, &JsValue::from_str(key), &cb);
    }
}

fn report(what: &str, r: Result<JsValue, JsValue>) {
    if let Err(e) = r {
        log::warn!("[gsap] {} failed: {:?}", what, e);
    }
}

fn global(name: &str) -> Option<JsValue> {
    let window = web::window()?;
    let v = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    (!v.is_undefined() && !v.is_null()).then_some(v)
}

pub struct GsapAnimator {
    gsap: JsValue,
    smooth_scroll: bool,
}

impl GsapAnimator {
    pub fn detect() -> Option<Self> {
        let gsap = global("gsap")?;
        let smooth_scroll = Reflect::get(&gsap, &"plugins".into())
            .and_then(|plugins| Reflect::get(&plugins, &"scrollTo".into()))
            .map(|p| !p.is_undefined())
            .unwrap_or(false);
        log::info!("[gsap] engine found, smooth scroll={}", smooth_scroll);
        Some(Self {
            gsap,
            smooth_scroll,
        })
    }
}

impl Animator for GsapAnimator {
    type Node = web::Element;

    fn is_live(&self) -> bool {
        true
    }

    fn animate(&self, nodes: &[web::Element], tween: Tween) {
        let Tween {
            from,
            to,
            spec,
            on_start,
            on_complete,
        } = tween;
        let t = targets(nodes);
        let vars = object(&tween_vars(&to, &spec));
        attach(&vars, "onStart", on_start);
        attach(&vars, "onComplete", on_complete);
        match from {
            Some(from) => report("fromTo", gsap_from_to(&t, &object(&prop_vars(&from)), &vars)),
            None => report("to", gsap_to(&t, &vars)),
        }
    }

    fn kill_in_flight(&self, nodes: &[web::Element]) {
        report("killTweensOf", gsap_kill_tweens_of(&targets(nodes)));
    }

    fn set_immediate(&self, nodes: &[web::Element], props: &Props) {
        report("set", gsap_set(&targets(nodes), &object(&prop_vars(props))));
    }

    fn clear_props(&self, nodes: &[web::Element]) {
        report("set", gsap_set(&targets(nodes), &object(&clear_vars())));
    }

    fn set_time_scale(&self, scale: f64) {
        let r = Reflect::get(&self.gsap, &"globalTimeline".into()).and_then(|timeline| {
            let f: Function = Reflect::get(&timeline, &"timeScale".into())?.dyn_into()?;
            f.call1(&timeline, &JsValue::from_f64(scale))
        });
        report("timeScale", r);
    }

    fn scroll_to(&self, target: &web::Element, offset_y: f64, duration: f64) -> bool {
        if !self.smooth_scroll {
            return false;
        }
        let Some(window) = web::window() else {
            return false;
        };
        let (outer, inner) = scroll_vars(offset_y, duration);
        let scroll = object(&inner);
        _ = Reflect::set(&scroll, &"y".into(), target);
        let vars = object(&outer);
        _ = Reflect::set(&vars, &"scrollTo".into(), &scroll);
        match gsap_to(&window.into(), &vars) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("[gsap] scrollTo failed: {:?}", e);
                false
            }
        }
    }
}
