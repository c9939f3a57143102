#![cfg(target_arch = "wasm32")]
use fx_core::motion::{Motion, NoAnimation};
use fx_core::{Coordinator, EffectPlan, FrameRegistry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod css;
mod dom;
mod events;
mod frame;
mod geometry;
mod gsap;
mod markup;
mod render;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|m| m.matches())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let anchors = markup::discover(&document)?;

    let reduced = prefers_reduced_motion(&window);
    let gsap = gsap::GsapAnimator::detect();
    let plan = EffectPlan::from_preference(reduced, gsap.is_some());
    log::info!("[init] reduced motion={} plan={:?}", reduced, plan);
    let motion: Motion<web::Element> = match gsap {
        Some(g) => Rc::new(g),
        None => Rc::new(NoAnimation::<web::Element>::new()),
    };

    // The coordinator takes the anchors; keep what the listeners and the
    // frame layers need.
    let wiring = events::Wiring::from_anchors(&anchors);
    let hero = anchors.hero.clone();
    let ambient = anchors.ambient_canvas.clone();
    let sections = anchors.sections.clone();

    let page = Rc::new(dom::DomPage::new(
        window.clone(),
        document.clone(),
        anchors.body.clone(),
    ));
    let coordinator = Rc::new(Coordinator::install(page, motion, anchors, plan, None));
    events::wire(&window, &document, coordinator.clone(), wiring);
    let (vw, vh) = dom::viewport_size(&window);
    coordinator.on_load(vw, vh, dom::scroll_y(&window));

    let mut rng = StdRng::from_entropy();
    let mut frames = FrameRegistry::new();
    if plan.ambient_field {
        if let Some(c) = &ambient {
            if let Err(e) = canvas::install_ambient_field(c, hero.as_ref(), &mut rng, &mut frames) {
                log::warn!("[field] disabled: {:?}", e);
            }
        }
    }
    if plan.hero_rings {
        if let Some(h) = &hero {
            if let Err(e) = canvas::install_hero_rings(&document, h, &mut frames) {
                log::warn!("[rings] disabled: {:?}", e);
            }
        }
    }
    if plan.hero_points || plan.section_points {
        let targets = render::PointTargets {
            hero: hero.as_ref().filter(|_| plan.hero_points),
            sections: if plan.section_points { &sections } else { &[] },
        };
        if let Err(e) = render::install_point_layers(&document, targets, &mut rng, &mut frames).await
        {
            log::warn!("[points] disabled: {:?}", e);
        }
    }

    frame::start_loop(frames);
    Ok(())
}
