//! 2D canvas layers: the ambient particle field and the hero rings.

use crate::dom::{self, listen, listen_mouse};
use crate::geometry::{backing_size, hero_scroll_progress, local_point};
use crate::markup::HERO_WAVES_CLASS;
use fx_core::particles::{self, Bounds, Particle};
use fx_core::waves::{stroke_style, RingClock};
use fx_core::FrameRegistry;
use glam::Vec2;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Backing store follows the CSS box one to one; particle coordinates are
/// CSS pixels.
fn fit(canvas: &web::HtmlCanvasElement) -> Bounds {
    let (w, h) = backing_size(
        canvas.offset_width() as f64,
        canvas.offset_height() as f64,
        1.0,
    );
    canvas.set_width(w);
    canvas.set_height(h);
    Bounds::new(w as f32, h as f32)
}

struct Field {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    particles: Vec<Particle>,
    bounds: Bounds,
    hero: Option<web::HtmlElement>,
}

impl Field {
    fn draw(&mut self, time_ms: f64) {
        let Bounds { width, height } = self.bounds;
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        let scroll = web::window().map_or(0.0, |w| dom::scroll_y(&w));
        let hero_h = self.hero.as_ref().map(|h| h.offset_height() as f64);
        let progress = hero_scroll_progress(scroll, hero_h);
        particles::step_all(&mut self.particles, self.bounds, progress, time_ms);
        for p in &self.particles {
            self.ctx.begin_path();
            _ = self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.size as f64, 0.0, TAU);
            self.ctx.set_fill_style_str(&particles::fill_style(p));
            self.ctx.fill();
        }
    }
}

/// Starts the ambient field on `#canvas`: drift, scroll drag, pointer repel.
pub fn install_ambient_field(
    canvas: &web::Element,
    hero: Option<&web::Element>,
    rng: &mut StdRng,
    frames: &mut FrameRegistry,
) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = canvas
        .clone()
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#canvas is not a canvas"))?;
    let ctx = context_2d(&canvas)?;
    let bounds = fit(&canvas);
    let field = Rc::new(RefCell::new(Field {
        particles: particles::spawn_field(rng, bounds),
        canvas: canvas.clone(),
        ctx,
        bounds,
        hero: hero.and_then(|h| h.clone().dyn_into().ok()),
    }));

    if let Some(window) = web::window() {
        let f = field.clone();
        listen(&window, "resize", move |_| {
            let mut f = f.borrow_mut();
            let bounds = fit(&f.canvas);
            f.bounds = bounds;
            particles::resize_bounds(&mut f.particles, bounds);
        });
    }
    {
        let f = field.clone();
        listen_mouse(&canvas, "mousemove", move |ev| {
            let mut f = f.borrow_mut();
            let rect = f.canvas.get_bounding_client_rect();
            let [x, y] = local_point(
                ev.client_x() as f64,
                ev.client_y() as f64,
                rect.left(),
                rect.top(),
            );
            particles::repel(&mut f.particles, Vec2::new(x, y));
        });
    }

    frames.register("ambient field", move |t| field.borrow_mut().draw(t));
    Ok(())
}

/// Prepends a canvas to the hero and pulses three rings at its centre.
pub fn install_hero_rings(
    document: &web::Document,
    hero: &web::Element,
    frames: &mut FrameRegistry,
) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;
    canvas.set_class_name(HERO_WAVES_CLASS);
    _ = canvas.set_attribute("style", "top: 40% !important;");
    hero.prepend_with_node_1(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx = context_2d(&canvas)?;
    fit(&canvas);

    if let Some(window) = web::window() {
        let c = canvas.clone();
        listen(&window, "resize", move |_| {
            fit(&c);
        });
    }

    let mut clock = RingClock::default();
    frames.register("hero rings", move |_| {
        let (w, h) = (canvas.width() as f64, canvas.height() as f64);
        ctx.clear_rect(0.0, 0.0, w, h);
        for ring in clock.tick() {
            ctx.begin_path();
            _ = ctx.arc(w / 2.0, h / 2.0, ring.radius, 0.0, TAU);
            ctx.set_stroke_style_str(&stroke_style(&ring));
            ctx.set_line_width(2.0);
            ctx.stroke();
        }
    });
    Ok(())
}
