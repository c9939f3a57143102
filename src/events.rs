use crate::dom::{listen, listen_mouse, scroll_y, viewport_size, DomPage};
use crate::markup::CLOSE_BUTTON;
use fx_core::notice::NoticeKind;
use fx_core::{Anchors, Coordinator};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type Shared = Rc<Coordinator<DomPage>>;

/// Event sources, cloned out of the anchors before the coordinator owns them.
pub struct Wiring {
    pub nav_links: Vec<web::Element>,
    pub dropdowns: Vec<web::Element>,
    pub theme_toggle: Option<web::Element>,
    pub language_toggle: Option<web::Element>,
    pub hamburger: Option<web::Element>,
    pub theme_close: Option<web::Element>,
    pub language_close: Option<web::Element>,
}

impl Wiring {
    pub fn from_anchors(a: &Anchors<web::Element>) -> Self {
        let close = |banner: &Option<web::Element>| {
            banner
                .as_ref()
                .and_then(|b| b.query_selector(CLOSE_BUTTON).ok().flatten())
        };
        Self {
            nav_links: a.nav_links.clone(),
            dropdowns: a.dropdowns.iter().map(|(d, _)| d.clone()).collect(),
            theme_toggle: a.theme_toggle.clone(),
            language_toggle: a.language_toggle.clone(),
            hamburger: a.hamburger.clone(),
            theme_close: close(&a.theme_banner),
            language_close: close(&a.language_banner),
        }
    }
}

pub fn wire(window: &web::Window, document: &web::Document, c: Shared, w: Wiring) {
    wire_viewport(window, &c);
    if c.plan().follows_pointer() {
        wire_pointer(document, &c);
    } else {
        log::info!("[events] pointer effects off; no document pointer listeners");
    }
    wire_toggles(&c, &w);
    wire_navigation(&c, &w);
}

fn wire_viewport(window: &web::Window, c: &Shared) {
    {
        let c = c.clone();
        let win = window.clone();
        listen(window, "scroll", move |_| {
            c.on_scroll(scroll_y(&win));
        });
    }
    {
        let c = c.clone();
        let win = window.clone();
        listen(window, "resize", move |_| {
            let (vw, vh) = viewport_size(&win);
            c.on_layout(vw, vh);
        });
    }
    {
        let c = c.clone();
        let win = window.clone();
        listen(window, "load", move |_| {
            let (vw, vh) = viewport_size(&win);
            c.on_load(vw, vh, scroll_y(&win));
        });
    }
}

fn wire_pointer(document: &web::Document, c: &Shared) {
    {
        let c = c.clone();
        listen_mouse(document, "mousemove", move |ev| {
            c.on_pointer_move(ev.page_x() as f64, ev.page_y() as f64);
        });
    }
    let c = c.clone();
    listen_mouse(document, "click", move |ev| {
        c.on_click(ev.page_x() as f64, ev.page_y() as f64);
    });
}

fn wire_toggles(c: &Shared, w: &Wiring) {
    if let Some(toggle) = &w.theme_toggle {
        let c = c.clone();
        listen(toggle, "click", move |_| {
            if let Some(theme) = c.on_theme_click() {
                log::debug!("[theme] {:?}", theme);
            }
        });
    }
    if let Some(toggle) = &w.language_toggle {
        let c = c.clone();
        let select = toggle.clone();
        listen(toggle, "change", move |_| {
            let code = match select.dyn_ref::<web::HtmlSelectElement>() {
                Some(s) => s.value(),
                None => select.get_attribute("value").unwrap_or_default(),
            };
            c.on_language_change(&code);
        });
    }
    if let Some(hamburger) = &w.hamburger {
        let c = c.clone();
        listen(hamburger, "click", move |_| {
            c.on_hamburger_click();
        });
    }
    for (button, kind) in [
        (&w.theme_close, NoticeKind::Theme),
        (&w.language_close, NoticeKind::Language),
    ] {
        if let Some(button) = button {
            let c = c.clone();
            listen(button, "click", move |_| {
                c.on_banner_dismiss(kind);
            });
        }
    }
}

fn wire_navigation(c: &Shared, w: &Wiring) {
    for (i, link) in w.nav_links.iter().enumerate() {
        let c = c.clone();
        listen(link, "click", move |ev| {
            ev.prevent_default();
            c.on_nav_link_click(i);
        });
    }
    for (i, dropdown) in w.dropdowns.iter().enumerate() {
        {
            let c = c.clone();
            listen(dropdown, "click", move |ev| {
                if c.on_dropdown_click(i) {
                    ev.prevent_default();
                }
            });
        }
        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let c = c.clone();
            listen(dropdown, event, move |_| c.on_dropdown_hover(i, entering));
        }
    }
}
