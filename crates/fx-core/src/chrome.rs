//! Header/nav presentation driven by scroll direction and depth.
//!
//! The controller is the only writer of the header `transform` and of the
//! nav's `top`, `background`, `box-shadow` and `backdrop-filter`.

use crate::constants::{CHROME_EASE, CHROME_TRANSITION_SECS, COMPACT_THRESHOLD_PX};
use crate::page::Page;
use crate::viewport::{ScrollDirection, ScrollState};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChromeMode {
    Expanded,
    Compact,
}

impl ChromeMode {
    #[inline]
    pub fn derive(state: &ScrollState, threshold: f64) -> Self {
        if state.direction == ScrollDirection::Down && state.last_offset > threshold {
            ChromeMode::Compact
        } else {
            ChromeMode::Expanded
        }
    }
}

pub const HEADER_ROOT_PROPERTY: &str = "--top-header-height";
pub const COMPACT_CLASS: &str = "compact";

struct NavStyle {
    top: &'static str,
    background: &'static str,
    box_shadow: &'static str,
    backdrop_filter: &'static str,
}

const COMPACT_NAV: NavStyle = NavStyle {
    top: "0",
    background: "linear-gradient(to right, #1e293b, #2d3e50)",
    box_shadow: "0 10px 40px rgba(124, 58, 237, 0.7), 0 0 20px rgba(124, 58, 237, 0.3)",
    backdrop_filter: "blur(5px)",
};

const EXPANDED_NAV: NavStyle = NavStyle {
    top: "var(--top-header-height)",
    background: "rgba(10, 10, 10, 0.95)",
    box_shadow: "0 10px 40px rgba(0, 0, 0, 0.7)",
    backdrop_filter: "none",
};

/// CSS transition used for `property` in both directions.
pub fn chrome_transition(property: &str) -> String {
    format!("{} {}s {}", property, CHROME_TRANSITION_SECS, CHROME_EASE)
}

pub struct ChromeController<P: Page> {
    page: Rc<P>,
    header: Option<P::Node>,
    nav: Option<P::Node>,
    threshold: f64,
    applied: Cell<Option<ChromeMode>>,
}

impl<P: Page> ChromeController<P> {
    pub fn new(page: Rc<P>, header: Option<P::Node>, nav: Option<P::Node>) -> Self {
        Self {
            page,
            header,
            nav,
            threshold: COMPACT_THRESHOLD_PX,
            applied: Cell::new(None),
        }
    }

    #[inline]
    pub fn mode(&self) -> Option<ChromeMode> {
        self.applied.get()
    }

    /// Applies the presentation for `state`. Returns the derived mode, or
    /// `None` when the chrome is absent.
    pub fn apply(&self, state: ScrollState) -> Option<ChromeMode> {
        let (header, nav) = match (&self.header, &self.nav) {
            (Some(h), Some(n)) => (h, n),
            _ => return None,
        };
        let mode = ChromeMode::derive(&state, self.threshold);
        if self.applied.get() == Some(mode) {
            return Some(mode);
        }
        let page = &self.page;
        page.set_style(header, "transition", &chrome_transition("transform"));
        page.set_style(nav, "transition", &chrome_transition("all"));
        let style = match mode {
            ChromeMode::Compact => {
                page.set_style(header, "transform", "translateY(-100%)");
                page.add_class(header, COMPACT_CLASS);
                &COMPACT_NAV
            }
            ChromeMode::Expanded => {
                page.set_style(header, "transform", "translateY(0)");
                page.remove_class(header, COMPACT_CLASS);
                &EXPANDED_NAV
            }
        };
        page.set_style(nav, "top", style.top);
        page.set_style(nav, "background", style.background);
        page.set_style(nav, "box-shadow", style.box_shadow);
        page.set_style(nav, "backdrop-filter", style.backdrop_filter);
        log::debug!("[chrome] {:?} at {:.0}px", mode, state.last_offset);
        self.applied.set(Some(mode));
        Some(mode)
    }

    /// Re-reads the header height after layout and pins the nav below it.
    /// Returns the measured height.
    pub fn on_layout(&self) -> Option<f64> {
        let (header, nav) = match (&self.header, &self.nav) {
            (Some(h), Some(n)) => (h, n),
            _ => return None,
        };
        let height = self.page.offset_height(header);
        let px = format!("{}px", height);
        self.page.set_root_property(HEADER_ROOT_PROPERTY, &px);
        if self.applied.get() != Some(ChromeMode::Compact) {
            self.page.set_style(nav, "top", &px);
        }
        Some(height)
    }
}
