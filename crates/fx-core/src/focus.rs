//! Active navigation link from section boundary crossings.
//!
//! Only this resolver writes the `active` class on nav links, so at most one
//! link carries it at any time.

use crate::constants::{FOCUS_END, FOCUS_START};
use crate::page::Page;
use crate::trigger::{Anchor, Edge, ScrollTrigger, TriggerEvent, TriggerSet};
use std::cell::RefCell;
use std::rc::Rc;

pub const ACTIVE_CLASS: &str = "active";

/// `"#about"` -> `Some("about")`. Anything that is not an in-page fragment
/// yields `None`.
#[inline]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

struct FocusLink<N> {
    node: N,
    target: Option<String>,
}

pub struct SectionFocus<P: Page> {
    page: Rc<P>,
    sections: Vec<(String, P::Node)>,
    links: Vec<FocusLink<P::Node>>,
    triggers: RefCell<TriggerSet<usize>>,
    active: RefCell<Option<String>>,
}

impl<P: Page> SectionFocus<P> {
    /// Registers every section that carries an `id`. Sections without one
    /// cannot be linked to and are skipped.
    pub fn new(page: Rc<P>, sections: Vec<P::Node>, links: Vec<P::Node>) -> Self {
        let sections: Vec<(String, P::Node)> = sections
            .into_iter()
            .filter_map(|node| {
                let id = page.attribute(&node, "id").filter(|id| !id.is_empty())?;
                Some((id, node))
            })
            .collect();
        let links = links
            .into_iter()
            .map(|node| {
                let target = page
                    .attribute(&node, "href")
                    .and_then(|h| fragment_id(&h).map(str::to_owned));
                FocusLink { node, target }
            })
            .collect();
        let start = Anchor::parse(FOCUS_START).unwrap_or(Anchor::new(Edge::Top, 0.2));
        let end = Anchor::parse(FOCUS_END).unwrap_or(Anchor::new(Edge::Bottom, 0.2));
        let mut triggers = TriggerSet::new();
        for (i, (_, node)) in sections.iter().enumerate() {
            triggers.register(i, ScrollTrigger::new(page.span(node), start, end, 0.0));
        }
        log::debug!("[focus] watching {} sections", sections.len());
        Self {
            page,
            sections,
            links,
            triggers: RefCell::new(triggers),
            active: RefCell::new(None),
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn active(&self) -> Option<String> {
        self.active.borrow().clone()
    }

    /// Re-measures every section against the new viewport height.
    pub fn on_layout(&self, viewport_height: f64) {
        let mut triggers = self.triggers.borrow_mut();
        for (i, trigger) in triggers.iter_mut() {
            trigger.relayout(self.page.span(&self.sections[*i].1), viewport_height);
        }
    }

    /// Applies every enter/enter-back crossing caused by the move to
    /// `offset`, in arrival order. Returns the resulting active section.
    pub fn on_scroll(&self, offset: f64) -> Option<String> {
        let fired = self.triggers.borrow_mut().update(offset);
        for (i, ev) in fired {
            if matches!(ev, TriggerEvent::Enter | TriggerEvent::EnterBack) {
                let id = self.sections[i].0.clone();
                self.activate(&id);
            }
        }
        self.active()
    }

    /// Marks the link targeting `#id` as the only active one.
    pub fn activate(&self, id: &str) {
        for link in &self.links {
            self.page.remove_class(&link.node, ACTIVE_CLASS);
        }
        for link in &self.links {
            if link.target.as_deref() == Some(id) {
                self.page.add_class(&link.node, ACTIVE_CLASS);
                break;
            }
        }
        let changed = self.active.borrow().as_deref() != Some(id);
        if changed {
            log::debug!("[focus] active section -> {}", id);
            *self.active.borrow_mut() = Some(id.to_owned());
        }
    }

    /// Fragment target of the `index`-th link.
    pub fn link_target(&self, index: usize) -> Option<&str> {
        self.links.get(index)?.target.as_deref()
    }
}
