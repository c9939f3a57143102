//! Dropdown menus: interactive on narrow viewports, statically composed on
//! wide ones.

use crate::constants::{DROPDOWN_GLOW_SECS, DROPDOWN_SECS};
use crate::focus::ACTIVE_CLASS;
use crate::motion::{Ease, Motion, Prop, PropValue, Tween, TweenSpec};
use crate::page::Page;
use crate::props;
use crate::toggle::{Openness, ToggleCell};
use crate::viewport::ViewportClass;
use std::rc::Rc;

const GLOW_SHADOW: &str = "0 0 15px rgba(124, 58, 237, 0.4)";

struct Dropdown<P: Page> {
    node: P::Node,
    content: Option<P::Node>,
    cell: ToggleCell<Openness>,
}

pub struct Dropdowns<P: Page> {
    page: Rc<P>,
    motion: Motion<P::Node>,
    entries: Vec<Rc<Dropdown<P>>>,
}

impl<P: Page + 'static> Dropdowns<P> {
    /// One entry per dropdown container, paired with its content pane.
    pub fn new(
        page: Rc<P>,
        motion: Motion<P::Node>,
        dropdowns: Vec<(P::Node, Option<P::Node>)>,
    ) -> Self {
        let entries = dropdowns
            .into_iter()
            .map(|(node, content)| {
                Rc::new(Dropdown {
                    node,
                    content,
                    cell: ToggleCell::new(Openness::Closed),
                })
            })
            .collect();
        Self {
            page,
            motion,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<Openness> {
        self.entries.get(index).map(|d| d.cell.get())
    }

    /// Click on the `index`-th dropdown. Returns true when the click was
    /// consumed and its default navigation must be prevented.
    pub fn toggle(&self, index: usize, width: f64) -> bool {
        if ViewportClass::from_width(width) == ViewportClass::Wide {
            return false;
        }
        let Some(entry) = self.entries.get(index) else {
            return false;
        };
        let Some(content) = entry.content.clone() else {
            return false;
        };
        let t = entry.cell.flip();
        let open = t.to.is_open();
        if open {
            self.page.add_class(&entry.node, ACTIVE_CLASS);
        } else {
            self.page.remove_class(&entry.node, ACTIVE_CLASS);
        }
        let targets = [content.clone()];
        self.motion.kill_in_flight(&targets);
        let height = if open { PropValue::from("auto") } else { PropValue::Num(0.0) };
        let mut to = props!(Opacity: if open { 1.0 } else { 0.0 });
        to.push((Prop::Height, height));

        let page_start = self.page.clone();
        let content_start = content.clone();
        let page_done = self.page.clone();
        let entry_done = entry.clone();
        self.motion.animate(
            &targets,
            Tween::to(to, TweenSpec::new(DROPDOWN_SECS, Ease::Power2Out))
                .on_start(move || {
                    if open {
                        page_start.set_style(&content_start, "display", "block");
                    }
                })
                .on_complete(move || {
                    if !entry_done.cell.get().is_open() {
                        page_done.set_style(&content, "display", "none");
                    }
                }),
        );
        log::debug!("[dropdown] #{} {:?}", index, t.to);
        true
    }

    /// Pointer entering or leaving a dropdown on a wide viewport.
    pub fn hover(&self, index: usize, entering: bool, width: f64) {
        if !self.motion.is_live() {
            return;
        }
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        let shadow = if entering {
            if ViewportClass::from_width(width) != ViewportClass::Wide {
                return;
            }
            GLOW_SHADOW
        } else {
            "none"
        };
        self.motion.animate(
            std::slice::from_ref(&entry.node),
            Tween::to(
                props!(BoxShadow: shadow),
                TweenSpec::new(DROPDOWN_GLOW_SECS, Ease::Power2Out).overwrite(),
            ),
        );
    }
}

/// Mirrors the dropdown item links into a persistently visible pane.
pub struct Composer<P: Page> {
    page: Rc<P>,
    pane: Option<P::Node>,
    items: Vec<P::Node>,
}

impl<P: Page> Composer<P> {
    pub fn new(page: Rc<P>, pane: Option<P::Node>, items: Vec<P::Node>) -> Self {
        Self { page, pane, items }
    }

    /// Rebuilds the pane from scratch on wide viewports. Returns the pane's
    /// child count when it was composed.
    pub fn compose(&self, width: f64) -> Option<usize> {
        if ViewportClass::from_width(width) != ViewportClass::Wide {
            return None;
        }
        let pane = self.pane.as_ref()?;
        self.page.replace_children_with_clones(pane, &self.items);
        Some(self.page.child_count(pane))
    }
}
