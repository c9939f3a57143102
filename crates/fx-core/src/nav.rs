//! In-page navigation links.

use crate::constants::{SCROLL_DURATION_SECS, SCROLL_OFFSET_PX};
use crate::focus::SectionFocus;
use crate::menu::MobileMenu;
use crate::motion::Motion;
use crate::page::Page;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Link has no in-page target or the target is missing.
    Ignored,
    Scrolled(String),
    /// No smooth-scroll support; jumped to the fragment instead.
    Jumped(String),
}

pub struct NavLinks<P: Page> {
    page: Rc<P>,
    motion: Motion<P::Node>,
    focus: Rc<SectionFocus<P>>,
    menu: Option<Rc<MobileMenu<P>>>,
}

impl<P: Page + 'static> NavLinks<P> {
    pub fn new(
        page: Rc<P>,
        motion: Motion<P::Node>,
        focus: Rc<SectionFocus<P>>,
        menu: Option<Rc<MobileMenu<P>>>,
    ) -> Self {
        Self {
            page,
            motion,
            focus,
            menu,
        }
    }

    /// Click on the `index`-th nav link. The browser's default jump is
    /// always prevented by the caller.
    pub fn click(&self, index: usize) -> NavOutcome {
        let Some(id) = self.focus.link_target(index).map(str::to_owned) else {
            return NavOutcome::Ignored;
        };
        let Some(target) = self.page.find_by_id(&id) else {
            log::debug!("[nav] #{} not found", id);
            return NavOutcome::Ignored;
        };
        self.focus.activate(&id);
        let outcome = if self
            .motion
            .scroll_to(&target, SCROLL_OFFSET_PX, SCROLL_DURATION_SECS)
        {
            NavOutcome::Scrolled(id)
        } else {
            self.page.navigate_to_fragment(&id);
            NavOutcome::Jumped(id)
        };
        if let Some(menu) = &self.menu {
            menu.close_from_link();
        }
        log::debug!("[nav] {:?}", outcome);
        outcome
    }
}
