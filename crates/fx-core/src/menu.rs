use crate::constants::{MENU_ITEM_SECS, MENU_ITEM_STAGGER_SECS};
use crate::focus::ACTIVE_CLASS;
use crate::motion::{Ease, Motion, Stagger, Tween, TweenSpec};
use crate::page::Page;
use crate::props;
use crate::toggle::{Openness, ToggleCell};
use crate::viewport::ViewportClass;
use std::rc::Rc;

struct MenuInner<P: Page> {
    page: Rc<P>,
    motion: Motion<P::Node>,
    menu: P::Node,
    hamburger: P::Node,
    items: Vec<P::Node>,
    cell: ToggleCell<Openness>,
}

impl<P: Page> MenuInner<P> {
    fn present_open(&self) {
        self.page.set_style(&self.menu, "display", "flex");
        self.page.add_class(&self.menu, ACTIVE_CLASS);
        self.page.add_class(&self.hamburger, ACTIVE_CLASS);
    }

    fn present_closed(&self, display: &str) {
        self.page.remove_class(&self.menu, ACTIVE_CLASS);
        self.page.remove_class(&self.hamburger, ACTIVE_CLASS);
        self.page.set_style(&self.menu, "display", display);
        self.motion.clear_props(&self.items);
    }
}

/// Hamburger-driven menu for narrow viewports.
pub struct MobileMenu<P: Page> {
    inner: Rc<MenuInner<P>>,
}

impl<P: Page + 'static> MobileMenu<P> {
    pub fn new(
        page: Rc<P>,
        motion: Motion<P::Node>,
        menu: P::Node,
        hamburger: P::Node,
        items: Vec<P::Node>,
    ) -> Self {
        Self {
            inner: Rc::new(MenuInner {
                page,
                motion,
                menu,
                hamburger,
                items,
                cell: ToggleCell::new(Openness::Closed),
            }),
        }
    }

    pub fn state(&self) -> Openness {
        self.inner.cell.get()
    }

    /// Hamburger click. Ignored on wide viewports, where the menu is always
    /// laid out inline.
    pub fn toggle(&self, width: f64) -> Option<Openness> {
        if ViewportClass::from_width(width) == ViewportClass::Wide {
            return None;
        }
        let t = self.inner.cell.flip();
        if t.to.is_open() {
            self.open();
        } else {
            self.close();
        }
        log::debug!("[menu] {:?} -> {:?}", t.from, t.to);
        Some(t.to)
    }

    /// A nav link was followed: fold the menu away if it is open.
    pub fn close_from_link(&self) -> bool {
        if self.inner.cell.set(Openness::Closed).is_none() {
            return false;
        }
        self.close();
        true
    }

    /// Drops any open state once the viewport turns wide.
    pub fn on_layout(&self, width: f64) {
        if ViewportClass::from_width(width) != ViewportClass::Wide {
            return;
        }
        if self.inner.cell.set(Openness::Closed).is_some() {
            self.inner.motion.kill_in_flight(&self.inner.items);
            self.inner.present_closed("");
            log::debug!("[menu] reset for wide viewport");
        }
    }

    fn open(&self) {
        let m = &self.inner;
        m.motion.kill_in_flight(&m.items);
        m.present_open();
        m.motion.animate(
            &m.items,
            Tween::from_to(
                props!(Opacity: 0.0, Y: 50.0, Scale: 0.9, RotationX: -15.0),
                props!(Opacity: 1.0, Y: 0.0, Scale: 1.0, RotationX: 0.0),
                TweenSpec::new(MENU_ITEM_SECS, Ease::BackOut(1.2))
                    .stagger(Stagger::Each(MENU_ITEM_STAGGER_SECS))
                    .overwrite(),
            ),
        );
    }

    fn close(&self) {
        let m = &self.inner;
        m.motion.kill_in_flight(&m.items);
        let inner = self.inner.clone();
        m.motion.animate(
            &m.items,
            Tween::to(
                props!(Opacity: 0.0, Y: 50.0, Scale: 0.9, RotationX: 15.0),
                TweenSpec::new(MENU_ITEM_SECS, Ease::Power2InOut)
                    .stagger(Stagger::Each(MENU_ITEM_STAGGER_SECS)),
            )
            .on_complete(move || {
                if !inner.cell.get().is_open() {
                    inner.present_closed("none");
                }
            }),
        );
    }
}
