//! One-per-session informational banners.

use crate::constants::{NOTICE_AUTO_DISMISS, NOTICE_IN_SECS, NOTICE_OUT_SECS};
use crate::motion::{Ease, Motion, Tween, TweenSpec};
use crate::page::Page;
use crate::props;
use std::cell::Cell;
use std::rc::Rc;

/// "Shown this session" flag. Lives in memory only.
#[derive(Debug, Default)]
pub struct NoticeGate {
    shown: Cell<bool>,
}

impl NoticeGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once.
    pub fn claim(&self) -> bool {
        !self.shown.replace(true)
    }

    pub fn was_shown(&self) -> bool {
        self.shown.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Theme,
    Language,
}

struct BannerInner<P: Page> {
    page: Rc<P>,
    motion: Motion<P::Node>,
    node: P::Node,
    kind: NoticeKind,
    visible_class: &'static str,
    gate: NoticeGate,
    visible: Cell<bool>,
    dismissals: Cell<u32>,
}

/// Auto-dismissing banner. Cloning shares the same banner.
pub struct Banner<P: Page> {
    inner: Rc<BannerInner<P>>,
}

impl<P: Page> Clone for Banner<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P: Page + 'static> Banner<P> {
    pub fn new(
        page: Rc<P>,
        motion: Motion<P::Node>,
        node: P::Node,
        kind: NoticeKind,
        visible_class: &'static str,
    ) -> Self {
        Self {
            inner: Rc::new(BannerInner {
                page,
                motion,
                node,
                kind,
                visible_class,
                gate: NoticeGate::new(),
                visible: Cell::new(false),
                dismissals: Cell::new(0),
            }),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.inner.visible.get()
    }

    /// Number of times the banner has actually been taken down.
    pub fn dismissals(&self) -> u32 {
        self.inner.dismissals.get()
    }

    /// Shows the banner unless it was already shown this session.
    pub fn show(&self) -> bool {
        let b = &self.inner;
        if !b.gate.claim() {
            return false;
        }
        b.visible.set(true);
        b.page.add_class(&b.node, b.visible_class);
        let targets = [b.node.clone()];
        b.motion.kill_in_flight(&targets);
        b.motion.animate(
            &targets,
            Tween::from_to(
                props!(Scale: 0.8, Opacity: 0.0, Y: 50.0),
                props!(Scale: 1.0, Opacity: 1.0, Y: 0.0),
                TweenSpec::new(NOTICE_IN_SECS, Ease::BackOut(1.7)),
            ),
        );
        let me = self.clone();
        b.page.defer(NOTICE_AUTO_DISMISS, Box::new(move || {
            me.dismiss();
        }));
        log::info!("[notice] {:?} shown", b.kind);
        true
    }

    /// Takes the banner down. Whichever of the explicit dismiss and the
    /// timeout comes first wins; the other is a no-op.
    pub fn dismiss(&self) -> bool {
        let b = &self.inner;
        if !b.visible.replace(false) {
            return false;
        }
        b.dismissals.set(b.dismissals.get() + 1);
        let targets = [b.node.clone()];
        b.motion.kill_in_flight(&targets);
        let inner = self.inner.clone();
        b.motion.animate(
            &targets,
            Tween::to(
                props!(Scale: 0.8, Opacity: 0.0, Y: 50.0),
                TweenSpec::new(NOTICE_OUT_SECS, Ease::Power2In),
            )
            .on_complete(move || {
                if !inner.visible.get() {
                    inner.page.remove_class(&inner.node, inner.visible_class);
                }
            }),
        );
        log::debug!("[notice] {:?} dismissed", b.kind);
        true
    }
}
