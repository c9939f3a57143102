// Once-per-session banners with auto-dismiss.

mod common;

use common::{FakePage, ManualAnimator, NodeId};
use fx_core::constants::NOTICE_AUTO_DISMISS;
use fx_core::motion::{Motion, NoAnimation};
use fx_core::notice::{Banner, NoticeGate, NoticeKind};
use std::rc::Rc;
use std::time::Duration;

const VISIBLE: &str = "show";

fn banner(page: &Rc<FakePage>, motion: Motion<NodeId>) -> (Banner<FakePage>, NodeId) {
    let node = page.node("notification");
    (
        Banner::new(page.clone(), motion, node, NoticeKind::Theme, VISIBLE),
        node,
    )
}

#[test]
fn gate_claims_once() {
    let gate = NoticeGate::new();
    assert!(!gate.was_shown());
    assert!(gate.claim());
    assert!(!gate.claim());
    assert!(gate.was_shown());
}

#[test]
fn shown_once_per_session() {
    let page = FakePage::new();
    let (b, node) = banner(&page, Rc::new(NoAnimation::<NodeId>::new()));
    assert!(b.show());
    assert!(page.data(node).classes.contains(VISIBLE));
    assert!(!b.show());
    page.advance(NOTICE_AUTO_DISMISS);
    assert!(!b.show());
    assert!(!page.data(node).classes.contains(VISIBLE));
}

#[test]
fn timeout_dismisses_exactly_once() {
    let page = FakePage::new();
    let (b, node) = banner(&page, Rc::new(NoAnimation::<NodeId>::new()));
    b.show();
    page.advance(NOTICE_AUTO_DISMISS - Duration::from_millis(1));
    assert!(b.is_visible());
    page.advance(Duration::from_millis(1));
    assert!(!b.is_visible());
    assert!(!page.data(node).classes.contains(VISIBLE));
    assert!(!b.dismiss());
    assert_eq!(b.dismissals(), 1);
}

#[test]
fn explicit_dismiss_beats_timeout() {
    let page = FakePage::new();
    let (b, node) = banner(&page, Rc::new(NoAnimation::<NodeId>::new()));
    b.show();
    assert!(b.dismiss());
    assert!(!page.data(node).classes.contains(VISIBLE));
    page.advance(NOTICE_AUTO_DISMISS);
    assert_eq!(b.dismissals(), 1);
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn class_stays_until_exit_tween_finishes() {
    let page = FakePage::new();
    let anim = ManualAnimator::new();
    let (b, node) = banner(&page, anim.clone());
    b.show();
    assert_eq!(anim.tween_count(), 1);
    b.dismiss();
    assert!(page.data(node).classes.contains(VISIBLE));
    anim.complete_all();
    assert!(!page.data(node).classes.contains(VISIBLE));
}

#[test]
fn dismiss_before_show_is_noop() {
    let page = FakePage::new();
    let (b, _) = banner(&page, Rc::new(NoAnimation::<NodeId>::new()));
    assert!(!b.dismiss());
    assert_eq!(b.dismissals(), 0);
}
