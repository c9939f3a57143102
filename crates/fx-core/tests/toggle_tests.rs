// Theme, language, menu and dropdown state machines.

mod common;

use common::{FakePage, ManualAnimator, NodeId};
use fx_core::dropdown::{Composer, Dropdowns};
use fx_core::focus::ACTIVE_CLASS;
use fx_core::menu::MobileMenu;
use fx_core::motion::{Motion, NoAnimation};
use fx_core::switches::{LanguageSwitch, ThemeSwitch, LIGHT_MODE_CLASS, SUN_ICON_CLASS};
use fx_core::toggle::{Binary, Language, Openness, Theme, ToggleCell};
use std::rc::Rc;

const NARROW: f64 = 600.0;
const WIDE: f64 = 1200.0;

fn instant() -> Motion<NodeId> {
    Rc::new(NoAnimation::<NodeId>::new())
}

#[test]
fn toggle_cell_transitions() {
    let cell = ToggleCell::new(Theme::Dark);
    let t = cell.flip();
    assert_eq!((t.from, t.to), (Theme::Dark, Theme::Light));
    assert_eq!(cell.set(Theme::Light), None);
    assert!(cell.set(Theme::Dark).is_some());
    assert_eq!(Openness::Open.flipped(), Openness::Closed);
}

#[test]
fn language_codes() {
    assert_eq!(Language::from_code("ar"), Language::Ar);
    assert_eq!(Language::from_code(" AR "), Language::Ar);
    assert_eq!(Language::from_code("en"), Language::En);
    assert_eq!(Language::from_code("fr"), Language::En);
    assert_eq!(Language::Ar.direction(), "rtl");
    assert_eq!(Language::En.font_family(), "'Poppins', sans-serif");
}

#[test]
fn theme_clicks_alternate_without_engine() {
    let page = FakePage::new();
    let body = page.node("");
    let icon = page.node("fas fa-moon");
    let theme = ThemeSwitch::new(page.clone(), instant(), body, Some(icon), None);

    assert_eq!(theme.toggle(), Theme::Light);
    assert!(page.data(body).classes.contains(LIGHT_MODE_CLASS));
    assert!(page.data(icon).classes.contains(SUN_ICON_CLASS));
    assert!(!page.data(icon).classes.contains("fa-moon"));

    assert_eq!(theme.toggle(), Theme::Dark);
    assert!(!page.data(body).classes.contains(LIGHT_MODE_CLASS));
    assert!(page.data(icon).classes.contains("fa-moon"));
    // No engine, no body fade.
    assert!(page.style(body, "transition").is_none());
}

#[test]
fn theme_fades_body_with_engine() {
    let page = FakePage::new();
    let body = page.node("");
    let anim = ManualAnimator::new();
    let theme = ThemeSwitch::new(page.clone(), anim.clone(), body, None, None);
    theme.toggle();
    assert_eq!(anim.tween_count(), 1);
    assert_eq!(anim.tweens.borrow()[0].targets, vec![body]);
    assert!(page.style(body, "transition").is_some());
}

#[test]
fn second_theme_click_replaces_running_fade() {
    let page = FakePage::new();
    let body = page.node("");
    let anim = ManualAnimator::new();
    let theme = ThemeSwitch::new(page.clone(), anim.clone(), body, None, None);
    theme.toggle();
    theme.toggle();
    assert_eq!(anim.tween_count(), 2);
    assert_eq!(anim.in_flight(), 1);
    assert_eq!(anim.kills.get(), 2);
    assert!(anim.tweens.borrow().iter().all(|t| t.spec.overwrite));
}

#[test]
fn language_swaps_tagged_texts() {
    let page = FakePage::new();
    let body = page.node("");
    let hello = page.node("");
    page.with_attr(hello, "data-en", "Hello");
    page.with_attr(hello, "data-ar", "مرحبا");
    let anim = ManualAnimator::new();
    let children = vec![page.node("header"), page.node("main")];
    let lang = LanguageSwitch::new(
        page.clone(),
        anim.clone(),
        body,
        vec![hello],
        children.clone(),
        None,
    );

    assert_eq!(lang.select("ar"), Language::Ar);
    assert_eq!(page.text(hello), "مرحبا");
    assert_eq!(page.style(body, "direction").as_deref(), Some("rtl"));
    assert_eq!(
        page.style(body, "font-family").as_deref(),
        Some("'Tajawal', sans-serif")
    );
    assert_eq!(anim.tweens.borrow()[0].targets, children);

    assert_eq!(lang.select("en"), Language::En);
    assert_eq!(page.text(hello), "Hello");
    assert_eq!(page.style(body, "direction").as_deref(), Some("ltr"));
}

#[test]
fn second_language_pick_replaces_running_fade() {
    let page = FakePage::new();
    let body = page.node("");
    let anim = ManualAnimator::new();
    let children = vec![page.node("header"), page.node("main"), page.node("footer")];
    let lang = LanguageSwitch::new(page.clone(), anim.clone(), body, vec![], children, None);

    lang.select("ar");
    lang.select("en");
    assert_eq!(anim.tween_count(), 2);
    assert_eq!(anim.in_flight(), 1);
    assert_eq!(anim.kills.get(), 2);
    assert!(anim.tweens.borrow().iter().all(|t| t.spec.overwrite));
    assert_eq!(lang.language(), Language::En);
}

struct MenuFixture {
    page: Rc<FakePage>,
    menu_node: NodeId,
    hamburger: NodeId,
    items: Vec<NodeId>,
}

fn menu_fixture() -> MenuFixture {
    let page = FakePage::new();
    let menu_node = page.node("nav-menu");
    let hamburger = page.node("hamburger");
    let items = (0..4).map(|_| page.node("nav-item")).collect();
    MenuFixture {
        page,
        menu_node,
        hamburger,
        items,
    }
}

#[test]
fn menu_reaches_final_state_without_engine() {
    let f = menu_fixture();
    let menu = MobileMenu::new(f.page.clone(), instant(), f.menu_node, f.hamburger, f.items.clone());

    assert_eq!(menu.toggle(NARROW), Some(Openness::Open));
    assert_eq!(f.page.style(f.menu_node, "display").as_deref(), Some("flex"));
    assert!(f.page.data(f.hamburger).classes.contains(ACTIVE_CLASS));

    assert_eq!(menu.toggle(NARROW), Some(Openness::Closed));
    assert_eq!(f.page.style(f.menu_node, "display").as_deref(), Some("none"));
    assert!(!f.page.data(f.menu_node).classes.contains(ACTIVE_CLASS));
    assert!(!f.page.data(f.hamburger).classes.contains(ACTIVE_CLASS));
}

#[test]
fn menu_ignores_hamburger_on_wide_viewports() {
    let f = menu_fixture();
    let menu = MobileMenu::new(f.page.clone(), instant(), f.menu_node, f.hamburger, f.items.clone());
    assert_eq!(menu.toggle(WIDE), None);
    assert_eq!(menu.state(), Openness::Closed);
    assert!(f.page.style(f.menu_node, "display").is_none());
}

#[test]
fn rapid_reopen_cancels_pending_close() {
    let f = menu_fixture();
    let anim = ManualAnimator::new();
    let menu = MobileMenu::new(f.page.clone(), anim.clone(), f.menu_node, f.hamburger, f.items.clone());

    menu.toggle(NARROW);
    menu.toggle(NARROW);
    // Close is still animating; a third click reopens before it lands.
    assert_eq!(menu.toggle(NARROW), Some(Openness::Open));
    anim.complete_all();
    assert_eq!(f.page.style(f.menu_node, "display").as_deref(), Some("flex"));
    assert!(f.page.data(f.menu_node).classes.contains(ACTIVE_CLASS));
    assert!(anim.cleared.borrow().is_empty());
}

#[test]
fn close_completion_clears_item_props() {
    let f = menu_fixture();
    let anim = ManualAnimator::new();
    let menu = MobileMenu::new(f.page.clone(), anim.clone(), f.menu_node, f.hamburger, f.items.clone());
    menu.toggle(NARROW);
    menu.toggle(NARROW);
    assert!(f.page.data(f.menu_node).classes.contains(ACTIVE_CLASS));
    anim.complete_all();
    assert_eq!(f.page.style(f.menu_node, "display").as_deref(), Some("none"));
    assert_eq!(*anim.cleared.borrow(), f.items);
}

#[test]
fn menu_resets_when_viewport_turns_wide() {
    let f = menu_fixture();
    let menu = MobileMenu::new(f.page.clone(), instant(), f.menu_node, f.hamburger, f.items.clone());
    menu.toggle(NARROW);
    menu.on_layout(WIDE);
    assert_eq!(menu.state(), Openness::Closed);
    assert_eq!(f.page.style(f.menu_node, "display").as_deref(), Some(""));
    assert!(!menu.close_from_link());
}

fn dropdown_fixture(page: &Rc<FakePage>) -> (NodeId, NodeId) {
    let dd = page.node("dropdown");
    let content = page.node("dropdown-content");
    (dd, content)
}

#[test]
fn dropdown_toggles_below_breakpoint() {
    let page = FakePage::new();
    let (dd, content) = dropdown_fixture(&page);
    let dropdowns = Dropdowns::new(page.clone(), instant(), vec![(dd, Some(content))]);

    assert!(dropdowns.toggle(0, NARROW));
    assert_eq!(dropdowns.state(0), Some(Openness::Open));
    assert!(page.data(dd).classes.contains(ACTIVE_CLASS));
    assert_eq!(page.style(content, "display").as_deref(), Some("block"));

    assert!(dropdowns.toggle(0, NARROW));
    assert_eq!(dropdowns.state(0), Some(Openness::Closed));
    assert_eq!(page.style(content, "display").as_deref(), Some("none"));
}

#[test]
fn dropdown_reclick_cancels_running_pane_tween() {
    let page = FakePage::new();
    let (dd, content) = dropdown_fixture(&page);
    let anim = ManualAnimator::new();
    let dropdowns = Dropdowns::new(page.clone(), anim.clone(), vec![(dd, Some(content))]);

    dropdowns.toggle(0, NARROW);
    dropdowns.toggle(0, NARROW);
    assert_eq!(anim.in_flight(), 1);
    // Reopen before the close lands: the pane stays shown.
    dropdowns.toggle(0, NARROW);
    assert_eq!(anim.in_flight(), 1);
    anim.complete_all();
    assert_eq!(dropdowns.state(0), Some(Openness::Open));
    assert_eq!(page.style(content, "display").as_deref(), Some("block"));
}

#[test]
fn dropdown_passes_through_on_wide_or_without_content() {
    let page = FakePage::new();
    let (dd, content) = dropdown_fixture(&page);
    let bare = page.node("dropdown");
    let dropdowns = Dropdowns::new(page.clone(), instant(), vec![(dd, Some(content)), (bare, None)]);
    assert!(!dropdowns.toggle(0, WIDE));
    assert!(!dropdowns.toggle(1, NARROW));
    assert!(!dropdowns.toggle(7, NARROW));
    assert_eq!(dropdowns.state(0), Some(Openness::Closed));
}

#[test]
fn dropdown_glow_needs_engine_and_wide_viewport() {
    let page = FakePage::new();
    let (dd, content) = dropdown_fixture(&page);
    let anim = ManualAnimator::new();
    let dropdowns = Dropdowns::new(page.clone(), anim.clone(), vec![(dd, Some(content))]);
    dropdowns.hover(0, true, NARROW);
    assert_eq!(anim.tween_count(), 0);
    dropdowns.hover(0, true, WIDE);
    dropdowns.hover(0, false, NARROW);
    assert_eq!(anim.tween_count(), 2);
}

#[test]
fn composer_replaces_never_appends() {
    let page = FakePage::new();
    let pane = page.node("dropdown-content");
    let items: Vec<NodeId> = (0..3).map(|_| page.node("nav-link")).collect();
    let composer = Composer::new(page.clone(), Some(pane), items);

    assert_eq!(composer.compose(NARROW), None);
    assert_eq!(page.children(pane).len(), 0);
    assert_eq!(composer.compose(WIDE), Some(3));
    assert_eq!(composer.compose(WIDE), Some(3));
    assert_eq!(composer.compose(1500.0), Some(3));
    assert_eq!(page.children(pane).len(), 3);

    let missing = Composer::new(page.clone(), None, vec![]);
    assert_eq!(missing.compose(WIDE), None);
}
