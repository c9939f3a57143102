// Scroll-linked entrances, the CTA pulse and the profile scrub.

mod common;

use common::{FakePage, ManualAnimator, NodeId};
use fx_core::motion::{Prop, PropValue, Props, Stagger};
use fx_core::reveal::{
    profile_props, pulse_cta, settle_for_reduced_motion, waves_props, ProfileScrub, Reveals,
    ENERGY_WAVES_CLASS,
};
use std::rc::Rc;

fn num(props: &Props, prop: Prop) -> Option<f64> {
    props.iter().find(|(p, _)| *p == prop).and_then(|(_, v)| match v {
        PropValue::Num(n) => Some(*n),
        PropValue::Text(_) => None,
    })
}

fn text(props: &Props, prop: Prop) -> Option<String> {
    props.iter().find(|(p, _)| *p == prop).and_then(|(_, v)| match v {
        PropValue::Text(t) => Some(t.to_string()),
        PropValue::Num(_) => None,
    })
}

struct Fixture {
    anim: Rc<ManualAnimator>,
    reveals: Reveals<FakePage>,
    sections: Vec<NodeId>,
    title: NodeId,
    cols: Vec<NodeId>,
}

fn fixture() -> Fixture {
    let page = FakePage::new();
    let anim = ManualAnimator::new();
    let sections = vec![
        page.with_span(page.node("animate-section"), 1000.0, 500.0),
        page.with_span(page.node("animate-section"), 1600.0, 500.0),
    ];
    let title = page.with_span(page.node("section-title"), 1200.0, 80.0);
    let footer = page.with_span(page.node("main-footer"), 4000.0, 300.0);
    let cols: Vec<NodeId> = (0..3).map(|_| page.node("footer-col")).collect();
    let reveals = Reveals::new(
        page.clone(),
        anim.clone(),
        sections.clone(),
        vec![title],
        Some((footer, cols.clone())),
    );
    reveals.on_layout(1000.0);
    Fixture {
        anim,
        reveals,
        sections,
        title,
        cols,
    }
}

#[test]
fn targets_start_hidden_with_alternating_tilt() {
    let f = fixture();
    assert_eq!(f.reveals.trigger_count(), 4);
    let sets = f.anim.sets.borrow();
    assert_eq!(sets[0].0, vec![f.sections[0]]);
    assert_eq!(num(&sets[0].1, Prop::Rotation), Some(-10.0));
    assert_eq!(num(&sets[1].1, Prop::Rotation), Some(10.0));
    assert_eq!(num(&sets[2].1, Prop::Y), Some(200.0));
    assert_eq!(sets[3].0, f.cols);
}

#[test]
fn sections_play_and_reverse() {
    let f = fixture();
    // First section starts at 1000 - 800 = 200.
    assert_eq!(f.reveals.on_scroll(100.0), 0);
    assert_eq!(f.reveals.on_scroll(300.0), 1);
    {
        let t = f.anim.tweens.borrow();
        assert_eq!(t[0].targets, vec![f.sections[0]]);
        assert_eq!(num(&t[0].to, Prop::Opacity), Some(1.0));
    }
    assert_eq!(f.reveals.on_scroll(100.0), 1);
    let t = f.anim.tweens.borrow();
    assert_eq!(num(&t[1].to, Prop::Opacity), Some(0.0));
    assert_eq!(num(&t[1].to, Prop::Rotation), Some(-10.0));
}

#[test]
fn titles_and_footer_play_once() {
    let f = fixture();
    f.reveals.on_scroll(450.0);
    f.reveals.on_scroll(0.0);
    f.reveals.on_scroll(450.0);
    let title_tweens = f
        .anim
        .tweens
        .borrow()
        .iter()
        .filter(|t| t.targets == vec![f.title])
        .count();
    assert_eq!(title_tweens, 1);

    f.reveals.on_scroll(3500.0);
    f.reveals.on_scroll(0.0);
    f.reveals.on_scroll(3500.0);
    let tweens = f.anim.tweens.borrow();
    let footer: Vec<_> = tweens.iter().filter(|t| t.targets == f.cols).collect();
    assert_eq!(footer.len(), 1);
    assert_eq!(footer[0].spec.stagger, Some(Stagger::FromCenter(0.5)));
}

#[test]
fn cta_pulses_forever() {
    let page = FakePage::new();
    let anim = ManualAnimator::new();
    let cta = page.node("cta");
    let motion: fx_core::Motion<NodeId> = anim.clone();
    pulse_cta(&motion, &cta);
    let t = anim.tweens.borrow();
    assert_eq!(t[0].spec.repeat, -1);
    assert!(t[0].spec.yoyo);
    assert!(text(&t[0].to, Prop::BoxShadow).is_some());
}

#[test]
fn scrub_values_follow_progress() {
    let rest = profile_props(0.0, 0.0, 800.0);
    assert_eq!(num(&rest, Prop::Scale), Some(1.0));
    assert_eq!(num(&rest, Prop::Y), Some(0.0));
    let full = profile_props(1.0, 0.0, 800.0);
    assert!((num(&full, Prop::Scale).unwrap() - 1.15).abs() < 1e-9);
    assert!((num(&full, Prop::Y).unwrap() + 80.0).abs() < 1e-9);
    assert!((num(&full, Prop::RotationX).unwrap() - 15.0).abs() < 1e-9);
    assert!(text(&full, Prop::Filter).unwrap().contains("brightness(1.200)"));

    let waves = waves_props(1.0);
    assert_eq!(text(&waves, Prop::Width).as_deref(), Some("150.0%"));
    assert!((num(&waves, Prop::Opacity).unwrap() - 0.8).abs() < 1e-9);
}

#[test]
fn profile_scrub_tracks_hero_scroll() {
    let page = FakePage::new();
    let anim = ManualAnimator::new();
    let hero = page.with_span(page.node("hero"), 0.0, 1000.0);
    let frame = page.node("profile-frame");
    let image = page.node("profile-img");
    let scrub = ProfileScrub::new(page.clone(), anim.clone(), hero, image, &frame).unwrap();
    assert_eq!(page.children(frame), vec![*scrub.waves()]);
    assert!(page.data(*scrub.waves()).classes.contains(ENERGY_WAVES_CLASS));

    scrub.on_layout(800.0);
    scrub.on_scroll(500.0);
    let t = anim.tweens.borrow();
    assert_eq!(t.len(), 2);
    assert_eq!(t[0].targets, vec![image]);
    // Halfway through "top top" .. "bottom top".
    assert!((num(&t[0].to, Prop::Scale).unwrap() - 1.075).abs() < 1e-9);
    assert!(t[0].spec.overwrite);
}

#[test]
fn reduced_motion_housekeeping() {
    let page = FakePage::new();
    let anim = ManualAnimator::new();
    let canvas = page.node("canvas");
    let img = page.node("profile-img");
    let bgs = vec![page.node("section-bg"), page.node("section-bg")];
    let motion: fx_core::Motion<NodeId> = anim.clone();
    settle_for_reduced_motion(page.as_ref(), &motion, Some(&canvas), Some(&img), &bgs);
    assert_eq!(page.style(canvas, "display").as_deref(), Some("none"));
    assert_eq!(page.attached_with_class("section-bg"), 0);
    assert_eq!(anim.time_scale.get(), 2.0);
    assert_eq!(anim.sets.borrow()[0].0, vec![img]);
}
