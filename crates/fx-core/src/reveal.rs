//! Scroll-linked entrances and the hero profile scrub.
//!
//! Everything here needs a live animator; with the instant fallback the
//! content is simply left in its natural state.

use crate::constants::{
    CTA_PULSE_SECS, FOOTER_REVEAL_SECS, FOOTER_STAGGER_SECS, PROFILE_SCRUB_SECS,
    REDUCED_MOTION_TIME_SCALE, REVEAL_SECS, REVEAL_START, TITLE_REVEAL_SECS, WAVES_SCRUB_SECS,
};
use crate::error::{FxError, FxResult};
use crate::motion::{Ease, Motion, Prop, PropValue, Props, Stagger, Tween, TweenSpec};
use crate::page::{Page, Span};
use crate::props;
use crate::trigger::{Anchor, Edge, ScrollTrigger, TriggerEvent, TriggerSet};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const ENERGY_WAVES_CLASS: &str = "energy-waves";
const CTA_GLOW: &str = "0 0 10px rgba(124, 58, 237, 0.5), 0 0 20px rgba(124, 58, 237, 0.3)";
const CALM_PROFILE_FILTER: &str = "drop-shadow(0 0 10px rgba(0, 209, 235, 0.5))";

fn reveal_anchor() -> Anchor {
    Anchor::parse(REVEAL_START).unwrap_or(Anchor::new(Edge::Top, 0.8))
}

/// Start-only triggers end where they start.
fn start_trigger(span: Span, viewport_height: f64) -> ScrollTrigger {
    let a = reveal_anchor();
    ScrollTrigger::new(span, a, Anchor::new(Edge::Top, a.viewport_fraction), viewport_height)
}

fn section_hidden(index: usize) -> Props {
    let tilt = if index % 2 == 0 { -10.0 } else { 10.0 };
    props!(Opacity: 0.0, Y: 150.0, Scale: 0.9, Rotation: tilt)
}

fn section_shown() -> Props {
    props!(Opacity: 1.0, Y: 0.0, Scale: 1.0, Rotation: 0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RevealKey {
    Section(usize),
    Title(usize),
    Footer,
}

struct Once<N> {
    node: N,
    played: Cell<bool>,
}

/// Section, title and footer entrances.
pub struct Reveals<P: Page> {
    page: Rc<P>,
    motion: Motion<P::Node>,
    sections: Vec<P::Node>,
    titles: Vec<Once<P::Node>>,
    footer: Option<(Once<P::Node>, Vec<P::Node>)>,
    triggers: RefCell<TriggerSet<RevealKey>>,
}

impl<P: Page> Reveals<P> {
    /// Puts every target into its hidden state and arms its trigger.
    pub fn new(
        page: Rc<P>,
        motion: Motion<P::Node>,
        sections: Vec<P::Node>,
        titles: Vec<P::Node>,
        footer: Option<(P::Node, Vec<P::Node>)>,
    ) -> Self {
        let mut triggers = TriggerSet::new();
        for (i, node) in sections.iter().enumerate() {
            motion.set_immediate(std::slice::from_ref(node), &section_hidden(i));
            triggers.register(RevealKey::Section(i), start_trigger(page.span(node), 0.0));
        }
        let title_hidden = props!(Opacity: 0.0, Y: 200.0, Scale: 0.8);
        let titles: Vec<Once<P::Node>> = titles
            .into_iter()
            .enumerate()
            .map(|(i, node)| {
                motion.set_immediate(std::slice::from_ref(&node), &title_hidden);
                triggers.register(RevealKey::Title(i), start_trigger(page.span(&node), 0.0));
                Once {
                    node,
                    played: Cell::new(false),
                }
            })
            .collect();
        let footer = footer.map(|(node, cols)| {
            motion.set_immediate(&cols, &props!(Opacity: 0.0, Y: 80.0));
            triggers.register(RevealKey::Footer, start_trigger(page.span(&node), 0.0));
            (
                Once {
                    node,
                    played: Cell::new(false),
                },
                cols,
            )
        });
        log::debug!(
            "[reveal] {} sections, {} titles, footer: {}",
            sections.len(),
            titles.len(),
            footer.is_some()
        );
        Self {
            page,
            motion,
            sections,
            titles,
            footer,
            triggers: RefCell::new(triggers),
        }
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.borrow().len()
    }

    pub fn on_layout(&self, viewport_height: f64) {
        let mut triggers = self.triggers.borrow_mut();
        for (key, trigger) in triggers.iter_mut() {
            let node = match *key {
                RevealKey::Section(i) => &self.sections[i],
                RevealKey::Title(i) => &self.titles[i].node,
                RevealKey::Footer => match &self.footer {
                    Some((once, _)) => &once.node,
                    None => continue,
                },
            };
            trigger.relayout(self.page.span(node), viewport_height);
        }
    }

    /// Plays on enter, reverses sections on leave-back. Returns how many
    /// tweens were started.
    pub fn on_scroll(&self, offset: f64) -> usize {
        let fired = self.triggers.borrow_mut().update(offset);
        let mut started = 0;
        for (key, ev) in fired {
            match (key, ev) {
                (RevealKey::Section(i), TriggerEvent::Enter) => {
                    self.tween_section(i, section_shown());
                    started += 1;
                }
                (RevealKey::Section(i), TriggerEvent::LeaveBack) => {
                    self.tween_section(i, section_hidden(i));
                    started += 1;
                }
                (RevealKey::Title(i), TriggerEvent::Enter) => {
                    let title = &self.titles[i];
                    if !title.played.replace(true) {
                        self.motion.animate(
                            std::slice::from_ref(&title.node),
                            Tween::to(
                                props!(Opacity: 1.0, Y: 0.0, Scale: 1.0),
                                TweenSpec::new(TITLE_REVEAL_SECS, Ease::Power4Out),
                            ),
                        );
                        started += 1;
                    }
                }
                (RevealKey::Footer, TriggerEvent::Enter) => {
                    if let Some((once, cols)) = &self.footer {
                        if !once.played.replace(true) {
                            self.motion.animate(
                                cols,
                                Tween::to(
                                    props!(Opacity: 1.0, Y: 0.0),
                                    TweenSpec::new(FOOTER_REVEAL_SECS, Ease::SineOut)
                                        .stagger(Stagger::FromCenter(FOOTER_STAGGER_SECS)),
                                ),
                            );
                            started += 1;
                        }
                    }
                }
                _ => {}
            }
        }
        started
    }

    fn tween_section(&self, index: usize, to: Props) {
        self.motion.animate(
            std::slice::from_ref(&self.sections[index]),
            Tween::to(to, TweenSpec::new(REVEAL_SECS, Ease::Power3Out).overwrite()),
        );
    }
}

/// Infinite glow pulse on the hero call-to-action.
pub fn pulse_cta<N>(motion: &Motion<N>, cta: &N) {
    motion.animate(
        std::slice::from_ref(cta),
        Tween::to(
            props!(BoxShadow: CTA_GLOW),
            TweenSpec::new(CTA_PULSE_SECS, Ease::SineInOut).forever_yoyo(),
        ),
    );
}

/// Profile image values at scrub position `p` (0..1) for scroll `offset`.
pub fn profile_props(p: f64, offset: f64, viewport_height: f64) -> Props {
    let mut out = props!(
        Y: -viewport_height * 0.1 * p,
        RotationY: (offset * 0.008).sin() * 20.0 * p,
        RotationX: (offset * 0.008).cos() * 15.0 * p,
        Scale: 1.0 + 0.15 * p,
    );
    out.push((
        Prop::Filter,
        PropValue::from(format!(
            "drop-shadow(0 0 {:.1}px rgba(0, 209, 235, {:.3})) brightness({:.3})",
            35.0 * p,
            0.8 * p,
            1.0 + 0.2 * p
        )),
    ));
    out
}

/// Energy-wave overlay values at scrub position `p`.
pub fn waves_props(p: f64) -> Props {
    let size = format!("{:.1}%", 100.0 + 50.0 * p);
    let mut out = props!(Opacity: 0.8 * p);
    out.push((Prop::Width, PropValue::from(size.clone())));
    out.push((Prop::Height, PropValue::from(size)));
    out
}

/// 3D tilt of the profile image and a growing energy-wave ring, both
/// scrubbed by the hero's scroll position.
pub struct ProfileScrub<P: Page> {
    page: Rc<P>,
    motion: Motion<P::Node>,
    hero: P::Node,
    image: P::Node,
    waves: P::Node,
    tilt: RefCell<ScrollTrigger>,
    swell: RefCell<ScrollTrigger>,
    viewport_height: Cell<f64>,
}

impl<P: Page> ProfileScrub<P> {
    /// `frame` is the image's parent; the wave element is appended to it.
    pub fn new(
        page: Rc<P>,
        motion: Motion<P::Node>,
        hero: P::Node,
        image: P::Node,
        frame: &P::Node,
    ) -> FxResult<Self> {
        let waves = page
            .append_child(frame, ENERGY_WAVES_CLASS)
            .ok_or(FxError::CollaboratorUnavailable("energy-waves element"))?;
        let span = page.span(&hero);
        let top_top = Anchor::new(Edge::Top, 0.0);
        let top_center = Anchor::new(Edge::Top, 0.5);
        let bottom_top = Anchor::new(Edge::Bottom, 0.0);
        let tilt = ScrollTrigger::new(span, top_top, bottom_top, 0.0);
        let swell = ScrollTrigger::new(span, top_center, bottom_top, 0.0);
        Ok(Self {
            page,
            motion,
            hero,
            image,
            waves,
            tilt: RefCell::new(tilt),
            swell: RefCell::new(swell),
            viewport_height: Cell::new(0.0),
        })
    }

    pub fn waves(&self) -> &P::Node {
        &self.waves
    }

    pub fn on_layout(&self, viewport_height: f64) {
        let span = self.page.span(&self.hero);
        self.viewport_height.set(viewport_height);
        self.tilt.borrow_mut().relayout(span, viewport_height);
        self.swell.borrow_mut().relayout(span, viewport_height);
    }

    /// Eases both elements toward the values for `offset`.
    pub fn on_scroll(&self, offset: f64) {
        let tilt = self.tilt.borrow().progress(offset);
        let swell = self.swell.borrow().progress(offset);
        self.motion.animate(
            std::slice::from_ref(&self.image),
            Tween::to(
                profile_props(tilt, offset, self.viewport_height.get()),
                TweenSpec::new(PROFILE_SCRUB_SECS, Ease::Power2Out).overwrite(),
            ),
        );
        self.motion.animate(
            std::slice::from_ref(&self.waves),
            Tween::to(
                waves_props(swell),
                TweenSpec::new(WAVES_SCRUB_SECS, Ease::SineInOut).overwrite(),
            ),
        );
    }
}

/// Reduced-motion housekeeping: hide the ambient canvas, remove section
/// backgrounds, calm the profile glow and speed up whatever still animates.
pub fn settle_for_reduced_motion<P: Page>(
    page: &P,
    motion: &Motion<P::Node>,
    ambient_canvas: Option<&P::Node>,
    profile: Option<&P::Node>,
    section_backgrounds: &[P::Node],
) {
    if let Some(canvas) = ambient_canvas {
        page.set_style(canvas, "display", "none");
    }
    if motion.is_live() {
        if let Some(img) = profile {
            motion.set_immediate(
                std::slice::from_ref(img),
                &props!(Filter: CALM_PROFILE_FILTER),
            );
        }
        motion.set_time_scale(REDUCED_MOTION_TIME_SCALE);
    }
    for bg in section_backgrounds {
        page.remove(bg);
    }
    log::info!(
        "[motion] reduced: purged {} backgrounds",
        section_backgrounds.len()
    );
}
