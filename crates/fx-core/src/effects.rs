//! Short-lived decorative visuals and the policy deciding which effects run.

use crate::constants::{
    BURST_PARTICLES, BURST_SPREAD_PX, BURST_TTL, TRAIL_COLOR, TRAIL_SPREAD_PX, TRAIL_TTL,
    VISUAL_CLASS,
};
use crate::motion::{Ease, Motion, Tween, TweenSpec};
use crate::page::Page;
use crate::props;
use fnv::FnvHashMap;
use glam::DVec2;
use instant::Instant;
use rand::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// A decorative element owned by the emitter that created it.
#[derive(Clone, Copy, Debug)]
pub struct EphemeralVisual {
    pub position: DVec2,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl EphemeralVisual {
    #[inline]
    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.ttl
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    /// One fading dot per pointer move.
    Trail,
    /// A ring of coloured dots per click.
    Burst,
}

impl Profile {
    pub fn count(self) -> usize {
        match self {
            Profile::Trail => 1,
            Profile::Burst => BURST_PARTICLES,
        }
    }

    pub fn ttl(self) -> Duration {
        match self {
            Profile::Trail => TRAIL_TTL,
            Profile::Burst => BURST_TTL,
        }
    }

    fn background(self, rng: &mut StdRng) -> String {
        match self {
            Profile::Trail => TRAIL_COLOR.to_owned(),
            Profile::Burst => format!("hsl({:.0}, 70%, 50%)", rng.gen_range(0.0..360.0)),
        }
    }

    fn tween(self, rng: &mut StdRng) -> Tween {
        let secs = self.ttl().as_secs_f64();
        match self {
            Profile::Trail => {
                let dx = (rng.gen::<f64>() - 0.5) * TRAIL_SPREAD_PX;
                let dy = (rng.gen::<f64>() - 0.5) * TRAIL_SPREAD_PX;
                Tween::to(
                    props!(Scale: 2.5, Opacity: 0.0, X: dx, Y: dy),
                    TweenSpec::new(secs, Ease::Power2Out),
                )
            }
            Profile::Burst => {
                let dx = (rng.gen::<f64>() - 0.5) * BURST_SPREAD_PX;
                let dy = (rng.gen::<f64>() - 0.5) * BURST_SPREAD_PX;
                Tween::to(
                    props!(X: dx, Y: dy, Scale: 0.0, Opacity: 0.0),
                    TweenSpec::new(secs, Ease::Power2Out),
                )
            }
        }
    }
}

struct EmitterInner<P: Page> {
    page: Rc<P>,
    motion: Motion<P::Node>,
    live: RefCell<FnvHashMap<u64, (P::Node, EphemeralVisual)>>,
    next_id: Cell<u64>,
    rng: RefCell<StdRng>,
}

impl<P: Page> EmitterInner<P> {
    fn retire(&self, id: u64) {
        let removed = self.live.borrow_mut().remove(&id);
        if let Some((node, _)) = removed {
            self.page.remove(&node);
        }
    }
}

/// Spawns visuals and guarantees each one is detached exactly once, on
/// animation completion or when its ttl runs out, whichever comes first.
pub struct Emitter<P: Page> {
    inner: Rc<EmitterInner<P>>,
}

impl<P: Page + 'static> Emitter<P> {
    pub fn new(page: Rc<P>, motion: Motion<P::Node>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            inner: Rc::new(EmitterInner {
                page,
                motion,
                live: RefCell::new(FnvHashMap::default()),
                next_id: Cell::new(0),
                rng: RefCell::new(rng),
            }),
        }
    }

    /// Attached visuals not yet retired.
    pub fn live(&self) -> usize {
        self.inner.live.borrow().len()
    }

    /// Emits `profile` at page coordinates `(x, y)`. Returns how many
    /// visuals were spawned.
    pub fn emit(&self, x: f64, y: f64, profile: Profile) -> usize {
        (0..profile.count())
            .filter(|_| self.spawn_one(x, y, profile))
            .count()
    }

    fn spawn_one(&self, x: f64, y: f64, profile: Profile) -> bool {
        let e = &self.inner;
        let (background, tween) = {
            let mut rng = e.rng.borrow_mut();
            (profile.background(&mut rng), profile.tween(&mut rng))
        };
        let Some(node) = e.page.spawn_visual(VISUAL_CLASS, x, y, &background) else {
            return false;
        };
        let id = e.next_id.get();
        e.next_id.set(id.wrapping_add(1));
        let visual = EphemeralVisual {
            position: DVec2::new(x, y),
            created_at: Instant::now(),
            ttl: profile.ttl(),
        };
        e.live.borrow_mut().insert(id, (node.clone(), visual));

        let backstop = self.inner.clone();
        e.page.defer(visual.ttl, Box::new(move || backstop.retire(id)));

        // Without an engine the visual just sits until the backstop fires.
        if e.motion.is_live() {
            let done = self.inner.clone();
            e.motion
                .animate(&[node], tween.on_complete(move || done.retire(id)));
        }
        true
    }
}

/// Which effects to install, decided once at start-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectPlan {
    pub trail: bool,
    pub burst: bool,
    pub ambient_field: bool,
    pub hero_rings: bool,
    pub hero_points: bool,
    pub section_points: bool,
    pub reveals: bool,
    pub cta_pulse: bool,
    pub profile_scrub: bool,
    /// Remove pre-existing ambient backgrounds and soften static glows.
    pub purge_backgrounds: bool,
}

impl EffectPlan {
    pub fn from_preference(reduced_motion: bool, animator_live: bool) -> Self {
        if reduced_motion {
            return EffectPlan {
                purge_backgrounds: true,
                ..Default::default()
            };
        }
        EffectPlan {
            trail: true,
            burst: animator_live,
            ambient_field: true,
            hero_rings: true,
            hero_points: true,
            section_points: true,
            reveals: animator_live,
            cta_pulse: animator_live,
            profile_scrub: animator_live,
            purge_backgrounds: false,
        }
    }

    /// Whether any emitter listens to the pointer.
    pub fn follows_pointer(&self) -> bool {
        self.trail || self.burst
    }

    /// Number of effects that need a per-frame callback.
    pub fn frame_consumers(&self) -> usize {
        [
            self.ambient_field,
            self.hero_rings,
            self.hero_points,
            self.section_points,
        ]
        .iter()
        .filter(|on| **on)
        .count()
    }
}
