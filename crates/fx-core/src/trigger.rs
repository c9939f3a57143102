//! Boundary-crossing notifications for regions of the document.
//!
//! A trigger region starts when an edge of the element meets a line in the
//! viewport (`"top 20%"`: element top at 20% of the viewport height) and ends
//! at a second such pair. Crossing events are reported in the order the
//! scroll position passed their boundaries.

use crate::page::Span;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    #[inline]
    fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }

    fn parse(word: &str) -> Option<Self> {
        match word {
            "top" => Some(Edge::Top),
            "center" => Some(Edge::Center),
            "bottom" => Some(Edge::Bottom),
            _ => None,
        }
    }
}

/// Pairs an element edge with a line in the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub edge: Edge,
    pub viewport_fraction: f64,
}

impl Anchor {
    pub const fn new(edge: Edge, viewport_fraction: f64) -> Self {
        Self {
            edge,
            viewport_fraction,
        }
    }

    /// Parses `"<edge> <line>"` where line is `top`, `center`, `bottom` or a
    /// percentage such as `80%`.
    pub fn parse(text: &str) -> Option<Self> {
        let mut words = text.split_whitespace();
        let edge = Edge::parse(words.next()?)?;
        let line = words.next()?;
        if words.next().is_some() {
            return None;
        }
        let viewport_fraction = match Edge::parse(line) {
            Some(e) => e.fraction(),
            None => line.strip_suffix('%')?.parse::<f64>().ok()? / 100.0,
        };
        Some(Self::new(edge, viewport_fraction))
    }

    /// Scroll offset at which this anchor is met for `span`.
    #[inline]
    pub fn offset(&self, span: Span, viewport_height: f64) -> f64 {
        span.top + span.height * self.edge.fraction() - viewport_height * self.viewport_fraction
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Before,
    Active,
    After,
}

#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    start_anchor: Anchor,
    end_anchor: Anchor,
    start: f64,
    end: f64,
    phase: Phase,
}

/// Crossing events with the offsets of the boundaries that caused them.
pub type Crossings = SmallVec<[(TriggerEvent, f64); 2]>;

impl ScrollTrigger {
    pub fn new(span: Span, start: Anchor, end: Anchor, viewport_height: f64) -> Self {
        let mut t = Self {
            start_anchor: start,
            end_anchor: end,
            start: 0.0,
            end: 0.0,
            phase: Phase::Before,
        };
        t.relayout(span, viewport_height);
        t
    }

    /// Recomputes boundaries after a layout change. No events fire here; the
    /// next `update` reports any crossing the new boundaries imply.
    pub fn relayout(&mut self, span: Span, viewport_height: f64) {
        self.start = self.start_anchor.offset(span, viewport_height);
        self.end = self.end_anchor.offset(span, viewport_height).max(self.start);
    }

    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn progress(&self, offset: f64) -> f64 {
        let span = self.end - self.start;
        if span <= f64::EPSILON {
            return if offset >= self.end { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / span).clamp(0.0, 1.0)
    }

    pub fn update(&mut self, offset: f64) -> Crossings {
        let next = if offset < self.start {
            Phase::Before
        } else if offset > self.end {
            Phase::After
        } else {
            Phase::Active
        };
        let (s, e) = (self.start, self.end);
        let mut out = Crossings::new();
        match (self.phase, next) {
            (Phase::Before, Phase::Active) => out.push((TriggerEvent::Enter, s)),
            (Phase::Before, Phase::After) => {
                out.push((TriggerEvent::Enter, s));
                out.push((TriggerEvent::Leave, e));
            }
            (Phase::Active, Phase::After) => out.push((TriggerEvent::Leave, e)),
            (Phase::After, Phase::Active) => out.push((TriggerEvent::EnterBack, e)),
            (Phase::After, Phase::Before) => {
                out.push((TriggerEvent::EnterBack, e));
                out.push((TriggerEvent::LeaveBack, s));
            }
            (Phase::Active, Phase::Before) => out.push((TriggerEvent::LeaveBack, s)),
            _ => {}
        }
        self.phase = next;
        out
    }
}

/// Triggers keyed by `K`, updated together.
#[derive(Clone, Debug)]
pub struct TriggerSet<K> {
    triggers: Vec<(K, ScrollTrigger)>,
    last_offset: Option<f64>,
}

impl<K> Default for TriggerSet<K> {
    fn default() -> Self {
        Self {
            triggers: Vec::new(),
            last_offset: None,
        }
    }
}

impl<K: Clone> TriggerSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: K, trigger: ScrollTrigger) {
        self.triggers.push((key, trigger));
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut ScrollTrigger)> {
        self.triggers.iter_mut().map(|(k, t)| (&*k, t))
    }

    /// Fires every trigger for the move to `offset`. Events come back sorted
    /// by the boundary offset in the direction of travel, so the region
    /// crossed last is reported last.
    pub fn update(&mut self, offset: f64) -> Vec<(K, TriggerEvent)> {
        let upward = matches!(self.last_offset, Some(prev) if offset < prev);
        self.last_offset = Some(offset);
        let mut fired: Vec<(K, TriggerEvent, f64)> = Vec::new();
        for (key, trigger) in self.triggers.iter_mut() {
            for (ev, at) in trigger.update(offset) {
                fired.push((key.clone(), ev, at));
            }
        }
        if upward {
            fired.sort_by(|a, b| b.2.total_cmp(&a.2));
        } else {
            fired.sort_by(|a, b| a.2.total_cmp(&b.2));
        }
        fired.into_iter().map(|(k, ev, _)| (k, ev)).collect()
    }
}
