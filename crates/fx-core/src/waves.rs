use crate::constants::{RING_BASE_RADIUS, RING_COUNT, RING_SWELL, RING_TIME_STEP};

/// One concentric ring of the hero pulse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub alpha: f64,
}

/// Ring phase clock, advanced once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct RingClock {
    pub time: f64,
}

impl RingClock {
    pub fn tick(&mut self) -> [Ring; RING_COUNT] {
        self.time += RING_TIME_STEP;
        pulse_rings(self.time)
    }
}

pub fn pulse_rings(time: f64) -> [Ring; RING_COUNT] {
    std::array::from_fn(|i| Ring {
        radius: RING_BASE_RADIUS + (time + i as f64).sin() * RING_SWELL,
        alpha: 0.5 - i as f64 * 0.1,
    })
}

pub fn stroke_style(ring: &Ring) -> String {
    format!("rgba(124, 58, 237, {:.2})", ring.alpha)
}
