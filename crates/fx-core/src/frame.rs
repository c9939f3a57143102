/// Per-frame work, driven by the host's animation-frame loop.
pub type FrameFn = Box<dyn FnMut(f64)>;

/// Named per-frame callbacks. The host only starts a loop when this is
/// non-empty, so under reduced motion no frame is ever requested.
#[derive(Default)]
pub struct FrameRegistry {
    consumers: Vec<(&'static str, FrameFn)>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &'static str, f: impl FnMut(f64) + 'static) {
        log::debug!("[frame] + {}", name);
        self.consumers.push((name, Box::new(f)));
    }

    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.consumers.iter().map(|(n, _)| *n)
    }

    /// Runs every consumer once with the frame timestamp in milliseconds.
    pub fn run(&mut self, time_ms: f64) {
        for (_, f) in self.consumers.iter_mut() {
            f(time_ms);
        }
    }
}
