use crate::constants::NAV_BREAKPOINT_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

/// Last observed scroll offset and the direction of the move that led there.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub last_offset: f64,
    pub direction: ScrollDirection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    #[inline]
    pub fn from_width(width: f64) -> Self {
        if width < NAV_BREAKPOINT_PX {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

/// Layout metrics that are only known after the first layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    pub header_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Layout {
    #[inline]
    pub fn class(&self) -> ViewportClass {
        ViewportClass::from_width(self.viewport_width)
    }
}

#[derive(Debug, Default)]
pub struct ViewportTracker {
    scroll: ScrollState,
    layout: Layout,
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f64) -> ScrollState {
        let current = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        let direction = if current > self.scroll.last_offset {
            ScrollDirection::Down
        } else if current < self.scroll.last_offset {
            ScrollDirection::Up
        } else {
            ScrollDirection::None
        };
        self.scroll = ScrollState {
            last_offset: current,
            direction,
        };
        self.scroll
    }

    pub fn on_layout(&mut self, layout: Layout) {
        if self.layout.class() != layout.class() {
            log::debug!(
                "[viewport] class {:?} -> {:?} at {}px",
                self.layout.class(),
                layout.class(),
                layout.viewport_width
            );
        }
        self.layout = layout;
    }

    #[inline]
    pub fn snapshot(&self) -> ScrollState {
        self.scroll
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }
}
