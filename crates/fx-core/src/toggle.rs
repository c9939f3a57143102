//! Small enumerated UI states and their transition cells.

use std::cell::Cell;

/// A state with exactly one successor.
pub trait Binary: Copy + Eq + std::fmt::Debug {
    fn flipped(self) -> Self;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Binary for Theme {
    fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Anything other than `"ar"` selects English.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("ar") {
            Language::Ar
        } else {
            Language::En
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Attribute carrying the element's text in this language.
    pub fn text_attribute(self) -> &'static str {
        match self {
            Language::En => "data-en",
            Language::Ar => "data-ar",
        }
    }

    pub fn direction(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn font_family(self) -> &'static str {
        match self {
            Language::En => "'Poppins', sans-serif",
            Language::Ar => "'Tajawal', sans-serif",
        }
    }
}

impl Binary for Language {
    fn flipped(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Openness {
    #[default]
    Closed,
    Open,
}

impl Openness {
    #[inline]
    pub fn is_open(self) -> bool {
        self == Openness::Open
    }
}

impl Binary for Openness {
    fn flipped(self) -> Self {
        match self {
            Openness::Closed => Openness::Open,
            Openness::Open => Openness::Closed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S> {
    pub from: S,
    pub to: S,
}

/// One toggle's state. Interior mutability lets deferred callbacks and
/// event handlers share a cell through `&self`.
#[derive(Debug, Default)]
pub struct ToggleCell<S: Binary> {
    state: Cell<S>,
}

impl<S: Binary> ToggleCell<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: Cell::new(initial),
        }
    }

    #[inline]
    pub fn get(&self) -> S {
        self.state.get()
    }

    pub fn flip(&self) -> Transition<S> {
        let from = self.state.get();
        let to = from.flipped();
        self.state.set(to);
        Transition { from, to }
    }

    /// Moves to `to`; `None` when already there.
    pub fn set(&self, to: S) -> Option<Transition<S>> {
        let from = self.state.replace(to);
        (from != to).then_some(Transition { from, to })
    }
}
