//! Theme and language switches.

use crate::constants::{LANGUAGE_FADE_SECS, LANGUAGE_FADE_STAGGER_SECS, THEME_FADE_SECS};
use crate::motion::{Ease, Motion, Stagger, Tween, TweenSpec};
use crate::notice::Banner;
use crate::page::Page;
use crate::props;
use crate::toggle::{Language, Theme, ToggleCell};
use std::rc::Rc;

pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const MOON_ICON_CLASS: &str = "fa-moon";
pub const SUN_ICON_CLASS: &str = "fa-sun";

pub struct ThemeSwitch<P: Page> {
    page: Rc<P>,
    motion: Motion<P::Node>,
    body: P::Node,
    icon: Option<P::Node>,
    banner: Option<Banner<P>>,
    cell: ToggleCell<Theme>,
}

impl<P: Page + 'static> ThemeSwitch<P> {
    pub fn new(
        page: Rc<P>,
        motion: Motion<P::Node>,
        body: P::Node,
        icon: Option<P::Node>,
        banner: Option<Banner<P>>,
    ) -> Self {
        Self {
            page,
            motion,
            body,
            icon,
            banner,
            cell: ToggleCell::new(Theme::default()),
        }
    }

    pub fn theme(&self) -> Theme {
        self.cell.get()
    }

    pub fn banner(&self) -> Option<&Banner<P>> {
        self.banner.as_ref()
    }

    /// One click: flips the theme and presents the result.
    pub fn toggle(&self) -> Theme {
        let t = self.cell.flip();
        let page = &self.page;
        let (icon_on, icon_off) = match t.to {
            Theme::Light => {
                page.add_class(&self.body, LIGHT_MODE_CLASS);
                (SUN_ICON_CLASS, MOON_ICON_CLASS)
            }
            Theme::Dark => {
                page.remove_class(&self.body, LIGHT_MODE_CLASS);
                (MOON_ICON_CLASS, SUN_ICON_CLASS)
            }
        };
        if let Some(icon) = &self.icon {
            page.remove_class(icon, icon_off);
            page.add_class(icon, icon_on);
        }
        if t.to == Theme::Light {
            if let Some(banner) = &self.banner {
                banner.show();
            }
        }
        if self.motion.is_live() {
            page.set_style(
                &self.body,
                "transition",
                &format!(
                    "background-color {s}s ease, color {s}s ease",
                    s = THEME_FADE_SECS
                ),
            );
            let targets = [self.body.clone()];
            self.motion.kill_in_flight(&targets);
            self.motion.animate(
                &targets,
                Tween::from_to(
                    props!(Opacity: 0.8),
                    props!(Opacity: 1.0),
                    TweenSpec::new(THEME_FADE_SECS, Ease::Power2Out).overwrite(),
                ),
            );
        }
        log::info!("[theme] {:?} -> {:?}", t.from, t.to);
        t.to
    }
}

pub struct LanguageSwitch<P: Page> {
    page: Rc<P>,
    motion: Motion<P::Node>,
    body: P::Node,
    texts: Vec<P::Node>,
    fade_targets: Vec<P::Node>,
    banner: Option<Banner<P>>,
    cell: ToggleCell<Language>,
}

impl<P: Page + 'static> LanguageSwitch<P> {
    /// `texts` are the elements tagged with both `data-en` and `data-ar`;
    /// `fade_targets` are the body's top-level children.
    pub fn new(
        page: Rc<P>,
        motion: Motion<P::Node>,
        body: P::Node,
        texts: Vec<P::Node>,
        fade_targets: Vec<P::Node>,
        banner: Option<Banner<P>>,
    ) -> Self {
        Self {
            page,
            motion,
            body,
            texts,
            fade_targets,
            banner,
            cell: ToggleCell::new(Language::default()),
        }
    }

    pub fn language(&self) -> Language {
        self.cell.get()
    }

    pub fn banner(&self) -> Option<&Banner<P>> {
        self.banner.as_ref()
    }

    /// Applies the selector's value. Re-selecting the current language
    /// re-applies its texts.
    pub fn select(&self, code: &str) -> Language {
        let lang = Language::from_code(code);
        let changed = self.cell.set(lang).is_some();
        let page = &self.page;
        let attr = lang.text_attribute();
        for node in &self.texts {
            if let Some(text) = page.attribute(node, attr) {
                page.set_text(node, &text);
            }
        }
        page.set_style(&self.body, "direction", lang.direction());
        page.set_style(&self.body, "font-family", lang.font_family());
        if lang == Language::Ar {
            if let Some(banner) = &self.banner {
                banner.show();
            }
        }
        if self.motion.is_live() && !self.fade_targets.is_empty() {
            self.motion.kill_in_flight(&self.fade_targets);
            self.motion.animate(
                &self.fade_targets,
                Tween::from_to(
                    props!(Opacity: 0.5),
                    props!(Opacity: 1.0),
                    TweenSpec::new(LANGUAGE_FADE_SECS, Ease::Power2Out)
                        .stagger(Stagger::Each(LANGUAGE_FADE_STAGGER_SECS))
                        .overwrite(),
                ),
            );
        }
        if changed {
            log::info!("[lang] -> {} ({} texts)", lang.code(), self.texts.len());
        }
        lang
    }
}
