//! Wires the components together and routes host events to them.
//!
//! The host discovers the anchors once, builds a [`Coordinator`] and then
//! forwards every scroll, resize, pointer and click event. Components that
//! lack their anchors are simply not installed.

use crate::chrome::{ChromeController, ChromeMode};
use crate::dropdown::{Composer, Dropdowns};
use crate::effects::{EffectPlan, Emitter, Profile};
use crate::error::{require, FxError, FxResult};
use crate::focus::SectionFocus;
use crate::menu::MobileMenu;
use crate::motion::Motion;
use crate::nav::{NavLinks, NavOutcome};
use crate::notice::{Banner, NoticeKind};
use crate::page::Page;
use crate::reveal::{pulse_cta, settle_for_reduced_motion, ProfileScrub, Reveals};
use crate::switches::{LanguageSwitch, ThemeSwitch};
use crate::toggle::{Language, Openness, Theme};
use crate::viewport::{Layout, ScrollState, ViewportTracker};
use std::cell::RefCell;
use std::rc::Rc;

pub const THEME_BANNER_VISIBLE_CLASS: &str = "show";
pub const LANGUAGE_BANNER_VISIBLE_CLASS: &str = "active";

/// Every node the coordinator may touch, looked up once by the host.
pub struct Anchors<N> {
    pub body: N,
    pub header: Option<N>,
    pub nav: Option<N>,
    pub sections: Vec<N>,
    pub nav_links: Vec<N>,

    pub theme_toggle: Option<N>,
    pub theme_icon: Option<N>,
    pub theme_banner: Option<N>,
    pub language_toggle: Option<N>,
    pub language_banner: Option<N>,
    /// Elements carrying both `data-en` and `data-ar`.
    pub texts: Vec<N>,
    pub body_children: Vec<N>,

    pub menu: Option<N>,
    pub hamburger: Option<N>,
    pub menu_items: Vec<N>,
    /// Dropdown containers with their content panes.
    pub dropdowns: Vec<(N, Option<N>)>,
    pub dropdown_pane: Option<N>,
    pub dropdown_items: Vec<N>,

    pub reveal_sections: Vec<N>,
    pub section_titles: Vec<N>,
    pub footer: Option<N>,
    pub footer_columns: Vec<N>,
    pub cta: Option<N>,
    pub hero: Option<N>,
    /// Profile image and its parent.
    pub profile: Option<(N, N)>,
    pub ambient_canvas: Option<N>,
    pub section_backgrounds: Vec<N>,
}

impl<N> Anchors<N> {
    pub fn new(body: N) -> Self {
        Self {
            body,
            header: None,
            nav: None,
            sections: Vec::new(),
            nav_links: Vec::new(),
            theme_toggle: None,
            theme_icon: None,
            theme_banner: None,
            language_toggle: None,
            language_banner: None,
            texts: Vec::new(),
            body_children: Vec::new(),
            menu: None,
            hamburger: None,
            menu_items: Vec::new(),
            dropdowns: Vec::new(),
            dropdown_pane: None,
            dropdown_items: Vec::new(),
            reveal_sections: Vec::new(),
            section_titles: Vec::new(),
            footer: None,
            footer_columns: Vec::new(),
            cta: None,
            hero: None,
            profile: None,
            ambient_canvas: None,
            section_backgrounds: Vec::new(),
        }
    }
}

pub struct Coordinator<P: Page> {
    plan: EffectPlan,
    tracker: RefCell<ViewportTracker>,
    chrome: ChromeController<P>,
    focus: Rc<SectionFocus<P>>,
    nav: NavLinks<P>,
    theme: Option<ThemeSwitch<P>>,
    language: Option<LanguageSwitch<P>>,
    menu: Option<Rc<MobileMenu<P>>>,
    dropdowns: Dropdowns<P>,
    composer: Composer<P>,
    trail: Option<Emitter<P>>,
    burst: Option<Emitter<P>>,
    reveals: Option<Reveals<P>>,
    profile: Option<ProfileScrub<P>>,
}

/// Logs why an optional feature stayed inert.
fn optional<T>(feature: &str, r: FxResult<T>) -> Option<T> {
    match r {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("[init] {} skipped: {}", feature, e);
            None
        }
    }
}

impl<P: Page + 'static> Coordinator<P> {
    /// Builds every component in page-script order. `seed` fixes the
    /// visual randomness (tests); `None` seeds from entropy.
    pub fn install(
        page: Rc<P>,
        motion: Motion<P::Node>,
        anchors: Anchors<P::Node>,
        plan: EffectPlan,
        seed: Option<u64>,
    ) -> Self {
        let Anchors {
            body,
            header,
            nav,
            sections,
            nav_links,
            theme_toggle,
            theme_icon,
            theme_banner,
            language_toggle,
            language_banner,
            texts,
            body_children,
            menu,
            hamburger,
            menu_items,
            dropdowns,
            dropdown_pane,
            dropdown_items,
            reveal_sections,
            section_titles,
            footer,
            footer_columns,
            cta,
            hero,
            profile,
            ambient_canvas,
            section_backgrounds,
        } = anchors;

        let chrome = ChromeController::new(page.clone(), header, nav);

        let theme = optional(
            "theme",
            require(theme_toggle, "#theme-toggle").map(|_| {
                let banner = theme_banner.map(|n| {
                    Banner::new(
                        page.clone(),
                        motion.clone(),
                        n,
                        NoticeKind::Theme,
                        THEME_BANNER_VISIBLE_CLASS,
                    )
                });
                ThemeSwitch::new(page.clone(), motion.clone(), body.clone(), theme_icon, banner)
            }),
        );

        let menu = optional(
            "mobile menu",
            Self::mobile_menu(&page, &motion, menu, hamburger, menu_items),
        )
        .map(Rc::new);

        let focus = Rc::new(SectionFocus::new(page.clone(), sections, nav_links));
        let nav = NavLinks::new(page.clone(), motion.clone(), focus.clone(), menu.clone());

        let language = optional(
            "language",
            require(language_toggle, "#language-toggle").map(|_| {
                let banner = language_banner.map(|n| {
                    Banner::new(
                        page.clone(),
                        motion.clone(),
                        n,
                        NoticeKind::Language,
                        LANGUAGE_BANNER_VISIBLE_CLASS,
                    )
                });
                LanguageSwitch::new(
                    page.clone(),
                    motion.clone(),
                    body.clone(),
                    texts,
                    body_children,
                    banner,
                )
            }),
        );

        let dropdowns = Dropdowns::new(page.clone(), motion.clone(), dropdowns);
        let composer = Composer::new(page.clone(), dropdown_pane, dropdown_items);

        let scrub = if plan.profile_scrub {
            optional(
                "profile scrub",
                Self::profile_scrub(&page, &motion, hero, profile.as_ref()),
            )
        } else {
            None
        };
        let trail = plan
            .trail
            .then(|| Emitter::new(page.clone(), motion.clone(), seed));
        let burst = plan.burst.then(|| {
            Emitter::new(
                page.clone(),
                motion.clone(),
                seed.map(|s| s.wrapping_add(1)),
            )
        });
        let reveals = plan.reveals.then(|| {
            let footer = footer.map(|f| (f, footer_columns));
            Reveals::new(
                page.clone(),
                motion.clone(),
                reveal_sections,
                section_titles,
                footer,
            )
        });
        if plan.cta_pulse {
            if let Some(cta) = &cta {
                pulse_cta(&motion, cta);
            }
        }
        if plan.purge_backgrounds {
            settle_for_reduced_motion(
                page.as_ref(),
                &motion,
                ambient_canvas.as_ref(),
                profile.as_ref().map(|(img, _)| img),
                &section_backgrounds,
            );
        }

        log::info!(
            "[init] sections={} links={} dropdowns={} frame consumers={}",
            focus.section_count(),
            focus.link_count(),
            dropdowns.len(),
            plan.frame_consumers()
        );

        Self {
            plan,
            tracker: RefCell::new(ViewportTracker::new()),
            chrome,
            focus,
            nav,
            theme,
            language,
            menu,
            dropdowns,
            composer,
            trail,
            burst,
            reveals,
            profile: scrub,
        }
    }

    fn mobile_menu(
        page: &Rc<P>,
        motion: &Motion<P::Node>,
        menu: Option<P::Node>,
        hamburger: Option<P::Node>,
        items: Vec<P::Node>,
    ) -> FxResult<MobileMenu<P>> {
        let hamburger = require(hamburger, ".hamburger")?;
        let menu = require(menu, "#nav-menu")?;
        Ok(MobileMenu::new(
            page.clone(),
            motion.clone(),
            menu,
            hamburger,
            items,
        ))
    }

    fn profile_scrub(
        page: &Rc<P>,
        motion: &Motion<P::Node>,
        hero: Option<P::Node>,
        profile: Option<&(P::Node, P::Node)>,
    ) -> FxResult<ProfileScrub<P>> {
        let (image, frame) = require(profile, ".profile-img")?;
        let hero = require(hero, ".hero")?;
        if !motion.is_live() {
            return Err(FxError::CollaboratorUnavailable("animation engine"));
        }
        ProfileScrub::new(page.clone(), motion.clone(), hero, image.clone(), frame)
    }

    pub fn plan(&self) -> EffectPlan {
        self.plan
    }

    /// First layout pass plus a sync of everything scroll-derived.
    pub fn on_load(&self, width: f64, height: f64, offset: f64) {
        self.on_layout(width, height);
        self.on_scroll(offset);
    }

    /// Resize or load: re-derive the header height, viewport class and
    /// every trigger boundary.
    pub fn on_layout(&self, width: f64, height: f64) {
        let previous = self.tracker.borrow().layout().header_height;
        let header_height = self.chrome.on_layout().unwrap_or(previous);
        let layout = Layout {
            header_height,
            viewport_width: width,
            viewport_height: height,
        };
        self.tracker.borrow_mut().on_layout(layout);
        self.focus.on_layout(height);
        if let Some(r) = &self.reveals {
            r.on_layout(height);
        }
        if let Some(p) = &self.profile {
            p.on_layout(height);
        }
        self.composer.compose(width);
        if let Some(m) = &self.menu {
            m.on_layout(width);
        }
        // Boundaries moved; report what the current offset now implies.
        let offset = self.tracker.borrow().snapshot().last_offset;
        self.focus.on_scroll(offset);
        if let Some(r) = &self.reveals {
            r.on_scroll(offset);
        }
    }

    /// Tracker first, then every subscriber in a fixed order.
    pub fn on_scroll(&self, offset: f64) -> ScrollState {
        let state = self.tracker.borrow_mut().on_scroll(offset);
        self.chrome.apply(state);
        self.focus.on_scroll(state.last_offset);
        if let Some(r) = &self.reveals {
            r.on_scroll(state.last_offset);
        }
        if let Some(p) = &self.profile {
            p.on_scroll(state.last_offset);
        }
        state
    }

    /// Pointer moved to page coordinates. Returns the visuals spawned.
    pub fn on_pointer_move(&self, page_x: f64, page_y: f64) -> usize {
        self.trail
            .as_ref()
            .map_or(0, |t| t.emit(page_x, page_y, Profile::Trail))
    }

    /// Click anywhere on the document.
    pub fn on_click(&self, page_x: f64, page_y: f64) -> usize {
        self.burst
            .as_ref()
            .map_or(0, |b| b.emit(page_x, page_y, Profile::Burst))
    }

    pub fn on_theme_click(&self) -> Option<Theme> {
        self.theme.as_ref().map(ThemeSwitch::toggle)
    }

    pub fn on_language_change(&self, code: &str) -> Option<Language> {
        self.language.as_ref().map(|l| l.select(code))
    }

    pub fn on_hamburger_click(&self) -> Option<Openness> {
        let width = self.layout().viewport_width;
        self.menu.as_ref()?.toggle(width)
    }

    pub fn on_nav_link_click(&self, index: usize) -> NavOutcome {
        self.nav.click(index)
    }

    /// Returns true when the click's default must be prevented.
    pub fn on_dropdown_click(&self, index: usize) -> bool {
        self.dropdowns.toggle(index, self.layout().viewport_width)
    }

    pub fn on_dropdown_hover(&self, index: usize, entering: bool) {
        self.dropdowns
            .hover(index, entering, self.layout().viewport_width);
    }

    pub fn on_banner_dismiss(&self, kind: NoticeKind) -> bool {
        let banner = match kind {
            NoticeKind::Theme => self.theme.as_ref().and_then(|t| t.banner()),
            NoticeKind::Language => self.language.as_ref().and_then(|l| l.banner()),
        };
        banner.map_or(false, Banner::dismiss)
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.borrow().snapshot()
    }

    pub fn layout(&self) -> Layout {
        self.tracker.borrow().layout()
    }

    pub fn chrome_mode(&self) -> Option<ChromeMode> {
        self.chrome.mode()
    }

    pub fn active_section(&self) -> Option<String> {
        self.focus.active()
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme.as_ref().map(ThemeSwitch::theme)
    }

    pub fn language(&self) -> Option<Language> {
        self.language.as_ref().map(LanguageSwitch::language)
    }

    pub fn menu_state(&self) -> Option<Openness> {
        self.menu.as_ref().map(|m| m.state())
    }

    pub fn dropdown_state(&self, index: usize) -> Option<Openness> {
        self.dropdowns.state(index)
    }

    /// Trail and burst visuals still attached.
    pub fn live_visuals(&self) -> usize {
        self.trail.as_ref().map_or(0, Emitter::live) + self.burst.as_ref().map_or(0, Emitter::live)
    }
}
