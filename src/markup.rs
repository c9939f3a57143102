use fx_core::Anchors;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const HEADER: &str = ".top-header";
pub const NAVBAR: &str = "#navbar";
pub const SECTIONS: &str = "section";
pub const NAV_LINKS: &str = ".nav-link";
pub const THEME_TOGGLE: &str = "theme-toggle";
pub const THEME_ICON: &str = "#theme-toggle i";
pub const THEME_BANNER: &str = "theme-notification";
pub const LANGUAGE_TOGGLE: &str = "language-toggle";
pub const LANGUAGE_BANNER: &str = "lang-notification";
pub const CLOSE_BUTTON: &str = ".close-btn";
pub const BILINGUAL: &str = "[data-en][data-ar]";
pub const BODY_CHILDREN: &str = "body > *";
pub const MENU: &str = "nav-menu";
pub const HAMBURGER: &str = ".hamburger";
pub const MENU_ITEMS: &str = ".nav-menu li";
pub const DROPDOWNS: &str = ".dropdown";
pub const DROPDOWN_CONTENT: &str = ".dropdown-content";
pub const DROPDOWN_SOURCES: &str = ".dropdown-item .nav-link";
pub const REVEAL_SECTIONS: &str = ".animate-section";
pub const SECTION_TITLES: &str = ".section-title";
pub const FOOTER: &str = ".main-footer";
pub const FOOTER_COLUMNS: &str = ".footer-col";
pub const CTA: &str = ".animate-hero a";
pub const HERO: &str = ".hero";
pub const PROFILE: &str = ".profile-img";
pub const AMBIENT_CANVAS: &str = "canvas";
pub const SECTION_BACKGROUNDS: &str = ".section-bg";

/// Class of the canvases the section point layers add.
pub const SECTION_BG_CLASS: &str = "section-bg";
/// Class of the hero ring canvas.
pub const HERO_WAVES_CLASS: &str = "hero-waves absolute left-0";

pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Looks every anchor up once. Only the body is mandatory.
pub fn discover(document: &web::Document) -> anyhow::Result<Anchors<web::Element>> {
    let body: web::Element = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?
        .into();
    let id = |name: &str| document.get_element_by_id(name);

    let mut a = Anchors::new(body);
    a.header = query(document, HEADER);
    a.nav = query(document, NAVBAR);
    a.sections = query_all(document, SECTIONS);
    a.nav_links = query_all(document, NAV_LINKS);

    a.theme_toggle = id(THEME_TOGGLE);
    a.theme_icon = query(document, THEME_ICON);
    a.theme_banner = id(THEME_BANNER);
    a.language_toggle = id(LANGUAGE_TOGGLE);
    a.language_banner = id(LANGUAGE_BANNER);
    a.texts = query_all(document, BILINGUAL);
    a.body_children = query_all(document, BODY_CHILDREN);

    a.menu = id(MENU);
    a.hamburger = query(document, HAMBURGER);
    a.menu_items = query_all(document, MENU_ITEMS);
    a.dropdowns = query_all(document, DROPDOWNS)
        .into_iter()
        .map(|d| {
            let content = d.query_selector(DROPDOWN_CONTENT).ok().flatten();
            (d, content)
        })
        .collect();
    a.dropdown_pane = query(document, DROPDOWN_CONTENT);
    a.dropdown_items = query_all(document, DROPDOWN_SOURCES);

    a.reveal_sections = query_all(document, REVEAL_SECTIONS);
    a.section_titles = query_all(document, SECTION_TITLES);
    a.footer = query(document, FOOTER);
    a.footer_columns = query_all(document, FOOTER_COLUMNS);
    a.cta = query(document, CTA);
    a.hero = query(document, HERO);
    a.profile = query(document, PROFILE).and_then(|img| {
        let parent = img.parent_element()?;
        Some((img, parent))
    });
    a.ambient_canvas = id(AMBIENT_CANVAS);
    a.section_backgrounds = query_all(document, SECTION_BACKGROUNDS);

    log::info!(
        "[markup] sections={} links={} dropdowns={} texts={}",
        a.sections.len(),
        a.nav_links.len(),
        a.dropdowns.len(),
        a.texts.len()
    );
    Ok(a)
}
