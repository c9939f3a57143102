use std::time::Duration;

// Shared tuning constants for the coordinator and its effects.

// Chrome
pub const COMPACT_THRESHOLD_PX: f64 = 50.0; // scroll depth before the header may compact
pub const CHROME_TRANSITION_SECS: f64 = 0.3; // same for both directions
pub const CHROME_EASE: &str = "ease-out";

// Layout breakpoints
pub const NAV_BREAKPOINT_PX: f64 = 992.0; // narrow below, wide at or above

// Section focus: region is "active" between these viewport anchors
pub const FOCUS_START: &str = "top 20%";
pub const FOCUS_END: &str = "bottom 20%";

// Smooth scroll
pub const SCROLL_OFFSET_PX: f64 = 70.0;
pub const SCROLL_DURATION_SECS: f64 = 1.0;

// Toggles
pub const THEME_FADE_SECS: f64 = 0.5;
pub const LANGUAGE_FADE_SECS: f64 = 0.5;
pub const LANGUAGE_FADE_STAGGER_SECS: f64 = 0.05;
pub const MENU_ITEM_SECS: f64 = 0.6;
pub const MENU_ITEM_STAGGER_SECS: f64 = 0.1;
pub const DROPDOWN_SECS: f64 = 0.4;
pub const DROPDOWN_GLOW_SECS: f64 = 0.3;

// Notices
pub const NOTICE_AUTO_DISMISS: Duration = Duration::from_secs(5);
pub const NOTICE_IN_SECS: f64 = 0.6;
pub const NOTICE_OUT_SECS: f64 = 0.4;

// Transient visuals
pub const TRAIL_TTL: Duration = Duration::from_millis(700);
pub const TRAIL_SPREAD_PX: f64 = 20.0;
pub const TRAIL_COLOR: &str = "rgba(124, 58, 237, 0.7)";
pub const BURST_PARTICLES: usize = 20;
pub const BURST_TTL: Duration = Duration::from_millis(800);
pub const BURST_SPREAD_PX: f64 = 100.0;
pub const VISUAL_CLASS: &str = "trail";

// Ambient 2D particle field
pub const FIELD_PARTICLES: usize = 150;
pub const FIELD_SPEED_SPAN: f32 = 0.5; // initial velocity in [-span/2, span/2]
pub const FIELD_MAX_SPEED: f32 = 4.0;
pub const FIELD_SCROLL_DRIFT: f32 = 2.0; // vertical drift per unit of hero scroll progress
pub const REPEL_RADIUS_PX: f32 = 100.0;
pub const REPEL_GAIN: f32 = 0.1; // velocity impulse at 1px distance

// Hero rings
pub const RING_COUNT: usize = 3;
pub const RING_BASE_RADIUS: f64 = 50.0;
pub const RING_SWELL: f64 = 20.0;
pub const RING_TIME_STEP: f64 = 0.05;

// 3D point clouds
pub const HERO_POINTS: usize = 2000;
pub const HERO_SPREAD: f32 = 10.0;
pub const HERO_POINT_SIZE: f32 = 0.025;
pub const HERO_CAMERA_Z: f32 = 5.0;
pub const HERO_COLOR: [f32; 3] = [0.0, 0.867, 0.922]; // #00ddeb
pub const SECTION_POINTS: usize = 1000;
pub const SECTION_SPREAD: f32 = 100.0;
pub const SECTION_POINT_SIZE: f32 = 0.5;
pub const SECTION_CAMERA_Z: f32 = 50.0;
pub const SECTION_COLOR: [f32; 3] = [0.486, 0.227, 0.929]; // #7c3aed
pub const POINT_SPIN_PER_FRAME: f32 = 0.001;
pub const CAMERA_FOVY_DEG: f32 = 75.0;

// Reveals
pub const REVEAL_START: &str = "top 80%";
pub const REVEAL_SECS: f64 = 1.5;
pub const TITLE_REVEAL_SECS: f64 = 1.8;
pub const FOOTER_REVEAL_SECS: f64 = 0.0; // columns snap in, only the stagger is visible
pub const FOOTER_STAGGER_SECS: f64 = 0.5;
pub const CTA_PULSE_SECS: f64 = 1.5;
pub const PROFILE_SCRUB_SECS: f64 = 0.6;
pub const WAVES_SCRUB_SECS: f64 = 1.0;
pub const REDUCED_MOTION_TIME_SCALE: f64 = 2.0;
