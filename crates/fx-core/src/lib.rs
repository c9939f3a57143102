pub mod chrome;
pub mod constants;
pub mod coordinator;
pub mod dropdown;
pub mod effects;
pub mod error;
pub mod focus;
pub mod frame;
pub mod menu;
pub mod motion;
pub mod nav;
pub mod notice;
pub mod page;
pub mod particles;
pub mod reveal;
pub mod scene;
pub mod switches;
pub mod toggle;
pub mod trigger;
pub mod viewport;
pub mod waves;

pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use coordinator::{Anchors, Coordinator};
pub use effects::EffectPlan;
pub use error::{FxError, FxResult};
pub use frame::FrameRegistry;
pub use motion::{Animator, Motion, NoAnimation};
pub use page::{Page, Span};
