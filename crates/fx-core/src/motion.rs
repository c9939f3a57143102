//! Tween descriptions and the animation-engine capability.
//!
//! An [`Animator`] is chosen once at start-up: the GSAP-backed one when the
//! engine is loaded, otherwise [`NoAnimation`], which skips interpolation and
//! runs the tween's callbacks immediately so every caller still reaches its
//! final state.

use crate::page::Callback;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::marker::PhantomData;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Power2Out,
    Power2In,
    Power2InOut,
    Power3Out,
    Power4Out,
    SineInOut,
    SineOut,
    BackOut(f32),
}

impl Ease {
    /// GSAP ease string.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Ease::Power2Out => "power2.out".into(),
            Ease::Power2In => "power2.in".into(),
            Ease::Power2InOut => "power2.inOut".into(),
            Ease::Power3Out => "power3.out".into(),
            Ease::Power4Out => "power4.out".into(),
            Ease::SineInOut => "sine.inOut".into(),
            Ease::SineOut => "sine.out".into(),
            Ease::BackOut(overshoot) => format!("back.out({})", overshoot).into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    Opacity,
    X,
    Y,
    Scale,
    Rotation,
    RotationX,
    RotationY,
    Width,
    Height,
    BoxShadow,
    Filter,
}

impl Prop {
    /// Property key as the animation engine spells it.
    pub fn key(&self) -> &'static str {
        match self {
            Prop::Opacity => "opacity",
            Prop::X => "x",
            Prop::Y => "y",
            Prop::Scale => "scale",
            Prop::Rotation => "rotation",
            Prop::RotationX => "rotationX",
            Prop::RotationY => "rotationY",
            Prop::Width => "width",
            Prop::Height => "height",
            Prop::BoxShadow => "boxShadow",
            Prop::Filter => "filter",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Num(f64),
    Text(Cow<'static, str>),
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        PropValue::Num(v)
    }
}

impl From<&'static str> for PropValue {
    fn from(v: &'static str) -> Self {
        PropValue::Text(Cow::Borrowed(v))
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Text(Cow::Owned(v))
    }
}

pub type Props = SmallVec<[(Prop, PropValue); 6]>;

/// Builds a [`Props`] list: `props!(Opacity: 0.0, Y: 50.0)`.
#[macro_export]
macro_rules! props {
    ($($prop:ident : $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut p = $crate::motion::Props::new();
        $(p.push(($crate::motion::Prop::$prop, $crate::motion::PropValue::from($value)));)*
        p
    }};
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stagger {
    /// Fixed offset between consecutive targets.
    Each(f64),
    /// Total offset spread outward from the middle target.
    FromCenter(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TweenSpec {
    pub duration: f64,
    pub ease: Ease,
    pub stagger: Option<Stagger>,
    /// -1 repeats forever.
    pub repeat: i32,
    pub yoyo: bool,
    pub overwrite: bool,
}

impl TweenSpec {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            stagger: None,
            repeat: 0,
            yoyo: false,
            overwrite: false,
        }
    }

    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    pub fn forever_yoyo(mut self) -> Self {
        self.repeat = -1;
        self.yoyo = true;
        self
    }

    pub fn overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }
}

pub struct Tween {
    pub from: Option<Props>,
    pub to: Props,
    pub spec: TweenSpec,
    pub on_start: Option<Callback>,
    pub on_complete: Option<Callback>,
}

impl Tween {
    /// Animate from the current values to `to`.
    pub fn to(to: Props, spec: TweenSpec) -> Self {
        Self {
            from: None,
            to,
            spec,
            on_start: None,
            on_complete: None,
        }
    }

    pub fn from_to(from: Props, to: Props, spec: TweenSpec) -> Self {
        Self {
            from: Some(from),
            ..Self::to(to, spec)
        }
    }

    pub fn on_start(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

pub trait Animator {
    type Node;

    /// False for the instant fallback.
    fn is_live(&self) -> bool;
    fn animate(&self, targets: &[Self::Node], tween: Tween);
    /// Cancels running tweens on `targets`; their completions never fire.
    fn kill_in_flight(&self, targets: &[Self::Node]);
    fn set_immediate(&self, targets: &[Self::Node], props: &Props);
    fn clear_props(&self, targets: &[Self::Node]);
    fn set_time_scale(&self, scale: f64);
    /// Smoothly scrolls so `target` sits `offset_y` below the viewport top.
    /// Returns false when smooth scrolling is not available.
    fn scroll_to(&self, target: &Self::Node, offset_y: f64, duration: f64) -> bool;
}

/// Shared handle to the animator picked at start-up.
pub type Motion<N> = Rc<dyn Animator<Node = N>>;

/// Instant fallback used when no animation engine is loaded.
pub struct NoAnimation<N>(PhantomData<N>);

impl<N> NoAnimation<N> {
    pub fn new() -> Self {
        NoAnimation(PhantomData)
    }
}

impl<N> Default for NoAnimation<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Animator for NoAnimation<N> {
    type Node = N;

    fn is_live(&self) -> bool {
        false
    }

    fn animate(&self, _targets: &[N], tween: Tween) {
        if let Some(start) = tween.on_start {
            start();
        }
        if let Some(done) = tween.on_complete {
            done();
        }
    }

    fn kill_in_flight(&self, _targets: &[N]) {}

    fn set_immediate(&self, _targets: &[N], _props: &Props) {}

    fn clear_props(&self, _targets: &[N]) {}

    fn set_time_scale(&self, _scale: f64) {}

    fn scroll_to(&self, _target: &N, _offset_y: f64, _duration: f64) -> bool {
        false
    }
}
