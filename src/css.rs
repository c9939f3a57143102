// Pure translation of tween descriptions into animation-engine variables.
// No browser types here so the host test suite can include this file.

use fx_core::motion::{PropValue, Props, Stagger, TweenSpec};

/// A value inside a GSAP vars object.
#[derive(Clone, Debug, PartialEq)]
pub enum Var {
    Num(f64),
    Text(String),
    Bool(bool),
    Object(Vars),
}

pub type Vars = Vec<(&'static str, Var)>;

/// Overwrite mode for scrubbed tweens: only conflicting properties are killed.
pub const OVERWRITE_MODE: &str = "auto";

/// Ease for the smooth scroll helper.
pub const SCROLL_EASE: &str = "power2.out";

#[inline]
pub fn px(v: f64) -> String {
    format!("{}px", v)
}

pub fn prop_vars(props: &Props) -> Vars {
    props
        .iter()
        .map(|(prop, value)| {
            let v = match value {
                PropValue::Num(n) => Var::Num(*n),
                PropValue::Text(t) => Var::Text(t.to_string()),
            };
            (prop.key(), v)
        })
        .collect()
}

pub fn stagger_var(stagger: Stagger) -> Var {
    match stagger {
        Stagger::Each(each) => Var::Num(each),
        Stagger::FromCenter(amount) => Var::Object(vec![
            ("amount", Var::Num(amount)),
            ("from", Var::Text("center".to_owned())),
        ]),
    }
}

/// Vars for `gsap.to` / the second argument of `gsap.fromTo`. Callbacks
/// are attached by the caller.
pub fn tween_vars(to: &Props, spec: &TweenSpec) -> Vars {
    let mut vars = prop_vars(to);
    vars.push(("duration", Var::Num(spec.duration)));
    vars.push(("ease", Var::Text(spec.ease.name().into_owned())));
    if let Some(s) = spec.stagger {
        vars.push(("stagger", stagger_var(s)));
    }
    if spec.repeat != 0 {
        vars.push(("repeat", Var::Num(spec.repeat as f64)));
    }
    if spec.yoyo {
        vars.push(("yoyo", Var::Bool(true)));
    }
    if spec.overwrite {
        vars.push(("overwrite", Var::Text(OVERWRITE_MODE.to_owned())));
    }
    vars
}

pub fn clear_vars() -> Vars {
    vec![("clearProps", Var::Text("all".to_owned()))]
}

/// Scroll vars without the target element, which the caller inserts
/// under `scrollTo.y`.
pub fn scroll_vars(offset_y: f64, duration: f64) -> (Vars, Vars) {
    let scroll_to = vec![("offsetY", Var::Num(offset_y))];
    let outer = vec![
        ("duration", Var::Num(duration)),
        ("ease", Var::Text(SCROLL_EASE.to_owned())),
    ];
    (outer, scroll_to)
}
