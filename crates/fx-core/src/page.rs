//! The document surface the coordinator writes to.
//!
//! Components never touch the browser directly; they go through [`Page`],
//! which the front-end implements over `web_sys::Element` and tests
//! implement in memory. Nodes are cheap handles (`Clone`) that may be held
//! inside deferred callbacks.

use std::time::Duration;

/// One-shot deferred work (timer expiry, tween completion).
pub type Callback = Box<dyn FnOnce()>;

/// Vertical extent of a node in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

pub trait Page {
    type Node: Clone + 'static;

    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    /// Sets a custom property on the document root (`--name`).
    fn set_root_property(&self, name: &str, value: &str);

    fn find_by_id(&self, id: &str) -> Option<Self::Node>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_text(&self, node: &Self::Node, text: &str);

    fn span(&self, node: &Self::Node) -> Span;
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Replaces every child of `parent` with deep clones of `sources`.
    fn replace_children_with_clones(&self, parent: &Self::Node, sources: &[Self::Node]);
    fn child_count(&self, node: &Self::Node) -> usize;

    /// Appends an absolutely positioned decorative element to the body.
    /// `None` when the document refused to create it.
    fn spawn_visual(&self, class: &str, x: f64, y: f64, background: &str)
        -> Option<Self::Node>;
    /// Creates an empty element with `class` as the last child of `parent`.
    fn append_child(&self, parent: &Self::Node, class: &str) -> Option<Self::Node>;
    /// Detaches `node`. Detaching an already detached node is a no-op.
    fn remove(&self, node: &Self::Node);

    /// Navigates to `#id` without animation.
    fn navigate_to_fragment(&self, id: &str);

    /// Runs `task` once after `delay` on the same event loop.
    fn defer(&self, delay: Duration, task: Callback);
}
