// In-memory doubles for the page surface and the animation engine.

#![allow(dead_code)]

use fx_core::motion::{Animator, Props, Tween, TweenSpec};
use fx_core::page::{Callback, Page, Span};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::time::Duration;

pub type NodeId = usize;

#[derive(Clone, Debug, Default)]
pub struct NodeData {
    pub classes: BTreeSet<String>,
    pub styles: HashMap<String, String>,
    pub attrs: HashMap<String, String>,
    pub text: String,
    pub children: Vec<NodeId>,
    pub attached: bool,
    pub span: Span,
    pub offset_height: f64,
}

#[derive(Default)]
struct PageState {
    nodes: Vec<NodeData>,
    root_props: HashMap<String, String>,
    now: Duration,
    timers: Vec<(Duration, u64, Callback)>,
    timer_seq: u64,
    fragments: Vec<String>,
}

#[derive(Default)]
pub struct FakePage {
    state: RefCell<PageState>,
}

impl FakePage {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn node(&self, class: &str) -> NodeId {
        let mut s = self.state.borrow_mut();
        let mut data = NodeData {
            attached: true,
            ..Default::default()
        };
        for c in class.split_whitespace() {
            data.classes.insert(c.to_owned());
        }
        s.nodes.push(data);
        s.nodes.len() - 1
    }

    pub fn with_attr(&self, node: NodeId, name: &str, value: &str) -> NodeId {
        self.state.borrow_mut().nodes[node]
            .attrs
            .insert(name.to_owned(), value.to_owned());
        node
    }

    pub fn with_span(&self, node: NodeId, top: f64, height: f64) -> NodeId {
        let mut s = self.state.borrow_mut();
        s.nodes[node].span = Span { top, height };
        s.nodes[node].offset_height = height;
        node
    }

    pub fn data(&self, node: NodeId) -> NodeData {
        self.state.borrow().nodes[node].clone()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.state.borrow().nodes[node].styles.get(property).cloned()
    }

    pub fn text(&self, node: NodeId) -> String {
        self.state.borrow().nodes[node].text.clone()
    }

    pub fn root_property(&self, name: &str) -> Option<String> {
        self.state.borrow().root_props.get(name).cloned()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.state.borrow().nodes[node].children.clone()
    }

    /// Nodes currently attached that carry `class`.
    pub fn attached_with_class(&self, class: &str) -> usize {
        self.state
            .borrow()
            .nodes
            .iter()
            .filter(|n| n.attached && n.classes.contains(class))
            .count()
    }

    pub fn fragments(&self) -> Vec<String> {
        self.state.borrow().fragments.clone()
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Moves the fake clock forward, firing due timers in order.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        loop {
            let next = {
                let mut s = self.state.borrow_mut();
                let due = s
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= target)
                    .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let (at, _, task) = s.timers.remove(i);
                        s.now = at;
                        Some(task)
                    }
                    None => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

impl Page for FakePage {
    type Node = NodeId;

    fn add_class(&self, node: &NodeId, class: &str) {
        self.state.borrow_mut().nodes[*node]
            .classes
            .insert(class.to_owned());
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.state.borrow_mut().nodes[*node].classes.remove(class);
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.state.borrow_mut().nodes[*node]
            .styles
            .insert(property.to_owned(), value.to_owned());
    }

    fn set_root_property(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .root_props
            .insert(name.to_owned(), value.to_owned());
    }

    fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.state
            .borrow()
            .nodes
            .iter()
            .position(|n| n.attached && n.attrs.get("id").map(String::as_str) == Some(id))
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.state.borrow().nodes[*node].attrs.get(name).cloned()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.state.borrow_mut().nodes[*node].text = text.to_owned();
    }

    fn span(&self, node: &NodeId) -> Span {
        self.state.borrow().nodes[*node].span
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.state.borrow().nodes[*node].offset_height
    }

    fn replace_children_with_clones(&self, parent: &NodeId, sources: &[NodeId]) {
        let mut s = self.state.borrow_mut();
        let old = std::mem::take(&mut s.nodes[*parent].children);
        for child in old {
            s.nodes[child].attached = false;
        }
        for src in sources {
            let copy = s.nodes[*src].clone();
            s.nodes.push(copy);
            let id = s.nodes.len() - 1;
            s.nodes[*parent].children.push(id);
        }
    }

    fn child_count(&self, node: &NodeId) -> usize {
        self.state.borrow().nodes[*node].children.len()
    }

    fn spawn_visual(&self, class: &str, x: f64, y: f64, background: &str) -> Option<NodeId> {
        let id = self.node(class);
        self.set_style(&id, "left", &format!("{}px", x));
        self.set_style(&id, "top", &format!("{}px", y));
        self.set_style(&id, "background", background);
        Some(id)
    }

    fn append_child(&self, parent: &NodeId, class: &str) -> Option<NodeId> {
        let id = self.node(class);
        self.state.borrow_mut().nodes[*parent].children.push(id);
        Some(id)
    }

    fn remove(&self, node: &NodeId) {
        let mut s = self.state.borrow_mut();
        s.nodes[*node].attached = false;
        for n in s.nodes.iter_mut() {
            n.children.retain(|c| c != node);
        }
    }

    fn navigate_to_fragment(&self, id: &str) {
        self.state.borrow_mut().fragments.push(id.to_owned());
    }

    fn defer(&self, delay: Duration, task: Callback) {
        let mut s = self.state.borrow_mut();
        let at = s.now + delay;
        let seq = s.timer_seq;
        s.timer_seq += 1;
        s.timers.push((at, seq, task));
    }
}

pub struct Recorded {
    pub targets: Vec<NodeId>,
    pub from: Option<Props>,
    pub to: Props,
    pub spec: TweenSpec,
}

struct InFlight {
    targets: Vec<NodeId>,
    on_complete: Option<Callback>,
}

/// Live animator that holds completions until the test releases them.
#[derive(Default)]
pub struct ManualAnimator {
    pub tweens: RefCell<Vec<Recorded>>,
    in_flight: RefCell<Vec<InFlight>>,
    pub sets: RefCell<Vec<(Vec<NodeId>, Props)>>,
    pub cleared: RefCell<Vec<NodeId>>,
    pub time_scale: Cell<f64>,
    pub scrolls: RefCell<Vec<(NodeId, f64)>>,
    pub kills: Cell<usize>,
    pub smooth_scroll: Cell<bool>,
}

impl ManualAnimator {
    pub fn new() -> Rc<Self> {
        let a = Self::default();
        a.time_scale.set(1.0);
        a.smooth_scroll.set(true);
        Rc::new(a)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.borrow().len()
    }

    pub fn tween_count(&self) -> usize {
        self.tweens.borrow().len()
    }

    /// Finishes every running tween, including ones started by completions.
    pub fn complete_all(&self) {
        loop {
            let batch = std::mem::take(&mut *self.in_flight.borrow_mut());
            if batch.is_empty() {
                break;
            }
            for t in batch {
                if let Some(done) = t.on_complete {
                    done();
                }
            }
        }
    }
}

impl Animator for ManualAnimator {
    type Node = NodeId;

    fn is_live(&self) -> bool {
        true
    }

    fn animate(&self, targets: &[NodeId], tween: Tween) {
        self.tweens.borrow_mut().push(Recorded {
            targets: targets.to_vec(),
            from: tween.from.clone(),
            to: tween.to.clone(),
            spec: tween.spec.clone(),
        });
        if let Some(start) = tween.on_start {
            start();
        }
        self.in_flight.borrow_mut().push(InFlight {
            targets: targets.to_vec(),
            on_complete: tween.on_complete,
        });
    }

    fn kill_in_flight(&self, targets: &[NodeId]) {
        self.kills.set(self.kills.get() + 1);
        self.in_flight
            .borrow_mut()
            .retain(|t| !t.targets.iter().any(|n| targets.contains(n)));
    }

    fn set_immediate(&self, targets: &[NodeId], props: &Props) {
        self.sets.borrow_mut().push((targets.to_vec(), props.clone()));
    }

    fn clear_props(&self, targets: &[NodeId]) {
        self.cleared.borrow_mut().extend_from_slice(targets);
    }

    fn set_time_scale(&self, scale: f64) {
        self.time_scale.set(scale);
    }

    fn scroll_to(&self, target: &NodeId, offset_y: f64, _duration: f64) -> bool {
        if !self.smooth_scroll.get() {
            return false;
        }
        self.scrolls.borrow_mut().push((*target, offset_y));
        true
    }
}
