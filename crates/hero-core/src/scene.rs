//! The composed scene: an arena of nodes owned by the graph, each badge
//! owning its own hover flag.

use crate::badge::{Badge, IconState};
use crate::clock::FrameTime;
use crate::frame::{DrawItem, LightRig, SceneFrame};
use crate::object::{Animated, ObjectKind, Pose, SceneObjectSpec};
use crate::picking;
use fnv::FnvHashMap;
use glam::Vec3;

#[derive(Clone, Debug)]
pub enum SceneNode {
    Object(SceneObjectSpec),
    Badge(Badge),
}

impl Animated for SceneNode {
    fn pose(&self, t: f32) -> Pose {
        match self {
            SceneNode::Object(o) => o.pose(t),
            SceneNode::Badge(b) => b.pose(t),
        }
    }

    fn emit(&self, t: f32, out: &mut Vec<DrawItem>) {
        match self {
            SceneNode::Object(o) => o.emit(t, out),
            SceneNode::Badge(b) => b.emit(t, out),
        }
    }
}

impl SceneNode {
    fn as_badge(&self) -> Option<&Badge> {
        match self {
            SceneNode::Badge(b) => Some(b),
            SceneNode::Object(_) => None,
        }
    }

    fn as_badge_mut(&mut self) -> Option<&mut Badge> {
        match self {
            SceneNode::Badge(b) => Some(b),
            SceneNode::Object(_) => None,
        }
    }
}

/// Badge indices used by the public API are positions in badge order, not
/// arena slots.
#[derive(Clone, Debug)]
pub struct SceneGraph {
    lights: LightRig,
    nodes: Vec<SceneNode>,
    badge_slots: Vec<usize>,
    by_label: FnvHashMap<String, usize>,
    pointer_over: Option<usize>,
}

impl SceneGraph {
    pub fn new(lights: LightRig, objects: Vec<SceneObjectSpec>, badges: Vec<Badge>) -> Self {
        let mut nodes: Vec<SceneNode> = objects.into_iter().map(SceneNode::Object).collect();
        let mut badge_slots = Vec::with_capacity(badges.len());
        let mut by_label = FnvHashMap::default();
        for (i, badge) in badges.into_iter().enumerate() {
            by_label.insert(badge.label().to_string(), i);
            badge_slots.push(nodes.len());
            nodes.push(SceneNode::Badge(badge));
        }
        Self {
            lights,
            nodes,
            badge_slots,
            by_label,
            pointer_over: None,
        }
    }

    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    pub fn objects(&self) -> impl Iterator<Item = &SceneObjectSpec> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Object(o) => Some(o),
            SceneNode::Badge(_) => None,
        })
    }

    pub fn count_objects(&self, pred: impl Fn(&ObjectKind) -> bool) -> usize {
        self.objects().filter(|o| pred(&o.kind)).count()
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn badges(&self) -> impl Iterator<Item = &Badge> {
        self.badge_slots
            .iter()
            .filter_map(|slot| self.nodes[*slot].as_badge())
    }

    pub fn badge_count(&self) -> usize {
        self.badge_slots.len()
    }

    pub fn badge(&self, index: usize) -> Option<&Badge> {
        let slot = *self.badge_slots.get(index)?;
        self.nodes[slot].as_badge()
    }

    pub fn badge_mut(&mut self, index: usize) -> Option<&mut Badge> {
        let slot = *self.badge_slots.get(index)?;
        self.nodes[slot].as_badge_mut()
    }

    pub fn find_badge(&self, label: &str) -> Option<usize> {
        self.by_label.get(label).copied()
    }

    /// Evaluate every node at the single `time` sampled for this frame.
    pub fn evaluate(&self, time: &FrameTime) -> SceneFrame {
        let t = time.elapsed;
        let mut items = Vec::with_capacity(self.nodes.len() + self.badge_slots.len() * 2);
        for node in &self.nodes {
            node.emit(t, &mut items);
        }
        let tooltips = self
            .badges()
            .enumerate()
            .map(|(i, b)| b.tooltip_frame(i, t))
            .collect();
        SceneFrame {
            time: *time,
            lights: self.lights,
            items,
            tooltips,
        }
    }

    /// Nearest badge under the ray at time `t`.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3, t: f32) -> Option<usize> {
        picking::nearest_hit(
            ray_origin,
            ray_dir,
            self.badges().map(|b| b.pick_sphere(t)),
        )
    }

    pub fn pointer_over(&self) -> Option<usize> {
        self.pointer_over
    }

    /// Route pointer-enter/leave to the badges whose hit region the pointer
    /// entered or left. Returns true if any badge changed.
    pub fn set_pointer_over(&mut self, target: Option<usize>) -> bool {
        let target = target.filter(|i| *i < self.badge_slots.len());
        if target == self.pointer_over {
            return false;
        }
        let mut changed = false;
        if let Some(prev) = self.pointer_over.and_then(|i| self.badge_mut(i)) {
            changed |= prev.on_hover_leave();
        }
        if let Some(next) = target.and_then(|i| self.badge_mut(i)) {
            changed |= next.on_hover_enter();
        }
        self.pointer_over = target;
        changed
    }

    /// Apply an icon load result to every badge using `url`.
    pub fn set_icon_state(&mut self, url: &str, state: IconState) -> usize {
        let mut n = 0;
        for node in self.nodes.iter_mut() {
            if let Some(badge) = node.as_badge_mut().filter(|b| b.spec().icon_url == url) {
                badge.set_icon_state(state);
                n += 1;
            }
        }
        n
    }

    /// Distinct icon URLs in badge order.
    pub fn icon_urls(&self) -> Vec<&str> {
        let mut urls: Vec<&str> = Vec::new();
        for b in self.badges() {
            let url = b.spec().icon_url.as_str();
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        urls
    }
}
