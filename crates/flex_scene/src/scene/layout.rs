//! Layout passes over dirty containers and write-back of their outcome.

use std::cmp::Reverse;
use std::collections::HashMap;

use anyhow::Result;
use flexbox::{
    Axis, AxisPair, ChildEntry, ContainerInput, IntrinsicSizing, ItemRef, ItemStyle, LayoutOutcome,
    compute_layout, resolve_axes,
};
use log::{debug, trace, warn};

use super::Scene;
use crate::node::{NodeKey, RectGeometry, SceneNode, TOP_LEFT_ANCHOR};

/// Size differences below this are not treated as a resize.
const RESIZE_EPSILON: f32 = 1e-4;

/// Preferred sizes of scene nodes.
///
/// Content reports its own size. A nested container without content reports its current size
/// on the axes it sizes itself along, and nothing on the others, so repeated passes agree.
struct SceneSizing<'scene> {
    nodes: &'scene HashMap<NodeKey, SceneNode>,
}

impl IntrinsicSizing for SceneSizing<'_> {
    fn preferred_size(&self, item: ItemRef, axis: Axis, cross_hint: Option<f32>) -> f32 {
        let Some(node) = self.nodes.get(&NodeKey::from(item)) else {
            return 0.0;
        };
        if let Some(content) = node.content.as_ref() {
            return content.preferred_size(axis, cross_hint);
        }
        node.enabled_container()
            .filter(|container| container.style.is_auto(axis))
            .map_or(0.0, |_| node.rect.size.get(axis))
    }
}

/// Freeze the main size of a child container that sizes itself along the parent's main axis.
fn yield_to_own_size(child: &SceneNode, style: ItemStyle, main: Axis) -> ItemStyle {
    if child
        .enabled_container()
        .is_some_and(|container| container.style.is_auto(main))
    {
        ItemStyle {
            flex_grow: 0.0,
            flex_shrink: 0.0,
            ..style
        }
    } else {
        style
    }
}

fn resized(before: AxisPair<f32>, after: AxisPair<f32>) -> bool {
    (before.x - after.x).abs() > RESIZE_EPSILON || (before.y - after.y).abs() > RESIZE_EPSILON
}

impl Scene {
    /// Lay out every dirty container, deepest first, until nothing is dirty.
    ///
    /// Resizing a nested container re-dirties it and its parent, so a scene may need several
    /// passes per container to settle. The number of passes is bounded; when the bound is hit
    /// the remaining dirty flags are dropped and a warning is logged.
    ///
    /// A nested container's own sizing wins on its auto axes along the parent's main axis: the
    /// parent neither grows nor shrinks it there. A parent stretching a nested container's auto
    /// cross axis still conflicts with it and ends on the budget warning.
    ///
    /// Returns the number of passes that wrote geometry.
    ///
    /// # Errors
    /// Returns an error if the scene's parent/child links are inconsistent.
    pub fn ensure_layout(&mut self) -> Result<usize> {
        let containers = self
            .nodes
            .values()
            .filter(|node| node.container.is_some())
            .count();
        let budget = containers.max(1) * self.passes_per_container;
        let mut attempts = 0usize;
        let mut passes = 0usize;
        while let Some(key) = self.next_dirty() {
            if attempts == budget {
                warn!(
                    target: "flex_scene",
                    "layout did not settle after {attempts} passes; dropping {} dirty containers",
                    self.dirty.len()
                );
                self.dirty.clear();
                break;
            }
            attempts += 1;
            self.dirty.remove(&key);
            if self.recompute(key)? {
                passes += 1;
            }
        }
        debug!(target: "flex_scene", "ensure_layout: {passes} passes over {containers} containers");
        Ok(passes)
    }

    /// Run one layout pass for a single container and write its outcome back.
    ///
    /// Disabled containers, containers that are not active in the hierarchy and containers
    /// without eligible children are skipped. Returns whether geometry was written.
    ///
    /// # Errors
    /// Returns an error if `key` is not in the scene.
    pub fn recompute(&mut self, key: NodeKey) -> Result<bool> {
        let node = self.node(key)?;
        let Some(container) = node.enabled_container() else {
            trace!(target: "flex_scene", "skip {key:?}: no enabled container");
            return Ok(false);
        };
        if !self.is_active_in_hierarchy(key) {
            trace!(target: "flex_scene", "skip {key:?}: inactive in hierarchy");
            return Ok(false);
        }
        let main = resolve_axes(container.style.direction).main;
        let input = ContainerInput {
            style: container.style,
            size: node.rect.size,
        };
        let children: Vec<ChildEntry> = node
            .children
            .iter()
            .filter_map(|child_key| {
                self.nodes.get(child_key).map(|child| ChildEntry {
                    handle: ItemRef::from(*child_key),
                    active: child.active,
                    item: child.item.map(|style| yield_to_own_size(child, style, main)),
                })
            })
            .collect();
        let sizing = SceneSizing { nodes: &self.nodes };
        let Some(outcome) = compute_layout(&input, &children, &sizing) else {
            return Ok(false);
        };
        self.write_back(key, &outcome);
        Ok(true)
    }

    /// Apply a layout outcome: child geometry first, then the container's own size.
    fn write_back(&mut self, key: NodeKey, outcome: &LayoutOutcome) {
        for placement in &outcome.placements {
            let child_key = NodeKey::from(placement.handle);
            let Some(child) = self.nodes.get_mut(&child_key) else {
                continue;
            };
            let child_resized = resized(child.rect.size, placement.size);
            let nested = child.enabled_container().is_some();
            child.rect = RectGeometry {
                size: placement.size,
                anchored_position: placement.anchored_position,
                anchor: TOP_LEFT_ANCHOR,
            };
            if child_resized && nested {
                self.dirty.insert(child_key);
            }
        }

        let Some(node) = self.nodes.get_mut(&key) else {
            return;
        };
        if !resized(node.rect.size, outcome.container_size) {
            return;
        }
        debug!(
            target: "flex_scene",
            "{key:?} ({}) resized to {:.3}x{:.3}",
            node.name,
            outcome.container_size.x,
            outcome.container_size.y
        );
        node.rect.size = outcome.container_size;
        if let Some(parent_key) = node.parent
            && self
                .nodes
                .get(&parent_key)
                .is_some_and(|parent| parent.enabled_container().is_some())
        {
            self.dirty.insert(parent_key);
        }
    }

    /// Deepest dirty container; ties go to the oldest node.
    fn next_dirty(&self) -> Option<NodeKey> {
        self.dirty
            .iter()
            .copied()
            .max_by_key(|key| (self.depth(*key), Reverse(*key)))
    }
}
