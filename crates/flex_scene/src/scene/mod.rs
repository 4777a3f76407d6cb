//! The scene tree and its dirty-tracking policy.

mod layout;

use std::collections::{BTreeSet, HashMap};

use anyhow::{Result, anyhow, bail};
use flexbox::{AxisPair, ContainerStyle, ItemStyle};
use log::debug;

use crate::node::{Content, FlexContainer, NodeKey, NodeSpec, RectGeometry, SceneNode};

/// Default number of passes each container may take while a scene settles.
const DEFAULT_PASSES_PER_CONTAINER: usize = 8;

/// A forest of rectangles, some of which are flex containers.
#[derive(Clone, Debug)]
pub struct Scene {
    nodes: HashMap<NodeKey, SceneNode>,
    roots: Vec<NodeKey>,
    next_key: u64,
    /// Containers awaiting a layout pass.
    dirty: BTreeSet<NodeKey>,
    passes_per_container: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
            next_key: 1,
            dirty: BTreeSet::new(),
            passes_per_container: DEFAULT_PASSES_PER_CONTAINER,
        }
    }

    /// Limit how many passes each container may take in one [`Self::ensure_layout`] call.
    pub fn set_passes_per_container(&mut self, passes: usize) {
        self.passes_per_container = passes.max(1);
    }

    /// Insert a node as the last child of `parent` (or as a new root).
    ///
    /// # Errors
    /// Returns an error if `parent` is not in the scene.
    pub fn insert(&mut self, parent: Option<NodeKey>, spec: NodeSpec) -> Result<NodeKey> {
        if let Some(parent_key) = parent
            && !self.nodes.contains_key(&parent_key)
        {
            bail!("cannot insert {:?} under missing parent {parent_key:?}", spec.name);
        }
        let key = NodeKey(self.next_key);
        self.next_key += 1;
        let node = spec.into_node(parent);
        debug!(target: "flex_scene", "insert {key:?} ({}) under {parent:?}", node.name);
        self.nodes.insert(key, node);
        match parent.and_then(|parent_key| self.nodes.get_mut(&parent_key)) {
            Some(parent_node) => parent_node.children.push(key),
            None => self.roots.push(key),
        }
        self.notify_changed(key);
        Ok(key)
    }

    /// Remove a node and its whole subtree.
    ///
    /// # Errors
    /// Returns an error if `key` is not in the scene.
    pub fn remove(&mut self, key: NodeKey) -> Result<()> {
        self.notify_changed(key);
        let node = self.nodes.remove(&key).ok_or_else(|| unknown(key))?;
        match node.parent.and_then(|parent_key| self.nodes.get_mut(&parent_key)) {
            Some(parent_node) => parent_node.children.retain(|child| *child != key),
            None => self.roots.retain(|root| *root != key),
        }
        self.dirty.remove(&key);
        let mut pending = node.children;
        while let Some(child) = pending.pop() {
            if let Some(child_node) = self.nodes.remove(&child) {
                pending.extend(child_node.children);
            }
            self.dirty.remove(&child);
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if `key` is not in the scene.
    pub fn node(&self, key: NodeKey) -> Result<&SceneNode> {
        self.nodes.get(&key).ok_or_else(|| unknown(key))
    }

    /// # Errors
    /// Returns an error if `key` is not in the scene.
    pub fn geometry(&self, key: NodeKey) -> Result<RectGeometry> {
        self.node(key).map(|node| node.rect)
    }

    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node with the given name, in depth-first order.
    pub fn find(&self, name: &str) -> Option<NodeKey> {
        self.depth_first()
            .into_iter()
            .find(|key| self.nodes.get(key).is_some_and(|node| node.name == name))
    }

    /// All node keys, parents before children, siblings in child order.
    pub fn depth_first(&self) -> Vec<NodeKey> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeKey> = self.roots.iter().rev().copied().collect();
        while let Some(key) = stack.pop() {
            if let Some(node) = self.nodes.get(&key) {
                order.push(key);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    /// Whether the node and all of its ancestors are active.
    pub fn is_active_in_hierarchy(&self, key: NodeKey) -> bool {
        let mut cursor = Some(key);
        while let Some(current) = cursor {
            match self.nodes.get(&current) {
                Some(node) if node.active => cursor = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Activating a node invalidates every container in its subtree, since edits made while
    /// it was inactive were never laid out.
    ///
    /// # Errors
    /// Returns an error if `key` is not in the scene.
    pub fn set_active(&mut self, key: NodeKey, active: bool) -> Result<()> {
        let node = self.node_mut(key)?;
        if node.active != active {
            node.active = active;
            self.notify_changed(key);
            if active {
                self.dirty_subtree_containers(key);
            }
        }
        Ok(())
    }

    /// Resize a node; its own layout and its parent's are invalidated.
    ///
    /// # Errors
    /// Returns an error if `key` is not in the scene.
    pub fn set_size(&mut self, key: NodeKey, width: f32, height: f32) -> Result<()> {
        let size = AxisPair::new(width, height);
        let node = self.node_mut(key)?;
        if node.rect.size != size {
            node.rect.size = size;
            self.notify_changed(key);
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if `key` is not in the scene.
    pub fn set_item_style(&mut self, key: NodeKey, style: Option<ItemStyle>) -> Result<()> {
        self.node_mut(key)?.item = style;
        self.notify_changed(key);
        Ok(())
    }

    /// Attach, replace or (with `None`) detach the container component.
    ///
    /// # Errors
    /// Returns an error if `key` is not in the scene.
    pub fn set_container_style(&mut self, key: NodeKey, style: Option<ContainerStyle>) -> Result<()> {
        let node = self.node_mut(key)?;
        node.container = style.map(|container_style| FlexContainer {
            style: container_style,
            enabled: node.container.is_none_or(|container| container.enabled),
        });
        self.notify_changed(key);
        Ok(())
    }

    /// # Errors
    /// Returns an error if `key` is not in the scene or has no container component.
    pub fn set_container_enabled(&mut self, key: NodeKey, enabled: bool) -> Result<()> {
        let container = self
            .node_mut(key)?
            .container
            .as_mut()
            .ok_or_else(|| anyhow!("{key:?} has no flex container"))?;
        container.enabled = enabled;
        self.notify_changed(key);
        Ok(())
    }

    /// # Errors
    /// Returns an error if `key` is not in the scene.
    pub fn set_content(&mut self, key: NodeKey, content: Option<Content>) -> Result<()> {
        self.node_mut(key)?.content = content;
        self.notify_changed(key);
        Ok(())
    }

    /// Request a layout pass for a container.
    ///
    /// # Errors
    /// Returns an error if `key` is not in the scene.
    pub fn mark_dirty(&mut self, key: NodeKey) -> Result<()> {
        self.node(key)?;
        self.dirty.insert(key);
        Ok(())
    }

    pub fn is_dirty(&self, key: NodeKey) -> bool {
        self.dirty.contains(&key)
    }

    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    fn node_mut(&mut self, key: NodeKey) -> Result<&mut SceneNode> {
        self.nodes.get_mut(&key).ok_or_else(|| unknown(key))
    }

    /// Invalidate the containers affected by a change to `key`: the node itself when it is a
    /// container, and its parent container, whose item set or item sizes may have changed.
    fn notify_changed(&mut self, key: NodeKey) {
        let Some(node) = self.nodes.get(&key) else {
            return;
        };
        if node.container.is_some() {
            self.dirty.insert(key);
        }
        if let Some(parent_key) = node.parent
            && self
                .nodes
                .get(&parent_key)
                .is_some_and(|parent| parent.container.is_some())
        {
            self.dirty.insert(parent_key);
        }
    }

    /// Mark every container at or below `key` dirty.
    fn dirty_subtree_containers(&mut self, key: NodeKey) {
        let mut pending = vec![key];
        while let Some(current) = pending.pop() {
            let Some(node) = self.nodes.get(&current) else {
                continue;
            };
            pending.extend(node.children.iter().copied());
            if node.container.is_some() {
                self.dirty.insert(current);
            }
        }
    }

    /// Number of ancestors above `key`.
    fn depth(&self, key: NodeKey) -> usize {
        let mut depth = 0usize;
        let mut cursor = self.nodes.get(&key).and_then(|node| node.parent);
        while let Some(parent_key) = cursor {
            depth += 1;
            cursor = self.nodes.get(&parent_key).and_then(|node| node.parent);
        }
        depth
    }
}

fn unknown(key: NodeKey) -> anyhow::Error {
    anyhow!("unknown scene node {key:?}")
}
