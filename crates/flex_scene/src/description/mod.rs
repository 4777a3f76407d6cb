//! Serialisable scene descriptions and geometry snapshots.
//!
//! A [`SceneDescription`] is a tree of nodes written in JSON; [`Scene::from_json`] builds a live
//! scene from it and [`Scene::snapshot`] flattens the resulting geometry for output.

use anyhow::{Context as _, Result};
use flexbox::{AxisPair, ContainerStyle, ItemStyle};
use serde::{Deserialize, Serialize};

use crate::node::{Content, NodeKey, NodeSpec};
use crate::scene::Scene;

/// Root nodes of a scene, each with its subtree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneDescription {
    pub nodes: Vec<NodeDescription>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeDescription {
    pub name: String,
    pub size: AxisPair<f32>,
    pub active: bool,
    pub container: Option<ContainerStyle>,
    pub item: Option<ItemStyle>,
    pub content: Option<Content>,
    pub children: Vec<NodeDescription>,
}

impl Default for NodeDescription {
    fn default() -> Self {
        Self {
            name: String::new(),
            size: AxisPair::default(),
            active: true,
            container: None,
            item: None,
            content: None,
            children: Vec::new(),
        }
    }
}

impl NodeDescription {
    fn to_spec(&self) -> NodeSpec {
        let mut spec = NodeSpec::new(self.name.clone())
            .size(self.size.x, self.size.y)
            .active(self.active);
        spec.container = self.container;
        spec.item = self.item;
        spec.content = self.content;
        spec
    }
}

/// Geometry of one node after layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub key: NodeKey,
    pub name: String,
    pub size: AxisPair<f32>,
    pub anchored_position: AxisPair<f32>,
    pub anchor: AxisPair<f32>,
}

impl Scene {
    /// Build a scene from a description. Every container starts dirty.
    ///
    /// # Errors
    /// Returns an error if a node cannot be inserted.
    pub fn from_description(description: &SceneDescription) -> Result<Self> {
        let mut scene = Self::new();
        let mut pending: Vec<(Option<NodeKey>, &NodeDescription)> =
            description.nodes.iter().rev().map(|node| (None, node)).collect();
        while let Some((parent, node)) = pending.pop() {
            let key = scene
                .insert(parent, node.to_spec())
                .with_context(|| format!("inserting node {:?}", node.name))?;
            pending.extend(node.children.iter().rev().map(|child| (Some(key), child)));
        }
        Ok(scene)
    }

    /// Parse a JSON scene description and build the scene.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or does not describe a scene.
    pub fn from_json(text: &str) -> Result<Self> {
        let description: SceneDescription =
            serde_json::from_str(text).context("parsing scene description")?;
        Self::from_description(&description)
    }

    /// Geometry of every node, parents before children.
    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.depth_first()
            .into_iter()
            .filter_map(|key| {
                self.node(key).ok().map(|node| NodeSnapshot {
                    key,
                    name: node.name.clone(),
                    size: node.rect.size,
                    anchored_position: node.rect.anchored_position,
                    anchor: node.rect.anchor,
                })
            })
            .collect()
    }
}
