//! Retained rectangle tree hosting flex containers.
//!
//! The scene owns node geometry and decides when a container needs a new layout pass: edits
//! mark containers dirty and [`Scene::ensure_layout`] recomputes them before the geometry is
//! read. Each pass runs [`flexbox::compute_layout`] and writes its outcome back in one step.

mod description;
mod node;
mod scene;

pub use description::{NodeDescription, NodeSnapshot, SceneDescription};
pub use node::{Content, FlexContainer, NodeKey, NodeSpec, RectGeometry, SceneNode, TOP_LEFT_ANCHOR};
pub use scene::Scene;
