//! Scene nodes: geometry, content and the flex components they carry.

use flexbox::{Axis, AxisPair, ContainerStyle, ItemRef, ItemStyle};
use serde::{Deserialize, Serialize};

/// Normalised anchor point of a rectangle's top-left corner (`y` grows upwards).
pub const TOP_LEFT_ANCHOR: AxisPair<f32> = AxisPair::new(0.0, 1.0);

/// Centre anchor, the default for freshly inserted nodes.
const CENTER_ANCHOR: AxisPair<f32> = AxisPair::new(0.5, 0.5);

/// Stable identity of a scene node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKey(pub u64);

impl From<NodeKey> for ItemRef {
    #[inline]
    fn from(key: NodeKey) -> Self {
        Self(key.0)
    }
}

impl From<ItemRef> for NodeKey {
    #[inline]
    fn from(item: ItemRef) -> Self {
        Self(item.0)
    }
}

/// Size and anchored position of a rectangle.
///
/// `anchored_position` is the centre of the rectangle relative to its anchor point in the
/// parent, with `x` growing rightwards and `y` growing upwards.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectGeometry {
    pub size: AxisPair<f32>,
    pub anchored_position: AxisPair<f32>,
    pub anchor: AxisPair<f32>,
}

impl Default for RectGeometry {
    fn default() -> Self {
        Self {
            size: AxisPair::default(),
            anchored_position: AxisPair::default(),
            anchor: CENTER_ANCHOR,
        }
    }
}

/// Content that reports a preferred size to the layout.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Content {
    /// Constant preferred size, such as an image.
    Fixed { width: f32, height: f32 },
    /// Monospaced text that wraps to the width it is given.
    Text {
        glyphs: u32,
        glyph_width: f32,
        line_height: f32,
    },
}

impl Content {
    /// Preferred extent on `axis`; `cross_hint` is the already-assigned size on the other axis.
    pub fn preferred_size(&self, axis: Axis, cross_hint: Option<f32>) -> f32 {
        match *self {
            Self::Fixed { width, height } => match axis {
                Axis::Horizontal => width,
                Axis::Vertical => height,
            },
            Self::Text {
                glyphs,
                glyph_width,
                line_height,
            } => {
                let glyph_count = glyphs as f32;
                match (axis, cross_hint) {
                    (Axis::Horizontal, _) => glyph_count * glyph_width,
                    (Axis::Vertical, Some(width)) if glyph_width > 0.0 => {
                        let per_line = (width / glyph_width).floor().max(1.0);
                        (glyph_count / per_line).ceil().max(1.0) * line_height
                    }
                    (Axis::Vertical, _) => line_height,
                }
            }
        }
    }
}

/// Flex container component of a node.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlexContainer {
    pub style: ContainerStyle,
    /// Disabled containers keep their settings but are never laid out.
    pub enabled: bool,
}

/// One rectangle in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub parent: Option<NodeKey>,
    pub children: Vec<NodeKey>,
    pub active: bool,
    pub rect: RectGeometry,
    pub container: Option<FlexContainer>,
    pub item: Option<ItemStyle>,
    pub content: Option<Content>,
}

impl SceneNode {
    /// The container component if present and enabled.
    #[inline]
    pub fn enabled_container(&self) -> Option<&FlexContainer> {
        self.container.as_ref().filter(|container| container.enabled)
    }
}

/// Builder for nodes inserted into a [`crate::Scene`].
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSpec {
    pub(crate) name: String,
    pub(crate) size: AxisPair<f32>,
    pub(crate) active: bool,
    pub(crate) container: Option<ContainerStyle>,
    pub(crate) item: Option<ItemStyle>,
    pub(crate) content: Option<Content>,
}

impl NodeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: AxisPair::default(),
            active: true,
            container: None,
            item: None,
            content: None,
        }
    }

    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = AxisPair::new(width, height);
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub fn container(mut self, style: ContainerStyle) -> Self {
        self.container = Some(style);
        self
    }

    #[must_use]
    pub fn item(mut self, style: ItemStyle) -> Self {
        self.item = Some(style);
        self
    }

    #[must_use]
    pub fn content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    pub(crate) fn into_node(self, parent: Option<NodeKey>) -> SceneNode {
        SceneNode {
            name: self.name,
            parent,
            children: Vec::new(),
            active: self.active,
            rect: RectGeometry {
                size: self.size,
                ..RectGeometry::default()
            },
            container: self.container.map(|style| FlexContainer {
                style,
                enabled: true,
            }),
            item: self.item,
            content: self.content,
        }
    }
}
