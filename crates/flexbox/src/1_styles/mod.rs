//! Container and item settings, plus the per-axis value pair they are expressed in.
//!
//! Settings are plain data read by the layout pass; nothing here is derived or cached.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two container axes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Sign applied to positions along this axis when writing host coordinates.
    ///
    /// Layout runs left-to-right and top-to-bottom, while host positions grow rightwards and
    /// upwards, so the vertical axis is negated.
    #[inline]
    pub const fn position_sign(self) -> f32 {
        match self {
            Self::Horizontal => 1.0,
            Self::Vertical => -1.0,
        }
    }
}

/// A value per axis: `x` is horizontal, `y` is vertical.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct AxisPair<T> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> AxisPair<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Build a pair from values expressed in main/cross terms.
    #[inline]
    pub fn from_main_cross(main_axis: Axis, main: T, cross: T) -> Self {
        match main_axis {
            Axis::Horizontal => Self { x: main, y: cross },
            Axis::Vertical => Self { x: cross, y: main },
        }
    }

    #[inline]
    pub const fn get(&self, axis: Axis) -> T {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: Axis, value: T) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }
}

/// Main-axis orientation of a container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

/// Main-axis distribution policy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Default cross-axis alignment of a container's items.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum AlignItems {
    #[default]
    Center,
    FlexStart,
    FlexEnd,
    Stretch,
}

/// Per-item cross-axis alignment; `Auto` defers to the container's [`AlignItems`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum AlignSelf {
    #[default]
    Auto,
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
}

impl AlignSelf {
    /// Effective alignment once the container default is taken into account.
    #[inline]
    pub const fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            Self::Auto => align_items,
            Self::Stretch => AlignItems::Stretch,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
        }
    }
}

/// Settings of a flex container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ContainerStyle {
    pub direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    /// Fixed spacing per axis; only the main-axis component is used.
    pub gap: AxisPair<f32>,
    pub auto_width: bool,
    pub auto_height: bool,
}

impl ContainerStyle {
    /// Whether the container sizes itself to its content along `axis`.
    #[inline]
    pub const fn is_auto(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.auto_width,
            Axis::Vertical => self.auto_height,
        }
    }
}

/// Settings of a flex item.
///
/// `flex_basis`, `min_size` and `max_size` use `None` for "unset". Negative values are also
/// read as unset so that data written with a negative sentinel keeps its meaning.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ItemStyle {
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: AxisPair<Option<f32>>,
    pub min_size: AxisPair<Option<f32>>,
    pub max_size: AxisPair<Option<f32>>,
    pub align_self: AlignSelf,
    pub order: i32,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: AxisPair::default(),
            min_size: AxisPair::default(),
            max_size: AxisPair::default(),
            align_self: AlignSelf::Auto,
            order: 0,
        }
    }
}

/// Drop negative (sentinel) values.
#[inline]
fn non_negative(value: Option<f32>) -> Option<f32> {
    value.filter(|inner| *inner >= 0.0)
}

impl ItemStyle {
    /// Grow weight, never below zero.
    #[inline]
    pub const fn grow(&self) -> f32 {
        self.flex_grow.max(0.0)
    }

    /// Shrink weight, never below zero.
    #[inline]
    pub const fn shrink(&self) -> f32 {
        self.flex_shrink.max(0.0)
    }

    #[inline]
    pub fn basis(&self, axis: Axis) -> Option<f32> {
        non_negative(self.flex_basis.get(axis))
    }

    #[inline]
    pub fn min(&self, axis: Axis) -> Option<f32> {
        non_negative(self.min_size.get(axis))
    }

    #[inline]
    pub fn max(&self, axis: Axis) -> Option<f32> {
        non_negative(self.max_size.get(axis))
    }

    /// Clamp `size` to this item's bounds on `axis`.
    #[inline]
    pub fn clamp(&self, axis: Axis, size: f32) -> f32 {
        clamp_to_bounds(size, self.min(axis), self.max(axis))
    }
}

/// Clamp a size to optional bounds: the minimum is applied first, then the maximum.
///
/// With `min > max` the maximum wins; callers are responsible for consistent bounds.
#[inline]
pub fn clamp_to_bounds(size: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let floored = min.map_or(size, |min_v| size.max(min_v));
    max.map_or(floored, |max_v| floored.min(max_v))
}
