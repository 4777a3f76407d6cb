//! Axis resolution for a container direction.

use crate::stage1::{Axis, FlexDirection};

/// Resolved axes information for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    pub main: Axis,
    pub cross: Axis,
    /// True for `RowReverse` and `ColumnReverse`: the item sequence is reversed.
    pub reverse: bool,
}

impl Axes {
    /// Host-coordinate sign for positions along the main axis.
    #[inline]
    pub const fn main_sign(&self) -> f32 {
        self.main.position_sign()
    }

    /// Host-coordinate sign for positions along the cross axis.
    #[inline]
    pub const fn cross_sign(&self) -> f32 {
        self.cross.position_sign()
    }
}

/// Resolve main/cross axes and reversal from the container direction.
pub const fn resolve_axes(direction: FlexDirection) -> Axes {
    let (main, reverse) = match direction {
        FlexDirection::Row => (Axis::Horizontal, false),
        FlexDirection::RowReverse => (Axis::Horizontal, true),
        FlexDirection::Column => (Axis::Vertical, false),
        FlexDirection::ColumnReverse => (Axis::Vertical, true),
    };
    Axes {
        main,
        cross: main.other(),
        reverse,
    }
}
