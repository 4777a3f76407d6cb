//! Item sizing: cross sizes, base main sizes, and grow/shrink distribution of leftover space.

pub mod flex_algorithm;
pub mod item_sizes;

pub use flex_algorithm::{FlexFactors, distribute_grow, distribute_shrink, rest_space};
pub use item_sizes::{
    gap_total, intrinsic_cross_size, resolve_base_main_size, resolve_cross_size,
};

use crate::stage1::Axis;
use crate::stage2::ItemRef;

/// Source of an item's preferred (intrinsic) size.
///
/// `cross_hint` carries the item's already-resolved cross size when the main axis is queried,
/// so content whose preferred extent depends on its width or height (wrapped text) can reflow.
/// It is `None` for cross-axis queries.
pub trait IntrinsicSizing {
    fn preferred_size(&self, item: ItemRef, axis: Axis, cross_hint: Option<f32>) -> f32;
}

impl<F> IntrinsicSizing for F
where
    F: Fn(ItemRef, Axis, Option<f32>) -> f32,
{
    #[inline]
    fn preferred_size(&self, item: ItemRef, axis: Axis, cross_hint: Option<f32>) -> f32 {
        self(item, axis, cross_hint)
    }
}
