//! Per-item size resolution before any flexing.

use super::IntrinsicSizing;
use crate::stage1::{AlignItems, Axis};
use crate::stage2::FlexItem;
use crate::stage3::Axes;

/// Cross size an item takes when it is not stretched: explicit basis, else preferred size,
/// clamped to the item's bounds.
pub fn intrinsic_cross_size<S: IntrinsicSizing + ?Sized>(
    item: &FlexItem,
    cross: Axis,
    sizing: &S,
) -> f32 {
    let size = item
        .style
        .basis(cross)
        .unwrap_or_else(|| sizing.preferred_size(item.handle, cross, None));
    item.style.clamp(cross, size)
}

/// Resolve an item's cross size.
///
/// Stretched items take the container cross size; everything else uses
/// [`intrinsic_cross_size`]. Both are clamped to the item's bounds.
pub fn resolve_cross_size<S: IntrinsicSizing + ?Sized>(
    item: &FlexItem,
    axes: Axes,
    align: AlignItems,
    container_cross: f32,
    sizing: &S,
) -> f32 {
    if align == AlignItems::Stretch {
        item.style.clamp(axes.cross, container_cross)
    } else {
        intrinsic_cross_size(item, axes.cross, sizing)
    }
}

/// Resolve an item's main size before grow/shrink.
///
/// The preferred-size query receives `cross_size` as a hint, so it must run after the cross
/// size is fixed.
pub fn resolve_base_main_size<S: IntrinsicSizing + ?Sized>(
    item: &FlexItem,
    axes: Axes,
    cross_size: f32,
    sizing: &S,
) -> f32 {
    let size = item
        .style
        .basis(axes.main)
        .unwrap_or_else(|| sizing.preferred_size(item.handle, axes.main, Some(cross_size)));
    item.style.clamp(axes.main, size)
}

/// Total fixed spacing between `count` items, never negative.
///
/// `limit` caps the total (the container's main size when that size is fixed).
pub fn gap_total(gap: f32, count: usize, limit: Option<f32>) -> f32 {
    let raw = (gap * count.saturating_sub(1) as f32).max(0.0);
    limit.map_or(raw, |limit_v| raw.min(limit_v.max(0.0)))
}
