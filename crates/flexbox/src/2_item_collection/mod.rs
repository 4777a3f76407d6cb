//! Flex items: identification, filtering and ordering of a container's children.

use crate::stage1::{FlexDirection, ItemStyle};
use crate::stage3::resolve_axes;

/// Minimal handle for an item reference. This crate keeps it opaque.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ItemRef(pub u64);

/// One direct child of a container as the host enumerates it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChildEntry {
    pub handle: ItemRef,
    /// Whether the child is currently active/visible in the host.
    pub active: bool,
    /// Item settings; children without them stay in the host but are not laid out.
    pub item: Option<ItemStyle>,
}

/// A child that takes part in the layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexItem {
    pub handle: ItemRef,
    pub style: ItemStyle,
}

/// Collect, order and (for reverse directions) reverse the eligible children.
///
/// Inactive children and children without item settings are skipped. Survivors are stably
/// sorted by `order`; the whole sequence is then reversed for `RowReverse`/`ColumnReverse`.
/// Callers place every returned item against a top-left anchor.
pub fn collect_flex_items(children: &[ChildEntry], direction: FlexDirection) -> Vec<FlexItem> {
    let eligible: Vec<(FlexItem, i32)> = children
        .iter()
        .filter(|child| child.active)
        .filter_map(|child| {
            child.item.map(|style| {
                (
                    FlexItem {
                        handle: child.handle,
                        style,
                    },
                    style.order,
                )
            })
        })
        .collect();
    let mut ordered = sort_items_by_order_stable(&eligible);
    if resolve_axes(direction).reverse {
        ordered.reverse();
    }
    ordered
}

/// Stable sort of items by order, preserving input order for ties.
pub fn sort_items_by_order_stable<T: Copy>(items: &[(T, i32)]) -> Vec<T> {
    let mut keyed: Vec<(i32, T)> = items.iter().map(|&(item, order)| (order, item)).collect();
    // `sort_by_key` is stable, so equal orders keep their enumeration order.
    keyed.sort_by_key(|entry| entry.0);
    keyed.into_iter().map(|(_, item)| item).collect()
}
