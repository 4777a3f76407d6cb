//! Tests for full layout passes.

use super::*;
use crate::stage1::{AlignSelf, Axis, FlexDirection, ItemStyle, JustifyContent};


/// Preferred sizes keyed by item handle; unknown items report zero.
pub struct PreferredTable(pub Vec<(u64, f32, f32)>);

impl IntrinsicSizing for PreferredTable {
    fn preferred_size(&self, item: ItemRef, axis: Axis, _cross_hint: Option<f32>) -> f32 {
        self.0
            .iter()
            .find(|entry| entry.0 == item.0)
            .map_or(0.0, |&(_, width, height)| match axis {
                Axis::Horizontal => width,
                Axis::Vertical => height,
            })
    }
}

/// Sizing source for tests that only use explicit bases.
pub fn no_content(_item: ItemRef, _axis: Axis, _cross_hint: Option<f32>) -> f32 {
    0.0
}

/// Active child with the given item settings.
pub fn styled(handle: u64, style: ItemStyle) -> ChildEntry {
    ChildEntry {
        handle: ItemRef(handle),
        active: true,
        item: Some(style),
    }
}

/// Item with an explicit main-axis basis (horizontal) and cross basis (vertical).
pub fn row_item(basis: f32, grow: f32) -> ItemStyle {
    ItemStyle {
        flex_grow: grow,
        flex_basis: AxisPair::new(Some(basis), Some(20.0)),
        ..ItemStyle::default()
    }
}

/// Row container of the given size.
pub fn row_container(width: f32, height: f32, justify: JustifyContent) -> ContainerInput {
    ContainerInput {
        style: ContainerStyle {
            direction: FlexDirection::Row,
            justify_content: justify,
            align_items: AlignItems::FlexStart,
            ..ContainerStyle::default()
        },
        size: AxisPair::new(width, height),
    }
}

/// Run a pass that is expected to have eligible items.
pub fn run<S: IntrinsicSizing + ?Sized>(
    container: &ContainerInput,
    children: &[ChildEntry],
    sizing: &S,
) -> LayoutOutcome {
    compute_layout(container, children, sizing).unwrap_or(LayoutOutcome {
        container_size: container.size,
        rest_space: f32::NAN,
        placements: Vec::new(),
    })
}

pub fn assert_close(got: f32, expected: f32) {
    assert!((got - expected).abs() < 0.01, "got {got}, expected {expected}");
}

/// Sizes along one axis in layout order.
pub fn sizes_on(outcome: &LayoutOutcome, axis: Axis) -> Vec<f32> {
    outcome
        .placements
        .iter()
        .map(|placement| placement.size.get(axis))
        .collect()
}

/// Item handles in layout order.
pub fn handle_order(outcome: &LayoutOutcome) -> Vec<u64> {
    outcome
        .placements
        .iter()
        .map(|placement| placement.handle.0)
        .collect()
}

pub fn align_self(style: ItemStyle, align: AlignSelf) -> ItemStyle {
    ItemStyle {
        align_self: align,
        ..style
    }
}
