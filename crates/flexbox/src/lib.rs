//! Single-line flexbox layout for rectangle trees.
//!
//! Arranges the direct children of a rectangular container along a main axis and a cross axis:
//! direction and reversal, proportional grow/shrink under min/max bounds, six justify policies,
//! four cross-axis alignments with per-item override, explicit ordering, fixed gaps, and optional
//! sizing of the container to its content.
//!
//! Multi-line wrapping, multi-line cross distribution and baseline alignment are not implemented.

// Stage modules, in the order a layout pass runs them.
// Stage 1: container and item settings
#[path = "1_styles/mod.rs"]
mod stage1;
// Stage 2: eligible item collection and ordering
#[path = "2_item_collection/mod.rs"]
mod stage2;
// Stage 3: main/cross axis resolution
#[path = "3_axes/mod.rs"]
mod stage3;
// Stage 4: cross sizes, base sizes and the grow/shrink solver
#[path = "4_sizing/mod.rs"]
mod stage4;
// Stage 5: fitting the container to its content
#[path = "5_auto_sizing/mod.rs"]
mod stage5;
// Stage 6: main-axis distribution and cross-axis alignment
#[path = "6_positioning/mod.rs"]
mod stage6;
// Stage 7: one full layout pass
#[path = "7_layout_pass/mod.rs"]
/// Entry point running stages 2 to 6 and producing placements.
mod stage7;

pub use stage1::{
    AlignItems, AlignSelf, Axis, AxisPair, ContainerStyle, FlexDirection, ItemStyle,
    JustifyContent, clamp_to_bounds,
};
pub use stage2::{ChildEntry, FlexItem, ItemRef, collect_flex_items, sort_items_by_order_stable};
pub use stage3::{Axes, resolve_axes};
pub use stage4::{
    FlexFactors, IntrinsicSizing, distribute_grow, distribute_shrink, gap_total, intrinsic_cross_size,
    resolve_base_main_size, resolve_cross_size, rest_space,
};
pub use stage5::{fit_cross_to_content, fit_main_to_content};
pub use stage6::{
    CrossPlacement, MainPlan, accumulate_main_offsets, align_cross, anchored_center,
    justify_params,
};
pub use stage7::{ContainerInput, LayoutOutcome, Placement, compute_layout};
