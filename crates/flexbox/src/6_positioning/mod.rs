//! Item placement: main-axis distribution and cross-axis alignment.
//!
//! Offsets are near-edge distances from the container's top-left corner in layout space
//! (left-to-right, top-to-bottom). [`anchored_center`] converts them to host coordinates.

pub mod cross_axis;
pub mod main_axis;

pub use cross_axis::{CrossPlacement, align_cross};
pub use main_axis::{MainPlan, accumulate_main_offsets, justify_params};

/// Host-coordinate centre of an item from its layout-space near-edge offset.
///
/// Items are anchored at the container's top-left corner with a centred pivot; `sign` is the
/// axis sign convention (see [`crate::Axis::position_sign`]).
#[inline]
pub fn anchored_center(offset: f32, size: f32, sign: f32) -> f32 {
    (offset + size / 2.0) * sign
}
