//! Sizing the container to its content.
//!
//! On an auto main axis the content defines the container extent, so the leftover space is
//! folded into the container size and nothing grows or shrinks. On an auto cross axis the
//! container takes the largest non-stretched item cross size; stretched items then fill it.
//! Both axes compose independently.

use log::debug;

use crate::stage1::Axis;
use crate::stage2::FlexItem;
use crate::stage4::{IntrinsicSizing, intrinsic_cross_size};

/// Container main size that makes `leftover` vanish.
///
/// Returns the fitted main size together with the leftover the solver must use (always zero).
pub fn fit_main_to_content(container_main: f32, leftover: f32) -> (f32, f32) {
    let fitted = container_main - leftover;
    debug!(
        target: "flexbox::pass",
        "[FLEX-AUTO] main {container_main:.3} -> {fitted:.3} (leftover {leftover:.3} absorbed)"
    );
    (fitted, 0.0)
}

/// Largest non-stretched cross size among `items`.
///
/// An empty item list fits to zero.
pub fn fit_cross_to_content<S: IntrinsicSizing + ?Sized>(
    items: &[FlexItem],
    cross: Axis,
    sizing: &S,
) -> f32 {
    let fitted = items
        .iter()
        .map(|item| intrinsic_cross_size(item, cross, sizing))
        .fold(0.0f32, f32::max);
    debug!(target: "flexbox::pass", "[FLEX-AUTO] cross fitted to {fitted:.3}");
    fitted
}
