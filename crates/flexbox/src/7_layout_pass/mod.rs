use log::debug;

use crate::stage1::{AlignItems, AxisPair, ContainerStyle};
use crate::stage2::{ChildEntry, ItemRef, collect_flex_items};
use crate::stage3::resolve_axes;
use crate::stage4::{
    FlexFactors, IntrinsicSizing, distribute_grow, distribute_shrink, gap_total,
    resolve_base_main_size, resolve_cross_size, rest_space,
};
use crate::stage5::{fit_cross_to_content, fit_main_to_content};
use crate::stage6::{accumulate_main_offsets, align_cross, anchored_center, justify_params};

/// The container as seen by one layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerInput {
    pub style: ContainerStyle,
    /// Current container size; auto-sized axes are recomputed by the pass.
    pub size: AxisPair<f32>,
}

/// Final geometry of one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    pub handle: ItemRef,
    pub size: AxisPair<f32>,
    /// Near-edge offset from the container's top-left corner, in layout space.
    pub offset: AxisPair<f32>,
    /// Item centre relative to a top-left anchor, in host coordinates.
    pub anchored_position: AxisPair<f32>,
}

/// Result of one layout pass, to be written back to the host in one go.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOutcome {
    /// Container size after auto-sizing (unchanged on fixed axes).
    pub container_size: AxisPair<f32>,
    /// Main-axis space left after grow/shrink, distributed by `justify_content`.
    pub rest_space: f32,
    /// Placements in layout order (after `order` sorting and reversal).
    pub placements: Vec<Placement>,
}

/// Run one layout pass over `children` of `container`.
///
/// Returns `None` when no child is eligible (inactive or without item settings), in which
/// case nothing should be written back. The pass is pure: calling it again with the returned
/// container size yields the same outcome.
pub fn compute_layout<S: IntrinsicSizing + ?Sized>(
    container: &ContainerInput,
    children: &[ChildEntry],
    sizing: &S,
) -> Option<LayoutOutcome> {
    let style = &container.style;
    let items = collect_flex_items(children, style.direction);
    if items.is_empty() {
        debug!(target: "flexbox::pass", "[FLEX-PASS] no eligible items among {} children", children.len());
        return None;
    }
    let axes = resolve_axes(style.direction);
    let mut container_size = container.size;

    if style.is_auto(axes.cross) {
        container_size.set(axes.cross, fit_cross_to_content(&items, axes.cross, sizing));
    }
    let container_cross = container_size.get(axes.cross);

    let aligns: Vec<AlignItems> = items
        .iter()
        .map(|item| item.style.align_self.resolve(style.align_items))
        .collect();
    let cross_sizes: Vec<f32> = items
        .iter()
        .zip(aligns.iter())
        .map(|(item, align)| resolve_cross_size(item, axes, *align, container_cross, sizing))
        .collect();
    let mut main_sizes: Vec<f32> = items
        .iter()
        .zip(cross_sizes.iter())
        .map(|(item, cross_size)| resolve_base_main_size(item, axes, *cross_size, sizing))
        .collect();

    let main_auto = style.is_auto(axes.main);
    let gap_main = style.gap.get(axes.main);
    let gaps = gap_total(
        gap_main,
        items.len(),
        (!main_auto).then(|| container_size.get(axes.main)),
    );
    let mut leftover = rest_space(container_size.get(axes.main) - gaps, &main_sizes);
    debug!(
        target: "flexbox::pass",
        "[FLEX-PASS] items={} main={:?} container_main={:.3} gaps={gaps:.3} leftover={leftover:.3}",
        items.len(),
        axes.main,
        container_size.get(axes.main)
    );
    if main_auto {
        let (fitted, forced) = fit_main_to_content(container_size.get(axes.main), leftover);
        container_size.set(axes.main, fitted);
        leftover = forced;
    }

    let available = container_size.get(axes.main) - gaps;
    let factors: Vec<FlexFactors> = items
        .iter()
        .map(|item| FlexFactors::from_style(&item.style, axes.main))
        .collect();
    if leftover > 0.0 {
        distribute_grow(available, &factors, &mut main_sizes);
    } else if leftover < 0.0 {
        distribute_shrink(available, &factors, &mut main_sizes);
    }
    let final_rest = if main_auto {
        0.0
    } else {
        rest_space(available, &main_sizes)
    };

    let plan = justify_params(style.justify_content, final_rest, items.len(), gap_main);
    let main_offsets = accumulate_main_offsets(plan, &main_sizes);

    let placements: Vec<Placement> = items
        .iter()
        .zip(aligns.iter())
        .zip(cross_sizes.iter())
        .zip(main_sizes.iter().zip(main_offsets.iter()))
        .map(|(((item, align), cross_size), (main_size, main_offset))| {
            let cross = align_cross(*align, container_cross, *cross_size);
            Placement {
                handle: item.handle,
                size: AxisPair::from_main_cross(axes.main, *main_size, cross.cross_size),
                offset: AxisPair::from_main_cross(axes.main, *main_offset, cross.cross_offset),
                anchored_position: AxisPair::from_main_cross(
                    axes.main,
                    anchored_center(*main_offset, *main_size, axes.main_sign()),
                    anchored_center(cross.cross_offset, cross.cross_size, axes.cross_sign()),
                ),
            }
        })
        .collect();

    debug!(
        target: "flexbox::pass",
        "[FLEX-PASS] done container={:.3}x{:.3} rest={final_rest:.3}",
        container_size.x,
        container_size.y
    );
    Some(LayoutOutcome {
        container_size,
        rest_space: final_rest,
        placements,
    })
}

#[cfg(test)]
mod tests;
