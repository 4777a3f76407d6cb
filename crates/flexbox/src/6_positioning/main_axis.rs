//! Main-axis justification and positioning logic.

use log::debug;

use crate::stage1::JustifyContent;

/// Leading offset and per-item spacing (gap included) along the main axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MainPlan {
    /// Distance from main-start to the first item.
    pub leading: f32,
    /// Distance between consecutive items: the fixed gap plus any justify spacing.
    pub spacing: f32,
}

/// Compute the leading offset and spacing for `justify` given the final leftover space.
///
/// Negative leftover (overflow) is distributed with the same formulas, so `FlexEnd` and
/// `Center` can move items before main-start.
pub fn justify_params(
    justify: JustifyContent,
    rest_space: f32,
    item_count: usize,
    gap: f32,
) -> MainPlan {
    let count = item_count as f32;
    let (leading, extra) = match justify {
        JustifyContent::FlexStart => (0.0, 0.0),
        JustifyContent::FlexEnd => (rest_space, 0.0),
        JustifyContent::Center => (rest_space / 2.0, 0.0),
        JustifyContent::SpaceBetween => {
            (0.0, rest_space / item_count.saturating_sub(1).max(1) as f32)
        }
        JustifyContent::SpaceAround => {
            let half = rest_space / (item_count.saturating_sub(1) as f32 * 2.0 + 2.0);
            (half, half * 2.0)
        }
        JustifyContent::SpaceEvenly => {
            let slot = rest_space / (count + 1.0);
            (slot, slot)
        }
    };
    let plan = MainPlan {
        leading,
        spacing: gap + extra,
    };
    debug!(
        target: "flexbox::justify",
        "[FLEX-JUSTIFY] {justify:?} items={item_count} rest={rest_space:.3} leading={:.3} spacing={:.3}",
        plan.leading,
        plan.spacing
    );
    plan
}

/// Near-edge main offsets for items of the given sizes, placed in sequence.
pub fn accumulate_main_offsets(plan: MainPlan, sizes: &[f32]) -> Vec<f32> {
    let mut cursor = plan.leading;
    let mut offsets = Vec::with_capacity(sizes.len());
    for size in sizes {
        offsets.push(cursor);
        cursor += size + plan.spacing;
    }
    offsets
}
