//! Flex grow and shrink distribution.
//!
//! Both loops commit to one branch for the whole pass, chosen by the sign of the leftover
//! space. Each extra round only happens when some item hit a bound and released (grow) or
//! demanded (shrink) space, and those items are frozen, so the number of rounds is bounded
//! by the item count.
//!
//! Bound hits are detected with plain float comparisons; sizes landing a rounding error
//! away from a bound may take one more round than exact arithmetic would.

use log::trace;

use crate::stage1::{Axis, ItemStyle};

/// Main-axis flex inputs of one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexFactors {
    pub grow: f32,
    pub shrink: f32,
    pub min_main: Option<f32>,
    pub max_main: Option<f32>,
}

impl FlexFactors {
    pub fn from_style(style: &ItemStyle, main: Axis) -> Self {
        Self {
            grow: style.grow(),
            shrink: style.shrink(),
            min_main: style.min(main),
            max_main: style.max(main),
        }
    }
}

/// Leftover space once `sizes` are placed into `available` (container main size minus gaps).
#[inline]
pub fn rest_space(available: f32, sizes: &[f32]) -> f32 {
    available - sizes.iter().copied().sum::<f32>()
}

/// Grow items with a positive weight into positive leftover space.
///
/// The weight divisor is floored at 1: when the weights sum to less than 1, only that fraction
/// of the leftover is handed out. Items reaching `max_main` are frozen; if any overshot, the
/// excess is redistributed to the rest in another round.
///
/// Returns the number of rounds run.
pub fn distribute_grow(available: f32, items: &[FlexFactors], sizes: &mut [f32]) -> usize {
    let mut frozen: Vec<bool> = items.iter().map(|factors| factors.grow <= 0.0).collect();
    let mut rest = rest_space(available, sizes);
    let mut rounds = 0usize;
    while rest > 0.0 && frozen.iter().any(|is_frozen| !*is_frozen) {
        rounds += 1;
        let total_grow = items
            .iter()
            .zip(frozen.iter())
            .filter(|(_, is_frozen)| !**is_frozen)
            .map(|(factors, _)| factors.grow)
            .sum::<f32>()
            .max(1.0);
        let mut has_more_space = false;
        for ((size_ref, factors), frozen_ref) in sizes.iter_mut().zip(items).zip(frozen.iter_mut()) {
            if *frozen_ref {
                continue;
            }
            let mut grown = *size_ref + factors.grow / total_grow * rest;
            if let Some(max_main) = factors.max_main {
                if grown >= max_main {
                    *frozen_ref = true;
                }
                if grown > max_main {
                    grown = max_main;
                    has_more_space = true;
                }
            }
            *size_ref = grown.max(0.0);
        }
        trace!(
            target: "flexbox::sizing",
            "[FLEX-GROW] round={rounds} total_grow={total_grow:.3} rest={rest:.3} more_space={has_more_space}"
        );
        if !has_more_space {
            break;
        }
        rest = rest_space(available, sizes);
    }
    rounds
}

/// Shrink items with a positive weight into negative leftover space.
///
/// Each item gives up space in proportion to `shrink × current size`. The weight multiplier is
/// capped at 1, so weights summing to less than 1 recover only part of the overflow. Items
/// reaching `min_main` are frozen; if any undershot, the deficit is taken from the rest in
/// another round. A round where the weighted size total is zero leaves sizes untouched.
///
/// Returns the number of rounds run.
pub fn distribute_shrink(available: f32, items: &[FlexFactors], sizes: &mut [f32]) -> usize {
    let mut frozen: Vec<bool> = items.iter().map(|factors| factors.shrink <= 0.0).collect();
    let mut rest = rest_space(available, sizes);
    let mut rounds = 0usize;
    while rest < 0.0 && frozen.iter().any(|is_frozen| !*is_frozen) {
        rounds += 1;
        let mut total_shrink = 0.0f32;
        let mut total_shrink_size = 0.0f32;
        for ((size, factors), is_frozen) in sizes.iter().zip(items).zip(frozen.iter()) {
            if !*is_frozen {
                total_shrink += factors.shrink;
                total_shrink_size += *size * factors.shrink;
            }
        }
        let total_shrink = total_shrink.min(1.0);
        let mut needs_more_space = false;
        for ((size_ref, factors), frozen_ref) in sizes.iter_mut().zip(items).zip(frozen.iter_mut()) {
            if *frozen_ref {
                continue;
            }
            let mut shrunk = *size_ref;
            if total_shrink_size > 0.0 {
                shrunk += total_shrink * rest * factors.shrink * shrunk / total_shrink_size;
            }
            if let Some(min_main) = factors.min_main {
                if shrunk <= min_main {
                    *frozen_ref = true;
                }
                if shrunk < min_main {
                    shrunk = min_main;
                    needs_more_space = true;
                }
            }
            *size_ref = shrunk.max(0.0);
        }
        trace!(
            target: "flexbox::sizing",
            "[FLEX-SHRINK] round={rounds} total_shrink={total_shrink:.3} weighted={total_shrink_size:.3} rest={rest:.3} more_space={needs_more_space}"
        );
        if !needs_more_space {
            break;
        }
        rest = rest_space(available, sizes);
    }
    rounds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(grow: f32, shrink: f32) -> FlexFactors {
        FlexFactors {
            grow,
            shrink,
            min_main: None,
            max_main: None,
        }
    }

    fn assert_sizes(got: &[f32], expected: &[f32]) {
        assert_eq!(got.len(), expected.len());
        for (got_size, expected_size) in got.iter().zip(expected) {
            assert!(
                (got_size - expected_size).abs() < 0.01,
                "got {got:?}, expected {expected:?}"
            );
        }
    }

    #[test]
    /// # Panics
    /// Panics if equal grow weights do not split the leftover equally.
    fn grow_splits_leftover_by_weight() {
        let items = [factors(1.0, 1.0), factors(1.0, 1.0), factors(2.0, 1.0)];
        let mut sizes = [50.0, 50.0, 50.0];
        let rounds = distribute_grow(350.0, &items, &mut sizes);
        assert_eq!(rounds, 1);
        // leftover 200 split 1:1:2
        assert_sizes(&sizes, &[100.0, 100.0, 150.0]);
    }

    #[test]
    /// # Panics
    /// Panics if weights summing below one hand out more than their fraction.
    fn grow_weights_below_one_partially_fill() {
        let items = [factors(0.25, 1.0), factors(0.25, 1.0)];
        let mut sizes = [0.0, 0.0];
        distribute_grow(100.0, &items, &mut sizes);
        assert_sizes(&sizes, &[25.0, 25.0]);
        assert!((rest_space(100.0, &sizes) - 50.0).abs() < 0.01);
    }

    #[test]
    /// Ensures flex-grow respects `max_main` and redistributes the excess.
    ///
    /// # Panics
    /// Panics if the saturated item exceeds its max or the others miss the released space.
    fn grow_respects_max_and_redistributes() {
        let mut capped = factors(1.0, 1.0);
        capped.max_main = Some(80.0);
        let items = [capped, factors(1.0, 1.0), factors(1.0, 1.0)];
        let mut sizes = [50.0, 50.0, 50.0];
        let rounds = distribute_grow(300.0, &items, &mut sizes);
        assert_eq!(rounds, 2);
        // Round 1: each +50 -> 100, first clamps to 80 releasing 20. Round 2: +10 each.
        assert_sizes(&sizes, &[80.0, 110.0, 110.0]);
        assert!(rest_space(300.0, &sizes).abs() < 0.01);
    }

    #[test]
    /// # Panics
    /// Panics if zero-weight items grow or the loop runs without growable items.
    fn grow_without_growable_items_is_noop() {
        let items = [factors(0.0, 1.0), factors(0.0, 1.0)];
        let mut sizes = [10.0, 20.0];
        let rounds = distribute_grow(100.0, &items, &mut sizes);
        assert_eq!(rounds, 0);
        assert_sizes(&sizes, &[10.0, 20.0]);
    }

    #[test]
    /// # Panics
    /// Panics if proportional shrink does not remove overflow weighted by size.
    fn shrink_weights_by_current_size() {
        let items = [factors(0.0, 1.0), factors(0.0, 1.0)];
        let mut sizes = [80.0, 80.0];
        distribute_shrink(100.0, &items, &mut sizes);
        assert_sizes(&sizes, &[50.0, 50.0]);

        let mut uneven = [100.0, 50.0];
        distribute_shrink(120.0, &items, &mut uneven);
        // overflow 30 split 2:1 by size
        assert_sizes(&uneven, &[80.0, 40.0]);
    }

    #[test]
    /// Ensures flex-shrink respects `min_main` and freezes at min.
    ///
    /// # Panics
    /// Panics if the produced sizes violate min constraints or total does not equal available.
    fn shrink_respects_min_and_freezes() {
        let mut floored = factors(0.0, 1.0);
        floored.min_main = Some(40.0);
        let items = [floored, factors(0.0, 1.0), factors(0.0, 1.0)];
        let mut sizes = [50.0, 50.0, 50.0];
        let rounds = distribute_shrink(100.0, &items, &mut sizes);
        assert_eq!(rounds, 2);
        assert_sizes(&sizes, &[40.0, 30.0, 30.0]);
        assert!(rest_space(100.0, &sizes).abs() < 0.01);
    }

    #[test]
    /// # Panics
    /// Panics if a shrink weight sum below one recovers the whole overflow.
    fn shrink_weights_below_one_partially_shrink() {
        let items = [factors(0.0, 0.5)];
        let mut sizes = [80.0];
        distribute_shrink(20.0, &items, &mut sizes);
        // 0.5 * -60 * 0.5 * 80 / 40 = -30
        assert_sizes(&sizes, &[50.0]);
    }

    #[test]
    /// # Panics
    /// Panics if zero-sized shrinkable items cause a division by zero or size change.
    fn shrink_with_zero_weighted_size_skips_update() {
        let items = [factors(0.0, 1.0), factors(0.0, 0.0)];
        let mut sizes = [0.0, 50.0];
        let rounds = distribute_shrink(10.0, &items, &mut sizes);
        assert_eq!(rounds, 1);
        assert_sizes(&sizes, &[0.0, 50.0]);
    }
}
