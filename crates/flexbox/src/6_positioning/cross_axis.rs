//! Cross-axis alignment of already-sized items.

use crate::stage1::AlignItems;

/// Cross-axis placement result for one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrossPlacement {
    /// The resolved cross-size (unchanged by alignment).
    pub cross_size: f32,
    /// The cross-axis offset from cross-start.
    pub cross_offset: f32,
}

/// Position an item of `item_cross_size` within `container_cross_size`.
///
/// `Stretch` centres the item: its size already equals the (clamped) container cross size,
/// so centring covers the container and keeps a clamped item in the middle.
#[inline]
pub fn align_cross(align: AlignItems, container_cross_size: f32, item_cross_size: f32) -> CrossPlacement {
    let cross_offset = match align {
        AlignItems::FlexStart => 0.0,
        AlignItems::Center | AlignItems::Stretch => (container_cross_size - item_cross_size) / 2.0,
        AlignItems::FlexEnd => container_cross_size - item_cross_size,
    };
    CrossPlacement {
        cross_size: item_cross_size,
        cross_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if start/center/end do not touch the expected container edges.
    fn alignment_touches_expected_edges() {
        let start = align_cross(AlignItems::FlexStart, 100.0, 30.0);
        assert!(start.cross_offset.abs() < 0.001);
        let center = align_cross(AlignItems::Center, 100.0, 30.0);
        assert!((center.cross_offset - 35.0).abs() < 0.001);
        let end = align_cross(AlignItems::FlexEnd, 100.0, 30.0);
        assert!((end.cross_offset + end.cross_size - 100.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if stretch does not centre a size-limited item.
    fn stretch_centres_clamped_item() {
        let full = align_cross(AlignItems::Stretch, 100.0, 100.0);
        assert!(full.cross_offset.abs() < 0.001);
        let clamped = align_cross(AlignItems::Stretch, 100.0, 60.0);
        assert!((clamped.cross_offset - 20.0).abs() < 0.001);
        assert!((clamped.cross_size - 60.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if items larger than the container are clamped instead of overflowing.
    fn oversized_items_overflow_symmetrically() {
        let center = align_cross(AlignItems::Center, 40.0, 60.0);
        assert!((center.cross_offset + 10.0).abs() < 0.001);
        let end = align_cross(AlignItems::FlexEnd, 40.0, 60.0);
        assert!((end.cross_offset + 20.0).abs() < 0.001);
    }
}
