//! Resolves which rows, and therefore which items, need a bound view.

use std::ops::RangeInclusive;

use crate::{geometry::GridGeometry, px::Px};

/// Returns the inclusive row range that must be materialized.
///
/// The strictly visible rows are those whose vertical extent intersects
/// `[scroll_offset_y, scroll_offset_y + viewport_height)`. An offset that
/// lands in the gap between two rows starts at the lower row. The range is then
/// widened by `preload_row_span` rows on both sides and clamped to the grid.
///
/// Returns `None` when there are no rows, the viewport has no height, or the
/// viewport lies entirely outside the content and no preload rows reach it.
///
/// # Examples
///
/// ```
/// use tessera_array_view::{
///     LayoutConfig, compute_geometry, resolve_visible_row_range,
///     px::{Px, PxSize},
/// };
///
/// let config = LayoutConfig::default()
///     .item_size(PxSize::new(Px(100), Px(100)))
///     .minimum_column_gap(Px(10))
///     .maximum_row_gap(Px(10));
/// let geometry = compute_geometry(Px(350), &config, 100).unwrap();
/// // Rows 2..=4 fill the viewport exactly; one preload row on each side.
/// let rows = resolve_visible_row_range(Px(220), Px(320), &geometry, 1);
/// assert_eq!(rows, Some(1..=5));
/// ```
pub fn resolve_visible_row_range(
    scroll_offset_y: Px,
    viewport_height: Px,
    geometry: &GridGeometry,
    preload_row_span: usize,
) -> Option<RangeInclusive<usize>> {
    if geometry.row_count == 0 || viewport_height <= Px::ZERO {
        return None;
    }
    let last_row = geometry.row_count - 1;
    let pitch = i64::from(geometry.row_pitch().0).max(1);
    let item_height = i64::from(geometry.item_size.height.0);
    let origin = i64::from(geometry.effective_insets.top.0);

    let top = i64::from(scroll_offset_y.0) - origin;
    let bottom = top + i64::from(viewport_height.0);
    if bottom <= 0 {
        // Viewport ends above the first row.
        return expand_rows(None, 0, preload_row_span, last_row);
    }

    let first = if top <= 0 {
        0
    } else {
        let row = top / pitch;
        if top - row * pitch >= item_height {
            row + 1
        } else {
            row
        }
    };
    // `bottom` is exclusive; the last row is the one holding `bottom - 1`,
    // or the row above it when that pixel lies in a gap.
    let last = (bottom - 1) / pitch;

    let last_row_index = i64::try_from(last_row).unwrap_or(i64::MAX);
    if first > last || first > last_row_index {
        // Only a gap, the bottom inset or space past the content is on screen.
        let anchor = clamp_row(first, last_row + 1);
        return expand_rows(None, anchor, preload_row_span, last_row);
    }
    let first = clamp_row(first, last_row);
    let last = clamp_row(last, last_row);
    expand_rows(Some(first..=last), first, preload_row_span, last_row)
}

/// Converts a row range into the inclusive item index range it covers.
///
/// The last row may be partially filled, so the upper bound is clamped to the
/// last valid item index. `rows` must come from
/// [`resolve_visible_row_range`] for the same geometry.
pub fn item_range_for_rows(
    rows: &RangeInclusive<usize>,
    geometry: &GridGeometry,
) -> RangeInclusive<usize> {
    let columns = geometry.column_count;
    let first = rows.start().saturating_mul(columns);
    let last = rows
        .end()
        .saturating_add(1)
        .saturating_mul(columns)
        .saturating_sub(1)
        .min(geometry.item_count.saturating_sub(1));
    first..=last
}

fn clamp_row(row: i64, last_row: usize) -> usize {
    usize::try_from(row.max(0)).unwrap_or(usize::MAX).min(last_row)
}

/// Widens a strictly visible range by the preload span.
///
/// With nothing strictly visible, preload rows still reach toward `anchor`,
/// the row nearest to the viewport.
fn expand_rows(
    visible: Option<RangeInclusive<usize>>,
    anchor: usize,
    preload_row_span: usize,
    last_row: usize,
) -> Option<RangeInclusive<usize>> {
    match visible {
        Some(rows) => {
            let first = rows.start().saturating_sub(preload_row_span);
            let last = rows.end().saturating_add(preload_row_span).min(last_row);
            Some(first..=last)
        }
        None if preload_row_span == 0 => None,
        None => {
            let first = anchor.saturating_sub(preload_row_span);
            let last = anchor
                .saturating_add(preload_row_span.saturating_sub(1))
                .min(last_row);
            Some(first..=last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::LayoutConfig,
        geometry::compute_geometry,
        px::{PxInsets, PxSize},
    };

    /// 3 columns of 100x100 with 10 px row gaps in a 350 px wide viewport.
    fn geometry(item_count: usize) -> GridGeometry {
        let config = LayoutConfig::default()
            .item_size(PxSize::new(Px(100), Px(100)))
            .minimum_column_gap(Px(10))
            .maximum_row_gap(Px(10));
        compute_geometry(Px(350), &config, item_count).unwrap()
    }

    #[test]
    fn test_exact_rows_with_preload() {
        let geometry = geometry(100);
        assert_eq!(geometry.row_count, 34);
        assert_eq!(
            resolve_visible_row_range(Px(220), Px(320), &geometry, 0),
            Some(2..=4)
        );
        assert_eq!(
            resolve_visible_row_range(Px(220), Px(320), &geometry, 1),
            Some(1..=5)
        );
    }

    #[test]
    fn test_preload_is_clamped_to_grid() {
        let geometry = geometry(100);
        assert_eq!(
            resolve_visible_row_range(Px(0), Px(210), &geometry, 3),
            Some(0..=4)
        );
        let bottom = geometry.content_height - Px(210);
        assert_eq!(
            resolve_visible_row_range(bottom, Px(210), &geometry, 3),
            Some(29..=33)
        );
    }

    #[test]
    fn test_offset_inside_gap_starts_at_next_row() {
        let geometry = geometry(100);
        // 105 is inside the gap between row 0 (0..100) and row 1 (110..210).
        assert_eq!(
            resolve_visible_row_range(Px(105), Px(100), &geometry, 0),
            Some(1..=1)
        );
        // Bottom edge at 325 lands in the gap after row 2.
        assert_eq!(
            resolve_visible_row_range(Px(0), Px(325), &geometry, 0),
            Some(0..=2)
        );
    }

    #[test]
    fn test_partial_rows_count_as_visible() {
        let geometry = geometry(100);
        assert_eq!(
            resolve_visible_row_range(Px(50), Px(100), &geometry, 0),
            Some(0..=1)
        );
    }

    #[test]
    fn test_overscroll_above_top() {
        let geometry = geometry(100);
        assert_eq!(
            resolve_visible_row_range(Px(-40), Px(150), &geometry, 0),
            Some(0..=0)
        );
        assert_eq!(
            resolve_visible_row_range(Px(-400), Px(150), &geometry, 0),
            None
        );
        assert_eq!(
            resolve_visible_row_range(Px(-400), Px(150), &geometry, 2),
            Some(0..=1)
        );
    }

    #[test]
    fn test_scrolled_past_content_binds_only_preload() {
        let geometry = geometry(10);
        assert_eq!(geometry.row_count, 4);
        assert_eq!(
            resolve_visible_row_range(Px(5_000), Px(300), &geometry, 0),
            None
        );
        assert_eq!(
            resolve_visible_row_range(Px(5_000), Px(300), &geometry, 2),
            Some(2..=3)
        );
        // Viewport straddling the end of the content still clamps.
        assert_eq!(
            resolve_visible_row_range(Px(300), Px(300), &geometry, 0),
            Some(2..=3)
        );
    }

    #[test]
    fn test_bottom_inset_alone_is_not_a_row() {
        let config = LayoutConfig::default()
            .item_size(PxSize::new(Px(100), Px(100)))
            .minimum_column_gap(Px(10))
            .maximum_row_gap(Px(10))
            .content_insets(PxInsets::new(Px(0), Px(0), Px(200), Px(0)));
        let geometry = compute_geometry(Px(350), &config, 12).unwrap();
        // Row 3 covers [330, 430); the bottom inset runs to 630.
        assert_eq!(geometry.row_count, 4);
        assert_eq!(
            resolve_visible_row_range(Px(450), Px(100), &geometry, 0),
            None
        );
        assert_eq!(
            resolve_visible_row_range(Px(430), Px(100), &geometry, 1),
            Some(3..=3)
        );
        assert_eq!(
            resolve_visible_row_range(Px(429), Px(100), &geometry, 0),
            Some(3..=3)
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(resolve_visible_row_range(Px(0), Px(300), &geometry(0), 2), None);
        assert_eq!(resolve_visible_row_range(Px(0), Px(0), &geometry(10), 2), None);
    }

    #[test]
    fn test_top_inset_shifts_rows() {
        let config = LayoutConfig::default()
            .item_size(PxSize::new(Px(100), Px(100)))
            .content_insets(PxInsets::new(Px(50), Px(0), Px(0), Px(0)))
            .maximum_row_gap(Px::ZERO);
        let geometry = compute_geometry(Px(100), &config, 20).unwrap();
        assert_eq!(
            resolve_visible_row_range(Px(0), Px(50), &geometry, 0),
            None
        );
        assert_eq!(
            resolve_visible_row_range(Px(0), Px(51), &geometry, 0),
            Some(0..=0)
        );
        assert_eq!(
            resolve_visible_row_range(Px(150), Px(100), &geometry, 0),
            Some(1..=1)
        );
    }

    #[test]
    fn test_item_range_for_rows() {
        let geometry = geometry(100);
        assert_eq!(item_range_for_rows(&(1..=5), &geometry), 3..=17);
        assert_eq!(item_range_for_rows(&(33..=33), &geometry), 99..=99);

        let short = self::geometry(10);
        assert_eq!(item_range_for_rows(&(0..=3), &short), 0..=9);
    }
}
