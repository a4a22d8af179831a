//! Grid geometry: column fitting, gap distribution and index to rect mapping.
//!
//! Everything here is a pure function of its inputs. The controller keeps the
//! last [`GridGeometry`] around and recomputes it only when the viewport
//! width, the configuration or the item count changes.

use crate::{
    config::LayoutConfig,
    error::{GridError, Result},
    px::{Px, PxInsets, PxRect, PxSize},
};

/// Derived layout of a grid for one viewport width and item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Number of columns; always at least one.
    pub column_count: usize,
    /// Number of rows, `ceil(item_count / column_count)`.
    pub row_count: usize,
    /// Horizontal distance between adjacent columns.
    pub column_gap: Px,
    /// Vertical distance between adjacent rows.
    pub row_gap: Px,
    /// Configured insets plus any centering slack.
    pub effective_insets: PxInsets,
    /// Total scrollable height including insets.
    pub content_height: Px,
    /// Size of every item.
    pub item_size: PxSize,
    /// Item count the geometry was computed for.
    pub item_count: usize,
}

impl GridGeometry {
    /// Returns `true` when the grid has no items.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Row containing `index`.
    pub fn row_of(&self, index: usize) -> usize {
        index / self.column_count
    }

    /// Column containing `index`.
    pub fn column_of(&self, index: usize) -> usize {
        index % self.column_count
    }

    /// Distance between the tops of two adjacent rows.
    pub fn row_pitch(&self) -> Px {
        self.item_size.height.saturating_add(self.row_gap)
    }

    /// Distance between the left edges of two adjacent columns.
    pub fn column_pitch(&self) -> Px {
        self.item_size.width.saturating_add(self.column_gap)
    }

    /// Top edge of `row` in content coordinates.
    pub fn row_top(&self, row: usize) -> Px {
        self.effective_insets
            .top
            .saturating_add(self.row_pitch().saturating_mul_count(row))
    }

    /// Content size to report to the scroll container for this geometry.
    pub fn content_size(&self, viewport_width: Px) -> PxSize {
        PxSize::new(viewport_width.clamp_non_negative(), self.content_height)
    }
}

/// Computes the grid layout for a viewport width.
///
/// Columns are packed greedily: the column count is the largest `n` for which
/// `n` items and `n - 1` minimum gaps fit between the insets, and never less
/// than one. Horizontal space left over after packing widens the gaps
/// evenly; the part that cannot be split evenly between the gaps is split
/// between the left and right effective insets. A single column is centered.
///
/// # Errors
///
/// Returns [`GridError::InvalidConfiguration`] if `config` fails
/// [`LayoutConfig::validate`].
///
/// # Examples
///
/// ```
/// use tessera_array_view::{
///     LayoutConfig, compute_geometry,
///     px::{Px, PxSize},
/// };
///
/// let config = LayoutConfig::default()
///     .item_size(PxSize::new(Px(100), Px(100)))
///     .minimum_column_gap(Px(10));
/// let geometry = compute_geometry(Px(350), &config, 100).unwrap();
/// assert_eq!(geometry.column_count, 3);
/// assert_eq!(geometry.row_count, 34);
/// assert_eq!(geometry.column_gap, Px(25));
/// ```
pub fn compute_geometry(
    viewport_width: Px,
    config: &LayoutConfig,
    item_count: usize,
) -> Result<GridGeometry> {
    config.validate()?;

    let item_size = config.item_size;
    let insets = config.content_insets;
    let min_gap = config.minimum_column_gap;

    let available = viewport_width
        .saturating_sub(insets.horizontal())
        .clamp_non_negative();
    let column_count = fit_column_count(available, item_size.width, min_gap);

    let packed = item_size
        .width
        .saturating_mul_count(column_count)
        .saturating_add(min_gap.saturating_mul_count(column_count - 1));
    let leftover = available.saturating_sub(packed).clamp_non_negative();
    let (column_gap, slack) = distribute_leftover(leftover, column_count, min_gap);

    let slack_left = slack / 2;
    let effective_insets = PxInsets {
        left: insets.left + slack_left,
        right: insets.right + (slack - slack_left),
        ..insets
    };

    let row_gap = match config.maximum_row_gap {
        Some(max_gap) => column_gap.min(max_gap),
        None => column_gap,
    };
    let row_count = row_count(item_count, column_count);
    let content_height = content_height(row_count, item_size.height, row_gap, &insets);

    Ok(GridGeometry {
        column_count,
        row_count,
        column_gap,
        row_gap,
        effective_insets,
        content_height,
        item_size,
        item_count,
    })
}

/// Returns the frame of the item at `index`.
///
/// # Errors
///
/// Returns [`GridError::IndexOutOfRange`] if `index >= geometry.item_count`.
pub fn rect_for_index(index: usize, geometry: &GridGeometry) -> Result<PxRect> {
    if index >= geometry.item_count {
        return Err(GridError::IndexOutOfRange {
            index,
            item_count: geometry.item_count,
        });
    }
    let row = geometry.row_of(index);
    let column = geometry.column_of(index);
    let x = geometry
        .effective_insets
        .left
        .saturating_add(geometry.column_pitch().saturating_mul_count(column));
    let y = geometry.row_top(row);
    Ok(PxRect::from_origin_size(x, y, geometry.item_size))
}

fn fit_column_count(available: Px, item_width: Px, min_gap: Px) -> usize {
    let available = i64::from(available.0);
    let pitch = i64::from(item_width.0) + i64::from(min_gap.0);
    let fitted = (available + i64::from(min_gap.0)) / pitch.max(1);
    usize::try_from(fitted).unwrap_or(0).max(1)
}

/// Splits leftover width into per-gap growth and edge slack.
fn distribute_leftover(leftover: Px, column_count: usize, min_gap: Px) -> (Px, Px) {
    if column_count <= 1 {
        return (min_gap, leftover);
    }
    let gaps = i32::try_from(column_count - 1).unwrap_or(i32::MAX);
    let extra = leftover / gaps;
    let slack = Px(leftover.0 % gaps);
    (min_gap.saturating_add(extra), slack)
}

fn row_count(item_count: usize, column_count: usize) -> usize {
    if item_count == 0 || column_count == 0 {
        0
    } else {
        item_count.div_ceil(column_count)
    }
}

fn content_height(row_count: usize, item_height: Px, row_gap: Px, insets: &PxInsets) -> Px {
    let rows = item_height
        .saturating_mul_count(row_count)
        .saturating_add(row_gap.saturating_mul_count(row_count.saturating_sub(1)));
    insets.vertical().saturating_add(rows)
}
