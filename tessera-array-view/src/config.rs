//! Layout configuration for an array view.

use derive_setters::Setters;

use crate::{
    error::{GridError, Result},
    px::{Px, PxInsets, PxSize},
};

const DEFAULT_ITEM_EXTENT: Px = Px(100);

/// Inputs to a layout pass.
///
/// The configuration is copied into each geometry computation, so edits made
/// through [`ArrayView`](crate::ArrayView) setters take effect on the next
/// layout pass. Values are not checked when set; [`LayoutConfig::validate`]
/// runs as part of every geometry computation.
///
/// # Examples
///
/// ```
/// use tessera_array_view::{
///     LayoutConfig,
///     px::{Px, PxInsets, PxSize},
/// };
///
/// let config = LayoutConfig::default()
///     .item_size(PxSize::new(Px(75), Px(75)))
///     .content_insets(PxInsets::uniform(Px(4)))
///     .minimum_column_gap(Px(4))
///     .maximum_row_gap(Px(8))
///     .preload_row_span(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Size of every item. Both dimensions must be positive.
    pub item_size: PxSize,
    /// Padding around the grid content.
    pub content_insets: PxInsets,
    /// Smallest allowed horizontal space between two columns.
    pub minimum_column_gap: Px,
    /// Upper bound for the vertical space between rows. `None` means
    /// unbounded, in which case the row gap equals the column gap.
    #[setters(strip_option)]
    pub maximum_row_gap: Option<Px>,
    /// Number of extra rows kept materialized above and below the viewport.
    pub preload_row_span: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            item_size: PxSize::new(DEFAULT_ITEM_EXTENT, DEFAULT_ITEM_EXTENT),
            content_insets: PxInsets::ZERO,
            minimum_column_gap: Px::ZERO,
            maximum_row_gap: None,
            preload_row_span: 0,
        }
    }
}

impl LayoutConfig {
    /// Removes the row gap bound so rows are spaced like columns.
    pub fn unbounded_row_gap(mut self) -> Self {
        self.maximum_row_gap = None;
        self
    }

    /// Checks every constraint a geometry pass relies on.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidConfiguration`] for a non-positive item
    /// dimension, a negative inset, or a negative gap.
    pub fn validate(&self) -> Result<()> {
        if self.item_size.width <= Px::ZERO || self.item_size.height <= Px::ZERO {
            return Err(GridError::invalid(format!(
                "item size must be positive, got {}x{}",
                self.item_size.width.0, self.item_size.height.0
            )));
        }
        if self.content_insets.has_negative_edge() {
            return Err(GridError::invalid(format!(
                "content insets must not be negative, got {:?}",
                self.content_insets
            )));
        }
        if self.minimum_column_gap < Px::ZERO {
            return Err(GridError::invalid(format!(
                "minimum column gap must not be negative, got {}",
                self.minimum_column_gap.0
            )));
        }
        if let Some(max_gap) = self.maximum_row_gap
            && max_gap < Px::ZERO
        {
            return Err(GridError::invalid(format!(
                "maximum row gap must not be negative, got {}",
                max_gap.0
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.maximum_row_gap, None);
        assert_eq!(config.preload_row_span, 0);
    }

    #[test]
    fn test_setters_chain() {
        let config = LayoutConfig::default()
            .minimum_column_gap(Px(6))
            .maximum_row_gap(Px(2))
            .preload_row_span(3);
        assert_eq!(config.minimum_column_gap, Px(6));
        assert_eq!(config.maximum_row_gap, Some(Px(2)));
        assert_eq!(config.preload_row_span, 3);
        assert_eq!(config.unbounded_row_gap().maximum_row_gap, None);
    }

    #[test]
    fn test_rejects_non_positive_item_size() {
        let config = LayoutConfig::default().item_size(PxSize::new(Px(0), Px(10)));
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidConfiguration { .. })
        ));

        let config = LayoutConfig::default().item_size(PxSize::new(Px(10), Px(-1)));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_gaps_and_insets() {
        let negative_gap = LayoutConfig::default().minimum_column_gap(Px(-1));
        assert!(negative_gap.validate().is_err());

        let negative_row_gap = LayoutConfig::default().maximum_row_gap(Px(-3));
        assert!(negative_row_gap.validate().is_err());

        let negative_inset =
            LayoutConfig::default().content_insets(PxInsets::new(Px(0), Px(0), Px(-2), Px(0)));
        assert!(negative_inset.validate().is_err());
    }

    #[test]
    fn test_zero_row_gap_bound_is_valid() {
        let config = LayoutConfig::default().maximum_row_gap(Px::ZERO);
        assert!(config.validate().is_ok());
    }
}
