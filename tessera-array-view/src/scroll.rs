//! An in-memory scroll container.
//!
//! [`ScrollState`] implements [`ScrollViewport`] with nothing more than a
//! visible size, a content size and an offset clamped between them. Hosts
//! that own a real scroll container implement the trait on it directly;
//! `ScrollState` serves headless hosts and tests.

use crate::{
    px::{Px, PxPosition, PxSize},
    view::ScrollViewport,
};

/// Scroll position and extents of a viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    offset: PxPosition,
    viewport_size: PxSize,
    content_size: PxSize,
}

impl ScrollState {
    /// Creates a scroll state at offset zero with empty content.
    pub fn new(viewport_size: PxSize) -> Self {
        Self {
            offset: PxPosition::ZERO,
            viewport_size,
            content_size: PxSize::ZERO,
        }
    }

    /// Current offset.
    pub fn offset(&self) -> PxPosition {
        self.offset
    }

    /// Visible size.
    pub fn viewport_size(&self) -> PxSize {
        self.viewport_size
    }

    /// Last content size reported by the grid.
    pub fn content_size(&self) -> PxSize {
        self.content_size
    }

    /// Largest offset that still keeps the viewport within the content.
    pub fn max_offset(&self) -> PxPosition {
        PxPosition::new(
            self.content_size
                .width
                .saturating_sub(self.viewport_size.width)
                .clamp_non_negative(),
            self.content_size
                .height
                .saturating_sub(self.viewport_size.height)
                .clamp_non_negative(),
        )
    }

    /// Scrolls to `offset`, clamped to the content bounds.
    pub fn scroll_to(&mut self, offset: PxPosition) {
        self.offset = offset;
        self.clamp_offset_to_bounds();
    }

    /// Scrolls by `delta`, clamped to the content bounds.
    pub fn scroll_by(&mut self, delta: PxPosition) {
        self.scroll_to(self.offset.offset(delta.x, delta.y));
    }

    /// Sets the offset without clamping, as a container does while it
    /// rubber-bands past either end.
    pub fn overscroll_to(&mut self, offset: PxPosition) {
        self.offset = offset;
    }

    /// Resizes the visible area and re-clamps the offset.
    pub fn set_viewport_size(&mut self, viewport_size: PxSize) {
        self.viewport_size = viewport_size;
        self.clamp_offset_to_bounds();
    }

    fn clamp_offset_to_bounds(&mut self) {
        let max = self.max_offset();
        self.offset.x = self.offset.x.clamp(Px::ZERO, max.x);
        self.offset.y = self.offset.y.clamp(Px::ZERO, max.y);
    }
}

impl ScrollViewport for ScrollState {
    fn bounds_size(&self) -> PxSize {
        self.viewport_size
    }

    fn content_offset(&self) -> PxPosition {
        self.offset
    }

    fn set_content_size(&mut self, size: PxSize) {
        self.content_size = size;
        self.clamp_offset_to_bounds();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ScrollState {
        let mut state = ScrollState::new(PxSize::new(Px(400), Px(300)));
        state.set_content_size(PxSize::new(Px(400), Px(1000)));
        state
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = state();
        assert_eq!(state.max_offset(), PxPosition::new(Px(0), Px(700)));

        state.scroll_to(PxPosition::new(Px(0), Px(900)));
        assert_eq!(state.offset().y, Px(700));

        state.scroll_by(PxPosition::new(Px(0), Px(-1000)));
        assert_eq!(state.offset().y, Px(0));
    }

    #[test]
    fn test_huge_scroll_delta_clamps_instead_of_overflowing() {
        let mut state = state();
        state.scroll_to(PxPosition::new(Px(0), Px(600)));
        state.scroll_by(PxPosition::new(Px(0), Px(i32::MAX)));
        assert_eq!(state.offset().y, Px(700));
        state.scroll_by(PxPosition::new(Px(i32::MIN), Px(i32::MIN)));
        assert_eq!(state.offset(), PxPosition::ZERO);
    }

    #[test]
    fn test_shrinking_content_pulls_offset_back() {
        let mut state = state();
        state.scroll_to(PxPosition::new(Px(0), Px(600)));
        state.set_content_size(PxSize::new(Px(400), Px(500)));
        assert_eq!(state.offset().y, Px(200));
    }

    #[test]
    fn test_content_smaller_than_viewport_does_not_scroll() {
        let mut state = ScrollState::new(PxSize::new(Px(400), Px(300)));
        state.set_content_size(PxSize::new(Px(400), Px(100)));
        state.scroll_by(PxPosition::new(Px(0), Px(50)));
        assert_eq!(state.offset(), PxPosition::ZERO);
        assert_eq!(state.max_offset(), PxPosition::ZERO);
    }

    #[test]
    fn test_overscroll_is_not_clamped() {
        let mut state = state();
        state.overscroll_to(PxPosition::new(Px(0), Px(-40)));
        assert_eq!(state.content_offset().y, Px(-40));
    }
}
