//! Collaborator contracts consumed by [`ArrayView`](crate::ArrayView).
//!
//! The engine never renders anything itself. It talks to three collaborators:
//!
//! - an [`ItemView`], the opaque per-item handle it binds, positions and
//!   recycles;
//! - an [`ArrayViewDelegate`], which reports the item count and produces
//!   views;
//! - a [`ScrollViewport`], the scroll container reporting the offset and
//!   receiving the content size.

use crate::{
    pool::ReuseQueue,
    px::{PxPosition, PxRect, PxSize},
};

/// A reusable view that displays one item at a time.
///
/// `PartialEq` must express instance identity; the recycle pool uses it to
/// ignore a view that is recycled twice. Two distinct views that compare equal
/// break this: the second one released is dropped instead of pooled, and debug
/// builds panic.
pub trait ItemView: PartialEq {
    /// Moves the view to `frame`, in content coordinates.
    fn set_frame(&mut self, frame: PxRect);

    /// Called when the view is unbound and moved into the recycle pool.
    ///
    /// Any asynchronous work started to populate the view for its previous
    /// index is stale from this point on. The engine does not touch a pooled
    /// view again until it is dequeued and rebound.
    fn prepare_for_reuse(&mut self) {}
}

/// Supplies the item count and materializes item views.
pub trait ArrayViewDelegate {
    /// View type produced for every item.
    type View: ItemView;

    /// Number of items. Queried on every reload.
    fn item_count(&self) -> usize;

    /// Returns a view configured to display the item at `index`.
    ///
    /// Implementations should try `reuse.dequeue()` first and only build a new
    /// view when the pool is empty. The returned view is bound to `index` until
    /// the engine releases it.
    fn view_for_item(
        &mut self,
        index: usize,
        reuse: &mut ReuseQueue<'_, Self::View>,
    ) -> Self::View;
}

/// The scroll container hosting the grid.
///
/// Gesture handling and scroll physics live behind this trait; the engine only
/// reads the visible bounds and writes the content size.
pub trait ScrollViewport {
    /// Size of the visible area.
    fn bounds_size(&self) -> PxSize;

    /// Current scroll offset of the visible area's top-left corner, in content
    /// coordinates.
    fn content_offset(&self) -> PxPosition;

    /// Updates the total scrollable content size.
    fn set_content_size(&mut self, size: PxSize);
}
