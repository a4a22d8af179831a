//! A virtualized grid of fixed-size items.
//!
//! `tessera-array-view` lays out a large number of equally sized items in a
//! vertically scrolling grid while keeping only the items near the viewport
//! materialized. Views that scroll out are parked in a recycle pool and handed
//! back to the delegate for the items scrolling in.
//!
//! The crate draws nothing. A host provides three collaborators:
//!
//! - an [`ItemView`] implementation, the per-item handle being positioned;
//! - an [`ArrayViewDelegate`], which reports the item count and builds views;
//! - a [`ScrollViewport`], the scroll container. [`ScrollState`] is a
//!   ready-made in-memory one.
//!
//! # Example
//!
//! ```
//! use tessera_array_view::{
//!     ArrayView, ArrayViewDelegate, ItemView, LayoutConfig, ReuseQueue, ScrollState,
//!     px::{Px, PxPosition, PxRect, PxSize},
//! };
//!
//! #[derive(PartialEq)]
//! struct Cell {
//!     id: usize,
//!     frame: PxRect,
//! }
//!
//! impl ItemView for Cell {
//!     fn set_frame(&mut self, frame: PxRect) {
//!         self.frame = frame;
//!     }
//! }
//!
//! struct Cells(usize);
//!
//! impl ArrayViewDelegate for Cells {
//!     type View = Cell;
//!
//!     fn item_count(&self) -> usize {
//!         100
//!     }
//!
//!     fn view_for_item(&mut self, _index: usize, reuse: &mut ReuseQueue<'_, Cell>) -> Cell {
//!         reuse.dequeue().unwrap_or_else(|| {
//!             self.0 += 1;
//!             Cell {
//!                 id: self.0,
//!                 frame: PxRect::ZERO,
//!             }
//!         })
//!     }
//! }
//!
//! let config = LayoutConfig::default()
//!     .item_size(PxSize::new(Px(100), Px(100)))
//!     .minimum_column_gap(Px(10))
//!     .maximum_row_gap(Px(10));
//! let viewport = ScrollState::new(PxSize::new(Px(350), Px(320)));
//! let mut grid = ArrayView::with_config(Cells(0), viewport, config);
//! grid.reload()?;
//! assert_eq!(grid.visible_item_range(), Some(0..=8));
//!
//! grid.viewport_mut().scroll_to(PxPosition::new(Px(0), Px(220)));
//! grid.note_scroll_or_resize()?;
//! assert_eq!(grid.visible_item_range(), Some(6..=14));
//! // Views of the two rows that scrolled out were reused for the new ones.
//! assert_eq!(grid.stats().created, 9);
//! # Ok::<(), tessera_array_view::GridError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod array_view;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pool;
pub mod px;
pub mod scroll;
pub mod view;
pub mod visibility;

pub use crate::{
    array_view::{ArrayView, ArrayViewStats, LoadState},
    config::LayoutConfig,
    error::{GridError, Result},
    geometry::{GridGeometry, compute_geometry, rect_for_index},
    pool::{RecyclePool, ReuseQueue},
    scroll::ScrollState,
    view::{ArrayViewDelegate, ItemView, ScrollViewport},
    visibility::{item_range_for_rows, resolve_visible_row_range},
};
