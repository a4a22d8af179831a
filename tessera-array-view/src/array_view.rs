//! The grid controller: binds, positions and recycles item views.
//!
//! [`ArrayView`] owns the delegate, the scroll viewport, the current geometry,
//! the bound (visible) views and the recycle pool. Every entry point runs a
//! synchronous layout pass:
//!
//! 1. recompute [`GridGeometry`] if the viewport width, configuration or item
//!    count changed, and push the content size to the viewport;
//! 2. resolve the row range that needs views from the current scroll offset;
//! 3. release views whose index left the range into the pool;
//! 4. ask the delegate for views for indices that entered the range, letting
//!    it dequeue from the pool first;
//! 5. set the frame of every bound view.
//!
//! Releases always run before acquisitions, so views that scroll out during a
//! pass are available to the views scrolling in during the same pass.

use std::ops::RangeInclusive;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::{
    config::LayoutConfig,
    error::{GridError, Result},
    geometry::{GridGeometry, compute_geometry, rect_for_index},
    pool::{RecyclePool, ReuseQueue},
    px::{Px, PxInsets, PxRect, PxSize},
    view::{ArrayViewDelegate, ItemView, ScrollViewport},
    visibility::{item_range_for_rows, resolve_visible_row_range},
};


/// Lifecycle of an [`ArrayView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No item count has been loaded; nothing is laid out.
    Empty,
    /// The item count is known and views are bound for the visible range.
    Loaded,
}

/// Counters describing view materialization.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArrayViewStats {
    /// Views currently bound to an index.
    pub visible: usize,
    /// Views waiting in the recycle pool.
    pub pooled: usize,
    /// Views the delegate built without dequeuing from the pool.
    pub created: usize,
    /// Acquisitions satisfied from the pool.
    pub reused: usize,
    /// Highest `visible + pooled` observed after any layout pass.
    pub peak_materialized: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LayoutKey {
    viewport_width: Px,
    config: LayoutConfig,
    item_count: usize,
}

/// A virtualized grid of fixed-size items.
///
/// # Examples
///
/// ```
/// use tessera_array_view::{
///     ArrayView, ArrayViewDelegate, ItemView, LayoutConfig, ReuseQueue, ScrollState,
///     px::{Px, PxRect, PxSize},
/// };
///
/// #[derive(PartialEq)]
/// struct Tile {
///     serial: usize,
///     frame: PxRect,
/// }
///
/// impl ItemView for Tile {
///     fn set_frame(&mut self, frame: PxRect) {
///         self.frame = frame;
///     }
/// }
///
/// struct Photos {
///     built: usize,
/// }
///
/// impl ArrayViewDelegate for Photos {
///     type View = Tile;
///
///     fn item_count(&self) -> usize {
///         1_000
///     }
///
///     fn view_for_item(&mut self, _index: usize, reuse: &mut ReuseQueue<'_, Tile>) -> Tile {
///         reuse.dequeue().unwrap_or_else(|| {
///             self.built += 1;
///             Tile {
///                 serial: self.built,
///                 frame: PxRect::ZERO,
///             }
///         })
///     }
/// }
///
/// let viewport = ScrollState::new(PxSize::new(Px(320), Px(480)));
/// let config = LayoutConfig::default()
///     .item_size(PxSize::new(Px(75), Px(75)))
///     .minimum_column_gap(Px(4));
/// let mut grid = ArrayView::with_config(Photos { built: 0 }, viewport, config);
/// grid.reload().unwrap();
///
/// // 4 columns; rows 0..=5 reach into the 480 px viewport.
/// assert_eq!(grid.first_visible_item_index(), Some(0));
/// assert_eq!(grid.last_visible_item_index(), Some(23));
/// assert!(grid.view_for_item(100).is_none());
/// ```
pub struct ArrayView<D, S>
where
    D: ArrayViewDelegate,
{
    delegate: D,
    viewport: S,
    config: LayoutConfig,
    state: LoadState,
    item_count: usize,
    geometry: Option<(LayoutKey, GridGeometry)>,
    visible_range: Option<RangeInclusive<usize>>,
    visible: FxHashMap<usize, D::View>,
    pool: RecyclePool<D::View>,
    created: usize,
    reused: usize,
    peak_materialized: usize,
}

impl<D, S> ArrayView<D, S>
where
    D: ArrayViewDelegate,
    S: ScrollViewport,
{
    /// Creates an array view with the default [`LayoutConfig`].
    ///
    /// Nothing is laid out until [`reload`](Self::reload) is called.
    pub fn new(delegate: D, viewport: S) -> Self {
        Self::with_config(delegate, viewport, LayoutConfig::default())
    }

    /// Creates an array view with an explicit configuration.
    pub fn with_config(delegate: D, viewport: S, config: LayoutConfig) -> Self {
        Self {
            delegate,
            viewport,
            config,
            state: LoadState::Empty,
            item_count: 0,
            geometry: None,
            visible_range: None,
            visible: FxHashMap::default(),
            pool: RecyclePool::new(),
            created: 0,
            reused: 0,
            peak_materialized: 0,
        }
    }

    /// Reloads everything from the delegate, discarding pooled views.
    ///
    /// All bound views are released and the pool is cleared, so the grid
    /// passes through [`LoadState::Empty`] and every view of the new layout is
    /// freshly requested. Use this when the delegate may now return a
    /// different kind of view; [`reload_items`](Self::reload_items) keeps the
    /// pool for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidConfiguration`] if the current
    /// configuration cannot be laid out. The grid is then loaded but has no
    /// bound views until a valid configuration is set.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reload(&mut self) -> Result<()> {
        self.release_all();
        self.pool.clear();
        self.state = LoadState::Empty;
        self.geometry = None;
        debug!("Discarded pooled views for full reload");
        self.load()
    }

    /// Reloads the item count and rebinds every visible index, keeping the
    /// pooled views.
    ///
    /// Bound views are released into the pool first, so the rebinding pass can
    /// reuse them for whatever index they land on.
    ///
    /// # Errors
    ///
    /// Same as [`reload`](Self::reload).
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reload_items(&mut self) -> Result<()> {
        self.release_all();
        self.load()
    }

    /// Brings the bound views in line with the current scroll offset, viewport
    /// size and configuration.
    ///
    /// Call this whenever the viewport scrolled or resized, or after changing
    /// the configuration. Repeating the call with unchanged inputs leaves the
    /// bound views, the pool and every frame exactly as they were. Before the
    /// first reload it does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidConfiguration`] if the configuration cannot
    /// be laid out. The previously bound views are left untouched.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn note_scroll_or_resize(&mut self) -> Result<()> {
        self.layout_pass()
    }

    /// Returns the view bound to `index`, or `None` if it is not materialized.
    pub fn view_for_item(&self, index: usize) -> Option<&D::View> {
        self.visible.get(&index)
    }

    /// Mutable access to the view bound to `index`.
    ///
    /// Useful for asynchronous loaders that finish after the view was bound;
    /// `None` means the item scrolled away and the result is stale.
    pub fn view_for_item_mut(&mut self, index: usize) -> Option<&mut D::View> {
        self.visible.get_mut(&index)
    }

    /// Takes a view out of the recycle pool, or `None` if the pool is empty.
    pub fn dequeue_reusable_item(&mut self) -> Option<D::View> {
        self.pool.dequeue()
    }

    /// Returns the frame of the item at `index` in content coordinates, as
    /// laid out by the last layout pass.
    ///
    /// Configuration or viewport changes not yet applied by
    /// [`note_scroll_or_resize`](Self::note_scroll_or_resize) are not
    /// reflected, so the result always matches the frame of a bound view.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `index` is not below the item
    /// count of the last layout pass. Before any successful pass that count is
    /// zero.
    pub fn rect_for_item(&self, index: usize) -> Result<PxRect> {
        match &self.geometry {
            Some((_, geometry)) => rect_for_index(index, geometry),
            None => Err(GridError::IndexOutOfRange {
                index,
                item_count: 0,
            }),
        }
    }

    /// Item count loaded by the last reload.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Lowest index with a bound view, preload rows included.
    pub fn first_visible_item_index(&self) -> Option<usize> {
        self.visible_range.as_ref().map(|range| *range.start())
    }

    /// Highest index with a bound view, preload rows included.
    pub fn last_visible_item_index(&self) -> Option<usize> {
        self.visible_range.as_ref().map(|range| *range.end())
    }

    /// Inclusive range of indices with a bound view.
    pub fn visible_item_range(&self) -> Option<RangeInclusive<usize>> {
        self.visible_range.clone()
    }

    /// Bound views in index order.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &D::View)> + '_ {
        self.visible_range
            .clone()
            .into_iter()
            .flatten()
            .filter_map(move |index| self.visible.get(&index).map(|view| (index, view)))
    }

    /// Views currently waiting in the recycle pool.
    pub fn pooled_items(&self) -> impl Iterator<Item = &D::View> + '_ {
        self.pool.iter()
    }

    /// Geometry of the last layout pass.
    pub fn geometry(&self) -> Option<&GridGeometry> {
        self.geometry.as_ref().map(|(_, geometry)| geometry)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Materialization counters.
    pub fn stats(&self) -> ArrayViewStats {
        ArrayViewStats {
            visible: self.visible.len(),
            pooled: self.pool.len(),
            created: self.created,
            reused: self.reused,
            peak_materialized: self.peak_materialized,
        }
    }

    /// The scroll viewport.
    pub fn viewport(&self) -> &S {
        &self.viewport
    }

    /// Mutable access to the scroll viewport. Call
    /// [`note_scroll_or_resize`](Self::note_scroll_or_resize) after scrolling
    /// or resizing it.
    pub fn viewport_mut(&mut self) -> &mut S {
        &mut self.viewport
    }

    /// The delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Mutable access to the delegate. Changes to its item count are picked up
    /// by the next reload.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Current layout configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replaces the whole layout configuration.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// Sets the padding around the grid content.
    pub fn set_content_insets(&mut self, insets: PxInsets) {
        self.config.content_insets = insets;
    }

    /// Sets the size of every item.
    pub fn set_item_size(&mut self, size: PxSize) {
        self.config.item_size = size;
    }

    /// Sets the smallest allowed gap between columns.
    pub fn set_minimum_column_gap(&mut self, gap: Px) {
        self.config.minimum_column_gap = gap;
    }

    /// Sets the row gap bound; `None` makes it unbounded.
    pub fn set_maximum_row_gap(&mut self, gap: Option<Px>) {
        self.config.maximum_row_gap = gap;
    }

    /// Sets how many rows beyond the viewport keep bound views.
    pub fn set_preload_row_span(&mut self, rows: usize) {
        self.config.preload_row_span = rows;
    }

    /// Former name of the preload setting. Has no effect.
    #[deprecated(note = "use `set_preload_row_span`")]
    pub fn set_preload_buffer(&mut self, rows: usize) {
        warn!(
            rows,
            "set_preload_buffer is deprecated and ignored; use set_preload_row_span"
        );
    }

    fn load(&mut self) -> Result<()> {
        self.item_count = self.delegate.item_count();
        self.state = LoadState::Loaded;
        debug!(item_count = self.item_count, "Loaded item count from delegate");
        self.layout_pass()
    }

    fn layout_pass(&mut self) -> Result<()> {
        if self.state == LoadState::Empty {
            return Ok(());
        }
        let bounds = self.viewport.bounds_size();
        if bounds.width <= Px::ZERO {
            warn!(width = bounds.width.0, "Laying out grid in a viewport without width");
        }
        let geometry = self.refresh_geometry()?;
        // Read the offset after the content size update; the viewport may
        // have clamped it.
        let offset = self.viewport.content_offset();
        let rows = resolve_visible_row_range(
            offset.y,
            bounds.height,
            &geometry,
            self.config.preload_row_span,
        );
        let items = rows
            .as_ref()
            .map(|rows| item_range_for_rows(rows, &geometry));
        self.apply_visible_range(items, &geometry);
        Ok(())
    }

    fn layout_key(&self) -> LayoutKey {
        LayoutKey {
            viewport_width: self.viewport.bounds_size().width,
            config: self.config,
            item_count: self.item_count,
        }
    }

    fn refresh_geometry(&mut self) -> Result<GridGeometry> {
        let key = self.layout_key();
        if let Some((cached_key, geometry)) = &self.geometry
            && *cached_key == key
        {
            return Ok(*geometry);
        }
        let geometry = compute_geometry(key.viewport_width, &key.config, key.item_count)?;
        debug!(
            columns = geometry.column_count,
            rows = geometry.row_count,
            column_gap = geometry.column_gap.0,
            row_gap = geometry.row_gap.0,
            content_height = geometry.content_height.0,
            "Recomputed grid geometry"
        );
        self.viewport
            .set_content_size(geometry.content_size(key.viewport_width));
        self.geometry = Some((key, geometry));
        Ok(geometry)
    }

    fn apply_visible_range(
        &mut self,
        range: Option<RangeInclusive<usize>>,
        geometry: &GridGeometry,
    ) {
        let in_range = |index: &usize| range.as_ref().is_some_and(|r| r.contains(index));

        let leaving: SmallVec<[usize; 32]> = self
            .visible
            .keys()
            .copied()
            .filter(|index| !in_range(index))
            .collect();
        for index in &leaving {
            if let Some(view) = self.visible.remove(index) {
                self.recycle(view);
            }
        }

        let mut entered = 0usize;
        if let Some(range) = &range {
            for index in range.clone() {
                if self.visible.contains_key(&index) {
                    continue;
                }
                let mut reuse = ReuseQueue::new(&mut self.pool);
                let view = self.delegate.view_for_item(index, &mut reuse);
                if reuse.dequeued() > 0 {
                    self.reused += 1;
                } else {
                    self.created += 1;
                }
                self.visible.insert(index, view);
                entered += 1;
            }
        }

        for (index, view) in self.visible.iter_mut() {
            if let Ok(frame) = rect_for_index(*index, geometry) {
                view.set_frame(frame);
            }
        }

        if !leaving.is_empty() || entered > 0 {
            trace!(
                released = leaving.len(),
                acquired = entered,
                visible = self.visible.len(),
                pooled = self.pool.len(),
                "Updated visible items"
            );
        }
        self.visible_range = range;
        self.peak_materialized = self
            .peak_materialized
            .max(self.visible.len() + self.pool.len());
    }

    fn release_all(&mut self) {
        let bound = std::mem::take(&mut self.visible);
        let released = bound.len();
        for (_, view) in bound {
            self.recycle(view);
        }
        self.visible_range = None;
        if released > 0 {
            trace!(released, "Released every bound view");
        }
    }

    fn recycle(&mut self, mut view: D::View) {
        view.prepare_for_reuse();
        let pooled = self.pool.recycle(view);
        debug_assert!(
            pooled,
            "released view compares equal to a pooled one; ItemView equality must be instance identity"
        );
        if !pooled {
            warn!("Dropped a released view that compares equal to a pooled one");
        }
    }
}
