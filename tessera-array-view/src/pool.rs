//! Pool of detached item views waiting to be bound to a new index.

use smallvec::SmallVec;

/// Unbound, reusable views.
///
/// Views carry no index affinity; any pooled view may be handed out for any
/// index. Identity is decided by the view's `PartialEq`, so handle types
/// should compare by instance (pointer equality) rather than by content.
///
/// # Examples
///
/// ```
/// use tessera_array_view::RecyclePool;
///
/// let mut pool = RecyclePool::new();
/// assert_eq!(pool.dequeue(), None::<u32>);
/// assert!(pool.recycle(7));
/// assert_eq!(pool.dequeue(), Some(7));
/// ```
#[derive(Debug)]
pub struct RecyclePool<V> {
    views: SmallVec<[V; 8]>,
}

impl<V> Default for RecyclePool<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RecyclePool<V> {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self {
            views: SmallVec::new(),
        }
    }

    /// Removes and returns a pooled view, or `None` if the pool is empty.
    ///
    /// No particular instance is promised. The current implementation hands
    /// back the most recently recycled view.
    pub fn dequeue(&mut self) -> Option<V> {
        self.views.pop()
    }

    /// Drops every pooled view. Calling this on an empty pool does nothing.
    pub fn clear(&mut self) {
        self.views.clear();
    }

    /// Number of pooled views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns `true` if no view is pooled.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Iterates over the pooled views.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.views.iter()
    }
}

impl<V: PartialEq> RecyclePool<V> {
    /// Adds an unbound view to the pool.
    ///
    /// Returns `false`, leaving the pool unchanged, if the same instance is
    /// already pooled.
    pub fn recycle(&mut self, view: V) -> bool {
        if self.views.contains(&view) {
            return false;
        }
        self.views.push(view);
        true
    }
}

/// Dequeue-only access to a [`RecyclePool`].
///
/// Handed to [`ArrayViewDelegate::view_for_item`](crate::ArrayViewDelegate)
/// so the delegate can reuse a pooled view before building a new one.
pub struct ReuseQueue<'a, V> {
    pool: &'a mut RecyclePool<V>,
    dequeued: usize,
}

impl<'a, V> ReuseQueue<'a, V> {
    pub(crate) fn new(pool: &'a mut RecyclePool<V>) -> Self {
        Self { pool, dequeued: 0 }
    }

    /// Takes a reusable view, or `None` if none is pooled.
    pub fn dequeue(&mut self) -> Option<V> {
        let view = self.pool.dequeue();
        if view.is_some() {
            self.dequeued += 1;
        }
        view
    }

    /// Number of pooled views still available.
    pub fn available(&self) -> usize {
        self.pool.len()
    }

    pub(crate) fn dequeued(&self) -> usize {
        self.dequeued
    }
}
