//! Physical pixel units used by the grid layout engine.
//!
//! All grid geometry is computed in whole physical pixels. Integer math keeps
//! item rects exact, so two neighbouring tiles never overlap because of
//! rounding, and leftover space can be distributed deterministically.
//!
//! # Key Types
//!
//! - [`Px`] - a single coordinate or length, negative values allowed (a
//!   scroll container may report a negative offset while overscrolling)
//! - [`PxPosition`] - a point, used for scroll offsets
//! - [`PxSize`] - a width/height pair, used for item and content sizes
//! - [`PxRect`] - the frame assigned to an item view
//! - [`PxInsets`] - padding around the grid content
//!
//! # Example
//!
//! ```
//! use tessera_array_view::px::{Px, PxRect, PxSize};
//!
//! let item = PxSize::new(Px(100), Px(80));
//! let frame = PxRect::from_origin_size(Px(10), Px(20), item);
//! assert_eq!(frame.bottom(), Px(100));
//! ```

use std::ops::{Add, Div, Sub};

/// A length or coordinate in physical pixels.
///
/// Arithmetic operators behave like plain `i32` arithmetic; the `saturating_*` helpers clamp to
/// the `i32` range and are what the layout code uses for anything that scales
/// with the item count.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// The largest representable length.
    pub const MAX: Self = Self(i32::MAX);

    /// Converts an `i64` into `Px`, clamping to the `i32` range.
    pub fn saturating_from_i64(value: i64) -> Self {
        if value > i64::from(i32::MAX) {
            Px(i32::MAX)
        } else if value < i64::from(i32::MIN) {
            Px(i32::MIN)
        } else {
            Px(value as i32)
        }
    }

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }

    /// Multiplies by a count, saturating instead of overflowing.
    ///
    /// Row and column offsets are `pitch * index`, and the index can be large
    /// for long grids.
    ///
    /// ```
    /// use tessera_array_view::px::Px;
    ///
    /// assert_eq!(Px(110).saturating_mul_count(3), Px(330));
    /// assert_eq!(Px(i32::MAX).saturating_mul_count(2), Px::MAX);
    /// ```
    pub fn saturating_mul_count(self, count: usize) -> Self {
        if count == 0 {
            return Px::ZERO;
        }
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Px::saturating_from_i64(i64::from(self.0).saturating_mul(count))
    }

    /// Returns the larger of `self` and zero.
    pub fn clamp_non_negative(self) -> Self {
        self.max(Px::ZERO)
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Div<i32> for Px {
    type Output = Px;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

/// A point in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxPosition {
    /// Horizontal coordinate.
    pub x: Px,
    /// Vertical coordinate.
    pub y: Px,
}

impl PxPosition {
    /// The origin.
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `dx`, `dy`, saturating at the `i32`
    /// range.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// A width/height pair in physical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxSize {
    /// Width.
    pub width: Px,
    /// Height.
    pub height: Px,
}

impl PxSize {
    /// Zero by zero.
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxRect {
    /// Left edge.
    pub x: Px,
    /// Top edge.
    pub y: Px,
    /// Width.
    pub width: Px,
    /// Height.
    pub height: Px,
}

impl PxRect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a rectangle from its origin and extent.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from an origin and a [`PxSize`].
    pub const fn from_origin_size(x: Px, y: Px, size: PxSize) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> Px {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> Px {
        self.y.saturating_add(self.height)
    }

    /// Returns the rectangle's size.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }

    /// Returns `true` if the two rectangles share any interior area.
    ///
    /// Touching edges do not count as an intersection.
    ///
    /// ```
    /// use tessera_array_view::px::{Px, PxRect};
    ///
    /// let a = PxRect::new(Px(0), Px(0), Px(100), Px(100));
    /// let b = PxRect::new(Px(100), Px(0), Px(100), Px(100));
    /// let c = PxRect::new(Px(50), Px(50), Px(100), Px(100));
    /// assert!(!a.intersects(&b));
    /// assert!(a.intersects(&c));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Padding applied around the grid content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxInsets {
    /// Space above the first row.
    pub top: Px,
    /// Space left of the first column.
    pub left: Px,
    /// Space below the last row.
    pub bottom: Px,
    /// Space right of the last column.
    pub right: Px,
}

impl PxInsets {
    /// No padding.
    pub const ZERO: Self = Self {
        top: Px::ZERO,
        left: Px::ZERO,
        bottom: Px::ZERO,
        right: Px::ZERO,
    };

    /// Creates insets from the four edges, in top/left/bottom/right order.
    pub const fn new(top: Px, left: Px, bottom: Px, right: Px) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same padding on every edge.
    pub const fn uniform(value: Px) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of the left and right edges.
    pub fn horizontal(&self) -> Px {
        self.left.saturating_add(self.right)
    }

    /// Sum of the top and bottom edges.
    pub fn vertical(&self) -> Px {
        self.top.saturating_add(self.bottom)
    }

    /// Returns `true` if any edge is negative.
    pub fn has_negative_edge(&self) -> bool {
        self.top < Px::ZERO
            || self.left < Px::ZERO
            || self.bottom < Px::ZERO
            || self.right < Px::ZERO
    }
}
