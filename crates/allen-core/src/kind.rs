// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Boundary Kinds
//!
//! Each side of an interval carries a [`BoundaryKind`]: `Closed` sides include
//! their value, `Open` sides exclude it, and `Unbounded` sides sit at an
//! infinity. A [`BoundaryPair`] combines the kinds of both sides, and
//! [`BoundaryState`] classifies an interval by which of its sides are finite.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The inclusivity of one side of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BoundaryKind {
    /// The boundary value is excluded.
    Open,
    /// The boundary value is included.
    Closed,
    /// The side extends to infinity and never holds a finite value.
    Unbounded,
}

impl BoundaryKind {
    /// Returns `true` if the boundary value itself belongs to the interval.
    ///
    /// Only `Closed` is inclusive; an `Unbounded` side has no value to include.
    #[inline]
    pub const fn is_inclusive(self) -> bool {
        matches!(self, Self::Closed)
    }

    #[inline]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Swaps `Open` and `Closed`; `Unbounded` is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::kind::BoundaryKind;
    ///
    /// assert_eq!(BoundaryKind::Open.flip(), BoundaryKind::Closed);
    /// assert_eq!(BoundaryKind::Unbounded.flip(), BoundaryKind::Unbounded);
    /// ```
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
            Self::Unbounded => Self::Unbounded,
        }
    }
}

impl Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Closed => write!(f, "Closed"),
            Self::Unbounded => write!(f, "Unbounded"),
        }
    }
}

/// The kinds of both sides of an interval.
///
/// Four pairs are finite shapes (`CLOSED`, `CLOSED_OPEN`, `OPEN_CLOSED`,
/// `OPEN`); allowing `Unbounded` per side gives nine in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundaryPair {
    pub start: BoundaryKind,
    pub end: BoundaryKind,
}

impl BoundaryPair {
    /// `[a, b]`
    pub const CLOSED: Self = Self::new(BoundaryKind::Closed, BoundaryKind::Closed);
    /// `[a, b)`
    pub const CLOSED_OPEN: Self = Self::new(BoundaryKind::Closed, BoundaryKind::Open);
    /// `(a, b]`
    pub const OPEN_CLOSED: Self = Self::new(BoundaryKind::Open, BoundaryKind::Closed);
    /// `(a, b)`
    pub const OPEN: Self = Self::new(BoundaryKind::Open, BoundaryKind::Open);
    /// `(-∞, +∞)`
    pub const UNBOUNDED: Self = Self::new(BoundaryKind::Unbounded, BoundaryKind::Unbounded);

    #[inline]
    pub const fn new(start: BoundaryKind, end: BoundaryKind) -> Self {
        Self { start, end }
    }

    /// Returns `true` if neither side is `Unbounded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::kind::{BoundaryKind, BoundaryPair};
    ///
    /// assert!(BoundaryPair::CLOSED_OPEN.is_finite_shape());
    /// assert!(!BoundaryPair::new(BoundaryKind::Unbounded, BoundaryKind::Open).is_finite_shape());
    /// ```
    #[inline]
    pub const fn is_finite_shape(self) -> bool {
        !self.start.is_unbounded() && !self.end.is_unbounded()
    }
}

impl Display for BoundaryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = match self.start {
            BoundaryKind::Closed => "[",
            BoundaryKind::Open | BoundaryKind::Unbounded => "(",
        };
        let close = match self.end {
            BoundaryKind::Closed => "]",
            BoundaryKind::Open | BoundaryKind::Unbounded => ")",
        };
        write!(f, "{open}{close}")
    }
}

/// Which sides of an interval are finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryState {
    /// Both sides are finite.
    Bounded,
    /// Finite start, unbounded end.
    LeftBounded,
    /// Unbounded start, finite end.
    RightBounded,
    /// Both sides are unbounded.
    Unbounded,
}

impl BoundaryState {
    /// Derives the state from the kinds of both sides.
    #[inline]
    pub const fn from_pair(pair: BoundaryPair) -> Self {
        match (pair.start.is_unbounded(), pair.end.is_unbounded()) {
            (false, false) => Self::Bounded,
            (false, true) => Self::LeftBounded,
            (true, false) => Self::RightBounded,
            (true, true) => Self::Unbounded,
        }
    }

    #[inline]
    pub const fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded)
    }
}
