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

//! # Intervals
//!
//! [`Interval`] is the single interval representation of the crate. Each
//! side carries a [`BoundaryValue`] and a [`BoundaryKind`], so open, closed,
//! half-open and unbounded intervals share one type and one set of
//! comparison rules.
//!
//! Construction is validated. The invariants every `Interval` upholds are:
//!
//! - a side is `Unbounded` exactly when its value is infinite,
//! - the start is never `+∞` and the end is never `-∞`,
//! - finite values are orderable (no `NaN`),
//! - `Undefined` appears on both sides or on neither; both sides `Undefined`
//!   is the canonical empty interval.

use crate::{
    bound::BoundaryValue,
    err::IntervalError,
    kind::{BoundaryKind, BoundaryPair, BoundaryState},
};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
};
use tracing::debug;

/// An interval over an ordered scalar `T` with independent boundary kinds.
///
/// An interval is empty when it is the canonical empty interval, when its
/// start lies after its end, or when start and end coincide and at least one
/// side is open. All empty intervals compare equal.
///
/// # Examples
///
/// ```
/// use allen_core::interval::Interval;
///
/// let a = Interval::closed_open(1, 5);
/// assert!(a.contains(1));
/// assert!(!a.contains(5));
/// assert_eq!(a.to_string(), "[1, 5)");
///
/// assert_eq!(Interval::<i32>::at_most(3).to_string(), "(-∞, 3]");
/// assert_eq!(Interval::open(2, 2), Interval::empty());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(
    try_from = "IntervalParts<T>",
    bound(deserialize = "T: Deserialize<'de> + PartialOrd + Copy")
)]
pub struct Interval<T> {
    start: BoundaryValue<T>,
    end: BoundaryValue<T>,
    start_kind: BoundaryKind,
    end_kind: BoundaryKind,
}

/// Unvalidated wire form of an [`Interval`]; deserialization goes through
/// [`Interval::from_bounds`].
#[derive(Deserialize)]
struct IntervalParts<T> {
    start: BoundaryValue<T>,
    end: BoundaryValue<T>,
    start_kind: BoundaryKind,
    end_kind: BoundaryKind,
}

impl<T: PartialOrd + Copy> TryFrom<IntervalParts<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(parts: IntervalParts<T>) -> Result<Self, Self::Error> {
        Interval::from_bounds(parts.start, parts.end, parts.start_kind, parts.end_kind)
    }
}

#[inline]
fn reject(reason: &'static str) -> IntervalError {
    debug!(reason, "rejected interval construction");
    IntervalError::invalid_argument("Interval::from_bounds", reason)
}

impl<T> Interval<T> {
    /// The canonical empty interval, with `Undefined` on both sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    ///
    /// let e = Interval::<f64>::empty();
    /// assert!(e.is_empty());
    /// assert_eq!(e.to_string(), "∅");
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self {
            start: BoundaryValue::Undefined,
            end: BoundaryValue::Undefined,
            start_kind: BoundaryKind::Open,
            end_kind: BoundaryKind::Open,
        }
    }

    /// The interval `(-∞, +∞)` covering every value of `T`.
    #[inline]
    pub const fn unbounded() -> Self {
        Self {
            start: BoundaryValue::NegativeInfinity,
            end: BoundaryValue::PositiveInfinity,
            start_kind: BoundaryKind::Unbounded,
            end_kind: BoundaryKind::Unbounded,
        }
    }

    #[inline]
    pub const fn start_kind(&self) -> BoundaryKind {
        self.start_kind
    }

    #[inline]
    pub const fn end_kind(&self) -> BoundaryKind {
        self.end_kind
    }

    /// Returns the kinds of both sides.
    #[inline]
    pub const fn kinds(&self) -> BoundaryPair {
        BoundaryPair::new(self.start_kind, self.end_kind)
    }

    /// Classifies which sides are finite. The canonical empty interval is `Bounded`.
    #[inline]
    pub const fn state(&self) -> BoundaryState {
        BoundaryState::from_pair(self.kinds())
    }

    #[inline]
    pub const fn is_bounded(&self) -> bool {
        self.state().is_bounded()
    }

    /// Returns `true` for the interval with `Undefined` on both sides.
    ///
    /// Other empty intervals, such as `(3, 3)`, are empty but not canonical.
    #[inline]
    pub const fn is_canonical_empty(&self) -> bool {
        self.start.is_undefined() && self.end.is_undefined()
    }

    /// Internal constructor for results whose invariants are already known to hold.
    #[inline]
    pub(crate) const fn from_parts_unchecked(
        start: BoundaryValue<T>,
        end: BoundaryValue<T>,
        start_kind: BoundaryKind,
        end_kind: BoundaryKind,
    ) -> Self {
        Self {
            start,
            end,
            start_kind,
            end_kind,
        }
    }
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Creates an interval between two finite values.
    ///
    /// `start > end` is accepted and yields an empty interval.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidArgument`] if either kind is
    /// `Unbounded` or either value is not comparable with itself (`NaN`).
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    /// use allen_core::kind::BoundaryKind;
    ///
    /// let a = Interval::new(1, 5, BoundaryKind::Closed, BoundaryKind::Open).unwrap();
    /// assert_eq!(a, Interval::closed_open(1, 5));
    ///
    /// assert!(Interval::new(1, 5, BoundaryKind::Unbounded, BoundaryKind::Open).is_err());
    /// assert!(Interval::new(f64::NAN, 5.0, BoundaryKind::Closed, BoundaryKind::Open).is_err());
    /// ```
    #[inline]
    pub fn new(
        start: T,
        end: T,
        start_kind: BoundaryKind,
        end_kind: BoundaryKind,
    ) -> Result<Self, IntervalError> {
        Self::from_bounds(
            BoundaryValue::Finite(start),
            BoundaryValue::Finite(end),
            start_kind,
            end_kind,
        )
    }

    /// Creates an interval from boundary values that may be infinite.
    ///
    /// An infinite value on an `Open` or `Closed` side is normalised to
    /// `Unbounded`. `Undefined` on both sides yields the canonical empty
    /// interval.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidArgument`] if
    ///
    /// - an `Unbounded` kind is paired with a finite value,
    /// - the start is `+∞` or the end is `-∞`,
    /// - a finite value is not comparable with itself (`NaN`),
    /// - exactly one side is `Undefined`.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::bound::BoundaryValue;
    /// use allen_core::interval::Interval;
    /// use allen_core::kind::BoundaryKind;
    ///
    /// let a = Interval::from_bounds(
    ///     BoundaryValue::NegativeInfinity,
    ///     BoundaryValue::Finite(3),
    ///     BoundaryKind::Closed,
    ///     BoundaryKind::Closed,
    /// )
    /// .unwrap();
    /// assert_eq!(a.start_kind(), BoundaryKind::Unbounded);
    /// assert_eq!(a, Interval::at_most(3));
    /// ```
    pub fn from_bounds(
        start: BoundaryValue<T>,
        end: BoundaryValue<T>,
        start_kind: BoundaryKind,
        end_kind: BoundaryKind,
    ) -> Result<Self, IntervalError> {
        match (start.is_undefined(), end.is_undefined()) {
            (true, true) => return Ok(Self::empty()),
            (true, false) | (false, true) => {
                return Err(reject("exactly one boundary is undefined"));
            }
            (false, false) => {}
        }
        if !start.is_orderable() || !end.is_orderable() {
            return Err(reject("boundary value is not comparable with itself"));
        }
        if matches!(start, BoundaryValue::PositiveInfinity) {
            return Err(reject("start cannot be positive infinity"));
        }
        if matches!(end, BoundaryValue::NegativeInfinity) {
            return Err(reject("end cannot be negative infinity"));
        }

        let start_kind = Self::normalize_kind(&start, start_kind)?;
        let end_kind = Self::normalize_kind(&end, end_kind)?;

        Ok(Self {
            start,
            end,
            start_kind,
            end_kind,
        })
    }

    #[inline]
    fn normalize_kind(
        value: &BoundaryValue<T>,
        kind: BoundaryKind,
    ) -> Result<BoundaryKind, IntervalError> {
        match (value.is_infinite(), kind) {
            (true, _) => Ok(BoundaryKind::Unbounded),
            (false, BoundaryKind::Unbounded) => {
                Err(reject("unbounded kind requires an infinite value"))
            }
            (false, kind) => Ok(kind),
        }
    }

    #[inline]
    fn finite_or_panic(start: T, end: T, kinds: BoundaryPair, op: &'static str) -> Self {
        match Self::new(start, end, kinds.start, kinds.end) {
            Ok(i) => i,
            Err(e) => panic!("{op}: {e}"),
        }
    }

    /// Creates `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if either value is not comparable with itself (`NaN`).
    #[inline]
    pub fn closed(start: T, end: T) -> Self {
        Self::finite_or_panic(start, end, BoundaryPair::CLOSED, "Interval::closed")
    }

    /// Creates `(start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if either value is not comparable with itself (`NaN`).
    #[inline]
    pub fn open(start: T, end: T) -> Self {
        Self::finite_or_panic(start, end, BoundaryPair::OPEN, "Interval::open")
    }

    /// Creates `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if either value is not comparable with itself (`NaN`).
    #[inline]
    pub fn closed_open(start: T, end: T) -> Self {
        Self::finite_or_panic(start, end, BoundaryPair::CLOSED_OPEN, "Interval::closed_open")
    }

    /// Creates `(start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if either value is not comparable with itself (`NaN`).
    #[inline]
    pub fn open_closed(start: T, end: T) -> Self {
        Self::finite_or_panic(start, end, BoundaryPair::OPEN_CLOSED, "Interval::open_closed")
    }

    /// Creates the single-point interval `[value, value]`.
    #[inline]
    pub fn point(value: T) -> Self {
        Self::closed(value, value)
    }

    #[inline]
    fn half_or_panic(
        start: BoundaryValue<T>,
        end: BoundaryValue<T>,
        kinds: BoundaryPair,
        op: &'static str,
    ) -> Self {
        match Self::from_bounds(start, end, kinds.start, kinds.end) {
            Ok(i) => i,
            Err(e) => panic!("{op}: {e}"),
        }
    }

    /// Creates `[start, +∞)`.
    #[inline]
    pub fn at_least(start: T) -> Self {
        Self::half_or_panic(
            BoundaryValue::Finite(start),
            BoundaryValue::PositiveInfinity,
            BoundaryPair::new(BoundaryKind::Closed, BoundaryKind::Unbounded),
            "Interval::at_least",
        )
    }

    /// Creates `(start, +∞)`.
    #[inline]
    pub fn greater_than(start: T) -> Self {
        Self::half_or_panic(
            BoundaryValue::Finite(start),
            BoundaryValue::PositiveInfinity,
            BoundaryPair::new(BoundaryKind::Open, BoundaryKind::Unbounded),
            "Interval::greater_than",
        )
    }

    /// Creates `(-∞, end]`.
    #[inline]
    pub fn at_most(end: T) -> Self {
        Self::half_or_panic(
            BoundaryValue::NegativeInfinity,
            BoundaryValue::Finite(end),
            BoundaryPair::new(BoundaryKind::Unbounded, BoundaryKind::Closed),
            "Interval::at_most",
        )
    }

    /// Creates `(-∞, end)`.
    #[inline]
    pub fn less_than(end: T) -> Self {
        Self::half_or_panic(
            BoundaryValue::NegativeInfinity,
            BoundaryValue::Finite(end),
            BoundaryPair::new(BoundaryKind::Unbounded, BoundaryKind::Open),
            "Interval::less_than",
        )
    }

    /// Returns the start boundary value.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::bound::BoundaryValue;
    /// use allen_core::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(1, 5).start(), BoundaryValue::Finite(1));
    /// assert_eq!(Interval::<i32>::at_most(5).start(), BoundaryValue::NegativeInfinity);
    /// ```
    #[inline]
    pub fn start(&self) -> BoundaryValue<T> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> BoundaryValue<T> {
        self.end
    }

    /// Checks if the interval contains no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    ///
    /// assert!(Interval::closed(5, 3).is_empty());
    /// assert!(Interval::closed_open(3, 3).is_empty());
    /// assert!(!Interval::point(3).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        if self.is_canonical_empty() {
            return true;
        }
        match self.start.partial_cmp(&self.end) {
            Some(Ordering::Less) => false,
            Some(Ordering::Equal) => {
                !(self.start_kind.is_inclusive() && self.end_kind.is_inclusive())
            }
            _ => true,
        }
    }
}

impl<T: PartialOrd + Copy> PartialEq for Interval<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => {
                self.start == other.start
                    && self.end == other.end
                    && self.start_kind == other.start_kind
                    && self.end_kind == other.end_kind
            }
            _ => false,
        }
    }
}

impl<T: PartialOrd + Copy + Eq> Eq for Interval<T> {}

impl<T: PartialOrd + Copy + Hash> Hash for Interval<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            0u8.hash(state);
            return;
        }
        1u8.hash(state);
        self.start.hash(state);
        self.end.hash(state);
        self.start_kind.hash(state);
        self.end_kind.hash(state);
    }
}

impl<T: PartialOrd + Copy + Display> Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        let open = if self.start_kind.is_inclusive() { "[" } else { "(" };
        let close = if self.end_kind.is_inclusive() { "]" } else { ")" };
        write!(f, "{open}{}, {}{close}", self.start, self.end)
    }
}

impl<T: PartialOrd + Copy> Default for Interval<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_new_accepts_reversed_bounds_as_empty() {
        let i = Interval::new(5, 3, BoundaryKind::Closed, BoundaryKind::Closed).unwrap();
        assert!(i.is_empty());
        assert_eq!(i.start(), BoundaryValue::Finite(5));
        assert!(!i.is_canonical_empty());
    }

    #[test]
    fn test_unbounded_kind_with_finite_value_is_rejected() {
        let err = Interval::new(1, 2, BoundaryKind::Closed, BoundaryKind::Unbounded).unwrap_err();
        assert!(matches!(err, IntervalError::InvalidArgument(_)));
    }

    #[test]
    fn test_infinite_value_normalizes_kind() {
        let i = Interval::from_bounds(
            BoundaryValue::Finite(2),
            BoundaryValue::PositiveInfinity,
            BoundaryKind::Closed,
            BoundaryKind::Closed,
        )
        .unwrap();
        assert_eq!(i.end_kind(), BoundaryKind::Unbounded);
        assert_eq!(i.state(), BoundaryState::LeftBounded);
        assert_eq!(i, Interval::at_least(2));
    }

    #[test]
    fn test_misplaced_infinities_are_rejected() {
        let start_pos = Interval::<i32>::from_bounds(
            BoundaryValue::PositiveInfinity,
            BoundaryValue::PositiveInfinity,
            BoundaryKind::Unbounded,
            BoundaryKind::Unbounded,
        );
        assert!(start_pos.is_err());

        let end_neg = Interval::<i32>::from_bounds(
            BoundaryValue::NegativeInfinity,
            BoundaryValue::NegativeInfinity,
            BoundaryKind::Unbounded,
            BoundaryKind::Unbounded,
        );
        assert!(end_neg.is_err());
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(Interval::new(0.0, f64::NAN, BoundaryKind::Open, BoundaryKind::Open).is_err());
        assert!(
            Interval::from_bounds(
                BoundaryValue::Finite(f64::NAN),
                BoundaryValue::PositiveInfinity,
                BoundaryKind::Closed,
                BoundaryKind::Unbounded,
            )
            .is_err()
        );
    }

    #[test]
    #[should_panic(expected = "Interval::closed")]
    fn test_closed_panics_on_nan() {
        let _ = Interval::closed(f64::NAN, 1.0);
    }

    #[test]
    fn test_undefined_sides() {
        let both = Interval::<i32>::from_bounds(
            BoundaryValue::Undefined,
            BoundaryValue::Undefined,
            BoundaryKind::Closed,
            BoundaryKind::Closed,
        )
        .unwrap();
        assert!(both.is_canonical_empty());

        let one = Interval::from_bounds(
            BoundaryValue::Undefined,
            BoundaryValue::Finite(3),
            BoundaryKind::Closed,
            BoundaryKind::Closed,
        );
        assert!(matches!(one, Err(IntervalError::InvalidArgument(_))));
    }

    #[test]
    fn test_emptiness_rules() {
        assert!(!Interval::point(1).is_empty());
        assert!(Interval::open(1, 1).is_empty());
        assert!(Interval::closed_open(1, 1).is_empty());
        assert!(Interval::open_closed(1, 1).is_empty());
        assert!(!Interval::open(1, 2).is_empty());
        assert!(Interval::closed(2, 1).is_empty());
        assert!(!Interval::<i32>::unbounded().is_empty());
        assert!(!Interval::less_than(0).is_empty());
    }

    #[test]
    fn test_all_empty_intervals_are_equal_and_hash_alike() {
        let a = Interval::closed(5, 3);
        let b = Interval::open(1, 1);
        let c = Interval::<i32>::empty();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(hash_of(&a), hash_of(&c));
        assert_ne!(a, Interval::point(5));
    }

    #[test]
    fn test_equality_considers_kinds() {
        assert_eq!(Interval::closed(1, 3), Interval::closed(1, 3));
        assert_ne!(Interval::closed(1, 3), Interval::closed_open(1, 3));
        assert_ne!(Interval::closed(1, 3), Interval::closed(1, 4));
    }

    #[test]
    fn test_state_classification() {
        assert_eq!(Interval::closed(0, 1).state(), BoundaryState::Bounded);
        assert_eq!(Interval::at_least(0).state(), BoundaryState::LeftBounded);
        assert_eq!(Interval::at_most(0).state(), BoundaryState::RightBounded);
        assert_eq!(Interval::<i32>::unbounded().state(), BoundaryState::Unbounded);
        assert_eq!(Interval::<i32>::empty().state(), BoundaryState::Bounded);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::closed_open(1, 5).to_string(), "[1, 5)");
        assert_eq!(Interval::open_closed(1, 5).to_string(), "(1, 5]");
        assert_eq!(Interval::at_most(3).to_string(), "(-∞, 3]");
        assert_eq!(Interval::at_least(2).to_string(), "[2, +∞)");
        assert_eq!(Interval::<i32>::unbounded().to_string(), "(-∞, +∞)");
        assert_eq!(Interval::closed(4, 1).to_string(), "∅");
    }

    #[test]
    fn test_serde_round_trip() {
        let i = Interval::closed_open(1.5, 4.0);
        let json = serde_json::to_string(&i).unwrap();
        let back: Interval<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(i, back);

        let half = Interval::greater_than(7i64);
        let json = serde_json::to_string(&half).unwrap();
        let back: Interval<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(half, back);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = concat!(
            r#"{"start":{"Finite":1},"end":{"Finite":2},"#,
            r#""start_kind":"Unbounded","end_kind":"Closed"}"#
        );
        let parsed: Result<Interval<i32>, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
