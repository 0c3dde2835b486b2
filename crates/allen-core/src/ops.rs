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

//! # Derived Operations
//!
//! Everything here is expressed through the boundary comparers and the
//! relation calculator, so containment, overlap, gaps and set operations
//! agree with [`relation`](crate::relation::relation) on every tie.

use crate::{
    bound::BoundaryValue,
    compare::{compare_end, compare_start},
    config::{EmptyLengthPolicy, MeasureConfig, UnboundedLengthPolicy},
    err::IntervalError,
    interval::Interval,
    kind::{BoundaryKind, BoundaryPair},
    relation::{Relation, RelationOutcome},
    scalar::{CheckedDistance, Halve, Step},
};
use std::{
    cmp::Ordering,
    ops::{Add, Sub},
};
use tracing::{debug, instrument};

impl<T: PartialOrd + Copy> Interval<T> {
    /// Checks if the interval contains a value.
    ///
    /// Infinite sides admit every value on their side. Empty intervals and
    /// values that are not comparable (`NaN`) yield `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    ///
    /// let i = Interval::open(1, 3);
    /// assert!(!i.contains(1));
    /// assert!(i.contains(2));
    /// assert!(Interval::at_least(0).contains(i32::MAX));
    /// ```
    pub fn contains(&self, value: T) -> bool {
        if self.is_empty() {
            return false;
        }
        let after_start = match self.start() {
            BoundaryValue::NegativeInfinity => true,
            BoundaryValue::Finite(s) => match value.partial_cmp(&s) {
                Some(Ordering::Greater) => true,
                Some(Ordering::Equal) => self.start_kind().is_inclusive(),
                _ => false,
            },
            _ => false,
        };
        let before_end = match self.end() {
            BoundaryValue::PositiveInfinity => true,
            BoundaryValue::Finite(e) => match value.partial_cmp(&e) {
                Some(Ordering::Less) => true,
                Some(Ordering::Equal) => self.end_kind().is_inclusive(),
                _ => false,
            },
            _ => false,
        };
        after_start && before_end
    }

    /// Checks if the two intervals share at least one value.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    ///
    /// assert!(Interval::closed(0, 5).overlaps(&Interval::closed(5, 9)));
    /// assert!(!Interval::closed_open(0, 5).overlaps(&Interval::closed(5, 9)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.relation(other)
            .relation()
            .is_some_and(Relation::is_overlapping)
    }

    /// Checks if the union of the two intervals is a single interval, i.e.
    /// they overlap or meet.
    #[inline]
    pub fn is_connected(&self, other: &Self) -> bool {
        self.relation(other)
            .relation()
            .is_some_and(|r| r.is_overlapping() || r.is_touching())
    }

    /// Checks if every value of `other` is a value of `self`.
    ///
    /// An empty `other` is contained in every interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    ///
    /// let outer = Interval::closed(0, 10);
    /// assert!(outer.contains_interval(&Interval::open(0, 10)));
    /// assert!(!Interval::open(0, 10).contains_interval(&outer));
    /// assert!(outer.contains_interval(&Interval::empty()));
    /// ```
    pub fn contains_interval(&self, other: &Self) -> bool {
        match self.relation(other) {
            RelationOutcome::SecondEmpty | RelationOutcome::BothEmpty => true,
            RelationOutcome::FirstEmpty => false,
            RelationOutcome::Related(r) => matches!(
                r,
                Relation::Equal | Relation::Contains | Relation::StartedBy | Relation::FinishedBy
            ),
        }
    }

    /// Checks if every value of `self` lies below every value of `other`.
    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        matches!(
            self.relation(other),
            RelationOutcome::Related(Relation::Before | Relation::Meets)
        )
    }

    /// Checks if every value of `self` lies above every value of `other`.
    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        matches!(
            self.relation(other),
            RelationOutcome::Related(Relation::MetBy | Relation::After)
        )
    }

    /// Returns the distance between the boundary values, `end - start`.
    ///
    /// Boundary kinds are ignored, so `[1, 3]` and `(1, 3)` both have length
    /// 2. An interval with an infinite side has length `PositiveInfinity`; an
    /// empty interval has length `Undefined`.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::bound::BoundaryValue;
    /// use allen_core::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(1, 3).length(), BoundaryValue::Finite(2));
    /// assert_eq!(Interval::open(1, 3).length(), BoundaryValue::Finite(2));
    /// assert_eq!(Interval::at_least(1).length(), BoundaryValue::<i32>::PositiveInfinity);
    /// assert_eq!(Interval::open(3, 3).length(), BoundaryValue::<i32>::Undefined);
    /// ```
    ///
    /// # Panics
    ///
    /// Overflow behaves like `T`'s `Sub`. Integers panic in debug builds and
    /// wrap in release builds; `TimePoint` always panics. Use
    /// [`Interval::checked_length`] when the bounds may be further apart than
    /// the scalar can express.
    #[inline]
    pub fn length<D>(&self) -> BoundaryValue<D>
    where
        T: Sub<Output = D>,
    {
        if self.is_empty() {
            return BoundaryValue::Undefined;
        }
        self.end().subtract(self.start())
    }

    /// Returns the length like [`Interval::length`], failing instead of
    /// overflowing.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::UnsupportedOperation`] when `end - start` does
    /// not fit the distance type.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::bound::BoundaryValue;
    /// use allen_core::interval::Interval;
    ///
    /// assert!(Interval::closed(i32::MIN, i32::MAX).checked_length().is_err());
    /// assert_eq!(Interval::closed(-3, 4).checked_length(), Ok(BoundaryValue::Finite(7)));
    /// ```
    pub fn checked_length<D>(&self) -> Result<BoundaryValue<D>, IntervalError>
    where
        T: CheckedDistance<Output = D>,
    {
        if self.is_empty() {
            return Ok(BoundaryValue::Undefined);
        }
        self.end()
            .checked_subtract(self.start())
            .ok_or_else(|| {
                debug!("interval length overflowed");
                IntervalError::unsupported(
                    "Interval::checked_length",
                    "distance overflows the scalar",
                )
            })
    }

    /// Returns the length under the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::UnsupportedOperation`] when the interval is
    /// not bounded and the config uses [`UnboundedLengthPolicy::Reject`],
    /// when it is empty and the config uses [`EmptyLengthPolicy::Reject`], or
    /// when the length overflows, see [`Interval::checked_length`].
    pub fn measure<D>(&self, config: &MeasureConfig) -> Result<BoundaryValue<D>, IntervalError>
    where
        T: CheckedDistance<Output = D>,
    {
        if self.is_empty() {
            return match config.empty_length() {
                EmptyLengthPolicy::Undefined => Ok(BoundaryValue::Undefined),
                EmptyLengthPolicy::Reject => {
                    debug!("rejected length of an empty interval");
                    Err(IntervalError::unsupported(
                        "Interval::measure",
                        "empty intervals have no length",
                    ))
                }
            };
        }
        if !self.is_bounded() && config.unbounded_length() == UnboundedLengthPolicy::Reject {
            debug!(state = ?self.state(), "rejected length of an unbounded interval");
            return Err(IntervalError::unsupported(
                "Interval::measure",
                "unbounded intervals have no finite length",
            ));
        }
        self.checked_length()
    }

    /// Returns the length under `policy`, see [`Interval::measure`].
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::config::UnboundedLengthPolicy;
    /// use allen_core::interval::Interval;
    ///
    /// assert!(Interval::at_most(3).length_with(UnboundedLengthPolicy::Reject).is_err());
    /// assert!(Interval::closed(0, 3).length_with(UnboundedLengthPolicy::Reject).is_ok());
    /// ```
    #[inline]
    pub fn length_with<D>(
        &self,
        policy: UnboundedLengthPolicy,
    ) -> Result<BoundaryValue<D>, IntervalError>
    where
        T: CheckedDistance<Output = D>,
    {
        self.measure(&MeasureConfig::from(policy))
    }

    /// Returns half the length of a bounded, non-empty interval, or `None`
    /// if the length overflows.
    #[inline]
    pub fn radius<D>(&self) -> Option<D>
    where
        T: CheckedDistance<Output = D>,
        D: Halve,
    {
        if !self.is_bounded() {
            return None;
        }
        self.checked_length().ok()?.finite().map(Halve::halve)
    }

    /// Returns the midpoint of a bounded, non-empty interval, or `None` if
    /// its length overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(2.0, 5.0).centre(), Some(3.5));
    /// assert_eq!(Interval::closed(2, 5).centre(), Some(3));
    /// assert_eq!(Interval::at_least(2).centre(), None);
    /// assert_eq!(Interval::closed(-100i8, 100).centre(), None);
    /// ```
    #[inline]
    pub fn centre<D>(&self) -> Option<T>
    where
        T: CheckedDistance<Output = D> + Add<D, Output = T>,
        D: Halve,
    {
        let start = self.start().finite()?;
        self.radius().map(|r| start + r)
    }

    /// Rewrites the interval to the boundary kinds of `target` without
    /// changing the set of values it holds.
    ///
    /// Each finite side whose kind differs from the target is moved by one
    /// step: a closed start becomes open one step below, an open start
    /// becomes closed one step above, and the end mirrors that. Unbounded
    /// sides are left as they are. The result is idempotent under repeated
    /// canonicalisation with the same target.
    ///
    /// Only discrete scalars can be canonicalised; continuous types need a
    /// caller supplied [`Step`], e.g. [`FnStep`](crate::scalar::FnStep).
    ///
    /// # Errors
    ///
    /// - [`IntervalError::InvalidArgument`] if `target` contains `Unbounded`.
    /// - [`IntervalError::UnsupportedOperation`] if a step overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    /// use allen_core::kind::BoundaryPair;
    /// use allen_core::scalar::UnitStep;
    ///
    /// let i = Interval::closed(1, 3);
    /// let c = i.canonicalize(BoundaryPair::CLOSED_OPEN, &UnitStep).unwrap();
    /// assert_eq!(c, Interval::closed_open(1, 4));
    /// let hollow = Interval::open(1, 2).canonicalize(BoundaryPair::CLOSED, &UnitStep).unwrap();
    /// assert_eq!(hollow, Interval::empty());
    /// ```
    #[instrument(level = "trace", skip_all, fields(target = %target))]
    pub fn canonicalize<S>(&self, target: BoundaryPair, step: &S) -> Result<Self, IntervalError>
    where
        S: Step<T> + ?Sized,
    {
        if !target.is_finite_shape() {
            return Err(IntervalError::invalid_argument(
                "Interval::canonicalize",
                "target kinds must not be unbounded",
            ));
        }
        if self.is_empty() {
            return Ok(Self::empty());
        }

        let (start, start_kind) = match (self.start(), self.start_kind(), target.start) {
            (BoundaryValue::Finite(s), BoundaryKind::Closed, BoundaryKind::Open) => {
                (step_or_fail(step.backward(s))?, BoundaryKind::Open)
            }
            (BoundaryValue::Finite(s), BoundaryKind::Open, BoundaryKind::Closed) => {
                (step_or_fail(step.forward(s))?, BoundaryKind::Closed)
            }
            (value, kind, _) => (value, kind),
        };
        let (end, end_kind) = match (self.end(), self.end_kind(), target.end) {
            (BoundaryValue::Finite(e), BoundaryKind::Closed, BoundaryKind::Open) => {
                (step_or_fail(step.forward(e))?, BoundaryKind::Open)
            }
            (BoundaryValue::Finite(e), BoundaryKind::Open, BoundaryKind::Closed) => {
                (step_or_fail(step.backward(e))?, BoundaryKind::Closed)
            }
            (value, kind, _) => (value, kind),
        };

        let result = Self::from_bounds(start, end, start_kind, end_kind)?;
        Ok(if result.is_empty() { Self::empty() } else { result })
    }

    /// Returns the interval with every finite side closed.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    ///
    /// assert_eq!(Interval::open(1, 3).closure(), Interval::closed(1, 3));
    /// assert_eq!(Interval::greater_than(1).closure(), Interval::at_least(1));
    /// ```
    #[inline]
    pub fn closure(&self) -> Self {
        self.reshape(BoundaryKind::Closed)
    }

    /// Returns the interval with every finite side open.
    #[inline]
    pub fn interior(&self) -> Self {
        self.reshape(BoundaryKind::Open)
    }

    fn reshape(&self, kind: BoundaryKind) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let pick = |current: BoundaryKind| {
            if current.is_unbounded() {
                current
            } else {
                kind
            }
        };
        let result = Self::from_parts_unchecked(
            self.start(),
            self.end(),
            pick(self.start_kind()),
            pick(self.end_kind()),
        );
        if result.is_empty() {
            Self::empty()
        } else {
            result
        }
    }

    /// Returns the values strictly between two intervals that neither
    /// overlap nor meet.
    ///
    /// Intervals that meet have no gap, even when both exclude the shared
    /// value.
    ///
    /// The gap takes the opposite kind of each neighbouring side, so the
    /// three intervals together cover a connected range without overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    ///
    /// let gap = Interval::closed_open(0, 5).gap(&Interval::open_closed(7, 9));
    /// assert_eq!(gap, Some(Interval::closed(5, 7)));
    /// assert_eq!(Interval::open(0, 5).gap(&Interval::open(5, 9)), None);
    /// assert_eq!(Interval::closed_open(0, 5).gap(&Interval::closed(5, 9)), None);
    /// ```
    pub fn gap(&self, other: &Self) -> Option<Self> {
        let (first, second) = match self.relation(other).relation()? {
            Relation::Before => (self, other),
            Relation::After => (other, self),
            _ => return None,
        };
        Some(Self::from_parts_unchecked(
            first.end(),
            second.start(),
            first.end_kind().flip(),
            second.start_kind().flip(),
        ))
    }

    /// Returns the values shared by both intervals, or the empty interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    ///
    /// let a = Interval::closed(0, 5);
    /// assert_eq!(a.intersection(&Interval::open(3, 9)), Interval::open_closed(3, 5));
    /// assert_eq!(a.intersection(&Interval::closed(5, 9)), Interval::point(5));
    /// assert!(Interval::closed_open(0, 5).intersection(&Interval::closed(5, 9)).is_empty());
    /// ```
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        let from = if compare_start(self, other) == Ordering::Greater {
            self
        } else {
            other
        };
        let to = if compare_end(self, other) == Ordering::Less {
            self
        } else {
            other
        };
        let result =
            Self::from_parts_unchecked(from.start(), to.end(), from.start_kind(), to.end_kind());
        if result.is_empty() {
            Self::empty()
        } else {
            result
        }
    }

    /// Returns the smallest interval covering both operands. Empty operands
    /// are ignored.
    pub fn span(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let from = if compare_start(self, other) == Ordering::Greater {
            other
        } else {
            self
        };
        let to = if compare_end(self, other) == Ordering::Less {
            other
        } else {
            self
        };
        Self::from_parts_unchecked(from.start(), to.end(), from.start_kind(), to.end_kind())
    }

    /// Returns the union if it is a single interval.
    ///
    /// Intervals that meet form a single interval only if one of them holds
    /// the shared value.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    ///
    /// let a = Interval::closed_open(0, 5);
    /// assert_eq!(a.union(&Interval::closed(5, 9)), Some(Interval::closed(0, 9)));
    /// assert_eq!(a.union(&Interval::open(5, 9)), None);
    /// assert_eq!(a.union(&Interval::closed(6, 9)), None);
    /// ```
    pub fn union(&self, other: &Self) -> Option<Self> {
        let joined = match self.relation(other) {
            RelationOutcome::Related(Relation::Meets) => {
                self.end_kind().is_inclusive() || other.start_kind().is_inclusive()
            }
            RelationOutcome::Related(Relation::MetBy) => {
                self.start_kind().is_inclusive() || other.end_kind().is_inclusive()
            }
            RelationOutcome::Related(r) => r.is_overlapping(),
            _ => true,
        };
        joined.then(|| self.span(other))
    }
}

#[inline]
fn step_or_fail<T>(stepped: Option<T>) -> Result<BoundaryValue<T>, IntervalError> {
    stepped.map(BoundaryValue::Finite).ok_or_else(|| {
        debug!("canonicalisation step overflowed");
        IntervalError::unsupported("Interval::canonicalize", "step leaves the value range")
    })
}
