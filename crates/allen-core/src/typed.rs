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

//! # Typed Shapes
//!
//! A compile-time layer over [`Interval`]. A [`TypedInterval<T, S>`] carries
//! its boundary shape in the marker type `S`, so a function can demand, say,
//! half-open intervals in its signature instead of checking kinds at run time.
//! The markers are zero-sized and the wrapper has the layout of `Interval<T>`.

use crate::{
    err::IntervalError,
    interval::Interval,
    kind::{BoundaryKind, BoundaryPair},
    relation::RelationOutcome,
    scalar::Step,
};
use std::{fmt::Display, hash::Hash, marker::PhantomData};

mod sealed {
    pub trait Sealed {}
}

/// A finite boundary shape known at compile time.
pub trait Shape: sealed::Sealed + Copy + Default + std::fmt::Debug + 'static {
    const PAIR: BoundaryPair;
}

macro_rules! shapes {
    ($($(#[$doc:meta])* $name:ident => $pair:expr;)+) => {
        $(
            $(#[$doc])*
            #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $name;

            impl sealed::Sealed for $name {}

            impl Shape for $name {
                const PAIR: BoundaryPair = $pair;
            }

            impl Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", stringify!($name))
                }
            }
        )+
    };
}

shapes! {
    /// `[a, b]`
    Closed => BoundaryPair::CLOSED;
    /// `(a, b)`
    Open => BoundaryPair::OPEN;
    /// `[a, b)`
    ClosedOpen => BoundaryPair::CLOSED_OPEN;
    /// `(a, b]`
    OpenClosed => BoundaryPair::OPEN_CLOSED;
}

/// An [`Interval`] whose finite sides have the kinds of `S`.
///
/// Unbounded sides and the empty interval are allowed for every shape.
///
/// # Examples
///
/// ```
/// use allen_core::interval::Interval;
/// use allen_core::typed::{ClosedOpen, TypedInterval};
///
/// fn slot_length(slot: &TypedInterval<i64, ClosedOpen>) -> Option<i64> {
///     slot.as_interval().length().finite()
/// }
///
/// let slot = TypedInterval::<i64, ClosedOpen>::new(10, 25).unwrap();
/// assert_eq!(slot_length(&slot), Some(15));
/// assert!(TypedInterval::<i64, ClosedOpen>::try_from(Interval::closed(1, 2)).is_err());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug)]
pub struct TypedInterval<T, S: Shape> {
    inner: Interval<T>,
    _shape: PhantomData<fn() -> S>,
}

impl<T: PartialOrd + Copy, S: Shape> TypedInterval<T, S> {
    #[inline]
    const fn wrap(inner: Interval<T>) -> Self {
        Self {
            inner,
            _shape: PhantomData,
        }
    }

    /// Creates an interval of shape `S` between two finite values.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidArgument`] if a value is not
    /// comparable with itself (`NaN`).
    #[inline]
    pub fn new(start: T, end: T) -> Result<Self, IntervalError> {
        Interval::new(start, end, S::PAIR.start, S::PAIR.end).map(Self::wrap)
    }

    #[inline]
    pub fn empty() -> Self {
        Self::wrap(Interval::empty())
    }

    #[inline]
    pub fn as_interval(&self) -> &Interval<T> {
        &self.inner
    }

    #[inline]
    pub fn into_interval(self) -> Interval<T> {
        self.inner
    }

    /// The shape as a run-time value.
    #[inline]
    pub const fn shape() -> BoundaryPair {
        S::PAIR
    }

    #[inline]
    pub fn relation<U: Shape>(&self, other: &TypedInterval<T, U>) -> RelationOutcome {
        self.inner.relation(&other.inner)
    }

    /// Rewrites the interval into shape `U` with the same set of values.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::UnsupportedOperation`] if a step overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::scalar::UnitStep;
    /// use allen_core::typed::{Closed, ClosedOpen, TypedInterval};
    ///
    /// let days = TypedInterval::<i32, Closed>::new(1, 7).unwrap();
    /// let half_open = days.reshape::<ClosedOpen, _>(&UnitStep).unwrap();
    /// assert_eq!(half_open.as_interval().to_string(), "[1, 8)");
    /// ```
    pub fn reshape<U: Shape, St>(&self, step: &St) -> Result<TypedInterval<T, U>, IntervalError>
    where
        St: Step<T> + ?Sized,
    {
        self.inner
            .canonicalize(U::PAIR, step)
            .map(TypedInterval::wrap)
    }

    fn fits(interval: &Interval<T>) -> bool {
        if interval.is_empty() {
            return true;
        }
        let side = |actual: BoundaryKind, wanted: BoundaryKind| {
            actual.is_unbounded() || actual == wanted
        };
        side(interval.start_kind(), S::PAIR.start) && side(interval.end_kind(), S::PAIR.end)
    }
}

impl<T: PartialOrd + Copy, S: Shape> TryFrom<Interval<T>> for TypedInterval<T, S> {
    type Error = IntervalError;

    fn try_from(interval: Interval<T>) -> Result<Self, Self::Error> {
        if Self::fits(&interval) {
            let inner = if interval.is_empty() {
                Interval::empty()
            } else {
                interval
            };
            Ok(Self::wrap(inner))
        } else {
            Err(IntervalError::invalid_argument(
                "TypedInterval::try_from",
                "boundary kinds do not match the shape",
            ))
        }
    }
}

impl<T, S: Shape> From<TypedInterval<T, S>> for Interval<T> {
    #[inline]
    fn from(typed: TypedInterval<T, S>) -> Self {
        typed.inner
    }
}

impl<T, S: Shape> AsRef<Interval<T>> for TypedInterval<T, S> {
    #[inline]
    fn as_ref(&self) -> &Interval<T> {
        &self.inner
    }
}

impl<T: PartialOrd + Copy, S: Shape> PartialEq for TypedInterval<T, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: PartialOrd + Copy + Eq, S: Shape> Eq for TypedInterval<T, S> {}

impl<T: PartialOrd + Copy + Hash, S: Shape> Hash for TypedInterval<T, S> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<T: PartialOrd + Copy + Display, S: Shape> Display for TypedInterval<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
