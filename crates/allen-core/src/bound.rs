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

//! # Boundary Values
//!
//! [`BoundaryValue<T>`] lifts an ordered scalar `T` into a domain with two
//! infinities and an `Undefined` marker. The infinities let an interval be
//! unbounded on either side without resorting to `MIN`/`MAX` sentinels, and
//! `Undefined` is the boundary of the canonical empty interval.
//!
//! Arithmetic on boundary values is spelled out as explicit functions with a
//! fixed rule table instead of operator overloads, see [`BoundaryValue::add`]
//! and [`BoundaryValue::subtract`].

use crate::{err::IntervalError, scalar::CheckedDistance};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::{Add, Neg, Sub},
};

/// A scalar value extended with `-∞`, `+∞` and an `Undefined` state.
///
/// The ordering is `NegativeInfinity < Finite(x) < PositiveInfinity` for
/// every finite `x`. `Undefined` is equal to itself and unordered with
/// respect to everything else.
///
/// # Examples
///
/// ```
/// use allen_core::bound::BoundaryValue;
///
/// let a = BoundaryValue::Finite(3);
/// assert!(BoundaryValue::NegativeInfinity < a);
/// assert!(a < BoundaryValue::PositiveInfinity);
/// assert!(a.partial_cmp(&BoundaryValue::Undefined).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryValue<T> {
    /// Below every finite value.
    NegativeInfinity,
    /// An ordinary value of the underlying scalar.
    Finite(T),
    /// Above every finite value.
    PositiveInfinity,
    /// The boundary of the canonical empty interval. Has no position on the line.
    Undefined,
}

impl<T> BoundaryValue<T> {
    #[inline]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    #[inline]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::NegativeInfinity | Self::PositiveInfinity)
    }

    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns the finite value, or `None` for the infinities and `Undefined`.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::bound::BoundaryValue;
    ///
    /// assert_eq!(BoundaryValue::Finite(4).finite(), Some(4));
    /// assert_eq!(BoundaryValue::<i32>::PositiveInfinity.finite(), None);
    /// ```
    #[inline]
    pub fn finite(self) -> Option<T> {
        match self {
            Self::Finite(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_finite(&self) -> Option<&T> {
        match self {
            Self::Finite(v) => Some(v),
            _ => None,
        }
    }

    /// Maps the finite payload, keeping the infinities and `Undefined` as they are.
    #[inline]
    pub fn map<U, F>(self, f: F) -> BoundaryValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::NegativeInfinity => BoundaryValue::NegativeInfinity,
            Self::Finite(v) => BoundaryValue::Finite(f(v)),
            Self::PositiveInfinity => BoundaryValue::PositiveInfinity,
            Self::Undefined => BoundaryValue::Undefined,
        }
    }

    /// Returns `true` if the value has a position on the line.
    ///
    /// Infinities are always orderable, `Undefined` never is, and a finite
    /// value is orderable if it compares with itself (this rejects `NaN`).
    #[inline]
    pub fn is_orderable(&self) -> bool
    where
        T: PartialOrd,
    {
        match self {
            Self::Finite(v) => v.partial_cmp(v).is_some(),
            Self::NegativeInfinity | Self::PositiveInfinity => true,
            Self::Undefined => false,
        }
    }

    /// Orders two boundary values, failing if either one has no position.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidState`] when an operand is `Undefined`
    /// or the finite payloads are unordered (`NaN`).
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::bound::BoundaryValue;
    /// use std::cmp::Ordering;
    ///
    /// let a = BoundaryValue::Finite(1.0);
    /// assert_eq!(a.try_cmp(&BoundaryValue::PositiveInfinity), Ok(Ordering::Less));
    /// assert!(a.try_cmp(&BoundaryValue::Undefined).is_err());
    /// ```
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, IntervalError>
    where
        T: PartialOrd,
    {
        if self.is_undefined() || other.is_undefined() {
            return Err(IntervalError::invalid_state(
                "BoundaryValue::try_cmp",
                "an undefined boundary has no position to compare",
            ));
        }
        self.partial_cmp(other).ok_or(IntervalError::invalid_state(
            "BoundaryValue::try_cmp",
            "finite boundary values are unordered",
        ))
    }

    /// Adds two boundary values.
    ///
    /// | lhs \ rhs | `-∞`        | `Finite(b)`     | `+∞`        | `Undefined` |
    /// |-----------|-------------|-----------------|-------------|-------------|
    /// | `-∞`      | `-∞`        | `-∞`            | `Undefined` | `Undefined` |
    /// | `Finite(a)` | `-∞`      | `Finite(a + b)` | `+∞`        | `Undefined` |
    /// | `+∞`      | `Undefined` | `+∞`            | `+∞`        | `Undefined` |
    /// | `Undefined` | `Undefined` | `Undefined`   | `Undefined` | `Undefined` |
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::bound::BoundaryValue;
    ///
    /// let a = BoundaryValue::Finite(2);
    /// assert_eq!(a.add(BoundaryValue::Finite(3)), BoundaryValue::Finite(5));
    /// assert_eq!(a.add(BoundaryValue::<i32>::PositiveInfinity), BoundaryValue::PositiveInfinity);
    /// assert_eq!(
    ///     BoundaryValue::<i32>::PositiveInfinity.add(BoundaryValue::<i32>::NegativeInfinity),
    ///     BoundaryValue::Undefined
    /// );
    /// ```
    pub fn add<R, O>(self, rhs: BoundaryValue<R>) -> BoundaryValue<O>
    where
        T: Add<R, Output = O>,
    {
        use BoundaryValue::*;
        match (self, rhs) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (Finite(a), Finite(b)) => Finite(a + b),
            (NegativeInfinity, PositiveInfinity) | (PositiveInfinity, NegativeInfinity) => {
                Undefined
            }
            (NegativeInfinity, _) | (_, NegativeInfinity) => NegativeInfinity,
            (PositiveInfinity, _) | (_, PositiveInfinity) => PositiveInfinity,
        }
    }

    /// Subtracts `rhs` from `self`.
    ///
    /// | lhs \ rhs | `-∞`        | `Finite(b)`     | `+∞`        | `Undefined` |
    /// |-----------|-------------|-----------------|-------------|-------------|
    /// | `-∞`      | `Undefined` | `-∞`            | `-∞`        | `Undefined` |
    /// | `Finite(a)` | `+∞`      | `Finite(a - b)` | `-∞`        | `Undefined` |
    /// | `+∞`      | `+∞`        | `+∞`            | `Undefined` | `Undefined` |
    /// | `Undefined` | `Undefined` | `Undefined`   | `Undefined` | `Undefined` |
    ///
    /// The output type follows `T`'s `Sub` impl, so subtracting two time
    /// points yields a boundary value over durations.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::bound::BoundaryValue;
    ///
    /// let end = BoundaryValue::Finite(9);
    /// assert_eq!(end.subtract(BoundaryValue::Finite(4)), BoundaryValue::Finite(5));
    /// let below = end.subtract(BoundaryValue::<i32>::NegativeInfinity);
    /// assert_eq!(below, BoundaryValue::PositiveInfinity);
    /// ```
    pub fn subtract<R, O>(self, rhs: BoundaryValue<R>) -> BoundaryValue<O>
    where
        T: Sub<R, Output = O>,
    {
        use BoundaryValue::*;
        match (self, rhs) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (Finite(a), Finite(b)) => Finite(a - b),
            (NegativeInfinity, NegativeInfinity) | (PositiveInfinity, PositiveInfinity) => {
                Undefined
            }
            (PositiveInfinity, _) | (_, NegativeInfinity) => PositiveInfinity,
            (NegativeInfinity, _) | (_, PositiveInfinity) => NegativeInfinity,
        }
    }

    /// Subtracts `rhs` from `self` like [`BoundaryValue::subtract`], but
    /// returns `None` when the finite difference does not fit the output.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::bound::BoundaryValue;
    ///
    /// let end = BoundaryValue::Finite(i32::MAX);
    /// assert_eq!(end.checked_subtract(BoundaryValue::Finite(i32::MIN)), None);
    /// let ok = end.checked_subtract(BoundaryValue::Finite(0));
    /// assert_eq!(ok, Some(BoundaryValue::Finite(i32::MAX)));
    /// ```
    pub fn checked_subtract<O>(self, rhs: Self) -> Option<BoundaryValue<O>>
    where
        T: CheckedDistance<Output = O>,
    {
        use BoundaryValue::*;
        Some(match (self, rhs) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (Finite(a), Finite(b)) => Finite(a.checked_distance(b)?),
            (NegativeInfinity, NegativeInfinity) | (PositiveInfinity, PositiveInfinity) => {
                Undefined
            }
            (PositiveInfinity, _) | (_, NegativeInfinity) => PositiveInfinity,
            (NegativeInfinity, _) | (_, PositiveInfinity) => NegativeInfinity,
        })
    }

    /// Negates the value: finite payloads are negated and the infinities swap.
    #[inline]
    pub fn negate<O>(self) -> BoundaryValue<O>
    where
        T: Neg<Output = O>,
    {
        match self {
            Self::NegativeInfinity => BoundaryValue::PositiveInfinity,
            Self::Finite(v) => BoundaryValue::Finite(-v),
            Self::PositiveInfinity => BoundaryValue::NegativeInfinity,
            Self::Undefined => BoundaryValue::Undefined,
        }
    }
}

impl<T: PartialOrd> PartialOrd for BoundaryValue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use BoundaryValue::*;
        match (self, other) {
            (Undefined, Undefined) => Some(Ordering::Equal),
            (Undefined, _) | (_, Undefined) => None,
            (Finite(a), Finite(b)) => a.partial_cmp(b),
            (NegativeInfinity, NegativeInfinity) | (PositiveInfinity, PositiveInfinity) => {
                Some(Ordering::Equal)
            }
            (NegativeInfinity, _) | (_, PositiveInfinity) => Some(Ordering::Less),
            (PositiveInfinity, _) | (_, NegativeInfinity) => Some(Ordering::Greater),
        }
    }
}

impl<T> From<T> for BoundaryValue<T> {
    #[inline]
    fn from(v: T) -> Self {
        Self::Finite(v)
    }
}

impl<T: Display> Display for BoundaryValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeInfinity => write!(f, "-∞"),
            Self::Finite(v) => write!(f, "{v}"),
            Self::PositiveInfinity => write!(f, "+∞"),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}
