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

//! # Time Scalars
//!
//! Strongly typed instants and durations for building date/time intervals.
//!
//! - `TimePoint<T>`: a point on a timeline, counted in some unit from an epoch.
//! - `TimeDelta<T>`: a signed distance between two time points.
//! - `TimeInterval<T>`: an [`Interval`] over `TimePoint<T>`.
//!
//! The distinct newtypes prevent mixing instants and durations at compile
//! time, e.g. adding two `TimePoint`s does not type check. Subtracting two
//! time points yields a `TimeDelta`, which is what the length of a time
//! interval is measured in.

use crate::{
    interval::Interval,
    scalar::{CheckedDistance, Halve, Step},
};
use num_traits::{CheckedAdd, CheckedSub, PrimInt, SaturatingAdd, SaturatingSub, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Div, Neg, Sub, SubAssign},
};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimePoint<T: PrimInt>(T);

impl<T: PrimInt> Default for TimePoint<T> {
    #[inline]
    fn default() -> Self {
        TimePoint(T::zero())
    }
}

impl<T: PrimInt + Display> Display for TimePoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimePoint({})", self.value())
    }
}

impl<T: PrimInt> From<T> for TimePoint<T> {
    #[inline]
    fn from(v: T) -> Self {
        TimePoint(v)
    }
}

pub type TimeInterval<T> = Interval<TimePoint<T>>;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeDelta<T: PrimInt + Signed>(T);

impl<T: PrimInt + Signed> TimeDelta<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[inline]
    pub fn zero() -> Self {
        Self(T::zero())
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn checked_add(self, rhs: TimeDelta<T>) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(TimeDelta)
    }

    #[inline]
    pub fn checked_sub(self, rhs: TimeDelta<T>) -> Option<Self> {
        self.0.checked_sub(&rhs.0).map(TimeDelta)
    }

    #[inline]
    pub fn checked_div(self, rhs: T) -> Option<Self> {
        self.0.checked_div(&rhs).map(TimeDelta)
    }
}

impl<T: PrimInt> TimePoint<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        TimePoint(value)
    }

    #[inline]
    pub fn zero() -> Self {
        TimePoint::new(T::zero())
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }
}

impl<T: PrimInt + Signed> TimePoint<T> {
    #[inline]
    pub fn checked_add(self, delta: TimeDelta<T>) -> Option<Self> {
        self.0.checked_add(&delta.0).map(TimePoint)
    }

    #[inline]
    pub fn checked_sub(self, delta: TimeDelta<T>) -> Option<Self> {
        self.0.checked_sub(&delta.0).map(TimePoint)
    }

    #[inline]
    pub fn saturating_add(self, delta: TimeDelta<T>) -> Self {
        TimePoint(self.0.saturating_add(delta.0))
    }

    #[inline]
    pub fn saturating_sub(self, delta: TimeDelta<T>) -> Self {
        TimePoint(self.0.saturating_sub(delta.0))
    }

    /// Returns the half-open interval `[self, self + len)`.
    ///
    /// Returns `None` if `len` is negative or the end overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::time::{TimeDelta, TimePoint};
    ///
    /// let slot = TimePoint::new(8i64).span_of(TimeDelta::new(2)).unwrap();
    /// assert!(slot.contains(TimePoint::new(9)));
    /// assert!(!slot.contains(TimePoint::new(10)));
    /// ```
    #[inline]
    pub fn span_of(self, len: TimeDelta<T>) -> Option<TimeInterval<T>> {
        if len.is_negative() {
            return None;
        }
        self.checked_add(len)
            .map(|end| Interval::closed_open(self, end))
    }
}

impl<T: PrimInt + Display + Signed> Display for TimeDelta<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeDelta({})", self.0)
    }
}

impl<T: PrimInt + Signed> Add<TimeDelta<T>> for TimePoint<T> {
    type Output = TimePoint<T>;

    #[inline]
    fn add(self, rhs: TimeDelta<T>) -> Self::Output {
        TimePoint(
            self.0
                .checked_add(&rhs.0)
                .expect("overflow in TimePoint + TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> AddAssign<TimeDelta<T>> for TimePoint<T> {
    fn add_assign(&mut self, rhs: TimeDelta<T>) {
        self.0 = self
            .0
            .checked_add(&rhs.0)
            .expect("overflow in TimePoint += TimeDelta");
    }
}

impl<T: PrimInt + Signed> Sub<TimeDelta<T>> for TimePoint<T> {
    type Output = TimePoint<T>;

    fn sub(self, rhs: TimeDelta<T>) -> Self::Output {
        TimePoint(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in TimePoint - TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> SubAssign<TimeDelta<T>> for TimePoint<T> {
    fn sub_assign(&mut self, rhs: TimeDelta<T>) {
        self.0 = self
            .0
            .checked_sub(&rhs.0)
            .expect("underflow in TimePoint -= TimeDelta");
    }
}

impl<T: PrimInt + Signed> Sub<TimePoint<T>> for TimePoint<T> {
    type Output = TimeDelta<T>;

    fn sub(self, rhs: TimePoint<T>) -> Self::Output {
        TimeDelta::new(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in TimePoint - TimePoint"),
        )
    }
}

impl<T: PrimInt + Signed> CheckedDistance for TimePoint<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn checked_distance(self, origin: Self) -> Option<Self::Output> {
        self.0.checked_sub(&origin.0).map(TimeDelta::new)
    }
}

impl<T: PrimInt + Signed> Add for TimeDelta<T> {
    type Output = TimeDelta<T>;

    fn add(self, rhs: Self) -> Self::Output {
        TimeDelta::new(
            self.0
                .checked_add(&rhs.0)
                .expect("overflow in TimeDelta + TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> CheckedAdd for TimeDelta<T> {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(TimeDelta)
    }
}

impl<T: PrimInt + Signed> SaturatingAdd for TimeDelta<T> {
    fn saturating_add(&self, rhs: &Self) -> Self {
        TimeDelta(self.0.saturating_add(rhs.0))
    }
}

impl<T: PrimInt + Signed> Sub for TimeDelta<T> {
    type Output = TimeDelta<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        TimeDelta(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in TimeDelta - TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> CheckedSub for TimeDelta<T> {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_sub(&rhs.0).map(TimeDelta)
    }
}

impl<T: PrimInt + Signed> SaturatingSub for TimeDelta<T> {
    fn saturating_sub(&self, rhs: &Self) -> Self {
        TimeDelta(self.0.saturating_sub(rhs.0))
    }
}

impl<T: PrimInt + Signed> Neg for TimeDelta<T> {
    type Output = TimeDelta<T>;

    fn neg(self) -> Self::Output {
        TimeDelta::new(
            T::zero()
                .checked_sub(&self.0)
                .expect("underflow in -TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Div<T> for TimeDelta<T> {
    type Output = TimeDelta<T>;

    fn div(self, rhs: T) -> Self::Output {
        TimeDelta::new(
            self.0
                .checked_div(&rhs)
                .expect("div-by-zero or overflow in TimeDelta / scalar"),
        )
    }
}

impl<T: PrimInt + Signed> Zero for TimeDelta<T> {
    #[inline]
    fn zero() -> Self {
        TimeDelta(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T: PrimInt + Signed> Halve for TimeDelta<T> {
    #[inline]
    fn halve(self) -> Self {
        TimeDelta(self.0 / (T::one() + T::one()))
    }
}

/// A positive `TimeDelta` steps time points by that delta.
///
/// A zero or negative delta cannot advance and yields `None` in both directions.
///
/// # Examples
///
/// ```
/// use allen_core::scalar::Step;
/// use allen_core::time::{TimeDelta, TimePoint};
///
/// let minute = TimeDelta::new(60i64);
/// assert_eq!(minute.forward(TimePoint::new(0)), Some(TimePoint::new(60)));
/// assert_eq!(minute.backward(TimePoint::new(0)), Some(TimePoint::new(-60)));
/// ```
impl<T: PrimInt + Signed> Step<TimePoint<T>> for TimeDelta<T> {
    #[inline]
    fn forward(&self, value: TimePoint<T>) -> Option<TimePoint<T>> {
        if !self.is_positive() {
            return None;
        }
        value.checked_add(*self)
    }

    #[inline]
    fn backward(&self, value: TimePoint<T>) -> Option<TimePoint<T>> {
        if !self.is_positive() {
            return None;
        }
        value.checked_sub(*self)
    }
}

impl<T: PrimInt + Signed> From<T> for TimeDelta<T> {
    #[inline]
    fn from(v: T) -> Self {
        TimeDelta(v)
    }
}

impl<T: PrimInt + Signed> Default for TimeDelta<T> {
    #[inline]
    fn default() -> Self {
        TimeDelta::zero()
    }
}

impl<T: PrimInt + Signed> Sum for TimeDelta<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::BoundaryValue;

    #[test]
    fn test_time_point_creation() {
        let tp = TimePoint::new(42);
        assert_eq!(tp.value(), 42);
    }

    #[test]
    fn test_time_point_display() {
        let tp = TimePoint::new(42);
        assert_eq!(format!("{}", tp), "TimePoint(42)");
    }

    #[test]
    fn test_time_interval_display() {
        let interval: TimeInterval<i32> =
            Interval::closed_open(TimePoint::new(10), TimePoint::new(20));
        assert_eq!(format!("{}", interval), "[TimePoint(10), TimePoint(20))");
    }

    #[test]
    fn test_timedelta_display() {
        let delta = TimeDelta::new(-10);
        assert_eq!(format!("{}", delta), "TimeDelta(-10)");
    }

    #[test]
    fn test_timedelta_abs_and_sign() {
        assert_eq!(TimeDelta::new(-42).abs().value(), 42);
        assert!(TimeDelta::new(-1).is_negative());
        assert!(TimeDelta::new(1).is_positive());
        assert!(TimeDelta::new(0).is_zero());
    }

    #[test]
    fn test_timepoint_arithmetic() {
        let tp = TimePoint::new(10);
        assert_eq!(tp + TimeDelta::new(5), TimePoint::new(15));
        assert_eq!(tp - TimeDelta::new(5), TimePoint::new(5));
        assert_eq!(TimePoint::new(20) - tp, TimeDelta::new(10));

        let mut moving = tp;
        moving += TimeDelta::new(3);
        moving -= TimeDelta::new(1);
        assert_eq!(moving, TimePoint::new(12));
    }

    #[test]
    fn test_timedelta_arithmetic() {
        assert_eq!(TimeDelta::new(10) + TimeDelta::new(5), TimeDelta::new(15));
        assert_eq!(TimeDelta::new(10) - TimeDelta::new(5), TimeDelta::new(5));
        assert_eq!(-TimeDelta::new(42), TimeDelta::new(-42));
        assert_eq!(TimeDelta::new(9) / 3, TimeDelta::new(3));
        let total: TimeDelta<i32> = [1, 2, 3].into_iter().map(TimeDelta::new).sum();
        assert_eq!(total, TimeDelta::new(6));
    }

    #[test]
    fn test_timepoint_checked_and_saturating() {
        assert_eq!(TimePoint::new(i32::MAX).checked_add(TimeDelta::new(1)), None);
        assert_eq!(TimePoint::new(i32::MIN).checked_sub(TimeDelta::new(1)), None);
        assert_eq!(
            TimePoint::new(i32::MAX - 1).saturating_add(TimeDelta::new(5)),
            TimePoint::new(i32::MAX)
        );
        assert_eq!(
            TimePoint::new(i32::MIN + 1).saturating_sub(TimeDelta::new(5)),
            TimePoint::new(i32::MIN)
        );
    }

    #[test]
    #[should_panic(expected = "overflow in TimePoint + TimeDelta")]
    fn test_timepoint_add_panic_on_overflow() {
        let _ = TimePoint::new(i32::MAX) + TimeDelta::new(1);
    }

    #[test]
    #[should_panic(expected = "underflow in -TimeDelta")]
    fn test_timedelta_neg_panic_on_overflow() {
        let _ = -TimeDelta::new(i32::MIN);
    }

    #[test]
    fn test_halve_timedelta() {
        assert_eq!(TimeDelta::new(7i64).halve(), TimeDelta::new(3));
        assert_eq!(TimeDelta::new(-8i64).halve(), TimeDelta::new(-4));
    }

    #[test]
    fn test_step_requires_positive_delta() {
        let zero = TimeDelta::new(0i32);
        assert_eq!(zero.forward(TimePoint::new(1)), None);
        let back = TimeDelta::new(-5i32);
        assert_eq!(back.backward(TimePoint::new(1)), None);
        let five = TimeDelta::new(5i32);
        assert_eq!(five.forward(TimePoint::new(1)), Some(TimePoint::new(6)));
        assert_eq!(five.backward(TimePoint::new(i32::MIN)), None);
    }

    #[test]
    fn test_span_of() {
        let tp = TimePoint::new(100i64);
        let slot = tp.span_of(TimeDelta::new(30)).unwrap();
        assert_eq!(slot.start(), BoundaryValue::Finite(TimePoint::new(100)));
        assert_eq!(slot.end(), BoundaryValue::Finite(TimePoint::new(130)));
        assert!(tp.span_of(TimeDelta::new(-1)).is_none());
        assert!(TimePoint::new(i64::MAX).span_of(TimeDelta::new(1)).is_none());
    }

    #[test]
    fn test_time_interval_length_is_a_delta() {
        let day: TimeInterval<i64> =
            Interval::closed(TimePoint::new(0), TimePoint::new(86_400));
        assert_eq!(day.length(), BoundaryValue::Finite(TimeDelta::new(86_400)));
        assert_eq!(day.centre(), Some(TimePoint::new(43_200)));
        assert_eq!(day.radius(), Some(TimeDelta::new(43_200)));
    }

    #[test]
    fn test_time_point_distance_is_checked() {
        let early = TimePoint::new(i64::MIN);
        let late = TimePoint::new(i64::MAX);
        assert_eq!(late.checked_distance(early), None);
        assert_eq!(
            TimePoint::new(90i64).checked_distance(TimePoint::new(30)),
            Some(TimeDelta::new(60))
        );

        let everything: TimeInterval<i64> = Interval::closed(early, late);
        assert!(matches!(
            everything.checked_length(),
            Err(crate::err::IntervalError::UnsupportedOperation(_))
        ));
        assert_eq!(everything.radius(), None);
        assert_eq!(everything.centre(), None);
    }

    #[test]
    #[should_panic(expected = "underflow in TimePoint - TimePoint")]
    fn test_time_interval_length_panics_on_overflow() {
        let everything: TimeInterval<i64> =
            Interval::closed(TimePoint::new(i64::MIN), TimePoint::new(i64::MAX));
        let _ = everything.length();
    }
}
