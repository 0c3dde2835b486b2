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

//! # Point Iteration
//!
//! Walks the values of an interval over a discrete scalar, one [`Step`] at a time.

use crate::{bound::BoundaryValue, interval::Interval, kind::BoundaryKind, scalar::Step};
use std::iter::FusedIterator;

/// An iterator that may be absent, in which case it yields nothing.
#[derive(Debug, Clone)]
pub struct MaybeIter<I> {
    inner: Option<I>,
}

impl<I> MaybeIter<I> {
    #[inline]
    pub fn new(inner: Option<I>) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        self.inner.is_none()
    }
}

impl<I: Iterator> Iterator for MaybeIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |i| i.size_hint())
    }
}

impl<I: FusedIterator> FusedIterator for MaybeIter<I> {}

/// The values of an interval, from the first contained value upward.
#[derive(Debug, Clone)]
pub struct Points<'s, T, S: ?Sized> {
    interval: Interval<T>,
    next: Option<T>,
    step: &'s S,
}

impl<T, S> Iterator for Points<'_, T, S>
where
    T: PartialOrd + Copy,
    S: Step<T> + ?Sized,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        if !self.interval.contains(current) {
            return None;
        }
        self.next = self.step.forward(current);
        Some(current)
    }
}

impl<T, S> FusedIterator for Points<'_, T, S>
where
    T: PartialOrd + Copy,
    S: Step<T> + ?Sized,
{
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Iterates the values of the interval using `step`.
    ///
    /// Nothing is yielded for an empty interval or an unbounded start. With
    /// an unbounded end the iteration stops once the step overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::interval::Interval;
    /// use allen_core::scalar::UnitStep;
    ///
    /// let v: Vec<u8> = Interval::open_closed(1, 4).points(&UnitStep).collect();
    /// assert_eq!(v, vec![2, 3, 4]);
    ///
    /// let tail: Vec<u8> = Interval::at_least(253).points(&UnitStep).collect();
    /// assert_eq!(tail, vec![253, 254, 255]);
    /// ```
    pub fn points<'s, S>(&self, step: &'s S) -> MaybeIter<Points<'s, T, S>>
    where
        S: Step<T> + ?Sized,
    {
        if self.is_empty() {
            return MaybeIter::new(None);
        }
        let first = match (self.start(), self.start_kind()) {
            (BoundaryValue::Finite(s), BoundaryKind::Closed) => Some(s),
            (BoundaryValue::Finite(s), _) => step.forward(s),
            _ => return MaybeIter::new(None),
        };
        MaybeIter::new(Some(Points {
            interval: *self,
            next: first,
            step,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        scalar::{FnStep, UnitStep},
        time::{TimeDelta, TimePoint, TimeInterval},
    };

    #[test]
    fn test_points_respect_kinds() {
        let all: Vec<i32> = Interval::closed(1, 3).points(&UnitStep).collect();
        assert_eq!(all, vec![1, 2, 3]);
        let inner: Vec<i32> = Interval::open(1, 3).points(&UnitStep).collect();
        assert_eq!(inner, vec![2]);
        let none: Vec<i32> = Interval::open(1, 2).points(&UnitStep).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_points_absent_for_empty_or_unbounded_start() {
        assert!(Interval::<i32>::empty().points(&UnitStep).is_absent());
        assert!(Interval::closed(3, 1).points(&UnitStep).is_absent());
        assert!(Interval::at_most(3).points(&UnitStep).is_absent());
        assert_eq!(Interval::<i32>::unbounded().points(&UnitStep).size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_points_with_custom_step() {
        let by_five = FnStep::new(|v: i32| v.checked_add(5), |v: i32| v.checked_sub(5));
        let v: Vec<i32> = Interval::closed_open(0, 20).points(&by_five).collect();
        assert_eq!(v, vec![0, 5, 10, 15]);
    }

    #[test]
    fn test_points_over_time() {
        let hour = TimeDelta::new(60i64);
        let shift: TimeInterval<i64> =
            Interval::closed_open(TimePoint::new(0), TimePoint::new(180));
        let starts: Vec<_> = shift.points(&hour).collect();
        assert_eq!(starts, vec![TimePoint::new(0), TimePoint::new(60), TimePoint::new(120)]);
    }

    #[test]
    fn test_points_fused() {
        let mut it = Interval::point(1).points(&UnitStep);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
