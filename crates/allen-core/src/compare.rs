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

//! # Boundary Comparers
//!
//! The four primitive comparisons every relation and derived operation is
//! built on. Each compares one side of `a` with one side of `b`, first by
//! value and, when the values are equal, by the boundary kinds:
//!
//! | comparer               | tie rule                                     |
//! |------------------------|----------------------------------------------|
//! | `compare_start`        | a closed start begins before an open one     |
//! | `compare_end`          | a closed end finishes after an open one      |
//! | `compare_end_to_start` | both inclusive: `Greater`, otherwise `Equal` |
//! | `compare_start_to_end` | both inclusive: `Less`, otherwise `Equal`    |
//!
//! For the cross comparers, `Equal` means the intervals touch at a single value
//! that at least one of them excludes, so they meet without overlapping. Ties
//! only happen between finite values, since two equal infinities on the same
//! side are both `Unbounded`.
//!
//! The `try_` variants return an error for the canonical empty interval, whose
//! boundaries have no position. The plain variants panic instead.

use crate::{bound::BoundaryValue, err::IntervalError, interval::Interval, kind::BoundaryKind};
use std::cmp::Ordering;

#[inline]
fn value_order<T: PartialOrd>(
    a: &BoundaryValue<T>,
    b: &BoundaryValue<T>,
) -> Result<Ordering, IntervalError> {
    a.try_cmp(b)
}

#[inline]
fn unwrap_order(result: Result<Ordering, IntervalError>) -> Ordering {
    match result {
        Ok(o) => o,
        Err(e) => panic!("{e}"),
    }
}

/// Orders the starts of `a` and `b`.
///
/// # Errors
///
/// Returns [`IntervalError::InvalidState`] if either interval is the
/// canonical empty interval.
#[inline]
pub fn try_compare_start<T: PartialOrd + Copy>(
    a: &Interval<T>,
    b: &Interval<T>,
) -> Result<Ordering, IntervalError> {
    Ok(value_order(&a.start(), &b.start())?.then_with(|| {
        match (a.start_kind(), b.start_kind()) {
            (BoundaryKind::Closed, BoundaryKind::Open) => Ordering::Less,
            (BoundaryKind::Open, BoundaryKind::Closed) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }))
}

/// Orders the ends of `a` and `b`.
///
/// # Errors
///
/// Returns [`IntervalError::InvalidState`] if either interval is the
/// canonical empty interval.
#[inline]
pub fn try_compare_end<T: PartialOrd + Copy>(
    a: &Interval<T>,
    b: &Interval<T>,
) -> Result<Ordering, IntervalError> {
    Ok(value_order(&a.end(), &b.end())?.then_with(|| {
        match (a.end_kind(), b.end_kind()) {
            (BoundaryKind::Closed, BoundaryKind::Open) => Ordering::Greater,
            (BoundaryKind::Open, BoundaryKind::Closed) => Ordering::Less,
            _ => Ordering::Equal,
        }
    }))
}

/// Orders the end of `a` against the start of `b`.
///
/// # Errors
///
/// Returns [`IntervalError::InvalidState`] if either interval is the
/// canonical empty interval.
#[inline]
pub fn try_compare_end_to_start<T: PartialOrd + Copy>(
    a: &Interval<T>,
    b: &Interval<T>,
) -> Result<Ordering, IntervalError> {
    Ok(value_order(&a.end(), &b.start())?.then_with(|| {
        match (a.end_kind().is_inclusive(), b.start_kind().is_inclusive()) {
            (true, true) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }))
}

/// Orders the start of `a` against the end of `b`.
///
/// # Errors
///
/// Returns [`IntervalError::InvalidState`] if either interval is the
/// canonical empty interval.
#[inline]
pub fn try_compare_start_to_end<T: PartialOrd + Copy>(
    a: &Interval<T>,
    b: &Interval<T>,
) -> Result<Ordering, IntervalError> {
    Ok(value_order(&a.start(), &b.end())?.then_with(|| {
        match (a.start_kind().is_inclusive(), b.end_kind().is_inclusive()) {
            (true, true) => Ordering::Less,
            _ => Ordering::Equal,
        }
    }))
}

/// Orders the starts of `a` and `b`; on equal values a closed start comes first.
///
/// # Panics
///
/// Panics if either interval is the canonical empty interval.
///
/// # Examples
///
/// ```
/// use allen_core::compare::compare_start;
/// use allen_core::interval::Interval;
/// use std::cmp::Ordering;
///
/// let closed = Interval::closed(1, 3);
/// assert_eq!(compare_start(&closed, &Interval::open(1, 3)), Ordering::Less);
/// assert_eq!(compare_start(&Interval::at_most(0), &closed), Ordering::Less);
/// ```
#[inline]
pub fn compare_start<T: PartialOrd + Copy>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    unwrap_order(try_compare_start(a, b))
}

/// Orders the ends of `a` and `b`; on equal values a closed end comes last.
///
/// # Panics
///
/// Panics if either interval is the canonical empty interval.
///
/// # Examples
///
/// ```
/// use allen_core::compare::compare_end;
/// use allen_core::interval::Interval;
/// use std::cmp::Ordering;
///
/// let closed = Interval::closed(1, 3);
/// assert_eq!(compare_end(&closed, &Interval::open(1, 3)), Ordering::Greater);
/// ```
#[inline]
pub fn compare_end<T: PartialOrd + Copy>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    unwrap_order(try_compare_end(a, b))
}

/// Orders the end of `a` against the start of `b`.
///
/// `Equal` means `a` ends exactly where `b` begins and at least one of them
/// excludes the shared value.
///
/// # Panics
///
/// Panics if either interval is the canonical empty interval.
///
/// # Examples
///
/// ```
/// use allen_core::compare::compare_end_to_start;
/// use allen_core::interval::Interval;
/// use std::cmp::Ordering;
///
/// let b = Interval::closed_open(5, 9);
/// assert_eq!(compare_end_to_start(&Interval::closed_open(0, 5), &b), Ordering::Equal);
/// assert_eq!(compare_end_to_start(&Interval::closed(0, 5), &b), Ordering::Greater);
/// assert_eq!(compare_end_to_start(&Interval::closed(0, 4), &b), Ordering::Less);
///
/// let open = Interval::open(5, 9);
/// assert_eq!(compare_end_to_start(&Interval::open(0, 5), &open), Ordering::Equal);
/// ```
#[inline]
pub fn compare_end_to_start<T: PartialOrd + Copy>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    unwrap_order(try_compare_end_to_start(a, b))
}

/// Orders the start of `a` against the end of `b`. Mirror of [`compare_end_to_start`].
///
/// # Panics
///
/// Panics if either interval is the canonical empty interval.
#[inline]
pub fn compare_start_to_end<T: PartialOrd + Copy>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    unwrap_order(try_compare_start_to_end(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_start_by_value_then_kind() {
        let closed = |a, b| Interval::closed(a, b);
        assert_eq!(compare_start(&closed(1, 5), &closed(2, 5)), Ordering::Less);
        assert_eq!(compare_start(&closed(3, 5), &closed(2, 5)), Ordering::Greater);
        assert_eq!(compare_start(&closed(2, 5), &closed(2, 9)), Ordering::Equal);
        assert_eq!(
            compare_start(&Interval::open(2, 5), &closed(2, 5)),
            Ordering::Greater
        );
        assert_eq!(
            compare_start(&closed(2, 5), &Interval::open(2, 5)),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_start_with_infinities() {
        let left = Interval::<i32>::at_most(0);
        let all = Interval::<i32>::unbounded();
        assert_eq!(compare_start(&left, &all), Ordering::Equal);
        assert_eq!(
            compare_start(&Interval::closed(i32::MIN, 0), &left),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_end_by_value_then_kind() {
        let closed = Interval::closed(1, 5);
        assert_eq!(
            compare_end(&closed, &Interval::closed(1, 6)),
            Ordering::Less
        );
        assert_eq!(
            compare_end(&closed, &Interval::closed_open(1, 5)),
            Ordering::Greater
        );
        assert_eq!(
            compare_end(&Interval::open(1, 5), &closed),
            Ordering::Less
        );
        assert_eq!(
            compare_end(&Interval::at_least(1), &closed),
            Ordering::Greater
        );
        assert_eq!(
            compare_end(&Interval::at_least(1), &Interval::greater_than(9)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_end_to_start_tie_table() {
        let ends = [
            (Interval::closed(0, 5), true),
            (Interval::closed_open(0, 5), false),
        ];
        let starts = [
            (Interval::closed(5, 9), true),
            (Interval::open_closed(5, 9), false),
        ];
        for (a, a_inc) in ends {
            for (b, b_inc) in starts {
                let expected = if a_inc && b_inc {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                };
                assert_eq!(compare_end_to_start(&a, &b), expected, "{a} vs {b}");
                assert_eq!(
                    compare_start_to_end(&b, &a),
                    expected.reverse(),
                    "{b} vs {a}"
                );
            }
        }
    }

    #[test]
    fn test_touch_excluded_by_both_sides_is_equal() {
        let a = Interval::closed_open(0, 5);
        let b = Interval::open_closed(5, 9);
        assert_eq!(compare_end_to_start(&a, &b), Ordering::Equal);
        assert_eq!(compare_start_to_end(&b, &a), Ordering::Equal);
        assert_eq!(
            compare_end_to_start(&Interval::less_than(0), &Interval::greater_than(0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_cross_comparers_away_from_ties() {
        let a = Interval::closed(0, 2);
        let b = Interval::closed(5, 9);
        assert_eq!(compare_end_to_start(&a, &b), Ordering::Less);
        assert_eq!(compare_start_to_end(&b, &a), Ordering::Greater);
        assert_eq!(compare_end_to_start(&b, &a), Ordering::Greater);
        assert_eq!(compare_start_to_end(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_try_variants_report_canonical_empty() {
        let e = Interval::<i32>::empty();
        let a = Interval::closed(0, 1);
        assert!(matches!(
            try_compare_start(&e, &a),
            Err(IntervalError::InvalidState(_))
        ));
        assert!(try_compare_end(&a, &e).is_err());
        assert!(try_compare_end_to_start(&a, &e).is_err());
        assert!(try_compare_start_to_end(&e, &a).is_err());
    }

    #[test]
    #[should_panic(expected = "invalid state")]
    fn test_plain_comparer_panics_on_canonical_empty() {
        let _ = compare_end(&Interval::<i32>::empty(), &Interval::closed(0, 1));
    }
}
