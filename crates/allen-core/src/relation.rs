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

//! # Interval Relations
//!
//! Classifies a pair of intervals into one of Allen's thirteen relations.
//! The relations are laid out on a timeline `Before = 0 .. After = 12` so
//! that swapping the operands mirrors the index (`12 - r`), and the two
//! ambiguous cells of the start/end table are resolved by offsetting
//! `Meets` or `MetBy` with a cross comparer.

use crate::{
    compare::{compare_end, compare_end_to_start, compare_start, compare_start_to_end},
    err::IntervalError,
    interval::Interval,
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};
use tracing::trace;

/// One of the thirteen ways two non-empty intervals `A` and `B` can relate.
///
/// Each variant reads as "A *relation* B".
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relation {
    /// A ends before B starts, with a gap between them.
    Before = 0,
    /// A ends where B starts and at least one of them excludes the shared value.
    Meets = 1,
    /// A starts first and ends inside B.
    Overlaps = 2,
    /// Same start, A ends first.
    Starts = 3,
    /// A lies strictly inside B.
    ContainedBy = 4,
    /// Same end, A starts later.
    Finishes = 5,
    Equal = 6,
    /// Same end, A starts earlier.
    FinishedBy = 7,
    /// B lies strictly inside A.
    Contains = 8,
    /// Same start, A ends later.
    StartedBy = 9,
    /// B starts first and ends inside A.
    OverlappedBy = 10,
    /// B ends where A starts.
    MetBy = 11,
    /// A starts after B ends, with a gap between them.
    After = 12,
}

impl Relation {
    /// Every relation in timeline order.
    pub const ALL: [Relation; 13] = [
        Relation::Before,
        Relation::Meets,
        Relation::Overlaps,
        Relation::Starts,
        Relation::ContainedBy,
        Relation::Finishes,
        Relation::Equal,
        Relation::FinishedBy,
        Relation::Contains,
        Relation::StartedBy,
        Relation::OverlappedBy,
        Relation::MetBy,
        Relation::After,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the relation of `B` to `A` given the relation of `A` to `B`.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::relation::Relation;
    ///
    /// assert_eq!(Relation::Before.reflect(), Relation::After);
    /// assert_eq!(Relation::Starts.reflect(), Relation::StartedBy);
    /// assert_eq!(Relation::Equal.reflect(), Relation::Equal);
    /// ```
    #[inline]
    pub const fn reflect(self) -> Self {
        Self::ALL[(12 - self.index()) as usize]
    }

    /// Returns `true` if the two intervals share at least one value.
    #[inline]
    pub const fn is_overlapping(self) -> bool {
        matches!(self.index(), 2..=10)
    }

    /// Returns `true` for `Meets` and `MetBy`.
    #[inline]
    pub const fn is_touching(self) -> bool {
        matches!(self, Self::Meets | Self::MetBy)
    }

    /// Moves along the timeline by one step in the direction of `ordering`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidState`] if the step leaves the timeline.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_core::relation::Relation;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(Relation::Meets.offset(Ordering::Less), Ok(Relation::Before));
    /// assert_eq!(Relation::MetBy.offset(Ordering::Greater), Ok(Relation::After));
    /// assert!(Relation::After.offset(Ordering::Greater).is_err());
    /// ```
    pub fn offset(self, ordering: Ordering) -> Result<Self, IntervalError> {
        let target = i16::from(self.index()) + i16::from(ordering as i8);
        u8::try_from(target)
            .map_err(|_| Self::off_timeline())
            .and_then(Self::try_from)
    }

    #[inline]
    const fn off_timeline() -> IntervalError {
        IntervalError::invalid_state("Relation::offset", "offset leaves the relation timeline")
    }
}

impl TryFrom<u8> for Relation {
    type Error = IntervalError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(Self::off_timeline)
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The result of relating two intervals, either of which may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationOutcome {
    Related(Relation),
    /// Only the first interval is empty.
    FirstEmpty,
    /// Only the second interval is empty.
    SecondEmpty,
    BothEmpty,
}

impl RelationOutcome {
    /// Swaps the roles of the two operands.
    #[inline]
    pub const fn reflect(self) -> Self {
        match self {
            Self::Related(r) => Self::Related(r.reflect()),
            Self::FirstEmpty => Self::SecondEmpty,
            Self::SecondEmpty => Self::FirstEmpty,
            Self::BothEmpty => Self::BothEmpty,
        }
    }

    #[inline]
    pub const fn relation(self) -> Option<Relation> {
        match self {
            Self::Related(r) => Some(r),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_related(self) -> bool {
        matches!(self, Self::Related(_))
    }
}

impl From<Relation> for RelationOutcome {
    #[inline]
    fn from(r: Relation) -> Self {
        Self::Related(r)
    }
}

/// Classifies how `a` relates to `b`.
///
/// Emptiness is checked first. For two non-empty intervals the starts and
/// ends are compared and the pair of orderings selects the relation:
///
/// | start | end | relation                                         |
/// |-------|-----|--------------------------------------------------|
/// | `=`   | `=` | `Equal`                                          |
/// | `=`   | `<` | `Starts`                                         |
/// | `>`   | `<` | `ContainedBy`                                    |
/// | `>`   | `=` | `Finishes`                                       |
/// | `<`   | `=` | `FinishedBy`                                     |
/// | `<`   | `>` | `Contains`                                       |
/// | `=`   | `>` | `StartedBy`                                      |
/// | `<`   | `<` | `Meets` offset by `compare_end_to_start(a, b)`   |
/// | `>`   | `>` | `MetBy` offset by `compare_start_to_end(a, b)`   |
///
/// # Examples
///
/// ```
/// use allen_core::interval::Interval;
/// use allen_core::relation::{relation, Relation, RelationOutcome};
///
/// let a = Interval::closed_open(0, 5);
/// let meets = relation(&a, &Interval::closed_open(5, 9));
/// assert_eq!(meets, RelationOutcome::Related(Relation::Meets));
/// let overlaps = relation(&a, &Interval::closed(3, 9));
/// assert_eq!(overlaps, RelationOutcome::Related(Relation::Overlaps));
/// assert_eq!(relation(&a, &Interval::empty()), RelationOutcome::SecondEmpty);
/// ```
pub fn relation<T: PartialOrd + Copy>(a: &Interval<T>, b: &Interval<T>) -> RelationOutcome {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return RelationOutcome::BothEmpty,
        (true, false) => return RelationOutcome::FirstEmpty,
        (false, true) => return RelationOutcome::SecondEmpty,
        (false, false) => {}
    }

    let s = compare_start(a, b);
    let e = compare_end(a, b);
    let r = match (s, e) {
        (Ordering::Equal, Ordering::Equal) => Relation::Equal,
        (Ordering::Equal, Ordering::Less) => Relation::Starts,
        (Ordering::Greater, Ordering::Less) => Relation::ContainedBy,
        (Ordering::Greater, Ordering::Equal) => Relation::Finishes,
        (Ordering::Less, Ordering::Equal) => Relation::FinishedBy,
        (Ordering::Less, Ordering::Greater) => Relation::Contains,
        (Ordering::Equal, Ordering::Greater) => Relation::StartedBy,
        (Ordering::Less, Ordering::Less) => {
            offset_or_panic(Relation::Meets, compare_end_to_start(a, b))
        }
        (Ordering::Greater, Ordering::Greater) => {
            offset_or_panic(Relation::MetBy, compare_start_to_end(a, b))
        }
    };
    trace!(start = ?s, end = ?e, relation = ?r, "classified interval pair");
    RelationOutcome::Related(r)
}

#[inline]
fn offset_or_panic(base: Relation, ordering: Ordering) -> Relation {
    match base.offset(ordering) {
        Ok(r) => r,
        Err(e) => panic!("{e}"),
    }
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Classifies how `self` relates to `other`. See [`relation`].
    #[inline]
    pub fn relation(&self, other: &Self) -> RelationOutcome {
        relation(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::BoundaryValue;
    use crate::kind::BoundaryKind;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn related(a: &Interval<i32>, b: &Interval<i32>) -> Relation {
        relation(a, b).relation().expect("both operands are non-empty")
    }

    fn random_kind(rng: &mut ChaCha8Rng) -> BoundaryKind {
        if rng.random_range(0..2) == 0 {
            BoundaryKind::Open
        } else {
            BoundaryKind::Closed
        }
    }

    fn random_bound(rng: &mut ChaCha8Rng, infinity: BoundaryValue<i32>) -> BoundaryValue<i32> {
        if rng.random_range(0..8) == 0 {
            infinity
        } else {
            BoundaryValue::Finite(rng.random_range(-6..=6))
        }
    }

    fn random_interval(rng: &mut ChaCha8Rng) -> Interval<i32> {
        let start = random_bound(rng, BoundaryValue::NegativeInfinity);
        let end = random_bound(rng, BoundaryValue::PositiveInfinity);
        let sk = random_kind(rng);
        let ek = random_kind(rng);
        Interval::from_bounds(start, end, sk, ek).expect("generated bounds are valid")
    }

    #[test]
    fn test_relation_index_round_trip() {
        for (i, r) in Relation::ALL.iter().enumerate() {
            assert_eq!(usize::from(r.index()), i);
            assert_eq!(Relation::try_from(r.index()), Ok(*r));
        }
        assert!(matches!(Relation::try_from(13), Err(IntervalError::InvalidState(_))));
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(Relation::Meets.offset(Ordering::Equal), Ok(Relation::Meets));
        assert_eq!(Relation::Meets.offset(Ordering::Greater), Ok(Relation::Overlaps));
        assert_eq!(Relation::MetBy.offset(Ordering::Less), Ok(Relation::OverlappedBy));
        assert!(Relation::Before.offset(Ordering::Less).is_err());
    }

    #[test]
    fn test_every_table_cell() {
        let b = Interval::closed(10, 20);
        assert_eq!(related(&Interval::closed(0, 5), &b), Relation::Before);
        assert_eq!(related(&Interval::closed_open(0, 10), &b), Relation::Meets);
        assert_eq!(related(&Interval::closed(0, 15), &b), Relation::Overlaps);
        assert_eq!(related(&Interval::closed(10, 15), &b), Relation::Starts);
        assert_eq!(related(&Interval::closed(12, 15), &b), Relation::ContainedBy);
        assert_eq!(related(&Interval::closed(15, 20), &b), Relation::Finishes);
        assert_eq!(related(&Interval::closed(10, 20), &b), Relation::Equal);
        assert_eq!(related(&Interval::closed(5, 20), &b), Relation::FinishedBy);
        assert_eq!(related(&Interval::closed(5, 25), &b), Relation::Contains);
        assert_eq!(related(&Interval::closed(10, 25), &b), Relation::StartedBy);
        assert_eq!(related(&Interval::closed(15, 25), &b), Relation::OverlappedBy);
        assert_eq!(related(&Interval::open_closed(20, 25), &b), Relation::MetBy);
        assert_eq!(related(&Interval::closed(22, 25), &b), Relation::After);
    }

    #[test]
    fn test_tie_breaks_at_shared_value() {
        let half_open = Interval::closed_open(0, 5);
        let closed = Interval::closed(0, 5);
        assert_eq!(
            related(&half_open, &Interval::closed_open(5, 9)),
            Relation::Meets
        );
        assert_eq!(related(&closed, &Interval::closed(5, 9)), Relation::Overlaps);
        assert_eq!(related(&closed, &Interval::open(0, 5)), Relation::Contains);
        assert_eq!(related(&Interval::open(0, 5), &closed), Relation::ContainedBy);
    }

    #[test]
    fn test_touch_excluded_by_both_sides_meets() {
        let left = Interval::closed_open(0, 5);
        let right = Interval::open_closed(5, 9);
        assert_eq!(related(&left, &right), Relation::Meets);
        assert_eq!(related(&right, &left), Relation::MetBy);
        let open_left = Interval::open(0, 5);
        let open_right = Interval::open(5, 9);
        assert_eq!(related(&open_left, &open_right), Relation::Meets);
        assert_eq!(related(&open_right, &open_left), Relation::MetBy);
        assert_eq!(
            related(&Interval::less_than(0), &Interval::greater_than(0)),
            Relation::Meets
        );
    }

    #[test]
    fn test_unbounded_operands() {
        let left = Interval::at_most(3);
        let right = Interval::at_least(3);
        assert_eq!(related(&left, &right), Relation::Overlaps);
        assert_eq!(related(&Interval::less_than(3), &right), Relation::Meets);
        assert_eq!(related(&Interval::unbounded(), &Interval::closed(0, 1)), Relation::Contains);
        assert_eq!(related(&Interval::unbounded(), &left), Relation::StartedBy);
        assert_eq!(related(&right, &Interval::unbounded()), Relation::Finishes);
    }

    #[test]
    fn test_point_intervals() {
        let p = Interval::point(5);
        assert_eq!(related(&p, &Interval::closed(5, 9)), Relation::Starts);
        assert_eq!(related(&p, &Interval::closed(0, 5)), Relation::Finishes);
        assert_eq!(related(&p, &Interval::open_closed(5, 9)), Relation::Meets);
        assert_eq!(related(&p, &p), Relation::Equal);
    }

    #[test]
    fn test_emptiness_precedence() {
        let a = Interval::closed(0, 1);
        let reversed = Interval::closed(5, 3);
        let canonical = Interval::empty();
        assert_eq!(relation(&reversed, &canonical), RelationOutcome::BothEmpty);
        assert_eq!(relation(&canonical, &a), RelationOutcome::FirstEmpty);
        assert_eq!(relation(&a, &reversed), RelationOutcome::SecondEmpty);
        assert_eq!(relation(&a, &reversed).reflect(), RelationOutcome::FirstEmpty);
        assert_eq!(relation(&a, &reversed).relation(), None);
    }

    #[test]
    fn test_reflection_and_reflexivity_on_random_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for _ in 0..2_000 {
            let a = random_interval(&mut rng);
            let b = random_interval(&mut rng);
            assert_eq!(relation(&a, &b), relation(&b, &a).reflect(), "{a} vs {b}");
            if !a.is_empty() {
                assert_eq!(relation(&a, &a), RelationOutcome::Related(Relation::Equal));
            }
        }
    }

    #[test]
    fn test_overlap_matches_shared_points_on_random_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..2_000 {
            let a = random_interval(&mut rng);
            let b = random_interval(&mut rng);
            let Some(r) = relation(&a, &b).relation() else {
                continue;
            };
            let shares = (-8..=8).any(|x| a.contains(x) && b.contains(x));
            let both_reach_infinity = matches!(
                (a.end(), b.end()),
                (BoundaryValue::PositiveInfinity, BoundaryValue::PositiveInfinity)
            ) || matches!(
                (a.start(), b.start()),
                (BoundaryValue::NegativeInfinity, BoundaryValue::NegativeInfinity)
            );
            if shares || both_reach_infinity {
                assert!(r.is_overlapping(), "{a} vs {b}: {r}");
            }
        }
    }
}
