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

//! # allen-core
//!
//! Interval algebra over ordered scalars. An [`Interval`](interval::Interval)
//! carries an open, closed or unbounded kind on each side, and any two
//! intervals of the same scalar type can be classified into one of Allen's
//! thirteen relations.
//!
//! ```
//! use allen_core::prelude::*;
//!
//! let morning = Interval::closed_open(8, 12);
//! let lunch = Interval::closed_open(12, 13);
//! assert_eq!(morning.relation(&lunch), RelationOutcome::Related(Relation::Meets));
//! assert_eq!(morning.union(&lunch), Some(Interval::closed_open(8, 13)));
//! ```

pub mod bound;
pub mod compare;
pub mod config;
pub mod err;
pub mod interval;
pub mod iter;
pub mod kind;
pub mod ops;
pub mod relation;
pub mod scalar;
pub mod time;
pub mod typed;

pub mod prelude {
    pub use crate::bound::BoundaryValue;
    pub use crate::compare::{
        compare_end, compare_end_to_start, compare_start, compare_start_to_end,
    };
    pub use crate::config::{EmptyLengthPolicy, MeasureConfig, UnboundedLengthPolicy};
    pub use crate::err::IntervalError;
    pub use crate::interval::Interval;
    pub use crate::kind::{BoundaryKind, BoundaryPair, BoundaryState};
    pub use crate::relation::{Relation, RelationOutcome, relation};
    pub use crate::scalar::{CheckedDistance, FnStep, Halve, Step, UnitStep};
    pub use crate::time::{TimeDelta, TimeInterval, TimePoint};
    pub use crate::typed::{Shape, TypedInterval};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Interval<i64>: Send, Sync, Copy);
    assert_impl_all!(Interval<f64>: Send, Sync, Copy);
    assert_impl_all!(BoundaryValue<TimePoint<i64>>: Send, Sync, Copy);
    assert_impl_all!(Relation: Send, Sync, Copy, std::hash::Hash);
    assert_impl_all!(RelationOutcome: Send, Sync, Copy);
    assert_impl_all!(IntervalError: Send, Sync, std::error::Error);
    assert_impl_all!(TypedInterval<i32, crate::typed::ClosedOpen>: Send, Sync, Copy);
    assert_impl_all!(MeasureConfig: Send, Sync, Default);

    #[test]
    fn test_relations_are_usable_across_threads() {
        let intervals: Vec<Interval<i64>> = (0..8)
            .map(|i| Interval::closed_open(i * 10, i * 10 + 15))
            .collect();
        let shared = std::sync::Arc::new(intervals);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = std::sync::Arc::clone(&shared);
                std::thread::spawn(move || {
                    shared
                        .windows(2)
                        .filter(|w| w[0].overlaps(&w[1]))
                        .count()
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 7);
        }
    }
}
