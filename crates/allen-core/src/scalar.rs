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

//! # Scalar Capabilities
//!
//! Small traits describing what the derived interval operations need from a
//! scalar beyond ordering:
//!
//! - [`Halve`]: halving a distance, used by `radius` and `centre`.
//! - [`CheckedDistance`]: the distance between two values, or `None` when it
//!   does not fit the distance type. Used by `checked_length` and `measure`.
//! - [`Step`]: moving to the neighbouring discrete value, used by
//!   `canonicalize` and point iteration.
//!
//! Continuous scalars (`f32`, `f64`) have no [`Step`] impl. A caller that
//! needs one, for example stepping to the next representable float, supplies
//! its own functions through [`FnStep`].

use num_traits::{CheckedSub, PrimInt};

/// Halving of a distance.
///
/// Integers truncate toward zero, floating point values divide exactly.
///
/// # Examples
///
/// ```
/// use allen_core::scalar::Halve;
///
/// assert_eq!(7i32.halve(), 3);
/// assert_eq!(7.0f64.halve(), 3.5);
/// ```
pub trait Halve: Sized {
    fn halve(self) -> Self;
}

macro_rules! impl_halve_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Halve for $t {
                #[inline(always)]
                fn halve(self) -> Self {
                    self / 2
                }
            }
        )*
    };
}

macro_rules! impl_halve_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Halve for $t {
                #[inline(always)]
                fn halve(self) -> Self {
                    self / 2.0
                }
            }
        )*
    };
}

impl_halve_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_halve_for_float!(f32, f64);

/// The distance `self - origin`, checked for overflow.
///
/// Integers return `None` when the difference leaves their range. Floats
/// never fail; an overflowing difference is an infinity.
///
/// # Examples
///
/// ```
/// use allen_core::scalar::CheckedDistance;
///
/// assert_eq!(9i32.checked_distance(4), Some(5));
/// assert_eq!(i32::MAX.checked_distance(i32::MIN), None);
/// assert_eq!(100i8.checked_distance(-100), None);
/// ```
pub trait CheckedDistance: Sized {
    type Output;

    fn checked_distance(self, origin: Self) -> Option<Self::Output>;
}

macro_rules! impl_checked_distance_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedDistance for $t {
                type Output = $t;

                #[inline(always)]
                fn checked_distance(self, origin: Self) -> Option<Self::Output> {
                    CheckedSub::checked_sub(&self, &origin)
                }
            }
        )*
    };
}

macro_rules! impl_checked_distance_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedDistance for $t {
                type Output = $t;

                #[inline(always)]
                fn checked_distance(self, origin: Self) -> Option<Self::Output> {
                    Some(self - origin)
                }
            }
        )*
    };
}

impl_checked_distance_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_checked_distance_for_float!(f32, f64);

/// A successor/predecessor function over a discrete scalar.
///
/// `forward` returns the next value above `value` and `backward` the next
/// value below it. Both return `None` when no such value exists, e.g. on
/// integer overflow.
pub trait Step<T> {
    fn forward(&self, value: T) -> Option<T>;
    fn backward(&self, value: T) -> Option<T>;
}

impl<T, S> Step<T> for &S
where
    S: Step<T> + ?Sized,
{
    #[inline]
    fn forward(&self, value: T) -> Option<T> {
        (**self).forward(value)
    }

    #[inline]
    fn backward(&self, value: T) -> Option<T> {
        (**self).backward(value)
    }
}

/// Steps primitive integers by one.
///
/// # Examples
///
/// ```
/// use allen_core::scalar::{Step, UnitStep};
///
/// assert_eq!(UnitStep.forward(4u8), Some(5));
/// assert_eq!(UnitStep.backward(0u8), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnitStep;

impl<T: PrimInt> Step<T> for UnitStep {
    #[inline]
    fn forward(&self, value: T) -> Option<T> {
        value.checked_add(&T::one())
    }

    #[inline]
    fn backward(&self, value: T) -> Option<T> {
        value.checked_sub(&T::one())
    }
}

/// Adapts a pair of closures into a [`Step`].
///
/// # Examples
///
/// ```
/// use allen_core::scalar::{FnStep, Step};
///
/// // Even numbers only.
/// let even = FnStep::new(|v: i32| v.checked_add(2), |v: i32| v.checked_sub(2));
/// assert_eq!(even.forward(4), Some(6));
/// assert_eq!(even.backward(4), Some(2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnStep<F, B> {
    forward: F,
    backward: B,
}

impl<F, B> FnStep<F, B> {
    #[inline]
    pub const fn new(forward: F, backward: B) -> Self {
        Self { forward, backward }
    }
}

impl<T, F, B> Step<T> for FnStep<F, B>
where
    F: Fn(T) -> Option<T>,
    B: Fn(T) -> Option<T>,
{
    #[inline]
    fn forward(&self, value: T) -> Option<T> {
        (self.forward)(value)
    }

    #[inline]
    fn backward(&self, value: T) -> Option<T> {
        (self.backward)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halve_integers_truncate_toward_zero() {
        assert_eq!(10i64.halve(), 5);
        assert_eq!(3u32.halve(), 1);
        assert_eq!((-3i32).halve(), -1);
        assert_eq!(0usize.halve(), 0);
    }

    #[test]
    fn test_halve_floats_is_exact() {
        assert_eq!(3.0f32.halve(), 1.5);
        assert_eq!((-1.0f64).halve(), -0.5);
    }

    #[test]
    fn test_checked_distance_reports_overflow() {
        assert_eq!(i32::MAX.checked_distance(i32::MIN), None);
        assert_eq!(0i64.checked_distance(i64::MIN), None);
        assert_eq!(3u8.checked_distance(5), None);
        assert_eq!(200u8.checked_distance(55), Some(145));
        assert_eq!((-5i16).checked_distance(-9), Some(4));
    }

    #[test]
    fn test_checked_distance_on_floats_never_fails() {
        assert_eq!(2.5f64.checked_distance(1.0), Some(1.5));
        assert_eq!(f32::MAX.checked_distance(f32::MIN), Some(f32::INFINITY));
    }

    #[test]
    fn test_unit_step_moves_by_one() {
        assert_eq!(UnitStep.forward(-1i32), Some(0));
        assert_eq!(UnitStep.backward(10u64), Some(9));
    }

    #[test]
    fn test_unit_step_reports_overflow() {
        assert_eq!(UnitStep.forward(i8::MAX), None);
        assert_eq!(UnitStep.backward(i8::MIN), None);
        assert_eq!(UnitStep.backward(0usize), None);
    }

    #[test]
    fn test_step_through_reference() {
        let step = UnitStep;
        let by_ref: &UnitStep = &step;
        assert_eq!(Step::<i32>::forward(&by_ref, 1), Some(2));
    }

    #[test]
    fn test_fn_step_uses_both_closures() {
        let tens = FnStep::new(|v: u32| v.checked_add(10), |v: u32| v.checked_sub(10));
        assert_eq!(tens.forward(5), Some(15));
        assert_eq!(tens.backward(5), None);
    }
}
