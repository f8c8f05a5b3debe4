//! Floating-point comparison within one unit in the last place of `1.0`.
//!
//! Every equality and ordering relation on `Vector` and `Matrix` is built from these primitives.

use std::cmp::Ordering;

/// Tolerance used by all approximate comparisons (machine epsilon for `f64`).
pub const ULP_OF_ONE: f64 = f64::EPSILON;

#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (b - a).abs() <= ULP_OF_ONE
}

#[inline]
pub fn approx_ne(a: f64, b: f64) -> bool {
    !approx_eq(a, b)
}

/// `a` is less than `b` by more than the tolerance.
#[inline]
pub fn approx_lt(a: f64, b: f64) -> bool {
    b - a > ULP_OF_ONE
}

/// `a` is greater than `b` by more than the tolerance.
#[inline]
pub fn approx_gt(a: f64, b: f64) -> bool {
    b - a < -ULP_OF_ONE
}

#[inline]
pub fn approx_le(a: f64, b: f64) -> bool {
    approx_eq(a, b) || approx_lt(a, b)
}

#[inline]
pub fn approx_ge(a: f64, b: f64) -> bool {
    approx_eq(a, b) || approx_gt(a, b)
}

/// Equality with a caller-supplied absolute tolerance.
#[inline]
pub fn approx_eq_within(a: f64, b: f64, tol: f64) -> bool {
    (b - a).abs() <= tol
}

/// Number of element pairs satisfying `pred`. Slices are walked pairwise up to the shorter length.
pub fn count_pairs<F>(lhs: &[f64], rhs: &[f64], pred: F) -> usize
    where F: Fn(f64, f64) -> bool
{
    lhs.iter().zip(rhs.iter()).filter(|&(&l, &r)| pred(l, r)).count()
}

/// All pairs approximately equal, and same length.
pub fn slices_approx_eq(lhs: &[f64], rhs: &[f64]) -> bool {
    lhs.len() == rhs.len() && count_pairs(lhs, rhs, approx_ne) == 0
}

/// Componentwise partial order under approximate comparison.
///
/// `Less` requires every pair to be `<=` and at least one to be strictly `<`; `Greater` mirrors
/// it. Mixed pairs, a length mismatch, or any NaN give `None`.
pub fn partial_cmp_slices(lhs: &[f64], rhs: &[f64]) -> Option<Ordering> {
    if lhs.len() != rhs.len() {
        return None;
    }

    let (mut less, mut greater) = (false, false);
    for (&l, &r) in lhs.iter().zip(rhs.iter()) {
        if approx_lt(l, r) {
            less = true;
        } else if approx_gt(l, r) {
            greater = true;
        } else if !approx_eq(l, r) {
            return None;
        }
    }

    match (less, greater) {
        (false, false) => Some(Ordering::Equal),
        (true, false)  => Some(Ordering::Less),
        (false, true)  => Some(Ordering::Greater),
        (true, true)   => None,
    }
}
