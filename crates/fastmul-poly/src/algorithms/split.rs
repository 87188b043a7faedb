//! Degree splitting around a single variable.
//!
//! `p = low + x_var^t * high` where every term of `low` has degree `< t`
//! in `x_var`. Both halves are obtained by moving terms, and both stay
//! sorted because monomial orders are compatible with division by a
//! common monomial.

use fastmul_rings::Ring;

use crate::poly::Poly;

/// Partitions `p` by the exponent of `var`.
///
/// Returns `(high, low)`: terms with exponent `>= threshold` go to `high`,
/// the rest to `low`. Relative order is kept in both; the exponents of
/// `high` are left untouched (see [`shift_down`]).
#[must_use]
pub fn split<R: Ring>(p: Poly<R>, threshold: u32, var: usize) -> (Poly<R>, Poly<R>) {
    let ring = p.ring();
    let (high, low): (Vec<_>, Vec<_>) = p
        .into_terms()
        .into_iter()
        .partition(|t| t.monomial.exponent(var) >= threshold);
    (Poly::from_sorted(high, ring), Poly::from_sorted(low, ring))
}

/// Divides every term of `p` by `x_var^amount`, in place.
///
/// # Panics
///
/// Panics if some term has exponent below `amount` in `var`.
pub fn shift_down<R: Ring>(p: &mut Poly<R>, amount: u32, var: usize) {
    if amount == 0 {
        return;
    }
    for t in p.terms_mut() {
        t.monomial.shift_down(var, amount);
    }
}

/// Multiplies every term of `p` by `x_var^amount`.
#[must_use]
pub fn shift_up<R: Ring>(p: Poly<R>, amount: u32, var: usize) -> Poly<R> {
    p.mul_var_power(var, amount)
}
