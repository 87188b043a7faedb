//! Monomial orderings.
//!
//! Every ordering here is compatible with multiplication: if `a > b` then
//! `a*m > b*m`. The splitting and shifting steps of fast multiplication
//! rely on this to keep term sequences sorted without re-sorting.

use std::cmp::Ordering;

use crate::monomial::{cmp_grevlex, cmp_grlex, cmp_lex, Monomial};

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff
    /// the first nonzero difference (a-d, b-e, c-f) is positive.
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then uses reverse lex (last variable first)
    /// with the comparison reversed.
    #[default]
    Grevlex,
}

impl MonomialOrder {
    /// Compares two monomials according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => cmp_lex(a, b),
            MonomialOrder::Grlex => cmp_grlex(a, b),
            MonomialOrder::Grevlex => cmp_grevlex(a, b),
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_order() {
        let order = MonomialOrder::Lex;

        let x = Monomial::var(0, 2);
        let y = Monomial::var(1, 2);
        let y2 = y.mul(&y);

        assert_eq!(order.compare(&x, &y), Ordering::Greater);
        // first variable dominates
        assert_eq!(order.compare(&x, &y2), Ordering::Greater);
    }

    #[test]
    fn test_graded_orders_prefer_degree() {
        let x = Monomial::var(0, 2);
        let y2 = Monomial::from_exponents(&[0, 2]);

        assert_eq!(MonomialOrder::Grlex.compare(&y2, &x), Ordering::Greater);
        assert_eq!(MonomialOrder::Grevlex.compare(&y2, &x), Ordering::Greater);
    }

    #[test]
    fn test_compatible_with_division() {
        // a > b stays a > b after removing a common factor x^2
        for order in [MonomialOrder::Lex, MonomialOrder::Grlex, MonomialOrder::Grevlex] {
            let mut a = Monomial::from_exponents(&[3, 1, 0]);
            let mut b = Monomial::from_exponents(&[2, 0, 4]);
            let before = order.compare(&a, &b);
            a.shift_down(0, 2);
            b.shift_down(0, 2);
            assert_eq!(order.compare(&a, &b), before, "{order}");
        }
    }
}
