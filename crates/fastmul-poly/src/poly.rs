//! Sparse multivariate polynomials.
//!
//! A polynomial is a vector of terms sorted strictly descending in the
//! ring's monomial order, with like terms combined and no zero
//! coefficients. Because that form is canonical, `==` on polynomials is
//! mathematical equality.
//!
//! Arithmetic that produces a new polynomial from old ones (`+`, `-`,
//! negation, shifting) consumes its operands so that terms are moved,
//! never duplicated. Multiplication borrows.

use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};

use fastmul_rings::Ring;

use crate::algorithms::geobucket::Geobucket;
use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;
use crate::ring::PolyRing;

/// A single term `coeff * monomial`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Term<R: Ring> {
    /// The exponent vector.
    pub monomial: Monomial,
    /// The coefficient.
    pub coeff: R,
}

impl<R: Ring> Term<R> {
    /// Creates a term.
    #[must_use]
    pub fn new(monomial: Monomial, coeff: R) -> Self {
        Self { monomial, coeff }
    }

    /// Raises the term to the e-th power.
    ///
    /// The coefficient goes through the field's integer power (skipped when
    /// it is one); every exponent is multiplied by `e`.
    #[must_use]
    pub fn pow(&self, e: u32) -> Self {
        let coeff = if self.coeff.is_one() {
            R::one()
        } else {
            self.coeff.pow(e)
        };
        let mut monomial = self.monomial.clone();
        monomial.scale(e);
        Self { monomial, coeff }
    }
}

/// A sparse multivariate polynomial.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Poly<R: Ring> {
    /// Terms in strictly descending monomial order.
    terms: Vec<Term<R>>,
    /// The ring this polynomial lives in.
    ring: PolyRing,
}

impl<R: Ring> Poly<R> {
    /// Creates a polynomial from arbitrary terms.
    ///
    /// Terms are sorted, like terms combined, and zeros dropped.
    ///
    /// # Panics
    ///
    /// Panics if a monomial does not have `ring.num_vars()` exponents.
    #[must_use]
    pub fn from_terms(terms: Vec<Term<R>>, ring: PolyRing) -> Self {
        for t in &terms {
            assert_eq!(
                t.monomial.num_vars(),
                ring.num_vars(),
                "monomial {} does not belong to {ring}",
                t.monomial
            );
        }
        Self {
            terms: canonicalize(terms, ring.order()),
            ring,
        }
    }

    /// Creates a polynomial from `(exponents, coefficient)` pairs.
    #[must_use]
    pub fn from_pairs<I>(pairs: I, ring: PolyRing) -> Self
    where
        I: IntoIterator<Item = (Vec<u32>, R)>,
    {
        let terms = pairs
            .into_iter()
            .map(|(e, c)| Term::new(Monomial::from_exponents(&e), c))
            .collect();
        Self::from_terms(terms, ring)
    }

    /// Wraps terms that are already in canonical form.
    pub(crate) fn from_sorted(terms: Vec<Term<R>>, ring: PolyRing) -> Self {
        let poly = Self { terms, ring };
        debug_assert!(poly.is_canonical(), "terms are not in canonical form");
        poly
    }

    /// Creates the single-term polynomial `term` (zero if its coefficient is).
    #[must_use]
    pub fn from_term(term: Term<R>, ring: PolyRing) -> Self {
        Self::from_terms(vec![term], ring)
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(ring: PolyRing) -> Self {
        Self {
            terms: Vec::new(),
            ring,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(ring: PolyRing) -> Self {
        Self::constant(R::one(), ring)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R, ring: PolyRing) -> Self {
        Self::from_term(Term::new(Monomial::one(ring.num_vars()), c), ring)
    }

    /// Creates the variable x_i.
    #[must_use]
    pub fn var(i: usize, ring: PolyRing) -> Self {
        Self::from_term(Term::new(Monomial::var(i, ring.num_vars()), R::one()), ring)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the ring context.
    #[must_use]
    pub fn ring(&self) -> PolyRing {
        self.ring
    }

    /// Returns the terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[Term<R>] {
        &self.terms
    }

    /// Mutable access for in-place exponent rewrites that preserve order.
    pub(crate) fn terms_mut(&mut self) -> &mut [Term<R>] {
        &mut self.terms
    }

    /// Consumes the polynomial, returning its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<Term<R>> {
        self.terms
    }

    /// Returns the maximum exponent of `var` over all terms (0 for zero).
    #[must_use]
    pub fn degree_in(&self, var: usize) -> u32 {
        self.terms
            .iter()
            .map(|t| t.monomial.exponent(var))
            .max()
            .unwrap_or(0)
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.terms
            .iter()
            .map(|t| t.monomial.total_degree())
            .max()
            .unwrap_or(0)
    }

    fn is_canonical(&self) -> bool {
        let order = self.ring.order();
        self.terms.iter().all(|t| !t.coeff.is_zero())
            && self
                .terms
                .windows(2)
                .all(|w| order.compare(&w[0].monomial, &w[1].monomial) == Ordering::Greater)
    }

    /// Restores canonical form after coefficient or exponent rewrites.
    ///
    /// Already sorted input only has its zero terms removed.
    pub fn normalize(&mut self) {
        if self.is_canonical() {
            return;
        }
        let terms = std::mem::take(&mut self.terms);
        self.terms = canonicalize(terms, self.ring.order());
    }

    /// Multiplies by `x_var^k`.
    #[must_use]
    pub fn mul_var_power(mut self, var: usize, k: u32) -> Self {
        if k > 0 {
            for t in &mut self.terms {
                t.monomial.shift_up(var, k);
            }
        }
        self
    }

    /// Multiplies by a single term.
    #[must_use]
    pub fn mul_term(&self, term: &Term<R>) -> Self {
        if term.coeff.is_zero() {
            return Self::zero(self.ring);
        }
        // Monomial orders are compatible with multiplication, so the
        // row stays sorted.
        let terms = self
            .terms
            .iter()
            .map(|t| {
                Term::new(
                    t.monomial.mul(&term.monomial),
                    t.coeff.clone() * term.coeff.clone(),
                )
            })
            .filter(|t| !t.coeff.is_zero())
            .collect();
        Self::from_sorted(terms, self.ring)
    }

    /// Multiplies two polynomials term by term (schoolbook algorithm).
    ///
    /// Each row `t * other` is already sorted; rows are summed in a
    /// geobucket.
    ///
    /// # Panics
    ///
    /// Panics if the operands belong to different rings.
    #[must_use]
    pub fn mul_naive(&self, other: &Self) -> Self {
        assert_eq!(self.ring, other.ring, "operands belong to different rings");

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.ring);
        }

        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut bucket = Geobucket::new(self.ring);
        for t in &smaller.terms {
            bucket.absorb(larger.mul_term(t));
        }
        bucket.drain().0
    }
}

impl<R: Ring> Add for Poly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(self.ring, rhs.ring, "operands belong to different rings");
        let order = self.ring.order();
        Self {
            terms: merge_terms(self.terms, rhs.terms, order),
            ring: self.ring,
        }
    }
}

impl<R: Ring> Neg for Poly<R> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for t in &mut self.terms {
            let c = std::mem::replace(&mut t.coeff, R::zero());
            t.coeff = -c;
        }
        self
    }
}

impl<R: Ring> Sub for Poly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

/// Sorts descending, combines like terms and drops zeros.
fn canonicalize<R: Ring>(mut terms: Vec<Term<R>>, order: MonomialOrder) -> Vec<Term<R>> {
    terms.sort_by(|a, b| order.compare(&b.monomial, &a.monomial));

    let mut out: Vec<Term<R>> = Vec::with_capacity(terms.len());
    for t in terms {
        match out.last_mut() {
            Some(last) if last.monomial == t.monomial => {
                let c = std::mem::replace(&mut last.coeff, R::zero());
                last.coeff = c + t.coeff;
            }
            _ => out.push(t),
        }
    }
    out.retain(|t| !t.coeff.is_zero());
    out
}

/// Merges two canonical term vectors into one, moving every term.
pub(crate) fn merge_terms<R: Ring>(
    a: Vec<Term<R>>,
    b: Vec<Term<R>>,
    order: MonomialOrder,
) -> Vec<Term<R>> {
    if a.is_empty() {
        return b;
    }
    if b.is_empty() {
        return a;
    }

    let mut result = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    let mut next_a = a.next();
    let mut next_b = b.next();

    loop {
        match (next_a.take(), next_b.take()) {
            (Some(x), Some(y)) => match order.compare(&x.monomial, &y.monomial) {
                Ordering::Greater => {
                    result.push(x);
                    next_a = a.next();
                    next_b = Some(y);
                }
                Ordering::Less => {
                    result.push(y);
                    next_a = Some(x);
                    next_b = b.next();
                }
                Ordering::Equal => {
                    let c = x.coeff + y.coeff;
                    if !c.is_zero() {
                        result.push(Term::new(x.monomial, c));
                    }
                    next_a = a.next();
                    next_b = b.next();
                }
            },
            (Some(x), None) => {
                result.push(x);
                result.extend(a);
                break;
            }
            (None, Some(y)) => {
                result.push(y);
                result.extend(b);
                break;
            }
            (None, None) => break,
        }
    }

    result
}

impl<R: Ring> std::fmt::Display for Poly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<_> = self
            .terms
            .iter()
            .map(|t| {
                if t.monomial.is_one() {
                    format!("{:?}", t.coeff)
                } else {
                    format!("{:?}*{}", t.coeff, t.monomial)
                }
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}
