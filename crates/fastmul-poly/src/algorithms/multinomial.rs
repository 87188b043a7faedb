//! Powers by the multinomial theorem.
//!
//! For `f = t_0 + ... + t_{k-1}`,
//!
//! ```text
//! f^n = sum over e_0 + ... + e_{k-1} = n of  n! / (e_0! ... e_{k-1}!) * t_0^e_0 ... t_{k-1}^e_{k-1}
//! ```
//!
//! Every exponent tuple contributes exactly one term, so the cost is the
//! number of tuples, `C(n + k - 1, k - 1)`. This wins over repeated
//! squaring for short polynomials raised to large powers.

use fastmul_rings::Field;
use tracing::debug;

use crate::algorithms::geobucket::Geobucket;
use crate::error::PowerError;
use crate::monomial::Monomial;
use crate::poly::{Poly, Term};

/// Returns `[0!, 1!, ..., n!]` in the coefficient field.
#[must_use]
pub fn factorial_table<R: Field>(n: u32) -> Vec<R> {
    let mut table = Vec::with_capacity(n as usize + 1);
    table.push(R::one());
    for i in 1..=u64::from(n) {
        let next = R::from_u64(i) * table[table.len() - 1].clone();
        table.push(next);
    }
    table
}

/// Computes `f^n` by expanding the multinomial theorem.
///
/// Exponent tuples are enumerated depth first over the terms of `f`; the
/// running coefficient `n! / (e_0! ... e_i!)` is carried down the recursion
/// and the last position takes whatever budget is left. Each completed
/// tuple yields one term, collected in a geobucket.
///
/// # Errors
///
/// Returns [`PowerError::NonZeroCharacteristic`] unless the coefficient
/// field has characteristic 0; the factorial divisions are not exact
/// otherwise.
pub fn multinomial_power<R: Field>(f: &Poly<R>, n: u32) -> Result<Poly<R>, PowerError> {
    let characteristic = R::characteristic();
    if characteristic != 0 {
        return Err(PowerError::NonZeroCharacteristic { characteristic });
    }

    let ring = f.ring();
    if f.is_zero() {
        return Ok(if n == 0 { Poly::one(ring) } else { Poly::zero(ring) });
    }
    debug!(n, terms = f.len(), "multinomial expansion");

    let factorials = factorial_table::<R>(n);
    let mut expansion = Expansion {
        terms: f.terms(),
        factorials: &factorials,
        num_vars: ring.num_vars(),
        exponents: vec![0; f.len()],
        bucket: Geobucket::new(ring),
    };
    expansion.enumerate(0, n, factorials[n as usize].clone());

    Ok(expansion.bucket.drain().0)
}

/// State shared by one depth-first enumeration of exponent tuples.
struct Expansion<'a, R: Field> {
    terms: &'a [Term<R>],
    factorials: &'a [R],
    num_vars: usize,
    exponents: Vec<u32>,
    bucket: Geobucket<R>,
}

impl<R: Field> Expansion<'_, R> {
    fn enumerate(&mut self, pos: usize, remaining: u32, coef: R) {
        if pos + 1 < self.terms.len() {
            for e in 0..=remaining {
                self.exponents[pos] = e;
                let next = coef.field_div(&self.factorials[e as usize]);
                self.enumerate(pos + 1, remaining - e, next);
            }
        } else {
            self.exponents[pos] = remaining;
            let last = coef.field_div(&self.factorials[remaining as usize]);
            self.add_product(last);
        }
    }

    /// Adds `coef * prod t_i^e_i` for the current tuple.
    fn add_product(&mut self, coef: R) {
        let mut monomial = Monomial::one(self.num_vars);
        let mut coeff = coef;
        for (term, &e) in self.terms.iter().zip(&self.exponents) {
            if e != 0 {
                let raised = term.pow(e);
                monomial = monomial.mul(&raised.monomial);
                coeff = coeff * raised.coeff;
            }
        }
        self.bucket.add_term(Term::new(monomial, coeff));
    }
}
