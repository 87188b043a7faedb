//! Powers by repeated squaring.
//!
//! `f^n` is assembled from the table `f, f^2, f^4, ...` according to the
//! binary digits of `n`.

use std::borrow::Cow;

use fastmul_rings::{Field, Ring};
use tracing::debug;

use crate::algorithms::fast_mult::FastMultiplier;
use crate::algorithms::multinomial::multinomial_power;
use crate::error::PowerError;
use crate::poly::Poly;

/// Algorithm used by [`FastMultiplier::power`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum PowerStrategy {
    /// Binary exponentiation ([`FastMultiplier::repeated_squaring`]).
    RepeatedSquaring,
    /// Multinomial theorem ([`multinomial_power`]); characteristic 0 only.
    Multinomial,
    /// Multinomial for short polynomials over characteristic 0, repeated
    /// squaring otherwise.
    #[default]
    Auto,
}

impl FastMultiplier {
    /// Computes `f^n` by repeated squaring.
    ///
    /// Squarings and the final products go through the dispatcher only in
    /// univariate rings; multivariate rings use schoolbook multiplication.
    ///
    /// `n == 1` returns a copy of `f`.
    ///
    /// # Panics
    ///
    /// Panics if `f` belongs to a different ring.
    pub fn repeated_squaring<R: Ring>(&mut self, f: &Poly<R>, n: u32) -> Poly<R> {
        self.check_ring(f);
        debug!(n, terms = f.len(), "repeated squaring");

        match n {
            0 => return Poly::one(self.ring()),
            1 => return f.clone(),
            _ => {}
        }

        // index of the largest power of two not exceeding n
        let top = (u32::BITS - 1 - n.leading_zeros()) as usize;

        // table[0] borrows f; the squares are owned
        let mut table: Vec<Cow<'_, Poly<R>>> = Vec::with_capacity(top + 1);
        table.push(Cow::Borrowed(f));
        for i in 1..=top {
            let square = self.mul_for_power(&table[i - 1], &table[i - 1]);
            table.push(Cow::Owned(square));
        }

        let mut needed = vec![false; top + 1];
        let mut rest = u64::from(n);
        for i in (0..=top).rev() {
            let pot = 1u64 << i;
            debug_assert!(rest < 2 * pot);
            if pot <= rest {
                rest -= pot;
                needed[i] = true;
            }
        }
        debug_assert_eq!(rest, 0);

        let mut result = Poly::one(self.ring());
        for (entry, needed) in table.into_iter().zip(needed) {
            if needed {
                result = self.mul_for_power(&result, &entry);
            }
        }
        result
    }

    /// Computes `f^n` with the chosen strategy.
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::NonZeroCharacteristic`] when the multinomial
    /// expansion is requested over a field of positive characteristic.
    ///
    /// # Panics
    ///
    /// Panics if `f` belongs to a different ring.
    pub fn power<R: Field>(
        &mut self,
        f: &Poly<R>,
        n: u32,
        strategy: PowerStrategy,
    ) -> Result<Poly<R>, PowerError> {
        let strategy = match strategy {
            PowerStrategy::Auto
                if R::characteristic() == 0
                    && f.len() <= self.config().multinomial_max_terms =>
            {
                PowerStrategy::Multinomial
            }
            PowerStrategy::Auto => PowerStrategy::RepeatedSquaring,
            other => other,
        };
        debug!(?strategy, n, terms = f.len(), "power");

        match strategy {
            PowerStrategy::Multinomial => {
                self.check_ring(f);
                multinomial_power(f, n)
            }
            _ => Ok(self.repeated_squaring(f, n)),
        }
    }

    fn mul_for_power<R: Ring>(&mut self, a: &Poly<R>, b: &Poly<R>) -> Poly<R> {
        if self.ring().num_vars() == 1 {
            self.multiply(a, b)
        } else {
            self.direct(a, b)
        }
    }
}

/// Computes `f^n` by repeated squaring with a fresh default
/// [`FastMultiplier`].
#[must_use]
pub fn fast_power<R: Ring>(f: &Poly<R>, n: u32) -> Poly<R> {
    FastMultiplier::new(f.ring()).repeated_squaring(f, n)
}
