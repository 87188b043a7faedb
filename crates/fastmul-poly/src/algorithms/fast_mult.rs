//! Generalized Karatsuba multiplication of sparse multivariate polynomials.
//!
//! Pick a variable `x` and the smallest power of two `n` above both degree
//! bounds in `x`, and write `f = f0 + f1*x^(n/2)`, `g = g0 + g1*x^(n/2)`.
//! Then
//!
//! ```text
//! f*g = f1*g1 * x^n + ((f0+f1)*(g0+g1) - f0*g0 - f1*g1) * x^(n/2) + f0*g0
//! ```
//!
//! needs three half-size products instead of four. When one of the four
//! halves is empty only one cross product can be non-zero, and it is
//! computed directly instead of through the sum trick.
//!
//! [`FastMultiplier::multiply`] re-selects the split variable at every
//! level; [`FastMultiplier::unifast_mult`] always splits on variable 0.

use fastmul_rings::Ring;
use tracing::trace;

use crate::algorithms::split::{shift_down, split};
use crate::config::MultConfig;
use crate::poly::Poly;
use crate::ring::PolyRing;

/// Strategy used for the sub-products of a split.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Recursion {
    /// Split on variable 0 at every level ([`FastMultiplier::unifast_mult`]).
    Univariate,
    /// Choose the split variable afresh at every level
    /// ([`FastMultiplier::multiply`]).
    Dispatch,
}

/// Counters describing the work done by a [`FastMultiplier`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MultStats {
    /// Calls to the variable-selection dispatcher.
    pub dispatcher_calls: u64,
    /// Karatsuba splits performed.
    pub recursive_splits: u64,
    /// Products handed to schoolbook multiplication.
    pub direct_mults: u64,
}

/// Fast multiplication and powering within one polynomial ring.
///
/// Owns the thresholds in force and the diagnostic counters, so two
/// multipliers never share state.
#[derive(Clone, Debug)]
pub struct FastMultiplier {
    ring: PolyRing,
    config: MultConfig,
    stats: MultStats,
}

impl FastMultiplier {
    /// Creates a multiplier with the default thresholds.
    #[must_use]
    pub fn new(ring: PolyRing) -> Self {
        Self::with_config(ring, MultConfig::default())
    }

    /// Creates a multiplier with custom thresholds.
    #[must_use]
    pub fn with_config(ring: PolyRing, config: MultConfig) -> Self {
        Self {
            ring,
            config,
            stats: MultStats::default(),
        }
    }

    /// Returns the ring context.
    #[must_use]
    pub fn ring(&self) -> PolyRing {
        self.ring
    }

    /// Returns the thresholds in force.
    #[must_use]
    pub fn config(&self) -> &MultConfig {
        &self.config
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> MultStats {
        self.stats
    }

    /// Zeroes the counters.
    pub fn reset_stats(&mut self) {
        self.stats = MultStats::default();
    }

    pub(crate) fn check_ring<R: Ring>(&self, p: &Poly<R>) {
        assert_eq!(
            p.ring(),
            self.ring,
            "polynomial belongs to a different ring than the multiplier"
        );
    }

    /// Computes `f * g`, splitting on the most promising variable.
    ///
    /// A variable's score is `min(deg_x(f), deg_x(g))`; the first variable
    /// with the strictly largest positive score wins. Small products
    /// (`terms(f) * terms(g)` below the threshold) and products where no
    /// variable scores are computed directly.
    ///
    /// # Panics
    ///
    /// Panics if an operand belongs to a different ring.
    pub fn multiply<R: Ring>(&mut self, f: &Poly<R>, g: &Poly<R>) -> Poly<R> {
        self.stats.dispatcher_calls += 1;
        self.check_ring(f);
        self.check_ring(g);

        if f.is_zero() || g.is_zero() {
            return Poly::zero(self.ring);
        }

        if f.len().saturating_mul(g.len()) < self.config.term_product_threshold {
            trace!(f_len = f.len(), g_len = g.len(), "few terms, multiplying directly");
            return self.direct(f, g);
        }

        let mut best_score = 0;
        let mut best = None;
        for var in 0..self.ring.num_vars() {
            let df = f.degree_in(var);
            // g is only scanned when f could beat the current best
            if df > best_score {
                let dg = g.degree_in(var);
                let score = df.min(dg);
                if score > best_score {
                    best_score = score;
                    best = Some((var, df, dg));
                }
            }
        }

        match best {
            None => {
                trace!("no variable shared by both operands, multiplying directly");
                self.direct(f, g)
            }
            Some((var, df, dg)) => {
                trace!(var, df, dg, "splitting");
                let mut product = self.mul_with_bounds(f, df, g, dg, var, Recursion::Dispatch);
                product.normalize();
                product
            }
        }
    }

    /// Computes `f * g`, splitting on variable 0 only.
    ///
    /// Falls back to direct multiplication when either operand is constant
    /// in variable 0 or when the product of their degrees is below the
    /// threshold.
    ///
    /// # Panics
    ///
    /// Panics if an operand belongs to a different ring.
    pub fn unifast_mult<R: Ring>(&mut self, f: &Poly<R>, g: &Poly<R>) -> Poly<R> {
        self.check_ring(f);
        self.check_ring(g);

        if f.is_zero() || g.is_zero() {
            return Poly::zero(self.ring);
        }

        let df = f.degree_in(0);
        let dg = g.degree_in(0);
        if df == 0
            || dg == 0
            || u64::from(df) * u64::from(dg) < self.config.degree_product_threshold
        {
            return self.direct(f, g);
        }

        self.mul_with_bounds(f, df, g, dg, 0, Recursion::Univariate)
    }

    /// Computes `f * g` by one Karatsuba split on `var`.
    ///
    /// `df` and `dg` must bound the degrees of `f` and `g` in `var` from
    /// above; sub-products are computed with `recursion`.
    ///
    /// # Panics
    ///
    /// Panics if an operand belongs to a different ring or a bound is
    /// exceeded by an exponent (the latter only with debug assertions).
    pub fn mul_with_bounds<R: Ring>(
        &mut self,
        f: &Poly<R>,
        df: u32,
        g: &Poly<R>,
        dg: u32,
        var: usize,
        recursion: Recursion,
    ) -> Poly<R> {
        self.check_ring(f);
        self.check_ring(g);
        debug_assert!(
            f.degree_in(var) <= df && g.degree_in(var) <= dg,
            "degree bounds ({df}, {dg}) below actual degrees in x{var}"
        );

        if f.is_zero() || g.is_zero() {
            return Poly::zero(self.ring);
        }

        // smallest power of two strictly above both bounds
        let Some(block) = df
            .max(dg)
            .checked_add(1)
            .and_then(u32::checked_next_power_of_two)
        else {
            trace!(df, dg, var, "split point outside the exponent range, multiplying directly");
            return self.direct(f, g);
        };
        if block == 1 {
            return self.direct(f, g);
        }
        let half = block / 2;
        self.stats.recursive_splits += 1;

        let (mut f1, f0) = split(f.clone(), half, var);
        shift_down(&mut f1, half, var);
        let (mut g1, g0) = split(g.clone(), half, var);
        shift_down(&mut g1, half, var);

        let p00 = self.recurse(&f0, &g0, recursion);
        let p11 = self.recurse(&f1, &g1, recursion);

        let cross = if !f0.is_zero() && !f1.is_zero() && !g0.is_zero() && !g1.is_zero() {
            let s1 = f0 + f1;
            let s2 = g0 + g1;
            let pbig = self.recurse(&s1, &s2, recursion);
            pbig - p00.clone() - p11.clone()
        } else if !f0.is_zero() && !g1.is_zero() {
            // f1 or g0 is empty, so f1*g0 vanishes
            self.recurse(&f0, &g1, recursion)
        } else {
            self.recurse(&f1, &g0, recursion)
        };

        p11.mul_var_power(var, block) + p00 + cross.mul_var_power(var, half)
    }

    fn recurse<R: Ring>(&mut self, f: &Poly<R>, g: &Poly<R>, recursion: Recursion) -> Poly<R> {
        match recursion {
            Recursion::Univariate => self.unifast_mult(f, g),
            Recursion::Dispatch => self.multiply(f, g),
        }
    }

    /// Schoolbook product, counted in the stats.
    pub(crate) fn direct<R: Ring>(&mut self, f: &Poly<R>, g: &Poly<R>) -> Poly<R> {
        self.stats.direct_mults += 1;
        f.mul_naive(g)
    }
}

/// Computes `f * g` with a fresh default [`FastMultiplier`].
#[must_use]
pub fn fast_mul<R: Ring>(f: &Poly<R>, g: &Poly<R>) -> Poly<R> {
    FastMultiplier::new(f.ring()).multiply(f, g)
}
