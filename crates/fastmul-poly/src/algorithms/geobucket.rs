//! Geobuckets: lazy accumulation of many polynomials.
//!
//! Summing `m` polynomials one after another re-merges the running total
//! every time. A geobucket instead keeps partial sums in buckets of
//! geometrically increasing capacity and only merges a bucket when it
//! overflows, so each term is touched O(log m) times.
//!
//! Reference: Yan, "The Geobucket Data Structure for Polynomials" (1998)

use fastmul_rings::Ring;

use crate::poly::{merge_terms, Poly, Term};
use crate::ring::PolyRing;

/// A lazy sum of polynomials.
///
/// Every absorbed polynomial is moved in; [`Geobucket::drain`] consumes
/// the bucket and returns the canonical sum.
#[derive(Clone, Debug)]
pub struct Geobucket<R: Ring> {
    /// Bucket i holds a canonical term vector of at most 2^(i+1) terms.
    buckets: Vec<Vec<Term<R>>>,
    ring: PolyRing,
}

impl<R: Ring> Geobucket<R> {
    /// Creates a new empty geobucket.
    #[must_use]
    pub fn new(ring: PolyRing) -> Self {
        Self {
            buckets: Vec::new(),
            ring,
        }
    }

    /// Returns the capacity of bucket i.
    #[inline]
    fn bucket_capacity(i: usize) -> usize {
        1 << (i + 1) // 2, 4, 8, 16, ...
    }

    /// Returns true if no terms are currently held.
    ///
    /// Absorbed polynomials that cancel completely leave the bucket empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Adds a polynomial to the running sum, taking ownership of its terms.
    ///
    /// # Panics
    ///
    /// Panics if `p` belongs to a different ring.
    pub fn absorb(&mut self, p: Poly<R>) {
        assert_eq!(p.ring(), self.ring, "polynomial belongs to a different ring");
        if p.is_zero() {
            return;
        }

        let order = self.ring.order();
        let mut chunk = p.into_terms();

        let mut i = 0;
        while Self::bucket_capacity(i) < chunk.len() {
            i += 1;
        }

        // Carry-propagate from the first bucket that fits
        loop {
            while self.buckets.len() <= i {
                self.buckets.push(Vec::new());
            }

            if self.buckets[i].is_empty() {
                self.buckets[i] = chunk;
                return;
            }

            let resident = std::mem::take(&mut self.buckets[i]);
            chunk = merge_terms(resident, chunk, order);

            if chunk.len() <= Self::bucket_capacity(i) {
                self.buckets[i] = chunk;
                return;
            }

            i += 1;
        }
    }

    /// Adds a single term.
    pub fn add_term(&mut self, term: Term<R>) {
        self.absorb(Poly::from_term(term, self.ring));
    }

    /// Merges all buckets and returns the sum together with its length.
    #[must_use]
    pub fn drain(self) -> (Poly<R>, usize) {
        let order = self.ring.order();
        let terms = self
            .buckets
            .into_iter()
            .fold(Vec::new(), |acc, bucket| merge_terms(acc, bucket, order));
        let len = terms.len();
        (Poly::from_sorted(terms, self.ring), len)
    }
}
