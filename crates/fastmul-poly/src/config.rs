//! Tuning knobs for the fast algorithms.

/// Default crossover for `terms(f) * terms(g)` below which the dispatcher
/// multiplies directly.
pub const TERM_PRODUCT_THRESHOLD: usize = 100;

/// Default crossover for `deg(f) * deg(g)` below which the univariate
/// multiplier multiplies directly.
pub const DEGREE_PRODUCT_THRESHOLD: u64 = 100;

/// Default term count up to which [`crate::PowerStrategy::Auto`] expands
/// powers with the multinomial theorem.
pub const MULTINOMIAL_MAX_TERMS: usize = 2;

/// Thresholds used by [`crate::FastMultiplier`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MultConfig {
    /// Direct multiplication when `terms(f) * terms(g)` is below this.
    pub term_product_threshold: usize,
    /// Direct univariate multiplication when `deg(f) * deg(g)` is below this.
    pub degree_product_threshold: u64,
    /// Largest term count for which `Auto` picks the multinomial expansion.
    pub multinomial_max_terms: usize,
}

impl Default for MultConfig {
    fn default() -> Self {
        Self {
            term_product_threshold: TERM_PRODUCT_THRESHOLD,
            degree_product_threshold: DEGREE_PRODUCT_THRESHOLD,
            multinomial_max_terms: MULTINOMIAL_MAX_TERMS,
        }
    }
}

impl MultConfig {
    /// Sets the term-product crossover.
    #[must_use]
    pub const fn with_term_product_threshold(mut self, threshold: usize) -> Self {
        self.term_product_threshold = threshold;
        self
    }

    /// Sets the degree-product crossover.
    #[must_use]
    pub const fn with_degree_product_threshold(mut self, threshold: u64) -> Self {
        self.degree_product_threshold = threshold;
        self
    }

    /// Sets the term count limit for automatic multinomial expansion.
    #[must_use]
    pub const fn with_multinomial_max_terms(mut self, max_terms: usize) -> Self {
        self.multinomial_max_terms = max_terms;
        self
    }
}
