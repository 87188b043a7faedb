//! Polynomial ring context.

use crate::ordering::MonomialOrder;

/// The shape of a polynomial ring `K[x_0, ..., x_{n-1}]`.
///
/// The coefficient field `K` is the type parameter of [`crate::Poly`];
/// this context only fixes the number of variables and how terms are
/// ordered. It is immutable and cheap to copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PolyRing {
    num_vars: usize,
    order: MonomialOrder,
}

impl PolyRing {
    /// Creates a ring with `num_vars` variables ordered by `order`.
    #[must_use]
    pub const fn new(num_vars: usize, order: MonomialOrder) -> Self {
        Self { num_vars, order }
    }

    /// Creates a univariate ring.
    #[must_use]
    pub const fn univariate() -> Self {
        Self::new(1, MonomialOrder::Lex)
    }

    /// Returns the number of variables.
    #[must_use]
    pub const fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub const fn order(&self) -> MonomialOrder {
        self.order
    }
}

impl std::fmt::Display for PolyRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "K[{} vars, {}]", self.num_vars, self.order)
    }
}
