//! # fastmul
//!
//! Fast exact arithmetic on multivariate polynomials.
//!
//! - **Karatsuba-style multiplication**: recursive degree splitting with a
//!   per-level choice of split variable
//! - **Fast powers**: repeated squaring or multinomial expansion
//! - **Any coefficient field**: exact rationals, prime fields, or your own
//!   [`rings::Field`] implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use fastmul::prelude::*;
//!
//! let ring = PolyRing::univariate();
//! let f = Poly::from_pairs([(vec![3], Q::from_integer(1)), (vec![2], Q::from_integer(1)), (vec![0], Q::from_integer(1))], ring);
//! let g = Poly::from_pairs([(vec![2], Q::from_integer(1)), (vec![0], Q::from_integer(1))], ring);
//!
//! let mut m = FastMultiplier::new(ring);
//! let product = m.multiply(&f, &g);
//! assert_eq!(product.len(), 5);
//!
//! let cube = m.power(&f, 3, PowerStrategy::Auto).unwrap();
//! assert_eq!(cube.total_degree(), 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use fastmul_poly as poly;
pub use fastmul_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fastmul_poly::{
        fast_mul, fast_power, multinomial_power, FastMultiplier, MonomialOrder, MultConfig, Poly,
        PolyRing, PowerError, PowerStrategy, Term,
    };
    pub use fastmul_rings::{FiniteField, Field, Ring, Q};
}
