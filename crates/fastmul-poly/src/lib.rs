//! # fastmul-poly
//!
//! Fast exact multiplication and exponentiation of sparse multivariate
//! polynomials over an arbitrary coefficient field.
//!
//! This crate provides:
//! - Sparse polynomials with canonical sorted term vectors
//! - Geobucket accumulation of many partial sums
//! - Generalized Karatsuba multiplication that picks its split variable
//!   per recursion level
//! - Powers by repeated squaring and by multinomial expansion
//!
//! ## Algorithm Selection
//!
//! [`FastMultiplier::multiply`] multiplies directly when
//! `terms(f) * terms(g) < 100` or when no variable occurs in both
//! operands; otherwise it splits on the variable maximising
//! `min(deg_x(f), deg_x(g))`. [`FastMultiplier::power`] expands short
//! polynomials over characteristic 0 with the multinomial theorem and
//! squares everything else.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod monomial;
pub mod ordering;
pub mod poly;
pub mod ring;

#[cfg(test)]
mod proptests;

pub use algorithms::fast_mult::{fast_mul, FastMultiplier, MultStats, Recursion};
pub use algorithms::fast_power::{fast_power, PowerStrategy};
pub use algorithms::geobucket::Geobucket;
pub use algorithms::multinomial::multinomial_power;
pub use config::MultConfig;
pub use error::PowerError;
pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use poly::{Poly, Term};
pub use ring::PolyRing;
