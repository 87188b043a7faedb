//! # fastmul-rings
//!
//! Coefficient fields for exact polynomial arithmetic.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - The rational numbers `Q` (arbitrary precision, characteristic zero)
//! - Prime fields `FiniteField<P>` (characteristic `P`)
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::FiniteField;
pub use rationals::Q;
pub use traits::{Field, Ring};
