//! Errors reported by the power algorithms.

use thiserror::Error;

/// Errors that can occur while raising a polynomial to a power.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PowerError {
    /// The multinomial expansion divides by factorials, which is only
    /// exact in characteristic zero.
    #[error("multinomial expansion requires characteristic 0, coefficient field has characteristic {characteristic}")]
    NonZeroCharacteristic {
        /// Characteristic of the coefficient field.
        characteristic: u64,
    },
}
