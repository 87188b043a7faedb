//! Polynomial algorithms.
//!
//! This module contains:
//! - Degree splitting around a variable
//! - Geobucket accumulation
//! - Generalized Karatsuba multiplication with variable selection
//! - Powers by repeated squaring and by the multinomial theorem

pub mod fast_mult;
pub mod fast_power;
pub mod geobucket;
pub mod multinomial;
pub mod split;
