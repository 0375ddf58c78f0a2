//! Arithmetic utilities for pricing and accounting.
//!
//! - [`CheckedArithmetic`] gives `Result`-returning arithmetic on domain
//!   newtypes so overflow and underflow propagate with `?`.
//! - [`U256`] and [`mul_div`] provide the double-width intermediates every
//!   `u128 × u128 / u128` formula in the pool goes through.

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{mul_div, U256};
