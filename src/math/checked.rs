//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait turns the `Option`-returning checked
//! operations on [`Amount`] and [`Liquidity`] into
//! [`Result<Self, AmmError>`](crate::error::AmmError) with a specific
//! variant per failure, so accounting code can use `?` throughout.
//!
//! # Examples
//!
//! ```
//! use cpmm_pool::domain::Amount;
//! use cpmm_pool::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000);
//! let out = reserve.safe_mul_div(500, 1_500);
//! assert_eq!(out, Ok(Amount::new(333)));
//! ```

use super::wide::mul_div;
use crate::domain::{Amount, Liquidity};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: errors propagate instead.
/// - Subtraction below zero is reported as [`AmmError::ReserveUnderflow`]
///   because in this crate it only ever happens on reserves or shares.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ReserveUnderflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Computes `self × numerator / denominator` through a 256-bit
    /// intermediate, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
    fn safe_mul_div(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError>;
}

fn wide_mul_div(value: u128, numerator: u128, denominator: u128) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    mul_div(value, numerator, denominator)
        .ok_or(AmmError::Overflow("mul_div quotient exceeds u128"))
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::ReserveUnderflow)
    }

    #[inline]
    fn safe_mul_div(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError> {
        wide_mul_div(self.get(), numerator, denominator).map(Amount::new)
    }
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::ReserveUnderflow)
    }

    #[inline]
    fn safe_mul_div(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError> {
        wide_mul_div(self.get(), numerator, denominator).map(Liquidity::new)
    }
}
