//! Priced outcome of a swap.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, AssetId};
use crate::error::AmmError;

/// The priced outcome of a swap: what goes in, what comes out, and how
/// much of the input the pool kept as its fee.
///
/// Returned both by an executed swap and by a dry-run quote.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in`.
///
/// # Examples
///
/// ```
/// use cpmm_pool::domain::{Amount, AssetId, SwapReceipt};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let receipt = SwapReceipt::new(a, b, Amount::new(500), Amount::new(333), Amount::ZERO);
/// assert!(receipt.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapReceipt {
    token_in: AssetId,
    token_out: AssetId,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapReceipt {
    /// Creates a receipt with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientOutput`] if `amount_out` is zero.
    /// - [`AmmError::InvalidFee`] if `fee >= amount_in`.
    pub fn new(
        token_in: AssetId,
        token_out: AssetId,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> Result<Self, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount("amount_in"));
        }
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutput);
        }
        if fee >= amount_in {
            return Err(AmmError::InvalidFee("fee must be less than amount_in"));
        }
        Ok(Self {
            token_in,
            token_out,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Asset sold to the pool.
    #[must_use]
    pub const fn token_in(&self) -> AssetId {
        self.token_in
    }

    /// Asset paid out by the pool.
    #[must_use]
    pub const fn token_out(&self) -> AssetId {
        self.token_out
    }

    /// Input amount, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Part of the input retained as the fee.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapReceipt(in={}, out={}, fee={})",
            self.amount_in, self.amount_out, self.fee
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn ids() -> (AssetId, AssetId) {
        (AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]))
    }

    #[test]
    fn valid_receipt() {
        let (a, b) = ids();
        let Ok(r) = SwapReceipt::new(a, b, Amount::new(1_000), Amount::new(990), Amount::new(3))
        else {
            panic!("expected Ok");
        };
        assert_eq!(r.token_in(), a);
        assert_eq!(r.token_out(), b);
        assert_eq!(r.amount_in(), Amount::new(1_000));
        assert_eq!(r.amount_out(), Amount::new(990));
        assert_eq!(r.fee(), Amount::new(3));
    }

    #[test]
    fn zero_in_rejected() {
        let (a, b) = ids();
        let result = SwapReceipt::new(a, b, Amount::ZERO, Amount::new(1), Amount::ZERO);
        assert!(matches!(result, Err(AmmError::ZeroAmount(_))));
    }

    #[test]
    fn zero_out_rejected() {
        let (a, b) = ids();
        let result = SwapReceipt::new(a, b, Amount::new(1), Amount::ZERO, Amount::ZERO);
        assert_eq!(result, Err(AmmError::InsufficientOutput));
    }

    #[test]
    fn fee_equal_to_input_rejected() {
        let (a, b) = ids();
        let result = SwapReceipt::new(a, b, Amount::new(5), Amount::new(1), Amount::new(5));
        assert!(matches!(result, Err(AmmError::InvalidFee(_))));
    }

    #[test]
    fn display() {
        let (a, b) = ids();
        let Ok(r) = SwapReceipt::new(a, b, Amount::new(500), Amount::new(333), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(r.to_string(), "SwapReceipt(in=500, out=333, fee=0)");
    }
}
