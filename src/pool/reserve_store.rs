//! Reserve and total-supply bookkeeping.

use crate::domain::{Amount, Liquidity, Reserves};
use crate::error::AmmError;
use crate::math::{CheckedArithmetic, U256};

/// Signed change to one reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReserveDelta {
    /// Reserve grows by the amount.
    Credit(Amount),
    /// Reserve shrinks by the amount.
    Debit(Amount),
    /// Reserve keeps its value.
    Unchanged,
}

impl ReserveDelta {
    fn apply(self, reserve: Amount) -> Result<Amount, AmmError> {
        match self {
            Self::Credit(amount) => reserve.safe_add(&amount),
            Self::Debit(amount) => reserve.safe_sub(&amount),
            Self::Unchanged => Ok(reserve),
        }
    }
}

/// The pool's reserves of both assets and the total share supply.
///
/// Both reserves are computed before either is written, so a failed
/// [`apply_delta`](Self::apply_delta) leaves the store as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ReserveStore {
    reserves: Reserves,
    total_supply: Liquidity,
}

impl ReserveStore {
    pub(crate) const fn reserves(&self) -> Reserves {
        self.reserves
    }

    pub(crate) const fn total_supply(&self) -> Liquidity {
        self.total_supply
    }

    /// `reserve0 × reserve1`.
    pub(crate) const fn product(&self) -> U256 {
        self.reserves.product()
    }

    /// Applies one delta per reserve.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ReserveUnderflow`] if a debit exceeds its reserve.
    /// - [`AmmError::Overflow`] if a credit would exceed `u128`.
    pub(crate) fn apply_delta(
        &mut self,
        delta0: ReserveDelta,
        delta1: ReserveDelta,
    ) -> Result<(), AmmError> {
        let reserve0 = delta0.apply(self.reserves.reserve0)?;
        let reserve1 = delta1.apply(self.reserves.reserve1)?;
        self.reserves = Reserves::new(reserve0, reserve1);
        Ok(())
    }

    pub(crate) fn set_supply(&mut self, total_supply: Liquidity) {
        self.total_supply = total_supply;
    }
}
