//! Per-provider share balances.

use std::collections::HashMap;

use crate::domain::{AccountId, Liquidity};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Share balance of every provider.  Accounts with zero shares are not
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ShareBook {
    balances: HashMap<AccountId, Liquidity>,
}

impl ShareBook {
    pub(crate) fn balance_of(&self, account: &AccountId) -> Liquidity {
        self.balances
            .get(account)
            .copied()
            .unwrap_or(Liquidity::ZERO)
    }

    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would exceed `u128`.
    pub(crate) fn mint(&mut self, account: &AccountId, shares: Liquidity) -> Result<(), AmmError> {
        let balance = self.balance_of(account).safe_add(&shares)?;
        if !balance.is_zero() {
            self.balances.insert(*account, balance);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] if `account` holds fewer
    /// than `shares`.
    pub(crate) fn burn(&mut self, account: &AccountId, shares: Liquidity) -> Result<(), AmmError> {
        let available = self.balance_of(account);
        let Some(remaining) = available.checked_sub(&shares) else {
            return Err(AmmError::InsufficientBalance {
                requested: shares,
                available,
            });
        };
        if remaining.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, remaining);
        }
        Ok(())
    }

    /// Σ of all balances, or `None` on overflow.
    pub(crate) fn sum(&self) -> Option<Liquidity> {
        self.balances
            .values()
            .try_fold(Liquidity::ZERO, |acc, b| acc.checked_add(b))
    }
}
