//! In-process multi-asset ledger.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::AssetLedger;

#[derive(Debug, Default)]
struct Books {
    balances: HashMap<(AssetId, AccountId), Amount>,
    // (asset, owner, spender)
    allowances: HashMap<(AssetId, AccountId, AccountId), Amount>,
}

impl Books {
    fn balance(&self, asset: &AssetId, account: &AccountId) -> Amount {
        self.balances
            .get(&(*asset, *account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, asset: &AssetId, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(&(*asset, *owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn check_pull(
        &self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let allowed = self.allowance(asset, owner, spender);
        if allowed < amount {
            return Err(AmmError::AllowanceInsufficient {
                needed: amount,
                allowed,
            });
        }
        if self.balance(asset, owner) < amount {
            return Err(AmmError::TransferFailed("transfer amount exceeds balance"));
        }
        Ok(())
    }

    fn set_balance(&mut self, asset: &AssetId, account: &AccountId, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&(*asset, *account));
        } else {
            self.balances.insert((*asset, *account), amount);
        }
    }

    fn move_funds(
        &mut self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let from_balance = self.balance(asset, from);
        if from_balance < amount {
            return Err(AmmError::TransferFailed("transfer amount exceeds balance"));
        }
        if from == to {
            return Ok(());
        }
        let to_balance = self.balance(asset, to).safe_add(&amount)?;
        self.set_balance(asset, from, from_balance.safe_sub(&amount)?);
        self.set_balance(asset, to, to_balance);
        Ok(())
    }
}

/// ERC-20 style ledger for any number of assets, kept in memory.
///
/// Balances and allowances live behind one [`RwLock`], so the ledger can be
/// shared between a pool and the code that funds participants.  Balance
/// queries take the read side; every movement takes the write side and is
/// applied whole or not at all.
///
/// # Examples
///
/// ```
/// use cpmm_pool::domain::{AccountId, Amount, AssetId};
/// use cpmm_pool::ledger::InMemoryLedger;
/// use cpmm_pool::traits::AssetLedger;
///
/// let usd = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([0xa1; 32]);
/// let pool = AccountId::from_bytes([0xee; 32]);
///
/// let ledger = InMemoryLedger::new();
/// ledger.mint(&usd, &alice, Amount::new(1_000)).expect("mint");
/// ledger.approve(&usd, &alice, &pool, Amount::new(400));
///
/// ledger.transfer_from(&usd, &alice, &pool, Amount::new(400)).expect("pull");
/// assert_eq!(ledger.balance_of(&usd, &pool), Amount::new(400));
/// assert_eq!(ledger.allowance(&usd, &alice, &pool), Amount::ZERO);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    books: RwLock<Books>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `account` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would exceed `u128`.
    pub fn mint(
        &self,
        asset: &AssetId,
        account: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let mut books = self.books.write();
        let balance = books.balance(asset, account).safe_add(&amount)?;
        books.set_balance(asset, account, balance);
        Ok(())
    }

    /// Sets `spender`'s allowance over `owner`'s `asset` to exactly `amount`.
    pub fn approve(
        &self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) {
        let mut books = self.books.write();
        let key = (*asset, *owner, *spender);
        if amount.is_zero() {
            books.allowances.remove(&key);
        } else {
            books.allowances.insert(key, amount);
        }
    }

    /// Returns `spender`'s remaining allowance over `owner`'s `asset`.
    #[must_use]
    pub fn allowance(&self, asset: &AssetId, owner: &AccountId, spender: &AccountId) -> Amount {
        self.books.read().allowance(asset, owner, spender)
    }
}

impl AssetLedger for InMemoryLedger {
    fn can_transfer_from(
        &self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        self.books.read().check_pull(asset, owner, spender, amount)
    }

    fn transfer_from(
        &self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let mut books = self.books.write();
        books.check_pull(asset, owner, spender, amount)?;
        let remaining = books.allowance(asset, owner, spender).safe_sub(&amount)?;
        books.move_funds(asset, owner, spender, amount)?;
        let key = (*asset, *owner, *spender);
        if remaining.is_zero() {
            books.allowances.remove(&key);
        } else {
            books.allowances.insert(key, remaining);
        }
        Ok(())
    }

    fn transfer(
        &self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        self.books.write().move_funds(asset, from, to, amount)
    }

    fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount {
        self.books.read().balance(asset, account)
    }
}
