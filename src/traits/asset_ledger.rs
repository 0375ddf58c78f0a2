//! The external asset ledger the pool settles against.
//!
//! A pool never holds balances itself.  Every movement of asset0 or asset1
//! is a call on an [`AssetLedger`]: pulls from participants go through
//! [`transfer_from`](AssetLedger::transfer_from) (an ERC-20 style
//! `transferFrom` against a prior approval), pushes to participants go
//! through [`transfer`](AssetLedger::transfer).
//!
//! # Pre-check
//!
//! [`can_transfer_from`](AssetLedger::can_transfer_from) answers whether a
//! pull *would* succeed without moving anything.  The pool calls it before
//! any pull so that a participant who is short on allowance or balance is
//! rejected before state or funds change.  Implementations must report an
//! insufficient allowance ahead of an insufficient balance, and must report
//! the same error `transfer_from` would.

use std::sync::Arc;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;

/// Multi-asset ledger with owner/spender allowances.
///
/// Calls are synchronous and are made while the pool holds its lock, so
/// implementations must not call back into the pool.
///
/// # Errors
///
/// - [`AmmError::AllowanceInsufficient`] if the spender's allowance is below
///   the amount.
/// - [`AmmError::TransferFailed`] if the payer's balance is below the amount
///   or the ledger otherwise refuses the movement.
pub trait AssetLedger {
    /// Checks that `spender` could pull `amount` of `asset` from `owner`.
    ///
    /// Never mutates.
    ///
    /// # Errors
    ///
    /// The error [`transfer_from`](Self::transfer_from) would return.
    fn can_transfer_from(
        &self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError>;

    /// Moves `amount` of `asset` from `owner` to `spender`, consuming
    /// `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn transfer_from(
        &self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError>;

    /// Moves `amount` of `asset` from `from` to `to`.  No allowance is
    /// involved.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if `from` holds less than
    /// `amount`.
    fn transfer(
        &self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError>;

    /// Returns `account`'s balance of `asset`.
    fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount;
}

impl<L: AssetLedger + ?Sized> AssetLedger for &L {
    fn can_transfer_from(
        &self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        (**self).can_transfer_from(asset, owner, spender, amount)
    }

    fn transfer_from(
        &self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        (**self).transfer_from(asset, owner, spender, amount)
    }

    fn transfer(
        &self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        (**self).transfer(asset, from, to, amount)
    }

    fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount {
        (**self).balance_of(asset, account)
    }
}

impl<L: AssetLedger + ?Sized> AssetLedger for Arc<L> {
    fn can_transfer_from(
        &self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        (**self).can_transfer_from(asset, owner, spender, amount)
    }

    fn transfer_from(
        &self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        (**self).transfer_from(asset, owner, spender, amount)
    }

    fn transfer(
        &self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        (**self).transfer(asset, from, to, amount)
    }

    fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount {
        (**self).balance_of(asset, account)
    }
}
