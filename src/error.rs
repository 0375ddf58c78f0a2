//! Unified error type for the pool engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  A failed
//! operation never leaves partial state behind: the pool is exactly as it
//! was before the call, with the exception of the two fatal
//! internal-consistency variants (see [`AmmError::is_fatal`]).

use thiserror::Error;

use crate::domain::{Amount, Liquidity};

/// Errors produced by pool construction, accounting, pricing and the
/// asset ledger boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The asset is not one of the pool's two assets, or a pair was built
    /// from two identical assets.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A deposit, withdrawal or swap amount was zero.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// The deposit is too small to mint a single share.
    #[error("deposit too small to mint liquidity")]
    ZeroLiquidityMinted,

    /// Redeeming the shares would return nothing of either asset.
    #[error("withdrawal would return zero of both assets")]
    ZeroOutput,

    /// The caller is the pool's own custody account.  Transfers between the
    /// account and itself move nothing, so the pool refuses them.
    #[error("caller is the pool's custody account")]
    CustodyCaller,

    /// The caller holds fewer shares than it tried to redeem.
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Shares the caller asked to redeem.
        requested: Liquidity,
        /// Shares the caller actually holds.
        available: Liquidity,
    },

    /// The swap would output nothing, or would drain the output reserve.
    #[error("insufficient output amount")]
    InsufficientOutput,

    /// The owner has not authorised the pool to pull enough funds.
    #[error("transfer amount exceeds allowance: needed {needed}, allowed {allowed}")]
    AllowanceInsufficient {
        /// Amount the pool tried to pull.
        needed: Amount,
        /// Amount the owner has approved.
        allowed: Amount,
    },

    /// The ledger rejected a transfer for a reason other than allowance.
    #[error("transfer failed: {0}")]
    TransferFailed(&'static str),

    /// A reserve or the share supply would go negative.  Unreachable with
    /// correct accounting.
    #[error("reserve underflow")]
    ReserveUnderflow,

    /// The ledger disagrees with the pool's books, e.g. the pool cannot pay
    /// out funds its reserves say it holds.
    #[error("ledger inconsistency: {0}")]
    LedgerInconsistency(&'static str),

    /// An arithmetic result exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero in a pricing or accounting formula.
    #[error("division by zero")]
    DivisionByZero,

    /// The swap fee is out of range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A configuration could not be parsed or is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl AmmError {
    /// Returns `true` for internal-consistency failures.
    ///
    /// These indicate a bug in the accounting or a ledger that moved funds
    /// behind the pool's back.  Callers should stop routing traffic to the
    /// pool instead of resubmitting.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::ReserveUnderflow | Self::LedgerInconsistency(_))
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
