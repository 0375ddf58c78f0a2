//! Domain events emitted by committed pool operations.
//!
//! Each operation returns its event payload to the caller and the pool
//! appends the same value to its event log inside the critical section
//! that committed the state change.  Events serialize externally tagged,
//! e.g. `{"Swapped": {...}}`, so indexers can consume them as JSON lines.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, AssetId, Liquidity};

/// A provider deposited both assets and received shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityAdded {
    /// Depositor.
    pub provider: AccountId,
    /// asset0 pulled into the pool.
    pub amount0: Amount,
    /// asset1 pulled into the pool.
    pub amount1: Amount,
    /// Shares credited to the provider.
    pub minted: Liquidity,
}

/// A provider redeemed shares for both assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityRemoved {
    /// Redeemer.
    pub provider: AccountId,
    /// asset0 paid out.
    pub amount0: Amount,
    /// asset1 paid out.
    pub amount1: Amount,
}

/// A trader exchanged one asset for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swapped {
    /// Trader.
    pub trader: AccountId,
    /// Asset sold to the pool.
    pub token_in: AssetId,
    /// Amount sold, fee included.
    pub amount_in: Amount,
    /// Amount of the other asset paid out.
    pub amount_out: Amount,
}

/// Any event recorded by the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolEvent {
    /// See [`LiquidityAdded`].
    LiquidityAdded(LiquidityAdded),
    /// See [`LiquidityRemoved`].
    LiquidityRemoved(LiquidityRemoved),
    /// See [`Swapped`].
    Swapped(Swapped),
}

impl From<LiquidityAdded> for PoolEvent {
    fn from(e: LiquidityAdded) -> Self {
        Self::LiquidityAdded(e)
    }
}

impl From<LiquidityRemoved> for PoolEvent {
    fn from(e: LiquidityRemoved) -> Self {
        Self::LiquidityRemoved(e)
    }
}

impl From<Swapped> for PoolEvent {
    fn from(e: Swapped) -> Self {
        Self::Swapped(e)
    }
}
