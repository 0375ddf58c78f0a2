//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use cpmm_pool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, FeeTier, Liquidity, LiquidityAdded,
    LiquidityRemoved, PoolEvent, Reserves, SwapReceipt, Swapped,
};

// Re-export the ledger seam and its in-memory implementation
pub use crate::ledger::InMemoryLedger;
pub use crate::traits::AssetLedger;

// Re-export math utilities
pub use crate::math::CheckedArithmetic;

// Re-export configuration
pub use crate::config::PoolConfig;

// Re-export error types
pub use crate::error::{AmmError, Result};

// Re-export the pool
pub use crate::pool::Pool;
