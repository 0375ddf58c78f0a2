//! Domain value types used throughout the pool engine.
//!
//! Identities, amounts, shares, the fee parameter, reserve snapshots,
//! swap receipts and events.  All types are newtypes or plain records
//! with validated constructors where an invariant exists.

mod amount;
mod asset_pair;
mod basis_points;
mod event;
mod fee_tier;
mod ids;
mod liquidity;
mod reserves;
mod swap_receipt;

pub use amount::Amount;
pub use asset_pair::{AssetPair, Direction};
pub use basis_points::BasisPoints;
pub use event::{LiquidityAdded, LiquidityRemoved, PoolEvent, Swapped};
pub use fee_tier::FeeTier;
pub use ids::{AccountId, AssetId};
pub use liquidity::Liquidity;
pub use reserves::Reserves;
pub use swap_receipt::SwapReceipt;
