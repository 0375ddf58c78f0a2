//! Trait seams between the pool and the outside world.
//!
//! [`AssetLedger`] is the only one: the pool custodies nothing itself and
//! settles every deposit, withdrawal and swap through it.

mod asset_ledger;

pub use asset_ledger::AssetLedger;
