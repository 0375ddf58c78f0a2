//! Asset ledger implementations.
//!
//! [`InMemoryLedger`] backs tests, simulations and single-process
//! embedders.  Anything else implements
//! [`AssetLedger`](crate::traits::AssetLedger) directly.

mod memory;

pub use memory::InMemoryLedger;
