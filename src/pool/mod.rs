//! The constant-product pool.
//!
//! | Component | Role |
//! |-----------|------|
//! | [`Pool`] | public facade: operations, queries, settlement, events |
//! | `reserve_store` | reserves and total supply, applied as all-or-nothing deltas |
//! | `share_book` | per-provider share balances |
//! | `liquidity` | share pricing for deposits and withdrawals |
//! | `swap` | exact-input pricing on `x · y = k` |

mod facade;
mod liquidity;
mod reserve_store;
mod share_book;
mod swap;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use facade::Pool;
