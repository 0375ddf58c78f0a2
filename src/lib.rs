//! # CPMM Pool
//!
//! A two-asset constant-product liquidity pool (`x · y = k`) that settles
//! against an external multi-asset ledger.
//!
//! Liquidity providers deposit both assets and receive fungible pool
//! shares.  Traders swap one asset for the other at a price set by the
//! reserve ratio, less an optional fee that stays in the pool.  Funds move
//! only through an [`AssetLedger`](traits::AssetLedger): pulls use the
//! participant's prior approval, pushes come from the pool's custody
//! account.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use cpmm_pool::prelude::*;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let custody = AccountId::from_bytes([0xee; 32]);
//! let alice = AccountId::from_bytes([0xa1; 32]);
//!
//! // 1. A ledger with Alice funded and the pool approved
//! let ledger = Arc::new(InMemoryLedger::new());
//! for asset in [usdc, weth] {
//!     ledger.mint(&asset, &alice, Amount::new(10_000)).expect("mint");
//!     ledger.approve(&asset, &alice, &custody, Amount::new(10_000));
//! }
//!
//! // 2. A zero-fee pool over (usdc, weth)
//! let config = PoolConfig::new(usdc, weth, custody, FeeTier::ZERO).expect("valid config");
//! let pool = Pool::new(config, Arc::clone(&ledger)).expect("pool created");
//!
//! // 3. Seed it, then trade against it
//! let added = pool.add_liquidity(&alice, Amount::new(1_000), Amount::new(1_000))
//!     .expect("deposit");
//! assert_eq!(added.minted, Liquidity::new(1_000));
//!
//! let receipt = pool.swap(&alice, &usdc, Amount::new(500)).expect("swap");
//! assert_eq!(receipt.amount_out(), Amount::new(333));
//! assert_eq!(pool.reserves(), Reserves::from((1_500, 667)));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  PoolConfig + an AssetLedger
//! └──────┬───────┘
//!        │ Pool::new(config, ledger)
//!        ▼
//! ┌──────────────┐
//! │  Pool facade  │  one Mutex: validate → pre-check → pull → commit → push → event
//! └──┬────────┬──┘
//!    │        │ pure pricing
//!    │        ▼
//!    │  ┌──────────────┐
//!    │  │ liquidity /  │  isqrt, pro-rata mint/redeem, x·y=k quotes (U256 intermediates)
//!    │  │    swap      │
//!    │  └──────────────┘
//!    ▼
//! ┌──────────────┐
//! │ AssetLedger   │  can_transfer_from / transfer_from / transfer / balance_of
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`AssetId`](domain::AssetId), [`PoolEvent`](domain::PoolEvent), etc. |
//! | [`traits`] | The [`AssetLedger`](traits::AssetLedger) settlement seam |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger), an ERC-20 style multi-asset ledger |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), buildable in code or from TOML |
//! | [`pool`]   | The [`Pool`](pool::Pool) facade and its accounting and pricing internals |
//! | [`math`]   | Checked arithmetic and 256-bit intermediates |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (debug for quotes, info for committed
//! operations, warn for rejections and refunds, error for consistency
//! failures) and never installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
