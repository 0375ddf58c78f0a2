//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for a pool: asset pair,
//! custody account and swap fee.  It can be built in code or loaded from
//! TOML.

mod pool_config;

pub use pool_config::PoolConfig;
