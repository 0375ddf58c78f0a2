//! Configuration for a constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, AssetId, AssetPair, FeeTier};
use crate::error::AmmError;

/// Immutable parameters of a pool: its two assets, the account that holds
/// its custody on the asset ledgers, and the swap fee.
///
/// # Validation
///
/// - `asset0 != asset1`.
/// - The fee is strictly below 100%.
///
/// # Example
///
/// ```
/// use cpmm_pool::config::PoolConfig;
///
/// let cfg = PoolConfig::from_toml_str(r#"
///     asset0   = "0x0101010101010101010101010101010101010101010101010101010101010101"
///     asset1   = "0x0202020202020202020202020202020202020202020202020202020202020202"
///     account  = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee"
///     fee_tier = 30
/// "#).expect("valid config");
/// assert_eq!(cfg.fee_tier().basis_points().get(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    asset0: AssetId,
    asset1: AssetId,
    account: AccountId,
    #[serde(default)]
    fee_tier: FeeTier,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if the assets are identical.
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn new(
        asset0: AssetId,
        asset1: AssetId,
        account: AccountId,
        fee_tier: FeeTier,
    ) -> Result<Self, AmmError> {
        let config = Self {
            asset0,
            asset1,
            account,
            fee_tier,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.  `fee_tier` is optional and
    /// defaults to zero.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the document does not parse.
    /// - Any error from [`validate`](Self::validate).
    pub fn from_toml_str(s: &str) -> Result<Self, AmmError> {
        let config: Self =
            toml::from_str(s).map_err(|e| AmmError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, AmmError> {
        toml::to_string(self).map_err(|e| AmmError::InvalidConfiguration(e.to_string()))
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if the assets are identical.
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.asset_pair()?;
        self.fee_tier.validate()
    }

    /// Returns the validated asset pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if the assets are identical.
    pub fn asset_pair(&self) -> Result<AssetPair, AmmError> {
        AssetPair::new(self.asset0, self.asset1)
    }

    /// Returns asset0.
    #[must_use]
    pub const fn asset0(&self) -> AssetId {
        self.asset0
    }

    /// Returns asset1.
    #[must_use]
    pub const fn asset1(&self) -> AssetId {
        self.asset1
    }

    /// Returns the pool's custody account.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::BasisPoints;

    fn asset(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    fn custody() -> AccountId {
        AccountId::from_bytes([0xee; 32])
    }

    #[test]
    fn valid_config() {
        let result = PoolConfig::new(asset(1), asset(2), custody(), FeeTier::ZERO);
        assert!(result.is_ok());
    }

    #[test]
    fn identical_assets_rejected() {
        let result = PoolConfig::new(asset(1), asset(1), custody(), FeeTier::ZERO);
        assert!(matches!(result, Err(AmmError::InvalidToken(_))));
    }

    #[test]
    fn full_fee_rejected() {
        let fee = FeeTier::new(BasisPoints::new(10_000));
        let result = PoolConfig::new(asset(1), asset(2), custody(), fee);
        assert!(matches!(result, Err(AmmError::InvalidFee(_))));
    }

    #[test]
    fn toml_round_trip() {
        let Ok(cfg) = PoolConfig::new(
            asset(1),
            asset(2),
            custody(),
            FeeTier::TIER_0_30_PERCENT,
        ) else {
            panic!("expected Ok");
        };
        let Ok(text) = cfg.to_toml_string() else {
            panic!("serializable");
        };
        assert!(text.contains("fee_tier = 30"));
        let Ok(back) = PoolConfig::from_toml_str(&text) else {
            panic!("parseable");
        };
        assert_eq!(back, cfg);
    }

    #[test]
    fn toml_fee_defaults_to_zero() {
        let text = format!(
            "asset0 = \"{}\"\nasset1 = \"{}\"\naccount = \"{}\"\n",
            asset(1),
            asset(2),
            custody()
        );
        let Ok(cfg) = PoolConfig::from_toml_str(&text) else {
            panic!("parseable");
        };
        assert_eq!(cfg.fee_tier(), FeeTier::ZERO);
    }

    #[test]
    fn toml_identical_assets_rejected() {
        let text = format!(
            "asset0 = \"{}\"\nasset1 = \"{}\"\naccount = \"{}\"\n",
            asset(1),
            asset(1),
            custody()
        );
        let result = PoolConfig::from_toml_str(&text);
        assert!(matches!(result, Err(AmmError::InvalidToken(_))));
    }

    #[test]
    fn toml_garbage_rejected() {
        let result = PoolConfig::from_toml_str("asset0 = 12");
        assert!(matches!(result, Err(AmmError::InvalidConfiguration(_))));
    }
}
