//! The pool's two distinct assets and swap direction.

use super::AssetId;
use crate::error::AmmError;

/// Direction of a swap through the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// asset0 in, asset1 out.
    ZeroForOne,
    /// asset1 in, asset0 out.
    OneForZero,
}

/// The two distinct assets of a pool, fixed at creation.
///
/// Unlike a canonically sorted pair, `AssetPair` keeps the order it was
/// built with: whatever was passed first is `asset0` for the life of the
/// pool, and reserves are reported in that order.
///
/// # Examples
///
/// ```
/// use cpmm_pool::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([2u8; 32]);
/// let b = AssetId::from_bytes([1u8; 32]);
///
/// let pair = AssetPair::new(a, b).expect("distinct assets");
/// assert_eq!(pair.asset0(), a);
/// assert_eq!(pair.asset1(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset0: AssetId,
    asset1: AssetId,
}

impl AssetPair {
    /// Creates a pair, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both ids are equal.
    pub fn new(asset0: AssetId, asset1: AssetId) -> Result<Self, AmmError> {
        if asset0 == asset1 {
            return Err(AmmError::InvalidToken("pool requires two distinct assets"));
        }
        Ok(Self { asset0, asset1 })
    }

    /// First asset.
    #[must_use]
    pub const fn asset0(&self) -> AssetId {
        self.asset0
    }

    /// Second asset.
    #[must_use]
    pub const fn asset1(&self) -> AssetId {
        self.asset1
    }

    /// Returns `true` if `asset` is one of the two.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset0 == *asset || self.asset1 == *asset
    }

    /// Returns the counterpart of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `asset` is not in the pair.
    pub fn other(&self, asset: &AssetId) -> Result<AssetId, AmmError> {
        match self.direction(asset)? {
            Direction::ZeroForOne => Ok(self.asset1),
            Direction::OneForZero => Ok(self.asset0),
        }
    }

    /// Resolves the swap direction for an input asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token_in` is not in the pair.
    pub fn direction(&self, token_in: &AssetId) -> Result<Direction, AmmError> {
        if *token_in == self.asset0 {
            Ok(Direction::ZeroForOne)
        } else if *token_in == self.asset1 {
            Ok(Direction::OneForZero)
        } else {
            Err(AmmError::InvalidToken("token is not one of the pool assets"))
        }
    }
}
