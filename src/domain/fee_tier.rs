//! The pool's single swap-fee parameter.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::basis_points::MAX_BPS;
use super::{Amount, BasisPoints};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Swap fee taken from the input amount, in basis points.
///
/// The fee is `N / D` with `D = 10 000` and `N` the basis points.  The
/// retained part of the input never leaves the pool, so liquidity
/// providers earn it through the growth of the reserves.
///
/// The default is [`FeeTier::ZERO`].
///
/// # Examples
///
/// ```
/// use cpmm_pool::domain::{Amount, FeeTier};
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(tier.basis_points().get(), 30);
/// assert_eq!(tier.effective_input(Amount::new(1_000)), Ok(Amount::new(997)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee: the product of the reserves is preserved up to rounding.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.30% fee (30 bp).
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Fee denominator `D`.
    pub const DENOMINATOR: u128 = MAX_BPS as u128;

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    ///
    /// Range is checked by [`validate`](Self::validate).
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Fee numerator `N`.
    #[must_use]
    pub const fn numerator(&self) -> u128 {
        self.0.get() as u128
    }

    /// Returns `true` if no fee is taken.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.get() == 0
    }

    /// Checks that the fee leaves something to trade with.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.0.get() >= MAX_BPS {
            return Err(AmmError::InvalidFee("fee must be below 10000bp"));
        }
        Ok(())
    }

    /// Input left after the fee: `amount × (D − N) / D`, floored.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the tier is invalid.  The result
    /// never exceeds `amount`, so the division itself cannot overflow.
    pub fn effective_input(&self, amount: Amount) -> Result<Amount, AmmError> {
        self.validate()?;
        let complement = Self::DENOMINATOR - self.numerator();
        amount.safe_mul_div(complement, Self::DENOMINATOR)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
