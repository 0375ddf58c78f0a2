//! Share pricing for deposits and withdrawals.
//!
//! Pure functions over a reserve snapshot; the facade decides what to do
//! with the result.
//!
//! # Minting
//!
//! - Empty pool: `minted = ⌊√(amount0 × amount1)⌋`
//! - Otherwise: `minted = min(⌊amount0 × S / r0⌋, ⌊amount1 × S / r1⌋)`
//!
//! Taking the minimum means an unbalanced deposit donates its excess to
//! existing holders.
//!
//! # Redeeming
//!
//! `amount_i = ⌊shares × r_i / S⌋` for each asset.
//!
//! All products are formed at 256 bits, so no intermediate can overflow.

use crate::domain::{Amount, Liquidity, Reserves};
use crate::error::AmmError;
use crate::math::{CheckedArithmetic, U256};

/// Shares minted for depositing `amount0` and `amount1`.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if either amount is zero.
/// - [`AmmError::ZeroLiquidityMinted`] if the deposit is too small to earn
///   a share.
/// - [`AmmError::DivisionByZero`] if shares exist against an empty reserve.
pub(crate) fn compute_mint(
    amount0: Amount,
    amount1: Amount,
    reserves: Reserves,
    total_supply: Liquidity,
) -> Result<Liquidity, AmmError> {
    if amount0.is_zero() {
        return Err(AmmError::ZeroAmount("amount0"));
    }
    if amount1.is_zero() {
        return Err(AmmError::ZeroAmount("amount1"));
    }

    let minted = if total_supply.is_zero() {
        Liquidity::new(U256::widening_mul(amount0.get(), amount1.get()).isqrt())
    } else {
        let by0 =
            total_supply.safe_mul_div(amount0.get(), reserves.reserve0.get())?;
        let by1 =
            total_supply.safe_mul_div(amount1.get(), reserves.reserve1.get())?;
        by0.min(by1)
    };

    if minted.is_zero() {
        return Err(AmmError::ZeroLiquidityMinted);
    }
    Ok(minted)
}

/// Assets paid out for burning `shares`.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `shares` is zero.
/// - [`AmmError::InsufficientBalance`] if `shares` exceeds the supply.
/// - [`AmmError::ZeroOutput`] if both payouts round to zero.
pub(crate) fn compute_redeem(
    shares: Liquidity,
    reserves: Reserves,
    total_supply: Liquidity,
) -> Result<(Amount, Amount), AmmError> {
    if shares.is_zero() {
        return Err(AmmError::ZeroAmount("shares"));
    }
    if shares > total_supply {
        return Err(AmmError::InsufficientBalance {
            requested: shares,
            available: total_supply,
        });
    }

    let amount0 = reserves
        .reserve0
        .safe_mul_div(shares.get(), total_supply.get())?;
    let amount1 = reserves
        .reserve1
        .safe_mul_div(shares.get(), total_supply.get())?;

    if amount0.is_zero() && amount1.is_zero() {
        return Err(AmmError::ZeroOutput);
    }
    Ok((amount0, amount1))
}
