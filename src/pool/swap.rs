//! Exact-input swap pricing on `x · y = k`.
//!
//! # Algorithm (asset `in` → asset `out`)
//!
//! 1. `effective_in = ⌊amount_in × (10 000 − fee_bps) / 10 000⌋`
//! 2. `amount_out = ⌊reserve_out × effective_in / (reserve_in + effective_in)⌋`
//! 3. Reject if `amount_out == 0` or `amount_out ≥ reserve_out`
//!
//! The whole `amount_in`, fee included, is later credited to `reserve_in`,
//! so `reserve0 × reserve1` never decreases across a swap.

use crate::domain::{Amount, AssetId, AssetPair, FeeTier, Reserves, SwapReceipt};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Prices selling `amount_in` of `token_in` against `reserves`.
///
/// # Errors
///
/// - [`AmmError::InvalidToken`] if `token_in` is not in `pair`.
/// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientOutput`] if the trade would pay nothing or
///   would empty the output reserve.
/// - [`AmmError::Overflow`] if `reserve_in + effective_in` exceeds `u128`.
pub(crate) fn quote_exact_in(
    pair: &AssetPair,
    reserves: Reserves,
    fee_tier: FeeTier,
    token_in: &AssetId,
    amount_in: Amount,
) -> Result<SwapReceipt, AmmError> {
    let direction = pair.direction(token_in)?;
    if amount_in.is_zero() {
        return Err(AmmError::ZeroAmount("amount_in"));
    }
    let token_out = pair.other(token_in)?;
    let (reserve_in, reserve_out) = reserves.in_out(direction);

    let effective_in = fee_tier.effective_input(amount_in)?;
    if effective_in.is_zero() {
        return Err(AmmError::InsufficientOutput);
    }
    let denominator = reserve_in.safe_add(&effective_in)?;
    let amount_out =
        reserve_out.safe_mul_div(effective_in.get(), denominator.get())?;

    if amount_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientOutput);
    }

    let fee = amount_in.safe_sub(&effective_in)?;
    SwapReceipt::new(*token_in, token_out, amount_in, amount_out, fee)
}

/// Price of `base` in units of the other asset, as the unreduced ratio
/// `(quote_reserve, base_reserve)`.
///
/// # Errors
///
/// Returns [`AmmError::InvalidToken`] if `base` is not in `pair`.
pub(crate) fn spot_price(
    pair: &AssetPair,
    reserves: Reserves,
    base: &AssetId,
) -> Result<(Amount, Amount), AmmError> {
    let (base_reserve, quote_reserve) = reserves.in_out(pair.direction(base)?);
    Ok((quote_reserve, base_reserve))
}
