//! 256-bit intermediates for `u128` pricing and accounting formulas.
//!
//! Reserves and shares are `u128`, so products such as
//! `reserve_out × amount_in` or `amount0 × total_supply` need twice that
//! width before they are divided back down.  [`U256`] implements only
//! the operations those formulas need: widening multiplication,
//! division by a `u128`, ordering and an integer square root.

use core::fmt;

/// Unsigned 256-bit integer stored as two `u128` limbs.
///
/// The derived ordering compares `hi` before `lo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct U256 {
    hi: u128,
    lo: u128,
}

impl U256 {
    /// Zero.
    pub const ZERO: Self = Self { hi: 0, lo: 0 };

    /// Widens a `u128`.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self { hi: 0, lo: value }
    }

    /// High limb.
    #[must_use]
    pub const fn hi(&self) -> u128 {
        self.hi
    }

    /// Low limb.
    #[must_use]
    pub const fn lo(&self) -> u128 {
        self.lo
    }

    /// Returns the value as `u128` if it fits.
    #[must_use]
    pub const fn to_u128(&self) -> Option<u128> {
        if self.hi == 0 {
            Some(self.lo)
        } else {
            None
        }
    }

    /// Full product of two `u128` values.  Never overflows.
    #[must_use]
    pub const fn widening_mul(a: u128, b: u128) -> Self {
        // Schoolbook multiplication on 64-bit halves.
        let a_lo = a as u64 as u128;
        let a_hi = a >> 64;
        let b_lo = b as u64 as u128;
        let b_hi = b >> 64;

        let ll = a_lo * b_lo;
        let lh = a_lo * b_hi;
        let hl = a_hi * b_lo;
        let hh = a_hi * b_hi;

        let mid = lh.wrapping_add(hl);
        let mid_carry = if mid < lh { 1u128 << 64 } else { 0 };

        let lo = ll.wrapping_add(mid << 64);
        let lo_carry = if lo < ll { 1 } else { 0 };
        let hi = hh + (mid >> 64) + mid_carry + lo_carry;

        Self { hi, lo }
    }

    /// Divides by a `u128`, returning `(quotient, remainder)`.
    ///
    /// Returns `None` if `divisor` is zero or the quotient does not fit in
    /// `u128`.
    #[must_use]
    pub const fn div_rem_u128(&self, divisor: u128) -> Option<(u128, u128)> {
        if divisor == 0 {
            return None;
        }
        if self.hi == 0 {
            return Some((self.lo / divisor, self.lo % divisor));
        }
        // A high limb at or above the divisor means a quotient of 2^128 or more.
        if self.hi >= divisor {
            return None;
        }

        // Restoring long division over the low limb, one bit at a time.
        // `rem < divisor` holds on entry to every iteration.
        let mut rem = self.hi;
        let mut quot = 0u128;
        let mut bit = 128;
        while bit > 0 {
            bit -= 1;
            let carry = rem >> 127;
            rem = (rem << 1) | ((self.lo >> bit) & 1);
            if carry == 1 || rem >= divisor {
                rem = rem.wrapping_sub(divisor);
                quot |= 1u128 << bit;
            }
        }
        Some((quot, rem))
    }

    /// Largest `r` with `r × r ≤ self`.  The root of a 256-bit value always
    /// fits in 128 bits.
    #[must_use]
    pub fn isqrt(&self) -> u128 {
        let mut root = 0u128;
        let mut bit = 128;
        while bit > 0 {
            bit -= 1;
            let candidate = root | (1u128 << bit);
            if Self::widening_mul(candidate, candidate) <= *self {
                root = candidate;
            }
        }
        root
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

/// Always hexadecimal with a `0x` prefix and no leading zeros.
impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hi == 0 {
            write!(f, "{:#x}", self.lo)
        } else {
            write!(f, "{:#x}{:032x}", self.hi, self.lo)
        }
    }
}

/// Computes `floor(a × b / divisor)` with a 256-bit intermediate product.
///
/// Returns `None` if `divisor` is zero or the result exceeds `u128`.
#[must_use]
pub fn mul_div(a: u128, b: u128, divisor: u128) -> Option<u128> {
    U256::widening_mul(a, b)
        .div_rem_u128(divisor)
        .map(|(quot, _)| quot)
}
