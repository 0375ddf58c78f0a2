//! Snapshot of the pool's two reserves.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Direction};
use crate::math::U256;

/// Quantities of asset0 and asset1 held by the pool, in pair order.
///
/// This is a value snapshot: reading it twice without an intervening
/// operation yields equal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Reserves {
    /// Quantity of asset0.
    pub reserve0: Amount,
    /// Quantity of asset1.
    pub reserve1: Amount,
}

impl Reserves {
    /// Creates a snapshot.
    pub const fn new(reserve0: Amount, reserve1: Amount) -> Self {
        Self { reserve0, reserve1 }
    }

    /// Returns `true` if either side is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve0.is_zero() || self.reserve1.is_zero()
    }

    /// Returns `(reserve_in, reserve_out)` for a swap direction.
    #[must_use]
    pub const fn in_out(&self, direction: Direction) -> (Amount, Amount) {
        match direction {
            Direction::ZeroForOne => (self.reserve0, self.reserve1),
            Direction::OneForZero => (self.reserve1, self.reserve0),
        }
    }

    /// The curve invariant `reserve0 × reserve1`, at full width.
    #[must_use]
    pub const fn product(&self) -> U256 {
        U256::widening_mul(self.reserve0.get(), self.reserve1.get())
    }
}

impl From<(u128, u128)> for Reserves {
    fn from((r0, r1): (u128, u128)) -> Self {
        Self::new(Amount::new(r0), Amount::new(r1))
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.reserve0, self.reserve1)
    }
}
