//! Opaque 32-byte identities for assets and accounts.
//!
//! Both ids are plain byte strings: the pool never interprets them beyond
//! equality.  They render and serialize as lowercase hex with a `0x`
//! prefix, and parse with or without it.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AmmError;

macro_rules! hex_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; 32]);

        impl $name {
            /// Creates an id from raw bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Returns the underlying 32-byte representation.
            #[must_use]
            pub const fn as_bytes(&self) -> [u8; 32] {
                self.0
            }

            /// Returns the all-zero id.
            #[must_use]
            pub const fn zero() -> Self {
                Self([0u8; 32])
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // Eight hex digits are enough to tell ids apart in logs.
                write!(f, "{}(0x{}…)", stringify!($name), hex::encode(&self.0[..4]))
            }
        }

        impl FromStr for $name {
            type Err = AmmError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_hex32(s).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

hex_id! {
    /// Identity of one of the two fungible assets a pool trades.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpmm_pool::domain::AssetId;
    ///
    /// let id = AssetId::from_bytes([1u8; 32]);
    /// let parsed: AssetId = id.to_string().parse().expect("round trip");
    /// assert_eq!(parsed, id);
    /// ```
    AssetId
}

hex_id! {
    /// Identity of a participant: a liquidity provider, a trader, or the
    /// pool's own custody account on the asset ledgers.
    AccountId
}

fn parse_hex32(s: &str) -> Result<[u8; 32], AmmError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(digits, &mut bytes).map_err(|e| {
        AmmError::InvalidConfiguration(format!("invalid 32-byte hex id {s:?}: {e}"))
    })?;
    Ok(bytes)
}
