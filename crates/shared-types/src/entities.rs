//! # Core Identifier Types
//!
//! Fixed-width primitives used across the bridge workspace.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `Hash`
//! - **Assets**: `TokenId`
//! - **Ledgers**: `ChainName`

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 32-byte Keccak-256 hash.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// Unique identifier of a non-fungible asset within its registry.
pub type TokenId = u64;

/// The two ledgers bridged by this deployment.
///
/// The discriminant is the wire value used in event payloads and in the
/// canonical hash encoding, so the order of variants is part of the
/// protocol and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ChainName {
    /// Binance Smart Chain.
    Bsc = 0,
    /// Polygon (Matic).
    Polygon = 1,
}

/// Error returned when decoding an unknown ledger identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown chain id: {0}")]
pub struct ChainNameError(pub u8);

impl ChainName {
    /// Wire identifier of this ledger.
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// The ledger on the other side of the bridge.
    pub fn counterpart(&self) -> ChainName {
        match self {
            ChainName::Bsc => ChainName::Polygon,
            ChainName::Polygon => ChainName::Bsc,
        }
    }
}

impl TryFrom<u8> for ChainName {
    type Error = ChainNameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(ChainName::Bsc),
            1 => Ok(ChainName::Polygon),
            other => Err(ChainNameError(other)),
        }
    }
}

impl std::fmt::Display for ChainName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainName::Bsc => write!(f, "BSC"),
            ChainName::Polygon => write!(f, "POLYGON"),
        }
    }
}

/// Abbreviated hex rendering of an address or hash for log lines.
///
/// Full values are 40/64 hex chars; logs only need enough to correlate.
pub fn short_hex(bytes: &[u8]) -> String {
    let n = bytes.len().min(4);
    format!("0x{}..", hex::encode(&bytes[..n]))
}
