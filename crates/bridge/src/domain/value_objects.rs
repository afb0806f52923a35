//! # Domain Value Objects
//!
//! Immutable configuration for one bridge instance.

use super::errors::BridgeError;
use serde::{Deserialize, Serialize};
use shared_types::ChainName;

/// Static configuration of a bridge instance.
///
/// Passed at construction and never mutated; there is no module-level
/// state. The counterpart ledger is where swaps initiated here are
/// redeemed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Ledger this instance runs on.
    pub chain: ChainName,
    /// Ledger on the other side of the bridge.
    pub counterpart: ChainName,
}

impl BridgeConfig {
    /// Build a configuration, rejecting a same-ledger pair.
    pub fn new(chain: ChainName, counterpart: ChainName) -> Result<Self, BridgeError> {
        if chain == counterpart {
            return Err(BridgeError::SameChainSwap(chain));
        }
        Ok(Self { chain, counterpart })
    }

    /// Configuration for `chain` with its default counterpart.
    pub fn for_chain(chain: ChainName) -> Self {
        Self {
            chain,
            counterpart: chain.counterpart(),
        }
    }
}
