//! # Domain Errors
//!
//! Error taxonomy for bridge operations.
//!
//! Registry failures (`Unauthorized`, `NotOwnerOrApproved`,
//! `NonexistentAsset`) propagate transparently so callers see the same
//! rejection the registry raised. The reference system collapsed "already
//! redeemed" into its invalid-signature rejection; the two conditions were
//! always distinct checks internally and are distinct variants here.

use asset_registry::RegistryError;
use shared_types::{ChainName, Hash};
use thiserror::Error;

/// Bridge error types.
///
/// Every failure is an immediate, synchronous rejection with no partial
/// state mutation: either the whole transition (asset move + store write +
/// nonce bump) commits or none of it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Authorization or lookup failure raised by the asset registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Attestation missing, malformed, or signed by the wrong identity.
    #[error("redeemSwap: invalid signature")]
    InvalidSignature,

    /// The canonical hash was already consumed on this ledger.
    #[error("Swap already redeemed: {0:?}")]
    AlreadyRedeemed(Hash),

    /// The event store refused to overwrite an existing entry.
    #[error("Event store entry already recorded: {0:?}")]
    AlreadyRecorded(Hash),

    /// A swap's source and destination ledgers must differ.
    #[error("Swap cannot stay on one ledger: {0}")]
    SameChainSwap(ChainName),
}
