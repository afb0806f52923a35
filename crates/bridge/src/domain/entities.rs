//! # Domain Entities
//!
//! The canonical swap record and the notifications derived from it.

use super::errors::BridgeError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, ChainName, TokenId};

/// Canonical description of one cross-ledger transfer.
///
/// The tuple `(sender, token_id, chain_from, chain_to, nonce)` is globally
/// unique per swap attempt; its canonical hash is the sole key used for
/// lookups and replay checks on both ledgers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRecord {
    /// Owner initiating the swap, entitled to receive on the destination.
    pub sender: Address,
    /// Asset being moved.
    pub token_id: TokenId,
    /// Ledger the asset leaves.
    pub chain_from: ChainName,
    /// Ledger the asset arrives on.
    pub chain_to: ChainName,
    /// Per-(sender, source-ledger) sequence number.
    pub nonce: u64,
    /// Discriminates a real record from the absent default. A storage-layer
    /// flag only; never an input to the canonical hash.
    pub present: bool,
}

impl SwapRecord {
    /// Build a record, enforcing that the swap crosses ledgers.
    pub fn new(
        sender: Address,
        token_id: TokenId,
        chain_from: ChainName,
        chain_to: ChainName,
        nonce: u64,
    ) -> Result<Self, BridgeError> {
        if chain_from == chain_to {
            return Err(BridgeError::SameChainSwap(chain_from));
        }
        Ok(Self {
            sender,
            token_id,
            chain_from,
            chain_to,
            nonce,
            present: true,
        })
    }
}

impl Default for SwapRecord {
    /// The absent record: all-zero fields, `present = false`.
    fn default() -> Self {
        Self {
            sender: [0u8; 20],
            token_id: 0,
            chain_from: ChainName::Bsc,
            chain_to: ChainName::Bsc,
            nonce: 0,
            present: false,
        }
    }
}

/// Payload of an `InitSwap` or `RedeemSwap` notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapEvent {
    /// Asset owner on the source ledger.
    pub sender: Address,
    /// Asset being moved.
    pub token_id: TokenId,
    /// Source ledger.
    pub chain_from: ChainName,
    /// Destination ledger.
    pub chain_to: ChainName,
    /// Nonce assigned at initiation.
    pub nonce: u64,
}

impl SwapEvent {
    /// Rebuild the canonical record this event describes.
    pub fn to_record(&self) -> Result<SwapRecord, BridgeError> {
        SwapRecord::new(
            self.sender,
            self.token_id,
            self.chain_from,
            self.chain_to,
            self.nonce,
        )
    }
}

impl From<&SwapRecord> for SwapEvent {
    fn from(record: &SwapRecord) -> Self {
        Self {
            sender: record.sender,
            token_id: record.token_id,
            chain_from: record.chain_from,
            chain_to: record.chain_to,
            nonce: record.nonce,
        }
    }
}

/// Outbound bridge notification, consumed by the validator and by
/// operational tooling for audit and indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeEvent {
    /// A swap was initiated and the asset taken into custody.
    InitSwap(SwapEvent),
    /// A swap was redeemed and the asset handed to its sender.
    RedeemSwap(SwapEvent),
}

impl BridgeEvent {
    /// The swap this notification is about.
    pub fn swap(&self) -> &SwapEvent {
        match self {
            BridgeEvent::InitSwap(event) | BridgeEvent::RedeemSwap(event) => event,
        }
    }

    /// Whether this is an initiation notification.
    pub fn is_init(&self) -> bool {
        matches!(self, BridgeEvent::InitSwap(_))
    }
}
