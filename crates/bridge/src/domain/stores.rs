//! # Swap Stores
//!
//! The append-only event store and the per-sender nonce counter. Both are
//! owned exclusively by one bridge instance and mutated only inside its
//! state-changing calls.

use super::entities::SwapRecord;
use super::errors::BridgeError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash};
use std::collections::HashMap;

/// Append-only map from canonical hash to the recorded swap.
///
/// Entries are inserted exactly once, at initiation on the source ledger
/// or at redemption on the destination ledger, and never overwritten or
/// deleted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventStore {
    entries: HashMap<Hash, SwapRecord>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a swap under its canonical hash.
    ///
    /// Fails if the hash is already present; existing entries are
    /// immutable.
    pub fn insert(&mut self, digest: Hash, record: SwapRecord) -> Result<(), BridgeError> {
        if self.entries.contains_key(&digest) {
            return Err(BridgeError::AlreadyRecorded(digest));
        }
        self.entries.insert(digest, record);
        Ok(())
    }

    /// Look up a recorded swap.
    pub fn get(&self, digest: &Hash) -> Option<&SwapRecord> {
        self.entries.get(digest)
    }

    /// Whether the hash has been recorded on this ledger.
    pub fn contains(&self, digest: &Hash) -> bool {
        self.entries.contains_key(digest)
    }

    /// Number of recorded swaps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no swap has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Next nonce to assign, per sender. Zero-initialized, never reset.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NonceStore {
    next: HashMap<Address, u64>,
}

impl NonceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The nonce the next initiation from `sender` will use.
    pub fn next_of(&self, sender: &Address) -> u64 {
        self.next.get(sender).copied().unwrap_or(0)
    }

    /// Assign the current nonce to `sender` and advance by exactly one.
    ///
    /// Returns the pre-increment value: a sender's first swap uses 0,
    /// matching their count of prior swaps.
    pub fn assign(&mut self, sender: Address) -> u64 {
        let entry = self.next.entry(sender).or_insert(0);
        let assigned = *entry;
        *entry += 1;
        assigned
    }
}
