//! # Keccak-256 Hashing
//!
//! Ethereum-compatible Keccak-256, used for canonical swap digests and
//! address derivation.

use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Hash data with Keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Hash multiple inputs as one concatenated message.
pub fn keccak256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for input in inputs {
        hasher.update(input);
    }
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}
