//! # Canonical Hash
//!
//! Order-sensitive, fixed-width digest of a swap record. A record built on
//! one ledger and rebuilt from explicit arguments on the other hashes
//! identically, so the digest doubles as the storage key and the unit of
//! trust for attestations.

use crate::domain::SwapRecord;
use shared_crypto::hashing::keccak256_many;
use shared_types::Hash;

/// Compute the canonical Keccak-256 digest of a swap record.
///
/// Encoding: five 32-byte big-endian words, one per field, in declaration
/// order (sender left-padded, then token id, source chain id, destination
/// chain id, nonce). 160 bytes total.
///
/// The `present` discriminator is deliberately not hashed: it flags map
/// membership at the storage layer, and hashing it would let the digest of
/// an all-zero "real" record collide with a notion of absence.
pub fn canonical_hash(record: &SwapRecord) -> Hash {
    let mut sender = [0u8; 32];
    sender[12..].copy_from_slice(&record.sender);

    let mut token_id = [0u8; 32];
    token_id[24..].copy_from_slice(&record.token_id.to_be_bytes());

    let mut chain_from = [0u8; 32];
    chain_from[31] = record.chain_from.id();

    let mut chain_to = [0u8; 32];
    chain_to[31] = record.chain_to.id();

    let mut nonce = [0u8; 32];
    nonce[24..].copy_from_slice(&record.nonce.to_be_bytes());

    keccak256_many(&[&sender, &token_id, &chain_from, &chain_to, &nonce])
}
