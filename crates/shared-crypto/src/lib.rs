//! # Shared Crypto - Bridge Cryptographic Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 | Canonical digests, address derivation |
//! | `ecdsa` | secp256k1 | Validator attestations (recoverable) |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic nonces, low-S normalization
//! - **Recoverable signatures**: the `(r, s, v)` encoding is chain-agnostic,
//!   so one attestation validates on either ledger instance
//! - **Keccak-256**: Ethereum-compatible digests and address derivation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{recover_address, verify_signer, RecoverableSignature, Secp256k1KeyPair};
pub use errors::CryptoError;
pub use hashing::keccak256;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
