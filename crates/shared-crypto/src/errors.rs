//! # Crypto Errors
//!
//! Error types for hashing and signature operations.

use thiserror::Error;

/// Errors from cryptographic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Secret key bytes do not form a valid scalar.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Signature components do not form a valid signature.
    #[error("Invalid signature encoding")]
    InvalidSignature,

    /// Recovery id outside {0, 1, 27, 28}.
    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// S component in the upper half of the curve order.
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Public key recovery from the digest failed.
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Recovered signer does not match the expected address.
    #[error("Signer mismatch")]
    SignerMismatch,
}
