//! # Validator Errors

use shared_crypto::CryptoError;
use thiserror::Error;

/// Validator error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    /// The watched bridge has no initiation matching the query.
    #[error("No events found!")]
    NoEventFound,

    /// The signing key rejected the digest.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The queried event does not describe a cross-ledger swap.
    #[error("Refusing to attest malformed swap: {0}")]
    MalformedSwap(String),
}
