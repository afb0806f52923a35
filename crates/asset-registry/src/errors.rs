//! # Registry Errors
//!
//! Error types for registry authorization and lookups.

use shared_types::TokenId;
use thiserror::Error;

/// Errors from registry operations.
///
/// Every failure is a synchronous rejection of the triggering call; no
/// registry state is mutated on the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Caller does not hold the required capability.
    #[error("Unauthorized: caller lacks the minter capability")]
    Unauthorized,

    /// Caller is neither the owner nor an approved operator of the token.
    #[error("Caller is not owner nor approved for token {0}")]
    NotOwnerOrApproved(TokenId),

    /// Token was never minted or has been burned.
    #[error("Nonexistent asset: {0}")]
    NonexistentAsset(TokenId),

    /// A mint targeted an id that is already live.
    #[error("Asset already minted: {0}")]
    AlreadyMinted(TokenId),

    /// An enumeration query indexed past the owner's balance.
    #[error("Owner has no token at index {0}")]
    NoTokenAtIndex(usize),
}
