//! # Validator - Attestation Oracle
//!
//! The off-ledger authority that watches a source bridge for initiated
//! swaps and produces the recoverable signature a destination bridge
//! requires for redemption.
//!
//! The validator holds the trust-anchor keypair. Its attestation commits
//! to nothing but the canonical hash: the destination rebuilds the hash
//! from the redemption arguments, so any tampering in transit voids the
//! signature.
//!
//! ## Module Structure
//!
//! ```text
//! validator/
//! ├── feed.rs      # SwapFeed port + in-process bridge adapter
//! ├── oracle.rs    # The Validator signer
//! └── errors.rs    # Feed and signing failures
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod feed;
pub mod oracle;

// Re-exports
pub use errors::ValidatorError;
pub use feed::{BridgeFeed, SwapFeed};
pub use oracle::{Attestation, Validator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
