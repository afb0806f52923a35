//! # Asset Registry
//!
//! Ownership tracking for uniquely-identified assets, with the
//! approve-then-move authorization pattern of ERC-721.
//!
//! ## Purpose
//!
//! The registry is the leaf of the bridge dependency chain: it knows
//! nothing about swaps or attestations, only who owns which token and who
//! may move it. The bridge operates it as an approved operator.
//!
//! ## Authorization Model
//!
//! | Operation | Allowed caller |
//! |-----------|----------------|
//! | `mint` | holder of the minter capability |
//! | `burn` | owner or approved operator |
//! | `approve` | owner |
//! | `transfer_from` | owner or approved operator |
//!
//! Minting is gated by an explicit capability set rather than a dynamic
//! role lookup; the deploying account is the initial member.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod registry;

// Re-exports
pub use errors::RegistryError;
pub use registry::AssetRegistry;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
