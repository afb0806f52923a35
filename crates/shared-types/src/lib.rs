//! # Shared Types Crate
//!
//! Primitive identifiers shared by the registry, bridge, and validator
//! crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all cross-crate identifier types live here.
//! - **Fixed-width primitives**: addresses and hashes are plain byte arrays
//!   so they encode identically on both ledger instances.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entities;

pub use entities::{short_hex, Address, ChainName, ChainNameError, Hash, TokenId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
