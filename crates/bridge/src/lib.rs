//! # Bridge - Cross-Ledger Swap State Machine
//!
//! Moves a uniquely-identified asset between two otherwise-disconnected
//! ledgers: lock on the source side, redeem on the destination side against
//! a validator-signed attestation over the swap's canonical hash.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Trust Model
//!
//! There is no channel between the two bridge instances. The canonical
//! hash plus the recoverable signature over it is the sole artifact that
//! crosses the trust boundary:
//!
//! | Defense | Mechanism |
//! |---------|-----------|
//! | Forgery | signer recovery must yield the trusted validator address |
//! | Tampering | any field change alters the canonical hash |
//! | Replay | the event store is append-only, keyed by the hash |
//! | Vacuous records | absence is map non-membership, never a digest |
//!
//! ## Module Structure
//!
//! ```text
//! bridge/
//! ├── domain/          # SwapRecord, events, stores, config, errors
//! ├── algorithms/      # Canonical hash encoding
//! ├── ports/           # AssetCustody, AttestationVerifier
//! ├── adapters/        # Registry custody, ECDSA signer check
//! └── service.rs       # The Bridge state machine
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{EcdsaAttestationVerifier, RegistryCustody};
pub use algorithms::canonical_hash;
pub use domain::{
    BridgeConfig, BridgeError, BridgeEvent, EventStore, NonceStore, SwapEvent, SwapRecord,
};
pub use ports::{AssetCustody, AttestationVerifier, MockCustody};
pub use service::Bridge;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
