//! # Adapters Module
//!
//! Concrete implementations of the outbound ports: registry-backed
//! custody and the single-signer ECDSA attestation check.

pub mod registry_custody;
pub mod verifier;

pub use registry_custody::RegistryCustody;
pub use verifier::EcdsaAttestationVerifier;
