//! # Integration Tests
//!
//! Cross-crate choreography: registry custody, both bridge state
//! machines, and the validator oracle in one deployment.

pub mod security;
pub mod swap_flows;
