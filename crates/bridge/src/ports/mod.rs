//! # Ports Module
//!
//! Hexagonal architecture ports (outbound dependencies of the state
//! machine).

pub mod outbound;

pub use outbound::*;
