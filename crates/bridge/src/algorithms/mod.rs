//! # Algorithms Module
//!
//! Deterministic encodings shared by both bridge instances.

pub mod canonical;

pub use canonical::canonical_hash;
