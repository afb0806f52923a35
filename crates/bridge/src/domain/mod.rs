//! # Domain Module
//!
//! Core domain types for the bridge state machine.

pub mod entities;
pub mod errors;
pub mod stores;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use stores::*;
pub use value_objects::*;
