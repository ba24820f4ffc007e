// libleviton/src/lib.rs

//! libleviton
//!
//! Feedback decoding and light control for Leviton USB lighting
//! controllers: drains poll sessions, reassembles and classifies status
//! records, and reconciles them against the configured lights.
#![warn(missing_docs)]

pub mod catalog;
#[cfg(feature = "config")]
pub mod config;
pub mod constants;
pub mod controller;
pub mod entity;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reconcile;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the value types are available to consumers and to the prelude.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
