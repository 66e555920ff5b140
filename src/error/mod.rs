//! Error handling
//!
//! Defines error types and handling for the document server.

pub mod handlers;
pub mod types;

pub use types::*;
