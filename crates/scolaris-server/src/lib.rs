//! SCOLARIS Server — HTTP surface for the school administration API.
//!
//! Exposed as a library so integration tests can build the exact
//! router the binary serves.

pub mod config;
pub mod envelope;
pub mod error;
pub mod routes;
pub mod state;
