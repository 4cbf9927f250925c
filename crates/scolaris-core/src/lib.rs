//! SCOLARIS Core — domain models, validation, and data-access contracts
//! for the school administration backend.
//!
//! This crate provides:
//! - Domain models and their wire payloads ([`models`])
//! - The resource-schema contract ([`resource::Resource`])
//! - Declarative field validation ([`validate`])
//! - Repository capability traits ([`repository`])
//! - Error types ([`error::ScolarisError`])
//!
//! It has no store or HTTP dependency; everything here is usable from
//! both the server and the client crates.

pub mod error;
pub mod models;
pub mod repository;
pub mod resource;
pub mod validate;
