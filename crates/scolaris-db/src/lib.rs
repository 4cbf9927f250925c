//! SCOLARIS Database — SurrealDB connection management, schema, and
//! the tenant-scoped store engine.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - The generic tenant-scoped store ([`TenantStore`]) and the
//!   per-resource descriptors it is parametrized over
//!   ([`SurrealResource`])
//! - The school (tenant) repository ([`SurrealSchoolRepository`])
//! - Error types ([`DbError`])

mod connection;
mod error;
mod resources;
mod school;
mod schema;
mod store;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use school::SurrealSchoolRepository;
pub use schema::{run_migrations, schema_v1};
pub use store::{SurrealResource, TenantStore, UniqueIndex};
