//! Shared application state.

use scolaris_db::{SurrealSchoolRepository, TenantStore};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

/// Shared state available to all handlers via `State<AppState>`.
///
/// Cheaply cloneable: both repositories share the one SurrealDB
/// connection handle.
#[derive(Clone)]
pub struct AppState {
    pub store: TenantStore<Any>,
    pub schools: SurrealSchoolRepository<Any>,
}

impl AppState {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            store: TenantStore::new(db.clone()),
            schools: SurrealSchoolRepository::new(db),
        }
    }
}
