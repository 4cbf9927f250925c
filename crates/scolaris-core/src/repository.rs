//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. The tenant-scoped capability
//! is defined once and parametrized by resource kind; implementations
//! must filter every read, update, and delete by the owning school.

use uuid::Uuid;

use crate::error::ScolarisResult;
use crate::models::school::{CreateSchool, School};
use crate::resource::Resource;

/// Tenant-scoped CRUD over a single resource kind.
///
/// A resource belonging to another school must behave exactly like a
/// missing one: implementations may not leak existence across tenants.
pub trait TenantScopedRepository<R: Resource>: Send + Sync {
    /// All resources owned by the school, newest-created first.
    ///
    /// Records sharing a creation timestamp come back in arbitrary
    /// relative order; no secondary sort key is applied.
    fn list(&self, school_id: Uuid) -> impl Future<Output = ScolarisResult<Vec<R>>> + Send;

    fn create(&self, input: R::Create) -> impl Future<Output = ScolarisResult<R>> + Send;

    fn update(
        &self,
        school_id: Uuid,
        id: Uuid,
        input: R::Update,
    ) -> impl Future<Output = ScolarisResult<R>> + Send;

    /// Tenant-scoped find-and-remove; returns the removed record.
    fn delete(
        &self,
        school_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = ScolarisResult<R>> + Send;
}

/// Schools are the tenant entity and live outside any tenant scope.
pub trait SchoolRepository: Send + Sync {
    fn create(&self, input: CreateSchool) -> impl Future<Output = ScolarisResult<School>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = ScolarisResult<School>> + Send;
}
