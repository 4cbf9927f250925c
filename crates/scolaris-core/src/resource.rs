//! The resource-schema contract shared by all tenant-owned kinds.

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ScolarisResult;

/// A merge-patch update paired with the tenant reference that scopes it.
#[derive(Debug, Clone)]
pub struct TenantPatch<U> {
    pub school_id: Uuid,
    pub patch: U,
}

/// Schema contract for a tenant-owned resource kind.
///
/// Binds a domain type to its wire payloads and validation rules. The
/// store engine and the HTTP handlers are parametrized over this trait,
/// so each resource kind declares its schema once instead of repeating
/// the CRUD plumbing.
pub trait Resource: Serialize + Sized + Send + Sync + 'static {
    /// Human-facing entity name used in messages and errors.
    const ENTITY: &'static str;

    /// Validated creation input, carrying the owning school.
    type Create: Send + 'static;
    /// Validated merge-patch input.
    type Update: Send + 'static;
    /// Raw creation payload as received on the wire.
    type CreatePayload: DeserializeOwned + Send + 'static;
    /// Raw update payload as received on the wire.
    type UpdatePayload: DeserializeOwned + Send + 'static;

    /// Validate and normalize a creation payload.
    ///
    /// Required fields are checked before the tenant reference, which
    /// is checked before any store interaction.
    fn validate_create(payload: Self::CreatePayload) -> ScolarisResult<Self::Create>;

    /// Validate and normalize an update payload. Absent fields stay
    /// absent; the store leaves them untouched.
    fn validate_update(payload: Self::UpdatePayload) -> ScolarisResult<TenantPatch<Self::Update>>;
}
