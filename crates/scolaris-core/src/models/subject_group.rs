//! Subject group domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScolarisResult;
use crate::resource::{Resource, TenantPatch};
use crate::validate;

/// A named grouping of subjects (e.g. a stream or a department).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectGroup {
    pub id: Uuid,
    pub school_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubjectGroup {
    pub school_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateSubjectGroup {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSubjectGroupPayload {
    pub school_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSubjectGroupPayload {
    pub school_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Resource for SubjectGroup {
    const ENTITY: &'static str = "subject group";

    type Create = CreateSubjectGroup;
    type Update = UpdateSubjectGroup;
    type CreatePayload = CreateSubjectGroupPayload;
    type UpdatePayload = UpdateSubjectGroupPayload;

    fn validate_create(payload: Self::CreatePayload) -> ScolarisResult<CreateSubjectGroup> {
        let name = validate::required_text("name", payload.name)?;
        let description = validate::optional_text(payload.description);
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        Ok(CreateSubjectGroup {
            school_id,
            name,
            description,
        })
    }

    fn validate_update(
        payload: Self::UpdatePayload,
    ) -> ScolarisResult<TenantPatch<UpdateSubjectGroup>> {
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        Ok(TenantPatch {
            school_id,
            patch: UpdateSubjectGroup {
                name: validate::patch_text("name", payload.name)?,
                description: validate::patch_text("description", payload.description)?,
            },
        })
    }
}
