//! Reason domain model: reusable justification texts attached to
//! administrative actions (leave approvals, expense write-offs).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScolarisResult;
use crate::resource::{Resource, TenantPatch};
use crate::validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reason {
    pub id: Uuid,
    pub school_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReason {
    pub school_id: Uuid,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateReason {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateReasonPayload {
    pub school_id: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReasonPayload {
    pub school_id: Option<String>,
    pub text: Option<String>,
}

impl Resource for Reason {
    const ENTITY: &'static str = "reason";

    type Create = CreateReason;
    type Update = UpdateReason;
    type CreatePayload = CreateReasonPayload;
    type UpdatePayload = UpdateReasonPayload;

    fn validate_create(payload: Self::CreatePayload) -> ScolarisResult<CreateReason> {
        let text = validate::required_text("text", payload.text)?;
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        Ok(CreateReason { school_id, text })
    }

    fn validate_update(payload: Self::UpdatePayload) -> ScolarisResult<TenantPatch<UpdateReason>> {
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        Ok(TenantPatch {
            school_id,
            patch: UpdateReason {
                text: validate::patch_text("text", payload.text)?,
            },
        })
    }
}
