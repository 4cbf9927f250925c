//! Expense/stock category domain model.
//!
//! Categories are the only resource carrying a soft visibility flag
//! (`active`); it defaults to true and is toggled by update only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScolarisResult;
use crate::resource::{Resource, TenantPatch};
use crate::validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub school_id: Uuid,
    /// Secondary human-facing identifier, assigned at creation.
    pub category_id: String,
    /// Unique within the owning school.
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    pub school_id: Uuid,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

/// Raw creation payload as received on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCategoryPayload {
    pub school_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Raw update payload; absent fields leave the record untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryPayload {
    pub school_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl Resource for Category {
    const ENTITY: &'static str = "category";

    type Create = CreateCategory;
    type Update = UpdateCategory;
    type CreatePayload = CreateCategoryPayload;
    type UpdatePayload = UpdateCategoryPayload;

    fn validate_create(payload: Self::CreatePayload) -> ScolarisResult<CreateCategory> {
        let name = validate::required_text("name", payload.name)?;
        let description = validate::required_text("description", payload.description)?;
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        Ok(CreateCategory {
            school_id,
            name,
            description,
        })
    }

    fn validate_update(payload: Self::UpdatePayload) -> ScolarisResult<TenantPatch<UpdateCategory>> {
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        Ok(TenantPatch {
            school_id,
            patch: UpdateCategory {
                name: validate::patch_text("name", payload.name)?,
                description: validate::patch_text("description", payload.description)?,
                active: payload.active,
            },
        })
    }
}
