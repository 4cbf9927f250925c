//! Expense domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScolarisResult;
use crate::resource::{Resource, TenantPatch};
use crate::validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub school_id: Uuid,
    pub title: String,
    pub amount: f64,
    pub incurred_on: DateTime<Utc>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpense {
    pub school_id: Uuid,
    pub title: String,
    pub amount: f64,
    pub incurred_on: DateTime<Utc>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateExpense {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub incurred_on: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateExpensePayload {
    pub school_id: Option<String>,
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub incurred_on: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExpensePayload {
    pub school_id: Option<String>,
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub incurred_on: Option<String>,
    pub description: Option<String>,
}

impl Resource for Expense {
    const ENTITY: &'static str = "expense";

    type Create = CreateExpense;
    type Update = UpdateExpense;
    type CreatePayload = CreateExpensePayload;
    type UpdatePayload = UpdateExpensePayload;

    fn validate_create(payload: Self::CreatePayload) -> ScolarisResult<CreateExpense> {
        let title = validate::required_text("title", payload.title)?;
        let amount = validate::non_negative_number("amount", payload.amount)?;
        let incurred_on = validate::datetime("incurred_on", payload.incurred_on)?;
        let description = validate::optional_text(payload.description);
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        Ok(CreateExpense {
            school_id,
            title,
            amount,
            incurred_on,
            description,
        })
    }

    fn validate_update(payload: Self::UpdatePayload) -> ScolarisResult<TenantPatch<UpdateExpense>> {
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        Ok(TenantPatch {
            school_id,
            patch: UpdateExpense {
                title: validate::patch_text("title", payload.title)?,
                amount: validate::patch_non_negative_number("amount", payload.amount)?,
                incurred_on: validate::patch_datetime("incurred_on", payload.incurred_on)?,
                description: validate::patch_text("description", payload.description)?,
            },
        })
    }
}
