//! School (tenant) domain model.
//!
//! Schools are the unit of isolation: every other resource carries a
//! `school_id` and is invisible outside its owning school.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: Uuid,
    pub name: String,
    /// Contact address; unique across all schools.
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to provision a new school.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSchool {
    pub name: String,
    pub email: String,
}

/// Raw provisioning payload as received on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSchoolPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateSchoolPayload {
    pub fn validate(self) -> crate::error::ScolarisResult<CreateSchool> {
        let name = crate::validate::required_text("name", self.name)?;
        let email = crate::validate::required_text("email", self.email)?;
        Ok(CreateSchool { name, email })
    }
}
