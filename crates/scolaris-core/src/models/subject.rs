//! Subject domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ScolarisError, ScolarisResult};
use crate::resource::{Resource, TenantPatch};
use crate::validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubjectKind {
    Theory,
    Practical,
}

impl SubjectKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Theory" => Some(Self::Theory),
            "Practical" => Some(Self::Practical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theory => "Theory",
            Self::Practical => "Practical",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: Uuid,
    pub school_id: Uuid,
    pub name: String,
    /// Unique within the owning school.
    pub code: String,
    pub kind: SubjectKind,
    /// Assigned teacher, if any.
    pub teacher_id: Option<Uuid>,
    /// Number of scheduled class sessions.
    pub sessions: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubject {
    pub school_id: Uuid,
    pub name: String,
    pub code: String,
    pub kind: SubjectKind,
    pub teacher_id: Option<Uuid>,
    pub sessions: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateSubject {
    pub name: Option<String>,
    pub code: Option<String>,
    pub kind: Option<SubjectKind>,
    pub teacher_id: Option<Uuid>,
    pub sessions: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSubjectPayload {
    pub school_id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub kind: Option<String>,
    pub teacher_id: Option<String>,
    pub sessions: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSubjectPayload {
    pub school_id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub kind: Option<String>,
    pub teacher_id: Option<String>,
    pub sessions: Option<i64>,
}

fn parse_kind(field: &'static str, raw: &str) -> ScolarisResult<SubjectKind> {
    SubjectKind::parse(raw).ok_or_else(|| ScolarisError::InvalidValue {
        field,
        reason: "expected Theory or Practical".into(),
    })
}

impl Resource for Subject {
    const ENTITY: &'static str = "subject";

    type Create = CreateSubject;
    type Update = UpdateSubject;
    type CreatePayload = CreateSubjectPayload;
    type UpdatePayload = UpdateSubjectPayload;

    fn validate_create(payload: Self::CreatePayload) -> ScolarisResult<CreateSubject> {
        let name = validate::required_text("name", payload.name)?;
        let code = validate::required_text("code", payload.code)?;
        let kind_raw = validate::required_text("kind", payload.kind)?;
        let kind = parse_kind("kind", &kind_raw)?;
        let teacher_id = validate::optional_ref(payload.teacher_id)?;
        let sessions = validate::patch_non_negative_int("sessions", payload.sessions)?.unwrap_or(0);
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        Ok(CreateSubject {
            school_id,
            name,
            code,
            kind,
            teacher_id,
            sessions,
        })
    }

    fn validate_update(payload: Self::UpdatePayload) -> ScolarisResult<TenantPatch<UpdateSubject>> {
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        let kind = match validate::patch_text("kind", payload.kind)? {
            Some(raw) => Some(parse_kind("kind", &raw)?),
            None => None,
        };
        Ok(TenantPatch {
            school_id,
            patch: UpdateSubject {
                name: validate::patch_text("name", payload.name)?,
                code: validate::patch_text("code", payload.code)?,
                kind,
                teacher_id: validate::optional_ref(payload.teacher_id)?,
                sessions: validate::patch_non_negative_int("sessions", payload.sessions)?,
            },
        })
    }
}
