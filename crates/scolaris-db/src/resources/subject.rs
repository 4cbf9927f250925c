//! Store descriptor for subjects.

use chrono::{DateTime, Utc};
use scolaris_core::models::subject::{CreateSubject, Subject, SubjectKind, UpdateSubject};
use surrealdb::Connection;
use surrealdb::method::Query;
use surrealdb_types::SurrealValue;

use crate::error::DbError;
use crate::store::{SurrealResource, UniqueIndex, parse_uuid};

#[derive(Debug, SurrealValue)]
pub struct SubjectRow {
    record_id: String,
    school_id: String,
    name: String,
    code: String,
    kind: String,
    teacher_id: Option<String>,
    sessions: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn parse_kind(raw: &str) -> Result<SubjectKind, DbError> {
    SubjectKind::parse(raw)
        .ok_or_else(|| DbError::Decode(format!("unknown subject kind: {raw}")))
}

impl SurrealResource for Subject {
    const TABLE: &'static str = "subject";
    const UNIQUE: &'static [UniqueIndex] = &[UniqueIndex {
        index: "idx_subject_school_code",
        field: "code",
    }];
    const CREATE_SET: &'static str = "school_id = $school_id, name = $name, code = $code, \
         kind = $kind, teacher_id = $teacher_id, sessions = $sessions";

    type Row = SubjectRow;

    fn bind_create<'r, C: Connection>(query: Query<'r, C>, input: CreateSubject) -> Query<'r, C> {
        query
            .bind(("school_id", input.school_id.to_string()))
            .bind(("name", input.name))
            .bind(("code", input.code))
            .bind(("kind", input.kind.as_str()))
            .bind(("teacher_id", input.teacher_id.map(|id| id.to_string())))
            .bind(("sessions", input.sessions))
    }

    fn update_sets(input: &UpdateSubject) -> Vec<&'static str> {
        let mut sets = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name");
        }
        if input.code.is_some() {
            sets.push("code = $code");
        }
        if input.kind.is_some() {
            sets.push("kind = $kind");
        }
        if input.teacher_id.is_some() {
            sets.push("teacher_id = $teacher_id");
        }
        if input.sessions.is_some() {
            sets.push("sessions = $sessions");
        }
        sets
    }

    fn bind_update<'r, C: Connection>(
        mut query: Query<'r, C>,
        input: UpdateSubject,
    ) -> Query<'r, C> {
        if let Some(name) = input.name {
            query = query.bind(("name", name));
        }
        if let Some(code) = input.code {
            query = query.bind(("code", code));
        }
        if let Some(kind) = input.kind {
            query = query.bind(("kind", kind.as_str()));
        }
        if let Some(teacher_id) = input.teacher_id {
            query = query.bind(("teacher_id", teacher_id.to_string()));
        }
        if let Some(sessions) = input.sessions {
            query = query.bind(("sessions", sessions));
        }
        query
    }

    fn from_row(row: SubjectRow) -> Result<Subject, DbError> {
        let teacher_id = row
            .teacher_id
            .as_deref()
            .map(|raw| parse_uuid("teacher", raw))
            .transpose()?;
        Ok(Subject {
            id: parse_uuid("record", &row.record_id)?,
            school_id: parse_uuid("school", &row.school_id)?,
            name: row.name,
            code: row.code,
            kind: parse_kind(&row.kind)?,
            teacher_id,
            sessions: row.sessions,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
