//! Store descriptor for subject groups.

use chrono::{DateTime, Utc};
use scolaris_core::models::subject_group::{
    CreateSubjectGroup, SubjectGroup, UpdateSubjectGroup,
};
use surrealdb::Connection;
use surrealdb::method::Query;
use surrealdb_types::SurrealValue;

use crate::error::DbError;
use crate::store::{SurrealResource, UniqueIndex, parse_uuid};

#[derive(Debug, SurrealValue)]
pub struct SubjectGroupRow {
    record_id: String,
    school_id: String,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SurrealResource for SubjectGroup {
    const TABLE: &'static str = "subject_group";
    const UNIQUE: &'static [UniqueIndex] = &[];
    const CREATE_SET: &'static str =
        "school_id = $school_id, name = $name, description = $description";

    type Row = SubjectGroupRow;

    fn bind_create<'r, C: Connection>(
        query: Query<'r, C>,
        input: CreateSubjectGroup,
    ) -> Query<'r, C> {
        query
            .bind(("school_id", input.school_id.to_string()))
            .bind(("name", input.name))
            .bind(("description", input.description))
    }

    fn update_sets(input: &UpdateSubjectGroup) -> Vec<&'static str> {
        let mut sets = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name");
        }
        if input.description.is_some() {
            sets.push("description = $description");
        }
        sets
    }

    fn bind_update<'r, C: Connection>(
        mut query: Query<'r, C>,
        input: UpdateSubjectGroup,
    ) -> Query<'r, C> {
        if let Some(name) = input.name {
            query = query.bind(("name", name));
        }
        if let Some(description) = input.description {
            query = query.bind(("description", description));
        }
        query
    }

    fn from_row(row: SubjectGroupRow) -> Result<SubjectGroup, DbError> {
        Ok(SubjectGroup {
            id: parse_uuid("record", &row.record_id)?,
            school_id: parse_uuid("school", &row.school_id)?,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
