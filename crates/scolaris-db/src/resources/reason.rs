//! Store descriptor for reasons.

use chrono::{DateTime, Utc};
use scolaris_core::models::reason::{CreateReason, Reason, UpdateReason};
use surrealdb::Connection;
use surrealdb::method::Query;
use surrealdb_types::SurrealValue;

use crate::error::DbError;
use crate::store::{SurrealResource, UniqueIndex, parse_uuid};

#[derive(Debug, SurrealValue)]
pub struct ReasonRow {
    record_id: String,
    school_id: String,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SurrealResource for Reason {
    const TABLE: &'static str = "reason";
    const UNIQUE: &'static [UniqueIndex] = &[];
    const CREATE_SET: &'static str = "school_id = $school_id, text = $text";

    type Row = ReasonRow;

    fn bind_create<'r, C: Connection>(query: Query<'r, C>, input: CreateReason) -> Query<'r, C> {
        query
            .bind(("school_id", input.school_id.to_string()))
            .bind(("text", input.text))
    }

    fn update_sets(input: &UpdateReason) -> Vec<&'static str> {
        let mut sets = Vec::new();
        if input.text.is_some() {
            sets.push("text = $text");
        }
        sets
    }

    fn bind_update<'r, C: Connection>(
        mut query: Query<'r, C>,
        input: UpdateReason,
    ) -> Query<'r, C> {
        if let Some(text) = input.text {
            query = query.bind(("text", text));
        }
        query
    }

    fn from_row(row: ReasonRow) -> Result<Reason, DbError> {
        Ok(Reason {
            id: parse_uuid("record", &row.record_id)?,
            school_id: parse_uuid("school", &row.school_id)?,
            text: row.text,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
