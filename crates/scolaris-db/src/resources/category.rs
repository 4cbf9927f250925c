//! Store descriptor for categories.

use chrono::{DateTime, Utc};
use scolaris_core::models::category::{Category, CreateCategory, UpdateCategory};
use surrealdb::Connection;
use surrealdb::method::Query;
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;
use crate::store::{SurrealResource, UniqueIndex, parse_uuid};

#[derive(Debug, SurrealValue)]
pub struct CategoryRow {
    record_id: String,
    school_id: String,
    category_id: String,
    name: String,
    description: String,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SurrealResource for Category {
    const TABLE: &'static str = "category";
    const UNIQUE: &'static [UniqueIndex] = &[UniqueIndex {
        index: "idx_category_school_name",
        field: "name",
    }];
    const CREATE_SET: &'static str = "school_id = $school_id, category_id = $category_id, \
         name = $name, description = $description";

    type Row = CategoryRow;

    fn bind_create<'r, C: Connection>(query: Query<'r, C>, input: CreateCategory) -> Query<'r, C> {
        query
            .bind(("school_id", input.school_id.to_string()))
            // Secondary human-facing id, minted alongside the record id.
            .bind(("category_id", Uuid::new_v4().to_string()))
            .bind(("name", input.name))
            .bind(("description", input.description))
    }

    fn update_sets(input: &UpdateCategory) -> Vec<&'static str> {
        let mut sets = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name");
        }
        if input.description.is_some() {
            sets.push("description = $description");
        }
        if input.active.is_some() {
            sets.push("active = $active");
        }
        sets
    }

    fn bind_update<'r, C: Connection>(
        mut query: Query<'r, C>,
        input: UpdateCategory,
    ) -> Query<'r, C> {
        if let Some(name) = input.name {
            query = query.bind(("name", name));
        }
        if let Some(description) = input.description {
            query = query.bind(("description", description));
        }
        if let Some(active) = input.active {
            query = query.bind(("active", active));
        }
        query
    }

    fn from_row(row: CategoryRow) -> Result<Category, DbError> {
        Ok(Category {
            id: parse_uuid("record", &row.record_id)?,
            school_id: parse_uuid("school", &row.school_id)?,
            category_id: row.category_id,
            name: row.name,
            description: row.description,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
