//! SurrealDB implementation of [`SchoolRepository`].

use chrono::{DateTime, Utc};
use scolaris_core::error::ScolarisResult;
use scolaris_core::models::school::{CreateSchool, School};
use scolaris_core::repository::SchoolRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;
use crate::store::{UniqueIndex, normalize_error, parse_uuid};

const SCHOOL_UNIQUE: &[UniqueIndex] = &[UniqueIndex {
    index: "idx_school_email",
    field: "email",
}];

#[derive(Debug, SurrealValue)]
struct SchoolRow {
    record_id: String,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SchoolRow {
    fn try_into_school(self) -> Result<School, DbError> {
        Ok(School {
            id: parse_uuid("record", &self.record_id)?,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn normalize(message: String) -> DbError {
    normalize_error("school", SCHOOL_UNIQUE, message)
}

/// SurrealDB implementation of the school repository.
pub struct SurrealSchoolRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> Clone for SurrealSchoolRepository<C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

impl<C: Connection> SurrealSchoolRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> SchoolRepository for SurrealSchoolRepository<C> {
    async fn create(&self, input: CreateSchool) -> ScolarisResult<School> {
        let id = Uuid::new_v4();

        let result = self
            .db
            .query(
                "CREATE type::record('school', $id) SET \
                 name = $name, email = $email; \
                 SELECT meta::id(id) AS record_id, * FROM type::record('school', $id);",
            )
            .bind(("id", id.to_string()))
            .bind(("name", input.name))
            .bind(("email", input.email))
            .await
            .map_err(|e| normalize(e.to_string()))?;

        let mut result = result.check().map_err(|e| normalize(e.to_string()))?;

        let rows: Vec<SchoolRow> = result.take(1).map_err(|e| normalize(e.to_string()))?;
        let row = rows.into_iter().next().ok_or(DbError::NotFound {
            entity: "school",
            id: id.to_string(),
        })?;

        Ok(row.try_into_school()?)
    }

    async fn get_by_id(&self, id: Uuid) -> ScolarisResult<School> {
        let mut result = self
            .db
            .query("SELECT meta::id(id) AS record_id, * FROM type::record('school', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(|e| normalize(e.to_string()))?;

        let rows: Vec<SchoolRow> = result.take(0).map_err(|e| normalize(e.to_string()))?;
        let row = rows.into_iter().next().ok_or(DbError::NotFound {
            entity: "school",
            id: id.to_string(),
        })?;

        Ok(row.try_into_school()?)
    }
}
