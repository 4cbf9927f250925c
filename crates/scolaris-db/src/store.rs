//! Generic tenant-scoped store engine.
//!
//! One SurrealDB implementation of [`TenantScopedRepository`] serves
//! every resource kind. Each kind contributes a [`SurrealResource`]
//! descriptor (table name, unique indexes, `SET` fragments, row
//! mapping); the engine supplies the query shapes, tenant scoping,
//! listing order, and duplicate-key normalization.

use scolaris_core::error::ScolarisResult;
use scolaris_core::repository::TenantScopedRepository;
use scolaris_core::resource::Resource;
use surrealdb::method::Query;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// A unique index on a resource table, used to attribute duplicate-key
/// violations to the field that collided.
#[derive(Debug, Clone, Copy)]
pub struct UniqueIndex {
    /// Index name as declared in the schema DDL.
    pub index: &'static str,
    /// The field the index protects.
    pub field: &'static str,
}

/// Store-side schema descriptor for a tenant-owned resource kind.
pub trait SurrealResource: Resource {
    /// Table name in the store.
    const TABLE: &'static str;
    /// Unique indexes declared on the table.
    const UNIQUE: &'static [UniqueIndex];
    /// `SET` fragment for creation; every `$param` it names is bound
    /// by [`Self::bind_create`].
    const CREATE_SET: &'static str;

    /// DB-side row shape (`record_id` plus stored fields).
    type Row: SurrealValue + Send;

    fn bind_create<'r, C: Connection>(
        query: Query<'r, C>,
        input: Self::Create,
    ) -> Query<'r, C>;

    /// `SET` clauses for the fields present in the patch.
    fn update_sets(input: &Self::Update) -> Vec<&'static str>;

    fn bind_update<'r, C: Connection>(
        query: Query<'r, C>,
        input: Self::Update,
    ) -> Query<'r, C>;

    fn from_row(row: Self::Row) -> Result<Self, DbError>;
}

/// Shared UUID-parsing helper for row conversions.
pub(crate) fn parse_uuid(field: &'static str, value: &str) -> Result<Uuid, DbError> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode(format!("invalid {field} UUID: {e}")))
}

/// Normalize a raw store error message, attributing unique-index
/// violations to the declared field so callers observe a conflict
/// error instead of an opaque store failure.
pub(crate) fn normalize_error(
    entity: &'static str,
    unique: &[UniqueIndex],
    message: String,
) -> DbError {
    for constraint in unique {
        if message.contains(constraint.index) {
            return DbError::Duplicate {
                entity,
                field: constraint.field,
            };
        }
    }
    DbError::Query(message)
}

/// The generic tenant-scoped store over SurrealDB.
pub struct TenantStore<C: Connection> {
    db: Surreal<C>,
}

// Not derived: the connection handle is cheaply cloneable regardless
// of whether the engine type itself is.
impl<C: Connection> Clone for TenantStore<C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

impl<C: Connection> TenantStore<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

fn normalize<R: SurrealResource>(message: String) -> DbError {
    normalize_error(R::ENTITY, R::UNIQUE, message)
}

impl<C: Connection, R: SurrealResource> TenantScopedRepository<R> for TenantStore<C> {
    async fn list(&self, school_id: Uuid) -> ScolarisResult<Vec<R>> {
        let sql = format!(
            "SELECT meta::id(id) AS record_id, * FROM {table} \
             WHERE school_id = $school_id \
             ORDER BY created_at DESC",
            table = R::TABLE,
        );

        let mut result = self
            .db
            .query(sql)
            .bind(("school_id", school_id.to_string()))
            .await
            .map_err(|e| normalize::<R>(e.to_string()))?;

        let rows: Vec<R::Row> = result.take(0).map_err(|e| normalize::<R>(e.to_string()))?;

        let items = rows
            .into_iter()
            .map(R::from_row)
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(items)
    }

    async fn create(&self, input: R::Create) -> ScolarisResult<R> {
        let id = Uuid::new_v4();

        // The mutation and the read-back run in a single request; the
        // second statement re-selects with the id projection every row
        // conversion expects.
        let sql = format!(
            "CREATE type::record('{table}', $id) SET {set}; \
             SELECT meta::id(id) AS record_id, * FROM type::record('{table}', $id);",
            table = R::TABLE,
            set = R::CREATE_SET,
        );

        let query = self.db.query(sql).bind(("id", id.to_string()));
        let query = R::bind_create(query, input);

        let result = query.await.map_err(|e| normalize::<R>(e.to_string()))?;
        let mut result = result.check().map_err(|e| normalize::<R>(e.to_string()))?;

        let rows: Vec<R::Row> = result.take(1).map_err(|e| normalize::<R>(e.to_string()))?;
        let row = rows.into_iter().next().ok_or(DbError::NotFound {
            entity: R::ENTITY,
            id: id.to_string(),
        })?;

        Ok(R::from_row(row)?)
    }

    async fn update(&self, school_id: Uuid, id: Uuid, input: R::Update) -> ScolarisResult<R> {
        let mut sets = R::update_sets(&input);
        sets.push("updated_at = time::now()");

        // Both statements filter on the tenant reference: a record
        // owned by another school is left untouched and the read-back
        // comes up empty, indistinguishable from a missing record.
        let sql = format!(
            "UPDATE type::record('{table}', $id) SET {set} \
             WHERE school_id = $school_id; \
             SELECT meta::id(id) AS record_id, * FROM type::record('{table}', $id) \
             WHERE school_id = $school_id;",
            table = R::TABLE,
            set = sets.join(", "),
        );

        let query = self
            .db
            .query(sql)
            .bind(("id", id.to_string()))
            .bind(("school_id", school_id.to_string()));
        let query = R::bind_update(query, input);

        let result = query.await.map_err(|e| normalize::<R>(e.to_string()))?;
        let mut result = result.check().map_err(|e| normalize::<R>(e.to_string()))?;

        let rows: Vec<R::Row> = result.take(1).map_err(|e| normalize::<R>(e.to_string()))?;
        let row = rows.into_iter().next().ok_or(DbError::NotFound {
            entity: R::ENTITY,
            id: id.to_string(),
        })?;

        Ok(R::from_row(row)?)
    }

    async fn delete(&self, school_id: Uuid, id: Uuid) -> ScolarisResult<R> {
        // Find-and-remove in one request: the select snapshots the
        // record that the delete then removes, both tenant-scoped.
        let sql = format!(
            "SELECT meta::id(id) AS record_id, * FROM type::record('{table}', $id) \
             WHERE school_id = $school_id; \
             DELETE type::record('{table}', $id) WHERE school_id = $school_id;",
            table = R::TABLE,
        );

        let result = self
            .db
            .query(sql)
            .bind(("id", id.to_string()))
            .bind(("school_id", school_id.to_string()))
            .await
            .map_err(|e| normalize::<R>(e.to_string()))?;
        let mut result = result.check().map_err(|e| normalize::<R>(e.to_string()))?;

        let rows: Vec<R::Row> = result.take(0).map_err(|e| normalize::<R>(e.to_string()))?;
        let row = rows.into_iter().next().ok_or(DbError::NotFound {
            entity: R::ENTITY,
            id: id.to_string(),
        })?;

        Ok(R::from_row(row)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIQUE: &[UniqueIndex] = &[UniqueIndex {
        index: "idx_category_school_name",
        field: "name",
    }];

    #[test]
    fn unique_violation_becomes_duplicate() {
        let err = normalize_error(
            "category",
            UNIQUE,
            "Database index `idx_category_school_name` already contains \
             ['...', 'Books'], with record `category:xyz`"
                .into(),
        );
        assert!(matches!(
            err,
            DbError::Duplicate {
                entity: "category",
                field: "name"
            }
        ));
    }

    #[test]
    fn other_errors_stay_store_failures() {
        let err = normalize_error("category", UNIQUE, "connection reset".into());
        assert!(matches!(err, DbError::Query(_)));
    }
}
