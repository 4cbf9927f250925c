//! Schema definitions and migration runner for SurrealDB.
//!
//! All table definitions use SCHEMAFULL mode for data integrity.
//! UUIDs are stored as strings. Enums are stored as strings with
//! ASSERT constraints, and bounded numeric fields repeat their lower
//! bound as a store-side ASSERT in addition to payload validation.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
    #[allow(dead_code)]
    name: String,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1 — initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Schools (tenant entity, global scope)
-- =======================================================================
DEFINE TABLE school SCHEMAFULL;
DEFINE FIELD name ON TABLE school TYPE string;
DEFINE FIELD email ON TABLE school TYPE string;
DEFINE FIELD created_at ON TABLE school TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE school TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_school_email ON TABLE school \
    COLUMNS email UNIQUE;

-- =======================================================================
-- Categories (school scope)
-- =======================================================================
DEFINE TABLE category SCHEMAFULL;
DEFINE FIELD school_id ON TABLE category TYPE string;
DEFINE FIELD category_id ON TABLE category TYPE string;
DEFINE FIELD name ON TABLE category TYPE string;
DEFINE FIELD description ON TABLE category TYPE string;
DEFINE FIELD active ON TABLE category TYPE bool DEFAULT true;
DEFINE FIELD created_at ON TABLE category TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE category TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_category_school_name ON TABLE category \
    COLUMNS school_id, name UNIQUE;

-- =======================================================================
-- Stock items (school scope)
-- =======================================================================
DEFINE TABLE stock_item SCHEMAFULL;
DEFINE FIELD school_id ON TABLE stock_item TYPE string;
DEFINE FIELD item_name ON TABLE stock_item TYPE string;
DEFINE FIELD category ON TABLE stock_item TYPE string;
DEFINE FIELD supplier ON TABLE stock_item TYPE string;
DEFINE FIELD quantity ON TABLE stock_item TYPE int \
    ASSERT $value >= 0;
DEFINE FIELD purchase_price ON TABLE stock_item TYPE float \
    ASSERT $value >= 0;
DEFINE FIELD purchase_date ON TABLE stock_item TYPE datetime;
DEFINE FIELD description ON TABLE stock_item TYPE option<string>;
DEFINE FIELD created_at ON TABLE stock_item TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE stock_item TYPE datetime \
    DEFAULT time::now();

-- =======================================================================
-- Subject groups (school scope)
-- =======================================================================
DEFINE TABLE subject_group SCHEMAFULL;
DEFINE FIELD school_id ON TABLE subject_group TYPE string;
DEFINE FIELD name ON TABLE subject_group TYPE string;
DEFINE FIELD description ON TABLE subject_group TYPE option<string>;
DEFINE FIELD created_at ON TABLE subject_group TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE subject_group TYPE datetime \
    DEFAULT time::now();

-- =======================================================================
-- Subjects (school scope)
-- =======================================================================
DEFINE TABLE subject SCHEMAFULL;
DEFINE FIELD school_id ON TABLE subject TYPE string;
DEFINE FIELD name ON TABLE subject TYPE string;
DEFINE FIELD code ON TABLE subject TYPE string;
DEFINE FIELD kind ON TABLE subject TYPE string \
    ASSERT $value IN ['Theory', 'Practical'];
DEFINE FIELD teacher_id ON TABLE subject TYPE option<string>;
DEFINE FIELD sessions ON TABLE subject TYPE int DEFAULT 0 \
    ASSERT $value >= 0;
DEFINE FIELD created_at ON TABLE subject TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE subject TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_subject_school_code ON TABLE subject \
    COLUMNS school_id, code UNIQUE;

-- =======================================================================
-- Expenses (school scope)
-- =======================================================================
DEFINE TABLE expense SCHEMAFULL;
DEFINE FIELD school_id ON TABLE expense TYPE string;
DEFINE FIELD title ON TABLE expense TYPE string;
DEFINE FIELD amount ON TABLE expense TYPE float \
    ASSERT $value >= 0;
DEFINE FIELD incurred_on ON TABLE expense TYPE datetime;
DEFINE FIELD description ON TABLE expense TYPE option<string>;
DEFINE FIELD created_at ON TABLE expense TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE expense TYPE datetime \
    DEFAULT time::now();

-- =======================================================================
-- Reasons (school scope)
-- =======================================================================
DEFINE TABLE reason SCHEMAFULL;
DEFINE FIELD school_id ON TABLE reason TYPE string;
DEFINE FIELD text ON TABLE reason TYPE string;
DEFINE FIELD created_at ON TABLE reason TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE reason TYPE datetime \
    DEFAULT time::now();
";

// -----------------------------------------------------------------------
// Public API
// -----------------------------------------------------------------------

/// Run all pending migrations against the given SurrealDB client.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
/// All DEFINE statements are idempotent so re-running is safe.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    // Ensure migration tracking table exists (idempotent).
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    // Determine current schema version.
    let mut result = db
        .query("SELECT * FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version > current_version {
            info!(
                version = migration.version,
                name = migration.name,
                "Applying migration"
            );
            db.query(migration.sql).await?.check().map_err(|e| {
                DbError::Migration(format!(
                    "Migration v{} '{}' failed: {}",
                    migration.version, migration.name, e,
                ))
            })?;

            // Record the applied migration.
            db.query(
                "CREATE _migration SET version = $version, \
                 name = $name",
            )
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "Failed to record migration v{}: {}",
                    migration.version, e,
                ))
            })?;

            info!(
                version = migration.version,
                "Migration applied successfully"
            );
        }
    }

    Ok(())
}

/// Returns the raw schema DDL for version 1.
///
/// Exposed for testing with in-memory SurrealDB instances that
/// bypass the migration runner.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}
