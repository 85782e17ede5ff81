//! Schema definitions and migration utilities.
//!
//! This module provides the embedded SQL schema and the helpers
//! used at connect time to apply it.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the core schema (001_schema.sql).
pub const SCHEMA_MIGRATION: &str = include_str!("../../../migrations/001_schema.sql");

/// Tables owned by the store, one per collection.
pub const TABLES: [&str; 4] = ["notes", "discussions", "replies", "feedback"];

/// Run all pending migrations against the database.
///
/// This function is idempotent - it can be run multiple times safely.
/// Every statement uses `IF NOT EXISTS`.
///
/// # Errors
///
/// Returns an error if the migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running schema migration (001_schema.sql)...");
    sqlx::raw_sql(SCHEMA_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Schema migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if every collection table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*)::bigint
        FROM information_schema.tables
        WHERE table_schema = 'public'
        AND table_name = ANY($1)
        "#,
    )
    .bind(&TABLES[..])
    .fetch_one(pool)
    .await?;

    Ok(result.0 == TABLES.len() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_migration_embedded() {
        for table in TABLES {
            assert!(
                SCHEMA_MIGRATION.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", table)),
                "missing table {}",
                table
            );
        }
    }

    #[test]
    fn test_replies_have_no_foreign_key() {
        assert!(!SCHEMA_MIGRATION.contains("REFERENCES"));
    }

    #[test]
    fn test_counters_default_to_zero() {
        assert!(SCHEMA_MIGRATION.contains("replies BIGINT NOT NULL DEFAULT 0"));
        assert!(SCHEMA_MIGRATION.contains("upvotes BIGINT NOT NULL DEFAULT 0"));
    }
}
