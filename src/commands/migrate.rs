// ABOUTME: Migration and dump-loading commands
// ABOUTME: Reads a configured SQL file wholesale and executes it as one batch

use crate::config::Config;
use crate::postgres;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the configured migration script.
///
/// The script is an opaque blob: read fully into memory and executed
/// verbatim as a single statement batch. Bad paths and SQL errors
/// propagate unchanged.
pub async fn run_migration(config: &Config) -> Result<()> {
    execute_sql_file(&config.database_url, &config.migration_path).await?;
    println!("Migration script run.");
    Ok(())
}

/// Load the configured SQL dump file into the database
pub async fn load_sql_dump(config: &Config) -> Result<()> {
    execute_sql_file(&config.database_url, &config.dump_path).await?;
    println!("Data loaded.");
    Ok(())
}

async fn execute_sql_file(database_url: &str, path: &Path) -> Result<()> {
    let sql = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read SQL file: {}", path.display()))?;

    let client = postgres::connect(database_url).await?;
    client
        .batch_execute(&sql)
        .await
        .with_context(|| format!("Failed to execute statements from {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_run_migration_missing_file_errors() {
        let config = Config::new(
            "postgresql://user@localhost/db",
            "/nonexistent/migration.sql",
            "/nonexistent/dump.sql",
        );

        let err = run_migration(&config).await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/migration.sql"));
    }

    #[tokio::test]
    async fn test_load_sql_dump_missing_file_errors() {
        let config = Config::new(
            "postgresql://user@localhost/db",
            "/nonexistent/migration.sql",
            "/nonexistent/dump.sql",
        );

        let err = load_sql_dump(&config).await.unwrap_err();
        // Each operation reads only its own configured path
        assert!(err.to_string().contains("/nonexistent/dump.sql"));
    }

    #[tokio::test]
    #[ignore]
    async fn test_run_migration_executes_script() {
        let url = std::env::var("TEST_DATABASE_URL").unwrap();
        let dir = tempdir().unwrap();
        let migration = dir.path().join("migration.sql");

        let mut file = std::fs::File::create(&migration).unwrap();
        writeln!(
            file,
            "DROP TABLE IF EXISTS document;\n\
             CREATE TABLE document (id serial PRIMARY KEY, body text);"
        )
        .unwrap();

        let config = Config::new(url, &migration, dir.path().join("dump.sql"));
        run_migration(&config).await.unwrap();

        let count = crate::commands::count_rows(&config).await.unwrap();
        assert_eq!(count, 0);
    }
}
