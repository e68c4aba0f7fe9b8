// ABOUTME: Whole-table admin commands for the managed document table
// ABOUTME: Implements drop, extension install, and row counting

use crate::commands::MANAGED_TABLE;
use crate::config::Config;
use crate::postgres;
use anyhow::{Context, Result};

/// Drop the managed table if it exists.
///
/// Idempotent: the IF EXISTS guard makes a second invocation a no-op
/// rather than an error, whatever state the table is in.
pub async fn drop_table(config: &Config) -> Result<()> {
    let client = postgres::connect(&config.database_url).await?;

    client
        .batch_execute(&format!("DROP TABLE IF EXISTS {};", MANAGED_TABLE))
        .await
        .with_context(|| format!("Failed to drop table '{}'", MANAGED_TABLE))?;

    println!("Table dropped.");
    Ok(())
}

/// Install the pgvector extension on the target database
pub async fn create_extension(config: &Config) -> Result<()> {
    let client = postgres::connect(&config.database_url).await?;

    postgres::create_vector_extension(&client).await?;

    println!("Vector type created.");
    Ok(())
}

/// Count all rows in the managed table and print the total
pub async fn count_rows(config: &Config) -> Result<i64> {
    let client = postgres::connect(&config.database_url).await?;

    let stmt = format!("SELECT count(*) FROM {};", MANAGED_TABLE);
    let row = client
        .query_one(stmt.as_str(), &[])
        .await
        .with_context(|| format!("Failed to count rows in '{}'", MANAGED_TABLE))?;

    let num_rows: i64 = row.get(0);
    println!("Number of rows in '{}' table: {}", MANAGED_TABLE, num_rows);
    Ok(num_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        let url = std::env::var("TEST_DATABASE_URL").unwrap();
        Config::new(url, "/tmp/migration.sql", "/tmp/dump.sql")
    }

    #[tokio::test]
    #[ignore]
    async fn test_drop_table_is_idempotent() {
        let config = test_config();

        // Second drop must succeed even though the table is already gone
        drop_table(&config).await.unwrap();
        drop_table(&config).await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_count_rows_on_missing_table_errors() {
        let config = test_config();

        drop_table(&config).await.unwrap();
        let result = count_rows(&config).await;
        assert!(result.is_err());
    }
}
