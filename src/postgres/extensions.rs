// ABOUTME: pgvector extension installation for the managed database
// ABOUTME: Installs the vector type and probes extension availability

use anyhow::{Context, Result};
use tokio_postgres::Client;

/// Install the pgvector extension so the `vector` column type exists.
///
/// Not guarded with IF NOT EXISTS: installing twice is an error, and that
/// error propagates like any other driver failure.
pub async fn create_vector_extension(client: &Client) -> Result<()> {
    client
        .batch_execute("CREATE EXTENSION vector;")
        .await
        .context("Failed to create the vector extension")?;
    Ok(())
}

/// Check whether the pgvector extension is available for installation
pub async fn vector_extension_available(client: &Client) -> Result<bool> {
    let row = client
        .query_one(
            "SELECT count(*) FROM pg_available_extensions WHERE name = 'vector'",
            &[],
        )
        .await
        .context("Failed to query available extensions")?;

    let count: i64 = row.get(0);
    Ok(count > 0)
}
