// ABOUTME: Bulk copy-out/copy-in commands for the managed document table
// ABOUTME: Streams full table contents to and from the configured dump file

use crate::commands::MANAGED_TABLE;
use crate::config::Config;
use crate::postgres;
use anyhow::{Context, Result};
use bytes::Bytes;
use futures::{pin_mut, SinkExt, TryStreamExt};
use std::io::Write;

/// Export the managed table's full contents to the configured dump file.
///
/// Any existing file at the dump path is deleted first and parent
/// directories are created, so the export fully replaces prior content.
/// The dump is PostgreSQL text COPY format with NULL written as the empty
/// string instead of the `\N` default.
pub async fn save_index(config: &Config) -> Result<()> {
    let dump_path = &config.dump_path;

    if dump_path.exists() {
        std::fs::remove_file(dump_path)
            .with_context(|| format!("Failed to remove existing dump file: {}", dump_path.display()))?;
    }
    if let Some(parent) = dump_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dump directory: {}", parent.display()))?;
        }
    }
    let mut dump_file = std::fs::File::create(dump_path)
        .with_context(|| format!("Failed to create dump file: {}", dump_path.display()))?;

    let client = postgres::connect(&config.database_url).await?;

    let stmt = format!("COPY {} TO STDOUT (FORMAT text, NULL '')", MANAGED_TABLE);
    let stream = client
        .copy_out(stmt.as_str())
        .await
        .with_context(|| format!("Failed to start COPY OUT from '{}'", MANAGED_TABLE))?;
    pin_mut!(stream);

    while let Some(chunk) = stream
        .try_next()
        .await
        .with_context(|| format!("Failed while copying '{}' to dump file", MANAGED_TABLE))?
    {
        dump_file
            .write_all(&chunk)
            .with_context(|| format!("Failed to write to dump file: {}", dump_path.display()))?;
    }
    dump_file
        .flush()
        .with_context(|| format!("Failed to flush dump file: {}", dump_path.display()))?;

    println!("Index saved to {}", dump_path.display());
    Ok(())
}

/// Import the dump file back into the managed table via bulk copy-in.
///
/// Counterpart of `save_index`: consumes the whole file with the same
/// empty-string NULL convention, so exported rows round-trip exactly,
/// NULL columns included.
pub async fn load_index(config: &Config) -> Result<()> {
    let dump_path = &config.dump_path;

    let data = std::fs::read(dump_path)
        .with_context(|| format!("Failed to read dump file: {}", dump_path.display()))?;

    let client = postgres::connect(&config.database_url).await?;

    let stmt = format!("COPY {} FROM STDIN (FORMAT text, NULL '')", MANAGED_TABLE);
    let sink = client
        .copy_in(stmt.as_str())
        .await
        .with_context(|| format!("Failed to start COPY IN to '{}'", MANAGED_TABLE))?;
    pin_mut!(sink);

    sink.send(Bytes::from(data))
        .await
        .with_context(|| format!("Failed while copying dump file into '{}'", MANAGED_TABLE))?;
    let rows = sink
        .finish()
        .await
        .with_context(|| format!("Failed to finish COPY IN to '{}'", MANAGED_TABLE))?;

    println!("Index loaded from {} ({} rows)", dump_path.display(), rows);
    Ok(())
}
