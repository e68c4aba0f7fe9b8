// ABOUTME: Command implementations for each admin operation
// ABOUTME: Exports check, table, migrate, and export/import commands

pub mod check;
pub mod export;
pub mod migrate;
pub mod table;

pub use check::{check_connection, ConnectionCheck};
pub use export::{load_index, save_index};
pub use migrate::{load_sql_dump, run_migration};
pub use table::{count_rows, create_extension, drop_table};

/// The single table this toolkit administers. Its schema is owned by the
/// migration script and opaque here; every operation addresses it by name.
pub const MANAGED_TABLE: &str = "document";
