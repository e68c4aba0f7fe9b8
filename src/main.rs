// ABOUTME: CLI entry point for pgvector-admin
// ABOUTME: Parses commands and routes to appropriate handlers

use clap::{Parser, Subcommand};
use pgvector_admin::commands::{self, ConnectionCheck};
use pgvector_admin::config::Config;

#[derive(Parser)]
#[command(name = "pgvector-admin")]
#[command(about = "Admin utilities for a pgvector-backed document table", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the configured database is reachable
    Check,
    /// Drop the document table if it exists
    DropTable,
    /// Install the pgvector extension
    CreateExtension,
    /// Run the configured migration script
    Migrate,
    /// Execute the configured SQL dump file as a statement batch
    LoadDump,
    /// Count all rows in the document table
    CountRows,
    /// Export the document table to the configured dump file
    Export,
    /// Import the dump file into the document table via bulk copy
    Import,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - default to INFO level if RUST_LOG not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Check => {
            match commands::check_connection(&config).await? {
                ConnectionCheck::Healthy => Ok(()),
                ConnectionCheck::Unreachable(reason) => {
                    println!("Error: Unable to connect to the database. {}", reason);
                    std::process::exit(1);
                }
            }
        }
        Commands::DropTable => commands::drop_table(&config).await,
        Commands::CreateExtension => commands::create_extension(&config).await,
        Commands::Migrate => commands::run_migration(&config).await,
        Commands::LoadDump => commands::load_sql_dump(&config).await,
        Commands::CountRows => {
            commands::count_rows(&config).await?;
            Ok(())
        }
        Commands::Export => commands::save_index(&config).await,
        Commands::Import => commands::load_index(&config).await,
    }
}
