//! One-shot schema setup

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf_server::{ensure_schema, Database};

use super::DbArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Create the Books table and seed rows
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let db = Database::connect(&args.db.config())
        .await
        .context("Failed to connect to the database")?;

    let report = ensure_schema(&db).await;
    db.close().await;

    let report = report.context("Schema setup failed")?;
    println!("Books table ready ({} seed rows inserted)", report.seeded);
    Ok(())
}
