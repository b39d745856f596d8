//! Subcommand implementations

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

use std::time::Duration;

use clap::Args;

use bookshelf_server::config::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};
use bookshelf_server::DbConfig;

/// Database flags shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to wait for a free connection before failing a request
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = DEFAULT_ACQUIRE_TIMEOUT.as_secs())]
    pub acquire_timeout: u64,
}

impl DbArgs {
    pub fn config(&self) -> DbConfig {
        DbConfig::new(self.database_url.clone())
            .with_max_connections(self.max_connections)
            .with_acquire_timeout(Duration::from_secs(self.acquire_timeout))
    }
}
