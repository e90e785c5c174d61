//! `ledger-lens` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — initialize the schema and start the API server.
//! - `init-db` — create the tables and indexes, then exit.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ledger-lens", about = "Transaction ledger service", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND", default_value = "127.0.0.1:8000")]
        bind: String,
        #[command(flatten)]
        database: DatabaseArgs,
    },
    /// Create the tables and indexes if they do not exist yet.
    InitDb {
        #[command(flatten)]
        database: DatabaseArgs,
    },
}

#[derive(Args)]
struct DatabaseArgs {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://transactions.db")]
    database_url: String,
    #[arg(long, env = "MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,
}

impl DatabaseArgs {
    async fn open(&self) -> anyhow::Result<db::DbPool> {
        let pool = db::pool::create_pool(&self.database_url, self.max_connections)
            .await
            .with_context(|| format!("failed to open database {}", self.database_url))?;
        let registry = db::default_registry()?;
        db::pool::init_schema(&pool, &registry)
            .await
            .context("failed to initialize schema")?;
        Ok(pool)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, database } => {
            let pool = database.open().await?;
            info!("Starting API server on {bind}");
            api::serve(&bind, pool)
                .await
                .with_context(|| format!("server on {bind} failed"))?;
        }
        Command::InitDb { database } => {
            info!("Initializing schema in {}", database.database_url);
            database.open().await?;
            info!("Schema initialized successfully");
        }
    }

    Ok(())
}
