use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use rallye_db_sqlite::Connections;

mod config;
mod seed;

use self::config::Config;

#[derive(Debug, Parser)]
#[command(name = "rallye", about = "Stamp-rally backend database tool", version)]
struct Args {
    /// Path to an optional TOML configuration file.
    #[arg(long, default_value = "rallye.toml")]
    config: PathBuf,

    /// Database URL, overrides the configuration file and DATABASE_URL.
    #[arg(long)]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the embedded database migrations.
    Migrate,
    /// Run the migrations and populate the database with demo data.
    Seed,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = Config::try_load(&args.config)?;
    let db_url = args
        .db_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .or_else(|| config.db_url.clone())
        .unwrap_or_else(|| config::DEFAULT_DB_URL.to_string());
    let pool_size = config.pool_size.unwrap_or(config::DEFAULT_POOL_SIZE);

    log::info!("Opening database {db_url}");
    let connections = Connections::init(&db_url, pool_size)?;
    rallye_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command {
        Command::Migrate => {}
        Command::Seed => seed::populate_demo_data(&connections)?,
    }
    Ok(())
}
