//! Projects API server binary.
//!
//! Builds the seeded in-memory database and hands it to the API layer,
//! which stays agnostic of the storage backend.

use std::net::IpAddr;

use clap::Parser;
use projects_api::api::{self, Config};
use projects_api::db::{InMemoryDatabase, SEED_PROJECT_COUNT};

#[derive(Parser)]
#[command(name = "projects-api")]
#[command(author, version, about = "Project collection API server", long_about = None)]
struct Cli {
    /// Host address to bind to (overrides HOST, defaults to 0.0.0.0)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides PORT, defaults to 3000)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Precedence: CLI flag > env var > default
    let mut config = Config::new();
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let db = InMemoryDatabase::seeded(SEED_PROJECT_COUNT);

    api::run(config, db).await?;

    Ok(())
}
