//! Pokedex - A command-line client for a remote creature catalog

use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{Config, PokeClient, Repl};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so logs never mix with the REPL)
/// 2. Load configuration from environment variables
/// 3. Build the catalog client and its cache (starts the reaper)
/// 4. Run the REPL on stdin until `exit` or EOF
/// 5. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, cache_interval={}s, http_timeout={}s",
        config.api_url, config.cache_interval, config.http_timeout
    );

    let client = PokeClient::from_config(&config)?;
    info!("Catalog client initialized");

    let mut repl = Repl::new(client, StdRng::from_entropy());
    let stdin = BufReader::new(tokio::io::stdin());
    repl.run(stdin, &mut io::stdout()).await?;

    info!("Pokedex shutdown complete");
    Ok(())
}
