//! Pokedex - A PokeAPI REPL client backed by an expiring in-memory cache
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging (stderr, so the prompt on
//!    stdout stays clean)
//! 2. Load configuration from environment variables
//! 3. Create the response cache; its background reaper starts with it
//! 4. Build the API client around the cache and hand it to the REPL
//! 5. Run the prompt loop until `exit`, then shut the cache down

use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{ApiClient, Cache, Config, Repl};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from environment variables
    let config = Config::from_env();
    debug!(
        cache_ttl_secs = config.cache_ttl,
        reap_interval_secs = config.reap_interval,
        base_url = %config.base_url,
        "configuration loaded"
    );

    // The cache owns its reaper; dropping or shutting down stops it
    let cache = Cache::with_reap_interval(config.ttl(), config.reap_interval());

    let client = ApiClient::new(config.base_url.clone(), cache)?;

    let mut repl = Repl::new(client);
    repl.run().await?;

    info!("pokedex closed");
    Ok(())
}
