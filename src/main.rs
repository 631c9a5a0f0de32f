//! GrubDash server binary
//!
//! Reads `ServerConfig` (see `GRUBDASH_CONFIG`, `HOST`, `PORT`), seeds the
//! stores and serves until SIGTERM or Ctrl+C. Log verbosity follows `RUST_LOG`.

use grubdash::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::load()?;
    let seed = SeedData::load(config.seed_file.as_deref())?;

    ServerBuilder::new()
        .with_seed(seed)
        .serve(&config.addr())
        .await
}
