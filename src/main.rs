//! Alianza CLI entrypoint.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("alianza=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    alianza::cli::run().await
}
