use anyhow::Context;
use greeter::{Config, Server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "greeter=info".into()),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let server = Server::bind(config.addr())
        .await
        .with_context(|| format!("failed to bind {}", config.addr()))?;

    server.serve(greeter::app()).await?;
    Ok(())
}
