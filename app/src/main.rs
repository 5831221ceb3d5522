mod api;
mod config;
mod infrastructure;
mod server;

use anyhow::Context;
use colored::Colorize;

use self::config::build_config;
use self::infrastructure::ioc::Container;
use self::infrastructure::telemetry::initialize_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let proxy_config = build_config().with_context(|| "Failed to build config".red())?;

    initialize_telemetry(&proxy_config.telemetry)
        .with_context(|| "Failed to initialize logger".red())?;

    let container =
        Container::new(&proxy_config).with_context(|| "Cannot build IOC container".red())?;

    tracing::info!(
        upstream = %proxy_config.restd_base(),
        timeout = ?proxy_config.request_timeout(),
        "SLURM view proxy started"
    );
    server::initialize_web_host(&proxy_config, container)
        .await
        .with_context(|| "Web server stopped with error".red())?;

    tracing::info!("Web server stopped.");
    Ok(())
}
