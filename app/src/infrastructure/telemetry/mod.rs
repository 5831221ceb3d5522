mod config;

pub use self::config::*;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// 配置日志
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let mut filter_builder =
        EnvFilter::builder().with_default_directive(config.max_level.clone().into());
    if !config.level_filter_env.is_empty() {
        filter_builder = filter_builder.with_env_var(config.level_filter_env.as_str());
    }
    // Explicit directives in the config win over the environment.
    let filter = if config.level_filter.is_empty() {
        filter_builder.from_env_lossy()
    } else {
        filter_builder.parse_lossy(config.level_filter.as_str())
    };
    let debug = config.enable_debug_logging;
    let console = tracing_subscriber::fmt::layer()
        .with_file(debug)
        .with_line_number(debug)
        .with_thread_ids(debug)
        .with_target(debug);

    Registry::default().with(filter).with(console).try_init()?;
    Ok(())
}
