use serde::*;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Directive;

/// 日志配置
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TelemetryConfig {
    /// 启用日志
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// 全局过滤级别
    #[serde(default = "Default::default")]
    pub max_level: LoggingLevel,
    /// 自定义过滤规则
    #[serde(default = "Default::default")]
    pub level_filter: String,
    /// 自定义过滤规则环境变量
    #[serde(default = "default_level_filter_env")]
    pub level_filter_env: String,
    /// 启用调试输出（带有文件、行号等）
    #[serde(default = "Default::default")]
    pub enable_debug_logging: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            max_level: Default::default(),
            level_filter: Default::default(),
            level_filter_env: default_level_filter_env(),
            enable_debug_logging: Default::default(),
        }
    }
}

/// 日志级别
#[derive(Default, Deserialize, Serialize, Clone, Debug)]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    Off,
}

impl From<LoggingLevel> for LevelFilter {
    fn from(val: LoggingLevel) -> Self {
        match val {
            LoggingLevel::Error => LevelFilter::ERROR,
            LoggingLevel::Warn => LevelFilter::WARN,
            LoggingLevel::Info => LevelFilter::INFO,
            LoggingLevel::Debug => LevelFilter::DEBUG,
            LoggingLevel::Trace => LevelFilter::TRACE,
            LoggingLevel::Off => LevelFilter::OFF,
        }
    }
}

impl From<LoggingLevel> for Directive {
    fn from(val: LoggingLevel) -> Self {
        let level: LevelFilter = val.into();
        level.into()
    }
}

fn default_enabled() -> bool {
    true
}

fn default_level_filter_env() -> String {
    "RUST_LOG".to_owned()
}
