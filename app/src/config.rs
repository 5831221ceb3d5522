use std::time::Duration;

use serde::*;

use crate::infrastructure::telemetry::TelemetryConfig;

/// Environment variables that must be present and non-empty.
pub const REQUIRED_ENV: [&str; 4] = [
    "SLURM_USER_NAME",
    "SLURM_USER_TOKEN",
    "SLURM_RESTD_IP",
    "SLURM_RESTD_PORT",
];

#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    #[serde(default)]
    pub slurm_user_name: String,

    #[serde(default)]
    pub slurm_user_token: String,

    #[serde(default)]
    pub slurm_restd_ip: String,

    #[serde(default)]
    pub slurm_restd_port: String,

    #[serde(default = "ProxyConfig::default_bind_address")]
    pub bind_address: String,

    #[serde(default = "ProxyConfig::default_bind_port")]
    pub bind_port: u16,

    #[serde(default = "ProxyConfig::default_allowed_origin")]
    pub allowed_origin: String,

    /// Seconds to wait for slurmrestd.
    #[serde(default = "ProxyConfig::default_request_timeout")]
    pub request_timeout: u64,

    #[serde(default = "Default::default")]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

/// Optional `config.yaml` in the working directory, overridden by the
/// process environment.
pub fn build_config() -> Result<ProxyConfig, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()?;
    let proxy_config: ProxyConfig = config.try_deserialize()?;
    proxy_config.validate()?;
    Ok(proxy_config)
}

impl ProxyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            &self.slurm_user_name,
            &self.slurm_user_token,
            &self.slurm_restd_ip,
            &self.slurm_restd_port,
        ];
        match REQUIRED_ENV.iter().zip(values).find(|(_, v)| v.trim().is_empty()) {
            Some((key, _)) => Err(ConfigError::Missing(*key)),
            None => Ok(()),
        }
    }

    /// Root of the slurmrestd daemon, e.g. `http://10.0.0.5:6820/`.
    pub fn restd_base(&self) -> String {
        format!("http://{}:{}/", self.slurm_restd_ip, self.slurm_restd_port)
    }

    #[inline]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn default_bind_address() -> String {
        "0.0.0.0".to_owned()
    }

    pub fn default_bind_port() -> u16 {
        8080
    }

    pub fn default_allowed_origin() -> String {
        "http://localhost:3000".to_owned()
    }

    pub fn default_request_timeout() -> u64 {
        20
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ProxyConfig};

    fn from_pairs(pairs: &[(&str, &str)]) -> ProxyConfig {
        let mut builder = config::Config::builder();
        for (k, v) in pairs {
            builder = builder.set_override(*k, *v).unwrap();
        }
        builder.build().unwrap().try_deserialize().unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[
            ("slurm_user_name", "slurm"),
            ("slurm_user_token", "t0k3n"),
            ("slurm_restd_ip", "10.0.0.5"),
            ("slurm_restd_port", "6820"),
        ]);
        config.validate().unwrap();
        assert_eq!(8080, config.bind_port);
        assert_eq!("0.0.0.0", config.bind_address);
        assert_eq!("http://localhost:3000", config.allowed_origin);
        assert_eq!(20, config.request_timeout().as_secs());
        assert_eq!("http://10.0.0.5:6820/", config.restd_base());
    }

    #[test]
    fn test_missing_variable() {
        let config = from_pairs(&[
            ("slurm_user_name", "slurm"),
            ("slurm_restd_ip", "10.0.0.5"),
            ("slurm_restd_port", "6820"),
        ]);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SLURM_USER_TOKEN")));
        assert_eq!(
            "Missing required environment variable: SLURM_USER_TOKEN",
            err.to_string()
        );
    }

    #[test]
    fn test_empty_variable_counts_as_missing() {
        let config = from_pairs(&[
            ("slurm_user_name", "slurm"),
            ("slurm_user_token", "t0k3n"),
            ("slurm_restd_ip", ""),
            ("slurm_restd_port", "6820"),
        ]);
        assert!(matches!(config.validate(), Err(ConfigError::Missing("SLURM_RESTD_IP"))));
    }
}
