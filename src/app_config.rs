use crate::decode::DecodePolicy;
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    decode: DecodePolicy,
}

impl AppConfig {
    /// Layers `config.toml`, `config_local.toml` and `CLOUDSDK_*` environment variables, e.g.
    /// `CLOUDSDK_DECODE__MISSING_FIELDS=zero_fill`.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("CLOUDSDK").prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn decode(&self) -> &DecodePolicy {
        &self.decode
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig::default(),
        }
    }

    pub fn decode(mut self, policy: DecodePolicy) -> Self {
        self.config.decode = policy;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
