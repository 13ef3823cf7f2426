use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::ConfigParsingError;

/// Combined configuration: the `core` section belongs to registry-core, the
/// `app` section to whatever application embeds it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig<Custom: Default> {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub app: Custom,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    #[serde(default)]
    pub ledger: LedgerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerConfig {
    /// Attempts per issuance, including the first one.
    pub issue_attempts: u32,
    /// Base delay between attempts; doubled after each failure.
    pub issue_retry_delay_ms: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            issue_attempts: 3,
            issue_retry_delay_ms: 250,
        }
    }
}

impl<Custom: Default + DeserializeOwned> AppConfig<Custom> {
    /// Loads and merges the given YAML files in order (later files win),
    /// then applies `REGISTRY_`-prefixed environment overrides.
    pub fn from_files<P: AsRef<Path>>(files: &[P]) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();
        for file in files {
            figment = figment.merge(Yaml::file(file));
        }

        let config = figment
            .merge(Env::prefixed("REGISTRY_").split("__"))
            .extract()?;

        Ok(config)
    }
}
