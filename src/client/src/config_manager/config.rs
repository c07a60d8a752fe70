use anyhow::{Context, Result};
use config::{Config as RConfig, Environment, File};
use exlog_common::constants::{
    CUSTOM_EXCEPTION_LOG, DEFAULT_RECORD_URL, FALLBACK_CONTEXT_TYPE, FALLBACK_OBJECT_TYPE,
};
use exlog_common::FieldMapping;
use serde::{Deserialize, Serialize};

pub const CONFIG_PATH_ENV_VAR: &str = "EXLOG_CONFIG";
const ENV_PREFIX: &str = "EXLOG";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,

    pub channel: String,
    pub page_url: String,

    pub fallback_context_type: String,
    pub fallback_object_type: String,

    #[serde(default)]
    pub fields: FieldMapping,

    pub log_level: String,
    #[serde(default)]
    pub log_dir: Option<String>,
    pub dry_run: bool,

    pub config_sources: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            channel: CUSTOM_EXCEPTION_LOG.to_string(),
            page_url: DEFAULT_RECORD_URL.to_string(),
            fallback_context_type: FALLBACK_CONTEXT_TYPE.to_string(),
            fallback_object_type: FALLBACK_OBJECT_TYPE.to_string(),
            fields: FieldMapping::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
            dry_run: false,
            config_sources: vec![],
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load_default_config() -> Result<Config> {
        Self::load_config(None)
    }

    /// Defaults, then the TOML file (explicit path, else `EXLOG_CONFIG`), then
    /// `EXLOG_*` environment variables. Nested keys use `__`, e.g.
    /// `EXLOG_FIELDS__FULL_MESSAGE`.
    pub fn load_config(path: Option<&str>) -> Result<Config> {
        let path = path
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_PATH_ENV_VAR).ok())
            .filter(|p| !p.trim().is_empty());

        let mut builder = RConfig::builder();

        // set defaults
        builder = builder
            .set_default("channel", CUSTOM_EXCEPTION_LOG)?
            .set_default("page_url", DEFAULT_RECORD_URL)?
            .set_default("fallback_context_type", FALLBACK_CONTEXT_TYPE)?
            .set_default("fallback_object_type", FALLBACK_OBJECT_TYPE)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("dry_run", false)?;

        if let Some(path) = path.as_deref() {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // set overrides
        builder = builder.set_override("config_sources", path.into_iter().collect::<Vec<_>>())?;

        let config: Config = builder
            .build()?
            .try_deserialize()
            .context("failed to parse config file")?;

        Ok(config)
    }
}
