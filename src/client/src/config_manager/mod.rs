mod config;

pub use config::{Config, ConfigLoader, CONFIG_PATH_ENV_VAR};
