use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "colossus_data.txt";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing_subscriber` filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::builder()?
            // Every file is optional; the defaults above are enough to run.
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `COLOSSUS__STORAGE__DATA_FILE=/tmp/seats.txt`
            .add_source(config::Environment::with_prefix("COLOSSUS").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    fn builder(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("storage.data_file", DEFAULT_DATA_FILE)?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)
    }
}
