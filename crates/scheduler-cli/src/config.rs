use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use scheduler_core::query::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite database file, created on first use.
    pub database_path: String,
    /// Rows shown by `list` and `search` without `--limit`.
    pub list_limit: u32,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "scheduler.db".to_string(),
            list_limit: DEFAULT_LIMIT,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::from_figment(
            Self::base()
                .merge(Toml::file("config.toml"))
                .merge(Env::prefixed("SCHEDULER_")),
        )
    }

    fn base() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
    }

    fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }
}
