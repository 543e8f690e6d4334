use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Environment prefix for every configuration key, e.g. `TODO_LISTEN_ADDR`.
pub const ENV_PREFIX: &str = "TODO_";

/// Runtime configuration for the todo server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub listen_addr: String,
    /// SQLite database file. `:memory:` keeps everything in process memory.
    pub database_path: String,
    /// Default filter directive when `RUST_LOG` is not set.
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            database_path: "./todo.db".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Layer built-in defaults under `TODO_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
