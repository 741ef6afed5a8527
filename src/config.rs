//! Application-level configuration, resolved from the environment.

use std::{env, path::PathBuf};

use tracing::{info, warn};

/// Default location of the persisted state document.
///
/// The schema version is part of the file name; bumping it points the store
/// at a fresh file that re-seeds from defaults, which is the entire
/// migration mechanism.
const DEFAULT_DATA_PATH: &str = "data/code-drop.v4.json";
/// Environment variable that overrides [`DEFAULT_DATA_PATH`].
const DATA_PATH_ENV: &str = "CODE_DROP_DATA_PATH";
/// Default port the server listens on.
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Path of the persisted state document.
    pub data_path: PathBuf,
    /// Port the HTTP server binds.
    pub port: u16,
}

impl AppConfig {
    /// Resolve the configuration from the environment, falling back to
    /// baked-in defaults.
    pub fn load() -> Self {
        let data_path = env::var_os(DATA_PATH_ENV)
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let port = env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .ok()
            .map(|value| parse_port(&value))
            .unwrap_or(DEFAULT_PORT);

        let config = Self { data_path, port };
        info!(
            data_path = %config.data_path.display(),
            port = config.port,
            "configuration resolved"
        );
        config
    }
}

/// Parse a port value, falling back to the default on junk input.
fn parse_port(value: &str) -> u16 {
    match value.trim().parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            warn!(value, "invalid port value; using default");
            DEFAULT_PORT
        }
    }
}
