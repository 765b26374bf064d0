use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use aula_core::{DEFAULT_FIZZBUZZ_END, DEFAULT_FIZZBUZZ_START, DEFAULT_GREETING_UPTO};
use aula_logging::aula_info;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_PATH: &str = "./aula.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Optional settings read from `aula.ron`; every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_destination: LogDestination,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub fizzbuzz_start: i64,
    pub fizzbuzz_end: i64,
    pub greeting_upto: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
            fizzbuzz_start: DEFAULT_FIZZBUZZ_START,
            fizzbuzz_end: DEFAULT_FIZZBUZZ_END,
            greeting_upto: DEFAULT_GREETING_UPTO,
        }
    }
}

impl AppConfig {
    /// Unrecognised level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Loads the configuration at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    aula_info!("Loaded configuration from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use log::LevelFilter;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::{load_config, AppConfig, ConfigError};
    use crate::platform::logging::LogDestination;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("aula.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fizzbuzz_start, 1);
        assert_eq!(config.fizzbuzz_end, 50);
        assert_eq!(config.greeting_upto, 10);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("aula.ron");
        fs::write(&path, "(fizzbuzz_end: 16, log_destination: Terminal, log_level: \"debug\")")
            .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.fizzbuzz_end, 16);
        assert_eq!(config.fizzbuzz_start, 1);
        assert_eq!(config.log_destination, LogDestination::Terminal);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("aula.ron");
        fs::write(&path, "(fizzbuzz_end: \"lots\")").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn directory_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            load_config(temp.path()),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn config_round_trips_through_ron() {
        let config = AppConfig {
            log_destination: LogDestination::Both,
            greeting_upto: 3,
            ..AppConfig::default()
        };
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()).unwrap();
        assert_eq!(ron::from_str::<AppConfig>(&text).unwrap(), config);
    }
}
