use crate::model::ConfigError;

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub team_output_file: String,
    pub player_output_file: String,
    pub max_concurrency: usize,
    pub media_dir: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            team_output_file: "teams.csv".into(),
            player_output_file: "players.csv".into(),
            max_concurrency: 2,
            media_dir: "media".into(),
            request_timeout_secs: 30,
        }
    }
}

/// Load configuration from a JSON file. A missing file falls back to the
/// defaults; an unreadable or invalid file is an error, as is a concurrency
/// bound of zero.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let config = match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })?,
        Err(e) if e.kind() == ErrorKind::NotFound => AppConfig::default(),
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_string(),
                reason: e.to_string(),
            });
        }
    };

    if config.max_concurrency == 0 {
        return Err(ConfigError::InvalidConcurrency);
    }
    Ok(config)
}
