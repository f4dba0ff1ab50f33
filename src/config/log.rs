use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_LOG_DIRECTORY;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    // Root of the rolling log files; `debug/` and `error/` live below it
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: Some(DEFAULT_LOG_DIRECTORY.to_string()),
        }
    }
}

impl LoggingConfig {
    pub fn base_directory(&self) -> PathBuf {
        PathBuf::from(self.directory.as_deref().unwrap_or(DEFAULT_LOG_DIRECTORY))
    }
}
