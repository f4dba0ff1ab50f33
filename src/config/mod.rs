pub mod labels;
pub mod layout;
pub mod log;
pub mod query;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

pub use labels::LabelsConfig;
pub use layout::LayoutConfig;
pub use layout::RankDir;
pub use log::LoggingConfig;
pub use query::QueryConfig;

use crate::err_with_loc;
use crate::error::ConfigError;
use crate::normalizer::LabelContext;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub labels: LabelsConfig,
    pub query: QueryConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn validate(&self) -> crate::Result<()> {
        self.layout.validate()?;
        self.query.validate()?;
        LabelContext::from_config(&self.labels)?;
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)
        .map_err(|e| err_with_loc!(ConfigError::OpenFileError(format!("{}: {}", path.display(), e))))?;
    let config = parse_config(&config_str)?;
    Ok(config)
}

pub fn parse_config(config_str: &str) -> crate::Result<Config> {
    let config: Config = toml::from_str(config_str).map_err(|e| err_with_loc!(ConfigError::ParseError(e.to_string())))?;
    config.validate()?;
    Ok(config)
}
