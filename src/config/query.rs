use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_BASE_RETRY_DELAY_MS;
use crate::constants::DEFAULT_MAX_RETRIES;
use crate::constants::DEFAULT_MAX_RETRY_DELAY_MS;
use crate::constants::DEFAULT_QUERY_DEPTH;
use crate::constants::MAX_QUERY_DEPTH;
use crate::constants::SUPPORTED_CHAINS;
use crate::err_with_loc;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub default_depth: u32,
    pub max_depth: u32,
    pub supported_chains: Vec<String>,
    pub max_retries: usize,
    pub base_retry_delay_ms: u64,
    pub max_retry_delay_ms: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_depth: DEFAULT_QUERY_DEPTH,
            max_depth: MAX_QUERY_DEPTH,
            supported_chains: SUPPORTED_CHAINS.iter().map(|c| c.to_string()).collect(),
            max_retries: DEFAULT_MAX_RETRIES,
            base_retry_delay_ms: DEFAULT_BASE_RETRY_DELAY_MS,
            max_retry_delay_ms: DEFAULT_MAX_RETRY_DELAY_MS,
        }
    }
}

impl QueryConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_depth == 0 || self.default_depth == 0 || self.default_depth > self.max_depth {
            return Err(err_with_loc!(ConfigError::InvalidValue(format!(
                "query depth bounds invalid: default_depth={} max_depth={}",
                self.default_depth, self.max_depth
            ))));
        }
        if self.supported_chains.is_empty() {
            return Err(err_with_loc!(ConfigError::InvalidValue("query.supported_chains is empty".to_string())));
        }
        Ok(())
    }
}
