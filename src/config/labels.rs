use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_DATE_FORMAT;
use crate::normalizer::label::Locale;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub locale: Locale,
    // IANA zone name used when formatting edge dates
    pub timezone: String,
    pub date_format: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            timezone: "UTC".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}
