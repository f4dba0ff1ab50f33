use std::fmt::Write;
use std::str::FromStr;

use chrono::DateTime;
use chrono::format::Item;
use chrono::format::StrftimeItems;
use chrono_tz::Tz;
use serde::Deserialize;
use serde::Serialize;

use crate::config::LabelsConfig;
use crate::constants::DEFAULT_DATE_FORMAT;
use crate::constants::EDGE_LABEL_SEPARATOR;
use crate::err_with_loc;
use crate::error::ConfigError;
use crate::model::PresentationEdge;
use crate::model::TransferEdge;
use crate::risk::RiskBadge;
use crate::risk::RiskTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" | "en-US" => Ok(Locale::English),
            "zh-TW" | "zh-Hant" | "zh" => Ok(Locale::TraditionalChinese),
            other => Err(ConfigError::InvalidValue(format!("unsupported locale: {}", other))),
        }
    }
}

/// Explicit formatting context for every user-facing string the core produces.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelContext {
    pub locale: Locale,
    pub timezone: Tz,
    date_format: String,
}

impl Default for LabelContext {
    fn default() -> Self {
        Self::new(Locale::default(), Tz::UTC)
    }
}

impl LabelContext {
    pub fn new(
        locale: Locale,
        timezone: Tz,
    ) -> Self {
        Self {
            locale,
            timezone,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn from_config(config: &LabelsConfig) -> crate::Result<Self> {
        let timezone = Tz::from_str(&config.timezone)
            .map_err(|e| err_with_loc!(ConfigError::InvalidValue(format!("labels.timezone: {}", e))))?;
        Self::new(config.locale, timezone).with_date_format(&config.date_format)
    }

    pub fn with_date_format(
        mut self,
        date_format: &str,
    ) -> crate::Result<Self> {
        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
            return Err(err_with_loc!(ConfigError::InvalidValue(format!(
                "labels.date_format is not a valid strftime pattern: {}",
                date_format
            ))));
        }
        self.date_format = date_format.to_string();
        Ok(self)
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Date of an epoch-millisecond instant in this context's zone. None when out of range.
    pub fn format_date(
        &self,
        timestamp_ms: i64,
    ) -> Option<String> {
        let instant = DateTime::from_timestamp_millis(timestamp_ms)?.with_timezone(&self.timezone);
        let mut out = String::new();
        write!(out, "{}", instant.format(&self.date_format)).ok()?;
        Some(out)
    }

    pub fn transaction_count(
        &self,
        count: u32,
    ) -> String {
        match self.locale {
            Locale::English if count == 1 => format!("{} tx", count),
            Locale::English => format!("{} txs", count),
            Locale::TraditionalChinese => format!("{} 筆交易", count),
        }
    }

    pub fn risk_tier(
        &self,
        tier: RiskTier,
    ) -> &'static str {
        match (self.locale, tier) {
            (Locale::English, RiskTier::High) => "High",
            (Locale::English, RiskTier::Medium) => "Medium",
            (Locale::English, RiskTier::Low) => "Low",
            (Locale::TraditionalChinese, RiskTier::High) => "高",
            (Locale::TraditionalChinese, RiskTier::Medium) => "中",
            (Locale::TraditionalChinese, RiskTier::Low) => "低",
        }
    }

    pub fn risk_badge_caption(
        &self,
        badge: &RiskBadge,
    ) -> String {
        let heading = match self.locale {
            Locale::English => "Risk Level",
            Locale::TraditionalChinese => "風險等級",
        };
        format!("{}: {}", heading, self.risk_tier(badge.tier))
    }

    /// Full caption drawn on an edge: tx count first, then the cached label.
    pub fn edge_caption(
        &self,
        edge: &PresentationEdge,
    ) -> String {
        let count = self.transaction_count(edge.tx_count);
        if edge.label.is_empty() {
            count
        } else {
            format!("{}{}{}", count, EDGE_LABEL_SEPARATOR, edge.label)
        }
    }

    /// Locale-free edge label: `MM/DD | <amount> <symbol>`, either part optional.
    pub fn edge_label(
        &self,
        edge: &TransferEdge,
    ) -> String {
        let mut parts = Vec::with_capacity(2);

        if let Some(date) = edge.timestamp.and_then(|ts| self.format_date(ts)) {
            parts.push(date);
        }

        if let (Some(amount), Some(token)) = (&edge.amount, &edge.token) {
            if !amount.is_empty() && !token.symbol.is_empty() {
                parts.push(format!("{} {}", amount, token.symbol));
            }
        }

        parts.join(EDGE_LABEL_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TokenInfo;
    use crate::model::TransferKind;

    // 2024-03-09T23:30:00Z
    const LATE_EVENING_UTC: i64 = 1_710_027_000_000;

    fn edge() -> TransferEdge {
        TransferEdge::new("e1", "a", "b", "ethereum", TransferKind::Transfer, "0x01")
    }

    #[test]
    fn label_has_date_then_amount() {
        let ctx = LabelContext::default();
        let edge = edge().with_timestamp(LATE_EVENING_UTC).with_amount("125.8", TokenInfo::new("ETH"));
        assert_eq!(ctx.edge_label(&edge), "03/09 | 125.8 ETH");
    }

    #[test]
    fn label_parts_are_optional() {
        let ctx = LabelContext::default();
        assert_eq!(ctx.edge_label(&edge()), "");
        assert_eq!(ctx.edge_label(&edge().with_timestamp(LATE_EVENING_UTC)), "03/09");

        let mut amount_only = edge();
        amount_only.amount = Some("42".to_string());
        assert_eq!(ctx.edge_label(&amount_only), "");

        amount_only.token = Some(TokenInfo::new("USDT"));
        assert_eq!(ctx.edge_label(&amount_only), "42 USDT");
    }

    #[test]
    fn date_follows_context_timezone() {
        let taipei = LabelContext::new(Locale::English, chrono_tz::Asia::Taipei);
        assert_eq!(taipei.format_date(LATE_EVENING_UTC).as_deref(), Some("03/10"));
    }

    #[test]
    fn transaction_count_is_pluralized_per_locale() {
        let en = LabelContext::default();
        assert_eq!(en.transaction_count(1), "1 tx");
        assert_eq!(en.transaction_count(3), "3 txs");

        let zh = LabelContext::new(Locale::TraditionalChinese, Tz::UTC);
        assert_eq!(zh.transaction_count(1), "1 筆交易");
        assert_eq!(zh.transaction_count(3), "3 筆交易");
    }

    #[test]
    fn badge_caption_is_localized() {
        let badge = RiskBadge::for_score(Some(98)).unwrap();
        assert_eq!(LabelContext::default().risk_badge_caption(&badge), "Risk Level: High");

        let zh = LabelContext::new(Locale::TraditionalChinese, Tz::UTC);
        assert_eq!(zh.risk_badge_caption(&badge), "風險等級: 高");
    }

    #[test]
    fn bad_date_format_and_timezone_are_rejected() {
        assert!(LabelContext::default().with_date_format("%Q").is_err());

        let config = LabelsConfig {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..LabelsConfig::default()
        };
        assert!(LabelContext::from_config(&config).is_err());
    }

    #[test]
    fn locale_parses_from_tags() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("zh-TW".parse::<Locale>().unwrap(), Locale::TraditionalChinese);
        assert!("fr".parse::<Locale>().is_err());
    }
}
