use serde::Deserialize;
use serde::Serialize;

use crate::constants::HIGH_RISK_THRESHOLD;
use crate::constants::MEDIUM_RISK_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

/// Map a numeric risk score to its tier. Total over all integers.
pub fn classify(score: i64) -> RiskTier {
    if score >= HIGH_RISK_THRESHOLD {
        RiskTier::High
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

/// Risk badge shown on an address card. Only scored entities get one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBadge {
    pub score: u8,
    pub tier: RiskTier,
    // Warning icon next to the tier text
    pub alert: bool,
}

impl RiskBadge {
    pub fn for_score(score: Option<u8>) -> Option<Self> {
        let score = score?;
        Some(Self {
            score,
            tier: classify(score.into()),
            alert: i64::from(score) >= MEDIUM_RISK_THRESHOLD,
        })
    }
}
