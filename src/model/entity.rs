use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    #[serde(rename = "EOA")]
    Eoa,
    Contract,
    Token,
    Bridge,
    Exchange,
}

/// A chain address participating in a flow: wallet, contract, exchange or bridge endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    pub address: String,
    pub chain: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    // None means unscored, which is not the same as a verified zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entity {
    pub fn new(
        id: impl Into<String>,
        address: impl Into<String>,
        chain: impl Into<String>,
        entity_type: EntityType,
    ) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            chain: chain.into(),
            entity_type,
            label: None,
            risk_score: None,
            tags: Vec::new(),
        }
    }

    pub fn with_label(
        mut self,
        label: impl Into<String>,
    ) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_risk_score(
        mut self,
        score: i64,
    ) -> Self {
        self.risk_score = Some(score);
        self
    }

    pub fn with_tags<I, T>(
        mut self,
        tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
