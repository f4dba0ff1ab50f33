use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferKind {
    #[default]
    Transfer,
    Swap,
    Bridge,
    Mint,
    Burn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

impl TokenInfo {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            address: None,
            decimals: None,
        }
    }
}

/// One on-chain movement of value, possibly aggregating several transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEdge {
    pub id: String,
    pub src: String,
    pub dst: String,
    pub chain: String,
    #[serde(default)]
    pub kind: TransferKind,
    pub tx_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenInfo>,
    // Decimal string, kept verbatim to avoid float precision loss
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    // Epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl TransferEdge {
    pub fn new(
        id: impl Into<String>,
        src: impl Into<String>,
        dst: impl Into<String>,
        chain: impl Into<String>,
        kind: TransferKind,
        tx_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            dst: dst.into(),
            chain: chain.into(),
            kind,
            tx_hash: tx_hash.into(),
            token: None,
            amount: None,
            timestamp: None,
            count: None,
        }
    }

    pub fn with_amount(
        mut self,
        amount: impl Into<String>,
        token: TokenInfo,
    ) -> Self {
        self.amount = Some(amount.into());
        self.token = Some(token);
        self
    }

    pub fn with_timestamp(
        mut self,
        timestamp_ms: i64,
    ) -> Self {
        self.timestamp = Some(timestamp_ms);
        self
    }

    pub fn with_count(
        mut self,
        count: u32,
    ) -> Self {
        self.count = Some(count);
        self
    }

    /// Number of underlying transactions; absent or zero counts as one.
    pub fn tx_count(&self) -> u32 {
        match self.count {
            Some(count) if count > 0 => count,
            _ => 1,
        }
    }
}
