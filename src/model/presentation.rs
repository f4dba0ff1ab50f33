use serde::Serialize;

use super::entity::EntityType;
use super::transfer::TokenInfo;
use super::transfer::TransferKind;
use crate::risk::RiskBadge;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(
        x: f64,
        y: f64,
    ) -> Self {
        Self { x, y }
    }
}

/// Border style selector for the address card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeEmphasis {
    Source,
    Destination,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationNode {
    pub id: String,
    pub address: String,
    pub chain: String,
    pub entity_type: EntityType,
    pub label: Option<String>,
    pub risk_score: Option<u8>,
    pub tags: Vec<String>,
    pub is_source: bool,
    pub is_destination: bool,
    pub color: &'static str,
    pub risk_badge: Option<RiskBadge>,
    pub short_address: String,
    pub display_tags: Vec<String>,
    // Assigned by the layout engine only
    pub position: Position,
}

impl PresentationNode {
    pub fn emphasis(&self) -> NodeEmphasis {
        if self.is_source {
            NodeEmphasis::Source
        } else if self.is_destination {
            NodeEmphasis::Destination
        } else {
            NodeEmphasis::Plain
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub chain: String,
    pub kind: TransferKind,
    pub color: &'static str,
    pub width: f64,
    // Locale-free: date and amount only, the tx count caption is composed at render time
    pub label: String,
    pub tx_count: u32,
    pub tx_hash: String,
    pub token: Option<TokenInfo>,
    pub amount: Option<String>,
    pub timestamp: Option<i64>,
    pub count: Option<u32>,
}

/// Everything the rendering surface needs to draw one query result.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FlowScene {
    pub nodes: Vec<PresentationNode>,
    pub edges: Vec<PresentationEdge>,
}

impl FlowScene {
    pub fn node(
        &self,
        id: &str,
    ) -> Option<&PresentationNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn edge(
        &self,
        id: &str,
    ) -> Option<&PresentationEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
