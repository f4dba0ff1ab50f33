use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use super::entity::Entity;
use super::transfer::TransferEdge;
use crate::constants::DESTINATION_ENTITY_ID;
use crate::constants::MAX_RISK_SCORE;
use crate::constants::SOURCE_ENTITY_ID;
use crate::err_with_loc;
use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
    #[default]
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQuery {
    pub src: String,
    pub dst: String,
    #[serde(default)]
    pub chains: Vec<String>,
    pub depth: u32,
    // [from_ms, to_ms]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<(i64, i64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl GraphQuery {
    pub fn new(
        src: impl Into<String>,
        dst: impl Into<String>,
    ) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            chains: Vec::new(),
            depth: 0,
            time_range: None,
            direction: None,
        }
    }
}

/// Result of a flow query: the entities involved and the transfers between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainGraph {
    pub query: GraphQuery,
    pub entities: Vec<Entity>,
    pub edges: Vec<TransferEdge>,
}

impl DomainGraph {
    pub fn new(query: GraphQuery) -> Self {
        Self {
            query,
            entities: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn entity(
        &self,
        id: &str,
    ) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn source(&self) -> Option<&Entity> {
        self.entity(SOURCE_ENTITY_ID)
    }

    pub fn destination(&self) -> Option<&Entity> {
        self.entity(DESTINATION_ENTITY_ID)
    }

    /// Check the referential and uniqueness invariants. The first violation found is returned.
    pub fn validate(&self) -> crate::Result<()> {
        let mut entity_ids = HashSet::with_capacity(self.entities.len());
        for entity in &self.entities {
            if !entity_ids.insert(entity.id.as_str()) {
                return Err(err_with_loc!(GraphError::DuplicateEntity(entity.id.clone())));
            }
            if let Some(score) = entity.risk_score {
                if !(0..=MAX_RISK_SCORE).contains(&score) {
                    return Err(err_with_loc!(GraphError::RiskScoreOutOfRange {
                        entity: entity.id.clone(),
                        score,
                    }));
                }
            }
        }

        let mut edge_ids = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(err_with_loc!(GraphError::DuplicateEdge(edge.id.clone())));
            }
            for endpoint in [&edge.src, &edge.dst] {
                if !entity_ids.contains(endpoint.as_str()) {
                    return Err(err_with_loc!(GraphError::DanglingEdge {
                        edge: edge.id.clone(),
                        entity: endpoint.clone(),
                    }));
                }
            }
        }

        Ok(())
    }
}
