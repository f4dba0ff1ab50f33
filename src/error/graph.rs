use thiserror::Error;

/// Invariant violations in a domain graph. Any of these rejects the whole graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate entity id: {0}")]
    DuplicateEntity(String),

    #[error("Duplicate edge id: {0}")]
    DuplicateEdge(String),

    #[error("Edge {edge} references unknown entity {entity}")]
    DanglingEdge { edge: String, entity: String },

    #[error("Entity {entity} has risk score {score} outside 0..=100")]
    RiskScoreOutOfRange { entity: String, score: i64 },
}
