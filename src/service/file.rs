use std::path::Path;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::GraphQueryService;
use crate::constants::DESTINATION_ENTITY_ID;
use crate::constants::SOURCE_ENTITY_ID;
use crate::err_with_loc;
use crate::error::QueryError;
use crate::model::DomainGraph;
use crate::model::Entity;
use crate::model::GraphQuery;
use crate::model::TransferEdge;

#[derive(Debug, Deserialize)]
struct StoredGraph {
    #[serde(default)]
    entities: Vec<Entity>,
    #[serde(default)]
    edges: Vec<TransferEdge>,
}

/// Serves one recorded graph from a JSON file for every query.
///
/// The designated `src`/`dst` entities take the requested addresses, so a single
/// recording can stand in for any pair of wallets.
#[derive(Debug, Clone)]
pub struct JsonFileGraphService {
    path: PathBuf,
}

impl JsonFileGraphService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GraphQueryService for JsonFileGraphService {
    async fn fetch(
        &self,
        query: &GraphQuery,
    ) -> crate::Result<DomainGraph> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| err_with_loc!(QueryError::Fetch(format!("{}: {}", self.path.display(), e))))?;
        let stored: StoredGraph = serde_json::from_str(&raw)
            .map_err(|e| err_with_loc!(QueryError::Parse(format!("{}: {}", self.path.display(), e))))?;

        let mut graph = DomainGraph::new(query.clone());
        graph.entities = stored.entities;
        graph.edges = stored.edges;

        for entity in graph.entities.iter_mut() {
            if entity.id == SOURCE_ENTITY_ID {
                entity.address = query.src.clone();
            } else if entity.id == DESTINATION_ENTITY_ID {
                entity.address = query.dst.clone();
            }
        }

        debug!(
            "json_file_service::loaded::{}::entities::{}::edges::{}",
            self.path.display(),
            graph.entities.len(),
            graph.edges.len()
        );
        Ok(graph)
    }
}
