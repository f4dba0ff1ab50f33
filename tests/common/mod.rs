#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use amlcheck::model::DomainGraph;
use amlcheck::model::Entity;
use amlcheck::model::GraphQuery;
use amlcheck::model::TransferEdge;
use amlcheck::service::JsonFileGraphService;
use serde::Deserialize;

pub const SRC_ADDRESS: &str = "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984";
pub const DST_ADDRESS: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

pub const DEMO_GRAPH_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/demo_graph.json");
const DEMO_GRAPH_JSON: &str = include_str!("../../demos/demo_graph.json");

pub const DEMO_ENTITY_COUNT: usize = 19;
pub const DEMO_EDGE_COUNT: usize = 22;

#[derive(Deserialize)]
struct Recorded {
    entities: Vec<Entity>,
    edges: Vec<TransferEdge>,
}

pub fn demo_query() -> GraphQuery {
    let mut query = GraphQuery::new(SRC_ADDRESS, DST_ADDRESS);
    query.depth = 3;
    query.chains = vec!["ethereum".to_string()];
    query
}

/// Structuring, a bridge round trip through BSC, Tornado Cash and a peel chain,
/// all ending at the destination wallet.
pub fn demo_graph() -> DomainGraph {
    let recorded: Recorded = serde_json::from_str(DEMO_GRAPH_JSON).expect("demo graph fixture parses");
    let query = demo_query();
    let mut graph = DomainGraph::new(query.clone());
    graph.entities = recorded.entities;
    graph.edges = recorded.edges;
    for entity in graph.entities.iter_mut() {
        match entity.id.as_str() {
            "src" => entity.address = query.src.clone(),
            "dst" => entity.address = query.dst.clone(),
            _ => {},
        }
    }
    graph
}

pub fn demo_service() -> JsonFileGraphService {
    JsonFileGraphService::new(DEMO_GRAPH_PATH)
}

/// Shared call counter for hand-written services.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn bump(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
