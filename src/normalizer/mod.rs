pub mod label;
pub mod palette;

use tracing::debug;
use tracing::instrument;
use tracing::warn;

pub use label::LabelContext;
pub use label::Locale;

use crate::constants::DESTINATION_ENTITY_ID;
use crate::constants::MAX_DISPLAY_TAGS;
use crate::constants::SOURCE_ENTITY_ID;
use crate::model::DomainGraph;
use crate::model::Entity;
use crate::model::FlowScene;
use crate::model::Position;
use crate::model::PresentationEdge;
use crate::model::PresentationNode;
use crate::model::TransferEdge;
use crate::risk::RiskBadge;
use crate::utils::short_address;

/// Turn a domain graph into unpositioned presentation nodes and edges.
///
/// The graph is validated first; an invariant violation rejects it as a whole.
#[instrument(level = "debug", skip_all, fields(entities = graph.entities.len(), edges = graph.edges.len()))]
pub fn normalize(
    graph: &DomainGraph,
    ctx: &LabelContext,
) -> crate::Result<FlowScene> {
    graph.validate()?;

    if graph.source().is_none() {
        warn!("normalize::missing_designated_source");
    }
    if graph.destination().is_none() {
        warn!("normalize::missing_designated_destination");
    }

    let nodes: Vec<PresentationNode> = graph.entities.iter().map(to_node).collect();
    let edges: Vec<PresentationEdge> = graph.edges.iter().map(|edge| to_edge(edge, ctx)).collect();

    debug!("normalize::scene_built::nodes::{}::edges::{}", nodes.len(), edges.len());

    Ok(FlowScene { nodes, edges })
}

fn to_node(entity: &Entity) -> PresentationNode {
    // validated into 0..=100 already
    let risk_score = entity.risk_score.and_then(|score| u8::try_from(score).ok());
    PresentationNode {
        id: entity.id.clone(),
        address: entity.address.clone(),
        chain: entity.chain.clone(),
        entity_type: entity.entity_type,
        label: entity.label.clone(),
        risk_score,
        tags: entity.tags.clone(),
        is_source: entity.id == SOURCE_ENTITY_ID,
        is_destination: entity.id == DESTINATION_ENTITY_ID,
        color: palette::node_color(entity),
        risk_badge: RiskBadge::for_score(risk_score),
        short_address: short_address(&entity.address),
        display_tags: entity.tags.iter().take(MAX_DISPLAY_TAGS).cloned().collect(),
        position: Position::default(),
    }
}

fn to_edge(
    edge: &TransferEdge,
    ctx: &LabelContext,
) -> PresentationEdge {
    let tx_count = edge.tx_count();
    PresentationEdge {
        id: edge.id.clone(),
        source: edge.src.clone(),
        target: edge.dst.clone(),
        chain: edge.chain.clone(),
        kind: edge.kind,
        color: palette::edge_color(edge.kind),
        width: palette::edge_width(tx_count),
        label: ctx.edge_label(edge),
        tx_count,
        tx_hash: edge.tx_hash.clone(),
        token: edge.token.clone(),
        amount: edge.amount.clone(),
        timestamp: edge.timestamp,
        count: edge.count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::error::GraphError;
    use crate::model::EntityType;
    use crate::model::GraphQuery;
    use crate::model::NodeEmphasis;
    use crate::model::TokenInfo;
    use crate::model::TransferKind;
    use crate::risk::RiskTier;

    fn small_graph() -> DomainGraph {
        let mut graph = DomainGraph::new(GraphQuery::new("0xaaaa", "0xbbbb"));
        graph.entities = vec![
            Entity::new("src", "0x742d35cc6634c0532925a3b844bc9e7595f0beb1", "ethereum", EntityType::Eoa)
                .with_risk_score(12)
                .with_tags(["verified", "kyc-passed"]),
            Entity::new("cex", "0xdfd5293d8e347dfe59e90efd55b2956a1343963d", "ethereum", EntityType::Exchange)
                .with_label("Hot Wallet")
                .with_risk_score(85)
                .with_tags(["exchange", "centralized", "kyc-required", "extra"]),
            Entity::new("dst", "0x9a8b7c6d5e4f3a2b1c0d9e8f7a6b5c4d3e2f1a0b", "bsc", EntityType::Eoa),
        ];
        graph.edges = vec![
            TransferEdge::new("e1", "src", "cex", "ethereum", TransferKind::Transfer, "0x01")
                .with_amount("125.8", TokenInfo::new("ETH"))
                .with_timestamp(1_710_027_000_000),
            TransferEdge::new("e2", "cex", "dst", "bsc", TransferKind::Bridge, "0x02").with_count(3),
        ];
        graph
    }

    #[test]
    fn nodes_carry_entity_fields_and_designations() {
        let scene = normalize(&small_graph(), &LabelContext::default()).unwrap();

        let src = scene.node("src").unwrap();
        assert!(src.is_source && !src.is_destination);
        assert_eq!(src.emphasis(), NodeEmphasis::Source);
        assert_eq!(src.tags, vec!["verified", "kyc-passed"]);
        assert_eq!(src.short_address, "0x742d...beb1");
        assert_eq!(src.position, Position::default());

        let dst = scene.node("dst").unwrap();
        assert!(dst.is_destination && !dst.is_source);
        assert_eq!(dst.risk_badge, None);
        assert_eq!(dst.color, NODE_COLOR_NEUTRAL);

        let cex = scene.node("cex").unwrap();
        assert_eq!(cex.emphasis(), NodeEmphasis::Plain);
        assert_eq!(cex.color, NODE_COLOR_ALERT);
        assert_eq!(cex.risk_badge.map(|b| b.tier), Some(RiskTier::High));
        assert_eq!(cex.tags.len(), 4);
        assert_eq!(cex.display_tags, vec!["exchange", "centralized", "kyc-required"]);
    }

    #[test]
    fn edges_get_visual_encoding_and_pass_through() {
        let scene = normalize(&small_graph(), &LabelContext::default()).unwrap();

        let e1 = scene.edge("e1").unwrap();
        assert_eq!(e1.color, EDGE_COLOR_TRANSFER);
        assert_eq!(e1.width, 1.5);
        assert_eq!(e1.label, "03/09 | 125.8 ETH");
        assert_eq!(e1.count, None);
        assert_eq!(e1.tx_count, 1);
        assert_eq!(e1.amount.as_deref(), Some("125.8"));

        let e2 = scene.edge("e2").unwrap();
        assert_eq!(e2.color, EDGE_COLOR_BRIDGE);
        assert_eq!(e2.width, 4.5);
        assert_eq!(e2.label, "");
        assert_eq!(e2.count, Some(3));
        assert_eq!((e2.source.as_str(), e2.target.as_str()), ("cex", "dst"));
    }

    #[test]
    fn dangling_edge_rejects_whole_graph() {
        let mut graph = small_graph();
        graph
            .edges
            .push(TransferEdge::new("e3", "dst", "mixer", "ethereum", TransferKind::Transfer, "0x03"));

        let err = normalize(&graph, &LabelContext::default()).unwrap_err();
        assert!(matches!(err.downcast_ref::<GraphError>(), Some(GraphError::DanglingEdge { .. })));
    }

    #[test]
    fn labels_do_not_depend_on_locale() {
        let graph = small_graph();
        let en = normalize(&graph, &LabelContext::default()).unwrap();
        let zh_ctx = LabelContext::new(Locale::TraditionalChinese, chrono_tz::Tz::UTC);
        let zh = normalize(&graph, &zh_ctx).unwrap();

        assert_eq!(en, zh);
        let e2 = en.edge("e2").unwrap();
        assert_eq!(LabelContext::default().edge_caption(e2), "3 txs");
        assert_eq!(zh_ctx.edge_caption(en.edge("e1").unwrap()), "1 筆交易 | 03/09 | 125.8 ETH");
    }

    #[test]
    fn missing_designations_still_normalize() {
        let mut graph = small_graph();
        graph.entities.retain(|e| e.id == "cex");
        graph.edges.clear();

        let scene = normalize(&graph, &LabelContext::default()).unwrap();
        assert_eq!(scene.nodes.len(), 1);
        assert!(scene.nodes.iter().all(|n| !n.is_source && !n.is_destination));
    }
}
