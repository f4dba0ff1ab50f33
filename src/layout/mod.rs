pub mod graph;
pub mod order;
pub mod position;
pub mod rank;

use tracing::debug;
use tracing::instrument;

pub use graph::LayoutGraph;

use crate::config::LayoutConfig;
use crate::model::FlowScene;
use crate::model::Position;
use crate::model::PresentationEdge;
use crate::model::PresentationNode;
use order::Layering;

/// Assign a top-left position to every node with a left-to-right (by default) layered layout.
///
/// Only `position` changes and the output keeps the input order. Incoming positions are
/// ignored, so the same nodes, edges and config always give the same result.
#[instrument(level = "debug", skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
pub fn layout(
    nodes: Vec<PresentationNode>,
    edges: &[PresentationEdge],
    config: &LayoutConfig,
) -> Vec<PresentationNode> {
    let graph = LayoutGraph::from_parts(
        nodes.iter().map(|node| node.id.as_str()),
        edges.iter().map(|edge| (edge.source.as_str(), edge.target.as_str())),
    );
    let positions = compute_positions(&graph, config);

    nodes
        .into_iter()
        .map(|mut node| {
            if let Some(idx) = graph.index_of(&node.id) {
                node.position = positions[idx.index()];
            }
            node
        })
        .collect()
}

pub fn layout_scene(
    scene: FlowScene,
    config: &LayoutConfig,
) -> FlowScene {
    let FlowScene { nodes, edges } = scene;
    let nodes = layout(nodes, &edges, config);
    FlowScene { nodes, edges }
}

/// Positions indexed by layout graph node.
pub fn compute_positions(
    graph: &LayoutGraph,
    config: &LayoutConfig,
) -> Vec<Position> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Vec::new();
    }

    let links = graph.acyclic_links();
    let ranks = rank::assign_ranks(node_count, &links);

    let mut placed: Vec<(usize, f64)> = vec![(0, 0.0); node_count];
    let mut cross_offset = 0.0;
    let mut max_rank = 0;

    let components = graph.components();
    for component in &components {
        let mut layering = Layering::build(component, &ranks, &links);
        layering.minimize_crossings(config.ordering_sweeps);
        let (cross, extent) = position::assign_cross_axis(&layering, config);

        for (vertex, node) in layering.node_of.iter().enumerate() {
            if let Some(node) = *node {
                placed[node] = (layering.rank_of[vertex], cross[vertex] + cross_offset);
                max_rank = max_rank.max(layering.rank_of[vertex]);
            }
        }

        cross_offset += extent + config.node_sep;
    }

    debug!("layout::placed::nodes::{}::components::{}::ranks::{}", node_count, components.len(), max_rank + 1);

    placed
        .into_iter()
        .map(|(rank, cross)| position::anchor(rank, max_rank, cross, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(
        ids: &[&str],
        links: &[(&str, &str)],
        config: &LayoutConfig,
    ) -> Vec<Position> {
        let graph = LayoutGraph::from_parts(ids.iter().copied(), links.iter().copied());
        compute_positions(&graph, config)
    }

    #[test]
    fn empty_graph_has_no_positions() {
        assert!(positions(&[], &[], &LayoutConfig::default()).is_empty());
    }

    #[test]
    fn single_node_sits_at_origin() {
        assert_eq!(positions(&["a"], &[], &LayoutConfig::default()), vec![Position::new(0.0, 0.0)]);
    }

    #[test]
    fn chain_advances_one_rank_step_per_hop() {
        let config = LayoutConfig::default();
        let placed = positions(&["a", "b", "c"], &[("a", "b"), ("b", "c")], &config);
        let step = config.node_width + config.rank_sep;
        assert_eq!(placed[0].x, 0.0);
        assert_eq!(placed[1].x, step);
        assert_eq!(placed[2].x, 2.0 * step);
        assert!(placed.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn components_are_stacked_without_overlap() {
        let config = LayoutConfig::default();
        let placed = positions(&["a", "b", "x", "y"], &[("a", "b"), ("x", "y")], &config);
        assert_eq!(placed[0].y, 0.0);
        assert_eq!(placed[2].y, config.node_height + config.node_sep);
        assert_eq!(placed[2].x, 0.0);
    }

    #[test]
    fn cycle_gets_positions() {
        let placed = positions(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")], &LayoutConfig::default());
        assert_eq!(placed.len(), 3);
        assert!(placed.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
