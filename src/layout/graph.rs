use std::collections::HashMap;
use std::collections::HashSet;

use petgraph::Graph;
use petgraph::algo::greedy_feedback_arc_set;
use petgraph::prelude::*;
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use tracing::debug;

/// Directed graph of the boxes to place. Node weights are the box ids.
#[derive(Debug, Clone, Default)]
pub struct LayoutGraph {
    graph: Graph<String, ()>,
    node_indices: HashMap<String, NodeIndex>,
}

impl LayoutGraph {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_indices: HashMap::new(),
        }
    }

    pub fn from_parts<'a, N, E>(
        ids: N,
        links: E,
    ) -> Self
    where
        N: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut graph = Self::new();
        for id in ids {
            graph.add_node(id);
        }
        for (from, to) in links {
            graph.add_edge(from, to);
        }
        graph
    }

    /// First occurrence of an id wins; later duplicates map to the same box.
    pub fn add_node(
        &mut self,
        id: &str,
    ) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(id) {
            return idx;
        }

        let idx = self.graph.add_node(id.to_string());
        self.node_indices.insert(id.to_string(), idx);
        idx
    }

    /// Self-loops, parallel duplicates and links to unknown boxes carry no layout information.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
    ) -> bool {
        let (Some(&from_idx), Some(&to_idx)) = (self.node_indices.get(from), self.node_indices.get(to)) else {
            debug!("layout_graph::skip_unknown_endpoint::{}->{}", from, to);
            return false;
        };

        if from_idx == to_idx {
            return false;
        }

        self.graph.update_edge(from_idx, to_idx, ());
        true
    }

    pub fn index_of(
        &self,
        id: &str,
    ) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Links with a greedy feedback arc set reversed, so the result has no cycles.
    pub fn acyclic_links(&self) -> Vec<(usize, usize)> {
        let feedback: HashSet<EdgeIndex> = greedy_feedback_arc_set(&self.graph).map(|edge| edge.id()).collect();

        if !feedback.is_empty() {
            debug!("layout_graph::reversed_feedback_edges::{}", feedback.len());
        }

        let mut seen = HashSet::with_capacity(self.graph.edge_count());
        let mut links = Vec::with_capacity(self.graph.edge_count());
        for edge in self.graph.edge_references() {
            let (from, to) = if feedback.contains(&edge.id()) {
                (edge.target().index(), edge.source().index())
            } else {
                (edge.source().index(), edge.target().index())
            };
            // a reversed edge may now parallel an existing one
            if seen.insert((from, to)) {
                links.push((from, to));
            }
        }
        links
    }

    /// Weakly connected components, each sorted, ordered by their smallest node.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut union_find = UnionFind::<usize>::new(self.graph.node_count());
        for edge in self.graph.edge_references() {
            union_find.union(edge.source().index(), edge.target().index());
        }

        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut components: Vec<Vec<usize>> = Vec::new();
        for node in 0..self.graph.node_count() {
            let root = union_find.find(node);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(node);
        }
        components
    }
}
