use std::collections::HashMap;

/// Ranked vertices of one connected component. Long links are split into
/// chains of virtual vertices so every link joins adjacent ranks.
#[derive(Debug, Clone)]
pub struct Layering {
    pub layers: Vec<Vec<usize>>,
    // vertex -> real node index, None for virtual vertices
    pub node_of: Vec<Option<usize>>,
    pub rank_of: Vec<usize>,
    pub upper: Vec<Vec<usize>>,
    pub lower: Vec<Vec<usize>>,
}

impl Layering {
    pub fn build(
        members: &[usize],
        ranks: &[usize],
        links: &[(usize, usize)],
    ) -> Self {
        let min_rank = members.iter().map(|&node| ranks[node]).min().unwrap_or(0);
        let local: HashMap<usize, usize> = members.iter().enumerate().map(|(vertex, &node)| (node, vertex)).collect();

        let mut layering = Self {
            layers: Vec::new(),
            node_of: members.iter().map(|&node| Some(node)).collect(),
            rank_of: members.iter().map(|&node| ranks[node] - min_rank).collect(),
            upper: vec![Vec::new(); members.len()],
            lower: vec![Vec::new(); members.len()],
        };

        for &(from, to) in links {
            let (Some(&from), Some(&to)) = (local.get(&from), local.get(&to)) else {
                continue;
            };
            let mut previous = from;
            for rank in layering.rank_of[from] + 1..layering.rank_of[to] {
                let dummy = layering.add_virtual(rank);
                layering.connect(previous, dummy);
                previous = dummy;
            }
            layering.connect(previous, to);
        }

        layering.initial_order();
        layering
    }

    pub fn vertex_count(&self) -> usize {
        self.node_of.len()
    }

    pub fn is_virtual(
        &self,
        vertex: usize,
    ) -> bool {
        self.node_of[vertex].is_none()
    }

    fn add_virtual(
        &mut self,
        rank: usize,
    ) -> usize {
        self.node_of.push(None);
        self.rank_of.push(rank);
        self.upper.push(Vec::new());
        self.lower.push(Vec::new());
        self.node_of.len() - 1
    }

    fn connect(
        &mut self,
        from: usize,
        to: usize,
    ) {
        self.lower[from].push(to);
        self.upper[to].push(from);
    }

    /// Depth-first from the highest-ranked real vertices so chains start out side by side.
    fn initial_order(&mut self) {
        let rank_count = self.rank_of.iter().max().map_or(0, |&max| max + 1);
        self.layers = vec![Vec::new(); rank_count];

        let mut starts: Vec<usize> = (0..self.vertex_count()).filter(|&v| !self.is_virtual(v)).collect();
        starts.sort_by_key(|&v| (self.rank_of[v], v));

        let mut visited = vec![false; self.vertex_count()];
        let mut stack = Vec::new();
        for start in starts {
            stack.push(start);
            while let Some(vertex) = stack.pop() {
                if visited[vertex] {
                    continue;
                }
                visited[vertex] = true;
                self.layers[self.rank_of[vertex]].push(vertex);
                stack.extend(self.lower[vertex].iter().rev().filter(|&&next| !visited[next]));
            }
        }
    }

    /// Index of each vertex within its layer.
    pub fn positions(&self) -> Vec<usize> {
        let mut positions = vec![0; self.vertex_count()];
        for layer in &self.layers {
            for (index, &vertex) in layer.iter().enumerate() {
                positions[vertex] = index;
            }
        }
        positions
    }

    pub fn crossings(&self) -> usize {
        let positions = self.positions();
        let mut total = 0;
        for layer in &self.layers {
            let segments: Vec<(usize, usize)> = layer
                .iter()
                .flat_map(|&v| self.lower[v].iter().map(move |&w| (v, w)))
                .map(|(v, w)| (positions[v], positions[w]))
                .collect();
            for (i, &(a1, b1)) in segments.iter().enumerate() {
                for &(a2, b2) in &segments[i + 1..] {
                    if (a1 < a2 && b1 > b2) || (a1 > a2 && b1 < b2) {
                        total += 1;
                    }
                }
            }
        }
        total
    }

    /// Alternating barycenter sweeps; keeps the ordering with the fewest crossings seen.
    pub fn minimize_crossings(
        &mut self,
        sweeps: usize,
    ) {
        let mut best = self.layers.clone();
        let mut best_crossings = self.crossings();

        for sweep in 0..sweeps {
            if best_crossings == 0 {
                break;
            }

            if sweep % 2 == 0 {
                for rank in 1..self.layers.len() {
                    self.reorder(rank, true);
                }
            } else {
                for rank in (0..self.layers.len().saturating_sub(1)).rev() {
                    self.reorder(rank, false);
                }
            }

            let crossings = self.crossings();
            if crossings < best_crossings {
                best_crossings = crossings;
                best = self.layers.clone();
            }
        }

        self.layers = best;
    }

    fn reorder(
        &mut self,
        rank: usize,
        use_upper: bool,
    ) {
        let positions = self.positions();
        let mut keyed: Vec<(f64, usize, usize)> = self.layers[rank]
            .iter()
            .map(|&vertex| {
                let neighbours = if use_upper { &self.upper[vertex] } else { &self.lower[vertex] };
                let barycenter = if neighbours.is_empty() {
                    positions[vertex] as f64
                } else {
                    neighbours.iter().map(|&n| positions[n] as f64).sum::<f64>() / neighbours.len() as f64
                };
                (barycenter, positions[vertex], vertex)
            })
            .collect();

        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        self.layers[rank] = keyed.into_iter().map(|(_, _, vertex)| vertex).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_links_get_virtual_chains() {
        // 0 -> 1 -> 2 and 0 -> 2 spanning two ranks
        let layering = Layering::build(&[0, 1, 2], &[0, 1, 2], &[(0, 1), (1, 2), (0, 2)]);
        assert_eq!(layering.vertex_count(), 4);
        assert!(layering.is_virtual(3));
        assert_eq!(layering.rank_of[3], 1);
        assert_eq!(layering.layers.iter().map(Vec::len).collect::<Vec<_>>(), vec![1, 2, 1]);
    }

    #[test]
    fn ranks_are_shifted_to_zero_per_component() {
        let layering = Layering::build(&[4, 7], &[0, 0, 0, 0, 3, 0, 0, 4], &[(4, 7)]);
        assert_eq!(layering.rank_of, vec![0, 1]);
        assert_eq!(layering.node_of, vec![Some(4), Some(7)]);
    }

    #[test]
    fn sweeps_remove_a_simple_crossing() {
        // 0 -> 3, 1 -> 2, with layer 1 initially ordered [2, 3] by a misleading start
        let mut layering = Layering::build(&[0, 1, 2, 3], &[0, 0, 1, 1], &[(0, 3), (1, 2)]);
        layering.layers[1] = vec![2, 3];
        assert_eq!(layering.crossings(), 1);

        layering.minimize_crossings(4);
        assert_eq!(layering.crossings(), 0);
    }

    #[test]
    fn empty_component_has_no_layers() {
        let layering = Layering::build(&[], &[], &[]);
        assert!(layering.layers.is_empty());
        assert_eq!(layering.crossings(), 0);
    }
}
