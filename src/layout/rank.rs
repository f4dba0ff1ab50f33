use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

/// Longest-path layering over acyclic links: every link goes from a lower to a higher rank.
///
/// Sources are then pulled up next to their nearest successor so a wallet that only
/// feeds the final hop does not sit in the first column with a long edge.
pub fn assign_ranks(
    node_count: usize,
    links: &[(usize, usize)],
) -> Vec<usize> {
    let mut successors = vec![Vec::new(); node_count];
    let mut in_degree = vec![0usize; node_count];
    for &(from, to) in links {
        successors[from].push(to);
        in_degree[to] += 1;
    }
    let is_source: Vec<bool> = in_degree.iter().map(|&degree| degree == 0).collect();

    let mut rank = vec![0usize; node_count];
    let mut done = vec![false; node_count];
    let mut ready: BinaryHeap<Reverse<usize>> =
        (0..node_count).filter(|&node| in_degree[node] == 0).map(Reverse).collect();
    let mut processed = 0;

    while processed < node_count {
        let node = match ready.pop() {
            Some(Reverse(node)) => node,
            None => {
                // links were not acyclic after all; release the smallest blocked node
                let Some(node) = (0..node_count).find(|&node| !done[node]) else {
                    break;
                };
                debug!("rank::residual_cycle_released::{}", node);
                node
            },
        };
        if done[node] {
            continue;
        }
        done[node] = true;
        processed += 1;

        for &next in &successors[node] {
            if done[next] {
                continue;
            }
            rank[next] = rank[next].max(rank[node] + 1);
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push(Reverse(next));
            }
        }
    }

    for node in (0..node_count).filter(|&node| is_source[node]) {
        if let Some(nearest) = successors[node].iter().map(|&next| rank[next]).min() {
            rank[node] = nearest.saturating_sub(1);
        }
    }

    rank
}
