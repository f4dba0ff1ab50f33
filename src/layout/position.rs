use super::order::Layering;
use crate::config::LayoutConfig;
use crate::model::Position;

const COORDINATE_PASSES: usize = 8;

/// Cross-axis centers for every vertex of a component, plus the component's extent.
///
/// Each layer is solved as an isotonic regression: vertices are pulled toward the mean
/// of their neighbours in the previous layer while keeping their order and minimum gaps.
pub fn assign_cross_axis(
    layering: &Layering,
    config: &LayoutConfig,
) -> (Vec<f64>, f64) {
    let size = |vertex: usize| if layering.is_virtual(vertex) { 0.0 } else { config.cross_extent() };
    let min_distance = |a: usize, b: usize| {
        let gap = if layering.is_virtual(a) || layering.is_virtual(b) { config.edge_sep } else { config.node_sep };
        size(a) / 2.0 + gap + size(b) / 2.0
    };

    let mut centers = vec![0.0; layering.vertex_count()];
    for layer in &layering.layers {
        let mut cursor = 0.0;
        for (index, &vertex) in layer.iter().enumerate() {
            cursor = if index == 0 { 0.0 } else { cursor + min_distance(layer[index - 1], vertex) };
            centers[vertex] = cursor;
        }
        // center every layer on the axis before balancing
        let half_span = cursor / 2.0;
        for &vertex in layer {
            centers[vertex] -= half_span;
        }
    }

    let rank_count = layering.layers.len();
    for pass in 0..COORDINATE_PASSES {
        let downward = pass % 2 == 0;
        let ranks: Vec<usize> = if downward {
            (1..rank_count).collect()
        } else {
            (0..rank_count.saturating_sub(1)).rev().collect()
        };

        for rank in ranks {
            let layer = &layering.layers[rank];
            if layer.is_empty() {
                continue;
            }

            let mut offsets = Vec::with_capacity(layer.len());
            let mut targets = Vec::with_capacity(layer.len());
            let mut offset = 0.0;
            for (index, &vertex) in layer.iter().enumerate() {
                if index > 0 {
                    offset += min_distance(layer[index - 1], vertex);
                }
                let neighbours = if downward { &layering.upper[vertex] } else { &layering.lower[vertex] };
                let desired = if neighbours.is_empty() {
                    centers[vertex]
                } else {
                    neighbours.iter().map(|&n| centers[n]).sum::<f64>() / neighbours.len() as f64
                };
                offsets.push(offset);
                targets.push(desired - offset);
            }

            for ((&vertex, shifted), offset) in layer.iter().zip(pool_adjacent_violators(&targets)).zip(offsets) {
                centers[vertex] = shifted + offset;
            }
        }
    }

    let real = (0..layering.vertex_count()).filter(|&vertex| !layering.is_virtual(vertex));
    let top = real.clone().map(|vertex| centers[vertex] - size(vertex) / 2.0).fold(f64::INFINITY, f64::min);
    if !top.is_finite() {
        return (centers, 0.0);
    }
    for center in centers.iter_mut() {
        *center -= top;
    }
    let extent = real.map(|vertex| centers[vertex] + size(vertex) / 2.0).fold(0.0, f64::max);

    (centers, extent)
}

/// Least-squares non-decreasing fit of `targets`.
fn pool_adjacent_violators(targets: &[f64]) -> Vec<f64> {
    // (sum, count) per pooled block
    let mut blocks: Vec<(f64, usize)> = Vec::with_capacity(targets.len());
    for &target in targets {
        blocks.push((target, 1));
        while blocks.len() >= 2 {
            let (sum_b, count_b) = blocks[blocks.len() - 1];
            let (sum_a, count_a) = blocks[blocks.len() - 2];
            if sum_a / count_a as f64 <= sum_b / count_b as f64 {
                break;
            }
            blocks.pop();
            let last = blocks.len() - 1;
            blocks[last] = (sum_a + sum_b, count_a + count_b);
        }
    }

    blocks
        .into_iter()
        .flat_map(|(sum, count)| std::iter::repeat_n(sum / count as f64, count))
        .collect()
}

/// Top-left anchor of a box given its rank and cross-axis center.
pub fn anchor(
    rank: usize,
    max_rank: usize,
    cross_center: f64,
    config: &LayoutConfig,
) -> Position {
    let rank = if config.rank_dir.is_reversed() { max_rank - rank } else { rank };
    let rank_center = rank as f64 * (config.rank_extent() + config.rank_sep) + config.rank_extent() / 2.0;

    let (x, y) = if config.rank_dir.is_horizontal() {
        (rank_center, cross_center)
    } else {
        (cross_center, rank_center)
    };

    Position::new(x - config.node_width / 2.0, y - config.node_height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RankDir;

    #[test]
    fn pava_keeps_sorted_input() {
        assert_eq!(pool_adjacent_violators(&[1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn pava_pools_violations() {
        assert_eq!(pool_adjacent_violators(&[3.0, 1.0, 2.0]), vec![2.0, 2.0, 2.0]);
        assert_eq!(pool_adjacent_violators(&[0.0, 4.0, 2.0, 5.0]), vec![0.0, 3.0, 3.0, 5.0]);
        assert!(pool_adjacent_violators(&[]).is_empty());
    }

    #[test]
    fn same_rank_boxes_keep_their_gap() {
        // one parent, three children pulled toward the same center
        let layering = Layering::build(&[0, 1, 2, 3], &[0, 1, 1, 1], &[(0, 1), (0, 2), (0, 3)]);
        let config = LayoutConfig::default();
        let (centers, extent) = assign_cross_axis(&layering, &config);

        let mut children = [centers[1], centers[2], centers[3]];
        children.sort_by(f64::total_cmp);
        for pair in children.windows(2) {
            assert!(pair[1] - pair[0] >= config.node_height + config.node_sep - 1e-9);
        }
        // parent sits on the middle child
        assert!((centers[0] - children[1]).abs() < 1e-9);
        assert!((extent - (3.0 * config.node_height + 2.0 * config.node_sep)).abs() < 1e-9);
    }

    #[test]
    fn anchor_is_top_left_of_box() {
        let config = LayoutConfig::default();
        assert_eq!(anchor(0, 2, 60.0, &config), Position::new(0.0, 0.0));
        assert_eq!(anchor(1, 2, 60.0, &config), Position::new(430.0, 0.0));

        let rtl = LayoutConfig {
            rank_dir: RankDir::RightLeft,
            ..LayoutConfig::default()
        };
        assert_eq!(anchor(0, 2, 60.0, &rtl), Position::new(860.0, 0.0));

        let ttb = LayoutConfig {
            rank_dir: RankDir::TopBottom,
            ..LayoutConfig::default()
        };
        assert_eq!(anchor(1, 1, 140.0, &ttb), Position::new(0.0, 270.0));
    }
}
