use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_EDGE_SEP;
use crate::constants::DEFAULT_NODE_HEIGHT;
use crate::constants::DEFAULT_NODE_SEP;
use crate::constants::DEFAULT_NODE_WIDTH;
use crate::constants::DEFAULT_ORDERING_SWEEPS;
use crate::constants::DEFAULT_RANK_SEP;
use crate::err_with_loc;
use crate::error::ConfigError;

/// Direction in which ranks advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankDir {
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "RL")]
    RightLeft,
    #[serde(rename = "TB")]
    TopBottom,
    #[serde(rename = "BT")]
    BottomTop,
}

impl RankDir {
    pub fn is_horizontal(self) -> bool {
        matches!(self, RankDir::LeftRight | RankDir::RightLeft)
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, RankDir::RightLeft | RankDir::BottomTop)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    // Gap between neighbouring boxes in the same rank
    pub node_sep: f64,
    // Gap between consecutive ranks
    pub rank_sep: f64,
    // Gap reserved around virtual nodes of long edges
    pub edge_sep: f64,
    pub rank_dir: RankDir,
    pub ordering_sweeps: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: DEFAULT_NODE_WIDTH,
            node_height: DEFAULT_NODE_HEIGHT,
            node_sep: DEFAULT_NODE_SEP,
            rank_sep: DEFAULT_RANK_SEP,
            edge_sep: DEFAULT_EDGE_SEP,
            rank_dir: RankDir::default(),
            ordering_sweeps: DEFAULT_ORDERING_SWEEPS,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> crate::Result<()> {
        let positive = [("node_width", self.node_width), ("node_height", self.node_height)];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(err_with_loc!(ConfigError::InvalidValue(format!("layout.{} must be > 0, got {}", name, value))));
            }
        }

        let non_negative = [("node_sep", self.node_sep), ("rank_sep", self.rank_sep), ("edge_sep", self.edge_sep)];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(err_with_loc!(ConfigError::InvalidValue(format!("layout.{} must be >= 0, got {}", name, value))));
            }
        }

        Ok(())
    }

    /// Box extent along the rank axis.
    pub(crate) fn rank_extent(&self) -> f64 {
        if self.rank_dir.is_horizontal() { self.node_width } else { self.node_height }
    }

    /// Box extent across ranks.
    pub(crate) fn cross_extent(&self) -> f64 {
        if self.rank_dir.is_horizontal() { self.node_height } else { self.node_width }
    }
}
