// Designated entity ids used by the graph query service
pub const SOURCE_ENTITY_ID: &str = "src";
pub const DESTINATION_ENTITY_ID: &str = "dst";

// Risk tier thresholds
pub const HIGH_RISK_THRESHOLD: i64 = 70;
pub const MEDIUM_RISK_THRESHOLD: i64 = 40;
pub const MAX_RISK_SCORE: i64 = 100;

// Node fill colors
pub const NODE_COLOR_ALERT: &str = "#dc2626";
pub const NODE_COLOR_EXCHANGE: &str = "#0ea5e9";
pub const NODE_COLOR_BRIDGE: &str = "#8b5cf6";
pub const NODE_COLOR_CONTRACT: &str = "#f59e0b";
pub const NODE_COLOR_TOKEN: &str = "#10b981";
pub const NODE_COLOR_WARNING: &str = "#f97316";
pub const NODE_COLOR_NEUTRAL: &str = "#3b82f6";

// Edge stroke colors
pub const EDGE_COLOR_TRANSFER: &str = "#94a3b8";
pub const EDGE_COLOR_SWAP: &str = "#8b5cf6";
pub const EDGE_COLOR_BRIDGE: &str = "#06b6d4";
pub const EDGE_COLOR_MINT: &str = "#10b981";
pub const EDGE_COLOR_BURN: &str = "#ef4444";

// Edge stroke width scale
pub const EDGE_WIDTH_PER_TX: f64 = 1.5;
pub const EDGE_WIDTH_MAX: f64 = 5.0;

pub const EDGE_LABEL_SEPARATOR: &str = " | ";
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d";

// Address card rendering
pub const MAX_DISPLAY_TAGS: usize = 3;
pub const SHORT_ADDRESS_PREFIX: usize = 6;
pub const SHORT_ADDRESS_SUFFIX: usize = 4;

// Layout defaults
pub const DEFAULT_NODE_WIDTH: f64 = 280.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 120.0;
pub const DEFAULT_NODE_SEP: f64 = 100.0;
pub const DEFAULT_RANK_SEP: f64 = 150.0;
pub const DEFAULT_EDGE_SEP: f64 = 10.0;
pub const DEFAULT_ORDERING_SWEEPS: usize = 8;

// Query defaults
pub const DEFAULT_QUERY_DEPTH: u32 = 3;
pub const MAX_QUERY_DEPTH: u32 = 5;
pub const DEFAULT_CHAIN: &str = "ethereum";
pub const SUPPORTED_CHAINS: [&str; 3] = ["ethereum", "bsc", "polygon"];
pub const EVM_ADDRESS_PATTERN: &str = r"^0x[a-fA-F0-9]{40}$";

// Fetch retry defaults
pub const DEFAULT_MAX_RETRIES: usize = 3;
pub const DEFAULT_BASE_RETRY_DELAY_MS: u64 = 200;
pub const DEFAULT_MAX_RETRY_DELAY_MS: u64 = 5_000;

// Events outside this target are kept out of the log files
pub const LOG_TARGET: &str = "amlcheck";
pub const DEFAULT_LOG_DIRECTORY: &str = ".logs";
