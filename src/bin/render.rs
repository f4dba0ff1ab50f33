// ─────────────────────────────────────────────────────────────────────────────
//  render: address flow renderer
//
//  Loads a recorded flow graph, runs it through the risk classifier, the
//  normalizer and the layered layout, and prints the laid-out scene as JSON.
//
//  Usage:
//    render --graph demos/demo_graph.json \
//           --src 0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb1 \
//           --dst 0x8ba1f109551bD432803012645Ac136ddd64DBA72 \
//           [--depth 3] [--chains ethereum,bsc] [--locale zh-TW]
// ─────────────────────────────────────────────────────────────────────────────

use std::path::Path;
use std::path::PathBuf;

use amlcheck::config::Config;
use amlcheck::config::load_config;
use amlcheck::error::Result;
use amlcheck::error::anyhow;
use amlcheck::model::GraphQuery;
use amlcheck::normalizer::Locale;
use amlcheck::service::ExploreOutcome;
use amlcheck::service::FlowExplorer;
use amlcheck::service::JsonFileGraphService;
use amlcheck::tracing::setup_tracing;
use clap::Parser;
use tracing::info;

const CONFIG_ENV: &str = "AMLCHECK_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "Config.toml";

#[derive(Parser, Debug)]
#[command(name = "render")]
#[command(version, about = "Render the fund flow between two addresses as a laid-out scene")]
struct Cli {
    /// JSON file holding the recorded flow graph
    #[arg(short, long)]
    graph: PathBuf,

    /// Source address
    #[arg(long)]
    src: String,

    /// Destination address
    #[arg(long)]
    dst: String,

    /// Hops to follow from the source (config default when omitted)
    #[arg(long)]
    depth: Option<u32>,

    /// Comma separated chains, e.g. ethereum,bsc
    #[arg(long, value_delimiter = ',')]
    chains: Vec<String>,

    /// Label locale: en or zh-TW
    #[arg(long)]
    locale: Option<String>,

    /// IANA timezone for edge dates
    #[arg(long)]
    timezone: Option<String>,

    /// Config file; falls back to $AMLCHECK_CONFIG, then ./Config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the scene here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return load_config(path);
    }
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return load_config(DEFAULT_CONFIG_PATH);
    }
    Ok(Config::default())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = resolve_config(cli.config.as_deref())?;
    if let Some(locale) = &cli.locale {
        config.labels.locale = locale.parse::<Locale>()?;
    }
    if let Some(timezone) = cli.timezone {
        config.labels.timezone = timezone;
    }

    let _tracing = setup_tracing("render", &config.logging)?;

    let explorer = FlowExplorer::from_config(JsonFileGraphService::new(&cli.graph), &config)?;

    let mut query = GraphQuery::new(cli.src, cli.dst);
    query.depth = cli.depth.unwrap_or(0);
    query.chains = cli.chains;

    let scene = match explorer.explore(query).await? {
        ExploreOutcome::Rendered(scene) => scene,
        ExploreOutcome::Superseded => return Err(anyhow!("query was superseded before it rendered")),
    };

    let json = serde_json::to_string_pretty(&scene)?;
    match cli.output {
        Some(path) => {
            tokio::fs::write(&path, json).await?;
            info!(target: "amlcheck::render", "render::scene_written::{}::nodes::{}", path.display(), scene.nodes.len());
        },
        None => println!("{}", json),
    }

    Ok(())
}
