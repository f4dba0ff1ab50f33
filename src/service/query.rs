use std::sync::LazyLock;

use regex::Regex;

use crate::config::QueryConfig;
use crate::constants::DEFAULT_CHAIN;
use crate::constants::EVM_ADDRESS_PATTERN;
use crate::err_with_loc;
use crate::error::QueryError;
use crate::model::Direction;
use crate::model::GraphQuery;

static ADDRESS_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EVM_ADDRESS_PATTERN).ok());

pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_REGEX.as_ref().is_some_and(|regex| regex.is_match(address))
}

/// Check a query before it reaches a service and fill in its defaults.
///
/// A depth of 0 and an empty chain list mean "not given". Chains are trimmed, lowercased
/// and deduplicated in order.
pub fn prepare_query(
    mut query: GraphQuery,
    config: &QueryConfig,
) -> crate::Result<GraphQuery> {
    query.src = query.src.trim().to_string();
    query.dst = query.dst.trim().to_string();

    for (field, address) in [("src", &query.src), ("dst", &query.dst)] {
        if address.is_empty() {
            return Err(err_with_loc!(QueryError::Rejected(format!("{} address is required", field))));
        }
        if !is_valid_address(address) {
            return Err(err_with_loc!(QueryError::Rejected(format!("{} address {} is not a valid address", field, address))));
        }
    }

    if query.depth == 0 {
        query.depth = config.default_depth;
    }
    if query.depth > config.max_depth {
        return Err(err_with_loc!(QueryError::Rejected(format!(
            "depth {} is outside 1..={}",
            query.depth, config.max_depth
        ))));
    }

    let mut chains: Vec<String> = Vec::with_capacity(query.chains.len().max(1));
    for chain in &query.chains {
        let chain = chain.trim().to_lowercase();
        if chain.is_empty() {
            return Err(err_with_loc!(QueryError::Rejected("chain names must not be empty".to_string())));
        }
        if !config.supported_chains.iter().any(|supported| supported.eq_ignore_ascii_case(&chain)) {
            return Err(err_with_loc!(QueryError::Rejected(format!("chain {} is not supported", chain))));
        }
        if !chains.contains(&chain) {
            chains.push(chain);
        }
    }
    if chains.is_empty() {
        chains.push(DEFAULT_CHAIN.to_string());
    }
    query.chains = chains;

    if let Some((from, to)) = query.time_range {
        if from > to {
            return Err(err_with_loc!(QueryError::Rejected(format!("time range starts after it ends: {} > {}", from, to))));
        }
    }

    query.direction = Some(query.direction.unwrap_or(Direction::Both));
    Ok(query)
}
