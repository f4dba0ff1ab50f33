pub mod explorer;
pub mod file;
pub mod query;

use async_trait::async_trait;

pub use explorer::ExploreOutcome;
pub use explorer::FlowExplorer;
pub use file::JsonFileGraphService;
pub use query::is_valid_address;
pub use query::prepare_query;

use crate::model::DomainGraph;
use crate::model::GraphQuery;

/// Anything that can answer a flow query between two addresses.
///
/// Implementations report failures as [`crate::error::QueryError`] so callers can tell
/// retryable faults from rejected queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphQueryService: Send + Sync {
    async fn fetch(
        &self,
        query: &GraphQuery,
    ) -> crate::Result<DomainGraph>;
}
