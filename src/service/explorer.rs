use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use super::GraphQueryService;
use super::query::prepare_query;
use crate::config::Config;
use crate::config::LayoutConfig;
use crate::config::QueryConfig;
use crate::err_with_loc;
use crate::error::QueryError;
use crate::error::anyhow;
use crate::layout::layout_scene;
use crate::model::DomainGraph;
use crate::model::FlowScene;
use crate::model::GraphQuery;
use crate::normalizer::LabelContext;
use crate::normalizer::normalize;
use crate::utils::calculate_backoff_with_jitter;

#[derive(Debug, Clone, PartialEq)]
pub enum ExploreOutcome {
    Rendered(FlowScene),
    /// A newer query was submitted before this one finished.
    Superseded,
}

impl ExploreOutcome {
    pub fn into_scene(self) -> Option<FlowScene> {
        match self {
            ExploreOutcome::Rendered(scene) => Some(scene),
            ExploreOutcome::Superseded => None,
        }
    }
}

/// Runs queries against a [`GraphQueryService`] and turns the answers into laid-out scenes.
///
/// Only the most recent query may render: submitting a new one cancels the pending fetch
/// of the previous one, and results that arrive late are dropped.
pub struct FlowExplorer<S> {
    service: Arc<S>,
    query_config: QueryConfig,
    layout_config: LayoutConfig,
    labels: LabelContext,
    generation: AtomicU64,
    current: Mutex<CancellationToken>,
}

impl<S: GraphQueryService + 'static> FlowExplorer<S> {
    pub fn new(
        service: S,
        query_config: QueryConfig,
        layout_config: LayoutConfig,
        labels: LabelContext,
    ) -> Self {
        Self {
            service: Arc::new(service),
            query_config,
            layout_config,
            labels,
            generation: AtomicU64::new(0),
            current: Mutex::new(CancellationToken::new()),
        }
    }

    pub fn from_config(
        service: S,
        config: &Config,
    ) -> crate::Result<Self> {
        let labels = LabelContext::from_config(&config.labels)?;
        Ok(Self::new(service, config.query.clone(), config.layout.clone(), labels))
    }

    pub fn labels(&self) -> &LabelContext {
        &self.labels
    }

    pub async fn explore(
        &self,
        query: GraphQuery,
    ) -> crate::Result<ExploreOutcome> {
        let query = prepare_query(query, &self.query_config)?;
        let (generation, token) = self.supersede().await;
        info!("explorer::query::{}::src::{}::dst::{}::depth::{}", generation, query.src, query.dst, query.depth);

        let graph = tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("explorer::fetch_cancelled::{}", generation);
                return Ok(ExploreOutcome::Superseded);
            }
            result = self.fetch_with_retry(&query, &token) => result?,
        };
        let Some(graph) = graph else {
            return Ok(ExploreOutcome::Superseded);
        };
        if !self.is_current(generation) {
            debug!("explorer::stale_graph_dropped::{}", generation);
            return Ok(ExploreOutcome::Superseded);
        }

        let labels = self.labels.clone();
        let layout_config = self.layout_config.clone();
        let rendered = tokio::task::spawn_blocking(move || -> crate::Result<FlowScene> {
            let scene = normalize(&graph, &labels)?;
            Ok(layout_scene(scene, &layout_config))
        })
        .await
        .map_err(|e| err_with_loc!(anyhow!("render task failed: {}", e)))?;

        self.settle(generation, rendered)
    }

    /// Drop whatever query is pending without starting a new one.
    pub async fn cancel(&self) {
        let (generation, _) = self.supersede().await;
        debug!("explorer::cancelled_before::{}", generation);
    }

    async fn supersede(&self) -> (u64, CancellationToken) {
        let mut current = self.current.lock().await;
        current.cancel();
        *current = CancellationToken::new();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        (generation, current.clone())
    }

    fn is_current(
        &self,
        generation: u64,
    ) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// A stale query reports `Superseded` even when its render failed.
    fn settle(
        &self,
        generation: u64,
        rendered: crate::Result<FlowScene>,
    ) -> crate::Result<ExploreOutcome> {
        if !self.is_current(generation) {
            debug!("explorer::stale_scene_dropped::{}", generation);
            return Ok(ExploreOutcome::Superseded);
        }
        let scene = rendered?;
        info!("explorer::rendered::{}::nodes::{}::edges::{}", generation, scene.nodes.len(), scene.edges.len());
        Ok(ExploreOutcome::Rendered(scene))
    }

    /// `None` when cancelled while waiting to retry.
    async fn fetch_with_retry(
        &self,
        query: &GraphQuery,
        token: &CancellationToken,
    ) -> crate::Result<Option<DomainGraph>> {
        let mut retry_count = 0;
        loop {
            let error = match self.service.fetch(query).await {
                Ok(graph) => return Ok(Some(graph)),
                Err(e) => e,
            };

            let retryable = error.downcast_ref::<QueryError>().is_some_and(QueryError::is_retryable);
            if !retryable {
                error!("explorer::fetch_failed::not_retryable::error::{:#}", error);
                return Err(error);
            }
            if retry_count >= self.query_config.max_retries {
                error!("explorer::max_retries_reached::{}::error::{:#}", retry_count, error);
                return Err(error);
            }

            let backoff_delay = calculate_backoff_with_jitter(
                retry_count,
                self.query_config.base_retry_delay_ms,
                self.query_config.max_retry_delay_ms,
            );
            retry_count += 1;
            warn!(
                "explorer::retrying_fetch_after_backoff::attempt::{}::delay_ms::{}::error::{:#}",
                retry_count,
                backoff_delay.as_millis(),
                error
            );

            tokio::select! {
                _ = token.cancelled() => return Ok(None),
                _ = tokio::time::sleep(backoff_delay) => {}
            }
        }
    }
}
