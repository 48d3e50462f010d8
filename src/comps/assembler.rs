//! Comp selection: live search results first, synthetic estimates otherwise.

use super::extract::{PatternPriceExtractor, PriceExtractor};
use super::models::{Comp, Query};
use super::synthetic;
use crate::config::Config;
use crate::search::{CseClient, SearchError, SearchHit, WebSearch};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const LIVE_SOURCE: &str = "Web (CSE)";

/// Outcome of a live lookup before any fallback is applied.
#[derive(Debug)]
pub enum LiveLookup {
    /// At least one live comp carries a usable price.
    Comps(Vec<Comp>),
    /// Live lookup disabled, unconfigured, empty, or every price unknown.
    NoComps,
    /// The adapter failed.
    AdapterError(SearchError),
}

impl LiveLookup {
    /// Applies the all-zero rule: a list with no usable price counts as nothing.
    pub fn from_comps(comps: Vec<Comp>) -> Self {
        if comps.iter().any(|c| c.usable_price().is_some()) {
            LiveLookup::Comps(comps)
        } else {
            LiveLookup::NoComps
        }
    }
}

/// Builds comp lists for queries.
pub struct CompAssembler<E: PriceExtractor = PatternPriceExtractor> {
    search: Option<Arc<dyn WebSearch>>,
    extractor: E,
    max_results: usize,
    timeout: Duration,
}

impl CompAssembler {
    /// Creates an assembler from configuration. The live adapter is only
    /// attached when live comps are enabled and both credentials are set.
    pub fn new(config: &Config) -> Self {
        let search: Option<Arc<dyn WebSearch>> = if config.live_lookup_ready() {
            CseClient::from_config(config).map(|c| Arc::new(c) as Arc<dyn WebSearch>)
        } else {
            debug!("Live comps disabled or search credentials missing");
            None
        };

        Self::build(config, search)
    }

    /// Creates an assembler around a provided adapter (for testing).
    pub fn with_search(config: &Config, search: Arc<dyn WebSearch>) -> Self {
        let search = config.enable_live_comps.then_some(search);
        Self::build(config, search)
    }

    /// Creates an assembler that only ever produces synthetic comps.
    pub fn offline() -> Self {
        Self::build(&Config::default(), None)
    }

    fn build(config: &Config, search: Option<Arc<dyn WebSearch>>) -> Self {
        Self {
            search,
            extractor: PatternPriceExtractor,
            max_results: config.max_live_results,
            timeout: Duration::from_secs(config.search_timeout_secs.max(1)),
        }
    }
}

impl<E: PriceExtractor> CompAssembler<E> {
    /// Swaps the price extractor.
    pub fn with_extractor<F: PriceExtractor>(self, extractor: F) -> CompAssembler<F> {
        CompAssembler {
            search: self.search,
            extractor,
            max_results: self.max_results,
            timeout: self.timeout,
        }
    }

    /// Returns true when a live adapter is attached.
    pub fn is_live(&self) -> bool {
        self.search.is_some()
    }

    /// Builds comps for a query. Never fails and never returns an empty list.
    pub async fn build_comps(&self, query: &Query) -> Vec<Comp> {
        match self.lookup_live(query).await {
            LiveLookup::Comps(comps) => {
                info!("Using {} live comps for {}", comps.len(), query.label());
                comps
            }
            LiveLookup::NoComps => {
                debug!("No live comps for {}, using estimates", query.label());
                synthetic::synthesize(query)
            }
            LiveLookup::AdapterError(e) => {
                warn!("Live comp lookup failed ({}), using estimates", e);
                synthetic::synthesize(query)
            }
        }
    }

    /// Runs the live half of the policy without falling back.
    pub async fn lookup_live(&self, query: &Query) -> LiveLookup {
        let Some(search) = &self.search else {
            return LiveLookup::NoComps;
        };

        let phrase = query.search_phrase();
        let hits =
            match tokio::time::timeout(self.timeout, search.search(&phrase, self.max_results))
                .await
            {
                Ok(Ok(hits)) => hits,
                Ok(Err(SearchError::Unavailable)) => return LiveLookup::NoComps,
                Ok(Err(e)) => return LiveLookup::AdapterError(e),
                Err(_) => return LiveLookup::AdapterError(SearchError::Timeout(self.timeout)),
            };

        debug!("Live search returned {} hits", hits.len());
        LiveLookup::from_comps(self.resolve_hits(query, hits))
    }

    /// Turns search hits into comps; a hit with no readable price gets 0.0.
    pub fn resolve_hits(&self, query: &Query, hits: Vec<SearchHit>) -> Vec<Comp> {
        hits.into_iter()
            .map(|hit| {
                let title = hit
                    .title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| format!("{} (similar)", query.label()));

                let price = self
                    .positive_price(&title)
                    .or_else(|| self.positive_price(&hit.snippet))
                    .unwrap_or(0.0);

                Comp::new(LIVE_SOURCE, title, price, hit.url)
            })
            .collect()
    }

    fn positive_price(&self, text: &str) -> Option<f64> {
        self.extractor.extract(text).filter(|p| *p > 0.0)
    }
}
