//! Catalog, builder, and executor assembled behind one seam.
//!
//! The hosting layer routes a url slug and parsed parameters to
//! [`Engine::run`] and renders the outcome; everything algorithmic lives in
//! the parts the engine composes.

use crate::cache::ResponseCache;
use crate::config::{ConfigError, Credentials, EndpointConfig};
use crate::count;
use crate::error::ClientError;
use crate::executor::Executor;
use crate::lookup;
use crate::response::{to_rows, RawResult, ResultSet};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use trellis_query::builder::QueryBuilder;
use trellis_query::catalog::{Catalog, CatalogEntry};
use trellis_query::definition::{LookupDefinition, QueryDefinition, QueryParameters};
use trellis_query::error::QueryError;
use trellis_query::prefix::PrefixTable;

/// Any failure of a full engine invocation, layered by origin.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The slug is not in the catalog.
    #[error("query '{slug}' does not exist; available queries: {}", .available.join(", "))]
    UnknownQuery {
        /// The unrecognized slug.
        slug: String,
        /// Every slug the catalog serves, in declared order.
        available: Vec<&'static str>,
    },
    /// Construction-side failure (validation, expansion, templating).
    #[error(transparent)]
    Query(#[from] QueryError),
    /// Execution-side failure (pre-flight, transport, upstream, empty).
    #[error(transparent)]
    Client(#[from] ClientError),
    /// Startup configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// What an invocation hands to the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Flattened rows for a tabular query.
    Table(ResultSet),
    /// Raw structure for describe-style and lookup responses.
    Raw(serde_json::Value),
}

/// The complete result of one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    /// The submitted query text (or the lookup identifier), for display and
    /// audit.
    pub query: String,
    /// Rows or raw passthrough.
    pub payload: Payload,
    /// Total result count; 0 for lookups, which have no count concept.
    pub count: u64,
    /// Wall-clock time of the main submission.
    #[serde(skip)]
    pub query_time: Duration,
    /// Wall-clock time of the count submission, when one ran.
    #[serde(skip)]
    pub count_time: Option<Duration>,
    /// Whether the main response came from the cache.
    pub from_cache: bool,
}

/// The assembled query engine.
pub struct Engine {
    catalog: &'static Catalog,
    prefixes: PrefixTable,
    executor: Executor,
}

impl Engine {
    /// Assemble the engine with a fresh response cache sized from the
    /// configuration's TTL.
    pub fn new(config: EndpointConfig, credentials: Credentials) -> Result<Self, ClientError> {
        let cache = Arc::new(ResponseCache::new(config.cache_ttl));
        Self::with_cache(config, credentials, cache)
    }

    /// Assemble the engine around an injected, possibly shared cache.
    pub fn with_cache(
        config: EndpointConfig,
        credentials: Credentials,
        cache: Arc<ResponseCache>,
    ) -> Result<Self, ClientError> {
        let executor = Executor::new(config, credentials, cache)?;
        Ok(Self {
            catalog: Catalog::knowledge_store(),
            prefixes: PrefixTable::knowledge_store(),
            executor,
        })
    }

    /// Assemble the engine from environment credentials and default
    /// endpoints. Missing credentials are fatal here, at startup.
    pub fn from_env() -> Result<Self, EngineError> {
        let credentials = Credentials::from_env()?;
        Ok(Self::new(EndpointConfig::default(), credentials)?)
    }

    /// The catalog this engine serves.
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Run the catalog entry behind `slug` with the given parameters.
    pub fn run(
        &self,
        slug: &str,
        params: &QueryParameters,
    ) -> Result<QueryOutcome, EngineError> {
        let entry = self
            .catalog
            .get(slug)
            .ok_or_else(|| EngineError::UnknownQuery {
                slug: slug.to_string(),
                available: self.catalog.slugs(),
            })?;
        match *entry {
            CatalogEntry::Sparql(def) => self.run_sparql(def, params),
            CatalogEntry::Lookup(def) => self.run_lookup(def, params),
        }
    }

    fn run_sparql(
        &self,
        def: &'static QueryDefinition,
        params: &QueryParameters,
    ) -> Result<QueryOutcome, EngineError> {
        let built = QueryBuilder::new(def, &self.prefixes).build(params)?;
        let execution = self.executor.submit(&built)?;

        let payload = if def.tabular {
            match &execution.raw {
                RawResult::Bindings(results) => Payload::Table(to_rows(results, def.headers)),
                RawResult::Opaque(_) => {
                    return Err(ClientError::InvalidResponse(
                        "tabular query returned no bindings list".to_string(),
                    )
                    .into())
                }
            }
        } else {
            Payload::Raw(raw_to_value(&execution.raw)?)
        };

        let total = count::total_result_count(&self.executor, &built.count_query)?;
        Ok(QueryOutcome {
            query: built.query,
            payload,
            count: total.value,
            query_time: execution.elapsed,
            count_time: Some(total.elapsed),
            from_cache: execution.from_cache,
        })
    }

    fn run_lookup(
        &self,
        def: &'static LookupDefinition,
        params: &QueryParameters,
    ) -> Result<QueryOutcome, EngineError> {
        let raw_uri = params
            .uris
            .first()
            .ok_or(QueryError::InsufficientParameters {
                required: 1,
                supplied: 0,
            })?;
        let resolved = self.prefixes.expand(raw_uri)?;
        let execution = lookup::lookup(&self.executor, def.action, &resolved)?;

        Ok(QueryOutcome {
            query: lookup::clean_resource_identifier(resolved.as_str()),
            payload: Payload::Raw(raw_to_value(&execution.raw)?),
            count: 0,
            query_time: execution.elapsed,
            count_time: None,
            from_cache: execution.from_cache,
        })
    }
}

fn raw_to_value(raw: &RawResult) -> Result<serde_json::Value, ClientError> {
    match raw {
        RawResult::Opaque(value) => Ok(value.clone()),
        RawResult::Bindings(results) => serde_json::to_value(results)
            .map_err(|e| ClientError::InvalidResponse(e.to_string())),
    }
}
