//! Query submission against the remote store.

use crate::cache::ResponseCache;
use crate::config::{Credentials, EndpointConfig};
use crate::error::ClientError;
use crate::response::RawResult;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use trellis_query::builder::BuiltQuery;
use trellis_query::definition::MAX_OFFSET;

/// One completed submission: the raw result plus observability metadata.
///
/// `elapsed` and `from_cache` are metadata only, not part of the functional
/// contract.
#[derive(Debug, Clone)]
pub struct Execution {
    /// The structured response.
    pub raw: RawResult,
    /// Wall-clock time for this submission.
    pub elapsed: Duration,
    /// Whether the response came from the cache without a network call.
    pub from_cache: bool,
}

/// Submits built query text to the remote endpoint.
///
/// Synchronous and blocking, one attempt per submission, no automatic
/// retries. Authenticates with process-level credentials and consults the
/// injected response cache before touching the network.
#[derive(Debug)]
pub struct Executor {
    http: reqwest::blocking::Client,
    config: EndpointConfig,
    credentials: Credentials,
    cache: Arc<ResponseCache>,
}

impl Executor {
    /// An executor over one endpoint configuration and a shared cache.
    pub fn new(
        config: EndpointConfig,
        credentials: Credentials,
        cache: Arc<ResponseCache>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::transport)?;
        Ok(Self {
            http,
            config,
            credentials,
            cache,
        })
    }

    /// The endpoint configuration this executor talks to.
    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Submit a built query and classify the outcome.
    ///
    /// Rejects with `OffsetExceeded` before any network call when the bound
    /// offset reached the paging ceiling. An empty bindings list is
    /// `EmptyResult`; a describe-style response passes through unchanged.
    pub fn submit(&self, built: &BuiltQuery) -> Result<Execution, ClientError> {
        if built.offset >= MAX_OFFSET {
            return Err(ClientError::OffsetExceeded {
                offset: built.offset,
                max: MAX_OFFSET,
            });
        }
        debug!(query = %built.query, "submitting query");

        let execution = self.fetch(&self.config.sparql_url, &[("query", &built.query)])?;
        if execution.raw.has_empty_bindings() {
            return Err(ClientError::EmptyResult);
        }
        Ok(execution)
    }

    /// Cache-aware GET against `url`, with timing and status classification.
    ///
    /// Shared by query submission, count extraction, and identifier lookups.
    pub(crate) fn fetch(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<Execution, ClientError> {
        let payload: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let key = ResponseCache::signature(url, &payload.join("&"), self.credentials.username());

        let started = Instant::now();
        if let Some(raw) = self.cache.get(&key) {
            debug!(url, "response served from cache");
            return Ok(Execution {
                raw,
                elapsed: started.elapsed(),
                from_cache: true,
            });
        }

        let response = self
            .http
            .get(url)
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .query(params)
            .send()
            .map_err(|e| {
                warn!(url, error = %e, "request failed");
                ClientError::transport(e)
            })?;
        let status = response.status();
        let elapsed = started.elapsed();
        debug!(
            url,
            status = status.as_u16(),
            elapsed_secs = elapsed.as_secs_f64(),
            "response received"
        );

        if !status.is_success() {
            return Err(ClientError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(ClientError::transport)?;
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        let raw = RawResult::from_value(value)?;
        self.cache.insert(key, raw.clone());

        Ok(Execution {
            raw,
            elapsed,
            from_cache: false,
        })
    }
}
