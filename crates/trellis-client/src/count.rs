//! Total-count extraction over an already-built count query.
//!
//! The text handed in here is fully bound by the query builder; it is
//! treated as a complete, non-re-templated unit. This path exists to reuse
//! the executor's auth, caching, and classification for a scalar result
//! shape instead of a tabular one.

use crate::error::ClientError;
use crate::executor::Executor;
use crate::response::RawResult;
use std::time::Duration;
use tracing::debug;

/// A computed total with its submission timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalCount {
    /// The total result count.
    pub value: u64,
    /// Wall-clock time of the count submission.
    pub elapsed: Duration,
}

/// Execute a built count query and read the single scalar it binds.
///
/// An empty bindings list means zero results, not an error; the tabular
/// path's `EmptyResult` classification deliberately does not apply here.
pub fn total_result_count(
    executor: &Executor,
    count_query: &str,
) -> Result<TotalCount, ClientError> {
    debug!(query = %count_query, "submitting count query");
    let execution = executor.fetch(&executor.config().sparql_url, &[("query", count_query)])?;
    Ok(TotalCount {
        value: parse_count(&execution.raw)?,
        elapsed: execution.elapsed,
    })
}

/// Read the integer bound to the `count` variable, or 0 for no bindings.
fn parse_count(raw: &RawResult) -> Result<u64, ClientError> {
    let bindings = raw.bindings().ok_or_else(|| {
        ClientError::InvalidResponse("count response carried no bindings list".to_string())
    })?;
    let Some(first) = bindings.first() else {
        return Ok(0);
    };
    let bound = first.get("count").ok_or_else(|| {
        ClientError::InvalidResponse("count response did not bind 'count'".to_string())
    })?;
    bound.value.parse::<u64>().map_err(|_| {
        ClientError::InvalidResponse(format!("count value '{}' is not an integer", bound.value))
    })
}
