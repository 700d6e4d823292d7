//! Identifier lookup against the store's resource endpoints.
//!
//! Structurally distinct from the templated queries: the identifier travels
//! as a single `id` request parameter to the `{action}` endpoint, there is
//! no query text to build, and no count concept exists (fixed 0). The
//! executor still provides auth, caching, timing, and classification.

use crate::error::ClientError;
use crate::executor::{Execution, Executor};
use tracing::debug;
use trellis_query::definition::LookupAction;
use trellis_query::prefix::ResolvedIri;

/// Normalize a resource identifier for the lookup endpoints.
///
/// Strips any fragment and guarantees the angle-bracket wrapping the
/// endpoints expect.
pub fn clean_resource_identifier(identifier: &str) -> String {
    let core = identifier.trim_start_matches('<').trim_end_matches('>');
    let core = core.split('#').next().unwrap_or(core);
    format!("<{core}>")
}

/// Fetch the record behind one identifier from the given action endpoint.
pub fn lookup(
    executor: &Executor,
    action: LookupAction,
    resolved: &ResolvedIri,
) -> Result<Execution, ClientError> {
    let id = clean_resource_identifier(resolved.as_str());
    let url = executor.config().lookup_url(action.as_str());
    debug!(action = action.as_str(), id = %id, "submitting identifier lookup");
    executor.fetch(&url, &[("id", &id)])
}
