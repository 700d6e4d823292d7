//! Catalog entry definitions and per-invocation parameters.

use crate::filters::UriFilterStyle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard paging ceiling, enforced before submission regardless of the remote
/// store's own limits.
pub const MAX_OFFSET: u64 = 10_000;

/// Output format requested by the caller.
///
/// The engine itself only surfaces this in the built query's audit comment;
/// rendering belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raw rows plus count, for API consumers.
    Json,
    /// Tabular rendering by the presentation layer.
    #[default]
    Html,
    /// Tabular download; only valid for tabular results.
    Csv,
}

/// Error parsing an output format name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown output format '{0}'; expected json, html, or csv")]
pub struct UnknownOutputFormat(pub String);

impl OutputFormat {
    /// The lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
            OutputFormat::Csv => "csv",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = UnknownOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(UnknownOutputFormat(other.to_string())),
        }
    }
}

/// Action segment of the identifier-lookup endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupAction {
    /// Document/resource metadata.
    Resources,
    /// Mention records for a resource.
    Mentions,
    /// Stored source files.
    Files,
}

impl LookupAction {
    /// The URL path segment for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupAction::Resources => "resources",
            LookupAction::Mentions => "mentions",
            LookupAction::Files => "files",
        }
    }
}

/// Static description of one templated catalog query.
///
/// One instance exists per catalog entry, constructed at process start and
/// read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct QueryDefinition {
    /// Human-readable title.
    pub title: &'static str,
    /// URL slug the hosting layer routes on.
    pub slug: &'static str,
    /// One-paragraph description for generated documentation.
    pub description: &'static str,
    /// Example invocation query string for generated documentation.
    pub example: &'static str,
    /// Main template text with named placeholders.
    pub query_template: &'static str,
    /// Count template text; receives the identical binding as the main text.
    pub count_template: &'static str,
    /// Parameter names the caller must supply.
    pub required_parameters: &'static [&'static str],
    /// Parameter names the caller may supply.
    pub optional_parameters: &'static [&'static str],
    /// Output headers in declared order.
    pub headers: &'static [&'static str],
    /// Whether the response carries a bindings list to flatten into rows.
    pub tabular: bool,
    /// How many identifier arguments the templates reference.
    pub uris_required: usize,
    /// Shape of the uri filter clause for this query.
    pub uri_filter_style: UriFilterStyle,
}

/// Static description of one identifier-lookup catalog entry.
///
/// Lookups carry no template and no count concept; they exist in the catalog
/// so the hosting layer can route and document them alongside the templated
/// queries.
#[derive(Debug, Clone)]
pub struct LookupDefinition {
    /// Human-readable title.
    pub title: &'static str,
    /// URL slug the hosting layer routes on.
    pub slug: &'static str,
    /// One-paragraph description for generated documentation.
    pub description: &'static str,
    /// Example invocation query string for generated documentation.
    pub example: &'static str,
    /// Endpoint action segment.
    pub action: LookupAction,
}

/// Caller-supplied parameters for one invocation.
///
/// Immutable after validation; constructed fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Paging offset; must stay below [`MAX_OFFSET`].
    #[serde(default)]
    pub offset: u64,
    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Requested output format.
    #[serde(default)]
    pub output: OutputFormat,
    /// Free-text filter; `None` or "none" leaves the filter clauses empty.
    #[serde(default)]
    pub filter: Option<String>,
    /// Date filter of the form `year[-month[-day]]`.
    #[serde(default)]
    pub datefilter: Option<String>,
    /// Raw identifier strings, in caller order.
    #[serde(default)]
    pub uris: Vec<String>,
}

fn default_limit() -> u64 {
    100
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
            output: OutputFormat::default(),
            filter: None,
            datefilter: None,
            uris: Vec::new(),
        }
    }
}

impl QueryParameters {
    /// Parameters carrying a single identifier, the common case.
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            uris: vec![uri.into()],
            ..Self::default()
        }
    }

    /// Set the paging window.
    pub fn page(mut self, offset: u64, limit: u64) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }

    /// Set the free-text filter.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the date filter.
    pub fn datefilter(mut self, datefilter: impl Into<String>) -> Self {
        self.datefilter = Some(datefilter.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn parameters_deserialize_with_defaults() {
        let params: QueryParameters = serde_json::from_str("{}").unwrap();
        assert_eq!(params.offset, 0);
        assert_eq!(params.limit, 100);
        assert_eq!(params.output, OutputFormat::Html);
        assert!(params.uris.is_empty());
    }

    #[test]
    fn builder_style_setters_compose() {
        let params = QueryParameters::with_uri("eso:Renting")
            .page(20, 20)
            .datefilter("2010");
        assert_eq!(params.uris, vec!["eso:Renting"]);
        assert_eq!(params.offset, 20);
        assert_eq!(params.datefilter.as_deref(), Some("2010"));
    }
}
