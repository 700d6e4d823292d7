//! Optional filter fragments composed into query text.
//!
//! Three fragments narrow a query: a date decomposition over the event time,
//! a free-text containment clause, and a label-based containment clause for
//! URI-valued variables. The same fragments are substituted into both the
//! main and the count template so a page and its total always agree.

use crate::error::QueryError;

/// How the uri-label filter clause binds the filtered variable.
///
/// Most queries filter a URI-valued `?filterfield` through its `rdfs:label`;
/// the event summaries bind `?filterfield` to a literal label directly and
/// filter it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UriFilterStyle {
    /// `?filterfield rdfs:label ?_label . ?_label bif:contains "..." .`
    #[default]
    LabelContains,
    /// `?filterfield bif:contains "..." .`
    FieldContains,
}

/// The three optional query fragments derived from one parameter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBlocks {
    /// Date decomposition clause, or empty.
    pub date: String,
    /// Free-text containment clause, or empty.
    pub text: String,
    /// URI-label containment clause, or empty.
    pub uri_label: String,
}

impl FilterBlocks {
    /// Derive all three fragments. Deterministic; the only failure mode is a
    /// malformed date filter.
    pub fn build(
        datefilter: Option<&str>,
        filter: Option<&str>,
        style: UriFilterStyle,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            date: date_filter_block(datefilter)?,
            text: text_filter_block(filter),
            uri_label: uri_filter_block(filter, style),
        })
    }
}

/// Treat `None`, empty, and the literal "none" (any case) as unset.
fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("none"))
}

/// Escape a caller-supplied value for embedding in a quoted literal.
fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Decompose `year[-month[-day]]` into owltime clauses.
///
/// More than three components, or any non-numeric component, is rejected
/// rather than silently truncated.
pub fn date_filter_block(datefilter: Option<&str>) -> Result<String, QueryError> {
    let Some(datefilter) = provided(datefilter) else {
        return Ok(String::new());
    };

    let parts: Vec<&str> = datefilter.split('-').collect();
    let malformed = || QueryError::MalformedDateFilter {
        input: datefilter.to_string(),
    };
    if parts.len() > 3 {
        return Err(malformed());
    }
    for part in &parts {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
    }

    let fields = ["year", "month", "day"];
    let clauses: Vec<String> = parts
        .iter()
        .zip(fields)
        .map(|(part, field)| format!("?d owltime:{field} \"{part}\"^^xsd:int ."))
        .collect();
    Ok(clauses.join(" "))
}

/// Free-text containment clause over the bound `?filterfield` variable.
pub fn text_filter_block(filter: Option<&str>) -> String {
    match provided(filter) {
        Some(filter) => format!("?filterfield bif:contains \"{}\" .", escape_literal(filter)),
        None => String::new(),
    }
}

/// Containment clause for URI-valued variables, shaped by [`UriFilterStyle`].
pub fn uri_filter_block(filter: Option<&str>, style: UriFilterStyle) -> String {
    let Some(filter) = provided(filter) else {
        return String::new();
    };
    let escaped = escape_literal(filter);
    match style {
        UriFilterStyle::LabelContains => format!(
            "?filterfield rdfs:label ?_label . ?_label bif:contains \"{escaped}\" ."
        ),
        UriFilterStyle::FieldContains => format!("?filterfield bif:contains \"{escaped}\" ."),
    }
}
