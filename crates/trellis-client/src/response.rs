//! The remote store's structured response and its tabular flattening.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Variable names declared by a SPARQL SELECT response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparqlHead {
    /// Declared variable names, in the store's order.
    #[serde(default)]
    pub vars: Vec<String>,
}

/// One bound value inside a binding row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundValue {
    /// Term kind (`uri`, `literal`, `bnode`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub term_type: Option<String>,
    /// The scalar value.
    pub value: String,
    /// Literal datatype URI, when typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    /// Literal language tag, when tagged.
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// One result row: variable name to bound value.
pub type Binding = HashMap<String, BoundValue>;

/// The bindings list wrapper of a SELECT response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparqlBindings {
    /// Binding rows in arrival order.
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// A complete tabular SPARQL response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparqlResults {
    /// Declared variables.
    #[serde(default = "empty_head")]
    pub head: SparqlHead,
    /// The bindings list.
    pub results: SparqlBindings,
}

fn empty_head() -> SparqlHead {
    SparqlHead { vars: Vec::new() }
}

/// The raw structured response from the remote store.
///
/// Tabular responses carry a bindings list; describe-style responses have no
/// such wrapper and pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResult {
    /// A SELECT response with a bindings list.
    Bindings(SparqlResults),
    /// A describe-style response, passed through as-is.
    Opaque(serde_json::Value),
}

impl RawResult {
    /// Classify a response body by the presence of the bindings wrapper.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ClientError> {
        if value.get("results").is_some() {
            let results: SparqlResults = serde_json::from_value(value)
                .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
            Ok(RawResult::Bindings(results))
        } else {
            Ok(RawResult::Opaque(value))
        }
    }

    /// The binding rows, when this is a tabular result.
    pub fn bindings(&self) -> Option<&[Binding]> {
        match self {
            RawResult::Bindings(results) => Some(&results.results.bindings),
            RawResult::Opaque(_) => None,
        }
    }

    /// Whether this is a tabular result with zero rows.
    pub fn has_empty_bindings(&self) -> bool {
        matches!(self.bindings(), Some(bindings) if bindings.is_empty())
    }
}

/// One flattened row: values in declared header order, absent variables
/// mapped to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Values aligned with the owning [`ResultSet`]'s headers.
    pub values: Vec<Option<String>>,
}

/// Flattened tabular output: declared headers plus rows in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    /// Header names in the definition's declared order.
    pub headers: Vec<String>,
    /// One row per binding, in arrival order.
    pub rows: Vec<Row>,
}

/// Flatten a tabular response against a declared header order.
///
/// Row order matches binding arrival order; this layer never re-sorts.
pub fn to_rows(results: &SparqlResults, headers: &[&str]) -> ResultSet {
    let rows = results
        .results
        .bindings
        .iter()
        .map(|binding| Row {
            values: headers
                .iter()
                .map(|header| binding.get(*header).map(|bound| bound.value.clone()))
                .collect(),
        })
        .collect();
    ResultSet {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn select_body() -> serde_json::Value {
        json!({
            "head": {"vars": ["event", "datetime"]},
            "results": {"bindings": [
                {
                    "event": {"type": "uri", "value": "http://example.org/ev/1"},
                    "datetime": {"type": "literal", "value": "2010-05-12"}
                },
                {
                    "event": {"type": "uri", "value": "http://example.org/ev/2"}
                }
            ]}
        })
    }

    #[test]
    fn select_body_is_classified_as_bindings() {
        let raw = RawResult::from_value(select_body()).unwrap();
        assert_eq!(raw.bindings().map(<[Binding]>::len), Some(2));
        assert!(!raw.has_empty_bindings());
    }

    #[test]
    fn describe_body_passes_through_as_opaque() {
        let body = json!({"http://example.org/ev/1": {"rdf:type": ["sem:Event"]}});
        let raw = RawResult::from_value(body.clone()).unwrap();
        assert_eq!(raw, RawResult::Opaque(body));
        assert!(!raw.has_empty_bindings());
    }

    #[test]
    fn empty_bindings_list_is_detected() {
        let raw = RawResult::from_value(json!({"head": {"vars": []}, "results": {"bindings": []}}))
            .unwrap();
        assert!(raw.has_empty_bindings());
    }

    #[test]
    fn rows_preserve_header_order_and_mark_absent_values() {
        let RawResult::Bindings(results) = RawResult::from_value(select_body()).unwrap() else {
            panic!("expected bindings");
        };
        let set = to_rows(&results, &["datetime", "event"]);

        assert_eq!(set.headers, vec!["datetime", "event"]);
        assert_eq!(set.rows.len(), 2);
        assert_eq!(
            set.rows[0].values,
            vec![
                Some("2010-05-12".to_string()),
                Some("http://example.org/ev/1".to_string()),
            ]
        );
        // Second binding has no datetime; absent maps to None, never a crash.
        assert_eq!(
            set.rows[1].values,
            vec![None, Some("http://example.org/ev/2".to_string())]
        );
    }

    #[test]
    fn typed_literals_deserialize_with_datatype() {
        let bound: BoundValue = serde_json::from_value(json!({
            "type": "literal",
            "value": "12",
            "datatype": "http://www.w3.org/2001/XMLSchema#int"
        }))
        .unwrap();
        assert_eq!(bound.value, "12");
        assert_eq!(
            bound.datatype.as_deref(),
            Some("http://www.w3.org/2001/XMLSchema#int")
        );
    }
}
