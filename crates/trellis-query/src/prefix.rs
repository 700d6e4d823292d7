//! Namespace prefix table and identifier expansion.
//!
//! SPARQL requires absolute URIs wrapped in angle brackets unless a PREFIX
//! declaration covers them. The table here is built once at catalog load and
//! shared read-only; expansion is a pure function of the identifier and the
//! table.

use crate::error::QueryError;
use std::fmt;

/// A bracketed absolute-URI string, ready to splice into query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIri(String);

impl ResolvedIri {
    /// The bracketed form, e.g. `<http://dbpedia.org/ontology/Company>`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedIri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed mapping from short namespace prefix to full URI stem.
///
/// Immutable after construction. Iteration order is declaration order so the
/// rendered `PREFIX` block is stable.
#[derive(Debug, Clone)]
pub struct PrefixTable {
    entries: Vec<(&'static str, &'static str)>,
}

/// The namespaces the knowledge-store catalog templates reference.
const KNOWLEDGE_STORE_PREFIXES: &[(&str, &str)] = &[
    ("dbo", "http://dbpedia.org/ontology/"),
    ("dbpedia", "http://dbpedia.org/resource/"),
    ("dct", "http://purl.org/dc/terms/"),
    ("eso", "http://www.newsreader-project.eu/domain-ontology#"),
    ("framenet", "http://www.newsreader-project.eu/framenet/"),
    ("gaf", "http://groundedannotationframework.org/files/2014/01/"),
    ("owltime", "http://www.w3.org/TR/owl-time#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("sem", "http://semanticweb.cs.vu.nl/2009/11/sem/"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

impl PrefixTable {
    /// The table used by the built-in catalog.
    pub fn knowledge_store() -> Self {
        Self {
            entries: KNOWLEDGE_STORE_PREFIXES.to_vec(),
        }
    }

    /// Build a table from explicit entries.
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }

    /// Look up the URI stem for a prefix.
    pub fn stem(&self, prefix: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, stem)| *stem)
    }

    /// Render the `PREFIX` declaration block prepended to every built query.
    pub fn prefix_block(&self) -> String {
        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|(prefix, stem)| format!("PREFIX {prefix}: <{stem}>"))
            .collect();
        lines.join("\n")
    }

    /// Expand a raw identifier into a bracketed absolute URI.
    ///
    /// - An already-bracketed form passes through unchanged (idempotent).
    /// - An absolute URI (scheme present) is wrapped in angle brackets.
    /// - `prefix:local` is expanded against the table; an unknown prefix is a
    ///   hard error rather than the legacy silent fall-through.
    /// - The documentation sentinels `{uri_0}` / `{uri_1}` pass through
    ///   unexpanded so generated examples can show the placeholder itself.
    pub fn expand(&self, identifier: &str) -> Result<ResolvedIri, QueryError> {
        if identifier.starts_with('{') {
            return Ok(ResolvedIri(identifier.to_string()));
        }
        if identifier.starts_with('<') && identifier.ends_with('>') {
            return Ok(ResolvedIri(identifier.to_string()));
        }
        if identifier.contains("://") {
            return Ok(ResolvedIri(format!("<{identifier}>")));
        }

        let (prefix, local) = identifier.split_once(':').ok_or_else(|| {
            QueryError::UnknownPrefix {
                prefix: identifier.to_string(),
                identifier: identifier.to_string(),
            }
        })?;
        let stem = self.stem(prefix).ok_or_else(|| QueryError::UnknownPrefix {
            prefix: prefix.to_string(),
            identifier: identifier.to_string(),
        })?;
        Ok(ResolvedIri(format!("<{stem}{local}>")))
    }
}
