//! Named-placeholder substitution for query templates.
//!
//! Templates use `{name}` slots and `{{` / `}}` for literal braces (SPARQL
//! group syntax). The binding set is fixed; a template referencing any other
//! name is a defect in the catalog definition and fails with
//! [`QueryError::TemplateBinding`].

use crate::error::QueryError;

/// The complete binding set a template may reference.
///
/// The two URI slots are always materialized even when a query needs fewer
/// identifiers; a template that references an absent slot fails substitution,
/// which arity validation makes unreachable for well-formed definitions.
#[derive(Debug, Clone)]
pub struct TemplateBindings<'a> {
    /// Paging offset, already bounds-checked by the caller.
    pub offset: String,
    /// Page size.
    pub limit: String,
    /// Requested output format name (surfaced in the audit comment only).
    pub output: &'a str,
    /// Free-text filter clause or empty.
    pub filter_block: &'a str,
    /// Date decomposition clause or empty.
    pub date_filter_block: &'a str,
    /// URI-label filter clause or empty.
    pub uri_filter_block: &'a str,
    /// First resolved identifier slot.
    pub uri_0: Option<&'a str>,
    /// Second resolved identifier slot.
    pub uri_1: Option<&'a str>,
}

impl TemplateBindings<'_> {
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "offset" => Some(&self.offset),
            "limit" => Some(&self.limit),
            "output" => Some(self.output),
            "filter_block" => Some(self.filter_block),
            "date_filter_block" => Some(self.date_filter_block),
            "uri_filter_block" => Some(self.uri_filter_block),
            "uri_0" => self.uri_0,
            "uri_1" => self.uri_1,
            _ => None,
        }
    }
}

/// Substitute every `{name}` slot in `template` from `bindings`.
///
/// Matching is exact on the placeholder name; `{{` and `}}` emit literal
/// braces.
pub fn substitute(template: &str, bindings: &TemplateBindings<'_>) -> Result<String, QueryError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(QueryError::TemplateBinding { name });
                }
                match bindings.lookup(&name) {
                    Some(value) => out.push_str(value),
                    None => return Err(QueryError::TemplateBinding { name }),
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
