//! Errors raised while constructing query text.

use thiserror::Error;

/// Errors from identifier resolution, parameter validation, and template
/// substitution.
///
/// Every variant is distinguishable by kind so a caller can react without
/// inspecting message strings. `TemplateBinding` is an internal invariant
/// violation (a defect in a catalog definition), not a user input error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The identifier used a namespace prefix the prefix table doesn't know.
    #[error("unknown prefix '{prefix}' in identifier '{identifier}'")]
    UnknownPrefix {
        /// The unrecognized prefix.
        prefix: String,
        /// The identifier it appeared in.
        identifier: String,
    },

    /// Fewer identifiers were supplied than the definition requires.
    #[error("insufficient uris supplied: {required} required, {supplied} supplied")]
    InsufficientParameters {
        /// Identifiers the definition requires.
        required: usize,
        /// Identifiers the caller supplied.
        supplied: usize,
    },

    /// The date filter was not of the form `year[-month[-day]]` with numeric
    /// parts.
    #[error("malformed date filter '{input}': expected year[-month[-day]] with numeric parts")]
    MalformedDateFilter {
        /// The rejected filter string.
        input: String,
    },

    /// A template referenced a placeholder outside the known binding set.
    #[error("template references unbound placeholder '{{{name}}}'")]
    TemplateBinding {
        /// The unknown placeholder name.
        name: String,
    },
}
