//! Errors raised while executing queries against the remote store.

use std::fmt;
use thiserror::Error;

/// Broad classification of a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Could not establish a connection.
    Connect,
    /// The bounded request timeout elapsed.
    Timeout,
    /// Any other protocol-level failure.
    Protocol,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Connect => write!(f, "connect"),
            TransportKind::Timeout => write!(f, "timeout"),
            TransportKind::Protocol => write!(f, "protocol"),
        }
    }
}

/// Errors from submission, classification, and count extraction.
///
/// Every failure is terminal for its invocation; there are no automatic
/// retries. Kinds are distinguishable so a caller can react differently to,
/// say, `EmptyResult` versus a hard transport failure.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The bound offset reached the hard paging ceiling; rejected before any
    /// network call.
    #[error("OFFSET {offset} exceeds {max}, add filter or datefilter to narrow results")]
    OffsetExceeded {
        /// The offset the caller bound.
        offset: u64,
        /// The ceiling it hit.
        max: u64,
    },

    /// Connection, timeout, or protocol failure below the HTTP status level.
    /// The underlying cause is retained for logs only.
    #[error("transport failure ({kind}) talking to the remote store")]
    Transport {
        /// Broad failure classification.
        kind: TransportKind,
        /// Underlying reqwest failure.
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-success status code.
    #[error("remote store response code not OK: {status}")]
    Upstream {
        /// The upstream HTTP status.
        status: u16,
    },

    /// A bindings list came back empty, usually from paging beyond the last
    /// result.
    #[error("result empty, possibly as a result of paging beyond results")]
    EmptyResult,

    /// The response body was not the structured result shape.
    #[error("invalid response from the remote store: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Classify a reqwest failure into a transport error.
    pub(crate) fn transport(source: reqwest::Error) -> Self {
        let kind = if source.is_timeout() {
            TransportKind::Timeout
        } else if source.is_connect() {
            TransportKind::Connect
        } else {
            TransportKind::Protocol
        };
        ClientError::Transport { kind, source }
    }
}
