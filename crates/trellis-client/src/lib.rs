//! # Trellis Client
//!
//! Query execution for Trellis: submission of built query text to the
//! remote knowledge store with basic-auth credentials, a shared
//! time-expiring response cache, wall-clock timing, response-status
//! classification, tabular flattening, count extraction, and the
//! structurally distinct identifier-lookup path.
//!
//! The model is synchronous and blocking: each invocation performs at most
//! one outbound call (two when a total count is requested) and blocks the
//! invoking thread until it completes or fails, under a bounded request
//! timeout. Concurrency, when present, comes from the hosting layer running
//! invocations on separate threads; the response cache is the one shared
//! resource and is safe for that.
//!
//! ## Example
//!
//! ```no_run
//! use trellis_client::config::{Credentials, EndpointConfig};
//! use trellis_client::engine::Engine;
//! use trellis_query::definition::QueryParameters;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = Engine::new(EndpointConfig::default(), Credentials::from_env()?)?;
//! let params = QueryParameters::with_uri("eso:Renting").page(0, 20);
//! let outcome = engine.run("summary_of_events_with_eso", &params)?;
//! println!("{} results", outcome.count);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod config;
pub mod count;
pub mod engine;
pub mod error;
pub mod executor;
pub mod lookup;
pub mod response;

pub use cache::ResponseCache;
pub use config::{ConfigError, Credentials, EndpointConfig};
pub use count::TotalCount;
pub use engine::{Engine, EngineError, Payload, QueryOutcome};
pub use error::{ClientError, TransportKind};
pub use executor::{Execution, Executor};
pub use response::{RawResult, ResultSet, Row, SparqlResults};
