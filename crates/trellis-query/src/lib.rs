//! # Trellis Query
//!
//! Query catalog and SPARQL text construction for Trellis.
//!
//! This crate is the pure, network-free half of the engine: a fixed catalog
//! of parameterized query definitions, namespace prefix expansion, optional
//! filter fragments, and exact named-placeholder substitution that turns a
//! definition plus caller parameters into final query text together with a
//! parallel count-query text.
//!
//! Execution (submission, caching, response flattening) lives in
//! `trellis-client`.
//!
//! ## Example
//!
//! ```
//! use trellis_query::builder::QueryBuilder;
//! use trellis_query::catalog::{Catalog, CatalogEntry};
//! use trellis_query::definition::QueryParameters;
//! use trellis_query::prefix::PrefixTable;
//!
//! let catalog = Catalog::knowledge_store();
//! let prefixes = PrefixTable::knowledge_store();
//! let Some(CatalogEntry::Sparql(def)) = catalog.get("summary_of_events_with_eso") else {
//!     unreachable!();
//! };
//!
//! let params = QueryParameters::with_uri("eso:Renting").page(0, 20);
//! let built = QueryBuilder::new(def, &prefixes).build(&params).unwrap();
//! assert!(built.query.contains("domain-ontology#Renting"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod catalog;
pub mod definition;
pub mod error;
pub mod filters;
pub mod prefix;
pub mod template;

pub use builder::{BuiltQuery, QueryBuilder};
pub use catalog::{Catalog, CatalogEntry};
pub use definition::{
    LookupAction, LookupDefinition, OutputFormat, QueryDefinition, QueryParameters, MAX_OFFSET,
};
pub use error::QueryError;
pub use filters::{FilterBlocks, UriFilterStyle};
pub use prefix::{PrefixTable, ResolvedIri};
