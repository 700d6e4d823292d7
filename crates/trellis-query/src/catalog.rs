//! The fixed catalog of knowledge-store queries.
//!
//! An explicit, statically constructed registry: one module per query,
//! collected in declared order. Lookup is by url slug. Entries are either
//! templated SPARQL queries or identifier lookups against the store's
//! resource endpoints; the two shapes share no templating machinery.

pub mod actors_of_a_type;
pub mod actors_sharing_event_with_an_actor;
pub mod describe_uri;
pub mod event_details_filtered_by_actor;
pub mod get_document_metadata;
pub mod properties_of_a_type;
pub mod property_of_actors_of_a_type;
pub mod summary_of_events_with_actor;
pub mod summary_of_events_with_eso;
pub mod types_of_actors;

use crate::definition::{LookupDefinition, QueryDefinition};
use once_cell::sync::Lazy;

/// One catalog entry: a templated SPARQL query or an identifier lookup.
#[derive(Debug, Clone, Copy)]
pub enum CatalogEntry {
    /// Templated query built and counted through the query builder.
    Sparql(&'static QueryDefinition),
    /// Identifier lookup against the `{action}` endpoint; no templating, no
    /// count concept.
    Lookup(&'static LookupDefinition),
}

impl CatalogEntry {
    /// The url slug the hosting layer routes on.
    pub fn slug(&self) -> &'static str {
        match self {
            CatalogEntry::Sparql(def) => def.slug,
            CatalogEntry::Lookup(def) => def.slug,
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            CatalogEntry::Sparql(def) => def.title,
            CatalogEntry::Lookup(def) => def.title,
        }
    }

    /// One-paragraph description for generated documentation.
    pub fn description(&self) -> &'static str {
        match self {
            CatalogEntry::Sparql(def) => def.description,
            CatalogEntry::Lookup(def) => def.description,
        }
    }

    /// Example invocation for generated documentation.
    pub fn example(&self) -> &'static str {
        match self {
            CatalogEntry::Sparql(def) => def.example,
            CatalogEntry::Lookup(def) => def.example,
        }
    }
}

/// Ordered registry of catalog entries, built once at first use.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

static KNOWLEDGE_STORE: Lazy<Catalog> = Lazy::new(|| Catalog {
    entries: vec![
        CatalogEntry::Sparql(&summary_of_events_with_eso::DEFINITION),
        CatalogEntry::Sparql(&summary_of_events_with_actor::DEFINITION),
        CatalogEntry::Sparql(&actors_of_a_type::DEFINITION),
        CatalogEntry::Sparql(&types_of_actors::DEFINITION),
        CatalogEntry::Sparql(&properties_of_a_type::DEFINITION),
        CatalogEntry::Sparql(&property_of_actors_of_a_type::DEFINITION),
        CatalogEntry::Sparql(&event_details_filtered_by_actor::DEFINITION),
        CatalogEntry::Sparql(&actors_sharing_event_with_an_actor::DEFINITION),
        CatalogEntry::Sparql(&describe_uri::DEFINITION),
        CatalogEntry::Lookup(&get_document_metadata::DEFINITION),
    ],
});

impl Catalog {
    /// The built-in knowledge-store catalog.
    pub fn knowledge_store() -> &'static Catalog {
        &KNOWLEDGE_STORE
    }

    /// Find an entry by url slug.
    pub fn get(&self, slug: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.slug() == slug)
    }

    /// Entries in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Every registered slug, in declared order.
    pub fn slugs(&self) -> Vec<&'static str> {
        self.entries.iter().map(CatalogEntry::slug).collect()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
