//! Metadata lookup for a source document.
//!
//! Routed to the store's resource endpoint with the document identifier as
//! a single request parameter; no query text is built and no count exists.

use crate::definition::{LookupAction, LookupDefinition};

/// The catalog entry for this lookup.
pub static DEFINITION: LookupDefinition = LookupDefinition {
    title: "Get document metadata",
    slug: "get_document_metadata",
    description: "Fetches the stored metadata record for a source document \
                  by its identifier.",
    example: "get_document_metadata?uris.0=http://www.bbc.co.uk/news/business-12415617",
    action: LookupAction::Resources,
};
