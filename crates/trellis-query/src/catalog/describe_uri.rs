//! DESCRIBE passthrough for a single resource.
//!
//! The response has no bindings list; the raw structure is handed back to
//! the caller unchanged, so this entry declares no headers.

use crate::definition::QueryDefinition;
use crate::filters::UriFilterStyle;

/// The catalog entry for this query.
pub static DEFINITION: QueryDefinition = QueryDefinition {
    title: "Describe a URI",
    slug: "describe_uri",
    description: "Returns everything the store knows about the given \
                  resource, in the store's own DESCRIBE shape.",
    example: "describe_uri?uris.0=dbpedia:Fiat&output=json",
    query_template: "
DESCRIBE {uri_0}
",
    count_template: "
SELECT (COUNT(*) AS ?count)
WHERE {{
  {uri_0} ?p ?o .
}}
",
    required_parameters: &["uris"],
    optional_parameters: &["output"],
    headers: &[],
    tabular: false,
    uris_required: 1,
    uri_filter_style: UriFilterStyle::LabelContains,
};
