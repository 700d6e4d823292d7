//! Properties used by instances of a type.

use crate::definition::QueryDefinition;
use crate::filters::UriFilterStyle;

/// The catalog entry for this query.
pub static DEFINITION: QueryDefinition = QueryDefinition {
    title: "Get properties of a type",
    slug: "properties_of_a_type",
    description: "Lists the distinct properties that instances of the given \
                  class carry.",
    example: "properties_of_a_type?uris.0=sem:Event",
    query_template: "
SELECT DISTINCT ?property
WHERE {{
  ?instance rdf:type {uri_0} .
  ?instance ?property ?value .
}}
ORDER BY ?property
OFFSET {offset}
LIMIT {limit}
",
    count_template: "
SELECT (COUNT(DISTINCT ?property) AS ?count)
WHERE {{
  ?instance rdf:type {uri_0} .
  ?instance ?property ?value .
}}
",
    required_parameters: &["uris"],
    optional_parameters: &["output", "offset", "limit"],
    headers: &["property"],
    tabular: true,
    uris_required: 1,
    uri_filter_style: UriFilterStyle::LabelContains,
};
