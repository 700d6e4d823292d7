//! Frequency table of actor types.

use crate::definition::QueryDefinition;
use crate::filters::UriFilterStyle;

/// The catalog entry for this query.
pub static DEFINITION: QueryDefinition = QueryDefinition {
    title: "Get types of actors",
    slug: "types_of_actors",
    description: "Counts actors per type across the store; the free-text \
                  filter narrows the counted actors by label.",
    example: "types_of_actors?filter=player",
    query_template: "
SELECT ?type (COUNT(DISTINCT ?filterfield) AS ?type_size)
WHERE {{
  ?filterfield a sem:Actor .
  ?filterfield rdf:type ?type .
  {uri_filter_block}
}}
GROUP BY ?type
ORDER BY DESC(?type_size)
OFFSET {offset}
LIMIT {limit}
",
    count_template: "
SELECT (COUNT(DISTINCT ?type) AS ?count)
WHERE {{
  ?filterfield a sem:Actor .
  ?filterfield rdf:type ?type .
  {uri_filter_block}
}}
",
    required_parameters: &[],
    optional_parameters: &["output", "offset", "limit", "filter"],
    headers: &["type", "type_size"],
    tabular: true,
    uris_required: 0,
    uri_filter_style: UriFilterStyle::LabelContains,
};
