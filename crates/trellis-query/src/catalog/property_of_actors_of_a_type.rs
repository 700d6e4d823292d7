//! A chosen property of every actor of a type.
//!
//! Takes two identifier slots: the actor type and the property to read.

use crate::definition::QueryDefinition;
use crate::filters::UriFilterStyle;

/// The catalog entry for this query.
pub static DEFINITION: QueryDefinition = QueryDefinition {
    title: "Get a property of actors of a type",
    slug: "property_of_actors_of_a_type",
    description: "Reads the given property from every actor of the given \
                  type; the free-text filter narrows actors by label.",
    example: "property_of_actors_of_a_type?uris.0=dbo:SoccerPlayer&uris.1=dbo:height",
    query_template: "
SELECT DISTINCT (?filterfield AS ?actor) ?value
WHERE {{
  ?filterfield a sem:Actor .
  ?filterfield rdf:type {uri_0} .
  ?filterfield {uri_1} ?value .
  {uri_filter_block}
}}
ORDER BY ?actor
OFFSET {offset}
LIMIT {limit}
",
    count_template: "
SELECT (COUNT(DISTINCT ?filterfield) AS ?count)
WHERE {{
  ?filterfield a sem:Actor .
  ?filterfield rdf:type {uri_0} .
  ?filterfield {uri_1} ?value .
  {uri_filter_block}
}}
",
    required_parameters: &["uris"],
    optional_parameters: &["output", "offset", "limit", "filter"],
    headers: &["actor", "value"],
    tabular: true,
    uris_required: 2,
    uri_filter_style: UriFilterStyle::LabelContains,
};
