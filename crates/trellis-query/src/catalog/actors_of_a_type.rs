//! Actors carrying a given type, with labels.

use crate::definition::QueryDefinition;
use crate::filters::UriFilterStyle;

/// The catalog entry for this query.
pub static DEFINITION: QueryDefinition = QueryDefinition {
    title: "Get actors of a type",
    slug: "actors_of_a_type",
    description: "Lists actors typed with the given class; the free-text \
                  filter narrows them by label.",
    example: "actors_of_a_type?uris.0=dbo:AutomobileManufacturer&filter=fiat",
    query_template: "
SELECT ?actor ?actor_label
WHERE {{
  {{
    SELECT DISTINCT (?filterfield AS ?actor)
    WHERE {{
      ?filterfield a sem:Actor .
      ?filterfield rdf:type {uri_0} .
      {uri_filter_block}
    }}
    ORDER BY ?actor
    OFFSET {offset}
    LIMIT {limit}
  }}
  OPTIONAL {{ ?actor rdfs:label ?actor_label . }}
}}
ORDER BY ?actor
",
    count_template: "
SELECT (COUNT(DISTINCT ?filterfield) AS ?count)
WHERE {{
  ?filterfield a sem:Actor .
  ?filterfield rdf:type {uri_0} .
  {uri_filter_block}
}}
",
    required_parameters: &["uris"],
    optional_parameters: &["output", "offset", "limit", "filter"],
    headers: &["actor", "actor_label"],
    tabular: true,
    uris_required: 1,
    uri_filter_style: UriFilterStyle::LabelContains,
};
