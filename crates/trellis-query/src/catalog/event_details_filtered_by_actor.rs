//! Full triple detail for events involving an actor.

use crate::definition::QueryDefinition;
use crate::filters::UriFilterStyle;

/// The catalog entry for this query.
pub static DEFINITION: QueryDefinition = QueryDefinition {
    title: "Get event details filtered by actor",
    slug: "event_details_filtered_by_actor",
    description: "Returns every property and value of the events the given \
                  actor participates in, one page of events at a time.",
    example: "event_details_filtered_by_actor?uris.0=dbpedia:Fiat&datefilter=2010-05",
    query_template: "
SELECT ?event ?property ?value
WHERE {{
  {{
    SELECT DISTINCT ?event
    WHERE {{
      ?event a sem:Event .
      ?event sem:hasActor {uri_0} .
      ?event sem:hasTime ?t .
      ?t owltime:inDateTime ?d .
      {date_filter_block}
    }}
    ORDER BY ?event
    OFFSET {offset}
    LIMIT {limit}
  }}
  ?event ?property ?value .
}}
ORDER BY ?event ?property
",
    count_template: "
SELECT (COUNT(DISTINCT ?event) AS ?count)
WHERE {{
  ?event a sem:Event .
  ?event sem:hasActor {uri_0} .
  ?event sem:hasTime ?t .
  ?t owltime:inDateTime ?d .
  {date_filter_block}
}}
",
    required_parameters: &["uris"],
    optional_parameters: &["output", "offset", "limit", "datefilter"],
    headers: &["event", "property", "value"],
    tabular: true,
    uris_required: 1,
    uri_filter_style: UriFilterStyle::LabelContains,
};
