//! Events involving a specific actor.

use crate::definition::QueryDefinition;
use crate::filters::UriFilterStyle;

/// The catalog entry for this query.
pub static DEFINITION: QueryDefinition = QueryDefinition {
    title: "Get events with a specific actor",
    slug: "summary_of_events_with_actor",
    description: "Summarises events in which the given actor participates, \
                  with their date, label, and triple count.",
    example: "summary_of_events_with_actor?uris.0=dbpedia:Fiat",
    query_template: "
SELECT ?event (COUNT(*) AS ?event_size) ?datetime (?filterfield AS ?event_label)
WHERE {{
  {{
    SELECT DISTINCT ?event ?datetime ?filterfield
    WHERE {{
      ?event a sem:Event .
      ?event rdfs:label ?filterfield .
      ?event sem:hasActor {uri_0} .
      {uri_filter_block}
      ?event sem:hasTime ?t .
      ?t owltime:inDateTime ?d .
      {date_filter_block}
      ?d rdfs:label ?datetime .
    }}
    ORDER BY ?datetime
    OFFSET {offset}
    LIMIT {limit}
  }}
  ?event ?p ?o .
}}
GROUP BY ?event ?datetime ?filterfield
ORDER BY ?datetime
",
    count_template: "
SELECT (COUNT(DISTINCT ?event) AS ?count)
WHERE {{
  ?event a sem:Event .
  ?event rdfs:label ?filterfield .
  ?event sem:hasActor {uri_0} .
  {uri_filter_block}
  ?event sem:hasTime ?t .
  ?t owltime:inDateTime ?d .
  {date_filter_block}
  ?d rdfs:label ?datetime .
}}
",
    required_parameters: &["uris"],
    optional_parameters: &["output", "offset", "limit", "filter", "datefilter"],
    headers: &["event", "datetime", "event_label", "event_size"],
    tabular: true,
    uris_required: 1,
    uri_filter_style: UriFilterStyle::FieldContains,
};
