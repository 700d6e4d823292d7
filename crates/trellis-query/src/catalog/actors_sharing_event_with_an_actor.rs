//! Co-participants of an actor's events.

use crate::definition::QueryDefinition;
use crate::filters::UriFilterStyle;

/// The catalog entry for this query.
pub static DEFINITION: QueryDefinition = QueryDefinition {
    title: "Get actors sharing an event with an actor",
    slug: "actors_sharing_event_with_an_actor",
    description: "Lists the actors that appear in events together with the \
                  given actor, ranked by how many events they share.",
    example: "actors_sharing_event_with_an_actor?uris.0=dbpedia:Fiat",
    query_template: "
SELECT (?filterfield AS ?actor) (COUNT(DISTINCT ?event) AS ?shared_events)
WHERE {{
  ?event a sem:Event .
  ?event sem:hasActor {uri_0} .
  ?event sem:hasActor ?filterfield .
  FILTER (?filterfield != {uri_0})
  {uri_filter_block}
}}
GROUP BY ?filterfield
ORDER BY DESC(?shared_events)
OFFSET {offset}
LIMIT {limit}
",
    count_template: "
SELECT (COUNT(DISTINCT ?filterfield) AS ?count)
WHERE {{
  ?event a sem:Event .
  ?event sem:hasActor {uri_0} .
  ?event sem:hasActor ?filterfield .
  FILTER (?filterfield != {uri_0})
  {uri_filter_block}
}}
",
    required_parameters: &["uris"],
    optional_parameters: &["output", "offset", "limit", "filter"],
    headers: &["actor", "shared_events"],
    tabular: true,
    uris_required: 1,
    uri_filter_style: UriFilterStyle::LabelContains,
};
