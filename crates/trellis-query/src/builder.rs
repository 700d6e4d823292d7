//! Binding a catalog definition to a concrete parameter set.

use crate::definition::{QueryDefinition, QueryParameters};
use crate::error::QueryError;
use crate::filters::FilterBlocks;
use crate::prefix::{PrefixTable, ResolvedIri};
use crate::template::{substitute, TemplateBindings};
use tracing::debug;

/// Final executable query text plus its parallel count text.
///
/// Produced once per invocation and consumed exactly once by the executor.
/// Both texts received an identical binding, so the total computed from
/// `count_query` is always consistent with the page returned by `query`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    /// The main query text.
    pub query: String,
    /// The count-variant text.
    pub count_query: String,
    /// The bound paging offset, re-checked by the executor pre-flight.
    pub offset: u64,
}

/// Binds a [`QueryDefinition`] to caller parameters and assembles the text.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'a> {
    definition: &'a QueryDefinition,
    prefixes: &'a PrefixTable,
}

impl<'a> QueryBuilder<'a> {
    /// A builder over one definition and a shared prefix table.
    pub fn new(definition: &'a QueryDefinition, prefixes: &'a PrefixTable) -> Self {
        Self {
            definition,
            prefixes,
        }
    }

    /// Check parameter arity against the definition.
    pub fn validate(&self, params: &QueryParameters) -> Result<(), QueryError> {
        let supplied = params.uris.len();
        let required = self.definition.uris_required;
        if supplied < required {
            return Err(QueryError::InsufficientParameters { required, supplied });
        }
        Ok(())
    }

    /// Assemble the main and count query text from one parameter set.
    pub fn build(&self, params: &QueryParameters) -> Result<BuiltQuery, QueryError> {
        self.validate(params)?;

        let slots = self.resolve_uris(&params.uris)?;
        let blocks = FilterBlocks::build(
            params.datefilter.as_deref(),
            params.filter.as_deref(),
            self.definition.uri_filter_style,
        )?;

        let bindings = TemplateBindings {
            offset: params.offset.to_string(),
            limit: params.limit.to_string(),
            output: params.output.as_str(),
            filter_block: &blocks.text,
            date_filter_block: &blocks.date,
            uri_filter_block: &blocks.uri_label,
            uri_0: slots[0].as_ref().map(ResolvedIri::as_str),
            uri_1: slots[1].as_ref().map(ResolvedIri::as_str),
        };

        let preamble = format!(
            "{}\n{}",
            self.prefixes.prefix_block(),
            self.audit_block(params, &blocks, &slots)
        );
        let query = format!(
            "# Trellis catalog query: {}\n{}{}",
            self.definition.slug,
            preamble,
            substitute(self.definition.query_template, &bindings)?
        );
        let count_query = format!(
            "# Trellis catalog counting query: {}\n{}{}",
            self.definition.slug,
            preamble,
            substitute(self.definition.count_template, &bindings)?
        );
        debug!(slug = self.definition.slug, offset = params.offset, "built query text");

        Ok(BuiltQuery {
            query,
            count_query,
            offset: params.offset,
        })
    }

    /// Expand the supplied identifiers and materialize the fixed two-slot
    /// shape the templates reference.
    fn resolve_uris(&self, uris: &[String]) -> Result<[Option<ResolvedIri>; 2], QueryError> {
        let mut resolved = uris.iter().map(|uri| self.prefixes.expand(uri));
        Ok([resolved.next().transpose()?, resolved.next().transpose()?])
    }

    /// Comment block recording the full binding, kept in the built text for
    /// display and audit.
    fn audit_block(
        &self,
        params: &QueryParameters,
        blocks: &FilterBlocks,
        slots: &[Option<ResolvedIri>; 2],
    ) -> String {
        let slot = |slot: &Option<ResolvedIri>| match slot {
            Some(iri) => iri.as_str().to_string(),
            None => "None".to_string(),
        };
        format!(
            "# All allowed parameters:\n\
             # output: {output}, offset: {offset}, limit: {limit},\n\
             # uri.0: {uri_0}, uri.1: {uri_1}\n\
             # filter_block: {filter}, date_filter_block: {date}\n\
             # uri_filter_block: {uri_filter}\n",
            output = params.output.as_str(),
            offset = params.offset,
            limit = params.limit,
            uri_0 = slot(&slots[0]),
            uri_1 = slot(&slots[1]),
            filter = blocks.text,
            date = blocks.date,
            uri_filter = blocks.uri_label,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::UriFilterStyle;

    static EVENT_SUMMARY: QueryDefinition = QueryDefinition {
        title: "Events of a type",
        slug: "events_of_a_type",
        description: "",
        example: "events_of_a_type?uris.0=eso:Renting",
        query_template: "SELECT ?event\nWHERE {{\n  ?event rdf:type {uri_0} .\n  {uri_filter_block}\n  {date_filter_block}\n}}\nOFFSET {offset}\nLIMIT {limit}\n",
        count_template: "SELECT (COUNT(DISTINCT ?event) AS ?count)\nWHERE {{\n  ?event rdf:type {uri_0} .\n  {uri_filter_block}\n  {date_filter_block}\n}}\n",
        required_parameters: &["uris"],
        optional_parameters: &["output", "offset", "limit", "filter", "datefilter"],
        headers: &["event"],
        tabular: true,
        uris_required: 1,
        uri_filter_style: UriFilterStyle::FieldContains,
    };

    fn builder<'a>(prefixes: &'a PrefixTable) -> QueryBuilder<'a> {
        QueryBuilder::new(&EVENT_SUMMARY, prefixes)
    }

    #[test]
    fn missing_identifier_names_both_counts() {
        let prefixes = PrefixTable::knowledge_store();
        let err = builder(&prefixes)
            .build(&QueryParameters::default())
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::InsufficientParameters {
                required: 1,
                supplied: 0,
            }
        );
        assert!(err.to_string().contains("1 required, 0 supplied"));
    }

    #[test]
    fn build_substitutes_paging_and_identifier() {
        let prefixes = PrefixTable::knowledge_store();
        let params = QueryParameters::with_uri("eso:Renting").page(40, 20);
        let built = builder(&prefixes).build(&params).unwrap();

        assert!(built
            .query
            .contains("<http://www.newsreader-project.eu/domain-ontology#Renting>"));
        assert!(built.query.contains("OFFSET 40"));
        assert!(built.query.contains("LIMIT 20"));
        assert_eq!(built.offset, 40);
    }

    #[test]
    fn built_text_opens_with_prefix_declarations() {
        let prefixes = PrefixTable::knowledge_store();
        let params = QueryParameters::with_uri("eso:Renting");
        let built = builder(&prefixes).build(&params).unwrap();

        assert!(built.query.starts_with("# Trellis catalog query: events_of_a_type"));
        assert!(built.query.contains("PREFIX sem: <http://semanticweb.cs.vu.nl/2009/11/sem/>"));
        assert!(built.query.contains("# All allowed parameters:"));
    }

    #[test]
    fn main_and_count_share_identical_filter_fragments() {
        let prefixes = PrefixTable::knowledge_store();
        let params = QueryParameters::with_uri("eso:Renting")
            .filter("rent")
            .datefilter("2010-05");
        let built = builder(&prefixes).build(&params).unwrap();

        let date_clause = "?d owltime:year \"2010\"^^xsd:int . ?d owltime:month \"05\"^^xsd:int .";
        let uri_clause = "?filterfield bif:contains \"rent\" .";
        assert!(built.query.contains(date_clause));
        assert!(built.count_query.contains(date_clause));
        assert!(built.query.contains(uri_clause));
        assert!(built.count_query.contains(uri_clause));
    }

    #[test]
    fn malformed_date_filter_fails_the_build() {
        let prefixes = PrefixTable::knowledge_store();
        let params = QueryParameters::with_uri("eso:Renting").datefilter("2010-05-12-08");
        assert!(matches!(
            builder(&prefixes).build(&params),
            Err(QueryError::MalformedDateFilter { .. })
        ));
    }
}
