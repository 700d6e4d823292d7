//! End-to-end engine scenarios against a local mock endpoint.

use mockito::{Matcher, Server, ServerGuard};
use std::time::Duration;
use trellis_client::config::{Credentials, EndpointConfig};
use trellis_client::engine::{Engine, EngineError, Payload};
use trellis_client::error::ClientError;
use trellis_query::definition::QueryParameters;
use trellis_query::error::QueryError;

const EVENTS_BODY: &str = r#"{
    "head": {"vars": ["event", "datetime", "event_label", "event_size"]},
    "results": {"bindings": [
        {
            "event": {"type": "uri", "value": "http://example.org/ev/1"},
            "datetime": {"type": "literal", "value": "2010-05-11"},
            "event_label": {"type": "literal", "value": "renting one"},
            "event_size": {"type": "literal", "value": "12"}
        },
        {
            "event": {"type": "uri", "value": "http://example.org/ev/2"},
            "datetime": {"type": "literal", "value": "2010-05-12"},
            "event_size": {"type": "literal", "value": "7"}
        }
    ]}
}"#;

const COUNT_BODY: &str = r#"{
    "head": {"vars": ["count"]},
    "results": {"bindings": [
        {"count": {"type": "literal", "value": "1217"}}
    ]}
}"#;

const EMPTY_BODY: &str = r#"{"head": {"vars": ["event"]}, "results": {"bindings": []}}"#;

/// The main query text carries "catalog query:" and the count text
/// "catalog counting query:"; the separator may arrive as a space, `+`, or
/// `%20` depending on encoding.
fn main_query_matcher() -> Matcher {
    Matcher::Regex(r"catalog(\+|%20| )query".to_string())
}

fn count_query_matcher() -> Matcher {
    Matcher::Regex(r"catalog(\+|%20| )counting(\+|%20| )query".to_string())
}

fn engine_for(server: &ServerGuard) -> Engine {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let config = EndpointConfig::builder()
        .sparql_url(format!("{}/sparql", server.url()))
        .lookup_url_stub(format!("{}/{{action}}", server.url()))
        .timeout(Duration::from_secs(5))
        .cache_ttl(Duration::from_secs(300))
        .build();
    Engine::new(config, Credentials::new("user", "pass")).unwrap()
}

#[test]
fn event_summary_round_trip_yields_rows_and_count() {
    let mut server = Server::new();
    let main_mock = server
        .mock("GET", "/sparql")
        .match_query(main_query_matcher())
        .with_status(200)
        .with_body(EVENTS_BODY)
        .create();
    let count_mock = server
        .mock("GET", "/sparql")
        .match_query(count_query_matcher())
        .with_status(200)
        .with_body(COUNT_BODY)
        .create();

    let engine = engine_for(&server);
    let params = QueryParameters::with_uri("eso:Renting").page(0, 20);
    let outcome = engine.run("summary_of_events_with_eso", &params).unwrap();

    main_mock.assert();
    count_mock.assert();

    assert_eq!(outcome.count, 1217);
    assert!(outcome.query.contains("domain-ontology#Renting"));
    assert!(outcome.count_time.is_some());

    let Payload::Table(set) = &outcome.payload else {
        panic!("expected tabular payload");
    };
    assert_eq!(set.headers, vec!["event", "datetime", "event_label", "event_size"]);
    assert_eq!(set.rows.len(), 2);
    // Arrival order is preserved; the second binding has no label.
    assert_eq!(
        set.rows[0].values[0],
        Some("http://example.org/ev/1".to_string())
    );
    assert_eq!(set.rows[1].values[2], None);
}

#[test]
fn missing_identifier_reports_required_and_supplied_counts() {
    let server = Server::new();
    let engine = engine_for(&server);

    let err = engine
        .run("summary_of_events_with_eso", &QueryParameters::default())
        .unwrap_err();

    let EngineError::Query(QueryError::InsufficientParameters { required, supplied }) = err else {
        panic!("expected InsufficientParameters, got {err:?}");
    };
    assert_eq!((required, supplied), (1, 0));
}

#[test]
fn paging_beyond_results_is_an_empty_result_not_a_crash() {
    let mut server = Server::new();
    server
        .mock("GET", "/sparql")
        .match_query(main_query_matcher())
        .with_status(200)
        .with_body(EMPTY_BODY)
        .create();

    let engine = engine_for(&server);
    let params = QueryParameters::with_uri("eso:Renting").page(40, 20);
    let err = engine.run("summary_of_events_with_eso", &params).unwrap_err();

    assert!(matches!(err, EngineError::Client(ClientError::EmptyResult)));
}

#[test]
fn offset_ceiling_is_enforced_before_submission() {
    // No mocks mounted: reaching the network would fail the test differently.
    let server = Server::new();
    let engine = engine_for(&server);

    let params = QueryParameters::with_uri("eso:Renting").page(10_000, 20);
    let err = engine.run("summary_of_events_with_eso", &params).unwrap_err();

    assert!(matches!(
        err,
        EngineError::Client(ClientError::OffsetExceeded { offset: 10_000, .. })
    ));
}

#[test]
fn unknown_slug_lists_as_unknown_query() {
    let server = Server::new();
    let engine = engine_for(&server);

    let err = engine
        .run("no_such_query", &QueryParameters::default())
        .unwrap_err();
    let EngineError::UnknownQuery { slug, available } = err else {
        panic!("expected UnknownQuery, got {err:?}");
    };
    assert_eq!(slug, "no_such_query");
    assert!(available.contains(&"summary_of_events_with_eso"));
}

#[test]
fn unknown_prefix_in_identifier_surfaces_from_the_run() {
    let server = Server::new();
    let engine = engine_for(&server);

    let err = engine
        .run(
            "summary_of_events_with_eso",
            &QueryParameters::with_uri("nope:Renting"),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Query(QueryError::UnknownPrefix { .. })
    ));
}

#[test]
fn describe_query_passes_the_raw_structure_through() {
    let mut server = Server::new();
    let body = r#"{"http://dbpedia.org/resource/Fiat": {"rdf:type": ["dbo:Company"]}}"#;
    server
        .mock("GET", "/sparql")
        .match_query(main_query_matcher())
        .with_status(200)
        .with_body(body)
        .create();
    server
        .mock("GET", "/sparql")
        .match_query(count_query_matcher())
        .with_status(200)
        .with_body(COUNT_BODY)
        .create();

    let engine = engine_for(&server);
    let params = QueryParameters::with_uri("dbpedia:Fiat");
    let outcome = engine.run("describe_uri", &params).unwrap();

    let Payload::Raw(value) = &outcome.payload else {
        panic!("expected raw payload");
    };
    let expected: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(value, &expected);
    assert_eq!(outcome.count, 1217);
}

#[test]
fn document_lookup_sends_the_identifier_as_a_single_parameter() {
    let mut server = Server::new();
    let body = r#"{"resource": "http://www.bbc.co.uk/news/business-12415617", "mentions": 4}"#;
    let mock = server
        .mock("GET", "/resources")
        .match_query(Matcher::UrlEncoded(
            "id".to_string(),
            "<http://www.bbc.co.uk/news/business-12415617>".to_string(),
        ))
        .with_status(200)
        .with_body(body)
        .expect(1)
        .create();

    let engine = engine_for(&server);
    let params = QueryParameters::with_uri("http://www.bbc.co.uk/news/business-12415617");
    let outcome = engine.run("get_document_metadata", &params).unwrap();

    mock.assert();
    assert_eq!(outcome.count, 0);
    assert!(outcome.count_time.is_none());
    assert_eq!(
        outcome.query,
        "<http://www.bbc.co.uk/news/business-12415617>"
    );
    let Payload::Raw(value) = &outcome.payload else {
        panic!("expected raw payload");
    };
    assert_eq!(value["mentions"], 4);
}

#[test]
fn lookup_without_an_identifier_is_insufficient_parameters() {
    let server = Server::new();
    let engine = engine_for(&server);

    let err = engine
        .run("get_document_metadata", &QueryParameters::default())
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Query(QueryError::InsufficientParameters {
            required: 1,
            supplied: 0,
        })
    ));
}
