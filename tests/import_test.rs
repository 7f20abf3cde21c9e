mod utils;
use destinations_fetch::entity::Destination;
use destinations_fetch::{Config, DestinationImporter, MemoryStore};
use pretty_assertions::assert_eq;
use utils::sparql::bindings;
use utils::SparqlMock;

#[test]
fn import_upserts_bindings_in_order() {
    let sparql = SparqlMock::start();
    let mock = sparql.respond(
        200,
        &bindings(&[
            ("Pula", "Point(13.8481 44.8703)"),
            ("Rovinj", "Point(13.6389 45.0811)"),
        ]),
    );

    let importer = DestinationImporter::new(Config {
        region: "Istria".to_owned(),
        ..sparql.config()
    })
    .unwrap();
    let mut store = MemoryStore::new();
    let mut out = Vec::new();
    let report = importer.import(&mut store, &mut out).unwrap();

    mock.assert();
    assert_eq!(report.upserted, 2);
    assert_eq!(store.upserts(), 2);
    assert_eq!(
        store.destinations(),
        &[
            Destination {
                name: "Pula".to_owned(),
                region: "Istria".to_owned(),
                longitude: 13.8481,
                latitude: 44.8703,
            },
            Destination {
                name: "Rovinj".to_owned(),
                region: "Istria".to_owned(),
                longitude: 13.6389,
                latitude: 45.0811,
            },
        ][..]
    );
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Pula -> lon=13.848100 lat=44.870300\nRovinj -> lon=13.638900 lat=45.081100\n"
    );
}

#[test]
fn bad_status_reports_the_body_and_upserts_nothing() {
    let sparql = SparqlMock::start();
    let mock = sparql.respond(429, "Too Many Requests, slow down");

    let importer = DestinationImporter::new(sparql.config()).unwrap();
    let mut store = MemoryStore::new();
    let mut out = Vec::new();
    let err = importer.import(&mut store, &mut out).unwrap_err();

    mock.assert();
    let message = format!("{:#}", err);
    assert!(message.contains("429"), "{}", message);
    assert!(message.contains("Too Many Requests, slow down"), "{}", message);
    assert_eq!(store.upserts(), 0);
    assert!(out.is_empty());
}

#[test]
fn malformed_json_is_an_error() {
    let sparql = SparqlMock::start();
    sparql.respond(200, "{\"results\": ");

    let importer = DestinationImporter::new(sparql.config()).unwrap();
    let mut store = MemoryStore::new();
    let err = importer.import(&mut store, &mut Vec::new()).unwrap_err();

    assert!(format!("{:#}", err).contains("Invalid json"));
    assert_eq!(store.upserts(), 0);
}

#[test]
fn fetch_raw_returns_the_body_untouched() {
    let sparql = SparqlMock::start();
    let body = bindings(&[("Poreč", "Point(13.5947 45.2269)")]);
    sparql.respond(200, &body);

    let importer = DestinationImporter::new(sparql.config()).unwrap();
    assert_eq!(importer.fetch_raw().unwrap(), body);
}

#[test]
fn slow_endpoint_times_out() {
    let sparql = SparqlMock::start();
    sparql.server.mock(|when, then| {
        when.path("/sparql");
        then.status(200)
            .delay(std::time::Duration::from_secs(5))
            .body(bindings(&[]));
    });

    let importer = DestinationImporter::new(Config {
        timeout_secs: 1,
        ..sparql.config()
    })
    .unwrap();
    let err = importer.fetch_raw().unwrap_err();
    assert!(format!("{:#}", err).contains("Impossible to query"));
}
