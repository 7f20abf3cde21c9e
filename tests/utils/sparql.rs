//! A fake sparql endpoint answering the destinations query
use destinations_fetch::config::{Config, DEFAULT_USER_AGENT};
use httpmock::prelude::*;

pub struct SparqlMock {
    pub server: MockServer,
}

impl SparqlMock {
    pub fn start() -> Self {
        Self {
            server: MockServer::start(),
        }
    }

    pub fn endpoint(&self) -> String {
        self.server.url("/sparql")
    }

    pub fn config(&self) -> Config {
        Config {
            endpoint: self.endpoint(),
            ..Default::default()
        }
    }

    /// Answer any query with the given status and body
    pub fn respond(&self, status: u16, body: &str) -> httpmock::Mock<'_> {
        self.server.mock(|when, then| {
            when.method(GET)
                .path("/sparql")
                .query_param("format", "json")
                .query_param_exists("query")
                .header("user-agent", DEFAULT_USER_AGENT);
            then.status(status)
                .header("content-type", "application/sparql-results+json")
                .body(body);
        })
    }
}

/// Sparql json response with one binding per (label, wkt point)
pub fn bindings(places: &[(&str, &str)]) -> String {
    let bindings: Vec<_> = places
        .iter()
        .map(|(label, coord)| {
            serde_json::json!({
                "itemLabel": { "type": "literal", "xml:lang": "hr", "value": label },
                "coord": {
                    "datatype": "http://www.opengis.net/ont/geosparql#wktLiteral",
                    "type": "literal",
                    "value": coord
                }
            })
        })
        .collect();
    serde_json::json!({
        "head": { "vars": ["item", "itemLabel", "type", "typeLabel", "coord"] },
        "results": { "bindings": bindings }
    })
    .to_string()
}
