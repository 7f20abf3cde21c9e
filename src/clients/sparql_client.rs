use super::sparql_structures::SparqlResponse;
use crate::entity::Place;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum SparqlError {
    #[error("Impossible to query: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("bad status: {status}\n{body}")]
    BadStatus { status: StatusCode, body: String },
    #[error("Invalid json: {0}")]
    InvalidJsonError(#[from] serde_json::Error),
}

/// Client for one sparql request, built once with the full query url
pub struct SparqlClient {
    client: reqwest::blocking::Client,
    url: Url,
}

impl SparqlClient {
    pub fn new(url: Url, timeout: Duration, user_agent: &str) -> Result<Self, SparqlError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Run the query and return the whole response body
    ///
    /// A non 2xx status is an error carrying the response body.
    pub fn fetch_raw(&self) -> Result<String, SparqlError> {
        log::debug!("Sparql query: {}", self.url);
        let response = self.client.get(self.url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SparqlError::BadStatus { status, body });
        }

        let body = response.text()?;
        log::trace!("Query response: {:?}", body);
        Ok(body)
    }

    pub fn fetch_places(&self) -> Result<Vec<Place>, SparqlError> {
        decode_places(&self.fetch_raw()?)
    }
}

/// Decode the `results.bindings` of a sparql json response into places, in
/// the order of the response
pub fn decode_places(body: &str) -> Result<Vec<Place>, SparqlError> {
    let response: SparqlResponse = serde_json::from_str(body)?;
    Ok(response
        .results
        .bindings
        .into_iter()
        .map(|b| Place {
            name: b.item_label.value,
            coord: b.coord.value,
        })
        .collect())
}
