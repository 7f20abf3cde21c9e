use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://query.wikidata.org/sparql";

/// Towns (Q15105893) and municipalities (Q57058) located in Istria County (Q58268)
pub const DEFAULT_QUERY: &str = r#"
SELECT ?item ?itemLabel ?type ?typeLabel ?coord WHERE {
  VALUES ?type { wd:Q15105893 wd:Q57058 }  # towns + municipalities
  ?item wdt:P31 ?type;
        wdt:P131 wd:Q58268;
        wdt:P625 ?coord.
  SERVICE wikibase:label { bd:serviceParam wikibase:language "hr,en". }
}
ORDER BY ?typeLabel ?itemLabel
"#;

/// Build the GET url of a sparql query, asking for a json result
///
/// Query parameters already present on the endpoint are kept.
pub fn request_url(endpoint: &Url, query: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("format", "json")
        .append_pair("query", query);
    url
}
