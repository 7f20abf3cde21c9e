/// One binding of the SPARQL result, before its coordinates are parsed
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    /// WKT literal, `Point(<lon> <lat>)`
    pub coord: String,
}

/// A destination as it is persisted, `name` being the upsert key
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub name: String,
    pub region: String,
    pub longitude: f64,
    pub latitude: f64,
}
