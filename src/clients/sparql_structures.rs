use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SparqlResponse {
    pub results: Results,
}

#[derive(Deserialize, Debug)]
pub struct Results {
    pub bindings: Vec<Binding>,
}

#[derive(Deserialize, Debug)]
pub struct Binding {
    #[serde(rename = "itemLabel")]
    pub item_label: Literal,
    pub coord: Literal,
}

#[derive(Deserialize, Debug)]
pub struct Literal {
    pub value: String,
}
