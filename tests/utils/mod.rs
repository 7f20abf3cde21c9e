mod command;
pub mod sparql;

pub use command::run;
pub use sparql::SparqlMock;
