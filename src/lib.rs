pub mod clients;
pub mod config;
pub mod entity;
pub mod importer;
pub mod log;
pub mod query;
pub mod store;
pub mod wkt;

pub use config::Config;
pub use importer::{DestinationImporter, ImportReport};
pub use store::{DestinationStore, MemoryStore, PostgresStore};

pub const GIT_VERSION: &str =
    git_version::git_version!(args = ["--always", "--dirty"], fallback = "unknown");
