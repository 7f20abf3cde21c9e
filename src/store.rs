use crate::entity::Destination;
use postgres::NoTls;
use thiserror::Error;

const UPSERT_DESTINATION: &str = r#"
INSERT INTO destinations (name, region, lon, lat) VALUES ($1, $2, $3, $4)
ON CONFLICT (name) DO UPDATE SET region = excluded.region, lon = excluded.lon, lat = excluded.lat
"#;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    PostgresError(#[from] postgres::Error),
    #[error("invalid PGPORT {0:?}")]
    InvalidPort(String),
}

/// Destination of the imported records
pub trait DestinationStore {
    /// Insert the destination, or update the one with the same name
    fn upsert(&mut self, destination: &Destination) -> Result<(), StoreError>;
}

/// Store writing in the `destinations` table, see `sql/destinations.sql`
pub struct PostgresStore {
    client: postgres::Client,
}

impl PostgresStore {
    pub fn connect(config: &postgres::Config) -> Result<Self, StoreError> {
        let client = config.connect(NoTls).map_err(|e| {
            log::error!("error connecting to database: {}", e);
            e
        })?;
        Ok(Self { client })
    }

    /// Connect with the configuration found in the environment
    pub fn connect_from_env() -> Result<Self, StoreError> {
        Self::connect(&config_from_env(|key| std::env::var(key).ok())?)
    }

    pub fn client(&mut self) -> &mut postgres::Client {
        &mut self.client
    }
}

impl DestinationStore for PostgresStore {
    fn upsert(&mut self, destination: &Destination) -> Result<(), StoreError> {
        log::trace!("upserting {:?}", destination);
        self.client.execute(
            UPSERT_DESTINATION,
            &[
                &destination.name,
                &destination.region,
                &destination.longitude,
                &destination.latitude,
            ],
        )?;
        Ok(())
    }
}

/// Build a connection configuration the way libpq does for an empty
/// connection string.
///
/// `DATABASE_URL` wins when it is set, otherwise the `PGHOST`, `PGPORT`,
/// `PGUSER`, `PGPASSWORD` and `PGDATABASE` variables are used.
pub fn config_from_env<F>(lookup: F) -> Result<postgres::Config, StoreError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        return Ok(url.parse::<postgres::Config>()?);
    }

    let mut config = postgres::Config::new();
    config.host(&lookup("PGHOST").unwrap_or_else(|| "localhost".to_owned()));
    if let Some(port) = lookup("PGPORT") {
        let parsed = port.parse().map_err(|_| StoreError::InvalidPort(port.clone()))?;
        config.port(parsed);
    }
    if let Some(user) = lookup("PGUSER").or_else(|| lookup("USER")) {
        config.user(&user);
    }
    if let Some(password) = lookup("PGPASSWORD") {
        config.password(&password);
    }
    if let Some(dbname) = lookup("PGDATABASE") {
        config.dbname(&dbname);
    }
    Ok(config)
}

/// In process store, keeping the destinations in their first insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    destinations: Vec<Destination>,
    upserts: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn get(&self, name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.name == name)
    }

    /// Number of upsert calls received, updates included
    pub fn upserts(&self) -> usize {
        self.upserts
    }
}

impl DestinationStore for MemoryStore {
    fn upsert(&mut self, destination: &Destination) -> Result<(), StoreError> {
        self.upserts += 1;
        match self
            .destinations
            .iter_mut()
            .find(|d| d.name == destination.name)
        {
            Some(existing) => *existing = destination.clone(),
            None => self.destinations.push(destination.clone()),
        }
        Ok(())
    }
}
