use crate::clients::SparqlClient;
use crate::config::Config;
use crate::entity::{Destination, Place};
use crate::store::DestinationStore;
use crate::{query, wkt};
use anyhow::{Context, Error};
use log::info;
use std::io::Write;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportReport {
    pub upserted: usize,
}

pub struct DestinationImporter {
    pub client: SparqlClient,
    pub config: Config,
}

impl DestinationImporter {
    pub fn new(config: Config) -> Result<Self, Error> {
        let url = query::request_url(&config.endpoint_url()?, &config.query);
        let client = SparqlClient::new(url, config.timeout(), &config.user_agent)
            .context("impossible to create sparql client")?;
        Ok(Self { client, config })
    }

    /// Only run the query, without parsing the response
    pub fn fetch_raw(&self) -> Result<String, Error> {
        Ok(self
            .client
            .fetch_raw()
            .context("impossible to fetch destinations")?)
    }

    /// Fetch the destinations and upsert them one by one
    ///
    /// The first error stops the import, the destinations already upserted are
    /// not rolled back.
    pub fn import(
        &self,
        store: &mut dyn DestinationStore,
        out: &mut dyn Write,
    ) -> Result<ImportReport, Error> {
        info!(
            "importing destinations of {} (version {})",
            self.config.region,
            crate::GIT_VERSION
        );
        let places = self.fetch_places()?;
        let report = self.load(&places, store, out)?;
        info!("{} destinations upserted", report.upserted);
        Ok(report)
    }

    pub fn fetch_places(&self) -> Result<Vec<Place>, Error> {
        let places = self
            .client
            .fetch_places()
            .context("impossible to fetch destinations")?;
        info!("{} places found", places.len());
        Ok(places)
    }

    /// Parse the coordinates of the places and upsert them in order
    pub fn load(
        &self,
        places: &[Place],
        store: &mut dyn DestinationStore,
        out: &mut dyn Write,
    ) -> Result<ImportReport, Error> {
        let mut report = ImportReport::default();
        for place in places {
            let (longitude, latitude) = wkt::parse_point(&place.coord)
                .with_context(|| format!("invalid coordinates for “{}”", place.name))?;
            let destination = Destination {
                name: place.name.clone(),
                region: self.config.region.clone(),
                longitude,
                latitude,
            };
            store
                .upsert(&destination)
                .with_context(|| format!("impossible to upsert “{}”", destination.name))?;
            writeln!(
                out,
                "{} -> lon={:.6} lat={:.6}",
                destination.name, destination.longitude, destination.latitude
            )?;
            report.upserted += 1;
        }
        Ok(report)
    }
}
