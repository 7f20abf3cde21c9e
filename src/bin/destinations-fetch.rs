use anyhow::Context;
use destinations_fetch::{Config, DestinationImporter, MemoryStore, PostgresStore};
use std::io::Write;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "destinations-fetch")]
struct Opt {
    /// Toml file with the run configuration
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Endpoint of the sparql query service
    #[structopt(short, long)]
    endpoint: Option<String>,

    /// Region label stored with every destination
    #[structopt(short, long)]
    region: Option<String>,

    /// Request timeout, in seconds
    #[structopt(short, long)]
    timeout: Option<u64>,

    /// User-Agent sent to the sparql service
    #[structopt(long)]
    user_agent: Option<String>,

    /// Only print the raw json response of the query. Takes precedence over --dry-run
    #[structopt(long)]
    fetch_only: bool,

    /// Parse and print the destinations without writing them to the database
    #[structopt(long)]
    dry_run: bool,
}

impl Opt {
    fn config(&self) -> Result<Config, anyhow::Error> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        Ok(config)
    }
}

fn run(opt: &Opt) -> Result<(), anyhow::Error> {
    let importer = DestinationImporter::new(opt.config()?)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if opt.fetch_only {
        writeln!(out, "{}", importer.fetch_raw()?)?;
        return Ok(());
    }

    // the database is only needed once the query succeeded
    let places = importer.fetch_places()?;
    let report = if opt.dry_run {
        importer.load(&places, &mut MemoryStore::new(), &mut out)?
    } else {
        let mut store =
            PostgresStore::connect_from_env().context("impossible to connect to the database")?;
        importer.load(&places, &mut store, &mut out)?
    };
    log::info!("{} destinations upserted", report.upserted);
    Ok(())
}

fn main() {
    destinations_fetch::log::init();

    let opt = Opt::from_args();
    log::info!("destinations-fetch version {}", destinations_fetch::GIT_VERSION);
    if let Err(e) = run(&opt) {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}
