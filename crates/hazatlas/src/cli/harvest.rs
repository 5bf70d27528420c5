//! the `harvest` subcommand - runs a catalog harvest pass.

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{Context, Result};
use tracing::{debug, info};

use hazatlas_db::HazatlasDb;
use hazatlas_types::Config;

use crate::Harvester;
use crate::catalog::GeonodeClient;

use super::{ensure_sqlite_dir, init_logging, load_config_file, parse_database_url};

/// run a catalog harvest pass
///
/// exits non-zero on harvesting failure; previously committed records
/// are left in place.
#[derive(Args, Debug)]
pub struct HarvestCommand {
    /// path to config file (toml format)
    #[arg(short, long, env = "HAZATLAS_CONFIG")]
    config: Option<PathBuf>,

    /// database url (sqlite:// or postgres://)
    #[arg(long, env = "HAZATLAS_DATABASE_URL")]
    database_url: Option<String>,

    /// base url of the geonode catalog
    #[arg(long, env = "HAZATLAS_GEONODE_URL")]
    geonode_url: Option<String>,

    /// restrict the layer sync to one hazard type mnemonic
    #[arg(long)]
    hazard_type: Option<String>,

    /// re-process all records even if unchanged
    #[arg(long)]
    force: bool,

    /// log level
    #[arg(long, env = "HAZATLAS_LOG_LEVEL")]
    log_level: Option<String>,
}

impl HarvestCommand {
    /// convert cli arguments into a config struct, merging with config file
    /// if present.
    fn into_config(self) -> Result<(Config, Option<String>, bool)> {
        let mut config = match load_config_file(self.config.as_ref())? {
            Some(file_config) => {
                info!("Loaded configuration from file");
                file_config
            }
            None => {
                debug!("No config file found, using defaults");
                Config::default()
            }
        };

        if let Some(db_url) = self.database_url {
            config.database = parse_database_url(&db_url)?;
        }
        if let Some(geonode_url) = self.geonode_url {
            config.geonode.url = geonode_url;
        }

        Ok((config, self.hazard_type, self.force))
    }

    /// run the harvest command
    pub async fn run(self) -> Result<()> {
        init_logging(self.log_level.as_deref())?;

        let (config, hazard_type, force) = self.into_config()?;
        info!("Database: {}", config.database.connection_string);
        info!("Catalog: {}", config.geonode.url);

        ensure_sqlite_dir(&config)?;

        let db = HazatlasDb::new(&config)
            .await
            .context("failed to initialize database")?;

        let client =
            GeonodeClient::new(&config.geonode).context("failed to build catalog client")?;

        let harvester = Harvester::new(client, db);
        harvester
            .execute(hazard_type.as_deref(), force)
            .await
            .context("harvest pass failed")?;

        info!("Harvest pass completed");
        Ok(())
    }
}
