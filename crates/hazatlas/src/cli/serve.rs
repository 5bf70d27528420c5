//! the `serve` subcommand - runs the report server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{Context, Result};
use tokio::net::TcpListener;
use tracing::{debug, info};

use hazatlas_db::HazatlasDb;
use hazatlas_types::Config;

use super::{ensure_sqlite_dir, init_logging, load_config_file, parse_database_url};

/// run the hazatlas report server
#[derive(Args, Debug)]
pub struct ServeCommand {
    /// path to config file (toml format)
    #[arg(short, long, env = "HAZATLAS_CONFIG")]
    config: Option<PathBuf>,

    /// database url (sqlite:// or postgres://)
    #[arg(long, env = "HAZATLAS_DATABASE_URL")]
    database_url: Option<String>,

    /// address to listen on
    #[arg(long, env = "HAZATLAS_LISTEN_ADDR")]
    listen_addr: Option<String>,

    /// public base url of this instance
    #[arg(long, env = "HAZATLAS_SERVER_URL")]
    server_url: Option<String>,

    /// base url of the geonode catalog
    #[arg(long, env = "HAZATLAS_GEONODE_URL")]
    geonode_url: Option<String>,

    /// log level
    #[arg(long, env = "HAZATLAS_LOG_LEVEL")]
    log_level: Option<String>,
}

impl ServeCommand {
    /// convert cli arguments into a config struct, merging with config file
    /// if present.
    ///
    /// priority order: defaults -> config file -> cli flags
    fn into_config(self) -> Result<Config> {
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
        if let Some(listen_addr) = self.listen_addr {
            config.listen_addr = listen_addr;
        }
        if let Some(server_url) = self.server_url {
            config.server_url = server_url;
        }
        if let Some(geonode_url) = self.geonode_url {
            config.geonode.url = geonode_url;
        }

        Ok(config)
    }

    /// run the serve command
    pub async fn run(self) -> Result<()> {
        init_logging(self.log_level.as_deref())?;

        info!("Starting hazatlas...");

        let config = self.into_config()?;
        info!("Database: {}", config.database.connection_string);
        info!("Listen address: {}", config.listen_addr);

        ensure_sqlite_dir(&config)?;

        // initialize database and run migrations
        let db = HazatlasDb::new(&config)
            .await
            .context("failed to initialize database")?;
        info!("Database initialized successfully");

        let addr: SocketAddr = config
            .listen_addr
            .parse()
            .context("invalid listen address")?;

        let app = crate::create_app(db, config);

        info!("Starting HTTP server on {}", addr);
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, app).await.context("server error")?;

        Ok(())
    }
}
