//! configuration types for hazatlas

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// main configuration for hazatlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// address to bind the http report server to.
    pub listen_addr: String,

    /// public base url of this instance (used in generated links).
    pub server_url: String,

    /// database configuration.
    pub database: DatabaseConfig,

    /// remote geonode catalog configuration.
    pub geonode: GeonodeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            server_url: "http://127.0.0.1:8080".to_string(),
            database: DatabaseConfig::default(),
            geonode: GeonodeConfig::default(),
        }
    }
}

/// database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// database type: "sqlite" or "postgres".
    pub db_type: String,

    /// database connection string or file path.
    pub connection_string: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: "sqlite".to_string(),
            connection_string: "/var/lib/hazatlas/db.sqlite".to_string(),
        }
    }
}

/// remote geonode catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeonodeConfig {
    /// base url of the geonode instance (no trailing slash).
    pub url: String,

    /// page size used when walking paginated list endpoints.
    pub page_size: u32,

    /// http timeout for catalog requests, in seconds.
    pub timeout_secs: u64,

    /// optional api token sent as a bearer token on catalog requests.
    #[serde(default, skip_serializing)]
    pub api_token: Option<SecretString>,
}

impl Default for GeonodeConfig {
    fn default() -> Self {
        Self {
            url: "https://www.geonode-gfdrrlab.org".to_string(),
            page_size: 50,
            timeout_secs: 30,
            api_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.database.db_type, "sqlite");
        assert_eq!(config.geonode.page_size, 50);
        assert!(config.geonode.api_token.is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let config: Config = toml::from_str(
            r#"
listen_addr = "127.0.0.1:6543"
server_url = "https://hazatlas.example.org"

[database]
db_type = "postgres"
connection_string = "postgres://hazatlas@localhost/hazatlas"

[geonode]
url = "https://geonode.example.org"
page_size = 100
timeout_secs = 10
"#,
        )
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:6543");
        assert_eq!(config.database.db_type, "postgres");
        assert_eq!(config.geonode.url, "https://geonode.example.org");
        assert_eq!(config.geonode.page_size, 100);
        assert_eq!(config.geonode.timeout_secs, 10);
    }
}
