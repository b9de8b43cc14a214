//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Identity gate configuration.
    pub auth: AuthConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
///
/// Without a URL the server keeps records in process memory.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Identity gate configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret key for verifying bearer tokens.
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_token_expiry")]
    pub token_expiry_secs: u64,
    /// Emails allowed to read and write the ledger.
    #[serde(default)]
    pub authorized_users: Vec<String>,
}

fn default_token_expiry() -> u64 {
    2_592_000 // 30 days
}

/// Builds the layered configuration sources.
fn layered() -> Result<config::Config, config::ConfigError> {
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

    config::Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
        .add_source(
            config::Environment::with_prefix("DUOLEDGER")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("auth.authorized_users")
                .try_parsing(true),
        )
        .build()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        layered()?.try_deserialize()
    }
}

impl DatabaseConfig {
    /// Loads only the `database` section, for tools that need no auth settings.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        #[derive(Deserialize)]
        struct Section {
            #[serde(default)]
            database: DatabaseConfig,
        }

        Ok(layered()?.try_deserialize::<Section>()?.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("DUOLEDGER__AUTH__JWT_SECRET", Some("secret")),
                (
                    "DUOLEDGER__AUTH__AUTHORIZED_USERS",
                    Some("a@example.com,b@example.com"),
                ),
                ("DUOLEDGER__SERVER__PORT", Some("9090")),
                ("DUOLEDGER__DATABASE__URL", None),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.auth.jwt_secret, "secret");
                assert_eq!(
                    config.auth.authorized_users,
                    vec!["a@example.com".to_string(), "b@example.com".to_string()]
                );
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.server.host, "0.0.0.0");
                assert!(config.database.url.is_none());
                assert_eq!(config.database.max_connections, 10);
                assert_eq!(config.auth.token_expiry_secs, 2_592_000);
            },
        );
    }

    #[test]
    fn test_load_requires_jwt_secret() {
        temp_env::with_vars(
            [
                ("DUOLEDGER__AUTH__JWT_SECRET", None::<&str>),
                ("DUOLEDGER__AUTH__AUTHORIZED_USERS", None),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }

    #[test]
    fn test_database_section_loads_without_auth() {
        temp_env::with_vars(
            [
                ("DUOLEDGER__AUTH__JWT_SECRET", None::<&str>),
                (
                    "DUOLEDGER__DATABASE__URL",
                    Some("postgres://localhost/duoledger"),
                ),
                ("DUOLEDGER__DATABASE__MAX_CONNECTIONS", Some("4")),
            ],
            || {
                let database = DatabaseConfig::load().unwrap();
                assert_eq!(
                    database.url.as_deref(),
                    Some("postgres://localhost/duoledger")
                );
                assert_eq!(database.max_connections, 4);
                assert_eq!(database.min_connections, 1);
            },
        );
    }
}
