use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use recipehub_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    /// Origins allowed to call the API. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy `DATABASE_URL`
    /// 2. Environment variables (RECIPEHUB__EMAIL__SMTP_PASSWORD, etc.)
    /// 3. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("database.url", "sqlite:users.db")?
            .set_default("database.max_connections", 5)?
            .set_default("email.smtp_host", "smtp.gmail.com")?
            .set_default("email.smtp_port", 587)?
            .set_default("email.smtp_username", "")?
            .set_default("email.smtp_password", "")?
            .set_default("email.from_address", "")?
            .set_default("email.feedback_address", "")?
            .set_default("email.insecure_local_relay", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_owned());

        // The file is optional, defaults and environment are enough to run
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("RECIPEHUB")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_owned());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_owned());
        }
        self.email.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_owned(),
                port: 5000,
            },
            database: DatabaseConfig {
                url: "sqlite:test.db".to_owned(),
                max_connections: 5,
            },
            email: EmailConfig {
                smtp_host: "localhost".to_owned(),
                smtp_port: 1025,
                smtp_username: String::new(),
                smtp_password: String::new(),
                from_address: "noreply@recipehub.localhost".to_owned(),
                feedback_address: "feedback@recipehub.localhost".to_owned(),
                insecure_local_relay: true,
            },
            logging: LoggingConfig {
                level: "info".to_owned(),
                format: LogFormat::Pretty,
            },
            cors: CorsConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = valid_config();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_feedback_address() {
        let mut config = valid_config();
        config.email.feedback_address = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_sender() {
        let mut config = valid_config();
        config.email.from_address = String::new();

        assert!(config.validate().is_err());

        config.email.smtp_username = "sender@recipehub.localhost".to_owned();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_requires_credentials_without_local_relay() {
        let mut config = valid_config();
        config.email.insecure_local_relay = false;

        assert!(config.validate().is_err());

        config.email.smtp_username = "sender@recipehub.localhost".to_owned();
        config.email.smtp_password = "secret".to_owned();
        assert!(config.validate().is_ok());
    }
}
