use std::env;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the registration service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    /// `None` when `DB_HOST` is unset; the service then keeps registrations in memory.
    pub database: Option<DatabaseConfig>,
    /// `None` when the sender account is unset; confirmations are then only logged.
    pub mail: Option<MailConfig>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_port("APP_PORT", "3000")?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            database: DatabaseConfig::from_env()?,
            mail: MailConfig::from_env()?,
        })
    }

    pub fn require_database(&self) -> Result<&DatabaseConfig, ConfigError> {
        self.database.as_ref().ok_or(ConfigError::MissingDatabase)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_port(key: &'static str, default: &str) -> Result<u16, ConfigError> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort { key })
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Connection parameters for the MySQL registrations database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DatabaseConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(host) = non_empty_var("DB_HOST") else {
            return Ok(None);
        };

        Ok(Some(Self {
            host,
            port: parse_port("DB_PORT", "3306")?,
            user: env::var("DB_USER").unwrap_or_default(),
            password: env::var("DB_PASSWORD").unwrap_or_default(),
            database: env::var("DB_NAME").unwrap_or_else(|_| "registrations".to_string()),
        }))
    }
}

/// SMTP relay settings plus the administrative copy recipient.
#[derive(Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub admin_recipient: String,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("admin_recipient", &self.admin_recipient)
            .finish()
    }
}

impl MailConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(username) = non_empty_var("EMAIL_USER") else {
            return Ok(None);
        };

        let admin_recipient = non_empty_var("ADMIN_EMAIL").unwrap_or_else(|| username.clone());

        Ok(Some(Self {
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: parse_port("SMTP_PORT", "465")?,
            password: env::var("EMAIL_PASS").unwrap_or_default(),
            username,
            admin_recipient,
        }))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid u16")]
    InvalidPort { key: &'static str },
    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost { source: std::net::AddrParseError },
    #[error("DB_HOST must be set to reach the registrations database")]
    MissingDatabase,
}
