use crate::trust::credibility::{CREDIBILITY_CEILING, CREDIBILITY_FLOOR};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Fallback credibility applied to sources missing from the registry.
pub const DEFAULT_SOURCE_CREDIBILITY: u8 = 70;

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringConfig::from_env()?,
        })
    }
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where source credibility comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    /// CSV file with `source,credibility` rows. Without it every source gets
    /// `default_credibility`.
    pub credibility_registry: Option<PathBuf>,
    pub default_credibility: u8,
}

impl ScoringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let credibility_registry = env::var("TRUST_CREDIBILITY_REGISTRY")
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let default_credibility = match env::var("TRUST_DEFAULT_CREDIBILITY") {
            Ok(raw) => parse_credibility(&raw)?,
            Err(_) => DEFAULT_SOURCE_CREDIBILITY,
        };

        Ok(Self {
            credibility_registry,
            default_credibility,
        })
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            credibility_registry: None,
            default_credibility: DEFAULT_SOURCE_CREDIBILITY,
        }
    }
}

fn parse_credibility(raw: &str) -> Result<u8, ConfigError> {
    let invalid = || ConfigError::InvalidDefaultCredibility {
        value: raw.to_string(),
    };
    let value = raw.trim().parse::<u8>().map_err(|_| invalid())?;
    if (CREDIBILITY_FLOOR..=CREDIBILITY_CEILING).contains(&value) {
        Ok(value)
    } else {
        Err(invalid())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDefaultCredibility { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDefaultCredibility { value } => write!(
                f,
                "TRUST_DEFAULT_CREDIBILITY must be an integer in {}..={} (got '{}')",
                CREDIBILITY_FLOOR, CREDIBILITY_CEILING, value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidDefaultCredibility { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
