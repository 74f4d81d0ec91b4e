//! Client Configuration Settings
//!
//! Connection configuration for the Invest API, loaded from environment
//! variables.

use std::time::Duration;

/// Production API endpoint.
pub const PRODUCTION_ENDPOINT: &str = "https://invest-public-api.tinkoff.ru:443";

/// Sandbox API endpoint.
pub const SANDBOX_ENDPOINT: &str = "https://sandbox-invest-public-api.tinkoff.ru:443";

/// API environment (production vs sandbox).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Real accounts.
    #[default]
    Production,
    /// Sandbox accounts with simulated execution.
    Sandbox,
}

impl Environment {
    /// Parse the sandbox flag (`true`, `1`, `yes`, `on`, case-insensitive).
    #[must_use]
    pub fn from_sandbox_flag(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Self::Sandbox,
            _ => Self::Production,
        }
    }

    /// Check if this is the sandbox environment.
    #[must_use]
    pub const fn is_sandbox(&self) -> bool {
        matches!(self, Self::Sandbox)
    }

    /// Get the environment name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Sandbox => "sandbox",
        }
    }

    /// Default endpoint for this environment.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_ENDPOINT,
            Self::Sandbox => SANDBOX_ENDPOINT,
        }
    }
}

/// API access token.
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Create new credentials.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self { token }
    }

    /// Get the token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// HTTP/2 connection settings.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    /// Timeout for establishing the connection.
    pub connect_timeout: Duration,
    /// Interval between HTTP/2 keep-alive pings.
    pub keepalive_interval: Duration,
    /// Time to wait for a keep-alive acknowledgement.
    pub keepalive_timeout: Duration,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            keepalive_interval: Duration::from_secs(30),
            keepalive_timeout: Duration::from_secs(20),
        }
    }
}

/// Complete client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API environment.
    pub environment: Environment,
    /// API token.
    pub credentials: Credentials,
    /// Endpoint override; the environment default is used when `None`.
    pub target: Option<String>,
    /// Value for the `x-app-name` header.
    pub app_name: Option<String>,
    /// Connection settings.
    pub connection: ConnectionSettings,
}

impl ClientConfig {
    /// Production configuration with default settings.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            environment: Environment::Production,
            credentials: Credentials::new(token.into()),
            target: None,
            app_name: None,
            connection: ConnectionSettings::default(),
        }
    }

    /// Sandbox configuration with default settings.
    #[must_use]
    pub fn sandbox(token: impl Into<String>) -> Self {
        Self {
            environment: Environment::Sandbox,
            ..Self::new(token)
        }
    }

    /// Use `target` instead of the environment endpoint.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the `x-app-name` header value.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `INVEST_TOKEN` is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `INVEST_TOKEN` is missing or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("INVEST_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("INVEST_TOKEN".to_string()))?;

        if token.trim().is_empty() {
            return Err(ConfigError::EmptyValue("INVEST_TOKEN".to_string()));
        }

        let environment = lookup("INVEST_SANDBOX")
            .map(|s| Environment::from_sandbox_flag(&s))
            .unwrap_or_default();

        let target = lookup("INVEST_TARGET").filter(|s| !s.trim().is_empty());
        let app_name = lookup("INVEST_APP_NAME").filter(|s| !s.trim().is_empty());

        let defaults = ConnectionSettings::default();
        let connection = ConnectionSettings {
            connect_timeout: parse_duration_secs(
                &lookup,
                "INVEST_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout,
            ),
            keepalive_interval: parse_duration_secs(
                &lookup,
                "INVEST_KEEPALIVE_SECS",
                defaults.keepalive_interval,
            ),
            keepalive_timeout: parse_duration_secs(
                &lookup,
                "INVEST_KEEPALIVE_TIMEOUT_SECS",
                defaults.keepalive_timeout,
            ),
        };

        Ok(Self {
            environment,
            credentials: Credentials::new(token),
            target,
            app_name,
            connection,
        })
    }

    /// Endpoint the client connects to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.target
            .as_deref()
            .unwrap_or(self.environment.endpoint())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
    /// Environment variable could not be parsed.
    #[error("environment variable {key} has invalid value {value:?}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Rejected value.
        value: String,
    },
}

fn parse_duration_secs<F>(lookup: &F, key: &str, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map_or(default, Duration::from_secs)
}
