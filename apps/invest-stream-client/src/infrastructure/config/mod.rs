//! Configuration Module
//!
//! Connection configuration for the Invest API client.

mod settings;

pub use settings::{
    ClientConfig, ConfigError, ConnectionSettings, Credentials, Environment, PRODUCTION_ENDPOINT,
    SANDBOX_ENDPOINT,
};
