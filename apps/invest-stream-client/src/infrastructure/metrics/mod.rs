//! Prometheus Metrics Module
//!
//! Stream lifecycle and traffic counters recorded through the `metrics`
//! facade. Nothing is exported unless the application installs the
//! exporter with [`init_metrics`]; without it the macros are no-ops.
//!
//! The exporter serves the text format on its own HTTP listener at the
//! address given by `INVEST_METRICS_ADDR`.
//!
//! # Metrics Categories
//!
//! - **Streams**: opened, completed and failed streams by kind
//! - **Messages**: inbound push messages by stream kind
//! - **Control**: subscribe/unsubscribe messages sent by feed and action
//! - **Registry**: number of named market data streams

use std::net::SocketAddr;
use std::sync::OnceLock;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::domain::subscription::{StreamKind, SubscriptionAction};
use crate::infrastructure::config::ConfigError;

// =============================================================================
// Exporter
// =============================================================================

static LISTEN_ADDR: OnceLock<SocketAddr> = OnceLock::new();

/// Where the Prometheus exporter listens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsConfig {
    /// Listener address; metrics are not exported when `None`.
    pub listen_addr: Option<SocketAddr>,
}

impl MetricsConfig {
    /// Read `INVEST_METRICS_ADDR` from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but is not a socket address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read `INVEST_METRICS_ADDR` from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but is not a socket address.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = match lookup("INVEST_METRICS_ADDR") {
            Some(value) if !value.trim().is_empty() => {
                Some(value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "INVEST_METRICS_ADDR".to_string(),
                    value,
                })?)
            }
            _ => None,
        };
        Ok(Self { listen_addr })
    }
}

/// Install the Prometheus recorder and its HTTP listener.
///
/// Returns the address metrics are served on, or `None` when no listener
/// is configured. Must be called from within a Tokio runtime. Repeated
/// calls return the address of the first installation.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or another global
/// recorder is already installed.
pub fn init_metrics(config: &MetricsConfig) -> Result<Option<SocketAddr>, BuildError> {
    if let Some(addr) = LISTEN_ADDR.get() {
        return Ok(Some(*addr));
    }
    let Some(addr) = config.listen_addr else {
        return Ok(None);
    };

    PrometheusBuilder::new().with_http_listener(addr).install()?;
    register_metrics();
    tracing::info!(%addr, "Prometheus metrics listening");
    Ok(Some(*LISTEN_ADDR.get_or_init(|| addr)))
}

// =============================================================================
// Metric Registration
// =============================================================================

fn register_metrics() {
    describe_counter!(
        "invest_stream_streams_opened_total",
        "Total push streams opened by kind"
    );
    describe_counter!(
        "invest_stream_streams_completed_total",
        "Total push streams closed normally by the server"
    );
    describe_counter!(
        "invest_stream_errors_total",
        "Total push streams terminated by an error"
    );
    describe_counter!(
        "invest_stream_messages_received_total",
        "Total push messages received by stream kind"
    );
    describe_counter!(
        "invest_stream_control_messages_total",
        "Total control messages sent on market data streams"
    );
    describe_gauge!(
        "invest_stream_registry_streams",
        "Named market data streams held by the registry"
    );
}

// =============================================================================
// Metric Recording Functions
// =============================================================================

/// Record a stream being opened.
pub fn record_stream_opened(kind: StreamKind) {
    counter!("invest_stream_streams_opened_total", "stream" => kind.as_str()).increment(1);
}

/// Record a normal server-side close.
pub fn record_stream_completed(kind: StreamKind) {
    counter!("invest_stream_streams_completed_total", "stream" => kind.as_str()).increment(1);
}

/// Record a stream terminated by an error.
pub fn record_stream_error(kind: StreamKind, code: Option<tonic::Code>) {
    let code = code.map_or_else(|| "transport".to_string(), |c| format!("{c:?}"));
    counter!(
        "invest_stream_errors_total",
        "stream" => kind.as_str(),
        "code" => code
    )
    .increment(1);
}

/// Record one inbound push message.
pub fn record_message_received(kind: StreamKind) {
    counter!("invest_stream_messages_received_total", "stream" => kind.as_str()).increment(1);
}

/// Record one control message sent on a market data stream.
pub fn record_control_message(feed: &'static str, action: Option<SubscriptionAction>) {
    counter!(
        "invest_stream_control_messages_total",
        "feed" => feed,
        "action" => action.map_or("none", SubscriptionAction::as_str)
    )
    .increment(1);
}

/// Update the registry size gauge.
#[allow(clippy::cast_precision_loss)]
pub fn set_registry_streams(count: usize) {
    gauge!("invest_stream_registry_streams").set(count as f64);
}

// =============================================================================
// Tests
// =============================================================================
