//! Tracing Subscriber Setup
//!
//! Log lines go to stdout through a fmt layer filtered by `RUST_LOG`. Spans
//! are also exported over OTLP/gRPC when `OTEL_ENABLED` is set; the
//! exporter endpoint comes from `OTEL_EXPORTER_OTLP_ENDPOINT` (default
//! `http://localhost:4317`) and the service name from `OTEL_SERVICE_NAME`.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

const SERVICE_NAME: &str = "invest-stream-client";
const OTLP_ENDPOINT: &str = "http://localhost:4317";

/// Always applied on top of `RUST_LOG`; h2 and hyper are noisy at debug.
const BASE_DIRECTIVES: [&str; 3] = ["invest_stream_client=info", "h2=warn", "hyper=warn"];

/// Subscriber installation failure.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Malformed filter directive.
    #[error("invalid log filter directive: {0}")]
    Directive(#[from] ParseError),

    /// OTLP exporter could not be built.
    #[error("failed to build OTLP exporter: {0}")]
    Exporter(String),

    /// A global subscriber is already set.
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Where spans are exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// OTLP/gRPC collector; `None` keeps tracing local.
    pub otlp_endpoint: Option<String>,
    /// `service.name` resource attribute.
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: None,
            service_name: SERVICE_NAME.to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Read the `OTEL_*` variables from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the `OTEL_*` variables from an arbitrary lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = lookup("OTEL_ENABLED").is_some_and(|v| {
            matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on")
        });
        let otlp_endpoint = enabled.then(|| {
            lookup("OTEL_EXPORTER_OTLP_ENDPOINT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| OTLP_ENDPOINT.to_string())
        });
        let service_name = lookup("OTEL_SERVICE_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| SERVICE_NAME.to_string());

        Self {
            otlp_endpoint,
            service_name,
        }
    }
}

/// Flushes and stops the span exporter on drop. Hold it until exit.
#[must_use = "dropping the guard stops span export"]
pub struct TelemetryGuard(Option<SdkTracerProvider>);

impl TelemetryGuard {
    /// Whether spans leave the process.
    #[must_use]
    pub const fn is_exporting(&self) -> bool {
        self.0.is_some()
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        let Some(provider) = self.0.take() else {
            return;
        };
        if let Err(e) = provider.shutdown() {
            eprintln!("span exporter shutdown failed: {e}");
        }
    }
}

/// Install the global subscriber.
///
/// Must be called from within a Tokio runtime when an OTLP endpoint is set.
///
/// # Errors
///
/// Fails if a base directive is malformed, the exporter cannot be built, or
/// a global subscriber is already installed.
pub fn init(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let provider = config
        .otlp_endpoint
        .as_deref()
        .map(|endpoint| tracer_provider(endpoint, &config.service_name))
        .transpose()?;
    let otel = provider.as_ref().map(|provider| {
        tracing_opentelemetry::layer().with_tracer(provider.tracer(config.service_name.clone()))
    });

    tracing_subscriber::registry()
        .with(log_filter()?)
        .with(tracing_subscriber::fmt::layer())
        .with(otel)
        .try_init()?;

    Ok(TelemetryGuard(provider))
}

fn tracer_provider(endpoint: &str, service_name: &str) -> Result<SdkTracerProvider, TelemetryError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .map_err(|e| TelemetryError::Exporter(e.to_string()))?;

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(
            Resource::builder()
                .with_service_name(service_name.to_string())
                .build(),
        )
        .build())
}

fn log_filter() -> Result<EnvFilter, TelemetryError> {
    let mut filter = EnvFilter::from_default_env();
    for directive in BASE_DIRECTIVES {
        filter = filter.add_directive(directive.parse::<Directive>()?);
    }
    Ok(filter)
}
