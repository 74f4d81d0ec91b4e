#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Invest Stream Client - Typed push streams for the Invest API
//!
//! Opens the Invest API streaming RPCs over gRPC and delivers every inbound
//! message to caller-supplied callbacks.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Subscription vocabulary and value objects
//!   - `subscription`: feeds, actions, candle intervals, account ids
//!   - `money`: decimal amounts with currency
//!
//! - **Application**: Streaming sessions and port definitions
//!   - `ports`: transport trait, stream observer, error type
//!   - `services`: push adapter, market data channel, registry, account streams
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `grpc`: tonic transport, auth interceptor, generated contract
//!   - `config`: endpoints, credentials, connection settings
//!   - `metrics`: Prometheus counters and gauges
//!   - `telemetry`: tracing subscriber and OTLP export
//!
//! # Data Flow
//!
//! ```text
//! caller ──subscribe_*──► MarketDataSubscription ──mpsc──► request stream ─┐
//!                                                                          ▼
//! caller ◄──processor──── PushAdapter ◄──── driver task ◄──── gRPC bidi stream
//! ```
//!
//! # Example
//!
//! ```ignore
//! use invest_stream_client::{ClientConfig, InvestStreamClient};
//!
//! let client = InvestStreamClient::connect(&ClientConfig::from_env()?).await?;
//! let stream = client.market_data().new_stream(
//!     "prices",
//!     |response| println!("{response:?}"),
//!     None,
//! );
//! stream.subscribe_last_prices(["BBG004730N88"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Subscription vocabulary with no transport dependencies.
pub mod domain;

/// Application layer - Streaming sessions and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Client facade.
pub mod client;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::InvestStreamClient;

// Domain types
pub use domain::money::Money;
pub use domain::subscription::{
    AccountIds, CandleInterval, FeedKind, MarketDataFeed, StreamKind, SubscriptionAction,
};

// Ports
pub use application::ports::{StreamError, StreamObserver, StreamTransport};

// Services
pub use application::services::{
    CompletionHandler, ErrorHandler, MarketDataStreamRegistry, MarketDataSubscription,
    MessageProcessor, OperationsStreamService, OrdersStreamService, PushAdapter, StreamHandle,
};

// Infrastructure config
pub use infrastructure::config::{ClientConfig, ConfigError, ConnectionSettings, Environment};

// gRPC
pub use infrastructure::grpc::convert::SubscriptionOutcome;
pub use infrastructure::grpc::{AuthInterceptor, GrpcTransport, proto};

// Metrics
pub use infrastructure::metrics::{MetricsConfig, init_metrics};

// Telemetry
pub use infrastructure::telemetry::{TelemetryConfig, TelemetryGuard, init as init_telemetry};
