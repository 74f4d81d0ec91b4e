//! Infrastructure Layer - Adapters and external integrations.
//!
//! This layer contains the tonic implementation of the transport port and
//! the ambient concerns of the client: configuration, metrics and tracing.

/// Connection configuration.
pub mod config;

/// gRPC transport, generated contract and wire conversions.
pub mod grpc;

/// Prometheus metrics instrumentation.
pub mod metrics;

/// OpenTelemetry tracing integration.
pub mod telemetry;
