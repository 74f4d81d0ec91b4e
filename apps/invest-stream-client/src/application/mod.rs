//! Application Layer - Streaming services and port definitions.
//!
//! This layer contains the session logic for the push streams and the
//! port interfaces the transport adapter implements.

/// Port interfaces for the transport and stream observers.
pub mod ports;

/// Streaming services: channels, registry, account streams.
pub mod services;
