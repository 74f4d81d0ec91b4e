//! Port Interfaces
//!
//! Contracts between the streaming services and the outside world,
//! following the Hexagonal Architecture pattern.
//!
//! ## Driven Ports (Outbound)
//!
//! - [`StreamTransport`]: opens the four push streams on a remote connection
//!
//! ## Driver Ports (Inbound)
//!
//! - [`StreamObserver`]: receives the message / error / completed signals of
//!   one stream

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::proto::{
    MarketDataRequest, MarketDataResponse, PortfolioStreamRequest, PortfolioStreamResponse,
    PositionsStreamRequest, PositionsStreamResponse, TradesStreamRequest, TradesStreamResponse,
};

/// Metadata key the API uses to tag a request for support lookups.
pub const TRACKING_ID_HEADER: &str = "x-tracking-id";

// =============================================================================
// Errors
// =============================================================================

/// Connection-level stream failure.
///
/// Per-instrument rejections are not errors; they arrive as subscription
/// result messages on the stream itself.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The server or the HTTP/2 layer terminated the call.
    #[error("stream failed: {0}")]
    Status(#[from] tonic::Status),

    /// The connection could not be established.
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// The token or application name cannot be sent as gRPC metadata.
    #[error("invalid request metadata: {0}")]
    InvalidMetadata(#[from] tonic::metadata::errors::InvalidMetadataValue),
}

impl StreamError {
    /// gRPC status code, when the failure came from a call.
    #[must_use]
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            Self::Status(status) => Some(status.code()),
            Self::Transport(_) | Self::InvalidMetadata(_) => None,
        }
    }

    /// Whether the server rejected the token.
    #[must_use]
    pub fn is_unauthenticated(&self) -> bool {
        self.code() == Some(tonic::Code::Unauthenticated)
    }

    /// Tracking id attached by the server, if any.
    #[must_use]
    pub fn tracking_id(&self) -> Option<&str> {
        match self {
            Self::Status(status) => status
                .metadata()
                .get(TRACKING_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Self::Transport(_) | Self::InvalidMetadata(_) => None,
        }
    }
}

// =============================================================================
// Stream Aliases
// =============================================================================

/// Outbound half of a bidirectional stream.
pub type RequestStream<T> = Pin<Box<dyn Stream<Item = T> + Send>>;

/// Inbound half of any push stream.
pub type ResponseStream<T> = Pin<Box<dyn Stream<Item = Result<T, StreamError>> + Send>>;

// =============================================================================
// Stream Transport
// =============================================================================

/// Opens push streams against the remote API.
///
/// Implementations must not retry: a failed open or a broken stream is
/// reported once and left to the caller.
#[async_trait]
pub trait StreamTransport: Send + Sync + 'static {
    /// Open the bidirectional market data stream, sending `requests` upstream.
    async fn market_data_stream(
        &self,
        requests: RequestStream<MarketDataRequest>,
    ) -> Result<ResponseStream<MarketDataResponse>, StreamError>;

    /// Open the order trades stream.
    async fn trades_stream(
        &self,
        request: TradesStreamRequest,
    ) -> Result<ResponseStream<TradesStreamResponse>, StreamError>;

    /// Open the portfolio stream.
    async fn portfolio_stream(
        &self,
        request: PortfolioStreamRequest,
    ) -> Result<ResponseStream<PortfolioStreamResponse>, StreamError>;

    /// Open the positions stream.
    async fn positions_stream(
        &self,
        request: PositionsStreamRequest,
    ) -> Result<ResponseStream<PositionsStreamResponse>, StreamError>;
}

// =============================================================================
// Stream Observer
// =============================================================================

/// Receiver for the three signals of a push stream.
///
/// Called from the task driving the stream; implementations should return
/// quickly since the next message waits on them.
pub trait StreamObserver<T>: Send + Sync {
    /// A message arrived.
    fn on_next(&self, message: T);

    /// The stream failed. Called at most once, and nothing follows it.
    fn on_error(&self, error: StreamError);

    /// The server closed the stream normally.
    fn on_completed(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_code() {
        let error = StreamError::from(tonic::Status::unauthenticated("bad token"));
        assert_eq!(error.code(), Some(tonic::Code::Unauthenticated));
        assert!(error.is_unauthenticated());
    }

    #[test]
    fn tracking_id_read_from_metadata() {
        let mut metadata = tonic::metadata::MetadataMap::new();
        metadata.insert(TRACKING_ID_HEADER, "abc-123".parse().unwrap());
        let status = tonic::Status::with_metadata(tonic::Code::Internal, "boom", metadata);

        let error = StreamError::from(status);

        assert_eq!(error.tracking_id(), Some("abc-123"));
        assert!(!error.is_unauthenticated());
    }

    #[test]
    fn tracking_id_absent() {
        let error = StreamError::from(tonic::Status::unavailable("down"));
        assert_eq!(error.tracking_id(), None);
    }
}
