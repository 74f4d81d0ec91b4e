//! Account-scoped streaming services.
//!
//! Each call opens exactly one server-streaming RPC whose subscription is
//! fully described by the opening request. The returned [`StreamHandle`]
//! can only cancel; there is no later subscribe/unsubscribe on these
//! streams, and overlapping account sets are not deduplicated.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::channel::{StreamHandle, spawn_stream};
use super::push::{ErrorHandler, PushAdapter};
use super::requests;
use crate::application::ports::StreamTransport;
use crate::domain::subscription::{AccountIds, StreamKind};
use crate::proto::{PortfolioStreamResponse, PositionsStreamResponse, TradesStreamResponse};

/// Opens the order trades stream.
#[derive(Clone)]
pub struct OrdersStreamService {
    transport: Arc<dyn StreamTransport>,
}

impl OrdersStreamService {
    /// Create a service opening streams through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn StreamTransport>) -> Self {
        Self { transport }
    }

    /// Stream trades executed against the caller's orders.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn subscribe_trades<P>(&self, processor: P, on_error: Option<ErrorHandler>) -> StreamHandle
    where
        P: Fn(TradesStreamResponse) + Send + Sync + 'static,
    {
        self.subscribe_trades_with_adapter(
            PushAdapter::new(processor).with_optional_error_handler(on_error),
        )
    }

    /// Stream trades into a fully configured adapter.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn subscribe_trades_with_adapter(
        &self,
        adapter: PushAdapter<TradesStreamResponse>,
    ) -> StreamHandle {
        let transport = Arc::clone(&self.transport);
        let request = requests::trades_stream_request();
        let token = CancellationToken::new();

        tracing::info!("opening order trades stream");
        spawn_stream(
            StreamKind::Trades,
            Arc::from("trades"),
            async move { transport.trades_stream(request).await },
            adapter,
            token.clone(),
        );

        StreamHandle::new(StreamKind::Trades, token)
    }
}

/// Opens portfolio and positions streams.
#[derive(Clone)]
pub struct OperationsStreamService {
    transport: Arc<dyn StreamTransport>,
}

impl OperationsStreamService {
    /// Create a service opening streams through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn StreamTransport>) -> Self {
        Self { transport }
    }

    /// Stream portfolio updates for one or more accounts.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn subscribe_portfolio<P>(
        &self,
        processor: P,
        on_error: Option<ErrorHandler>,
        accounts: impl Into<AccountIds>,
    ) -> StreamHandle
    where
        P: Fn(PortfolioStreamResponse) + Send + Sync + 'static,
    {
        self.subscribe_portfolio_with_adapter(
            PushAdapter::new(processor).with_optional_error_handler(on_error),
            accounts,
        )
    }

    /// Stream portfolio updates into a fully configured adapter.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn subscribe_portfolio_with_adapter(
        &self,
        adapter: PushAdapter<PortfolioStreamResponse>,
        accounts: impl Into<AccountIds>,
    ) -> StreamHandle {
        let accounts = accounts.into();
        let transport = Arc::clone(&self.transport);
        let token = CancellationToken::new();

        tracing::info!(accounts = ?accounts.as_slice(), "opening portfolio stream");
        let request = requests::portfolio_stream_request(accounts);
        spawn_stream(
            StreamKind::Portfolio,
            Arc::from("portfolio"),
            async move { transport.portfolio_stream(request).await },
            adapter,
            token.clone(),
        );

        StreamHandle::new(StreamKind::Portfolio, token)
    }

    /// Stream position changes for one or more accounts.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn subscribe_positions<P>(
        &self,
        processor: P,
        on_error: Option<ErrorHandler>,
        accounts: impl Into<AccountIds>,
    ) -> StreamHandle
    where
        P: Fn(PositionsStreamResponse) + Send + Sync + 'static,
    {
        self.subscribe_positions_with_adapter(
            PushAdapter::new(processor).with_optional_error_handler(on_error),
            accounts,
        )
    }

    /// Stream position changes into a fully configured adapter.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn subscribe_positions_with_adapter(
        &self,
        adapter: PushAdapter<PositionsStreamResponse>,
        accounts: impl Into<AccountIds>,
    ) -> StreamHandle {
        let accounts = accounts.into();
        let transport = Arc::clone(&self.transport);
        let token = CancellationToken::new();

        tracing::info!(accounts = ?accounts.as_slice(), "opening positions stream");
        let request = requests::positions_stream_request(accounts);
        spawn_stream(
            StreamKind::Positions,
            Arc::from("positions"),
            async move { transport.positions_stream(request).await },
            adapter,
            token.clone(),
        );

        StreamHandle::new(StreamKind::Positions, token)
    }
}
