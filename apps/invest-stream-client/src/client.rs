//! Client facade.
//!
//! [`InvestStreamClient`] owns one transport and hands out the three
//! streaming services built on it. The market data registry lives on the
//! client, so stream ids are scoped to one client instance.

use std::sync::Arc;

use crate::application::ports::{StreamError, StreamTransport};
use crate::application::services::{
    MarketDataStreamRegistry, OperationsStreamService, OrdersStreamService,
};
use crate::infrastructure::config::ClientConfig;
use crate::infrastructure::grpc::GrpcTransport;

/// Entry point to the Invest API push streams.
pub struct InvestStreamClient {
    market_data: MarketDataStreamRegistry,
    orders: OrdersStreamService,
    operations: OperationsStreamService,
}

impl InvestStreamClient {
    /// Connect to the endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn connect(config: &ClientConfig) -> Result<Self, StreamError> {
        let transport = GrpcTransport::connect(config).await?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Build a client whose connection is established on the first stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint or token is malformed.
    pub fn connect_lazy(config: &ClientConfig) -> Result<Self, StreamError> {
        let transport = GrpcTransport::connect_lazy(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Build a client over any transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn StreamTransport>) -> Self {
        Self {
            market_data: MarketDataStreamRegistry::new(Arc::clone(&transport)),
            orders: OrdersStreamService::new(Arc::clone(&transport)),
            operations: OperationsStreamService::new(transport),
        }
    }

    /// Named market data streams.
    #[must_use]
    pub const fn market_data(&self) -> &MarketDataStreamRegistry {
        &self.market_data
    }

    /// Order trades stream.
    #[must_use]
    pub const fn orders_stream(&self) -> &OrdersStreamService {
        &self.orders
    }

    /// Portfolio and positions streams.
    #[must_use]
    pub const fn operations_stream(&self) -> &OperationsStreamService {
        &self.operations
    }

    /// Cancel every registered market data stream.
    ///
    /// Account streams are cancelled through their own handles.
    pub fn shutdown(&self) {
        self.market_data.cancel_all();
    }
}

impl std::fmt::Debug for InvestStreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvestStreamClient")
            .field("market_data", &self.market_data)
            .finish_non_exhaustive()
    }
}
