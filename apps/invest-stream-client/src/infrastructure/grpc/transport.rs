//! Tonic implementation of [`StreamTransport`].

use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures_util::{Stream, StreamExt};
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use super::interceptor::AuthInterceptor;
use super::proto::market_data_stream_service_client::MarketDataStreamServiceClient;
use super::proto::operations_stream_service_client::OperationsStreamServiceClient;
use super::proto::orders_stream_service_client::OrdersStreamServiceClient;
use super::proto::{
    MarketDataRequest, MarketDataResponse, PortfolioStreamRequest, PortfolioStreamResponse,
    PositionsStreamRequest, PositionsStreamResponse, TradesStreamRequest, TradesStreamResponse,
};
use crate::application::ports::{RequestStream, ResponseStream, StreamError, StreamTransport};
use crate::infrastructure::config::ClientConfig;

/// Push streams over one shared HTTP/2 channel.
#[derive(Debug, Clone)]
pub struct GrpcTransport {
    channel: Channel,
    interceptor: AuthInterceptor,
}

impl GrpcTransport {
    /// Connect eagerly to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid, the token cannot be sent
    /// as metadata, or the connection cannot be established.
    pub async fn connect(config: &ClientConfig) -> Result<Self, StreamError> {
        let interceptor = interceptor(config)?;
        let endpoint = endpoint(config)?;

        tracing::info!(
            endpoint = config.endpoint(),
            environment = config.environment.as_str(),
            "connecting to Invest API"
        );
        let channel = endpoint.connect().await?;

        Ok(Self::from_channel(channel, interceptor))
    }

    /// Build a transport that connects on first use.
    ///
    /// Connection failures then surface through each stream's error handler.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the token cannot be
    /// sent as metadata.
    pub fn connect_lazy(config: &ClientConfig) -> Result<Self, StreamError> {
        let interceptor = interceptor(config)?;
        let channel = endpoint(config)?.connect_lazy();
        Ok(Self::from_channel(channel, interceptor))
    }

    /// Wrap an existing channel.
    #[must_use]
    pub const fn from_channel(channel: Channel, interceptor: AuthInterceptor) -> Self {
        Self {
            channel,
            interceptor,
        }
    }
}

fn interceptor(config: &ClientConfig) -> Result<AuthInterceptor, StreamError> {
    Ok(AuthInterceptor::new(
        config.credentials.token(),
        config.app_name.as_deref(),
    )?)
}

fn endpoint(config: &ClientConfig) -> Result<Endpoint, StreamError> {
    let target = config.endpoint();
    let mut endpoint = Endpoint::from_shared(target.to_string())?
        .connect_timeout(config.connection.connect_timeout)
        .http2_keep_alive_interval(config.connection.keepalive_interval)
        .keep_alive_timeout(config.connection.keepalive_timeout)
        .keep_alive_while_idle(true);

    if target.starts_with("https://") {
        endpoint = endpoint.tls_config(ClientTlsConfig::new().with_native_roots())?;
    }

    Ok(endpoint)
}

/// Concrete wrapper for the boxed request stream.
///
/// Tonic's streaming request bound cannot be proven for a bare
/// `Pin<Box<dyn Stream>>` inside an `async_trait` future.
struct Outbound(RequestStream<MarketDataRequest>);

impl Stream for Outbound {
    type Item = MarketDataRequest;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.0.as_mut().poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

fn into_response_stream<T>(
    response: tonic::Response<tonic::codec::Streaming<T>>,
) -> ResponseStream<T>
where
    T: Send + 'static,
{
    Box::pin(response.into_inner().map(|item| item.map_err(StreamError::from)))
}

#[async_trait]
impl StreamTransport for GrpcTransport {
    async fn market_data_stream(
        &self,
        requests: RequestStream<MarketDataRequest>,
    ) -> Result<ResponseStream<MarketDataResponse>, StreamError> {
        let mut client = MarketDataStreamServiceClient::with_interceptor(
            self.channel.clone(),
            self.interceptor.clone(),
        );
        let response = client.market_data_stream(Outbound(requests)).await?;
        Ok(into_response_stream(response))
    }

    async fn trades_stream(
        &self,
        request: TradesStreamRequest,
    ) -> Result<ResponseStream<TradesStreamResponse>, StreamError> {
        let mut client = OrdersStreamServiceClient::with_interceptor(
            self.channel.clone(),
            self.interceptor.clone(),
        );
        let response = client.trades_stream(request).await?;
        Ok(into_response_stream(response))
    }

    async fn portfolio_stream(
        &self,
        request: PortfolioStreamRequest,
    ) -> Result<ResponseStream<PortfolioStreamResponse>, StreamError> {
        let mut client = OperationsStreamServiceClient::with_interceptor(
            self.channel.clone(),
            self.interceptor.clone(),
        );
        let response = client.portfolio_stream(request).await?;
        Ok(into_response_stream(response))
    }

    async fn positions_stream(
        &self,
        request: PositionsStreamRequest,
    ) -> Result<ResponseStream<PositionsStreamResponse>, StreamError> {
        let mut client = OperationsStreamServiceClient::with_interceptor(
            self.channel.clone(),
            self.interceptor.clone(),
        );
        let response = client.positions_stream(request).await?;
        Ok(into_response_stream(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plaintext_target_builds_endpoint() {
        let config = ClientConfig::new("t.abc").with_target("http://127.0.0.1:50051");
        let endpoint = endpoint(&config).unwrap();
        assert_eq!(endpoint.uri().host(), Some("127.0.0.1"));
        assert_eq!(endpoint.uri().port_u16(), Some(50051));
    }

    #[test]
    fn invalid_target_is_transport_error() {
        let config = ClientConfig::new("t.abc").with_target("not a uri");
        assert!(matches!(endpoint(&config), Err(StreamError::Transport(_))));
    }

    #[tokio::test]
    async fn outbound_forwards_requests_in_order() {
        let requests: RequestStream<MarketDataRequest> = Box::pin(futures_util::stream::iter([
            MarketDataRequest::default(),
            crate::application::services::requests::ping_request(),
        ]));
        let forwarded: Vec<MarketDataRequest> = Outbound(requests).collect().await;
        assert_eq!(forwarded.len(), 2);
        assert!(forwarded[0].payload.is_none());
        assert!(forwarded[1].payload.is_some());
    }

    #[test]
    fn invalid_token_is_metadata_error() {
        let config = ClientConfig::new("bad\ntoken");
        assert!(matches!(
            interceptor(&config),
            Err(StreamError::InvalidMetadata(_))
        ));
    }
}
