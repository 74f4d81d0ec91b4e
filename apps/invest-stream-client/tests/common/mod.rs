//! In-memory transport for integration tests.
//!
//! Every stream opened through [`FakeTransport`] becomes a [`FakeConnection`]
//! the test can pull from: read the control messages the client sent, push
//! server messages, fail or complete the stream.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use invest_stream_client::application::ports::{RequestStream, ResponseStream};
use invest_stream_client::proto::{
    MarketDataRequest, MarketDataResponse, PortfolioStreamRequest, PortfolioStreamResponse,
    PositionsStreamRequest, PositionsStreamResponse, TradesStreamRequest, TradesStreamResponse,
};
use invest_stream_client::{StreamError, StreamTransport};
use tokio::sync::{Mutex, mpsc};
use tokio_stream::wrappers::UnboundedReceiverStream;

/// How long a test waits for something that should happen.
pub const WAIT: Duration = Duration::from_secs(2);

/// How long a test waits to conclude that nothing happens.
pub const QUIET: Duration = Duration::from_millis(150);

// =============================================================================
// Connection
// =============================================================================

/// Server side of one fake stream.
pub struct FakeConnection<Req, Resp> {
    requests: RequestStream<Req>,
    responses: Option<mpsc::UnboundedSender<Result<Resp, StreamError>>>,
}

impl<Req, Resp> FakeConnection<Req, Resp> {
    /// Next control message sent by the client.
    pub async fn next_request(&mut self) -> Req {
        tokio::time::timeout(WAIT, self.requests.next())
            .await
            .expect("timed out waiting for request")
            .expect("request stream ended")
    }

    /// Next control message, or `None` if nothing arrives within [`QUIET`].
    pub async fn try_next_request(&mut self) -> Option<Req> {
        tokio::time::timeout(QUIET, self.requests.next())
            .await
            .ok()
            .flatten()
    }

    /// Push a server message. Ignored if the client has gone.
    pub fn push(&self, message: Resp) {
        if let Some(responses) = &self.responses {
            let _ = responses.send(Ok(message));
        }
    }

    /// Fail the stream with `status`.
    pub fn fail(&self, status: tonic::Status) {
        if let Some(responses) = &self.responses {
            let _ = responses.send(Err(StreamError::from(status)));
        }
    }

    /// End the stream normally.
    pub fn complete(&mut self) {
        self.responses = None;
    }

    /// Wait until the client drops its end of the stream.
    pub async fn wait_closed(&self) {
        let responses = self.responses.as_ref().expect("stream already completed");
        tokio::time::timeout(WAIT, responses.closed())
            .await
            .expect("client never closed the stream");
    }

    /// Whether the client has dropped its end of the stream.
    pub fn is_closed(&self) -> bool {
        self.responses
            .as_ref()
            .is_none_or(mpsc::UnboundedSender::is_closed)
    }
}

// =============================================================================
// Transport
// =============================================================================

struct Queue<Req, Resp> {
    tx: mpsc::UnboundedSender<FakeConnection<Req, Resp>>,
    rx: Mutex<mpsc::UnboundedReceiver<FakeConnection<Req, Resp>>>,
}

impl<Req, Resp> Queue<Req, Resp>
where
    Resp: Send + 'static,
{
    fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(rx),
        }
    }

    fn open(&self, requests: RequestStream<Req>) -> ResponseStream<Resp> {
        let (responses, inbound) = mpsc::unbounded_channel();
        let _ = self.tx.send(FakeConnection {
            requests,
            responses: Some(responses),
        });
        Box::pin(UnboundedReceiverStream::new(inbound))
    }

    async fn next(&self) -> FakeConnection<Req, Resp> {
        let mut rx = self.rx.lock().await;
        tokio::time::timeout(WAIT, rx.recv())
            .await
            .expect("timed out waiting for stream to open")
            .expect("transport dropped")
    }

    async fn try_next(&self) -> Option<FakeConnection<Req, Resp>> {
        let mut rx = self.rx.lock().await;
        tokio::time::timeout(QUIET, rx.recv()).await.ok().flatten()
    }
}

/// Transport recording every opened stream.
pub struct FakeTransport {
    market_data: Queue<MarketDataRequest, MarketDataResponse>,
    trades: Queue<TradesStreamRequest, TradesStreamResponse>,
    portfolio: Queue<PortfolioStreamRequest, PortfolioStreamResponse>,
    positions: Queue<PositionsStreamRequest, PositionsStreamResponse>,
    connect_error: Option<tonic::Code>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            market_data: Queue::new(),
            trades: Queue::new(),
            portfolio: Queue::new(),
            positions: Queue::new(),
            connect_error: None,
        })
    }

    /// Transport whose every open fails with `code`.
    pub fn failing(code: tonic::Code) -> Arc<Self> {
        Arc::new(Self {
            market_data: Queue::new(),
            trades: Queue::new(),
            portfolio: Queue::new(),
            positions: Queue::new(),
            connect_error: Some(code),
        })
    }

    pub async fn next_market_data(&self) -> FakeConnection<MarketDataRequest, MarketDataResponse> {
        self.market_data.next().await
    }

    pub async fn try_next_market_data(
        &self,
    ) -> Option<FakeConnection<MarketDataRequest, MarketDataResponse>> {
        self.market_data.try_next().await
    }

    pub async fn next_trades(&self) -> FakeConnection<TradesStreamRequest, TradesStreamResponse> {
        self.trades.next().await
    }

    pub async fn next_portfolio(
        &self,
    ) -> FakeConnection<PortfolioStreamRequest, PortfolioStreamResponse> {
        self.portfolio.next().await
    }

    pub async fn next_positions(
        &self,
    ) -> FakeConnection<PositionsStreamRequest, PositionsStreamResponse> {
        self.positions.next().await
    }

    fn check_connect(&self) -> Result<(), StreamError> {
        match self.connect_error {
            Some(code) => Err(tonic::Status::new(code, "connect refused").into()),
            None => Ok(()),
        }
    }
}

fn single<T: Send + 'static>(request: T) -> RequestStream<T> {
    Box::pin(futures::stream::iter([request]))
}

#[async_trait]
impl StreamTransport for FakeTransport {
    async fn market_data_stream(
        &self,
        requests: RequestStream<MarketDataRequest>,
    ) -> Result<ResponseStream<MarketDataResponse>, StreamError> {
        self.check_connect()?;
        Ok(self.market_data.open(requests))
    }

    async fn trades_stream(
        &self,
        request: TradesStreamRequest,
    ) -> Result<ResponseStream<TradesStreamResponse>, StreamError> {
        self.check_connect()?;
        Ok(self.trades.open(single(request)))
    }

    async fn portfolio_stream(
        &self,
        request: PortfolioStreamRequest,
    ) -> Result<ResponseStream<PortfolioStreamResponse>, StreamError> {
        self.check_connect()?;
        Ok(self.portfolio.open(single(request)))
    }

    async fn positions_stream(
        &self,
        request: PositionsStreamRequest,
    ) -> Result<ResponseStream<PositionsStreamResponse>, StreamError> {
        self.check_connect()?;
        Ok(self.positions.open(single(request)))
    }
}

// =============================================================================
// Callback capture
// =============================================================================

/// Receiving end of a callback that forwards into a channel.
pub struct Captured<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> Captured<T> {
    pub async fn next(&mut self) -> T {
        tokio::time::timeout(WAIT, self.rx.recv())
            .await
            .expect("timed out waiting for callback")
            .expect("callback dropped")
    }

    /// Assert that no further callback fires within [`QUIET`].
    pub async fn assert_silent(&mut self) {
        tokio::time::sleep(QUIET).await;
        assert!(self.rx.try_recv().is_err(), "unexpected callback");
    }
}

/// A `Fn(T)` callback plus the channel it feeds.
pub fn capture<T: Send + 'static>() -> (impl Fn(T) + Send + Sync + 'static, Captured<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let callback = move |value: T| {
        let _ = tx.send(value);
    };
    (callback, Captured { rx })
}

/// An error handler plus the channel it feeds.
pub fn capture_errors() -> (invest_stream_client::ErrorHandler, Captured<StreamError>) {
    let (callback, captured) = capture::<StreamError>();
    (Box::new(callback), captured)
}
