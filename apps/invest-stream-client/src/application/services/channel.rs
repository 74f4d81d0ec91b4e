//! Subscription Channel
//!
//! One persistent push stream plus the handle used to control it.
//!
//! # Lifecycle
//!
//! ```text
//! open ──► connecting ──► streaming ──► completed | failed
//!   │           │              │
//!   └───────────┴──── cancel ──┴──► closed (nothing further delivered)
//! ```
//!
//! Opening never fails synchronously: the connection is made by a spawned
//! driver task, and a failed connect reaches the error handler like any
//! other stream failure. There is no reconnection.
//!
//! On the market data stream the handle owns the sending half of the
//! request stream; every subscribe/unsubscribe call enqueues exactly one
//! control message and returns without waiting for the server.

use std::future::Future;
use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_util::sync::CancellationToken;

use super::requests;
use crate::application::ports::{
    RequestStream, ResponseStream, StreamError, StreamObserver, StreamTransport,
};
use crate::domain::subscription::{
    CandleInterval, MarketDataFeed, StreamKind, SubscriptionAction,
};
use crate::infrastructure::metrics;
use crate::proto::{MarketDataRequest, MarketDataResponse};

// =============================================================================
// Driver
// =============================================================================

/// Spawn the task that connects and then pumps inbound items into
/// `observer` until the stream ends, fails, or `token` is cancelled.
///
/// Cancellation is checked before every delivery, so nothing reaches the
/// observer once the token is cancelled and the task has been polled.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub(crate) fn spawn_stream<T, O, C>(
    kind: StreamKind,
    stream_id: Arc<str>,
    connect: C,
    observer: O,
    token: CancellationToken,
) where
    T: Send + 'static,
    O: StreamObserver<T> + 'static,
    C: Future<Output = Result<ResponseStream<T>, StreamError>> + Send + 'static,
{
    metrics::record_stream_opened(kind);

    tokio::spawn(async move {
        let mut stream = tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::debug!(stream = %kind, stream_id = %stream_id, "cancelled before connect");
                return;
            }
            result = connect => match result {
                Ok(stream) => stream,
                Err(error) => {
                    tracing::warn!(stream = %kind, stream_id = %stream_id, error = %error, "failed to open stream");
                    metrics::record_stream_error(kind, error.code());
                    observer.on_error(error);
                    return;
                }
            },
        };

        tracing::debug!(stream = %kind, stream_id = %stream_id, "stream open");

        loop {
            tokio::select! {
                biased;
                () = token.cancelled() => {
                    tracing::debug!(stream = %kind, stream_id = %stream_id, "stream cancelled");
                    break;
                }
                item = stream.next() => {
                    if token.is_cancelled() {
                        break;
                    }
                    match item {
                        Some(Ok(message)) => {
                            metrics::record_message_received(kind);
                            observer.on_next(message);
                        }
                        Some(Err(error)) => {
                            tracing::warn!(stream = %kind, stream_id = %stream_id, error = %error, "stream failed");
                            metrics::record_stream_error(kind, error.code());
                            observer.on_error(error);
                            break;
                        }
                        None => {
                            tracing::info!(stream = %kind, stream_id = %stream_id, "stream completed by server");
                            metrics::record_stream_completed(kind);
                            observer.on_completed();
                            break;
                        }
                    }
                }
            }
        }
    });
}

// =============================================================================
// Stream Handle
// =============================================================================

/// Cancel-only handle for a server-streaming subscription.
#[derive(Debug, Clone)]
pub struct StreamHandle {
    kind: StreamKind,
    token: CancellationToken,
}

impl StreamHandle {
    pub(crate) const fn new(kind: StreamKind, token: CancellationToken) -> Self {
        Self { kind, token }
    }

    /// Which stream this handle controls.
    #[must_use]
    pub const fn kind(&self) -> StreamKind {
        self.kind
    }

    /// Close the stream. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

// =============================================================================
// Market Data Subscription
// =============================================================================

/// Handle to one bidirectional market data stream.
///
/// Cloning shares the same connection. Sends after [`cancel`](Self::cancel)
/// are logged and dropped.
#[derive(Clone)]
pub struct MarketDataSubscription {
    stream_id: Arc<str>,
    requests: mpsc::UnboundedSender<MarketDataRequest>,
    token: CancellationToken,
}

impl MarketDataSubscription {
    /// Open a market data stream delivering into `observer`.
    ///
    /// No control message is sent until the first subscribe call.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn open<O>(
        stream_id: impl Into<String>,
        transport: Arc<dyn StreamTransport>,
        observer: O,
    ) -> Self
    where
        O: StreamObserver<MarketDataResponse> + 'static,
    {
        let stream_id: Arc<str> = Arc::from(stream_id.into());
        let (tx, rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();

        let outbound: RequestStream<MarketDataRequest> = Box::pin(UnboundedReceiverStream::new(rx));
        let connect = async move { transport.market_data_stream(outbound).await };

        spawn_stream(
            StreamKind::MarketData,
            Arc::clone(&stream_id),
            connect,
            observer,
            token.clone(),
        );

        Self {
            stream_id,
            requests: tx,
            token,
        }
    }

    /// Identifier this stream was opened under.
    #[must_use]
    pub fn stream_id(&self) -> &str {
        &self.stream_id
    }

    /// Subscribe every id in `instrument_ids` to `feed` with one message.
    pub fn subscribe<I, S>(&self, feed: MarketDataFeed, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.send_feed(SubscriptionAction::Subscribe, feed, instrument_ids);
    }

    /// Unsubscribe every id in `instrument_ids` from `feed` with one message.
    pub fn unsubscribe<I, S>(&self, feed: MarketDataFeed, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.send_feed(SubscriptionAction::Unsubscribe, feed, instrument_ids);
    }

    /// Subscribe to anonymous trades.
    pub fn subscribe_trades<I, S>(&self, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscribe(MarketDataFeed::Trades, instrument_ids);
    }

    /// Unsubscribe from anonymous trades.
    pub fn unsubscribe_trades<I, S>(&self, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unsubscribe(MarketDataFeed::Trades, instrument_ids);
    }

    /// Subscribe to order books at depth 1.
    pub fn subscribe_order_book<I, S>(&self, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscribe(MarketDataFeed::DEFAULT_ORDER_BOOK, instrument_ids);
    }

    /// Subscribe to order books at `depth`, or depth 10 when `None`.
    pub fn subscribe_order_book_with_depth<I, S>(&self, instrument_ids: I, depth: Option<i32>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscribe(MarketDataFeed::order_book_or_default(depth), instrument_ids);
    }

    /// Unsubscribe from order books at depth 1.
    pub fn unsubscribe_order_book<I, S>(&self, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unsubscribe(MarketDataFeed::DEFAULT_ORDER_BOOK, instrument_ids);
    }

    /// Unsubscribe from order books at `depth`, or depth 10 when `None`.
    pub fn unsubscribe_order_book_with_depth<I, S>(&self, instrument_ids: I, depth: Option<i32>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unsubscribe(MarketDataFeed::order_book_or_default(depth), instrument_ids);
    }

    /// Subscribe to one-minute candles.
    pub fn subscribe_candles<I, S>(&self, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscribe(MarketDataFeed::DEFAULT_CANDLES, instrument_ids);
    }

    /// Subscribe to candles at `interval`.
    pub fn subscribe_candles_with_interval<I, S>(&self, instrument_ids: I, interval: CandleInterval)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscribe(MarketDataFeed::Candles { interval }, instrument_ids);
    }

    /// Unsubscribe from one-minute candles.
    pub fn unsubscribe_candles<I, S>(&self, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unsubscribe(MarketDataFeed::DEFAULT_CANDLES, instrument_ids);
    }

    /// Unsubscribe from candles at `interval`.
    pub fn unsubscribe_candles_with_interval<I, S>(
        &self,
        instrument_ids: I,
        interval: CandleInterval,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unsubscribe(MarketDataFeed::Candles { interval }, instrument_ids);
    }

    /// Subscribe to trading status changes.
    pub fn subscribe_info<I, S>(&self, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscribe(MarketDataFeed::Info, instrument_ids);
    }

    /// Unsubscribe from trading status changes.
    pub fn unsubscribe_info<I, S>(&self, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unsubscribe(MarketDataFeed::Info, instrument_ids);
    }

    /// Subscribe to last prices.
    pub fn subscribe_last_prices<I, S>(&self, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscribe(MarketDataFeed::LastPrice, instrument_ids);
    }

    /// Unsubscribe from last prices.
    pub fn unsubscribe_last_prices<I, S>(&self, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unsubscribe(MarketDataFeed::LastPrice, instrument_ids);
    }

    /// Ask the server for this stream's active subscriptions.
    ///
    /// The answer arrives as ordinary subscription result messages.
    pub fn get_my_subscriptions(&self) {
        self.send(requests::get_my_subscriptions_request(), "my_subscriptions", None);
    }

    /// Send a client ping.
    pub fn ping(&self) {
        self.send(requests::ping_request(), "ping", None);
    }

    /// Close the stream. Idempotent.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!(stream_id = %self.stream_id, "cancelling market data stream");
        }
        self.token.cancel();
    }

    /// Whether the stream has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether both handles control the same connection.
    #[must_use]
    pub fn same_stream(&self, other: &Self) -> bool {
        self.requests.same_channel(&other.requests)
    }

    fn send_feed<I, S>(&self, action: SubscriptionAction, feed: MarketDataFeed, instrument_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let instrument_ids: Vec<String> = instrument_ids.into_iter().map(Into::into).collect();
        let request = requests::market_data_request(action, feed, instrument_ids);
        tracing::debug!(
            stream_id = %self.stream_id,
            feed = %feed.kind(),
            action = %action,
            instruments = requests::instrument_count(&request),
            "sending subscription request"
        );
        self.send(request, feed.kind().as_str(), Some(action));
    }

    fn send(
        &self,
        request: MarketDataRequest,
        label: &'static str,
        action: Option<SubscriptionAction>,
    ) {
        if self.token.is_cancelled() {
            tracing::warn!(stream_id = %self.stream_id, request = label, "stream cancelled; request not sent");
            return;
        }
        if self.requests.send(request).is_err() {
            tracing::warn!(stream_id = %self.stream_id, request = label, "stream closed; request not sent");
            return;
        }
        metrics::record_control_message(label, action);
    }
}

impl std::fmt::Debug for MarketDataSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketDataSubscription")
            .field("stream_id", &self.stream_id)
            .field("cancelled", &self.token.is_cancelled())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use parking_lot::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Signal {
        Next(u32),
        Error(Option<tonic::Code>),
        Completed,
    }

    #[derive(Clone, Default)]
    struct Recorder {
        signals: Arc<Mutex<Vec<Signal>>>,
        done: Arc<tokio::sync::Notify>,
    }

    impl StreamObserver<u32> for Recorder {
        fn on_next(&self, message: u32) {
            self.signals.lock().push(Signal::Next(message));
        }

        fn on_error(&self, error: StreamError) {
            self.signals.lock().push(Signal::Error(error.code()));
            self.done.notify_one();
        }

        fn on_completed(&self) {
            self.signals.lock().push(Signal::Completed);
            self.done.notify_one();
        }
    }

    fn items(items: Vec<Result<u32, StreamError>>) -> ResponseStream<u32> {
        Box::pin(futures::stream::iter(items))
    }

    async fn wait(recorder: &Recorder) {
        tokio::time::timeout(Duration::from_secs(1), recorder.done.notified())
            .await
            .expect("stream should finish");
    }

    #[tokio::test]
    async fn messages_then_completion() {
        let recorder = Recorder::default();
        let stream = items(vec![Ok(1), Ok(2)]);

        spawn_stream(
            StreamKind::Trades,
            Arc::from("t"),
            async move { Ok(stream) },
            recorder.clone(),
            CancellationToken::new(),
        );
        wait(&recorder).await;

        assert_eq!(
            *recorder.signals.lock(),
            vec![Signal::Next(1), Signal::Next(2), Signal::Completed]
        );
    }

    #[tokio::test]
    async fn error_stops_delivery() {
        let recorder = Recorder::default();
        let stream = items(vec![
            Ok(1),
            Err(StreamError::from(tonic::Status::unavailable("reset"))),
            Ok(2),
        ]);

        spawn_stream(
            StreamKind::Portfolio,
            Arc::from("p"),
            async move { Ok(stream) },
            recorder.clone(),
            CancellationToken::new(),
        );
        wait(&recorder).await;
        tokio::task::yield_now().await;

        assert_eq!(
            *recorder.signals.lock(),
            vec![Signal::Next(1), Signal::Error(Some(tonic::Code::Unavailable))]
        );
    }

    #[tokio::test]
    async fn connect_failure_reaches_error_handler() {
        let recorder = Recorder::default();

        spawn_stream(
            StreamKind::Positions,
            Arc::from("x"),
            async { Err::<ResponseStream<u32>, _>(StreamError::from(tonic::Status::unauthenticated("no"))) },
            recorder.clone(),
            CancellationToken::new(),
        );
        wait(&recorder).await;

        assert_eq!(
            *recorder.signals.lock(),
            vec![Signal::Error(Some(tonic::Code::Unauthenticated))]
        );
    }

    #[tokio::test]
    async fn cancelled_before_connect_delivers_nothing() {
        let recorder = Recorder::default();
        let token = CancellationToken::new();
        token.cancel();
        let stream = items(vec![Ok(1)]);

        spawn_stream(
            StreamKind::Trades,
            Arc::from("c"),
            async move { Ok(stream) },
            recorder.clone(),
            token,
        );
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(recorder.signals.lock().is_empty());
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn subscription_log_reports_instruments_sent() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let (tx, mut rx) = mpsc::unbounded_channel();
        let subscription = MarketDataSubscription {
            stream_id: Arc::from("s1"),
            requests: tx,
            token: CancellationToken::new(),
        };

        tracing::subscriber::with_default(subscriber, || {
            subscription.subscribe_last_prices(["A", "B", "A"]);
        });

        let sent = rx.try_recv().unwrap();
        assert_eq!(requests::instrument_count(&sent), 3);
        let output = String::from_utf8(logs.0.lock().clone()).unwrap();
        assert!(output.contains("sending subscription request"));
        assert!(output.contains("instruments=3"));
    }

    #[test]
    fn stream_handle_cancel_is_idempotent() {
        let handle = StreamHandle::new(StreamKind::Trades, CancellationToken::new());
        assert!(!handle.is_cancelled());
        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(handle.kind(), StreamKind::Trades);
    }
}
