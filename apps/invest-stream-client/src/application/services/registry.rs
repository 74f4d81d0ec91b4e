//! Market Data Stream Registry
//!
//! Named collection of market data streams owned by one client.
//!
//! # Replacement
//!
//! A stream id names at most one live stream. Opening a stream under an id
//! that is already registered cancels the previous stream before the new
//! one is installed. The whole sequence runs under the write lock, so two
//! concurrent calls for the same id cannot leave an orphaned live stream.
//!
//! Entries are never removed when a stream fails or completes; callers
//! learn about that through their callbacks and open a new stream if they
//! want one.
//!
//! # Thread Safety
//!
//! Uses `parking_lot::RwLock`: lookups take the read lock, creation and
//! replacement take the write lock. Opening a stream only spawns a task,
//! so the lock is never held across I/O.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::channel::MarketDataSubscription;
use super::push::{ErrorHandler, PushAdapter};
use crate::application::ports::StreamTransport;
use crate::infrastructure::metrics;
use crate::proto::MarketDataResponse;

/// Registry of named market data streams.
pub struct MarketDataStreamRegistry {
    transport: Arc<dyn StreamTransport>,
    streams: RwLock<HashMap<String, MarketDataSubscription>>,
}

impl MarketDataStreamRegistry {
    /// Create an empty registry opening streams through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn StreamTransport>) -> Self {
        Self {
            transport,
            streams: RwLock::new(HashMap::new()),
        }
    }

    /// Open a stream under `stream_id`, replacing any stream already there.
    ///
    /// `processor` receives every inbound message, including subscription
    /// results. Without `on_error` a stream failure is logged and dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn new_stream<P>(
        &self,
        stream_id: impl Into<String>,
        processor: P,
        on_error: Option<ErrorHandler>,
    ) -> MarketDataSubscription
    where
        P: Fn(MarketDataResponse) + Send + Sync + 'static,
    {
        let adapter = PushAdapter::new(processor).with_optional_error_handler(on_error);
        self.new_stream_with_adapter(stream_id, adapter)
    }

    /// Open a stream under `stream_id` with a fully configured adapter.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn new_stream_with_adapter(
        &self,
        stream_id: impl Into<String>,
        adapter: PushAdapter<MarketDataResponse>,
    ) -> MarketDataSubscription {
        let stream_id = stream_id.into();
        let mut streams = self.streams.write();

        if let Some(previous) = streams.remove(&stream_id) {
            tracing::info!(stream_id = %stream_id, "replacing market data stream");
            previous.cancel();
        }

        let subscription =
            MarketDataSubscription::open(stream_id.clone(), Arc::clone(&self.transport), adapter);
        streams.insert(stream_id, subscription.clone());
        metrics::set_registry_streams(streams.len());
        drop(streams);

        tracing::debug!(stream_id = %subscription.stream_id(), "market data stream opened");
        subscription
    }

    /// Look up the stream registered under `stream_id`.
    #[must_use]
    pub fn get_stream_by_id(&self, stream_id: &str) -> Option<MarketDataSubscription> {
        self.streams.read().get(stream_id).cloned()
    }

    /// Snapshot of every registered stream.
    #[must_use]
    pub fn get_all_streams(&self) -> HashMap<String, MarketDataSubscription> {
        self.streams.read().clone()
    }

    /// Number of registered streams, including failed ones not yet replaced.
    #[must_use]
    pub fn stream_count(&self) -> usize {
        self.streams.read().len()
    }

    /// Cancel every registered stream. Entries stay registered.
    pub fn cancel_all(&self) {
        let streams = self.streams.read();
        for subscription in streams.values() {
            subscription.cancel();
        }
        tracing::info!(count = streams.len(), "cancelled all market data streams");
    }
}

impl std::fmt::Debug for MarketDataStreamRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketDataStreamRegistry")
            .field("streams", &self.stream_count())
            .finish_non_exhaustive()
    }
}
