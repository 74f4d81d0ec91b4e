//! Push-callback adapter.
//!
//! Bridges the [`StreamObserver`] signals of a stream to caller-supplied
//! closures: a mandatory message processor, an optional error handler and
//! an optional completion hook. Messages are forwarded synchronously and
//! unfiltered.

use crate::application::ports::{StreamError, StreamObserver};

/// Handles every inbound message of a stream.
pub type MessageProcessor<T> = Box<dyn Fn(T) + Send + Sync>;

/// Handles the terminal error of a stream.
pub type ErrorHandler = Box<dyn Fn(StreamError) + Send + Sync>;

/// Runs when the server closes a stream normally.
pub type CompletionHandler = Box<dyn Fn() + Send + Sync>;

/// Forwards stream signals to caller closures.
pub struct PushAdapter<T> {
    processor: MessageProcessor<T>,
    on_error: Option<ErrorHandler>,
    on_completed: Option<CompletionHandler>,
}

impl<T> PushAdapter<T> {
    /// Adapter with only a message processor.
    pub fn new<P>(processor: P) -> Self
    where
        P: Fn(T) + Send + Sync + 'static,
    {
        Self {
            processor: Box::new(processor),
            on_error: None,
            on_completed: None,
        }
    }

    /// Attach an error handler.
    #[must_use]
    pub fn with_error_handler<E>(mut self, handler: E) -> Self
    where
        E: Fn(StreamError) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(handler));
        self
    }

    /// Attach an already boxed, possibly absent, error handler.
    #[must_use]
    pub fn with_optional_error_handler(mut self, handler: Option<ErrorHandler>) -> Self {
        self.on_error = handler;
        self
    }

    /// Attach a completion hook.
    #[must_use]
    pub fn with_completion_handler<C>(mut self, handler: C) -> Self
    where
        C: Fn() + Send + Sync + 'static,
    {
        self.on_completed = Some(Box::new(handler));
        self
    }

    /// Whether an error handler is attached.
    #[must_use]
    pub const fn has_error_handler(&self) -> bool {
        self.on_error.is_some()
    }
}

impl<T> StreamObserver<T> for PushAdapter<T>
where
    T: Send,
{
    fn on_next(&self, message: T) {
        (self.processor)(message);
    }

    fn on_error(&self, error: StreamError) {
        match &self.on_error {
            Some(handler) => handler(error),
            None => {
                tracing::warn!(error = %error, "stream error dropped: no error handler");
            }
        }
    }

    fn on_completed(&self) {
        match &self.on_completed {
            Some(handler) => handler(),
            None => tracing::debug!("stream completed"),
        }
    }
}

impl<T> std::fmt::Debug for PushAdapter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushAdapter")
            .field("on_error", &self.on_error.is_some())
            .field("on_completed", &self.on_completed.is_some())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Message(u32),
        Error(String),
    }

    #[test]
    fn message_then_error_delivered_once_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let messages = Arc::clone(&log);
        let errors = Arc::clone(&log);

        let adapter = PushAdapter::new(move |m: u32| messages.lock().push(Event::Message(m)))
            .with_error_handler(move |e| errors.lock().push(Event::Error(e.to_string())));

        adapter.on_next(7);
        adapter.on_error(StreamError::from(tonic::Status::unavailable("gone")));

        let log = log.lock();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], Event::Message(7));
        assert!(matches!(&log[1], Event::Error(msg) if msg.contains("gone")));
    }

    #[test]
    fn missing_error_handler_drops_error() {
        let received = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&received);
        let adapter = PushAdapter::new(move |_: u32| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!adapter.has_error_handler());
        adapter.on_error(StreamError::from(tonic::Status::internal("boom")));
        adapter.on_completed();

        assert_eq!(received.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn completion_hook_runs() {
        let completed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&completed);
        let adapter = PushAdapter::new(|_: u32| {})
            .with_completion_handler(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        adapter.on_completed();

        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn optional_handler_none_keeps_adapter_usable() {
        let adapter = PushAdapter::new(|_: u32| {}).with_optional_error_handler(None);
        assert!(!adapter.has_error_handler());
        adapter.on_error(StreamError::from(tonic::Status::cancelled("bye")));
    }
}
