//! Application Services
//!
//! The streaming session layer:
//!
//! - [`push`]: adapter from stream signals to caller closures
//! - [`channel`]: stream driver and the market data control handle
//! - [`registry`]: named market data streams with replace-on-reopen
//! - [`account`]: order trades, portfolio and positions streams
//! - [`requests`]: control message builders

pub mod account;
pub mod channel;
pub mod push;
pub mod registry;
pub mod requests;

pub use account::{OperationsStreamService, OrdersStreamService};
pub use channel::{MarketDataSubscription, StreamHandle};
pub use push::{CompletionHandler, ErrorHandler, MessageProcessor, PushAdapter};
pub use registry::MarketDataStreamRegistry;
