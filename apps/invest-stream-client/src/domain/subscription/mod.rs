//! Subscription Domain Types
//!
//! Feed kinds, subscription verbs and the account selection used when
//! opening account-scoped streams. Everything here is transport-agnostic;
//! the gRPC layer maps these onto wire messages.
//!
//! # Defaults
//!
//! Order book depth has two documented defaults depending on the entry
//! point:
//!
//! - [`DEFAULT_ORDER_BOOK_DEPTH`] (1) for the no-depth convenience calls
//! - [`DEFAULT_ORDER_BOOK_PARAM_DEPTH`] (10) when the optional depth
//!   parameter is left as `None`

use std::collections::{BTreeSet, HashSet};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Depth used by `subscribe_order_book` / `unsubscribe_order_book`.
pub const DEFAULT_ORDER_BOOK_DEPTH: i32 = 1;

/// Depth used by the `*_with_depth` entry points when no depth is supplied.
pub const DEFAULT_ORDER_BOOK_PARAM_DEPTH: i32 = 10;

/// Interval used by `subscribe_candles` / `unsubscribe_candles`.
pub const DEFAULT_CANDLE_INTERVAL: CandleInterval = CandleInterval::OneMinute;

/// Server-side instrument limit per market data stream.
///
/// Not enforced locally: the server rejects excess instruments with a
/// `LimitIsExceeded` status in the subscription result.
pub const MAX_INSTRUMENTS_PER_STREAM: usize = 300;

// =============================================================================
// Subscription Action
// =============================================================================

/// Verb carried by a control message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionAction {
    /// Start receiving updates.
    Subscribe,
    /// Stop receiving updates.
    Unsubscribe,
}

impl SubscriptionAction {
    /// Label used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subscribe => "subscribe",
            Self::Unsubscribe => "unsubscribe",
        }
    }
}

impl fmt::Display for SubscriptionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Candle Interval
// =============================================================================

/// Candle aggregation interval for candle subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CandleInterval {
    /// One-minute candles.
    #[default]
    OneMinute,
    /// Five-minute candles.
    FiveMinutes,
    /// Fifteen-minute candles.
    FifteenMinutes,
    /// Hourly candles.
    OneHour,
    /// Daily candles.
    OneDay,
}

impl CandleInterval {
    /// Label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::OneHour => "1h",
            Self::OneDay => "1d",
        }
    }
}

// =============================================================================
// Market Data Feed
// =============================================================================

/// Market data feed with its feed-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketDataFeed {
    /// Anonymous trades.
    Trades,
    /// Order book snapshots at the given depth.
    OrderBook {
        /// Number of price levels per side.
        depth: i32,
    },
    /// Candles at the given interval.
    Candles {
        /// Aggregation interval.
        interval: CandleInterval,
    },
    /// Trading status changes.
    Info,
    /// Last traded price.
    LastPrice,
}

impl MarketDataFeed {
    /// Order book feed with [`DEFAULT_ORDER_BOOK_DEPTH`].
    pub const DEFAULT_ORDER_BOOK: Self = Self::OrderBook {
        depth: DEFAULT_ORDER_BOOK_DEPTH,
    };

    /// Candle feed with [`DEFAULT_CANDLE_INTERVAL`].
    pub const DEFAULT_CANDLES: Self = Self::Candles {
        interval: DEFAULT_CANDLE_INTERVAL,
    };

    /// Order book feed for an optional depth, falling back to
    /// [`DEFAULT_ORDER_BOOK_PARAM_DEPTH`].
    #[must_use]
    pub const fn order_book_or_default(depth: Option<i32>) -> Self {
        match depth {
            Some(depth) => Self::OrderBook { depth },
            None => Self::OrderBook {
                depth: DEFAULT_ORDER_BOOK_PARAM_DEPTH,
            },
        }
    }

    /// Feed kind without parameters.
    #[must_use]
    pub const fn kind(&self) -> FeedKind {
        match self {
            Self::Trades => FeedKind::Trades,
            Self::OrderBook { .. } => FeedKind::OrderBook,
            Self::Candles { .. } => FeedKind::Candles,
            Self::Info => FeedKind::Info,
            Self::LastPrice => FeedKind::LastPrice,
        }
    }
}

/// Parameterless market data feed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// Anonymous trades.
    Trades,
    /// Order book.
    OrderBook,
    /// Candles.
    Candles,
    /// Trading status.
    Info,
    /// Last price.
    LastPrice,
}

impl FeedKind {
    /// Label used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trades => "trades",
            Self::OrderBook => "order_book",
            Self::Candles => "candles",
            Self::Info => "info",
            Self::LastPrice => "last_price",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Stream Kind
// =============================================================================

/// The four push streams exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// Bidirectional market data stream.
    MarketData,
    /// Trades executed against the caller's orders.
    Trades,
    /// Portfolio updates.
    Portfolio,
    /// Position changes.
    Positions,
}

impl StreamKind {
    /// Label used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarketData => "market_data",
            Self::Trades => "trades",
            Self::Portfolio => "portfolio",
            Self::Positions => "positions",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Account Selection
// =============================================================================

/// Accounts watched by a portfolio or positions stream.
///
/// Accepts a single id or any collection of ids; the set is fixed once the
/// stream is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountIds(Vec<String>);

impl AccountIds {
    /// Account ids in the order they were supplied.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume into the underlying list.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Number of accounts.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no account was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AccountIds {
    fn from(account_id: &str) -> Self {
        Self(vec![account_id.to_string()])
    }
}

impl From<String> for AccountIds {
    fn from(account_id: String) -> Self {
        Self(vec![account_id])
    }
}

impl From<&String> for AccountIds {
    fn from(account_id: &String) -> Self {
        Self(vec![account_id.clone()])
    }
}

impl From<Vec<String>> for AccountIds {
    fn from(account_ids: Vec<String>) -> Self {
        Self(account_ids)
    }
}

impl From<Vec<&str>> for AccountIds {
    fn from(account_ids: Vec<&str>) -> Self {
        account_ids.into_iter().collect()
    }
}

impl From<&[String]> for AccountIds {
    fn from(account_ids: &[String]) -> Self {
        Self(account_ids.to_vec())
    }
}

impl From<&[&str]> for AccountIds {
    fn from(account_ids: &[&str]) -> Self {
        account_ids.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for AccountIds {
    fn from(account_ids: [&str; N]) -> Self {
        account_ids.into_iter().collect()
    }
}

impl From<HashSet<String>> for AccountIds {
    fn from(account_ids: HashSet<String>) -> Self {
        Self(account_ids.into_iter().collect())
    }
}

impl From<BTreeSet<String>> for AccountIds {
    fn from(account_ids: BTreeSet<String>) -> Self {
        Self(account_ids.into_iter().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for AccountIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
