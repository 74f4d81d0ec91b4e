//! Control message builders.
//!
//! Every builder batches all instrument ids into one request: subscribing
//! N instruments produces one message with N entries.

use crate::domain::subscription::{AccountIds, CandleInterval, MarketDataFeed, SubscriptionAction};
use crate::proto::{
    self, CandleInstrument, GetMySubscriptions, InfoInstrument, LastPriceInstrument,
    MarketDataRequest, OrderBookInstrument, PingRequest, PortfolioStreamRequest,
    PositionsStreamRequest, SubscribeCandlesRequest, SubscribeInfoRequest,
    SubscribeLastPriceRequest, SubscribeOrderBookRequest, SubscribeTradesRequest, TradeInstrument,
    TradesStreamRequest, market_data_request::Payload,
};

// =============================================================================
// Wire Enums
// =============================================================================

const fn wire_action(action: SubscriptionAction) -> proto::SubscriptionAction {
    match action {
        SubscriptionAction::Subscribe => proto::SubscriptionAction::Subscribe,
        SubscriptionAction::Unsubscribe => proto::SubscriptionAction::Unsubscribe,
    }
}

/// Wire interval for a candle interval.
#[must_use]
pub const fn wire_interval(interval: CandleInterval) -> proto::SubscriptionInterval {
    match interval {
        CandleInterval::OneMinute => proto::SubscriptionInterval::OneMinute,
        CandleInterval::FiveMinutes => proto::SubscriptionInterval::FiveMinutes,
        CandleInterval::FifteenMinutes => proto::SubscriptionInterval::FifteenMinutes,
        CandleInterval::OneHour => proto::SubscriptionInterval::OneHour,
        CandleInterval::OneDay => proto::SubscriptionInterval::OneDay,
    }
}

// =============================================================================
// Market Data
// =============================================================================

/// Build one subscribe/unsubscribe request for `feed` covering every id.
///
/// Ids go into `instrument_id`, which the API resolves as either a FIGI or
/// an instrument uid.
#[must_use]
pub fn market_data_request(
    action: SubscriptionAction,
    feed: MarketDataFeed,
    instrument_ids: Vec<String>,
) -> MarketDataRequest {
    let subscription_action = wire_action(action) as i32;

    let payload = match feed {
        MarketDataFeed::Trades => Payload::SubscribeTradesRequest(SubscribeTradesRequest {
            subscription_action,
            instruments: instrument_ids
                .into_iter()
                .map(|instrument_id| TradeInstrument {
                    instrument_id,
                    ..Default::default()
                })
                .collect(),
        }),
        MarketDataFeed::OrderBook { depth } => {
            Payload::SubscribeOrderBookRequest(SubscribeOrderBookRequest {
                subscription_action,
                instruments: instrument_ids
                    .into_iter()
                    .map(|instrument_id| OrderBookInstrument {
                        instrument_id,
                        depth,
                        ..Default::default()
                    })
                    .collect(),
            })
        }
        MarketDataFeed::Candles { interval } => {
            let interval = wire_interval(interval) as i32;
            Payload::SubscribeCandlesRequest(SubscribeCandlesRequest {
                subscription_action,
                instruments: instrument_ids
                    .into_iter()
                    .map(|instrument_id| CandleInstrument {
                        instrument_id,
                        interval,
                        ..Default::default()
                    })
                    .collect(),
                waiting_close: false,
            })
        }
        MarketDataFeed::Info => Payload::SubscribeInfoRequest(SubscribeInfoRequest {
            subscription_action,
            instruments: instrument_ids
                .into_iter()
                .map(|instrument_id| InfoInstrument {
                    instrument_id,
                    ..Default::default()
                })
                .collect(),
        }),
        MarketDataFeed::LastPrice => {
            Payload::SubscribeLastPriceRequest(SubscribeLastPriceRequest {
                subscription_action,
                instruments: instrument_ids
                    .into_iter()
                    .map(|instrument_id| LastPriceInstrument {
                        instrument_id,
                        ..Default::default()
                    })
                    .collect(),
            })
        }
    };

    MarketDataRequest {
        payload: Some(payload),
    }
}

/// Ask the server to list the stream's active subscriptions.
#[must_use]
pub const fn get_my_subscriptions_request() -> MarketDataRequest {
    MarketDataRequest {
        payload: Some(Payload::GetMySubscriptions(GetMySubscriptions {})),
    }
}

/// Client-initiated ping on the market data stream.
#[must_use]
pub fn ping_request() -> MarketDataRequest {
    MarketDataRequest {
        payload: Some(Payload::Ping(PingRequest {
            time: Some(prost_types::Timestamp::from(std::time::SystemTime::now())),
        })),
    }
}

/// Number of instruments carried by a request, for logging.
#[must_use]
pub fn instrument_count(request: &MarketDataRequest) -> usize {
    match &request.payload {
        Some(Payload::SubscribeTradesRequest(r)) => r.instruments.len(),
        Some(Payload::SubscribeOrderBookRequest(r)) => r.instruments.len(),
        Some(Payload::SubscribeCandlesRequest(r)) => r.instruments.len(),
        Some(Payload::SubscribeInfoRequest(r)) => r.instruments.len(),
        Some(Payload::SubscribeLastPriceRequest(r)) => r.instruments.len(),
        Some(Payload::GetMySubscriptions(_) | Payload::Ping(_)) | None => 0,
    }
}

// =============================================================================
// Account Streams
// =============================================================================

/// Order trades request; the server scopes it to the token's accounts.
#[must_use]
pub const fn trades_stream_request() -> TradesStreamRequest {
    TradesStreamRequest {
        accounts: Vec::new(),
    }
}

/// Portfolio request for a fixed account set.
#[must_use]
pub fn portfolio_stream_request(accounts: AccountIds) -> PortfolioStreamRequest {
    PortfolioStreamRequest {
        accounts: accounts.into_vec(),
    }
}

/// Positions request for a fixed account set.
#[must_use]
pub fn positions_stream_request(accounts: AccountIds) -> PositionsStreamRequest {
    PositionsStreamRequest {
        accounts: accounts.into_vec(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn candles_request_carries_interval_per_instrument() {
        let request = market_data_request(
            SubscriptionAction::Subscribe,
            MarketDataFeed::Candles {
                interval: CandleInterval::FiveMinutes,
            },
            ids(&["FIGI1", "FIGI2"]),
        );

        let Some(Payload::SubscribeCandlesRequest(candles)) = request.payload else {
            panic!("expected candles request");
        };
        assert_eq!(
            candles.subscription_action(),
            proto::SubscriptionAction::Subscribe
        );
        let got: Vec<_> = candles
            .instruments
            .iter()
            .map(|i| (i.instrument_id.as_str(), i.interval()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("FIGI1", proto::SubscriptionInterval::FiveMinutes),
                ("FIGI2", proto::SubscriptionInterval::FiveMinutes),
            ]
        );
    }

    #[test_case(MarketDataFeed::DEFAULT_ORDER_BOOK, 1 ; "convenience default")]
    #[test_case(MarketDataFeed::order_book_or_default(None), 10 ; "parameter default")]
    #[test_case(MarketDataFeed::order_book_or_default(Some(5)), 5 ; "explicit depth")]
    fn order_book_depth(feed: MarketDataFeed, expected: i32) {
        let request = market_data_request(SubscriptionAction::Subscribe, feed, ids(&["BBG000B9XRY4"]));

        let Some(Payload::SubscribeOrderBookRequest(book)) = request.payload else {
            panic!("expected order book request");
        };
        assert_eq!(book.instruments[0].depth, expected);
    }

    #[test]
    fn unsubscribe_sets_action() {
        let request =
            market_data_request(SubscriptionAction::Unsubscribe, MarketDataFeed::Info, ids(&["X"]));

        let Some(Payload::SubscribeInfoRequest(info)) = request.payload else {
            panic!("expected info request");
        };
        assert_eq!(
            info.subscription_action(),
            proto::SubscriptionAction::Unsubscribe
        );
    }

    #[test]
    fn empty_instrument_list_still_builds_request() {
        let request =
            market_data_request(SubscriptionAction::Subscribe, MarketDataFeed::LastPrice, vec![]);
        assert!(matches!(
            request.payload,
            Some(Payload::SubscribeLastPriceRequest(ref r)) if r.instruments.is_empty()
        ));
    }

    #[test]
    fn control_requests_carry_no_instruments() {
        assert_eq!(instrument_count(&get_my_subscriptions_request()), 0);
        assert_eq!(instrument_count(&ping_request()), 0);
    }

    #[test]
    fn account_requests_keep_accounts() {
        let portfolio = portfolio_stream_request(AccountIds::from(["a1", "a2"]));
        assert_eq!(portfolio.accounts, ids(&["a1", "a2"]));

        let positions = positions_stream_request(AccountIds::from("a1"));
        assert_eq!(positions.accounts, ids(&["a1"]));

        assert!(trades_stream_request().accounts.is_empty());
    }

    fn any_feed() -> impl Strategy<Value = MarketDataFeed> {
        prop_oneof![
            Just(MarketDataFeed::Trades),
            (1i32..=50).prop_map(|depth| MarketDataFeed::OrderBook { depth }),
            Just(MarketDataFeed::DEFAULT_CANDLES),
            Just(MarketDataFeed::Info),
            Just(MarketDataFeed::LastPrice),
        ]
    }

    proptest! {
        #[test]
        fn one_request_holds_every_instrument(
            feed in any_feed(),
            instruments in proptest::collection::vec("[A-Z0-9]{12}", 1..64),
        ) {
            let request = market_data_request(
                SubscriptionAction::Subscribe,
                feed,
                instruments.clone(),
            );
            prop_assert_eq!(instrument_count(&request), instruments.len());
        }
    }
}
