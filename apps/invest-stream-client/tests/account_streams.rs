//! Order trades, portfolio and positions streams.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::BTreeSet;

use common::{FakeTransport, capture, capture_errors};
use invest_stream_client::proto::portfolio_stream_response::Payload as PortfolioPayload;
use invest_stream_client::proto::positions_stream_response::Payload as PositionsPayload;
use invest_stream_client::proto::trades_stream_response::Payload as TradesPayload;
use invest_stream_client::proto::{
    AccountSubscriptionStatus, MoneyValue, OrderTrade, OrderTrades, PortfolioResponse,
    PortfolioStreamResponse, PortfolioSubscriptionResult, PositionData, PositionsMoney,
    PositionsStreamResponse, Quotation, TradesStreamResponse,
};
use invest_stream_client::{InvestStreamClient, StreamKind};

#[tokio::test]
async fn trades_stream_delivers_order_trades() {
    let transport = FakeTransport::new();
    let client = InvestStreamClient::with_transport(transport.clone());

    let (processor, mut messages) = capture();
    let handle = client.orders_stream().subscribe_trades(processor, None);
    assert_eq!(handle.kind(), StreamKind::Trades);

    let mut conn = transport.next_trades().await;
    let request = conn.next_request().await;
    assert!(request.accounts.is_empty());

    let update = TradesStreamResponse {
        payload: Some(TradesPayload::OrderTrades(OrderTrades {
            order_id: "order-1".to_string(),
            figi: "FIGI1".to_string(),
            account_id: "acc-1".to_string(),
            trades: vec![OrderTrade {
                price: Some(Quotation {
                    units: 250,
                    nano: 0,
                }),
                quantity: 3,
                trade_id: "trade-1".to_string(),
                date_time: None,
            }],
            ..Default::default()
        })),
    };
    conn.push(update.clone());

    assert_eq!(messages.next().await, update);
}

#[tokio::test]
async fn portfolio_stream_sends_accounts_once_and_passes_results_through() {
    let transport = FakeTransport::new();
    let client = InvestStreamClient::with_transport(transport.clone());

    let (processor, mut messages) = capture();
    let _handle =
        client
            .operations_stream()
            .subscribe_portfolio(processor, None, ["acc-1", "acc-2"]);

    let mut conn = transport.next_portfolio().await;
    assert_eq!(conn.next_request().await.accounts, ["acc-1", "acc-2"]);
    assert!(conn.try_next_request().await.is_none());

    let result = PortfolioStreamResponse {
        payload: Some(PortfolioPayload::Subscriptions(PortfolioSubscriptionResult {
            accounts: vec![AccountSubscriptionStatus {
                account_id: "acc-1".to_string(),
                subscription_status: 1,
            }],
            tracking_id: "track-1".to_string(),
        })),
    };
    let portfolio = PortfolioStreamResponse {
        payload: Some(PortfolioPayload::Portfolio(PortfolioResponse {
            account_id: "acc-1".to_string(),
            total_amount_portfolio: Some(MoneyValue {
                currency: "rub".to_string(),
                units: 1000,
                nano: 0,
            }),
            ..Default::default()
        })),
    };

    conn.push(result.clone());
    conn.push(portfolio.clone());

    assert_eq!(messages.next().await, result);
    assert_eq!(messages.next().await, portfolio);
}

#[tokio::test]
async fn positions_stream_accepts_any_account_collection() {
    let transport = FakeTransport::new();
    let client = InvestStreamClient::with_transport(transport.clone());

    let accounts: BTreeSet<String> = ["b", "a"].into_iter().map(String::from).collect();
    let (processor, mut messages) = capture();
    let _handle = client
        .operations_stream()
        .subscribe_positions(processor, None, accounts);

    let mut conn = transport.next_positions().await;
    assert_eq!(conn.next_request().await.accounts, ["a", "b"]);

    let update = PositionsStreamResponse {
        payload: Some(PositionsPayload::Position(PositionData {
            account_id: "a".to_string(),
            money: vec![PositionsMoney {
                available_value: Some(MoneyValue {
                    currency: "usd".to_string(),
                    units: 5,
                    nano: 0,
                }),
                blocked_value: None,
            }],
            ..Default::default()
        })),
    };
    conn.push(update.clone());

    assert_eq!(messages.next().await, update);
}

#[tokio::test]
async fn account_stream_error_reaches_handler() {
    let transport = FakeTransport::new();
    let client = InvestStreamClient::with_transport(transport.clone());

    let (on_error, mut errors) = capture_errors();
    let _handle = client
        .operations_stream()
        .subscribe_portfolio(|_| {}, Some(on_error), "acc-1");

    let conn = transport.next_portfolio().await;
    conn.fail(tonic::Status::permission_denied("not your account"));

    let error = errors.next().await;
    assert_eq!(error.code(), Some(tonic::Code::PermissionDenied));
    errors.assert_silent().await;
}

#[tokio::test]
async fn connect_failure_reaches_handler() {
    let transport = FakeTransport::failing(tonic::Code::Unauthenticated);
    let client = InvestStreamClient::with_transport(transport.clone());

    let (on_error, mut errors) = capture_errors();
    let _handle = client.orders_stream().subscribe_trades(|_| {}, Some(on_error));

    assert!(errors.next().await.is_unauthenticated());
}

#[tokio::test]
async fn overlapping_streams_are_independent() {
    let transport = FakeTransport::new();
    let client = InvestStreamClient::with_transport(transport.clone());

    let (first, mut first_messages) = capture();
    let first_handle = client
        .operations_stream()
        .subscribe_positions(first, None, "acc-1");
    let first_conn = transport.next_positions().await;

    let (second, mut second_messages) = capture();
    let _second_handle = client
        .operations_stream()
        .subscribe_positions(second, None, "acc-1");
    let second_conn = transport.next_positions().await;

    first_handle.cancel();
    first_conn.wait_closed().await;
    assert!(!second_conn.is_closed());

    let update = PositionsStreamResponse {
        payload: Some(PositionsPayload::Position(PositionData {
            account_id: "acc-1".to_string(),
            ..Default::default()
        })),
    };
    first_conn.push(update.clone());
    second_conn.push(update.clone());

    assert_eq!(second_messages.next().await, update);
    first_messages.assert_silent().await;
}
