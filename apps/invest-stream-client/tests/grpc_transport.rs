//! Tonic transport against an unreachable endpoint.
//!
//! Opening a stream never fails synchronously; connection problems arrive
//! through the error handler.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::net::TcpListener;
use std::time::Duration;

use common::capture_errors;
use invest_stream_client::{ClientConfig, InvestStreamClient, StreamError};

fn unused_local_target() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn config() -> ClientConfig {
    let mut config = ClientConfig::new("t.test-token")
        .with_target(unused_local_target())
        .with_app_name("integration-tests");
    config.connection.connect_timeout = Duration::from_secs(1);
    config
}

#[tokio::test]
async fn eager_connect_to_closed_port_fails() {
    let result = InvestStreamClient::connect(&config()).await;
    assert!(matches!(result, Err(StreamError::Transport(_))));
}

#[tokio::test]
async fn lazy_market_data_stream_reports_connect_failure() {
    let client = InvestStreamClient::connect_lazy(&config()).unwrap();

    let (on_error, mut errors) = capture_errors();
    let stream = client
        .market_data()
        .new_stream("unreachable", |_| {}, Some(on_error));
    stream.subscribe_last_prices(["FIGI1"]);

    let error = errors.next().await;
    assert!(error.code().is_some_and(|code| code != tonic::Code::Ok));
    assert!(!error.is_unauthenticated());
    assert!(client.market_data().get_stream_by_id("unreachable").is_some());
}

#[tokio::test]
async fn lazy_account_stream_reports_connect_failure() {
    let client = InvestStreamClient::connect_lazy(&config()).unwrap();

    let (on_error, mut errors) = capture_errors();
    let _handle = client
        .operations_stream()
        .subscribe_portfolio(|_| {}, Some(on_error), "acc-1");

    assert!(errors.next().await.code().is_some());
}

#[test]
fn malformed_target_is_rejected_up_front() {
    let config = ClientConfig::new("t.test-token").with_target("not a uri");
    assert!(matches!(
        InvestStreamClient::connect_lazy(&config),
        Err(StreamError::Transport(_))
    ));
}
