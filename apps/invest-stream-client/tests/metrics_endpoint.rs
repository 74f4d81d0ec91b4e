//! Prometheus exporter served over HTTP.
//!
//! Installs the global recorder, so it lives in its own test binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::net::TcpListener;
use std::time::Duration;

use invest_stream_client::infrastructure::metrics::record_stream_opened;
use invest_stream_client::{MetricsConfig, StreamKind, init_metrics};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

fn unused_local_addr() -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

async fn scrape(addr: std::net::SocketAddr) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /metrics HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut body = String::new();
    stream.read_to_string(&mut body).await.unwrap();
    body
}

#[tokio::test]
async fn configured_listener_serves_recorded_metrics() {
    let addr = unused_local_addr();
    let config = MetricsConfig {
        listen_addr: Some(addr),
    };

    assert_eq!(init_metrics(&config).unwrap(), Some(addr));
    assert_eq!(
        init_metrics(&MetricsConfig::default()).unwrap(),
        Some(addr)
    );

    record_stream_opened(StreamKind::MarketData);

    let response = tokio::time::timeout(Duration::from_secs(5), scrape(addr))
        .await
        .expect("scrape timed out");
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("invest_stream_streams_opened_total{stream=\"market_data\"} 1"));
}
