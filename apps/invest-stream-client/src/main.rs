//! Invest Stream Client Binary
//!
//! Opens the push streams for a set of instruments and accounts and logs
//! every message until interrupted.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin invest-stream-client
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `INVEST_TOKEN`: API access token
//!
//! ## Optional
//! - `INVEST_SANDBOX`: Use the sandbox endpoint (default: false)
//! - `INVEST_TARGET`: Endpoint override
//! - `INVEST_APP_NAME`: Value of the `x-app-name` header
//! - `INVEST_CONNECT_TIMEOUT_SECS`: Connect timeout (default: 10)
//! - `INVEST_KEEPALIVE_SECS`: HTTP/2 keep-alive interval (default: 30)
//! - `INVEST_FIGIS`: Comma-separated instruments for last prices and candles
//! - `INVEST_ACCOUNTS`: Comma-separated accounts for portfolio and positions
//! - `INVEST_METRICS_ADDR`: Serve Prometheus metrics on this address (default: off)
//! - `OTEL_ENABLED`: Export spans over OTLP (default: false)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP collector (default: http://localhost:4317)
//! - `RUST_LOG`: Log level (default: info)

use invest_stream_client::infrastructure::telemetry;
use invest_stream_client::proto::market_data_response::Payload as MarketDataPayload;
use invest_stream_client::proto::portfolio_stream_response::Payload as PortfolioPayload;
use invest_stream_client::proto::positions_stream_response::Payload as PositionsPayload;
use invest_stream_client::proto::trades_stream_response::Payload as TradesPayload;
use invest_stream_client::{
    CandleInterval, ClientConfig, ErrorHandler, InvestStreamClient, MetricsConfig, StreamError,
    StreamHandle, SubscriptionOutcome, init_metrics,
};
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }

    load_dotenv_from_ancestors();

    let _telemetry_guard = telemetry::init(&telemetry::TelemetryConfig::from_env())?;

    tracing::info!("Starting Invest stream client");

    if init_metrics(&MetricsConfig::from_env()?)?.is_none() {
        tracing::info!("INVEST_METRICS_ADDR not set, metrics not exported");
    }

    let config = ClientConfig::from_env()?;
    log_config(&config);

    let client = InvestStreamClient::connect(&config).await?;

    let figis = list_from_env("INVEST_FIGIS");
    if figis.is_empty() {
        tracing::warn!("INVEST_FIGIS is empty, market data stream not opened");
    } else {
        let stream = client.market_data().new_stream(
            "demo",
            log_market_data,
            Some(log_error("market data")),
        );
        stream.subscribe_last_prices(figis.iter().cloned());
        stream.subscribe_candles_with_interval(figis, CandleInterval::OneMinute);
    }

    let mut account_streams: Vec<StreamHandle> = vec![client.orders_stream().subscribe_trades(
        |response| {
            if let Some(TradesPayload::OrderTrades(trades)) = response.payload {
                tracing::info!(
                    order_id = %trades.order_id,
                    figi = %trades.figi,
                    fills = trades.trades.len(),
                    "order trades"
                );
            }
        },
        Some(log_error("order trades")),
    )];

    let accounts = list_from_env("INVEST_ACCOUNTS");
    if !accounts.is_empty() {
        account_streams.push(client.operations_stream().subscribe_portfolio(
            |response| {
                if let Some(PortfolioPayload::Portfolio(portfolio)) = response.payload {
                    tracing::info!(
                        account_id = %portfolio.account_id,
                        positions = portfolio.positions.len(),
                        "portfolio update"
                    );
                }
            },
            Some(log_error("portfolio")),
            accounts.clone(),
        ));
        account_streams.push(client.operations_stream().subscribe_positions(
            |response| {
                if let Some(PositionsPayload::Position(position)) = response.payload {
                    tracing::info!(
                        account_id = %position.account_id,
                        securities = position.securities.len(),
                        "positions update"
                    );
                }
            },
            Some(log_error("positions")),
            accounts,
        ));
    }

    tracing::info!("Streams open, waiting for messages");

    await_shutdown().await;

    client.shutdown();
    for handle in &account_streams {
        handle.cancel();
    }

    tracing::info!("Invest stream client stopped");
    Ok(())
}

fn log_market_data(response: invest_stream_client::proto::MarketDataResponse) {
    match response.payload {
        Some(MarketDataPayload::LastPrice(price)) => {
            tracing::info!(figi = %price.figi, price = ?price.price, "last price");
        }
        Some(MarketDataPayload::Candle(candle)) => {
            tracing::info!(
                figi = %candle.figi,
                close = ?candle.close,
                volume = candle.volume,
                "candle"
            );
        }
        Some(MarketDataPayload::SubscribeLastPriceResponse(ack)) => {
            log_outcome("last price", &ack);
        }
        Some(MarketDataPayload::SubscribeCandlesResponse(ack)) => {
            log_outcome("candles", &ack);
        }
        Some(MarketDataPayload::Ping(_)) | None => {}
        Some(other) => tracing::debug!(payload = ?other, "market data"),
    }
}

fn log_outcome(feed: &str, outcome: &impl SubscriptionOutcome) {
    let failed = outcome.failed_instruments();
    if failed.is_empty() {
        tracing::info!(feed, tracking_id = outcome.tracking_id(), "subscription confirmed");
    } else {
        tracing::warn!(
            feed,
            tracking_id = outcome.tracking_id(),
            failed = ?failed,
            "subscription partially rejected"
        );
    }
}

fn log_error(stream: &'static str) -> ErrorHandler {
    Box::new(move |error: StreamError| {
        tracing::error!(
            stream,
            error = %error,
            tracking_id = error.tracking_id().unwrap_or("-"),
            "stream failed"
        );
    })
}

fn list_from_env(key: &str) -> Vec<String> {
    std::env::var(key)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Log the parsed configuration.
fn log_config(config: &ClientConfig) {
    tracing::info!(
        environment = config.environment.as_str(),
        endpoint = config.endpoint(),
        app_name = config.app_name.as_deref().unwrap_or("-"),
        "Configuration loaded"
    );
    tracing::debug!(
        connect_timeout_secs = config.connection.connect_timeout.as_secs(),
        keepalive_secs = config.connection.keepalive_interval.as_secs(),
        "Connection settings"
    );
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv_from_ancestors() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for Ctrl+C or SIGTERM.
async fn await_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
