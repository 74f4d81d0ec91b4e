//! gRPC Transport
//!
//! Tonic-based adapter for the Invest API streaming services.
//!
//! # Architecture
//!
//! Every stream shares one HTTP/2 [`tonic::transport::Channel`]. Each call
//! goes through [`AuthInterceptor`], which attaches the bearer token and the
//! application name, then opens one RPC on the shared connection:
//!
//! 1. `MarketDataStream` is bidirectional; control messages flow upstream
//! 2. `TradesStream`, `PortfolioStream` and `PositionsStream` are
//!    server-streaming and take their whole subscription in the first request
//!
//! The wire schema in `generated/` is maintained by hand against the public
//! Invest API contract and checked in. There is no `build.rs` and no protoc
//! step.

pub mod convert;
pub mod interceptor;
pub mod transport;

// Allow clippy warnings and missing docs in generated code
#[allow(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
pub mod proto {
    include!("generated/tinkoff.public.invest.api.contract.v1.rs");
}

pub use interceptor::AuthInterceptor;
pub use transport::GrpcTransport;

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::proto::market_data_request::Payload as RequestPayload;
    use super::proto::market_data_response::Payload as ResponsePayload;
    use super::proto::{
        LastPrice, LastPriceInstrument, MarketDataRequest, MarketDataResponse, Quotation,
        SubscribeLastPriceRequest, SubscriptionAction,
    };

    #[test]
    fn last_price_subscription_encodes_contract_tags() {
        let request = MarketDataRequest {
            payload: Some(RequestPayload::SubscribeLastPriceRequest(
                SubscribeLastPriceRequest {
                    subscription_action: SubscriptionAction::Subscribe as i32,
                    instruments: vec![LastPriceInstrument {
                        figi: String::new(),
                        instrument_id: "FIGI1".to_string(),
                    }],
                },
            )),
        };

        // payload #5 { action #1 = 1, instruments #2 { instrument_id #2 } }
        let expected = [
            0x2A, 0x0B, 0x08, 0x01, 0x12, 0x07, 0x12, 0x05, b'F', b'I', b'G', b'I', b'1',
        ];
        assert_eq!(request.encode_to_vec(), expected);
    }

    #[test]
    fn last_price_update_decodes_contract_tags() {
        // payload #11 { figi #1 = "F", price #2 { units #1 = 5 } }
        let bytes = [0x5A, 0x07, 0x0A, 0x01, b'F', 0x12, 0x02, 0x08, 0x05];
        let response = MarketDataResponse::decode(&bytes[..]).unwrap();

        assert_eq!(
            response.payload,
            Some(ResponsePayload::LastPrice(LastPrice {
                figi: "F".to_string(),
                price: Some(Quotation { units: 5, nano: 0 }),
                time: None,
                instrument_uid: String::new(),
            }))
        );
    }
}
