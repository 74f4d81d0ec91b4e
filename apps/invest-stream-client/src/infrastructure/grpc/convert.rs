//! Conversions between wire messages and domain values.
//!
//! Prices travel as `units` plus `nano` (billionths). Subscription responses
//! carry one status per instrument; [`SubscriptionOutcome`] gives a uniform
//! view over all five kinds.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::proto::{
    MoneyValue, Quotation, SubscribeCandlesResponse, SubscribeInfoResponse,
    SubscribeLastPriceResponse, SubscribeOrderBookResponse, SubscribeTradesResponse,
    SubscriptionStatus,
};
use crate::domain::money::Money;

const NANO_SCALE: u32 = 9;
const NANOS_PER_UNIT: i128 = 1_000_000_000;

/// Convert a wire quotation into a decimal.
#[must_use]
pub fn quotation_to_decimal(quotation: &Quotation) -> Decimal {
    fixed_to_decimal(quotation.units, quotation.nano)
}

/// Convert a decimal into a wire quotation.
///
/// Returns `None` if the integer part does not fit in `i64`. Digits beyond
/// nine decimal places are truncated.
#[must_use]
pub fn decimal_to_quotation(value: Decimal) -> Option<Quotation> {
    let units = value.trunc().to_i64()?;
    let nano = (value.fract() * Decimal::from(1_000_000_000_i64))
        .trunc()
        .to_i32()?;
    Some(Quotation { units, nano })
}

/// Convert a wire money value into [`Money`].
#[must_use]
pub fn money_value_to_money(value: &MoneyValue) -> Money {
    Money::new(
        value.currency.clone(),
        fixed_to_decimal(value.units, value.nano),
    )
}

/// Convert a protobuf timestamp into UTC time.
///
/// Returns `None` for out-of-range values.
#[must_use]
pub fn timestamp_to_datetime(timestamp: &prost_types::Timestamp) -> Option<DateTime<Utc>> {
    let nanos = u32::try_from(timestamp.nanos).ok()?;
    DateTime::from_timestamp(timestamp.seconds, nanos)
}

fn fixed_to_decimal(units: i64, nano: i32) -> Decimal {
    let raw = i128::from(units) * NANOS_PER_UNIT + i128::from(nano);
    Decimal::from_i128_with_scale(raw, NANO_SCALE).normalize()
}

// =============================================================================
// Subscription outcomes
// =============================================================================

/// Per-instrument statuses of a subscribe/unsubscribe acknowledgement.
pub trait SubscriptionOutcome {
    /// Tracking id of the acknowledged request.
    fn tracking_id(&self) -> &str;

    /// `(instrument, status)` pairs; the instrument is the FIGI when present,
    /// otherwise the instrument UID.
    fn statuses(&self) -> Vec<(&str, SubscriptionStatus)>;

    /// Instruments whose status is not `Success`.
    fn failed_instruments(&self) -> Vec<(&str, SubscriptionStatus)> {
        self.statuses()
            .into_iter()
            .filter(|(_, status)| *status != SubscriptionStatus::Success)
            .collect()
    }

    /// Whether every instrument was acknowledged with `Success`.
    fn is_fully_successful(&self) -> bool {
        self.failed_instruments().is_empty()
    }
}

fn instrument_key<'a>(figi: &'a str, instrument_uid: &'a str) -> &'a str {
    if figi.is_empty() { instrument_uid } else { figi }
}

macro_rules! subscription_outcome {
    ($response:ty, $field:ident) => {
        impl SubscriptionOutcome for $response {
            fn tracking_id(&self) -> &str {
                &self.tracking_id
            }

            fn statuses(&self) -> Vec<(&str, SubscriptionStatus)> {
                self.$field
                    .iter()
                    .map(|s| {
                        (
                            instrument_key(&s.figi, &s.instrument_uid),
                            s.subscription_status(),
                        )
                    })
                    .collect()
            }
        }
    };
}

subscription_outcome!(SubscribeCandlesResponse, candles_subscriptions);
subscription_outcome!(SubscribeOrderBookResponse, order_book_subscriptions);
subscription_outcome!(SubscribeTradesResponse, trade_subscriptions);
subscription_outcome!(SubscribeInfoResponse, info_subscriptions);
subscription_outcome!(SubscribeLastPriceResponse, last_price_subscriptions);

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;

    use super::*;
    use crate::proto::{CandleSubscription, LastPriceSubscription};

    #[test_case(114, 250_000_000, "114.25" ; "positive with fraction")]
    #[test_case(0, 0, "0" ; "zero")]
    #[test_case(-3, -500_000_000, "-3.5" ; "negative")]
    #[test_case(0, 1, "0.000000001" ; "one nano")]
    fn quotation_to_decimal_cases(units: i64, nano: i32, expected: &str) {
        let q = Quotation { units, nano };
        assert_eq!(
            quotation_to_decimal(&q),
            Decimal::from_str(expected).unwrap()
        );
    }

    #[test]
    fn decimal_to_quotation_splits_units_and_nanos() {
        let q = decimal_to_quotation(Decimal::from_str("-12.75").unwrap()).unwrap();
        assert_eq!(q.units, -12);
        assert_eq!(q.nano, -750_000_000);
    }

    #[test]
    fn decimal_to_quotation_truncates_extra_digits() {
        let q = decimal_to_quotation(Decimal::from_str("1.0000000019").unwrap()).unwrap();
        assert_eq!(q.units, 1);
        assert_eq!(q.nano, 1);
    }

    #[test]
    fn money_value_keeps_currency() {
        let value = MoneyValue {
            currency: "rub".to_string(),
            units: 1500,
            nano: 100_000_000,
        };
        let money = money_value_to_money(&value);
        assert_eq!(money.currency, "rub");
        assert_eq!(money.amount, Decimal::from_str("1500.1").unwrap());
    }

    #[test]
    fn timestamp_conversion() {
        let ts = prost_types::Timestamp {
            seconds: 1_700_000_000,
            nanos: 5,
        };
        let dt = timestamp_to_datetime(&ts).unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
        assert_eq!(dt.timestamp_subsec_nanos(), 5);

        let negative = prost_types::Timestamp {
            seconds: 0,
            nanos: -1,
        };
        assert!(timestamp_to_datetime(&negative).is_none());
    }

    #[test]
    fn candles_outcome_reports_failures() {
        let response = SubscribeCandlesResponse {
            tracking_id: "track-1".to_string(),
            candles_subscriptions: vec![
                CandleSubscription {
                    figi: "FIGI1".to_string(),
                    interval: 2,
                    subscription_status: SubscriptionStatus::Success as i32,
                    instrument_uid: String::new(),
                },
                CandleSubscription {
                    figi: String::new(),
                    interval: 2,
                    subscription_status: SubscriptionStatus::InstrumentNotFound as i32,
                    instrument_uid: "uid-2".to_string(),
                },
            ],
        };

        assert_eq!(response.tracking_id(), "track-1");
        assert!(!response.is_fully_successful());
        assert_eq!(
            response.failed_instruments(),
            vec![("uid-2", SubscriptionStatus::InstrumentNotFound)]
        );
    }

    #[test]
    fn last_price_outcome_all_successful() {
        let response = SubscribeLastPriceResponse {
            tracking_id: String::new(),
            last_price_subscriptions: vec![LastPriceSubscription {
                figi: "FIGI1".to_string(),
                subscription_status: SubscriptionStatus::Success as i32,
                instrument_uid: "uid-1".to_string(),
            }],
        };

        assert!(response.is_fully_successful());
        assert_eq!(
            response.statuses(),
            vec![("FIGI1", SubscriptionStatus::Success)]
        );
    }
}
