use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `GET api/{coin}/ticker/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerResponse {
    pub ticker: Ticker,
}

/// 24h snapshot of one trading pair. Upstream sends the decimals as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    pub high: Decimal,
    pub low: Decimal,
    pub vol: Decimal,
    pub last: Decimal,
    /// Best bid.
    pub buy: Decimal,
    /// Best ask.
    pub sell: Decimal,
    #[serde(default)]
    pub open: Option<Decimal>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
}
