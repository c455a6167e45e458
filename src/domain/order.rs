use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub order_date: DateTime<Utc>,
    pub total_amount: BigDecimal,
}

/// Order fields supplied by a client, with the order date already in UTC.
#[derive(Debug, Clone)]
pub struct OrderInput {
    pub customer_id: i32,
    pub order_date: DateTime<Utc>,
    pub total_amount: BigDecimal,
}

/// Read-only projection of an order joined with its customer's name.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWithCustomerName {
    pub order_id: i32,
    pub total_amount: BigDecimal,
    pub order_date: DateTime<Utc>,
    pub customer_name: String,
}

/// A timestamp as sent by a client, with or without a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientTimestamp {
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl ClientTimestamp {
    /// Normalize to UTC.
    ///
    /// A naive value keeps its wall-clock reading and is labelled UTC, so
    /// `2024-01-01T10:00:00` becomes `2024-01-01T10:00:00Z`. A value with an
    /// explicit offset is converted to the same instant.
    pub fn into_utc(self) -> DateTime<Utc> {
        match self {
            ClientTimestamp::Naive(naive) => naive.and_utc(),
            ClientTimestamp::Offset(dt) => dt.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid timestamp '{0}': expected RFC 3339 or YYYY-MM-DDTHH:MM:SS")]
pub struct TimestampParseError(String);

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl FromStr for ClientTimestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(ClientTimestamp::Offset(dt));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(ClientTimestamp::Naive)
            .ok_or_else(|| TimestampParseError(s.to_string()))
    }
}
