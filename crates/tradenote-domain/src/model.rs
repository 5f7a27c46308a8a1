//! Extraction result entities
//!
//! These structs mirror the JSON shape the model is asked to produce.
//! Deserialization is all-or-nothing: a missing field or a wrong primitive
//! type fails the whole parse rather than yielding a partially populated
//! value. `PartialEq` is derived, so float fields compare exactly - an
//! intentional strictness choice for fixture verification.

use serde::{Deserialize, Serialize};

/// A single traded security inside an ETF notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Trade direction - Buy, Sell, Hold etc.
    pub direction: String,

    /// Stock ticker, a 1-4 character code (e.g. AAPL, TSLA, MSFT, VZ)
    pub ticker: String,

    /// Company name corresponding to the ticker
    pub company_name: String,

    /// Number of shares traded
    pub shares_traded: f64,

    /// Percentage of the ETF this trade represents
    pub percent_of_etf: f64,
}

/// Trades reported for one ETF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Etf {
    /// ETF ticker code (e.g. ARKK, FSPTX)
    pub etf_ticker: String,

    /// Date of trading, as written in the message (not normalized)
    pub trade_date: String,

    /// Instruments traded under this ETF, in the order they were extracted
    pub stocks: Vec<Instrument>,
}

/// Everything extracted from one trade-notification message.
///
/// Owns its `Etf` list, which in turn owns its `Instrument` lists - a strict
/// tree. List order is significant and preserved from extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailData {
    /// ETFs described in the message, may be empty when no trade data exists
    pub etfs: Vec<Etf>,

    /// Date of the trade notification
    pub trade_notification_date: String,

    /// Email address of the sender
    pub sender_email_id: String,

    /// Date and time of the email, free text as emitted by the model
    pub email_date_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_instrument() -> Instrument {
        Instrument {
            direction: "Buy".to_string(),
            ticker: "AAPL".to_string(),
            company_name: "Apple Inc".to_string(),
            shares_traded: 100.0,
            percent_of_etf: 10.0,
        }
    }

    #[test]
    fn test_deserialize_missing_field_fails() {
        // No `ticker` - must not produce a partial Instrument
        let json = r#"{
            "direction": "Buy",
            "company_name": "Apple Inc",
            "shares_traded": 100.0,
            "percent_of_etf": 10.0
        }"#;
        let result: Result<Instrument, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_wrong_primitive_type_fails() {
        let json = r#"{
            "direction": "Buy",
            "ticker": "AAPL",
            "company_name": "Apple Inc",
            "shares_traded": "one hundred",
            "percent_of_etf": 10.0
        }"#;
        let result: Result<Instrument, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_etf_list_is_valid() {
        let json = r#"{
            "etfs": [],
            "trade_notification_date": "2022-01-01",
            "sender_email_id": "ark@ark-funds.com",
            "email_date_time": "1/12/2024"
        }"#;
        let data: EmailData = serde_json::from_str(json).unwrap();
        assert!(data.etfs.is_empty());
    }

    #[test]
    fn test_float_equality_is_exact() {
        let a = sample_instrument();
        let mut b = sample_instrument();
        b.shares_traded = 100.00001;
        assert_ne!(a, b);
    }

    #[test]
    fn test_instrument_order_is_significant() {
        let buy = sample_instrument();
        let sell = Instrument {
            direction: "Sell".to_string(),
            ticker: "TSLA".to_string(),
            company_name: "Tesla Inc".to_string(),
            shares_traded: 50.0,
            percent_of_etf: 5.0,
        };

        let forward = Etf {
            etf_ticker: "ARKK".to_string(),
            trade_date: "2022-01-01".to_string(),
            stocks: vec![buy.clone(), sell.clone()],
        };
        let reversed = Etf {
            etf_ticker: "ARKK".to_string(),
            trade_date: "2022-01-01".to_string(),
            stocks: vec![sell, buy],
        };
        assert_ne!(forward, reversed);
    }
}
