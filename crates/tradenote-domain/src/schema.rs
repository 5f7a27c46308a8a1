//! JSON schema description of the extraction output
//!
//! The field descriptions are hints surfaced to the model, not enforced
//! semantics - the model is asked to respect them, and only structurally
//! non-conforming responses are rejected at parse time.

use serde_json::{json, Value};

/// Name of the function/tool the schema is registered under.
pub const SCHEMA_NAME: &str = "email_data";

/// Build the JSON-Schema-style description of [`crate::EmailData`].
///
/// Handed verbatim to the model backend as the function parameter schema.
/// Every object level carries a `required` array covering all of its fields:
/// absence is a validation failure, not a default.
pub fn email_data_schema() -> Value {
    json!({
        "type": "object",
        "description": "Data extracted from an ETF trade notification email",
        "properties": {
            "etfs": {
                "type": "array",
                "description": "List of ETFs described in email having list of shares traded under it",
                "items": etf_schema(),
            },
            "trade_notification_date": {
                "type": "string",
                "description": "Date of trade notification",
            },
            "sender_email_id": {
                "type": "string",
                "description": "Email Id of the email sender.",
            },
            "email_date_time": {
                "type": "string",
                "description": "Date and time of email",
            },
        },
        "required": [
            "etfs",
            "trade_notification_date",
            "sender_email_id",
            "email_date_time",
        ],
    })
}

fn etf_schema() -> Value {
    json!({
        "type": "object",
        "description": "ETF trading data",
        "properties": {
            "etf_ticker": {
                "type": "string",
                "description": "ETF Ticker code. Example: ARKK, FSPTX",
            },
            "trade_date": {
                "type": "string",
                "description": "Date of trading",
            },
            "stocks": {
                "type": "array",
                "description": "List of instruments or shares traded under this etf",
                "items": instrument_schema(),
            },
        },
        "required": ["etf_ticker", "trade_date", "stocks"],
    })
}

fn instrument_schema() -> Value {
    json!({
        "type": "object",
        "description": "Ticker trading details",
        "properties": {
            "direction": {
                "type": "string",
                "description": "ticker trading - Buy, Sell, Hold etc",
            },
            "ticker": {
                "type": "string",
                "description": "Stock Ticker. 1-4 character code. Example: AAPL, TSLA, MSFT, VZ",
            },
            "company_name": {
                "type": "string",
                "description": "Company name corresponding to ticker",
            },
            "shares_traded": {
                "type": "number",
                "description": "Number of shares traded",
            },
            "percent_of_etf": {
                "type": "number",
                "description": "Percentage of ETF",
            },
        },
        "required": [
            "direction",
            "ticker",
            "company_name",
            "shares_traded",
            "percent_of_etf",
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_fields_are_required() {
        let schema = email_data_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec![
                "etfs",
                "trade_notification_date",
                "sender_email_id",
                "email_date_time"
            ]
        );
    }

    #[test]
    fn test_instrument_fields_are_required() {
        let schema = email_data_schema();
        let instrument = &schema["properties"]["etfs"]["items"]["properties"]["stocks"]["items"];
        let required = instrument["required"].as_array().unwrap();
        assert_eq!(required.len(), 5);
        assert_eq!(instrument["properties"]["shares_traded"]["type"], "number");
    }

    #[test]
    fn test_descriptions_surface_field_hints() {
        let schema = email_data_schema();
        let text = schema.to_string();
        assert!(text.contains("ARKK, FSPTX"));
        assert!(text.contains("1-4 character code"));
    }
}
