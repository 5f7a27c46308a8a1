//! Parse the model payload into the typed result
//!
//! Parsing is all-or-nothing: any missing field, wrong primitive type or
//! malformed nesting fails the whole parse. No partial `EmailData` is ever
//! produced.

use crate::error::ExtractError;
use tradenote_domain::EmailData;

/// Parse a raw model payload into [`EmailData`].
pub fn parse_response(payload: &str) -> Result<EmailData, ExtractError> {
    let json_str = extract_json(payload)?;

    serde_json::from_str::<EmailData>(&json_str)
        .map_err(|e| ExtractError::SchemaValidation(e.to_string()))
}

/// Extract JSON from the payload, handling markdown code blocks
///
/// Models sometimes wrap JSON in markdown fences even when asked not to.
fn extract_json(payload: &str) -> Result<String, ExtractError> {
    let trimmed = payload.trim();

    if trimmed.is_empty() {
        return Err(ExtractError::SchemaValidation(
            "Empty response payload".to_string(),
        ));
    }

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractError::SchemaValidation(
                "Empty code block".to_string(),
            ));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_PAYLOAD: &str = r#"{
        "etfs": [
            {
                "etf_ticker": "ARKK",
                "trade_date": "2022-01-01",
                "stocks": [
                    {
                        "direction": "Buy",
                        "ticker": "AAPL",
                        "company_name": "Apple Inc",
                        "shares_traded": 100.0,
                        "percent_of_etf": 10.0
                    }
                ]
            }
        ],
        "trade_notification_date": "2022-01-01",
        "sender_email_id": "ark@ark-funds.com",
        "email_date_time": "1/12/2024"
    }"#;

    #[test]
    fn test_parse_valid_payload() {
        let data = parse_response(VALID_PAYLOAD).unwrap();
        assert_eq!(data.etfs.len(), 1);
        assert_eq!(data.etfs[0].etf_ticker, "ARKK");
        assert_eq!(data.etfs[0].stocks[0].direction, "Buy");
        assert_eq!(data.etfs[0].stocks[0].shares_traded, 100.0);
        assert_eq!(data.sender_email_id, "ark@ark-funds.com");
    }

    #[test]
    fn test_parse_payload_with_markdown_wrapper() {
        let wrapped = format!("```json\n{}\n```", VALID_PAYLOAD);
        let data = parse_response(&wrapped).unwrap();
        assert_eq!(data.etfs.len(), 1);
    }

    #[test]
    fn test_parse_payload_with_bare_fence() {
        let wrapped = format!("```\n{}\n```", VALID_PAYLOAD);
        let data = parse_response(&wrapped).unwrap();
        assert_eq!(data.etfs[0].etf_ticker, "ARKK");
    }

    #[test]
    fn test_parse_non_json_fails() {
        let result = parse_response("This is not JSON");
        assert!(matches!(result, Err(ExtractError::SchemaValidation(_))));
    }

    #[test]
    fn test_parse_empty_payload_fails() {
        let result = parse_response("   ");
        assert!(matches!(result, Err(ExtractError::SchemaValidation(_))));
    }

    #[test]
    fn test_parse_missing_instrument_field_fails() {
        // Instrument without `ticker` - must not yield a partial object
        let payload = r#"{
            "etfs": [
                {
                    "etf_ticker": "ARKK",
                    "trade_date": "2022-01-01",
                    "stocks": [
                        {
                            "direction": "Buy",
                            "company_name": "Apple Inc",
                            "shares_traded": 100.0,
                            "percent_of_etf": 10.0
                        }
                    ]
                }
            ],
            "trade_notification_date": "2022-01-01",
            "sender_email_id": "ark@ark-funds.com",
            "email_date_time": "1/12/2024"
        }"#;
        let result = parse_response(payload);
        assert!(matches!(result, Err(ExtractError::SchemaValidation(_))));
    }

    #[test]
    fn test_parse_wrong_primitive_type_fails() {
        let payload = r#"{
            "etfs": [
                {
                    "etf_ticker": "ARKK",
                    "trade_date": "2022-01-01",
                    "stocks": [
                        {
                            "direction": "Buy",
                            "ticker": "AAPL",
                            "company_name": "Apple Inc",
                            "shares_traded": "100",
                            "percent_of_etf": 10.0
                        }
                    ]
                }
            ],
            "trade_notification_date": "2022-01-01",
            "sender_email_id": "ark@ark-funds.com",
            "email_date_time": "1/12/2024"
        }"#;
        let result = parse_response(payload);
        assert!(matches!(result, Err(ExtractError::SchemaValidation(_))));
    }

    #[test]
    fn test_parse_array_payload_fails() {
        let result = parse_response("[]");
        assert!(matches!(result, Err(ExtractError::SchemaValidation(_))));
    }

    #[test]
    fn test_parse_empty_etfs_is_valid() {
        // Content with no identifiable trade data yields an empty list,
        // not an error
        let payload = r#"{
            "etfs": [],
            "trade_notification_date": "",
            "sender_email_id": "someone@example.com",
            "email_date_time": ""
        }"#;
        let data = parse_response(payload).unwrap();
        assert!(data.etfs.is_empty());
    }
}
