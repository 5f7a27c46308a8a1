//! Command execution.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::loader;
use std::fs;
use tradenote_domain::{email_data_schema, EmailData};
use tradenote_extractor::{verify, Extractor, ExtractorConfig};
use tradenote_llm::OpenAiProvider;

/// Run one extraction; returns false when a fixture comparison mismatched.
pub async fn execute_extract(args: ExtractArgs) -> Result<bool> {
    let content = loader::load_content(&args.file)?;

    let mut config = match &args.config {
        Some(path) => {
            let toml_str = fs::read_to_string(path)?;
            ExtractorConfig::from_toml(&toml_str).map_err(CliError::Config)?
        }
        None => ExtractorConfig::default(),
    };
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(secs) = args.timeout {
        config.extraction_timeout_secs = secs;
    }
    if args.retry {
        config.schema_retry = true;
    }

    // Credential is read once here; a missing key fails before any call,
    // and an invalid config is rejected by the extractor constructor
    let provider = OpenAiProvider::from_env(config.model.clone())?;
    let extractor = Extractor::new(provider, config)?;

    let data = extractor.extract(&content).await?;
    println!("{}", serde_json::to_string_pretty(&data)?);

    if let Some(path) = args.expected {
        let expected: EmailData = serde_json::from_str(&fs::read_to_string(&path)?)?;
        let report = verify(&data, &expected)?;

        println!("Actual Length: {}", report.actual_len);
        println!("Expect Length: {}", report.expected_len);
        println!("Match: {}", report.matched);

        return Ok(report.matched);
    }

    Ok(true)
}

/// Print the JSON schema handed to the model backend.
pub fn execute_schema() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&email_data_schema())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_fixture_is_the_known_good_output() {
        // Guards the fixture file against drifting from the expected
        // ARKK/FSPTX notification
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/expected.json");
        let fixture: EmailData = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(fixture.trade_notification_date, "2022-01-01");
        assert_eq!(fixture.sender_email_id, "ark@ark-funds.com");
        assert_eq!(fixture.email_date_time, "1/12/2024");

        assert_eq!(fixture.etfs.len(), 2);
        let arkk = &fixture.etfs[0];
        assert_eq!(arkk.etf_ticker, "ARKK");
        assert_eq!(arkk.trade_date, "2022-01-01");
        assert_eq!(arkk.stocks[0].direction, "Buy");
        assert_eq!(arkk.stocks[0].ticker, "AAPL");
        assert_eq!(arkk.stocks[0].shares_traded, 100.0);
        assert_eq!(arkk.stocks[0].percent_of_etf, 10.0);
        assert_eq!(arkk.stocks[1].direction, "Sell");
        assert_eq!(arkk.stocks[1].ticker, "TSLA");
        assert_eq!(arkk.stocks[1].shares_traded, 50.0);

        let fsptx = &fixture.etfs[1];
        assert_eq!(fsptx.etf_ticker, "FSPTX");
        assert_eq!(fsptx.stocks[0].ticker, "MSFT");
        assert_eq!(fsptx.stocks[0].shares_traded, 200.0);
        assert_eq!(fsptx.stocks[1].ticker, "VZ");
        assert_eq!(fsptx.stocks[1].percent_of_etf, 15.0);
    }
}
