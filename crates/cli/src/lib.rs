//! `pantry-cli`
//!
//! Command-line front end over the groceries model: loads a JSON array of
//! grocery records, converts them, and reports what needs attention.

pub mod config;
pub mod report;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use pantry_core::DomainError;
use pantry_groceries::{Category, GroceryRecord, InventorySummary, RejectedRecord, summarize_entries};

use crate::config::CheckConfig;

/// Parse a JSON array of wire records.
///
/// Only a body that is not a JSON array fails outright. Each element is
/// decoded on its own, so one bad record does not hide the rest.
pub fn load_records(
    reader: impl Read,
) -> anyhow::Result<Vec<Result<GroceryRecord, RejectedRecord>>> {
    let values: Vec<Value> = serde_json::from_reader(reader)
        .context("failed to parse grocery records as a JSON array")?;
    Ok(values.into_iter().map(decode_record).collect())
}

/// Decode one array element into a wire record.
///
/// Unknown category ids are reported through [`Category`]'s own parser; any
/// other shape problem becomes a `Validation` error carrying serde's message.
pub fn decode_record(value: Value) -> Result<GroceryRecord, RejectedRecord> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    if let Some(Err(error)) = value
        .get("category")
        .and_then(Value::as_str)
        .map(str::parse::<Category>)
    {
        return Err(RejectedRecord { name, error });
    }

    serde_json::from_value(value).map_err(|e| RejectedRecord {
        name,
        error: DomainError::validation(format!("undecodable record: {e}")),
    })
}

/// Summarize records read from `reader`.
pub fn check_reader(reader: impl Read, config: &CheckConfig) -> anyhow::Result<InventorySummary> {
    let entries = load_records(reader)?;

    tracing::info!(
        records = entries.len(),
        today = %config.today,
        window_days = config.window_days,
        "checking grocery records"
    );

    let summary = summarize_entries(entries, config.today, config.window_days);

    for failure in &summary.failures {
        tracing::warn!(
            index = failure.index,
            name = %failure.name,
            error = %failure.error,
            "record rejected"
        );
    }

    Ok(summary)
}

/// Load records from `path` and summarize them.
pub fn check_file(path: &Path, config: &CheckConfig) -> anyhow::Result<InventorySummary> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    check_reader(std::io::BufReader::new(file), config)
        .with_context(|| format!("while reading {}", path.display()))
}

/// Process exit status for a finished check: non-zero when anything was rejected.
pub fn exit_status(summary: &InventorySummary) -> u8 {
    if summary.has_failures() { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_records_reads_a_json_array() {
        let json = br#"[{"name":"Milk","category":"dairy","expirationDate":"2024-05-10"}]"#;
        let records = load_records(&json[..]).unwrap();
        assert_eq!(records.len(), 1);
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.expiration_date.as_deref(), Some("2024-05-10"));
    }

    #[test]
    fn load_records_rejects_a_single_object() {
        let json = br#"{"name":"Milk","category":"dairy"}"#;
        let err = load_records(&json[..]).unwrap_err();
        assert!(err.to_string().contains("JSON array"));
    }

    fn config() -> CheckConfig {
        CheckConfig {
            today: chrono::NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            window_days: 3,
        }
    }

    #[test]
    fn bad_elements_are_reported_per_index_without_dropping_the_batch() {
        let json = br#"[
            {"name":"Milk","category":"dairy","expirationDate":"2024-05-11"},
            {"name":"Cheese","category":"cheese"},
            {"name":"Tea","category":"beverages","lastTimeBoughtDays":2.5},
            {"category":"dairy"},
            {"name":"Eggs","category":"dairy","averageBuyingDays":-3}
        ]"#;

        let summary = check_reader(&json[..], &config()).unwrap();

        assert_eq!(summary.valid, 1);
        assert_eq!(summary.expiring_soon[0].name.as_str(), "Milk");

        let failed: Vec<_> = summary
            .failures
            .iter()
            .map(|f| (f.index, f.name.as_str()))
            .collect();
        assert_eq!(failed, [(1, "Cheese"), (2, "Tea"), (3, ""), (4, "Eggs")]);

        assert_eq!(
            summary.failures[0].error,
            DomainError::validation("unknown category id: \"cheese\"")
        );
        assert!(summary.failures[1].error.to_string().contains("undecodable record"));
        assert_eq!(
            summary.failures[3].error,
            DomainError::invalid_quantity("averageBuyingDays", -3)
        );
        assert_eq!(exit_status(&summary), 1);
    }

    #[test]
    fn clean_batch_exits_successfully() {
        let json = br#"[{"name":"Rice","category":"grains_and_legumes"}]"#;
        let summary = check_reader(&json[..], &config()).unwrap();
        assert!(!summary.has_failures());
        assert_eq!(exit_status(&summary), 0);
    }

    #[test]
    fn oversized_day_count_is_a_per_record_failure() {
        let json = br#"[{"name":"Salt","category":"spices_and_sauces","lastTimeBoughtDays":99999999999999999999}]"#;
        let summary = check_reader(&json[..], &config()).unwrap();
        assert_eq!(summary.valid, 0);
        assert_eq!(summary.failures[0].name, "Salt");
    }

    #[test]
    fn check_file_reports_missing_files() {
        let err = check_file(Path::new("/definitely/not/here.json"), &config()).unwrap_err();
        assert!(err.to_string().contains("failed to open"));
    }
}
