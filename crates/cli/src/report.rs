use std::fmt::Write as _;

use serde::Serialize;

use pantry_groceries::{Category, InventorySummary, ItemAlert};

use crate::config::CheckConfig;

/// Output of `pantry check`, in the shape printed for `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub today: String,
    pub window_days: u32,
    pub valid: usize,
    pub failures: Vec<FailureEntry>,
    pub expired: Vec<AlertEntry>,
    pub expiring_soon: Vec<AlertEntry>,
    pub restock_due: Vec<AlertEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureEntry {
    pub index: usize,
    pub name: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertEntry {
    pub name: String,
    pub category: Category,
    pub label: &'static str,
    pub days: i64,
}

impl From<&ItemAlert> for AlertEntry {
    fn from(alert: &ItemAlert) -> Self {
        Self {
            name: alert.name.to_string(),
            category: alert.category,
            label: alert.category.label(),
            days: alert.days,
        }
    }
}

impl CheckReport {
    pub fn new(summary: &InventorySummary, config: &CheckConfig) -> Self {
        let alerts = |list: &[ItemAlert]| -> Vec<AlertEntry> {
            list.iter().map(AlertEntry::from).collect()
        };
        Self {
            today: config.today.format(pantry_groceries::DATE_FORMAT).to_string(),
            window_days: config.window_days,
            valid: summary.valid,
            failures: summary
                .failures
                .iter()
                .map(|f| FailureEntry {
                    index: f.index,
                    name: f.name.clone(),
                    error: f.error.to_string(),
                })
                .collect(),
            expired: alerts(&summary.expired),
            expiring_soon: alerts(&summary.expiring_soon),
            restock_due: alerts(&summary.restock_due),
        }
    }

    /// Human-readable rendering. Empty sections are omitted.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} valid, {} rejected (as of {}, window {} days)",
            self.valid,
            self.failures.len(),
            self.today,
            self.window_days
        );

        if !self.failures.is_empty() {
            let _ = writeln!(out, "\nRejected:");
            for f in &self.failures {
                let _ = writeln!(out, "  #{} {:?}: {}", f.index, f.name, f.error);
            }
        }

        section(&mut out, "Expired", &self.expired, |d| {
            format!("{d} day{} ago", plural(d))
        });
        section(&mut out, "Expiring soon", &self.expiring_soon, |d| match d {
            0 => "today".to_string(),
            d => format!("in {d} day{}", plural(d)),
        });
        section(&mut out, "Due for restock", &self.restock_due, |d| match d {
            0 => "due now".to_string(),
            d => format!("{d} day{} overdue", plural(d)),
        });

        out
    }
}

fn section(out: &mut String, title: &str, entries: &[AlertEntry], when: impl Fn(i64) -> String) {
    if entries.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}:");
    for e in entries {
        let _ = writeln!(out, "  {} [{}] {}", e.name, e.label, when(e.days));
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
