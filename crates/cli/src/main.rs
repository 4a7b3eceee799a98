use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use pantry_cli::config::{self, CheckConfig};
use pantry_cli::report::CheckReport;
use pantry_groceries::Category;

/// pantry - household grocery tracking
#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Validate grocery records and flag what needs attention", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every category wire id and its display label
    Categories,
    /// Check a JSON array of grocery records
    Check {
        /// Path to the records file
        file: PathBuf,

        /// Date to measure expirations from, YYYY-MM-DD (defaults to today)
        #[arg(long, value_parser = parse_today)]
        today: Option<NaiveDate>,

        /// Days ahead that count as "expiring soon" (overrides PANTRY_EXPIRY_WINDOW_DAYS)
        #[arg(long)]
        window_days: Option<u32>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_today(text: &str) -> Result<NaiveDate, String> {
    config::parse_date(text).map_err(|e| e.to_string())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    pantry_observability::init();

    match cli.command {
        Commands::Categories => {
            for category in Category::ALL {
                println!("{:<20} {}", category.as_str(), category.label());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            file,
            today,
            window_days,
            json,
        } => {
            let config = CheckConfig::from_env(today, window_days);
            let summary = pantry_cli::check_file(&file, &config)?;
            let report = CheckReport::new(&summary, &config);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }

            if summary.has_failures() {
                tracing::warn!(rejected = summary.failures.len(), "some records were rejected");
            }
            Ok(ExitCode::from(pantry_cli::exit_status(&summary)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_parses_flags() {
        let cli = Cli::try_parse_from([
            "pantry",
            "check",
            "groceries.json",
            "--today",
            "2024-05-10",
            "--window-days",
            "5",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Check {
                file,
                today,
                window_days,
                json,
            } => {
                assert_eq!(file, PathBuf::from("groceries.json"));
                assert_eq!(today, NaiveDate::from_ymd_opt(2024, 5, 10));
                assert_eq!(window_days, Some(5));
                assert!(json);
            }
            Commands::Categories => panic!("expected check"),
        }
    }

    #[test]
    fn check_rejects_loose_today() {
        assert!(Cli::try_parse_from(["pantry", "check", "f.json", "--today", "2024-5-10"]).is_err());
        assert!(Cli::try_parse_from(["pantry", "check", "f.json", "--window-days", "-1"]).is_err());
    }
}
