//! Runtime configuration for `pantry check`.
//!
//! Precedence: command-line flag, then environment, then default.

use chrono::NaiveDate;

use pantry_core::DomainResult;
use pantry_groceries::ExpirationDate;

/// Environment variable holding the "expiring soon" window in days.
pub const EXPIRY_WINDOW_ENV: &str = "PANTRY_EXPIRY_WINDOW_DAYS";

pub const DEFAULT_EXPIRY_WINDOW_DAYS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Date expirations are measured from.
    pub today: NaiveDate,
    pub window_days: u32,
}

impl CheckConfig {
    /// Resolve against the process environment and the local clock.
    pub fn from_env(today: Option<NaiveDate>, window_days: Option<u32>) -> Self {
        Self::resolve(
            today,
            window_days,
            |key| std::env::var(key).ok(),
            chrono::Local::now().date_naive(),
        )
    }

    pub fn resolve(
        today: Option<NaiveDate>,
        window_days: Option<u32>,
        lookup: impl Fn(&str) -> Option<String>,
        local_today: NaiveDate,
    ) -> Self {
        let window_days = window_days.unwrap_or_else(|| window_from_env(&lookup));
        Self {
            today: today.unwrap_or(local_today),
            window_days,
        }
    }
}

fn window_from_env(lookup: &impl Fn(&str) -> Option<String>) -> u32 {
    let Some(raw) = lookup(EXPIRY_WINDOW_ENV) else {
        return DEFAULT_EXPIRY_WINDOW_DAYS;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(
            value = %raw,
            default = DEFAULT_EXPIRY_WINDOW_DAYS,
            "{EXPIRY_WINDOW_ENV} is not a day count; using default"
        );
        DEFAULT_EXPIRY_WINDOW_DAYS
    })
}

/// Strict `YYYY-MM-DD` parser for the `--today` flag.
pub fn parse_date(text: &str) -> DomainResult<NaiveDate> {
    ExpirationDate::parse(text).map(|date| date.as_naive_date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn env(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, EXPIRY_WINDOW_ENV);
            value.map(str::to_string)
        }
    }

    #[test]
    fn defaults_apply_without_flags_or_env() {
        let config = CheckConfig::resolve(None, None, env(None), local_today());
        assert_eq!(
            config,
            CheckConfig {
                today: local_today(),
                window_days: DEFAULT_EXPIRY_WINDOW_DAYS,
            }
        );
    }

    #[test]
    fn env_overrides_default_window() {
        let config = CheckConfig::resolve(None, None, env(Some(" 7 ")), local_today());
        assert_eq!(config.window_days, 7);
    }

    #[test]
    fn flags_override_env() {
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let config = CheckConfig::resolve(Some(today), Some(1), env(Some("7")), local_today());
        assert_eq!(config.today, today);
        assert_eq!(config.window_days, 1);
    }

    #[test]
    fn invalid_env_window_falls_back_to_default() {
        let config = CheckConfig::resolve(None, None, env(Some("-2")), local_today());
        assert_eq!(config.window_days, DEFAULT_EXPIRY_WINDOW_DAYS);
    }

    #[test]
    fn parse_date_is_strict() {
        assert_eq!(parse_date("2024-05-10").unwrap(), local_today());
        assert!(parse_date("2024-5-10").is_err());
        assert!(parse_date("tomorrow").is_err());
    }
}
