// ABOUTME: Argument parsing helpers for fitcoach-cli
// ABOUTME: Timestamps, comma-separated lists, languages and name=value pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use fitcoach::config::AppConfig;
use fitcoach::errors::{AppError, AppResult};
use fitcoach::i18n::Language;
use std::str::FromStr;

/// Parse an RFC 3339 timestamp
pub fn timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|e| AppError::invalid_input(format!("Invalid timestamp '{raw}': {e}")))
}

/// Parse an optional timestamp, defaulting to now
pub fn timestamp_or_now(raw: Option<&str>) -> AppResult<DateTime<Utc>> {
    raw.map_or_else(|| Ok(Utc::now()), timestamp)
}

/// Parse a comma-separated list, skipping empty items
pub fn list<T>(raw: &str) -> AppResult<Vec<T>>
where
    T: FromStr<Err = AppError>,
{
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::parse)
        .collect()
}

/// Explicit language, or the configured one
pub fn language(config: &AppConfig, raw: Option<&str>) -> AppResult<Language> {
    raw.map_or(Ok(config.language), str::parse)
}

/// Split `name=value` pairs
pub fn params(raw: &[String]) -> AppResult<Vec<(&str, &str)>> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=').ok_or_else(|| {
                AppError::invalid_input(format!("Parameter '{pair}' must be name=value"))
            })
        })
        .collect()
}
