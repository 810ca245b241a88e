// ABOUTME: Environment configuration for nutrition windows, phone defaults, language and state file
// ABOUTME: Parses FITCOACH_* variables with defaults and range checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::env_config;
use crate::constants::nutrition::{FREEMIUM_WINDOW_DAYS, MAX_WINDOW_DAYS};
use crate::constants::phone::DEFAULT_DIAL_CODE;
use crate::errors::{AppError, AppResult};
use crate::i18n::Language;
use crate::models::Country;
use crate::nutrition::ExpiryCalculator;
use crate::storage::file::default_path;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Shipped build
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Nutrition plan settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionConfig {
    /// Freemium plan validity in days
    pub window_days: u32,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            window_days: FREEMIUM_WINDOW_DAYS,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Nutrition plan settings
    pub nutrition: NutritionConfig,
    /// Dial code preselected on the phone screen
    pub default_dial_code: String,
    /// Language used before the user picks one
    pub language: Language,
    /// State file location, `None` when the platform has no data directory
    pub state_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            nutrition: NutritionConfig::default(),
            default_dial_code: DEFAULT_DIAL_CODE.to_owned(),
            language: Language::default(),
            state_path: default_path().ok(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set to a value outside its
    /// accepted range or format
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let environment = env::var(env_config::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let window_days = match env_var(env_config::NUTRITION_WINDOW_DAYS) {
            Some(raw) => parse_window_days(&raw)?,
            None => FREEMIUM_WINDOW_DAYS,
        };

        let default_dial_code = match env_var(env_config::DEFAULT_DIAL_CODE) {
            Some(raw) => parse_dial_code(&raw)?,
            None => DEFAULT_DIAL_CODE.to_owned(),
        };

        let language = match env_var(env_config::LANGUAGE) {
            Some(raw) => raw.parse().map_err(|_| {
                AppError::config_invalid(format!(
                    "{} must be en or ar, got '{raw}'",
                    env_config::LANGUAGE
                ))
            })?,
            None => Language::default(),
        };

        let state_path = env_var(env_config::STATE_PATH)
            .map(PathBuf::from)
            .or_else(|| match default_path() {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!(error = %e, "No default state file location");
                    None
                }
            });

        Ok(Self {
            environment,
            nutrition: NutritionConfig { window_days },
            default_dial_code,
            language,
            state_path,
        })
    }

    /// Expiry calculator for the configured Freemium window
    #[must_use]
    pub const fn expiry_calculator(&self) -> ExpiryCalculator {
        ExpiryCalculator::with_window_days(self.nutrition.window_days)
    }
}

/// Non-empty, trimmed value of `key`
fn env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_window_days(raw: &str) -> AppResult<u32> {
    let days: u32 = raw.parse().map_err(|_| {
        AppError::config_invalid(format!(
            "{} must be a whole number of days, got '{raw}'",
            env_config::NUTRITION_WINDOW_DAYS
        ))
    })?;
    if !(1..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(AppError::config_invalid(format!(
            "{} must be between 1 and {MAX_WINDOW_DAYS}, got {days}",
            env_config::NUTRITION_WINDOW_DAYS
        )));
    }
    Ok(days)
}

fn parse_dial_code(raw: &str) -> AppResult<String> {
    Country::from_dial_code(raw)
        .map(|country| country.dial_code().to_owned())
        .ok_or_else(|| {
            AppError::config_invalid(format!(
                "{} '{raw}' is not a supported country",
                env_config::DEFAULT_DIAL_CODE
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_days_bounds() {
        assert_eq!(parse_window_days("30").unwrap(), 30);
        assert!(parse_window_days("0").is_err());
        assert!(parse_window_days("366").is_err());
        assert!(parse_window_days("seven").is_err());
    }

    #[test]
    fn test_dial_code_normalised() {
        assert_eq!(parse_dial_code("20").unwrap(), "+20");
        assert!(parse_dial_code("+999").is_err());
    }

    #[test]
    fn test_environment_fallback() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }
}
