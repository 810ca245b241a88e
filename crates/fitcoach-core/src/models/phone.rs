// ABOUTME: Supported phone countries with dial codes and national number lengths
// ABOUTME: Phone validation result and the reasons a number can be rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Country offered in the phone number picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    /// Saudi Arabia
    SaudiArabia,
    /// Egypt
    Egypt,
    /// Turkey
    Turkey,
    /// United Arab Emirates
    UnitedArabEmirates,
    /// United States
    UnitedStates,
    /// United Kingdom
    UnitedKingdom,
}

impl Country {
    /// Picker order
    pub const ALL: [Self; 6] = [
        Self::SaudiArabia,
        Self::Egypt,
        Self::Turkey,
        Self::UnitedArabEmirates,
        Self::UnitedStates,
        Self::UnitedKingdom,
    ];

    /// ISO 3166-1 alpha-2 code
    #[must_use]
    pub const fn iso_code(&self) -> &'static str {
        match self {
            Self::SaudiArabia => "SA",
            Self::Egypt => "EG",
            Self::Turkey => "TR",
            Self::UnitedArabEmirates => "AE",
            Self::UnitedStates => "US",
            Self::UnitedKingdom => "GB",
        }
    }

    /// English display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SaudiArabia => "Saudi Arabia",
            Self::Egypt => "Egypt",
            Self::Turkey => "Turkey",
            Self::UnitedArabEmirates => "UAE",
            Self::UnitedStates => "United States",
            Self::UnitedKingdom => "United Kingdom",
        }
    }

    /// Dial code including the leading `+`
    #[must_use]
    pub const fn dial_code(&self) -> &'static str {
        match self {
            Self::SaudiArabia => "+966",
            Self::Egypt => "+20",
            Self::Turkey => "+90",
            Self::UnitedArabEmirates => "+971",
            Self::UnitedStates => "+1",
            Self::UnitedKingdom => "+44",
        }
    }

    /// Dial code digits without the `+`
    #[must_use]
    pub fn dial_digits(&self) -> &'static str {
        self.dial_code().trim_start_matches('+')
    }

    /// Digits in a national significant number, trunk prefix excluded
    #[must_use]
    pub const fn national_number_length(&self) -> usize {
        match self {
            Self::SaudiArabia | Self::UnitedArabEmirates => 9,
            Self::Egypt
            | Self::Turkey
            | Self::UnitedStates
            | Self::UnitedKingdom => 10,
        }
    }

    /// Look up a country by dial code; the `+` is optional
    #[must_use]
    pub fn from_dial_code(dial_code: &str) -> Option<Self> {
        let digits = dial_code.trim().trim_start_matches('+');
        Self::ALL
            .into_iter()
            .find(|country| country.dial_digits() == digits)
    }

    /// Look up a country by ISO code
    #[must_use]
    pub fn from_iso_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|country| country.iso_code().eq_ignore_ascii_case(code.trim()))
    }

    /// Find the country whose dial code prefixes an E.164 number.
    ///
    /// Longest dial code wins so `+971...` is never read as a shorter code.
    #[must_use]
    pub fn from_e164(e164: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|country| e164.starts_with(country.dial_code()))
            .max_by_key(|country| country.dial_code().len())
    }
}

/// Why a phone number was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhoneValidationError {
    /// Nothing usable was entered
    #[error("Phone number is required")]
    Required,
    /// Letters or symbols other than common separators
    #[error("Phone number contains invalid characters")]
    InvalidCharacters,
    /// Dial code is not in the supported country list
    #[error("Unsupported country code: {dial_code}")]
    UnsupportedCountry {
        /// The dial code that was given
        dial_code: String,
    },
    /// Fewer digits than the national number length
    #[error("Phone number is too short: expected {expected} digits, got {actual}")]
    TooShort {
        /// Required national length
        expected: usize,
        /// Digits after normalization
        actual: usize,
    },
    /// More digits than the national number length
    #[error("Phone number is too long: expected {expected} digits, got {actual}")]
    TooLong {
        /// Required national length
        expected: usize,
        /// Digits after normalization
        actual: usize,
    },
}

/// Outcome of validating a phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneValidationResult {
    /// Whether the number is acceptable
    pub is_valid: bool,
    /// E.164 form, present when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Rejection reason, present when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PhoneValidationError>,
}

impl PhoneValidationResult {
    /// Accepted number in E.164 form
    #[must_use]
    pub fn valid(formatted: String) -> Self {
        Self {
            is_valid: true,
            formatted: Some(formatted),
            error: None,
        }
    }

    /// Rejected number
    #[must_use]
    pub fn invalid(error: PhoneValidationError) -> Self {
        Self {
            is_valid: false,
            formatted: None,
            error: Some(error),
        }
    }

    /// Human-readable rejection message
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}
