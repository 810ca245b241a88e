// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure policy values for intake ranges, nutrition windows, quotas and storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Persisted key names for the application state store
pub mod storage_keys;

/// Service identification used in structured logs
pub mod service_names {
    /// Library service name
    pub const FITCOACH: &str = "fitcoach";
    /// CLI service name
    pub const FITCOACH_CLI: &str = "fitcoach-cli";
}

/// Subscription tier identifiers
pub mod tiers {
    /// Free tier
    pub const FREEMIUM: &str = "freemium";
    /// Paid tier
    pub const PREMIUM: &str = "premium";
    /// Top paid tier
    pub const SMART_PREMIUM: &str = "smart_premium";
}

/// Onboarding intake ranges
pub mod intake {
    /// Minimum accepted age in years
    pub const AGE_MIN: u32 = 13;
    /// Maximum accepted age in years
    pub const AGE_MAX: u32 = 120;
    /// Minimum accepted body weight in kilograms
    pub const WEIGHT_MIN_KG: f64 = 30.0;
    /// Maximum accepted body weight in kilograms
    pub const WEIGHT_MAX_KG: f64 = 300.0;
    /// Minimum accepted height in centimetres
    pub const HEIGHT_MIN_CM: f64 = 100.0;
    /// Maximum accepted height in centimetres
    pub const HEIGHT_MAX_CM: f64 = 250.0;
    /// Minimum workout days per week
    pub const FREQUENCY_MIN: u32 = 2;
    /// Maximum workout days per week
    pub const FREQUENCY_MAX: u32 = 6;
    /// Training days assigned to Freemium users and the default for everyone else
    pub const DEFAULT_TRAINING_DAYS: u32 = 3;
    /// Number of steps in the first intake questionnaire
    pub const FIRST_INTAKE_STEPS: usize = 3;
    /// Number of steps in the second intake questionnaire
    pub const SECOND_INTAKE_STEPS: usize = 5;
}

/// Nutrition plan access policy
pub mod nutrition {
    /// Validity window of a Freemium nutrition plan in days
    pub const FREEMIUM_WINDOW_DAYS: u32 = 7;
    /// Largest window accepted from configuration
    pub const MAX_WINDOW_DAYS: u32 = 365;
    /// A plan with this many days or fewer left is "expiring soon"
    pub const EXPIRING_SOON_DAYS: i64 = 2;
}

/// Monthly quota policy
pub mod quota {
    /// Usage percentage at which the UI warns the user
    pub const WARNING_THRESHOLD_PERCENT: u32 = 80;
    /// Freemium monthly message allowance
    pub const FREEMIUM_MESSAGES: u32 = 20;
    /// Premium monthly message allowance
    pub const PREMIUM_MESSAGES: u32 = 200;
    /// Freemium monthly video calls
    pub const FREEMIUM_CALLS: u32 = 1;
    /// Premium monthly video calls
    pub const PREMIUM_CALLS: u32 = 2;
    /// Smart Premium monthly video calls
    pub const SMART_PREMIUM_CALLS: u32 = 4;
    /// Freemium call length in minutes
    pub const FREEMIUM_CALL_MINUTES: u32 = 15;
    /// Paid call length in minutes
    pub const PAID_CALL_MINUTES: u32 = 25;
}

/// Phone number rules
pub mod phone {
    /// Dial code used when none is configured
    pub const DEFAULT_DIAL_CODE: &str = "+966";
    /// International call prefix accepted in place of `+`
    pub const INTERNATIONAL_PREFIX: &str = "00";
    /// National trunk prefix dropped when dialing internationally
    pub const TRUNK_PREFIX: char = '0';
    /// Separators a user may type between digits
    pub const ALLOWED_SEPARATORS: &[char] = &[' ', '-', '.', '(', ')'];
    /// Digits left visible by `mask_phone`
    pub const MASK_VISIBLE_DIGITS: usize = 4;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Freemium nutrition window override
    pub const NUTRITION_WINDOW_DAYS: &str = "FITCOACH_NUTRITION_WINDOW_DAYS";
    /// Default dial code for phone input
    pub const DEFAULT_DIAL_CODE: &str = "FITCOACH_DEFAULT_DIAL_CODE";
    /// Default UI language
    pub const LANGUAGE: &str = "FITCOACH_LANGUAGE";
    /// Path of the persisted state file
    pub const STATE_PATH: &str = "FITCOACH_STATE_PATH";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
