// ABOUTME: Phone commands for fitcoach-cli
// ABOUTME: Validate typed numbers, format and mask E.164 numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach::config::AppConfig;
use fitcoach::errors::AppResult;
use fitcoach::validation::{format_phone_for_display, mask_phone, validate_phone_number};
use serde_json::json;

use crate::helpers::display::print_json;

/// Validate `number` against `dial_code` or the configured default
pub fn validate(config: &AppConfig, number: &str, dial_code: Option<&str>) -> AppResult<()> {
    let dial_code = dial_code.unwrap_or(&config.default_dial_code);
    let result = validate_phone_number(number, dial_code);
    print_json(&json!({
        "dial_code": dial_code,
        "is_valid": result.is_valid,
        "formatted": result.formatted,
        "display": result.formatted.as_deref().map(format_phone_for_display),
        "error": result.error_message(),
    }))
}

/// Print the display form of an E.164 number
pub fn format(e164: &str) {
    println!("{}", format_phone_for_display(e164));
}

/// Print the masked form of an E.164 number
pub fn mask(e164: &str) {
    println!("{}", mask_phone(e164));
}
