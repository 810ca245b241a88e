// ABOUTME: Output formatting helpers for fitcoach-cli
// ABOUTME: Pretty-printed JSON on stdout so results can be piped into other tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach::errors::AppResult;
use serde::Serialize;

/// Print `value` as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
