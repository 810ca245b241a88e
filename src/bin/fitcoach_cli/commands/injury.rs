// ABOUTME: Injury commands for fitcoach-cli
// ABOUTME: Apply substitution rules and list safe alternatives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach::errors::AppResult;
use fitcoach::injuries::{apply_injury_substitution, find_safe_alternatives};
use fitcoach::models::InjuryArea;

use crate::helpers::args;
use crate::helpers::display::print_json;

/// Run `exercise` through the rules for the listed injuries
pub fn substitute(exercise: &str, injuries: &str) -> AppResult<()> {
    let injuries: Vec<InjuryArea> = args::list(injuries)?;
    print_json(&apply_injury_substitution(exercise, injuries))
}

/// List alternatives for one injury area
pub fn alternatives(injury: &str, muscle: Option<&str>) -> AppResult<()> {
    let injury: InjuryArea = injury.parse()?;
    print_json(&find_safe_alternatives(injury, muscle))
}
