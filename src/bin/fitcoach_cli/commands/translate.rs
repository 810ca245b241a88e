// ABOUTME: Translate command for fitcoach-cli
// ABOUTME: Unknown keys print verbatim, like a missing catalog entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach::config::AppConfig;
use fitcoach::errors::AppResult;
use fitcoach::i18n::{TranslationKey, Translator};
use tracing::debug;

use crate::helpers::args;

/// Print the label for `key`
pub fn run(
    config: &AppConfig,
    key: &str,
    language: Option<&str>,
    params: &[String],
) -> AppResult<()> {
    let translator = Translator::new(args::language(config, language)?);
    let params = args::params(params)?;

    match key.parse::<TranslationKey>() {
        Ok(key) => println!("{}", translator.translate_with(key, &params)),
        Err(e) => {
            debug!(error = %e, "Unknown translation key");
            println!("{key}");
        }
    }
    Ok(())
}
