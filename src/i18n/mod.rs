// ABOUTME: Label lookup for the app's two languages with raw-key fallback
// ABOUTME: Translator resolves TranslationKey values and substitutes {{param}} placeholders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! A missing translation never fails: the lookup returns the key's dotted
//! name so the gap is visible on screen instead of crashing the flow.

/// Built-in label catalogs
pub mod catalog;

/// Enumerated translation keys
pub mod keys;

pub use catalog::Catalog;
pub use keys::TranslationKey;

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Arabic
    Ar,
}

impl Language {
    /// Supported languages
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    /// Two-letter code used in storage
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Right-to-left script
    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        matches!(self, Self::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ar" | "arabic" => Ok(Self::Ar),
            other => Err(AppError::invalid_input(format!(
                "Unsupported language '{other}'; expected en or ar"
            ))),
        }
    }
}

/// Resolves labels for the active language
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    catalog: Catalog,
}

impl Translator {
    /// Translator backed by the built-in catalog for `language`
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            catalog: Catalog::builtin(language),
        }
    }

    /// Translator backed by a custom catalog
    #[must_use]
    pub const fn with_catalog(language: Language, catalog: Catalog) -> Self {
        Self { language, catalog }
    }

    /// Active language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Switch language and reload the built-in catalog
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.catalog = Catalog::builtin(language);
    }

    /// Label for `key`, or its dotted name when the catalog has no entry
    #[must_use]
    pub fn translate(&self, key: TranslationKey) -> String {
        self.catalog.get(key).map_or_else(
            || {
                trace!(key = key.as_str(), language = %self.language, "Missing translation");
                key.as_str().to_owned()
            },
            str::to_owned,
        )
    }

    /// Label for `key` with every `{{name}}` replaced by its value
    #[must_use]
    pub fn translate_with(&self, key: TranslationKey, params: &[(&str, &str)]) -> String {
        params
            .iter()
            .fold(self.translate(key), |text, (name, value)| {
                text.replace(&format!("{{{{{name}}}}}"), value)
            })
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing() {
        assert_eq!("AR".parse::<Language>().unwrap(), Language::Ar);
        assert_eq!(" english ".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
        assert!(Language::Ar.is_rtl());
        assert!(!Language::En.is_rtl());
    }

    #[test]
    fn test_placeholder_substitution_replaces_all_occurrences() {
        let catalog =
            Catalog::empty().with_entry(TranslationKey::NutritionDays, "{{count}} / {{count}}");
        let translator = Translator::with_catalog(Language::En, catalog);
        assert_eq!(
            translator.translate_with(TranslationKey::NutritionDays, &[("count", "3")]),
            "3 / 3"
        );
    }

    #[test]
    fn test_set_language_switches_catalog() {
        let mut translator = Translator::default();
        assert_eq!(translator.translate(TranslationKey::GenderMale), "Male");
        translator.set_language(Language::Ar);
        assert_eq!(translator.translate(TranslationKey::GenderMale), "ذكر");
    }
}
