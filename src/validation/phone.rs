// ABOUTME: Phone number validation against a country dial code with E.164 output
// ABOUTME: Also formats E.164 numbers for display and masks them for privacy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::phone::{
    ALLOWED_SEPARATORS, INTERNATIONAL_PREFIX, MASK_VISIBLE_DIGITS, TRUNK_PREFIX,
};
use crate::models::{Country, PhoneValidationError, PhoneValidationResult};
use std::cmp::Ordering;
use tracing::debug;

/// Validate a user-typed phone number for the selected dial code.
///
/// Separators are ignored, an international prefix (`+CC` or `00CC`) and a
/// national trunk `0` are removed, and the remaining digits must match the
/// country's national number length exactly. On success `formatted` holds the
/// E.164 form `dial_code + national digits`.
#[must_use]
pub fn validate_phone_number(raw_input: &str, dial_code: &str) -> PhoneValidationResult {
    let input = raw_input.trim();
    if input.is_empty() {
        return reject(PhoneValidationError::Required, dial_code);
    }
    if has_invalid_characters(input) {
        return reject(PhoneValidationError::InvalidCharacters, dial_code);
    }

    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return reject(PhoneValidationError::Required, dial_code);
    }

    let Some(country) = Country::from_dial_code(dial_code) else {
        return reject(
            PhoneValidationError::UnsupportedCountry {
                dial_code: dial_code.to_owned(),
            },
            dial_code,
        );
    };

    let national = national_digits(&digits, input.starts_with('+'), country);
    let expected = country.national_number_length();
    let actual = national.len();

    match actual.cmp(&expected) {
        Ordering::Less => reject(PhoneValidationError::TooShort { expected, actual }, dial_code),
        Ordering::Greater => reject(PhoneValidationError::TooLong { expected, actual }, dial_code),
        Ordering::Equal => {
            PhoneValidationResult::valid(format!("{}{national}", country.dial_code()))
        }
    }
}

fn reject(error: PhoneValidationError, dial_code: &str) -> PhoneValidationResult {
    debug!(dial_code, reason = %error, "Phone number rejected");
    PhoneValidationResult::invalid(error)
}

/// Anything other than digits, separators and one leading `+`
fn has_invalid_characters(input: &str) -> bool {
    input.char_indices().any(|(index, c)| {
        !(c.is_ascii_digit() || ALLOWED_SEPARATORS.contains(&c) || (c == '+' && index == 0))
    })
}

/// Strip international and trunk prefixes so only the national number remains.
///
/// A `+` or `00` prefix always carries the dial code, so it is removed before
/// any length comparison. Bare digits keep their exact national length.
fn national_digits<'a>(digits: &'a str, explicit_plus: bool, country: Country) -> &'a str {
    let expected = country.national_number_length();
    let dial = country.dial_digits();

    let international = if explicit_plus {
        Some(digits)
    } else {
        digits.strip_prefix(INTERNATIONAL_PREFIX)
    };

    let mut national = match international.and_then(|rest| rest.strip_prefix(dial)) {
        Some(rest) => rest,
        None if explicit_plus => digits,
        None if digits.len() == expected => return digits,
        None if digits.len() == dial.len() + expected => {
            digits.strip_prefix(dial).unwrap_or(digits)
        }
        None => digits,
    };

    if national.len() == expected + 1 {
        if let Some(rest) = national.strip_prefix(TRUNK_PREFIX) {
            national = rest;
        }
    }

    national
}

/// Format an E.164 number the way the country writes it.
///
/// Numbers whose dial code is not in the supported list are returned unchanged.
#[must_use]
pub fn format_phone_for_display(e164: &str) -> String {
    let Some(country) = Country::from_e164(e164) else {
        return e164.to_owned();
    };
    let dial = country.dial_code();
    let number = &e164[dial.len()..];

    match country {
        Country::SaudiArabia => {
            let groups = take_groups(number, &[2, 3]);
            format!("{dial} {} {} {}", groups[0], groups[1], groups[2])
        }
        Country::Egypt => {
            let groups = take_groups(number, &[3, 3]);
            format!("{dial} {} {} {}", groups[0], groups[1], groups[2])
        }
        Country::UnitedStates => {
            let groups = take_groups(number, &[3, 3]);
            format!("{dial} ({}) {}-{}", groups[0], groups[1], groups[2])
        }
        Country::Turkey | Country::UnitedArabEmirates | Country::UnitedKingdom => {
            format!("{dial} {number}")
        }
    }
}

/// Hide all but the last four digits: `+966 ** *** **4567`
#[must_use]
pub fn mask_phone(e164: &str) -> String {
    let Some(country) = Country::from_e164(e164) else {
        return "****".to_owned();
    };
    let number = &e164[country.dial_code().len()..];
    let skip = number.chars().count().saturating_sub(MASK_VISIBLE_DIGITS);
    let visible: String = number.chars().skip(skip).collect();
    format!("{} ** *** **{visible}", country.dial_code())
}

/// Split off leading groups of the given sizes; the last element is the remainder
fn take_groups<'a>(number: &'a str, sizes: &[usize]) -> Vec<&'a str> {
    let mut groups = Vec::with_capacity(sizes.len() + 1);
    let mut rest = number;
    for &size in sizes {
        let split = rest
            .char_indices()
            .nth(size)
            .map_or(rest.len(), |(index, _)| index);
        let (head, tail) = rest.split_at(split);
        groups.push(head);
        rest = tail;
    }
    groups.push(rest);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_digits_strips_trunk_zero() {
        assert_eq!(
            national_digits("0501234567", false, Country::SaudiArabia),
            "501234567"
        );
    }

    #[test]
    fn test_national_digits_strips_double_zero_prefix() {
        assert_eq!(
            national_digits("00966501234567", false, Country::SaudiArabia),
            "501234567"
        );
    }

    #[test]
    fn test_national_digits_keeps_exact_length_untouched() {
        assert_eq!(
            national_digits("966123456", false, Country::SaudiArabia),
            "966123456"
        );
    }

    #[test]
    fn test_national_digits_strips_dial_code_after_plus_before_length_check() {
        assert_eq!(
            national_digits("966501234", true, Country::SaudiArabia),
            "501234"
        );
        assert_eq!(
            national_digits("1555123456", true, Country::UnitedStates),
            "555123456"
        );
    }

    #[test]
    fn test_plus_only_allowed_first() {
        assert!(!has_invalid_characters("+966 (50) 123-4567"));
        assert!(has_invalid_characters("966+501234567"));
        assert!(has_invalid_characters("50 123 abc"));
    }

    #[test]
    fn test_take_groups_short_input() {
        assert_eq!(take_groups("12", &[3, 3]), vec!["12", "", ""]);
    }
}
