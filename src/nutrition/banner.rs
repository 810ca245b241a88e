// ABOUTME: Translated expiry banner content for the nutrition screen
// ABOUTME: Only Freemium users see a banner; paid tiers get none
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::i18n::{TranslationKey, Translator};
use crate::models::{ExpiryPhase, NutritionExpiryStatus, SubscriptionTier};
use serde::Serialize;

/// Button offered under the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerAction {
    /// Open the subscription upgrade flow
    Upgrade,
    /// Generate a replacement plan
    Regenerate,
}

/// Rendered banner text and actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryBanner {
    /// Drives the banner's styling
    pub phase: ExpiryPhase,
    /// Main line
    pub headline: String,
    /// Secondary line
    pub detail: String,
    /// Buttons with their translated labels
    pub actions: Vec<(BannerAction, String)>,
}

impl ExpiryBanner {
    /// Banner for `status`, or `None` for paid tiers
    #[must_use]
    pub fn for_status(
        status: &NutritionExpiryStatus,
        tier: SubscriptionTier,
        translator: &Translator,
    ) -> Option<Self> {
        if tier.is_paid() {
            return None;
        }

        let phase = status.phase();
        if phase == ExpiryPhase::Expired {
            return Some(Self {
                phase,
                headline: translator.translate(TranslationKey::NutritionExpired),
                detail: translator.translate(TranslationKey::NutritionUpgradeToKeep),
                actions: vec![
                    (
                        BannerAction::Upgrade,
                        translator.translate(TranslationKey::SubscriptionUpgradeButton),
                    ),
                    (
                        BannerAction::Regenerate,
                        translator.translate(TranslationKey::NutritionRegenerate),
                    ),
                ],
            });
        }

        let time = remaining_text(status, translator);
        Some(Self {
            phase,
            headline: translator
                .translate_with(TranslationKey::NutritionExpiresIn, &[("time", time.as_str())]),
            detail: translator.translate(TranslationKey::NutritionFreemiumAccess),
            actions: vec![(
                BannerAction::Upgrade,
                translator.translate(TranslationKey::NutritionUnlockUnlimited),
            )],
        })
    }
}

fn remaining_text(status: &NutritionExpiryStatus, translator: &Translator) -> String {
    let (key, count) = match (status.days_remaining, status.hours_remaining) {
        (Some(days), _) if days > 0 => (TranslationKey::NutritionDays, days),
        (Some(0), Some(hours)) => (TranslationKey::NutritionHours, hours),
        _ => return String::new(),
    };
    let count = count.to_string();
    translator.translate_with(key, &[("count", count.as_str())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_hours_shown_in_last_day() {
        let status = NutritionExpiryStatus {
            days_remaining: Some(0),
            hours_remaining: Some(6),
            ..NutritionExpiryStatus::unlimited()
        };
        let banner =
            ExpiryBanner::for_status(&status, SubscriptionTier::Freemium, &Translator::default())
                .unwrap();
        assert_eq!(banner.phase, ExpiryPhase::ExpiringSoon);
        assert_eq!(banner.headline, "Expires in 6 hours");
    }

    #[test]
    fn test_arabic_detail_falls_back_to_key() {
        let status = NutritionExpiryStatus {
            days_remaining: Some(5),
            ..NutritionExpiryStatus::unlimited()
        };
        let banner = ExpiryBanner::for_status(
            &status,
            SubscriptionTier::Freemium,
            &Translator::new(Language::Ar),
        )
        .unwrap();
        assert_eq!(banner.phase, ExpiryPhase::Active);
        assert_eq!(banner.detail, "nutrition.freemiumAccess");
    }
}
