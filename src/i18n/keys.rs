// ABOUTME: Enumerated translation keys with their stable dotted names
// ABOUTME: Typed conversions from intake answers and phone errors to label keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::models::{
    ExperienceLevel, Gender, InjuryArea, MainGoal, PhoneValidationError, WorkoutLocation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares `TranslationKey` with one variant per dotted key name
macro_rules! translation_keys {
    ($($variant:ident => $key:literal),+ $(,)?) => {
        /// Every label the logic layer can ask a catalog for
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum TranslationKey {
            $(
                #[doc = $key]
                $variant,
            )+
        }

        impl TranslationKey {
            /// All keys in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Dotted key name, shown verbatim when a translation is missing
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }
    };
}

translation_keys! {
    CommonLoading => "common.loading",
    CommonContinue => "onboarding.continue",
    CommonBack => "onboarding.back",
    LanguageChoose => "language.choose",
    LanguageChangeLater => "language.changeLater",

    AuthPhoneNumber => "auth.phoneNumber",
    AuthPhoneWillReceiveOtp => "auth.phoneWillReceiveOTP",
    PhoneRequired => "phone.error.required",
    PhoneInvalidCharacters => "phone.error.invalidCharacters",
    PhoneUnsupportedCountry => "phone.error.unsupportedCountry",
    PhoneTooShort => "phone.error.tooShort",
    PhoneTooLong => "phone.error.tooLong",

    GenderTitle => "onboarding.gender.title",
    GenderMale => "onboarding.gender.male",
    GenderFemale => "onboarding.gender.female",
    GenderOther => "onboarding.gender.other",
    GoalsTitle => "onboarding.goals.title",
    GoalFatLoss => "onboarding.goals.fatLoss",
    GoalMuscleGain => "onboarding.goals.muscleGain",
    GoalGeneralFitness => "onboarding.goals.generalFitness",
    WorkoutLocationTitle => "onboarding.workout.location",
    WorkoutGym => "onboarding.workout.gym",
    WorkoutHome => "onboarding.workout.home",
    WorkoutFrequency => "onboarding.workout.frequency",
    ExperienceTitle => "onboarding.experience.title",
    ExperienceBeginner => "onboarding.experience.beginner",
    ExperienceIntermediate => "onboarding.experience.intermediate",
    ExperienceAdvanced => "onboarding.experience.advanced",
    InjuriesTitle => "onboarding.injuries.title",
    InjuryShoulder => "onboarding.injuries.shoulder",
    InjuryKnee => "onboarding.injuries.knee",
    InjuryLowerBack => "onboarding.injuries.lowerBack",
    InjuryNeck => "onboarding.injuries.neck",
    InjuryAnkle => "onboarding.injuries.ankle",
    InjuryNone => "onboarding.injuries.none",

    IntakeFirstTitle => "intake.first.title",
    IntakeFirstComplete => "intake.first.complete",
    IntakeSecondTitle => "intake.second.title",
    IntakeSecondComplete => "intake.second.complete",
    IntakeSecondIncomplete => "intake.second.incomplete",

    NutritionExpiresIn => "nutrition.expiresIn",
    NutritionDays => "nutrition.days",
    NutritionHours => "nutrition.hours",
    NutritionExpired => "nutrition.expired",
    NutritionUpgradeToKeep => "nutrition.upgradeToKeep",
    NutritionRegenerate => "nutrition.regenerate",
    NutritionFreemiumAccess => "nutrition.freemiumAccess",
    NutritionUnlockUnlimited => "nutrition.unlockUnlimited",
    SubscriptionUpgradeButton => "subscription.upgradeButton",

    QuotaMessagesExceeded => "quota.messagesExceeded",
    QuotaCallsExceeded => "quota.callsExceeded",
    QuotaAttachmentsPremium => "quota.attachmentsPremium",
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AppError::not_found(format!("Translation key '{s}'")))
    }
}

impl From<Gender> for TranslationKey {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self::GenderMale,
            Gender::Female => Self::GenderFemale,
            Gender::Other => Self::GenderOther,
        }
    }
}

impl From<MainGoal> for TranslationKey {
    fn from(goal: MainGoal) -> Self {
        match goal {
            MainGoal::FatLoss => Self::GoalFatLoss,
            MainGoal::MuscleGain => Self::GoalMuscleGain,
            MainGoal::GeneralFitness => Self::GoalGeneralFitness,
        }
    }
}

impl From<WorkoutLocation> for TranslationKey {
    fn from(location: WorkoutLocation) -> Self {
        match location {
            WorkoutLocation::Gym => Self::WorkoutGym,
            WorkoutLocation::Home => Self::WorkoutHome,
        }
    }
}

impl From<ExperienceLevel> for TranslationKey {
    fn from(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Beginner => Self::ExperienceBeginner,
            ExperienceLevel::Intermediate => Self::ExperienceIntermediate,
            ExperienceLevel::Advanced => Self::ExperienceAdvanced,
        }
    }
}

impl From<InjuryArea> for TranslationKey {
    fn from(area: InjuryArea) -> Self {
        match area {
            InjuryArea::Shoulder => Self::InjuryShoulder,
            InjuryArea::Knee => Self::InjuryKnee,
            InjuryArea::LowerBack => Self::InjuryLowerBack,
            InjuryArea::Neck => Self::InjuryNeck,
            InjuryArea::Ankle => Self::InjuryAnkle,
        }
    }
}

impl From<&PhoneValidationError> for TranslationKey {
    fn from(error: &PhoneValidationError) -> Self {
        match error {
            PhoneValidationError::Required => Self::PhoneRequired,
            PhoneValidationError::InvalidCharacters => Self::PhoneInvalidCharacters,
            PhoneValidationError::UnsupportedCountry { .. } => Self::PhoneUnsupportedCountry,
            PhoneValidationError::TooShort { .. } => Self::PhoneTooShort,
            PhoneValidationError::TooLong { .. } => Self::PhoneTooLong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_names_are_unique() {
        let names: HashSet<&str> = TranslationKey::ALL.iter().map(TranslationKey::as_str).collect();
        assert_eq!(names.len(), TranslationKey::ALL.len());
    }

    #[test]
    fn test_parse_round_trip() {
        for key in TranslationKey::ALL {
            assert_eq!(key.as_str().parse::<TranslationKey>().unwrap(), *key);
        }
        assert!("nutrition.unknown".parse::<TranslationKey>().is_err());
    }
}
