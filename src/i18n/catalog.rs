// ABOUTME: Built-in English and Arabic label catalogs keyed by TranslationKey
// ABOUTME: Catalogs may be partial; missing entries fall back to the dotted key name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::keys::TranslationKey;
use super::keys::TranslationKey as K;
use super::Language;
use std::collections::HashMap;

/// Labels for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<TranslationKey, String>,
}

impl Catalog {
    /// Empty catalog; every lookup falls back to the key name
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in catalog for `language`
    #[must_use]
    pub fn builtin(language: Language) -> Self {
        let table = match language {
            Language::En => ENGLISH,
            Language::Ar => ARABIC,
        };
        table.iter().copied().collect()
    }

    /// Add or replace one entry
    #[must_use]
    pub fn with_entry(mut self, key: TranslationKey, text: impl Into<String>) -> Self {
        self.entries.insert(key, text.into());
        self
    }

    /// Entry for `key`, if present
    #[must_use]
    pub fn get(&self, key: TranslationKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(TranslationKey, &'a str)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (TranslationKey, &'a str)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, text)| (key, text.to_owned()))
                .collect(),
        }
    }
}

const ENGLISH: &[(TranslationKey, &str)] = &[
    (K::CommonLoading, "Loading..."),
    (K::CommonContinue, "Continue"),
    (K::CommonBack, "Back"),
    (K::LanguageChoose, "Choose your language"),
    (K::LanguageChangeLater, "You can change this later in settings"),
    (K::AuthPhoneNumber, "Phone number"),
    (K::AuthPhoneWillReceiveOtp, "We will send a verification code to this number"),
    (K::PhoneRequired, "Phone number is required"),
    (K::PhoneInvalidCharacters, "Phone number can only contain digits"),
    (K::PhoneUnsupportedCountry, "This country is not supported yet"),
    (K::PhoneTooShort, "Phone number is too short"),
    (K::PhoneTooLong, "Phone number is too long"),
    (K::GenderTitle, "What is your gender?"),
    (K::GenderMale, "Male"),
    (K::GenderFemale, "Female"),
    (K::GenderOther, "Other"),
    (K::GoalsTitle, "What is your main goal?"),
    (K::GoalFatLoss, "Fat loss"),
    (K::GoalMuscleGain, "Muscle gain"),
    (K::GoalGeneralFitness, "General fitness"),
    (K::WorkoutLocationTitle, "Where will you train?"),
    (K::WorkoutGym, "Gym"),
    (K::WorkoutHome, "Home"),
    (K::WorkoutFrequency, "How many days per week?"),
    (K::ExperienceTitle, "What is your experience level?"),
    (K::ExperienceBeginner, "Beginner"),
    (K::ExperienceIntermediate, "Intermediate"),
    (K::ExperienceAdvanced, "Advanced"),
    (K::InjuriesTitle, "Any injuries we should know about?"),
    (K::InjuryShoulder, "Shoulder"),
    (K::InjuryKnee, "Knee"),
    (K::InjuryLowerBack, "Lower back"),
    (K::InjuryNeck, "Neck"),
    (K::InjuryAnkle, "Ankle"),
    (K::InjuryNone, "No injuries"),
    (K::IntakeFirstTitle, "Tell us about yourself"),
    (K::IntakeFirstComplete, "Your starter plan is ready"),
    (K::IntakeSecondTitle, "Personalize your plan"),
    (K::IntakeSecondComplete, "Your coach has everything needed"),
    (K::IntakeSecondIncomplete, "Please answer every question"),
    (K::NutritionExpiresIn, "Expires in {{time}}"),
    (K::NutritionDays, "{{count}} days"),
    (K::NutritionHours, "{{count}} hours"),
    (K::NutritionExpired, "Your nutrition plan has expired"),
    (K::NutritionUpgradeToKeep, "Upgrade to keep your nutrition plan"),
    (K::NutritionRegenerate, "Generate a new plan"),
    (K::NutritionFreemiumAccess, "Free plans stay available for a limited time"),
    (K::NutritionUnlockUnlimited, "Unlock unlimited nutrition plans"),
    (K::SubscriptionUpgradeButton, "Upgrade"),
    (K::QuotaMessagesExceeded, "You have used all your messages this month"),
    (K::QuotaCallsExceeded, "You have used all your video calls this month"),
    (K::QuotaAttachmentsPremium, "Attachments require Premium"),
];

const ARABIC: &[(TranslationKey, &str)] = &[
    (K::CommonLoading, "جاري التحميل..."),
    (K::CommonContinue, "متابعة"),
    (K::CommonBack, "رجوع"),
    (K::LanguageChoose, "اختر لغتك"),
    (K::LanguageChangeLater, "يمكنك تغيير ذلك لاحقاً من الإعدادات"),
    (K::AuthPhoneNumber, "رقم الجوال"),
    (K::AuthPhoneWillReceiveOtp, "سنرسل رمز التحقق إلى هذا الرقم"),
    (K::PhoneRequired, "رقم الجوال مطلوب"),
    (K::PhoneInvalidCharacters, "يجب أن يحتوي رقم الجوال على أرقام فقط"),
    (K::PhoneUnsupportedCountry, "هذه الدولة غير مدعومة حالياً"),
    (K::PhoneTooShort, "رقم الجوال قصير جداً"),
    (K::PhoneTooLong, "رقم الجوال طويل جداً"),
    (K::GenderTitle, "ما هو جنسك؟"),
    (K::GenderMale, "ذكر"),
    (K::GenderFemale, "أنثى"),
    (K::GenderOther, "آخر"),
    (K::GoalsTitle, "ما هو هدفك الرئيسي؟"),
    (K::GoalFatLoss, "خسارة الدهون"),
    (K::GoalMuscleGain, "بناء العضلات"),
    (K::GoalGeneralFitness, "لياقة عامة"),
    (K::WorkoutLocationTitle, "أين ستتمرن؟"),
    (K::WorkoutGym, "النادي"),
    (K::WorkoutHome, "المنزل"),
    (K::ExperienceBeginner, "مبتدئ"),
    (K::ExperienceIntermediate, "متوسط"),
    (K::ExperienceAdvanced, "متقدم"),
    (K::InjuryShoulder, "الكتف"),
    (K::InjuryKnee, "الركبة"),
    (K::InjuryLowerBack, "أسفل الظهر"),
    (K::InjuryNeck, "الرقبة"),
    (K::InjuryAnkle, "الكاحل"),
    (K::InjuryNone, "لا توجد إصابات"),
    (K::NutritionExpiresIn, "تنتهي خلال {{time}}"),
    (K::NutritionDays, "{{count}} أيام"),
    (K::NutritionHours, "{{count}} ساعات"),
    (K::NutritionExpired, "انتهت صلاحية خطتك الغذائية"),
    (K::NutritionUpgradeToKeep, "قم بالترقية للاحتفاظ بخطتك الغذائية"),
    (K::NutritionRegenerate, "إنشاء خطة جديدة"),
    (K::SubscriptionUpgradeButton, "ترقية"),
];
