// ABOUTME: Two-stage onboarding intake models: answer enums, drafts and completed records
// ABOUTME: Drafts hold optional answers while the user steps through the questionnaire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::intake::{FIRST_INTAKE_STEPS, SECOND_INTAKE_STEPS};
use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Declares an answer enum with stable snake_case codes and parsing
macro_rules! answer_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// All answers in questionnaire order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable code used in ids and storage
            #[must_use]
            pub const fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Parse a code, ignoring case and surrounding whitespace
            #[must_use]
            pub fn from_code(code: &str) -> Option<Self> {
                let code = code.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|answer| answer.code().eq_ignore_ascii_case(code))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_code(s).ok_or_else(|| {
                    let expected: Vec<&str> = Self::ALL.iter().map(Self::code).collect();
                    AppError::invalid_input(format!(
                        "Unknown {} '{s}'; expected one of: {}",
                        stringify!($name),
                        expected.join(", ")
                    ))
                })
            }
        }
    };
}

answer_enum! {
    /// Gender answer
    Gender {
        /// Male
        Male => "male",
        /// Female
        Female => "female",
        /// Other / prefer not to say
        Other => "other",
    }
}

answer_enum! {
    /// Primary fitness goal
    MainGoal {
        /// Lose body fat
        FatLoss => "fat_loss",
        /// Build muscle
        MuscleGain => "muscle_gain",
        /// General fitness
        GeneralFitness => "general_fitness",
    }
}

answer_enum! {
    /// Where the user trains
    WorkoutLocation {
        /// Commercial or home gym with equipment
        Gym => "gym",
        /// At home, little equipment
        Home => "home",
    }
}

answer_enum! {
    /// Training experience
    ExperienceLevel {
        /// Under a year of training
        Beginner => "beginner",
        /// One to three years
        Intermediate => "intermediate",
        /// More than three years
        Advanced => "advanced",
    }
}

answer_enum! {
    /// Body area with a reported injury
    InjuryArea {
        /// Shoulder
        Shoulder => "shoulder",
        /// Knee
        Knee => "knee",
        /// Lower back
        LowerBack => "lower_back",
        /// Neck
        Neck => "neck",
        /// Ankle
        Ankle => "ankle",
    }
}

/// Completed first intake (all users)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstIntakeData {
    /// Gender
    pub gender: Gender,
    /// Main goal
    pub main_goal: MainGoal,
    /// Workout location
    pub workout_location: WorkoutLocation,
    /// When the questionnaire was finished
    pub completed_at: DateTime<Utc>,
}

/// Completed second intake (Premium and above)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondIntakeData {
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimetres
    pub height_cm: f64,
    /// Training experience
    pub experience_level: ExperienceLevel,
    /// Workout days per week
    pub workout_frequency: u32,
    /// Reported injuries, empty when none
    pub injuries: BTreeSet<InjuryArea>,
    /// When the questionnaire was finished
    pub completed_at: DateTime<Utc>,
}

/// First intake answers collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstIntakeDraft {
    /// Step 1
    pub gender: Option<Gender>,
    /// Step 2
    pub main_goal: Option<MainGoal>,
    /// Step 3
    pub workout_location: Option<WorkoutLocation>,
}

impl FirstIntakeDraft {
    /// Steps with an answer
    #[must_use]
    pub fn answered_steps(&self) -> usize {
        [
            self.gender.is_some(),
            self.main_goal.is_some(),
            self.workout_location.is_some(),
        ]
        .into_iter()
        .filter(|answered| *answered)
        .count()
    }

    /// Total number of steps
    #[must_use]
    pub const fn total_steps(&self) -> usize {
        FIRST_INTAKE_STEPS
    }
}

/// Second intake answers collected so far
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondIntakeDraft {
    /// Step 1
    pub age: Option<u32>,
    /// Step 2, together with height
    pub weight_kg: Option<f64>,
    /// Step 2, together with weight
    pub height_cm: Option<f64>,
    /// Step 3
    pub experience_level: Option<ExperienceLevel>,
    /// Step 4
    pub workout_frequency: Option<u32>,
    /// Step 5; `Some(empty)` means the user answered "none"
    pub injuries: Option<BTreeSet<InjuryArea>>,
}

impl SecondIntakeDraft {
    /// Steps with an answer
    #[must_use]
    pub fn answered_steps(&self) -> usize {
        [
            self.age.is_some(),
            self.weight_kg.is_some() && self.height_cm.is_some(),
            self.experience_level.is_some(),
            self.workout_frequency.is_some(),
            self.injuries.is_some(),
        ]
        .into_iter()
        .filter(|answered| *answered)
        .count()
    }

    /// Total number of steps
    #[must_use]
    pub const fn total_steps(&self) -> usize {
        SECOND_INTAKE_STEPS
    }
}

/// Validation report for an intake draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeValidation {
    /// True iff `errors` is empty
    pub is_valid: bool,
    /// One message per failing field
    pub errors: Vec<String>,
}

impl IntakeValidation {
    /// Build a report from the collected errors
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
