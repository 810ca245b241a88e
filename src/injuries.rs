// ABOUTME: Exercise substitution rules for injuries reported in the second intake
// ABOUTME: Keyword matching against exercise names plus safe alternative listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::InjuryArea;
use serde::Serialize;
use tracing::debug;

/// Sets prescribed for a suggested alternative
pub const ALTERNATIVE_SETS: u32 = 3;
/// Rep range prescribed for a suggested alternative
pub const ALTERNATIVE_REPS: &str = "10-12";
/// Rest between sets for a suggested alternative
pub const ALTERNATIVE_REST_SECONDS: u32 = 60;

/// Group of exercises that can replace a risky movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseSubstitute {
    /// Movement category being replaced
    pub category: &'static str,
    /// Replacement exercises, preferred first
    pub replacements: &'static [&'static str],
    /// Muscles the replacements target
    pub target_muscles: &'static [&'static str],
    /// Movement pattern of the replacements
    pub movement_pattern: &'static str,
    /// Why the replacement is safer
    pub reasoning: &'static str,
}

/// Movements to avoid for one injury area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InjuryRule {
    /// Injury area
    pub area: InjuryArea,
    /// Human-readable area name
    pub display_name: &'static str,
    /// Lowercase fragments of exercise names to avoid
    pub avoid_keywords: &'static [&'static str],
    /// Substitute groups, preferred first
    pub substitutes: &'static [ExerciseSubstitute],
}

impl InjuryRule {
    /// Whether `exercise_name` contains one of the avoid keywords
    #[must_use]
    pub fn matches(&self, exercise_name: &str) -> bool {
        let name = exercise_name.to_lowercase();
        self.avoid_keywords
            .iter()
            .any(|keyword| name.contains(keyword))
    }
}

/// Outcome of running an exercise through the rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionResult {
    /// Whether the exercise was replaced
    pub was_substituted: bool,
    /// Exercise as planned
    pub original_exercise: String,
    /// Exercise to perform instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_exercise: Option<String>,
    /// Why it was replaced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Injury that triggered the replacement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury: Option<InjuryArea>,
}

impl SubstitutionResult {
    fn unchanged(exercise_name: &str) -> Self {
        Self {
            was_substituted: false,
            original_exercise: exercise_name.to_owned(),
            new_exercise: None,
            reason: None,
            injury: None,
        }
    }
}

/// Alternative exercise offered from the swap sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafeAlternative {
    /// `{injury}_alt_{n}`, unique within one injury area
    pub id: String,
    /// Exercise name
    pub name: String,
    /// Target muscles joined with ", "
    pub muscle_group: String,
    /// Default set count
    pub default_sets: u32,
    /// Default rep range
    pub default_reps: String,
    /// Default rest in seconds
    pub default_rest_seconds: u32,
    /// Why it is safe
    pub reason: String,
    /// Movement category being replaced
    pub category: String,
}

/// Rule for `area`
#[must_use]
pub fn rule_for(area: InjuryArea) -> &'static InjuryRule {
    match area {
        InjuryArea::Knee => &KNEE,
        InjuryArea::Shoulder => &SHOULDER,
        InjuryArea::LowerBack => &LOWER_BACK,
        InjuryArea::Neck => &NECK,
        InjuryArea::Ankle => &ANKLE,
    }
}

/// First injury, in the given order, whose rule flags `exercise_name`
#[must_use]
pub fn should_substitute<I>(exercise_name: &str, injuries: I) -> Option<&'static InjuryRule>
where
    I: IntoIterator<Item = InjuryArea>,
{
    injuries
        .into_iter()
        .map(rule_for)
        .find(|rule| rule.matches(exercise_name))
}

/// Replace `exercise_name` with the first replacement of the first substitute
/// group of the first matching injury
#[must_use]
pub fn apply_injury_substitution<I>(exercise_name: &str, injuries: I) -> SubstitutionResult
where
    I: IntoIterator<Item = InjuryArea>,
{
    let Some(rule) = should_substitute(exercise_name, injuries) else {
        return SubstitutionResult::unchanged(exercise_name);
    };
    let Some((substitute, replacement)) = rule
        .substitutes
        .first()
        .and_then(|substitute| substitute.replacements.first().map(|name| (substitute, name)))
    else {
        return SubstitutionResult::unchanged(exercise_name);
    };

    debug!(
        exercise = exercise_name,
        replacement = *replacement,
        injury = rule.area.code(),
        "Exercise substituted for injury"
    );
    SubstitutionResult {
        was_substituted: true,
        original_exercise: exercise_name.to_owned(),
        new_exercise: Some((*replacement).to_owned()),
        reason: Some(substitute.reasoning.to_owned()),
        injury: Some(rule.area),
    }
}

/// Every replacement exercise for `injury`, optionally limited to substitute
/// groups targeting `muscle_filter`.
///
/// Ids are numbered across all groups of the rule, so an alternative keeps
/// its id whether or not a filter is applied.
#[must_use]
pub fn find_safe_alternatives(
    injury: InjuryArea,
    muscle_filter: Option<&str>,
) -> Vec<SafeAlternative> {
    let rule = rule_for(injury);
    let filter = muscle_filter.map(str::to_lowercase);

    rule.substitutes
        .iter()
        .flat_map(|substitute| {
            substitute
                .replacements
                .iter()
                .map(move |name| (substitute, *name))
        })
        .enumerate()
        .filter(|(_, (substitute, _))| {
            filter.as_deref().is_none_or(|muscle| {
                substitute
                    .target_muscles
                    .iter()
                    .any(|target| target.contains(muscle))
            })
        })
        .map(|(index, (substitute, name))| SafeAlternative {
            id: format!("{}_alt_{index}", injury.code()),
            name: name.to_owned(),
            muscle_group: substitute.target_muscles.join(", "),
            default_sets: ALTERNATIVE_SETS,
            default_reps: ALTERNATIVE_REPS.to_owned(),
            default_rest_seconds: ALTERNATIVE_REST_SECONDS,
            reason: substitute.reasoning.to_owned(),
            category: substitute.category.to_owned(),
        })
        .collect()
}

static KNEE: InjuryRule = InjuryRule {
    area: InjuryArea::Knee,
    display_name: "Knee",
    avoid_keywords: &["squat", "lunge", "jump", "leg press", "step up", "pistol"],
    substitutes: &[
        ExerciseSubstitute {
            category: "quad_compound",
            replacements: &[
                "Leg Extension",
                "Bulgarian Split Squat (shallow)",
                "Wall Sit",
                "Seated Leg Curl",
            ],
            target_muscles: &["quadriceps"],
            movement_pattern: "knee_extension",
            reasoning: "Reduced knee loading while maintaining quad stimulus",
        },
        ExerciseSubstitute {
            category: "leg_compound",
            replacements: &[
                "Glute Bridge",
                "Hip Thrust",
                "Romanian Deadlift (light)",
                "Cable Pull-through",
            ],
            target_muscles: &["glutes", "hamstrings"],
            movement_pattern: "hip_hinge",
            reasoning: "Minimal knee flexion with posterior chain emphasis",
        },
    ],
};

static SHOULDER: InjuryRule = InjuryRule {
    area: InjuryArea::Shoulder,
    display_name: "Shoulder",
    avoid_keywords: &[
        "overhead press",
        "military press",
        "pullup",
        "pull-up",
        "chin up",
        "dip",
        "behind neck",
        "upright row",
        "lateral raise",
    ],
    substitutes: &[
        ExerciseSubstitute {
            category: "shoulder_press",
            replacements: &[
                "Landmine Press",
                "Neutral Grip Dumbbell Press",
                "Machine Shoulder Press",
                "Push-up (elevated hands)",
            ],
            target_muscles: &["anterior_deltoid", "lateral_deltoid"],
            movement_pattern: "shoulder_flexion",
            reasoning: "Reduced shoulder external rotation and overhead stress",
        },
        ExerciseSubstitute {
            category: "vertical_pull",
            replacements: &[
                "Lat Pulldown (wide grip)",
                "Seated Cable Row",
                "Chest-Supported Row",
                "Inverted Row",
            ],
            target_muscles: &["latissimus_dorsi", "rhomboids"],
            movement_pattern: "shoulder_extension",
            reasoning: "Controlled range of motion, reduced shoulder strain",
        },
    ],
};

static LOWER_BACK: InjuryRule = InjuryRule {
    area: InjuryArea::LowerBack,
    display_name: "Lower Back",
    avoid_keywords: &[
        "deadlift",
        "bent over row",
        "good morning",
        "hyperextension",
        "back extension",
        "barbell row",
    ],
    substitutes: &[
        ExerciseSubstitute {
            category: "hip_hinge",
            replacements: &[
                "Trap Bar Deadlift",
                "Romanian Deadlift (light)",
                "Hip Thrust",
                "Cable Pull-through",
                "Glute-Ham Raise",
            ],
            target_muscles: &["glutes", "hamstrings"],
            movement_pattern: "hip_extension",
            reasoning: "Neutral spine position with reduced spinal loading",
        },
        ExerciseSubstitute {
            category: "horizontal_pull",
            replacements: &[
                "Chest-Supported Row",
                "Seated Cable Row",
                "Machine Row",
                "Inverted Row",
            ],
            target_muscles: &["latissimus_dorsi", "rhomboids", "traps"],
            movement_pattern: "shoulder_extension",
            reasoning: "Supported position eliminates lower back strain",
        },
    ],
};

static NECK: InjuryRule = InjuryRule {
    area: InjuryArea::Neck,
    display_name: "Neck",
    avoid_keywords: &[
        "barbell squat",
        "back squat",
        "behind neck press",
        "heavy overhead",
        "barbell shrug",
    ],
    substitutes: &[
        ExerciseSubstitute {
            category: "squat_pattern",
            replacements: &[
                "Goblet Squat",
                "Front Squat (light)",
                "Safety Bar Squat",
                "Leg Press",
                "Hack Squat",
            ],
            target_muscles: &["quadriceps", "glutes"],
            movement_pattern: "squat",
            reasoning: "Removes barbell from neck/traps, maintains squat pattern",
        },
        ExerciseSubstitute {
            category: "trap_shrug",
            replacements: &["Dumbbell Shrug", "Cable Shrug", "Face Pull", "Farmer Carry"],
            target_muscles: &["trapezius", "rhomboids"],
            movement_pattern: "scapular_elevation",
            reasoning: "Reduced cervical spine compression",
        },
    ],
};

static ANKLE: InjuryRule = InjuryRule {
    area: InjuryArea::Ankle,
    display_name: "Ankle",
    avoid_keywords: &["calf raise", "jump", "sprint", "lunge", "box jump", "jumping"],
    substitutes: &[
        ExerciseSubstitute {
            category: "lower_leg",
            replacements: &[
                "Seated Calf Raise (if tolerated)",
                "Resistance Band Ankle Work",
                "Tibialis Raise",
                "Ankle Mobility Drills",
            ],
            target_muscles: &["gastrocnemius", "soleus"],
            movement_pattern: "ankle_plantarflexion",
            reasoning: "Reduced load on ankle joint with controlled ROM",
        },
        ExerciseSubstitute {
            category: "plyometric",
            replacements: &["Cycling", "Swimming", "Elliptical", "Upper Body Cardio"],
            target_muscles: &["cardiovascular"],
            movement_pattern: "low_impact",
            reasoning: "Maintains cardio fitness without ankle impact",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_area_has_a_rule() {
        for &area in InjuryArea::ALL {
            let rule = rule_for(area);
            assert_eq!(rule.area, area);
            assert!(!rule.substitutes.is_empty());
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for &area in InjuryArea::ALL {
            for keyword in rule_for(area).avoid_keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
