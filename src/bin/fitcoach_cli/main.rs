// ABOUTME: FitCoach CLI - command-line access to the app's validation and policy logic
// ABOUTME: Phone, intake, nutrition, quota, injury, translation and state commands with JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Validate a Saudi mobile number
//! fitcoach-cli phone validate "050 123 4567" --dial-code +966
//!
//! # Check a Freemium nutrition plan created on the 1st
//! fitcoach-cli nutrition status --created-at 2025-03-01T09:00:00Z
//!
//! # Would a knee injury swap out this exercise?
//! fitcoach-cli injury substitute "Barbell Back Squat" --injuries knee
//!
//! # Translate a label into Arabic
//! fitcoach-cli translate nutrition.expired --language ar
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use fitcoach::config::AppConfig;
use fitcoach::errors::AppResult;
use fitcoach::logging::LoggingConfig;
use fitcoach::models::QuotaAction;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "fitcoach-cli",
    about = "FitCoach application logic CLI",
    long_about = "Run the FitCoach validators, nutrition expiry, quota and injury rules from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Phone number validation and display
    Phone {
        #[command(subcommand)]
        action: PhoneCommand,
    },

    /// Intake questionnaire validation
    Intake {
        #[command(subcommand)]
        action: IntakeCommand,
    },

    /// Nutrition plan expiry
    Nutrition {
        #[command(subcommand)]
        action: NutritionCommand,
    },

    /// Monthly quota checks
    Quota {
        #[command(subcommand)]
        action: QuotaCommand,
    },

    /// Injury substitution rules
    Injury {
        #[command(subcommand)]
        action: InjuryCommand,
    },

    /// Look up a translation key
    Translate {
        /// Dotted key, e.g. nutrition.expiresIn
        key: String,

        /// Language code (defaults to FITCOACH_LANGUAGE)
        #[arg(long)]
        language: Option<String>,

        /// Placeholder values as name=value
        #[arg(long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,
    },

    /// Persisted app state
    State {
        #[command(subcommand)]
        action: StateCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PhoneCommand {
    /// Validate a typed number and print its E.164 form
    Validate {
        /// Number as typed by the user
        number: String,

        /// Country dial code (defaults to FITCOACH_DEFAULT_DIAL_CODE)
        #[arg(long)]
        dial_code: Option<String>,
    },

    /// Format an E.164 number for display
    Format {
        /// E.164 number
        e164: String,
    },

    /// Mask an E.164 number
    Mask {
        /// E.164 number
        e164: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum IntakeCommand {
    /// Validate first intake answers
    First {
        /// male, female or other
        #[arg(long)]
        gender: Option<String>,

        /// fat_loss, muscle_gain or general_fitness
        #[arg(long)]
        goal: Option<String>,

        /// gym or home
        #[arg(long)]
        location: Option<String>,
    },

    /// Validate second intake answers
    Second {
        /// Subscription tier of the user
        #[arg(long, default_value = "premium")]
        tier: String,

        /// Age in years
        #[arg(long)]
        age: Option<u32>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Height in centimetres
        #[arg(long)]
        height: Option<f64>,

        /// beginner, intermediate or advanced
        #[arg(long)]
        experience: Option<String>,

        /// Workout days per week
        #[arg(long)]
        frequency: Option<u32>,

        /// Comma-separated injury areas, empty for none
        #[arg(long)]
        injuries: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum NutritionCommand {
    /// Expiry status of a plan
    Status {
        /// Subscription tier
        #[arg(long, default_value = "freemium")]
        tier: String,

        /// Plan creation time, RFC 3339
        #[arg(long)]
        created_at: String,

        /// Evaluation time, RFC 3339 (defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Window override in days
        #[arg(long)]
        window_days: Option<u32>,

        /// Banner language (defaults to FITCOACH_LANGUAGE)
        #[arg(long)]
        language: Option<String>,
    },
}

/// Quota action argument
#[derive(Clone, Copy, ValueEnum)]
enum ActionArg {
    Message,
    Call,
    Attachment,
}

impl From<ActionArg> for QuotaAction {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Message => Self::Message,
            ActionArg::Call => Self::Call,
            ActionArg::Attachment => Self::Attachment,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum QuotaCommand {
    /// Check whether an action is allowed
    Check {
        /// Subscription tier
        #[arg(long, default_value = "freemium")]
        tier: String,

        /// Action to check
        #[arg(long, value_enum)]
        action: ActionArg,

        /// Messages already sent this month
        #[arg(long, default_value = "0")]
        messages_used: u32,

        /// Calls already booked this month
        #[arg(long, default_value = "0")]
        calls_used: u32,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum InjuryCommand {
    /// Apply substitution rules to an exercise
    Substitute {
        /// Exercise name
        exercise: String,

        /// Comma-separated injury areas, first match wins
        #[arg(long)]
        injuries: String,
    },

    /// List safe alternatives for an injury area
    Alternatives {
        /// Injury area
        injury: String,

        /// Only groups targeting this muscle
        #[arg(long)]
        muscle: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum StateCommand {
    /// Print stored keys, and a user's flags when given
    Show {
        /// Phone number the flags are scoped to
        #[arg(long)]
        user: Option<String>,
    },

    /// Apply a subscription change and print the resulting nutrition screen
    Upgrade {
        /// Phone number the flags are scoped to
        #[arg(long)]
        user: String,

        /// Previous tier
        #[arg(long, default_value = "freemium")]
        from: String,

        /// New tier
        #[arg(long)]
        to: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    let config = AppConfig::from_env()?;
    debug!(environment = %config.environment, "Configuration loaded");

    match cli.command {
        Command::Phone { action } => match action {
            PhoneCommand::Validate { number, dial_code } => {
                commands::phone::validate(&config, &number, dial_code.as_deref())?;
            }
            PhoneCommand::Format { e164 } => commands::phone::format(&e164),
            PhoneCommand::Mask { e164 } => commands::phone::mask(&e164),
        },
        Command::Intake { action } => match action {
            IntakeCommand::First {
                gender,
                goal,
                location,
            } => {
                commands::intake::first(gender.as_deref(), goal.as_deref(), location.as_deref())?;
            }
            IntakeCommand::Second {
                tier,
                age,
                weight,
                height,
                experience,
                frequency,
                injuries,
            } => {
                commands::intake::second(
                    &tier,
                    &commands::intake::SecondAnswers {
                        age,
                        weight,
                        height,
                        experience,
                        frequency,
                        injuries,
                    },
                )?;
            }
        },
        Command::Nutrition { action } => match action {
            NutritionCommand::Status {
                tier,
                created_at,
                now,
                window_days,
                language,
            } => {
                commands::nutrition::status(
                    &config,
                    &tier,
                    &created_at,
                    now.as_deref(),
                    window_days,
                    language.as_deref(),
                )?;
            }
        },
        Command::Quota { action } => match action {
            QuotaCommand::Check {
                tier,
                action,
                messages_used,
                calls_used,
            } => {
                commands::quota::check(&tier, action.into(), messages_used, calls_used)?;
            }
        },
        Command::Injury { action } => match action {
            InjuryCommand::Substitute { exercise, injuries } => {
                commands::injury::substitute(&exercise, &injuries)?;
            }
            InjuryCommand::Alternatives { injury, muscle } => {
                commands::injury::alternatives(&injury, muscle.as_deref())?;
            }
        },
        Command::Translate {
            key,
            language,
            params,
        } => {
            commands::translate::run(&config, &key, language.as_deref(), &params)?;
        }
        Command::State { action } => match action {
            StateCommand::Show { user } => commands::state::show(&config, user.as_deref())?,
            StateCommand::Upgrade { user, from, to } => {
                commands::state::upgrade(&config, &user, &from, &to)?;
            }
        },
    }

    Ok(())
}
