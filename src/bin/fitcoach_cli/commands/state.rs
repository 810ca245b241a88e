// ABOUTME: State commands for fitcoach-cli
// ABOUTME: Inspect the persisted key-value state and apply subscription upgrades
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach::config::AppConfig;
use fitcoach::errors::AppResult;
use fitcoach::models::SubscriptionTier;
use fitcoach::state::AppState;
use fitcoach::storage::{InMemoryStore, JsonFileStore, KeyValueStore};
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::helpers::display::print_json;

fn open_state(config: &AppConfig) -> AppResult<AppState<Box<dyn KeyValueStore>>> {
    let store: Box<dyn KeyValueStore> = match &config.state_path {
        Some(path) => Box::new(JsonFileStore::open(path)?),
        None => {
            warn!("No state file configured; using a temporary in-memory store");
            Box::new(InMemoryStore::new())
        }
    };
    Ok(AppState::new(store))
}

/// Print every stored key, plus the typed flags for `user`
pub fn show(config: &AppConfig, user: Option<&str>) -> AppResult<()> {
    let state = open_state(config)?;

    let mut entries = Map::new();
    for key in state.store().keys()? {
        if let Some(value) = state.store().get(&key)? {
            entries.insert(key, Value::String(value));
        }
    }

    let flags = match user {
        Some(user) => json!({
            "first_intake_completed": state.first_intake_completed(user)?,
            "second_intake_completed": state.second_intake_completed(user)?,
            "nutrition_preferences_completed": state.nutrition_preferences_completed(user)?,
            "pending_nutrition_intake": state.pending_nutrition_intake(user)?,
            "was_freemium": state.was_freemium(user)?,
        }),
        None => Value::Null,
    };

    print_json(&json!({
        "path": config.state_path,
        "language": state.language()?,
        "entries": entries,
        "user": flags,
    }))
}

/// Apply a tier change for `user` and print the nutrition screen they land on
pub fn upgrade(config: &AppConfig, user: &str, from: &str, to: &str) -> AppResult<()> {
    let from: SubscriptionTier = from.parse()?;
    let to: SubscriptionTier = to.parse()?;
    let state = open_state(config)?;

    let pending = state.handle_subscription_upgrade(user, from, to)?;
    let entry = state.nutrition_entry(user, to)?;
    print_json(&json!({
        "from": from,
        "to": to,
        "pending_nutrition_intake": pending,
        "nutrition_entry": entry,
    }))
}
