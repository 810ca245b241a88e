// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Environment variables for nutrition windows, phone defaults, language and storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, Environment, NutritionConfig};
