// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Shared helpers for fitcoach-cli
// ABOUTME: Argument parsing and output formatting

pub mod args;
pub mod display;
