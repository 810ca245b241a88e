// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for fitcoach-cli
// ABOUTME: One module per top-level subcommand

pub mod injury;
pub mod intake;
pub mod nutrition;
pub mod phone;
pub mod quota;
pub mod state;
pub mod translate;
