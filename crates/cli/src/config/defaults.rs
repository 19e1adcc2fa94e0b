// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file name searched for by discovery.
pub const CONFIG_FILE: &str = "trial.toml";

/// Tests slower than this multiple of the average are called out (1.5).
pub const SLOW_FACTOR: f64 = 1.5;
