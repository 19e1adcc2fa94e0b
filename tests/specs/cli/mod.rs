// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral tests for running, filtering and listing tests.

#[path = "run.rs"]
mod run;

#[path = "filter.rs"]
mod filter;

#[path = "list.rs"]
mod list;
