// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the Axum request harness used by the route tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
