// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

// Middleware for HTTP requests

pub mod cors;
pub mod logging;
