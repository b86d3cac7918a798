// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

// HTTP endpoint handlers

pub mod contact;
pub mod health;
