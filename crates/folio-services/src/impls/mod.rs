// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! Service implementations

pub mod contact_service_impl;

pub use contact_service_impl::ContactServiceImpl;
