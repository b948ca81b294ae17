// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for configuration resolution, client creation, and dynamic object creation.

pub mod client;
pub mod dynamic;

pub use client::{build_client, resolve_config};
pub use dynamic::{to_dynamic, DynamicClient, ObjectCreator};
