// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes session resolution and custom-object access

mod resources;
mod session;

pub use resources::{ResourceClient, ResourceCoordinate, ResourcePayload};
pub use session::KubeconfigSource;
