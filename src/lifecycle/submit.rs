// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One-shot submission of the desired-state manifest

use crate::error::SubmitError;
use crate::kubernetes::{ResourceClient, ResourceCoordinate, ResourcePayload};
use kube::ResourceExt;
use tracing::{info, instrument};

/// Create the resource at `coord` from `payload`.
///
/// Exactly one resource is created on success; on failure nothing was
/// created and the lifecycle is over. Not idempotent: submitting the same
/// name twice fails with the server's AlreadyExists rejection, so callers
/// pick a fresh name per attempt.
#[instrument(skip(client, payload), fields(coordinate = %coord))]
pub async fn submit(
    client: &ResourceClient,
    coord: &ResourceCoordinate,
    payload: &ResourcePayload,
) -> Result<(), SubmitError> {
    info!("Creating application resource");

    let created = client
        .create_resource(coord, payload)
        .await
        .map_err(|source| SubmitError {
            coordinate: coord.to_string(),
            source,
        })?;

    info!(
        "Created {} (resourceVersion {})",
        created.name_any(),
        created.resource_version().unwrap_or_default()
    );
    Ok(())
}
