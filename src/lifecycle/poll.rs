// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Point-in-time status poll against the submitted resource

use crate::constants::STATE_POINTER;
use crate::error::PollError;
use crate::kubernetes::{ResourceClient, ResourceCoordinate};
use crate::lifecycle::status::{classify, PollVerdict, StateClass};
use kube::api::DynamicObject;
use tracing::{info, instrument};

/// Fetch the resource at `coord` and classify its reported state.
///
/// Stateless per call: every invocation re-fetches from the server and no
/// cross-call memory is kept, so the caller owns the retry cadence. A
/// resource that exists but reports no `status.applicationState.state` is
/// treated as malformed and fails the lifecycle rather than being polled
/// forever.
#[instrument(skip(client), fields(coordinate = %coord))]
pub async fn poll(
    client: &ResourceClient,
    coord: &ResourceCoordinate,
) -> Result<PollVerdict, PollError> {
    let object = client
        .get_resource(coord)
        .await
        .map_err(|source| PollError::Fetch {
            coordinate: coord.to_string(),
            source,
        })?;

    let state = application_state(&object).ok_or_else(|| PollError::MissingState {
        coordinate: coord.to_string(),
    })?;

    info!("Application state: {}", state);

    match classify(&state) {
        StateClass::Intermediate => Ok(PollVerdict::Pending),
        StateClass::Success => {
            info!("Application ended successfully");
            Ok(PollVerdict::Succeeded)
        }
        StateClass::Failure => Err(PollError::FailureState {
            coordinate: coord.to_string(),
            state,
        }),
        StateClass::Unclassified => Err(PollError::UnknownState {
            coordinate: coord.to_string(),
            state,
        }),
    }
}

fn application_state(object: &DynamicObject) -> Option<String> {
    object
        .data
        .pointer(STATE_POINTER)?
        .as_str()
        .map(str::to_string)
}
