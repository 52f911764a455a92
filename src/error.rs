// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the submit/poll lifecycle.
//!
//! Session establishment, API calls, submission and polling fail in
//! distinct ways and are kept as distinct types so a function signature
//! only admits the failures its phase can actually produce.

use thiserror::Error;

/// Failure to obtain a usable Kubernetes session from the configured
/// credential source. Never retried internally.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to read kubeconfig at {path}: {reason}")]
    Kubeconfig { path: String, reason: String },

    #[error("failed to resolve ambient Kubernetes configuration: {0}")]
    AmbientConfig(String),

    #[error("failed to construct Kubernetes client: {0}")]
    ClientConstruction(String),
}

/// A create/get call rejected by the API server or the transport,
/// carried verbatim with the operation and coordinate attached.
#[derive(Error, Debug)]
#[error("{operation} {coordinate} failed: {source}")]
pub struct ApiError {
    pub operation: &'static str,
    pub coordinate: String,
    #[source]
    pub source: kube::Error,
}

impl ApiError {
    /// HTTP status code reported by the server, if this was a server-side
    /// rejection rather than a transport failure.
    pub fn status_code(&self) -> Option<u16> {
        match &self.source {
            kube::Error::Api(response) => Some(response.code),
            _ => None,
        }
    }
}

/// Any failure surfaced by [`ResourceClient`](crate::kubernetes::ResourceClient).
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("manifest is not a valid resource document: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

/// A failed submission. Always fatal to the lifecycle; the create is
/// all-or-nothing at the API layer, so there is nothing to clean up.
#[derive(Error, Debug)]
#[error("failed to submit {coordinate}: {source}")]
pub struct SubmitError {
    pub coordinate: String,
    #[source]
    pub source: ClientError,
}

/// A terminal poll outcome. Raised instead of returned: the scheduler
/// contract is "verdict on success, error aborts the lifecycle".
#[derive(Error, Debug)]
pub enum PollError {
    #[error("failed to fetch {coordinate}: {source}")]
    Fetch {
        coordinate: String,
        #[source]
        source: ClientError,
    },

    #[error("application {coordinate} failed with state: {state}")]
    FailureState { coordinate: String, state: String },

    #[error("unknown application state for {coordinate}: {state}")]
    UnknownState { coordinate: String, state: String },

    #[error("{coordinate} reports no status.applicationState.state field")]
    MissingState { coordinate: String },
}

impl PollError {
    /// The state string the server reported, when one was observed at all.
    pub fn state_observed(&self) -> Option<&str> {
        match self {
            PollError::FailureState { state, .. } | PollError::UnknownState { state, .. } => {
                Some(state)
            }
            PollError::Fetch { .. } | PollError::MissingState { .. } => None,
        }
    }
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
