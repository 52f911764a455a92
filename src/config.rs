// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::poll;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Driver configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the YAML manifest of the application to submit
    pub manifest_path: PathBuf,
    /// Namespace the application resource is created in
    pub namespace: String,
    /// Explicit kubeconfig path; unset means ambient credential discovery
    pub kubeconfig_path: Option<PathBuf>,
    /// Interval between status polls
    pub poll_interval: Duration,
    /// Overall deadline for the poll loop; unset means poll until terminal
    pub poll_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let manifest_path = env::var("SPARKLIFT_MANIFEST")
            .map(PathBuf::from)
            .context("SPARKLIFT_MANIFEST environment variable not set")?;
        let namespace = env::var("SPARKLIFT_NAMESPACE").unwrap_or_else(|_| "default".to_string());
        let kubeconfig_path = env::var("SPARKLIFT_KUBECONFIG").ok().map(PathBuf::from);

        let poll_interval = env::var("SPARKLIFT_POLL_INTERVAL_SECS")
            .ok()
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("SPARKLIFT_POLL_INTERVAL_SECS is not a number")?
            .unwrap_or(poll::DEFAULT_INTERVAL_SECS);

        let poll_timeout = env::var("SPARKLIFT_POLL_TIMEOUT_SECS")
            .ok()
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("SPARKLIFT_POLL_TIMEOUT_SECS is not a number")?
            .map(Duration::from_secs);

        Ok(Config {
            manifest_path,
            namespace,
            kubeconfig_path,
            poll_interval: Duration::from_secs(poll_interval),
            poll_timeout,
        })
    }
}
