// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tokio::time::sleep;
use tracing::info;

use sparklift::config::Config;
use sparklift::kubernetes::{KubeconfigSource, ResourceClient, ResourceCoordinate, ResourcePayload};
use sparklift::lifecycle::{poll, submit};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Submitting {} to namespace {}",
        config.manifest_path.display(),
        config.namespace
    );

    let manifest = std::fs::read_to_string(&config.manifest_path).with_context(|| {
        format!(
            "failed to read manifest {}",
            config.manifest_path.display()
        )
    })?;
    let mut payload = ResourcePayload::from_yaml(&manifest).context("failed to parse manifest")?;

    // Unique per run so a retried run never collides with an earlier attempt
    let name = run_name(payload.name().unwrap_or("spark-app"));
    payload.set_name(&name);

    let coord = ResourceCoordinate::spark_application(&config.namespace, &name);
    let client = ResourceClient::new(KubeconfigSource::from_path(config.kubeconfig_path.clone()));

    submit(&client, &coord, &payload).await?;

    // Poll on a fixed interval until a terminal verdict; any error aborts
    // the run and propagates to the caller.
    let started = Instant::now();
    loop {
        if poll(&client, &coord).await?.is_complete() {
            info!("Application {} completed", name);
            return Ok(());
        }

        if let Some(timeout) = config.poll_timeout {
            if started.elapsed() >= timeout {
                bail!("timed out after {:?} waiting for {}", timeout, coord);
            }
        }

        sleep(config.poll_interval).await;
    }
}

fn run_name(base: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{base}-{timestamp}")
}
