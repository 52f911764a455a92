// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Session resolution from a kubeconfig path or ambient credentials

use crate::error::SessionError;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the Kubernetes session credentials come from.
///
/// Resolved once per [`ResourceClient`](crate::kubernetes::ResourceClient);
/// there is no hidden global credential state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KubeconfigSource {
    /// Load a kubeconfig file from an explicit path
    Path(PathBuf),
    /// Use kube's default discovery (in-cluster config, `$KUBECONFIG`,
    /// or `~/.kube/config`)
    Ambient,
}

impl KubeconfigSource {
    /// Map an optional path to a source, treating absent as ambient
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => KubeconfigSource::Path(p),
            None => KubeconfigSource::Ambient,
        }
    }

    /// Resolve this source into a ready-to-use API client
    pub async fn resolve(&self) -> Result<Client, SessionError> {
        let config = match self {
            KubeconfigSource::Path(path) => {
                info!("Loading kubeconfig from {}", path.display());
                config_from_kubeconfig(path).await?
            }
            KubeconfigSource::Ambient => {
                debug!("Resolving ambient Kubernetes configuration");
                Config::infer()
                    .await
                    .map_err(|e| SessionError::AmbientConfig(e.to_string()))?
            }
        };

        Client::try_from(config).map_err(|e| SessionError::ClientConstruction(e.to_string()))
    }
}

async fn config_from_kubeconfig(path: &Path) -> Result<Config, SessionError> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| SessionError::Kubeconfig {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| SessionError::Kubeconfig {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}
