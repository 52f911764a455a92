// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespaced custom-object create/get against a (group, version,
//! namespace, plural, name) coordinate

use crate::constants::spark;
use crate::error::{ApiError, ClientError, Result, SessionError};
use crate::kubernetes::KubeconfigSource;
use kube::api::{Api, ApiResource, DynamicObject, PostParams};
use kube::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};

/// Identifies exactly one custom resource instance on the cluster.
///
/// Immutable for the lifetime of a submit/poll pair. `name` must be unique
/// per run; retried runs pick a fresh name rather than reusing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCoordinate {
    pub group: String,
    pub version: String,
    pub namespace: String,
    pub plural: String,
    pub name: String,
}

impl ResourceCoordinate {
    pub fn new(group: &str, version: &str, namespace: &str, plural: &str, name: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            namespace: namespace.to_string(),
            plural: plural.to_string(),
            name: name.to_string(),
        }
    }

    /// Coordinate for a SparkApplication managed by the spark-on-k8s operator
    pub fn spark_application(namespace: &str, name: &str) -> Self {
        Self::new(spark::GROUP, spark::VERSION, namespace, spark::PLURAL, name)
    }

    fn api_resource(&self) -> ApiResource {
        // Only group/version/plural take part in request routing; the kind
        // travels inside the payload itself.
        ApiResource {
            group: self.group.clone(),
            version: self.version.clone(),
            api_version: format!("{}/{}", self.group, self.version),
            kind: String::new(),
            plural: self.plural.clone(),
        }
    }
}

impl fmt::Display for ResourceCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/apis/{}/{}/namespaces/{}/{}/{}",
            self.group, self.version, self.namespace, self.plural, self.name
        )
    }
}

/// The full desired-state manifest, carried as an opaque document.
///
/// The templating layer owns its contents; the only mutation performed
/// here is [`set_name`](ResourcePayload::set_name) before submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourcePayload(Value);

impl ResourcePayload {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parse a YAML manifest into a payload
    pub fn from_yaml(manifest: &str) -> Result<Self, serde_yaml::Error> {
        Ok(Self(serde_yaml::from_str(manifest)?))
    }

    /// The `metadata.name` currently set on the manifest, if any
    pub fn name(&self) -> Option<&str> {
        self.0.pointer("/metadata/name")?.as_str()
    }

    /// Set `metadata.name`, creating the metadata section if absent
    pub fn set_name(&mut self, name: &str) {
        if let Value::Object(root) = &mut self.0 {
            let metadata = root
                .entry("metadata")
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(metadata) = metadata {
                metadata.insert("name".to_string(), Value::String(name.to_string()));
            }
        }
    }

    fn to_dynamic(&self) -> Result<DynamicObject> {
        serde_json::from_value(self.0.clone()).map_err(ClientError::InvalidPayload)
    }
}

/// Client for namespaced custom-object operations.
///
/// The session is resolved from the configured [`KubeconfigSource`] on
/// first use and reused afterwards. Each lifecycle owns its own client;
/// nothing is shared across coordinates.
pub struct ResourceClient {
    source: KubeconfigSource,
    session: OnceCell<Client>,
}

impl ResourceClient {
    pub fn new(source: KubeconfigSource) -> Self {
        Self {
            source,
            session: OnceCell::new(),
        }
    }

    /// Build a client around an already-resolved session
    pub fn with_session(session: Client) -> Self {
        Self {
            source: KubeconfigSource::Ambient,
            session: OnceCell::new_with(Some(session)),
        }
    }

    async fn session(&self) -> Result<&Client, SessionError> {
        self.session
            .get_or_try_init(|| self.source.resolve())
            .await
    }

    fn api(session: &Client, coord: &ResourceCoordinate) -> Api<DynamicObject> {
        Api::namespaced_with(session.clone(), &coord.namespace, &coord.api_resource())
    }

    /// Create the resource described by `payload` at `coord`.
    ///
    /// The server enforces name uniqueness; an existing resource with the
    /// same name comes back as a 409 [`ApiError`]. Returns the server's
    /// stored representation.
    #[instrument(skip(self, payload), fields(coordinate = %coord))]
    pub async fn create_resource(
        &self,
        coord: &ResourceCoordinate,
        payload: &ResourcePayload,
    ) -> Result<DynamicObject> {
        let session = self.session().await?;
        let object = payload.to_dynamic()?;

        debug!("Creating custom resource");
        Self::api(session, coord)
            .create(&PostParams::default(), &object)
            .await
            .map_err(|source| {
                ClientError::Api(ApiError {
                    operation: "create",
                    coordinate: coord.to_string(),
                    source,
                })
            })
    }

    /// Fetch the current stored representation of the resource at `coord`
    #[instrument(skip(self), fields(coordinate = %coord))]
    pub async fn get_resource(&self, coord: &ResourceCoordinate) -> Result<DynamicObject> {
        let session = self.session().await?;

        debug!("Fetching custom resource");
        Self::api(session, coord)
            .get(&coord.name)
            .await
            .map_err(|source| {
                ClientError::Api(ApiError {
                    operation: "get",
                    coordinate: coord.to_string(),
                    source,
                })
            })
    }
}
