// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns scripted responses based on request
/// method and path.
///
/// Each (method, path) key holds a queue of responses; successive requests
/// consume the queue and the last entry stays sticky, so a test can script
/// an application moving through SUBMITTED, RUNNING, COMPLETED across
/// repeated polls.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), VecDeque<(u16, String)>>>>,
    hits: Arc<Mutex<HashMap<(String, String), usize>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            hits: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a sticky response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on_get_sequence(path, vec![(status, body.to_string())])
    }

    /// Script a sequence of responses for GET requests on the exact path
    pub fn on_get_sequence(self, path: &str, responses: Vec<(u16, String)>) -> Self {
        self.insert("GET", path, responses);
        self
    }

    /// Add a sticky response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on_post_sequence(path, vec![(status, body.to_string())])
    }

    /// Script a sequence of responses for POST requests on the exact path
    pub fn on_post_sequence(self, path: &str, responses: Vec<(u16, String)>) -> Self {
        self.insert("POST", path, responses);
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn insert(&self, method: &str, path: &str, responses: Vec<(u16, String)>) {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), responses.into());
    }

    /// How many requests this service has seen for (method, path)
    pub fn hits(&self, method: &str, path: &str) -> usize {
        self.hits
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .copied()
            .unwrap_or(0)
    }

    fn next_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        *self
            .hits
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_insert(0) += 1;

        let mut responses = self.responses.lock().unwrap();
        let queue = responses.get_mut(&(method.to_string(), path.to_string()))?;

        // Keep the final scripted response sticky for later requests
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let response = self.next_response(&method, &path);

        Box::pin(async move {
            match response {
                Some((status, body)) => Ok(Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap()),
                None => {
                    // Default 404 for unmatched requests
                    let body = status_json("NotFound", 404, "not found");
                    Ok(Response::builder()
                        .status(404)
                        .header("content-type", "application/json")
                        .body(Body::from(body.into_bytes()))
                        .unwrap())
                }
            }
        })
    }
}

/// A SparkApplication document reporting the given application state
pub fn application_json(name: &str, state: &str) -> String {
    serde_json::json!({
        "apiVersion": "sparkoperator.k8s.io/v1beta2",
        "kind": "SparkApplication",
        "metadata": {
            "name": name,
            "namespace": "default",
            "resourceVersion": "12345",
            "uid": "test-uid"
        },
        "spec": {
            "type": "Scala",
            "mode": "cluster"
        },
        "status": {
            "applicationState": {
                "state": state
            }
        }
    })
    .to_string()
}

/// A Kubernetes `Status` error document
pub fn status_json(reason: &str, code: u16, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}
