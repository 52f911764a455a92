// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API coordinates of the spark-on-k8s operator's SparkApplication resource
pub mod spark {
    pub const GROUP: &str = "sparkoperator.k8s.io";
    pub const VERSION: &str = "v1beta2";
    pub const PLURAL: &str = "sparkapplications";
    pub const KIND: &str = "SparkApplication";
}

/// JSON pointer to the authoritative state string in a fetched resource
pub const STATE_POINTER: &str = "/status/applicationState/state";

/// Driver polling configuration
pub mod poll {
    /// Default interval between status polls in seconds
    pub const DEFAULT_INTERVAL_SECS: u64 = 30;
}
