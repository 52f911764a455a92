// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Classification of externally-reported application states

/// Classification of a state string reported by the operator.
///
/// The three known sets are disjoint; everything outside them is
/// `Unclassified` and terminates the lifecycle as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateClass {
    /// Still making progress, poll again later
    Intermediate,
    /// Terminal success
    Success,
    /// Terminal failure reported by the operator
    Failure,
    /// Not a state this version of the operator is known to report
    Unclassified,
}

/// Total classification of an arbitrary state string
pub fn classify(state: &str) -> StateClass {
    match state {
        "SUBMITTED" | "RUNNING" => StateClass::Intermediate,
        "COMPLETED" => StateClass::Success,
        "FAILED" | "SUBMISSION_FAILED" | "UNKNOWN" => StateClass::Failure,
        _ => StateClass::Unclassified,
    }
}

/// Non-error outcome of a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollVerdict {
    /// The application has not reached a terminal state; call again later
    Pending,
    /// The application completed successfully
    Succeeded,
}

impl PollVerdict {
    /// The scheduler-facing boolean: true means done, false means poll again
    pub fn is_complete(&self) -> bool {
        matches!(self, PollVerdict::Succeeded)
    }
}
