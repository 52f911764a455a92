// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Submit-then-poll lifecycle: one create, then stateless status polls
//! until a terminal verdict

mod poll;
mod status;
mod submit;

pub use poll::poll;
pub use status::{classify, PollVerdict, StateClass};
pub use submit::submit;
