// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Capability-caching wrapper around the power HAL.
//!
//! The power manager daemon issues boost and mode requests without knowing
//! which of them the device implements, and asking the HAL is itself a
//! blocking remote call. This crate memoizes every support determination:
//! each capability is checked against the hardware at most once per
//! process, concurrent callers for the same capability collapse into a
//! single query, and capabilities known to be unsupported short-circuit
//! without remote traffic. Transient call failures are surfaced to the
//! caller and never cached, so a flaky query can be retried while a
//! genuine "unsupported" verdict sticks forever.
//!
//! The HAL itself sits behind the [`PowerHal`] trait; the daemon injects
//! the production binding at construction and tests inject scripted
//! doubles. Devices without a power HAL service use [`EmptyHalWrapper`].

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]

mod cache;
mod hal;
mod types;
mod wrapper;

pub use cache::SupportCache;
pub use hal::{HalError, PowerHal};
pub use types::{Boost, HalResult, Mode, SupportStatus};
pub use wrapper::{CachingHalWrapper, EmptyHalWrapper, HalWrapper};
