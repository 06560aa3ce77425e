// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Seam between the wrapper and whatever actually reaches the hardware.
//!
//! The production binding (an IDL client over the kernel transport) lives
//! with the daemon that owns the connection; tests inject scripted doubles.
//! Either way the implementation is chosen at construction time and shared
//! behind an [`std::sync::Arc`].

use thiserror::Error;

use crate::types::{Boost, Mode};

/// Errors surfaced by a remote HAL call.
///
/// Both variants are transient from the wrapper's point of view: they
/// describe the call, not the hardware, and are therefore never cached.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HalError {
    /// The HAL connection dropped mid-call.
    #[error("hal connection lost")]
    Disconnected,
    /// The remote side rejected or failed the transaction.
    #[error("hal transaction failed: {0}")]
    Transaction(String),
}

/// Blocking operations exposed by the power HAL service.
///
/// Support queries and control calls are separate round trips; a control
/// call is only valid for a capability whose support query answered `true`.
/// On error the payload is absent by construction, so a failed query can
/// never be mistaken for a support determination.
pub trait PowerHal: Send + Sync {
    /// Asks the hardware whether `boost` is implemented.
    fn is_boost_supported(&self, boost: Boost) -> Result<bool, HalError>;

    /// Applies `boost` for `duration_ms` milliseconds (zero means the
    /// device default duration).
    fn set_boost(&self, boost: Boost, duration_ms: i32) -> Result<(), HalError>;

    /// Asks the hardware whether `mode` is implemented.
    fn is_mode_supported(&self, mode: Mode) -> Result<bool, HalError>;

    /// Enables or disables `mode`.
    fn set_mode(&self, mode: Mode, enabled: bool) -> Result<(), HalError>;
}
