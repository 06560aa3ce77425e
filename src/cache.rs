// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Single-flight support cache.
//!
//! Each capability is resolved against the hardware at most once per
//! wrapper lifetime. Failed queries stay unrecorded: "unsupported" is a
//! durable fact about the device, "the call failed" is a transient fact
//! about the call, and only the former may be cached.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::hal::HalError;
use crate::types::SupportStatus;

/// Lazily populated map from capability to its support determination.
///
/// The mutex guards only the entry lookup or insertion; the per-entry
/// [`OnceCell`] carries the single-flight guarantee. An in-flight query for
/// one capability blocks concurrent callers for that capability until the
/// query completes, and never blocks callers for any other capability.
pub struct SupportCache<C> {
    entries: Mutex<HashMap<C, Arc<OnceCell<bool>>>>,
}

impl<C: Copy + Eq + Hash> SupportCache<C> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self { entries: Mutex::new(HashMap::new()) }
    }

    /// Returns the recorded determination without touching the hardware.
    pub fn status(&self, capability: C) -> SupportStatus {
        let entries = self.entries.lock();
        match entries.get(&capability).and_then(|cell| cell.get()) {
            Some(true) => SupportStatus::Supported,
            Some(false) => SupportStatus::Unsupported,
            None => SupportStatus::Unknown,
        }
    }

    /// Returns the determination for `capability`, running `query` to
    /// produce it on first use.
    ///
    /// Exactly one caller runs `query` per capability; concurrent callers
    /// for the same capability wait for that single outcome. A failed query
    /// records nothing, so a later call will ask the hardware again.
    pub fn resolve<F>(&self, capability: C, query: F) -> Result<bool, HalError>
    where
        F: FnOnce() -> Result<bool, HalError>,
    {
        let cell = {
            let mut entries = self.entries.lock();
            Arc::clone(entries.entry(capability).or_default())
        };
        cell.get_or_try_init(query).copied()
    }
}

impl<C: Copy + Eq + Hash> Default for SupportCache<C> {
    fn default() -> Self {
        Self::new()
    }
}
