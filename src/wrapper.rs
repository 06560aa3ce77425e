// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Caller-facing façade over the power HAL.
//!
//! Every request resolves the capability's support status through the
//! cache first and only then forwards the control call, so a capability
//! the device lacks costs one remote round trip ever, and a capability the
//! device has costs one extra round trip on first use.

use std::sync::Arc;

use log::{debug, warn};

use crate::cache::SupportCache;
use crate::hal::PowerHal;
use crate::types::{Boost, HalResult, Mode, SupportStatus};

/// Control surface consumed by the power manager daemon.
pub trait HalWrapper: Send + Sync {
    /// Requests `boost` for `duration_ms` milliseconds.
    fn set_boost(&self, boost: Boost, duration_ms: i32) -> HalResult;

    /// Enables or disables `mode`.
    fn set_mode(&self, mode: Mode, enabled: bool) -> HalResult;
}

/// Wrapper bound to a live HAL connection.
///
/// Support determinations are memoized per capability and per family; the
/// boost and mode identifier spaces never share an entry. One instance is
/// constructed per process and lives as long as the connection it wraps.
pub struct CachingHalWrapper<H> {
    hal: Arc<H>,
    boost_support: SupportCache<Boost>,
    mode_support: SupportCache<Mode>,
}

impl<H: PowerHal> CachingHalWrapper<H> {
    /// Binds the wrapper to `hal`.
    ///
    /// The handle is shared rather than owned: the registration layer
    /// keeps its own reference for connection lifecycle handling.
    pub fn new(hal: Arc<H>) -> Self {
        Self {
            hal,
            boost_support: SupportCache::new(),
            mode_support: SupportCache::new(),
        }
    }

    /// Reports the cached determination for `boost`, without remote traffic.
    pub fn boost_support(&self, boost: Boost) -> SupportStatus {
        self.boost_support.status(boost)
    }

    /// Reports the cached determination for `mode`, without remote traffic.
    pub fn mode_support(&self, mode: Mode) -> SupportStatus {
        self.mode_support.status(mode)
    }
}

impl<H: PowerHal> HalWrapper for CachingHalWrapper<H> {
    fn set_boost(&self, boost: Boost, duration_ms: i32) -> HalResult {
        let supported = match self
            .boost_support
            .resolve(boost, || self.hal.is_boost_supported(boost))
        {
            Ok(supported) => supported,
            Err(err) => {
                warn!("powerhal: boost {boost} support query failed: {err}");
                return HalResult::Failed;
            }
        };
        if !supported {
            debug!("powerhal: skipping boost {boost}, not supported on this device");
            return HalResult::Unsupported;
        }
        match self.hal.set_boost(boost, duration_ms) {
            Ok(()) => HalResult::Successful,
            Err(err) => {
                warn!("powerhal: set_boost {boost} failed: {err}");
                HalResult::Failed
            }
        }
    }

    fn set_mode(&self, mode: Mode, enabled: bool) -> HalResult {
        let supported = match self
            .mode_support
            .resolve(mode, || self.hal.is_mode_supported(mode))
        {
            Ok(supported) => supported,
            Err(err) => {
                warn!("powerhal: mode {mode} support query failed: {err}");
                return HalResult::Failed;
            }
        };
        if !supported {
            debug!("powerhal: skipping mode {mode}, not supported on this device");
            return HalResult::Unsupported;
        }
        match self.hal.set_mode(mode, enabled) {
            Ok(()) => HalResult::Successful,
            Err(err) => {
                warn!("powerhal: set_mode {mode} failed: {err}");
                HalResult::Failed
            }
        }
    }
}

/// Fallback wrapper for devices that expose no power HAL service at all.
///
/// Every request is reported unsupported without any remote traffic, so
/// the daemon can run the same code path on HAL-less hardware.
pub struct EmptyHalWrapper;

impl EmptyHalWrapper {
    /// Creates the no-op wrapper.
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmptyHalWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl HalWrapper for EmptyHalWrapper {
    fn set_boost(&self, boost: Boost, _duration_ms: i32) -> HalResult {
        debug!("powerhal: no hal service, boost {boost} unsupported");
        HalResult::Unsupported
    }

    fn set_mode(&self, mode: Mode, _enabled: bool) -> HalResult {
        debug!("powerhal: no hal service, mode {mode} unsupported");
        HalResult::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{CachingHalWrapper, EmptyHalWrapper, HalWrapper};
    use crate::hal::{HalError, PowerHal};
    use crate::types::{Boost, HalResult, Mode, SupportStatus};

    /// Answers every support query with a fixed verdict per family.
    struct StaticHal {
        boosts_supported: bool,
        modes_supported: bool,
    }

    impl PowerHal for StaticHal {
        fn is_boost_supported(&self, _boost: Boost) -> Result<bool, HalError> {
            Ok(self.boosts_supported)
        }

        fn set_boost(&self, _boost: Boost, _duration_ms: i32) -> Result<(), HalError> {
            Ok(())
        }

        fn is_mode_supported(&self, _mode: Mode) -> Result<bool, HalError> {
            Ok(self.modes_supported)
        }

        fn set_mode(&self, _mode: Mode, _enabled: bool) -> Result<(), HalError> {
            Ok(())
        }
    }

    #[test]
    fn empty_wrapper_reports_everything_unsupported() {
        let wrapper = EmptyHalWrapper::new();
        for boost in Boost::ALL {
            assert_eq!(wrapper.set_boost(boost, 100), HalResult::Unsupported);
        }
        for mode in Mode::ALL {
            assert_eq!(wrapper.set_mode(mode, true), HalResult::Unsupported);
        }
    }

    #[test]
    fn support_peek_tracks_requests_per_family() {
        let hal = Arc::new(StaticHal { boosts_supported: true, modes_supported: false });
        let wrapper = CachingHalWrapper::new(hal);

        assert_eq!(wrapper.boost_support(Boost::Interaction), SupportStatus::Unknown);
        assert_eq!(wrapper.mode_support(Mode::Launch), SupportStatus::Unknown);

        assert_eq!(wrapper.set_boost(Boost::Interaction, 100), HalResult::Successful);
        assert_eq!(wrapper.set_mode(Mode::Launch, true), HalResult::Unsupported);

        assert_eq!(wrapper.boost_support(Boost::Interaction), SupportStatus::Supported);
        assert_eq!(wrapper.mode_support(Mode::Launch), SupportStatus::Unsupported);
        // Untouched capabilities stay undetermined.
        assert_eq!(wrapper.boost_support(Boost::CameraShot), SupportStatus::Unknown);
        assert_eq!(wrapper.mode_support(Mode::LowPower), SupportStatus::Unknown);
    }
}
