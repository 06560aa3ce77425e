// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Capability identifiers and the uniform result taxonomy shared by the
//! wrapper and its callers.

use std::fmt;

/// Transient performance hints understood by the power HAL.
///
/// Boosts are fire-and-forget: the caller names a duration and the
/// hardware ramps up for roughly that long. Whether a given boost exists
/// depends on the device; the wrapper discovers that lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boost {
    /// User interaction is ongoing (touch, scroll, key press).
    Interaction,
    /// A display refresh is about to be submitted.
    DisplayUpdateImminent,
    /// Machine-learning accelerator workload is starting.
    MlAcc,
    /// Audio pipeline bring-up.
    AudioLaunch,
    /// Camera pipeline bring-up.
    CameraLaunch,
    /// A still capture was requested.
    CameraShot,
}

impl Boost {
    /// Every boost understood by this crate, in declaration order.
    pub const ALL: [Boost; 6] = [
        Boost::Interaction,
        Boost::DisplayUpdateImminent,
        Boost::MlAcc,
        Boost::AudioLaunch,
        Boost::CameraLaunch,
        Boost::CameraShot,
    ];
}

impl fmt::Display for Boost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Boost::Interaction => "interaction",
            Boost::DisplayUpdateImminent => "display_update_imminent",
            Boost::MlAcc => "ml_acc",
            Boost::AudioLaunch => "audio_launch",
            Boost::CameraLaunch => "camera_launch",
            Boost::CameraShot => "camera_shot",
        };
        f.write_str(name)
    }
}

/// Longer-lived operating modes toggled on and off by the power manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Wake the device on a double tap.
    DoubleTapToWake,
    /// Battery saver is active.
    LowPower,
    /// Hold a steady performance level over thermal headroom.
    SustainedPerformance,
    /// Pin clocks to a fixed performance level.
    FixedPerformance,
    /// An application launch is in progress.
    Launch,
    /// Expensive rendering (HDR, high refresh) is in progress.
    ExpensiveRendering,
    /// The device is interactive (screen on, user present).
    Interactive,
    /// The device entered idle / doze.
    DeviceIdle,
    /// The display is off while the system keeps running.
    DisplayInactive,
    /// Low-latency audio stream is open.
    AudioStreamingLowLatency,
    /// Secure camera stream (e.g. face auth) is open.
    CameraStreamingSecure,
    /// Low-resolution camera stream is open.
    CameraStreamingLow,
    /// Mid-resolution camera stream is open.
    CameraStreamingMid,
    /// High-resolution camera stream is open.
    CameraStreamingHigh,
}

impl Mode {
    /// Every mode understood by this crate, in declaration order.
    pub const ALL: [Mode; 14] = [
        Mode::DoubleTapToWake,
        Mode::LowPower,
        Mode::SustainedPerformance,
        Mode::FixedPerformance,
        Mode::Launch,
        Mode::ExpensiveRendering,
        Mode::Interactive,
        Mode::DeviceIdle,
        Mode::DisplayInactive,
        Mode::AudioStreamingLowLatency,
        Mode::CameraStreamingSecure,
        Mode::CameraStreamingLow,
        Mode::CameraStreamingMid,
        Mode::CameraStreamingHigh,
    ];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::DoubleTapToWake => "double_tap_to_wake",
            Mode::LowPower => "low_power",
            Mode::SustainedPerformance => "sustained_performance",
            Mode::FixedPerformance => "fixed_performance",
            Mode::Launch => "launch",
            Mode::ExpensiveRendering => "expensive_rendering",
            Mode::Interactive => "interactive",
            Mode::DeviceIdle => "device_idle",
            Mode::DisplayInactive => "display_inactive",
            Mode::AudioStreamingLowLatency => "audio_streaming_low_latency",
            Mode::CameraStreamingSecure => "camera_streaming_secure",
            Mode::CameraStreamingLow => "camera_streaming_low",
            Mode::CameraStreamingMid => "camera_streaming_mid",
            Mode::CameraStreamingHigh => "camera_streaming_high",
        };
        f.write_str(name)
    }
}

/// Support determination recorded for a single capability.
///
/// `Unknown` is the only state a capability can transition out of; once a
/// query succeeds the determination is fixed for the wrapper's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportStatus {
    /// The hardware has not been asked yet.
    Unknown,
    /// The hardware confirmed the capability is implemented.
    Supported,
    /// The hardware declared the capability unavailable.
    Unsupported,
}

/// Uniform outcome reported to callers for every control request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalResult {
    /// Support was confirmed and the control call completed.
    Successful,
    /// A remote call errored, either the support query or the control call.
    Failed,
    /// The hardware declared the capability unavailable.
    Unsupported,
}
