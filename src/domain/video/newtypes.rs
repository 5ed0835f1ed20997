// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use crate::config::GESTURE_SENSITIVITY;

// =============================================================================
// SoundVolume
// =============================================================================

/// Sound volume bounds (normalized, 0.0 to 1.0).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
}

/// Normalized sound volume, guaranteed to be within valid range (0.0–1.0).
///
/// The audio device works with integer steps; [`from_device`](Self::from_device)
/// and [`to_device`](Self::to_device) convert between the two.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SoundVolume(f32);

impl SoundVolume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN is treated as silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Converts a device volume step into a normalized volume.
    #[must_use]
    pub fn from_device(volume: u32, max_volume: u32) -> Self {
        if max_volume == 0 {
            return Self(volume_bounds::MIN);
        }
        Self::new(volume as f32 / max_volume as f32)
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Converts to the device's integer range, rounding down.
    #[must_use]
    pub fn to_device(self, max_volume: u32) -> u32 {
        (self.0 * max_volume as f32) as u32
    }

    /// Applies a swipe delta scaled by the gesture sensitivity.
    #[must_use]
    pub fn adjusted_by_gesture(self, delta: f32) -> Self {
        Self::new(self.0 + delta * GESTURE_SENSITIVITY)
    }
}

// =============================================================================
// SeekFraction
// =============================================================================

/// Position on the seek bar as a fraction of the duration (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeekFraction(f32);

impl SeekFraction {
    /// Creates a new fraction, clamping to valid range.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Fraction of `duration_ms` reached at `position_ms`.
    ///
    /// An unknown (zero) duration maps to the start.
    #[must_use]
    pub fn from_position(position_ms: u64, duration_ms: u64) -> Self {
        if duration_ms == 0 {
            return Self(0.0);
        }
        Self::new((position_ms as f64 / duration_ms as f64) as f32)
    }

    /// Returns the fraction as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Position in milliseconds, truncated toward zero.
    #[must_use]
    pub fn position_ms(self, duration_ms: u64) -> u64 {
        (f64::from(self.0) * duration_ms as f64) as u64
    }
}
