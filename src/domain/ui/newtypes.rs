// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_AUTO_HIDE_DELAY_MS, DEFAULT_BRIGHTNESS, DEFAULT_PROGRESS_INTERVAL_MS,
    GESTURE_SENSITIVITY, MAX_AUTO_HIDE_DELAY_MS, MAX_PROGRESS_INTERVAL_MS,
    MIN_AUTO_HIDE_DELAY_MS, MIN_PROGRESS_INTERVAL_MS,
};
use std::time::Duration;

// =============================================================================
// Brightness
// =============================================================================

/// Brightness bounds (normalized, 0.0 to 1.0).
pub mod brightness_bounds {
    /// Minimum brightness.
    pub const MIN: f32 = 0.0;
    /// Maximum brightness.
    pub const MAX: f32 = 1.0;
}

/// Screen brightness override, guaranteed to be within valid range (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brightness(f32);

impl Brightness {
    /// Creates a new brightness value, clamping to valid range.
    ///
    /// NaN falls back to the default brightness.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(brightness_bounds::MIN, brightness_bounds::MAX))
    }

    /// Starting point for a brightness gesture.
    ///
    /// Hosts report "no override" as a negative window brightness; in that
    /// case the gesture starts from the default.
    #[must_use]
    pub fn seeded(current: Option<f32>) -> Self {
        match current {
            Some(value) if value >= brightness_bounds::MIN => Self::new(value),
            _ => Self::default(),
        }
    }

    /// Returns the brightness value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Applies a swipe delta scaled by the gesture sensitivity.
    #[must_use]
    pub fn adjusted_by_gesture(self, delta: f32) -> Self {
        Self::new(self.0 + delta * GESTURE_SENSITIVITY)
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(DEFAULT_BRIGHTNESS)
    }
}

// =============================================================================
// AutoHideDelay
// =============================================================================

/// Delay after which visible controls hide themselves.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the configured millisecond bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoHideDelay(u32);

impl AutoHideDelay {
    /// Creates a new delay in milliseconds, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_AUTO_HIDE_DELAY_MS, MAX_AUTO_HIDE_DELAY_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for AutoHideDelay {
    fn default() -> Self {
        Self(DEFAULT_AUTO_HIDE_DELAY_MS)
    }
}

// =============================================================================
// ProgressInterval
// =============================================================================

/// Period of the progress refresh while progress is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressInterval(u32);

impl ProgressInterval {
    /// Creates a new interval in milliseconds, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_PROGRESS_INTERVAL_MS, MAX_PROGRESS_INTERVAL_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for ProgressInterval {
    fn default() -> Self {
        Self(DEFAULT_PROGRESS_INTERVAL_MS)
    }
}
