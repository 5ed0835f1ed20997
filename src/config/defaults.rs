// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the player. Constants are organized by category.
//!
//! # Categories
//!
//! - **Controller UI**: auto-hide delay and progress refresh interval
//! - **Content Ratio**: bounds for the embedded player aspect ratio
//! - **Gestures**: brightness/volume swipe sensitivity

// ==========================================================================
// Controller UI Defaults
// ==========================================================================

/// Default delay before visible controls hide themselves (in milliseconds).
pub const DEFAULT_AUTO_HIDE_DELAY_MS: u32 = 4000;

/// Minimum auto-hide delay (in milliseconds).
pub const MIN_AUTO_HIDE_DELAY_MS: u32 = 500;

/// Maximum auto-hide delay (in milliseconds).
pub const MAX_AUTO_HIDE_DELAY_MS: u32 = 30_000;

/// Default interval between two progress samples while controls are visible.
pub const DEFAULT_PROGRESS_INTERVAL_MS: u32 = 1000;

/// Minimum progress refresh interval (in milliseconds).
pub const MIN_PROGRESS_INTERVAL_MS: u32 = 100;

/// Maximum progress refresh interval (in milliseconds).
pub const MAX_PROGRESS_INTERVAL_MS: u32 = 10_000;

// ==========================================================================
// Content Ratio Defaults
// ==========================================================================

/// Narrowest aspect ratio the embedded player will take (portrait video).
pub const DEFAULT_MIN_CONTENT_RATIO: f32 = 4.0 / 3.0;

/// Widest aspect ratio the embedded player will take.
pub const DEFAULT_MAX_CONTENT_RATIO: f32 = 16.0 / 9.0;

/// Ratio assumed before the engine reports a video size.
pub const DEFAULT_CONTENT_RATIO: f32 = 16.0 / 9.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Multiplier applied to swipe deltas for brightness and volume.
pub const GESTURE_SENSITIVITY: f32 = 1.3;

/// Brightness used when no stored or ambient brightness is usable.
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTO_HIDE_DELAY_MS > 0);
    assert!(MAX_AUTO_HIDE_DELAY_MS >= MIN_AUTO_HIDE_DELAY_MS);
    assert!(DEFAULT_AUTO_HIDE_DELAY_MS >= MIN_AUTO_HIDE_DELAY_MS);
    assert!(DEFAULT_AUTO_HIDE_DELAY_MS <= MAX_AUTO_HIDE_DELAY_MS);

    assert!(MIN_PROGRESS_INTERVAL_MS > 0);
    assert!(MAX_PROGRESS_INTERVAL_MS >= MIN_PROGRESS_INTERVAL_MS);
    assert!(DEFAULT_PROGRESS_INTERVAL_MS >= MIN_PROGRESS_INTERVAL_MS);
    assert!(DEFAULT_PROGRESS_INTERVAL_MS <= MAX_PROGRESS_INTERVAL_MS);

    assert!(DEFAULT_MIN_CONTENT_RATIO > 0.0);
    assert!(DEFAULT_MAX_CONTENT_RATIO >= DEFAULT_MIN_CONTENT_RATIO);

    assert!(DEFAULT_BRIGHTNESS >= 0.0);
    assert!(DEFAULT_BRIGHTNESS <= 1.0);
};
