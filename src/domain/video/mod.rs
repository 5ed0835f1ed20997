// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains engine-facing value objects and enums that are
//! independent of any presentation or infrastructure concerns.

pub mod newtypes;
pub mod playback;

// Re-export commonly used types
pub use newtypes::{SeekFraction, SoundVolume};
pub use playback::{PlayMode, RepeatMode, VideoSize};
