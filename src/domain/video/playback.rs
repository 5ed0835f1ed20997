// SPDX-License-Identifier: MPL-2.0
//! Engine-side playback modes.
//!
//! The engine only knows a coarse [`PlayMode`]; the UI refines it into a
//! [`UiMode`](crate::domain::ui::UiMode).

use serde::{Deserialize, Serialize};

/// Operating mode of the playback engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayMode {
    /// Nothing is rendered.
    #[default]
    Idle,
    /// Video inside the host layout.
    EmbeddedVideo,
    /// Video covering the whole screen.
    FullscreenVideo,
    /// Floating picture-in-picture window.
    Pip,
    /// Video keeps decoding without a surface.
    BackgroundVideo,
    /// Audio only, no surface.
    BackgroundAudio,
    /// Audio player inside the host layout.
    EmbeddedAudio,
    /// Audio player covering the whole screen.
    FullscreenAudio,
}

impl PlayMode {
    /// Returns true if the engine renders video on a surface.
    #[must_use]
    pub fn has_video_surface(self) -> bool {
        matches!(
            self,
            Self::EmbeddedVideo | Self::FullscreenVideo | Self::Pip
        )
    }

    /// Returns true if the engine runs without any UI.
    #[must_use]
    pub fn is_background(self) -> bool {
        matches!(self, Self::BackgroundVideo | Self::BackgroundAudio)
    }
}

/// Playlist repeat behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RepeatMode {
    #[default]
    Off,
    /// Repeat the whole playlist.
    All,
    /// Repeat the current item.
    One,
}

impl RepeatMode {
    /// Next mode when the repeat button is pressed (Off → All → One → Off).
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }
}

/// Video dimensions as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoSize {
    pub width: u32,
    pub height: u32,
    /// Pixel aspect ratio (1.0 for square pixels).
    pub pixel_ratio: f32,
}

impl VideoSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    /// Display aspect ratio, or `None` when the size is still unknown.
    #[must_use]
    pub fn aspect_ratio(self) -> Option<f32> {
        if self.width == 0 || self.height == 0 || !(self.pixel_ratio > 0.0) {
            return None;
        }
        Some(self.width as f32 * self.pixel_ratio / self.height as f32)
    }
}
