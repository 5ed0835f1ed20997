// SPDX-License-Identifier: MPL-2.0
//! Immutable UI snapshot published to the rendering surface.

use super::mode::{ContentFitMode, UiMode};
use crate::config::DEFAULT_CONTENT_RATIO;
use crate::domain::playlist::{Chapter, PlaylistItem};
use crate::domain::video::RepeatMode;
use serde::{Deserialize, Serialize};

/// Embedded layout parameters captured when the player leaves or enters the
/// embedded layout, so the host can restore it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedUiConfig {
    pub is_fullscreen: bool,
    pub player_aspect_ratio: f32,
    pub screen_width_px: u32,
    pub system_bars_light_mode: bool,
    pub brightness: Option<f32>,
}

impl Default for EmbeddedUiConfig {
    fn default() -> Self {
        Self {
            is_fullscreen: false,
            player_aspect_ratio: DEFAULT_CONTENT_RATIO,
            screen_width_px: 0,
            system_bars_light_mode: true,
            brightness: None,
        }
    }
}

/// Everything the surface needs to draw one frame of the player UI.
///
/// Snapshots are replaced, never mutated after publication.
// Read-only snapshot with orthogonal flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub ui_mode: UiMode,
    pub embedded_ui_config: Option<EmbeddedUiConfig>,
    /// Set while the surface animates into picture-in-picture.
    pub entering_pip: bool,
    pub playing: bool,
    pub is_loading: bool,
    /// Seek bar thumb position (0.0–1.0).
    pub seeker_position: f32,
    pub playback_position_ms: u64,
    pub duration_ms: u64,
    /// Buffered part of the item (0.0–1.0).
    pub buffered_percentage: f32,
    /// Set while the user drags the seek bar.
    pub seek_preview_visible: bool,
    /// Accumulated fast seek offset shown by the double-tap overlay.
    pub fast_seek_seconds: i32,
    /// Brightness override, `None` to follow the system.
    pub brightness: Option<f32>,
    pub sound_volume: f32,
    pub content_fit_mode: ContentFitMode,
    /// Aspect ratio of the current video.
    pub content_ratio: f32,
    /// Aspect ratio the embedded player takes, bounded by the config.
    pub embedded_ui_ratio: f32,
    pub play_list: Vec<PlaylistItem>,
    pub currently_playing: Option<PlaylistItem>,
    pub current_playlist_item_index: Option<usize>,
    pub chapters: Vec<Chapter>,
    pub repeat_mode: RepeatMode,
    pub shuffle_enabled: bool,
    pub playlist_duration_s: u64,
    pub playback_position_in_playlist_s: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            ui_mode: UiMode::default(),
            embedded_ui_config: None,
            entering_pip: false,
            playing: false,
            is_loading: false,
            seeker_position: 0.0,
            playback_position_ms: 0,
            duration_ms: 0,
            buffered_percentage: 0.0,
            seek_preview_visible: false,
            fast_seek_seconds: 0,
            brightness: None,
            sound_volume: 0.0,
            content_fit_mode: ContentFitMode::default(),
            content_ratio: DEFAULT_CONTENT_RATIO,
            embedded_ui_ratio: DEFAULT_CONTENT_RATIO,
            play_list: Vec::new(),
            currently_playing: None,
            current_playlist_item_index: None,
            chapters: Vec::new(),
            repeat_mode: RepeatMode::default(),
            shuffle_enabled: false,
            playlist_duration_s: 0,
            playback_position_in_playlist_s: 0,
        }
    }
}
