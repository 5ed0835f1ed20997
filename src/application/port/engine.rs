// SPDX-License-Identifier: MPL-2.0
//! Playback engine port definition.
//!
//! This module defines the [`PlaybackEngine`] trait the view-model drives.
//! Infrastructure adapters (a native player, or the in-memory engine used in
//! tests) implement it.
//!
//! # Design Notes
//!
//! - Commands are fire-and-forget: they return nothing and the engine reports
//!   the outcome through [`EngineEvent`]s
//! - Observables are cheap synchronous reads of the engine's current state
//! - Events are pushed on an unbounded channel handed out by
//!   [`subscribe`](PlaybackEngine::subscribe)

use crate::domain::playlist::{Chapter, MediaId, PlaylistItem};
use crate::domain::video::{PlayMode, RepeatMode, VideoSize};
use tokio::sync::mpsc::UnboundedReceiver;

// =============================================================================
// EngineEvent
// =============================================================================

/// Asynchronous state change reported by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PlayingChanged(bool),
    LoadingChanged(bool),
    VideoSizeChanged(VideoSize),
    /// The playlist content or order changed.
    PlaylistChanged(Vec<PlaylistItem>),
    CurrentlyPlayingChanged(Option<usize>),
    ChaptersChanged(Vec<Chapter>),
    PlayModeChanged(PlayMode),
    RepeatModeChanged(RepeatMode),
    ShuffleChanged(bool),
}

// =============================================================================
// PlaybackEngine Trait
// =============================================================================

/// Port for the media playback engine.
///
/// The engine is the source of truth for playback position, the playlist and
/// its play mode. The view-model only mirrors that state into snapshots.
///
/// # Thread Safety
///
/// Implementations must be `Send` so the view-model can live on any tokio
/// task. The engine is **not** required to be `Sync`.
///
/// # Example
///
/// ```ignore
/// use new_player::application::port::PlaybackEngine;
///
/// fn restart(engine: &mut impl PlaybackEngine) {
///     engine.set_current_position_ms(0);
///     engine.play();
/// }
/// ```
pub trait PlaybackEngine: Send {
    // -------------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------------

    fn play(&mut self);

    fn pause(&mut self);

    /// Returns true while playback is running.
    fn is_playing(&self) -> bool;

    /// Returns true while the engine buffers.
    fn is_loading(&self) -> bool;

    /// Current position inside the current item.
    fn current_position_ms(&self) -> u64;

    /// Seeks to an absolute position inside the current item.
    fn set_current_position_ms(&mut self, position_ms: u64);

    /// Duration of the current item, 0 while unknown.
    fn duration_ms(&self) -> u64;

    /// Buffered share of the current item in percent (0–100).
    fn buffered_percentage(&self) -> u8;

    /// Seconds skipped by one fast seek step.
    fn fast_seek_amount_secs(&self) -> u32;

    /// Size of the current video, `None` for audio or while unknown.
    fn video_size(&self) -> Option<VideoSize>;

    // -------------------------------------------------------------------------
    // Play mode
    // -------------------------------------------------------------------------

    fn play_mode(&self) -> PlayMode;

    /// Requests a play mode switch.
    ///
    /// The switch is confirmed by [`EngineEvent::PlayModeChanged`].
    fn set_play_mode(&mut self, play_mode: PlayMode);

    // -------------------------------------------------------------------------
    // Playlist
    // -------------------------------------------------------------------------

    fn media_item_count(&self) -> usize;

    fn playlist(&self) -> Vec<PlaylistItem>;

    fn currently_playing_index(&self) -> Option<usize>;

    /// Makes the item at `index` the current one.
    fn set_currently_playing_index(&mut self, index: usize);

    /// Moves the item at `from` to `to`.
    fn move_playlist_item(&mut self, from: usize, to: usize);

    fn remove_playlist_item(&mut self, media_id: MediaId);

    fn chapters(&self) -> Vec<Chapter>;

    /// Seeks to the start of the chapter at `index`.
    fn select_chapter(&mut self, index: usize);

    fn repeat_mode(&self) -> RepeatMode;

    fn set_repeat_mode(&mut self, repeat_mode: RepeatMode);

    fn shuffle(&self) -> bool;

    fn set_shuffle(&mut self, enabled: bool);

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Hands out the receiving end of the engine event stream.
    ///
    /// Engines support a single subscriber; a second call replaces the first
    /// receiver.
    fn subscribe(&mut self) -> UnboundedReceiver<EngineEvent>;
}
