// SPDX-License-Identifier: MPL-2.0
//! In-memory playback engine.
//!
//! [`MemoryEngine`] keeps the whole engine state in plain fields, applies
//! every command synchronously and reports the resulting changes on its
//! event channel, like a real engine would from its own thread. Every
//! command is also appended to a log so callers can assert exactly what the
//! view-model asked for.

use crate::application::port::{EngineEvent, PlaybackEngine};
use crate::domain::playlist::{move_item, Chapter, MediaId, PlaylistItem};
use crate::domain::video::{PlayMode, RepeatMode, VideoSize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Command received by the engine, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Play,
    Pause,
    Seek(u64),
    SetPlayMode(PlayMode),
    SelectItem(usize),
    MovePlaylistItem { from: usize, to: usize },
    RemovePlaylistItem(MediaId),
    SelectChapter(usize),
    SetRepeatMode(RepeatMode),
    SetShuffle(bool),
}

/// Playback engine living entirely in memory.
#[derive(Debug)]
pub struct MemoryEngine {
    playing: bool,
    loading: bool,
    position_ms: u64,
    duration_ms: u64,
    buffered_percentage: u8,
    fast_seek_amount_secs: u32,
    video_size: Option<VideoSize>,
    play_mode: PlayMode,
    confirm_play_mode: bool,
    playlist: Vec<PlaylistItem>,
    current_index: Option<usize>,
    chapters: Vec<Chapter>,
    repeat_mode: RepeatMode,
    shuffle: bool,
    commands: Vec<EngineCommand>,
    events: Option<UnboundedSender<EngineEvent>>,
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEngine {
    /// Creates an idle engine with an empty playlist.
    #[must_use]
    pub fn new() -> Self {
        Self {
            playing: false,
            loading: false,
            position_ms: 0,
            duration_ms: 0,
            buffered_percentage: 0,
            fast_seek_amount_secs: 10,
            video_size: None,
            play_mode: PlayMode::Idle,
            confirm_play_mode: true,
            playlist: Vec::new(),
            current_index: None,
            chapters: Vec::new(),
            repeat_mode: RepeatMode::Off,
            shuffle: false,
            commands: Vec::new(),
            events: None,
        }
    }

    /// Loads `items` and makes the first one current.
    #[must_use]
    pub fn with_playlist(mut self, items: Vec<PlaylistItem>) -> Self {
        self.current_index = if items.is_empty() { None } else { Some(0) };
        self.duration_ms = items
            .first()
            .and_then(|item| item.metadata.duration_ms)
            .unwrap_or(0);
        self.playlist = items;
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_position_ms(mut self, position_ms: u64) -> Self {
        self.position_ms = position_ms;
        self
    }

    #[must_use]
    pub fn with_fast_seek_amount_secs(mut self, secs: u32) -> Self {
        self.fast_seek_amount_secs = secs;
        self
    }

    #[must_use]
    pub fn with_play_mode(mut self, play_mode: PlayMode) -> Self {
        self.play_mode = play_mode;
        self
    }

    #[must_use]
    pub fn with_video_size(mut self, size: VideoSize) -> Self {
        self.video_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_chapters(mut self, chapters: Vec<Chapter>) -> Self {
        self.chapters = chapters;
        self
    }

    /// Makes `set_play_mode` wait for [`confirm_play_mode`](Self::confirm_play_mode)
    /// instead of switching right away.
    #[must_use]
    pub fn with_manual_play_mode(mut self) -> Self {
        self.confirm_play_mode = false;
        self
    }

    /// Commands received so far.
    #[must_use]
    pub fn commands(&self) -> &[EngineCommand] {
        &self.commands
    }

    /// Returns and clears the command log.
    pub fn take_commands(&mut self) -> Vec<EngineCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Switches the play mode on the engine's own initiative and reports it.
    pub fn confirm_play_mode(&mut self, play_mode: PlayMode) {
        self.play_mode = play_mode;
        self.emit(EngineEvent::PlayModeChanged(play_mode));
    }

    /// Simulates `elapsed_ms` of playback.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let position = self.position_ms.saturating_add(elapsed_ms);
        self.position_ms = self.clamp_position(position);
    }

    pub fn set_buffered_percentage(&mut self, percentage: u8) {
        self.buffered_percentage = percentage.min(100);
    }

    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.emit(EngineEvent::LoadingChanged(loading));
        }
    }

    pub fn set_video_size(&mut self, size: VideoSize) {
        self.video_size = Some(size);
        self.emit(EngineEvent::VideoSizeChanged(size));
    }

    pub fn set_chapters(&mut self, chapters: Vec<Chapter>) {
        self.chapters = chapters.clone();
        self.emit(EngineEvent::ChaptersChanged(chapters));
    }

    fn emit(&self, event: EngineEvent) {
        if let Some(sender) = &self.events {
            if sender.send(event).is_err() {
                log::debug!("engine event dropped, no subscriber");
            }
        }
    }

    fn clamp_position(&self, position_ms: u64) -> u64 {
        if self.duration_ms > 0 {
            position_ms.min(self.duration_ms)
        } else {
            position_ms
        }
    }

    fn emit_playlist(&self, previous_index: Option<usize>) {
        self.emit(EngineEvent::PlaylistChanged(self.playlist.clone()));
        if self.current_index != previous_index {
            self.emit(EngineEvent::CurrentlyPlayingChanged(self.current_index));
        }
    }
}

/// Index of the current item after moving `from` to `to`.
fn index_after_move(current: usize, from: usize, to: usize) -> usize {
    if current == from {
        to
    } else if from < current && to >= current {
        current - 1
    } else if from > current && to <= current {
        current + 1
    } else {
        current
    }
}

impl PlaybackEngine for MemoryEngine {
    fn play(&mut self) {
        self.commands.push(EngineCommand::Play);
        if !self.playing {
            self.playing = true;
            self.emit(EngineEvent::PlayingChanged(true));
        }
    }

    fn pause(&mut self) {
        self.commands.push(EngineCommand::Pause);
        if self.playing {
            self.playing = false;
            self.emit(EngineEvent::PlayingChanged(false));
        }
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn current_position_ms(&self) -> u64 {
        self.position_ms
    }

    fn set_current_position_ms(&mut self, position_ms: u64) {
        self.commands.push(EngineCommand::Seek(position_ms));
        self.position_ms = self.clamp_position(position_ms);
    }

    fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    fn buffered_percentage(&self) -> u8 {
        self.buffered_percentage
    }

    fn fast_seek_amount_secs(&self) -> u32 {
        self.fast_seek_amount_secs
    }

    fn video_size(&self) -> Option<VideoSize> {
        self.video_size
    }

    fn play_mode(&self) -> PlayMode {
        self.play_mode
    }

    fn set_play_mode(&mut self, play_mode: PlayMode) {
        self.commands.push(EngineCommand::SetPlayMode(play_mode));
        if self.confirm_play_mode && self.play_mode != play_mode {
            self.confirm_play_mode(play_mode);
        }
    }

    fn media_item_count(&self) -> usize {
        self.playlist.len()
    }

    fn playlist(&self) -> Vec<PlaylistItem> {
        self.playlist.clone()
    }

    fn currently_playing_index(&self) -> Option<usize> {
        self.current_index
    }

    fn set_currently_playing_index(&mut self, index: usize) {
        self.commands.push(EngineCommand::SelectItem(index));
        let Some(item) = self.playlist.get(index) else {
            return;
        };
        self.duration_ms = item.metadata.duration_ms.unwrap_or(0);
        self.position_ms = 0;
        self.current_index = Some(index);
        self.emit(EngineEvent::CurrentlyPlayingChanged(Some(index)));
    }

    fn move_playlist_item(&mut self, from: usize, to: usize) {
        self.commands.push(EngineCommand::MovePlaylistItem { from, to });
        let previous = self.current_index;
        if move_item(&mut self.playlist, from, to) {
            self.current_index = previous.map(|current| index_after_move(current, from, to));
            self.emit_playlist(previous);
        }
    }

    fn remove_playlist_item(&mut self, media_id: MediaId) {
        self.commands.push(EngineCommand::RemovePlaylistItem(media_id));
        let Some(removed) = self
            .playlist
            .iter()
            .position(|item| item.media_id == media_id)
        else {
            return;
        };
        self.playlist.remove(removed);
        let previous = self.current_index;
        self.current_index = match previous {
            _ if self.playlist.is_empty() => None,
            Some(current) if removed < current => Some(current - 1),
            Some(current) => Some(current.min(self.playlist.len() - 1)),
            None => None,
        };
        self.emit_playlist(previous);
    }

    fn chapters(&self) -> Vec<Chapter> {
        self.chapters.clone()
    }

    fn select_chapter(&mut self, index: usize) {
        self.commands.push(EngineCommand::SelectChapter(index));
        if let Some(chapter) = self.chapters.get(index) {
            self.position_ms = self.clamp_position(chapter.start_ms);
        }
    }

    fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    fn set_repeat_mode(&mut self, repeat_mode: RepeatMode) {
        self.commands.push(EngineCommand::SetRepeatMode(repeat_mode));
        self.repeat_mode = repeat_mode;
        self.emit(EngineEvent::RepeatModeChanged(repeat_mode));
    }

    fn shuffle(&self) -> bool {
        self.shuffle
    }

    fn set_shuffle(&mut self, enabled: bool) {
        self.commands.push(EngineCommand::SetShuffle(enabled));
        self.shuffle = enabled;
        self.emit(EngineEvent::ShuffleChanged(enabled));
    }

    fn subscribe(&mut self) -> UnboundedReceiver<EngineEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.events = Some(sender);
        receiver
    }
}
