// SPDX-License-Identifier: MPL-2.0
//! Playlist, chapter and queue-mode intents.
//!
//! Drag-reordering in the stream list is applied locally on every frame and
//! sent to the engine once, when the drag ends. The engine then re-emits the
//! playlist, which replaces the local copy.

use super::PlayerViewModel;
use crate::application::port::PlaybackEngine;
use crate::domain::playlist::{move_item, MediaId};

impl<E: PlaybackEngine> PlayerViewModel<E> {
    /// Moves an item of the local playlist while the user drags it.
    pub fn move_playlist_item(&mut self, from: usize, to: usize) {
        let mut items = self.ui_state.borrow().play_list.clone();
        if !move_item(&mut items, from, to) {
            log::debug!("Ignoring playlist move {from} -> {to} ({} items)", items.len());
            return;
        }

        self.pending_move = Some(match self.pending_move {
            Some((first_from, _)) => (first_from, to),
            None => (from, to),
        });

        self.update(|state| {
            let playing_id = state.currently_playing.as_ref().map(|item| item.media_id);
            state.current_playlist_item_index = playing_id
                .and_then(|id| items.iter().position(|item| item.media_id == id))
                .or(state.current_playlist_item_index);
            state.play_list = items;
        });
    }

    /// The drag in the stream list ended: send the reorder to the engine.
    pub fn on_stream_item_drag_finished(&mut self) {
        match self.pending_move.take() {
            Some((from, to)) if from != to => {
                log::debug!("Committing playlist move {from} -> {to}");
                self.engine.move_playlist_item(from, to);
            }
            Some(_) => log::debug!("Playlist drag ended where it started"),
            None => {}
        }
    }

    pub fn remove_playlist_item(&mut self, media_id: MediaId) {
        log::debug!("Removing playlist item {media_id}");
        self.engine.remove_playlist_item(media_id);
    }

    /// Plays the item at `index` of the playlist.
    pub fn stream_selected(&mut self, index: usize) {
        let count = self.engine.media_item_count();
        if index >= count {
            log::debug!("Ignoring stream selection {index} ({count} items)");
            return;
        }
        self.engine.set_currently_playing_index(index);
    }

    pub fn prev_stream(&mut self) {
        match self.engine.currently_playing_index() {
            Some(index) if index > 0 => self.engine.set_currently_playing_index(index - 1),
            _ => log::debug!("Already at the first stream"),
        }
    }

    pub fn next_stream(&mut self) {
        let count = self.engine.media_item_count();
        match self.engine.currently_playing_index() {
            Some(index) if index + 1 < count => self.engine.set_currently_playing_index(index + 1),
            _ => log::debug!("Already at the last stream"),
        }
    }

    /// Seeks to the chapter at `index` of the current item.
    pub fn chapter_selected(&mut self, index: usize) {
        let count = self.ui_state.borrow().chapters.len();
        if index >= count {
            log::debug!("Ignoring chapter selection {index} ({count} chapters)");
            return;
        }
        self.engine.select_chapter(index);
        self.refresh_progress();
    }

    /// Off → All → One → Off.
    pub fn cycle_repeat_mode(&mut self) {
        let next = self.engine.repeat_mode().next();
        self.engine.set_repeat_mode(next);
    }

    pub fn toggle_shuffle(&mut self) {
        let enabled = !self.engine.shuffle();
        self.engine.set_shuffle(enabled);
    }
}
