// SPDX-License-Identifier: MPL-2.0
//! Player view-model.
//!
//! [`PlayerViewModel`] sits between a [`PlaybackEngine`] and the rendering
//! surface. The surface subscribes to immutable [`UiState`] snapshots and
//! calls one intent method per user action; the view-model turns intents
//! into engine commands and snapshot updates, and folds engine events and
//! timer firings into the same snapshot.
//!
//! # Event loop
//!
//! All mutation happens through `&mut self` on the owning task. Engine
//! events and timer firings queue up on channels and are applied by
//! [`process_next_event`](PlayerViewModel::process_next_event) (async, waits)
//! or [`process_pending_events`](PlayerViewModel::process_pending_events)
//! (drains what is queued).
//!
//! # Example
//!
//! ```no_run
//! use new_player::infrastructure::{MemoryAudio, MemoryEngine};
//! use new_player::view_model::{PlayerViewModel, ViewModelConfig};
//!
//! # async fn run() {
//! let engine = MemoryEngine::new();
//! let mut vm = PlayerViewModel::new(engine, Box::new(MemoryAudio::new(15, 7)), ViewModelConfig::default());
//! let mut snapshots = vm.subscribe();
//!
//! vm.show_ui();
//! while vm.process_next_event().await {
//!     println!("{:?}", snapshots.borrow_and_update().ui_mode);
//! }
//! # }
//! ```

mod config;
mod controls;
mod mode_machine;
mod playlist;
pub mod timers;

pub use config::ViewModelConfig;
pub use controls::SeekDirection;
pub use mode_machine::{ModeDecision, ModeMachine, PendingTransition};

use crate::application::port::{
    AudioOutput, EngineEvent, PlaybackEngine, StateStore, UI_STATE_KEY,
};
use crate::domain::playlist::{position_in_playlist_s, total_duration_s};
use crate::domain::ui::{EmbeddedUiConfig, UiMode};
use crate::domain::video::{SeekFraction, SoundVolume};
use crate::error::Result;
use timers::{ScheduledTask, TimerFired, TimerKind};
use tokio::sync::{mpsc, watch};

pub use crate::domain::ui::UiState;

/// Signal for the host, outside of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalSignal {
    /// Back was pressed in a mode without predecessor; the host should
    /// close or minimize the player.
    BackPressed,
}

/// View-model of one player surface.
pub struct PlayerViewModel<E: PlaybackEngine> {
    engine: E,
    audio: Box<dyn AudioOutput>,
    config: ViewModelConfig,

    // ═══════════════════════════════════════════════════════════════════════
    // PUBLISHED STATE
    // ═══════════════════════════════════════════════════════════════════════
    ui_state: watch::Sender<UiState>,
    signals: mpsc::UnboundedSender<ExternalSignal>,
    signal_receiver: Option<mpsc::UnboundedReceiver<ExternalSignal>>,

    // ═══════════════════════════════════════════════════════════════════════
    // MODE & INTERACTION STATE
    // ═══════════════════════════════════════════════════════════════════════
    mode_machine: ModeMachine,
    /// Reorder applied locally and not yet sent to the engine.
    pending_move: Option<(usize, usize)>,

    // ═══════════════════════════════════════════════════════════════════════
    // EVENT SOURCES
    // ═══════════════════════════════════════════════════════════════════════
    engine_events: Option<mpsc::UnboundedReceiver<EngineEvent>>,
    timer_sender: mpsc::UnboundedSender<TimerFired>,
    timer_events: mpsc::UnboundedReceiver<TimerFired>,
    auto_hide: ScheduledTask,
    progress: ScheduledTask,
    shut_down: bool,
}

impl<E: PlaybackEngine> PlayerViewModel<E> {
    /// Creates a view-model mirroring the current state of `engine`.
    ///
    /// Subscribes to the engine events. When called inside a tokio runtime,
    /// timers needed by the initial mode are started.
    pub fn new(mut engine: E, audio: Box<dyn AudioOutput>, config: ViewModelConfig) -> Self {
        let engine_events = engine.subscribe();
        let initial = initial_state(&engine, audio.as_ref(), &config);
        let initial_mode = initial.ui_mode;
        let (ui_state, _) = watch::channel(initial);
        let (signals, signal_receiver) = mpsc::unbounded_channel();
        let (timer_sender, timer_events) = mpsc::unbounded_channel();

        let mut vm = Self {
            engine,
            audio,
            config,
            ui_state,
            signals,
            signal_receiver: Some(signal_receiver),
            mode_machine: ModeMachine::new(),
            pending_move: None,
            engine_events: Some(engine_events),
            timer_sender,
            timer_events,
            auto_hide: ScheduledTask::new(TimerKind::AutoHide),
            progress: ScheduledTask::new(TimerKind::Progress),
            shut_down: false,
        };
        log::info!("Player view-model created in {initial_mode:?}");
        vm.sync_timers(UiMode::Placeholder, initial_mode);
        vm
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// New receiver of UI snapshots, starting at the current one.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.ui_state.subscribe()
    }

    /// Copy of the current snapshot.
    #[must_use]
    pub fn ui_state(&self) -> UiState {
        self.ui_state.borrow().clone()
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    #[must_use]
    pub fn config(&self) -> &ViewModelConfig {
        &self.config
    }

    /// Takes the receiver of host signals. Only the first call returns it.
    pub fn external_signals(&mut self) -> Option<mpsc::UnboundedReceiver<ExternalSignal>> {
        self.signal_receiver.take()
    }

    /// Mode waiting for the engine to switch play mode, if any.
    #[must_use]
    pub fn pending_mode(&self) -> Option<UiMode> {
        self.mode_machine.pending()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // EVENT LOOP
    // ═══════════════════════════════════════════════════════════════════════

    /// Waits for the next engine event or timer firing and applies it.
    ///
    /// Returns `false` once the view-model is shut down or the engine
    /// stream is closed.
    pub async fn process_next_event(&mut self) -> bool {
        if self.shut_down {
            return false;
        }
        let Some(engine_events) = self.engine_events.as_mut() else {
            return false;
        };

        tokio::select! {
            event = engine_events.recv() => match event {
                Some(event) => {
                    self.handle_engine_event(event);
                    true
                }
                None => {
                    log::info!("Engine event stream closed");
                    self.engine_events = None;
                    false
                }
            },
            Some(fired) = self.timer_events.recv() => {
                self.handle_timer(fired);
                true
            }
        }
    }

    /// Applies every event already queued, returning how many were handled.
    pub fn process_pending_events(&mut self) -> usize {
        let mut handled = 0;
        while !self.shut_down {
            let event = self
                .engine_events
                .as_mut()
                .and_then(|events| events.try_recv().ok());
            if let Some(event) = event {
                self.handle_engine_event(event);
                handled += 1;
                continue;
            }
            match self.timer_events.try_recv() {
                Ok(fired) => {
                    self.handle_timer(fired);
                    handled += 1;
                }
                Err(_) => break,
            }
        }
        handled
    }

    /// Stops both timers and detaches from the engine.
    ///
    /// No event is applied and no timer is started afterwards.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.auto_hide.cancel();
        self.progress.cancel();
        self.engine_events = None;
        while self.timer_events.try_recv().is_ok() {}
        log::info!("Player view-model shut down");
    }

    fn handle_engine_event(&mut self, event: EngineEvent) {
        log::debug!("Engine event: {event:?}");
        match event {
            EngineEvent::PlayingChanged(playing) => self.update(|state| state.playing = playing),
            EngineEvent::LoadingChanged(loading) => {
                self.update(|state| state.is_loading = loading);
            }
            EngineEvent::VideoSizeChanged(size) => {
                let content_ratio = size
                    .aspect_ratio()
                    .unwrap_or(crate::config::DEFAULT_CONTENT_RATIO);
                let embedded_ui_ratio = self.config.clamp_ratio(content_ratio);
                self.update(|state| {
                    state.content_ratio = content_ratio;
                    state.embedded_ui_ratio = embedded_ui_ratio;
                });
            }
            EngineEvent::PlaylistChanged(items) => {
                let index = self.engine.currently_playing_index();
                self.update(|state| {
                    state.currently_playing = index.and_then(|i| items.get(i).cloned());
                    state.current_playlist_item_index = index;
                    state.playlist_duration_s = total_duration_s(&items);
                    state.playback_position_in_playlist_s =
                        position_in_playlist_s(&items, index, state.playback_position_ms);
                    state.play_list = items;
                });
            }
            EngineEvent::CurrentlyPlayingChanged(index) => {
                self.update(|state| {
                    state.current_playlist_item_index = index;
                    state.currently_playing = index.and_then(|i| state.play_list.get(i).cloned());
                });
                self.refresh_progress();
            }
            EngineEvent::ChaptersChanged(chapters) => {
                self.update(|state| state.chapters = chapters);
            }
            EngineEvent::PlayModeChanged(play_mode) => {
                let current = self.current_mode();
                if let Some((mode, config)) =
                    self.mode_machine.on_play_mode_changed(current, play_mode)
                {
                    self.transition(mode, config, false);
                }
            }
            EngineEvent::RepeatModeChanged(repeat_mode) => {
                self.update(|state| state.repeat_mode = repeat_mode);
            }
            EngineEvent::ShuffleChanged(enabled) => {
                self.update(|state| state.shuffle_enabled = enabled);
            }
        }
    }

    fn handle_timer(&mut self, fired: TimerFired) {
        let accepted = match fired.kind {
            TimerKind::AutoHide => self.auto_hide.accepts(fired),
            TimerKind::Progress => self.progress.accepts(fired),
        };
        if !accepted {
            log::debug!("Ignoring stale {:?} timer", fired.kind);
            return;
        }
        match fired.kind {
            TimerKind::AutoHide => {
                if self.current_mode().controller_ui_visible() {
                    self.hide_ui();
                }
            }
            TimerKind::Progress => self.refresh_progress(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // UI MODE INTENTS
    // ═══════════════════════════════════════════════════════════════════════

    /// Requests `target`, deferring it until the engine runs the play mode
    /// it needs. `config` is recorded when the mode is committed.
    pub fn change_ui_mode(&mut self, target: UiMode, config: Option<EmbeddedUiConfig>) {
        let current = self.current_mode();
        let engine_mode = self.engine.play_mode();
        match self
            .mode_machine
            .request(current, target, config, engine_mode)
        {
            ModeDecision::Unchanged => {
                if target.controller_ui_visible() {
                    self.reset_auto_hide();
                }
            }
            ModeDecision::Commit(mode) => self.transition(mode, config, false),
            ModeDecision::EnterPip { return_mode } => {
                log::debug!("Entering PIP from {current:?}");
                self.transition(return_mode, None, true);
            }
            ModeDecision::Defer(play_mode) => {
                log::debug!("Deferring {target:?} until engine reports {play_mode:?}");
                self.engine.set_play_mode(play_mode);
            }
        }
    }

    /// Navigates back, or signals the host when the mode has no predecessor.
    pub fn on_back_pressed(&mut self) {
        let current = self.current_mode();
        match current.back_target() {
            Some(target) => self.change_ui_mode(target, None),
            None => {
                log::debug!("Back pressed in {current:?}, forwarding to host");
                if self.signals.send(ExternalSignal::BackPressed).is_err() {
                    log::debug!("No host listening for external signals");
                }
            }
        }
    }

    /// The host entered or left picture-in-picture.
    pub fn on_picture_in_picture_mode_changed(&mut self, active: bool) {
        let mode = if active {
            UiMode::Pip
        } else {
            UiMode::FullscreenVideo
        };
        self.mode_machine.clear();
        self.transition(mode, None, false);
        let play_mode = mode.play_mode();
        if self.engine.play_mode() != play_mode {
            self.mode_machine.expect_forced(play_mode);
            self.engine.set_play_mode(play_mode);
        }
    }

    /// A host dialog covering the player was shown or hidden.
    pub fn dialog_visible(&mut self, visible: bool) {
        if visible {
            self.mode_machine.clear();
            self.auto_hide.cancel();
            self.transition(UiMode::Placeholder, None, false);
        } else {
            self.reset_auto_hide();
        }
    }

    /// The PIP enter animation finished.
    pub fn done_entering_pip(&mut self) {
        self.update(|state| state.entering_pip = false);
    }

    /// Shows the controller overlay of the current layout.
    pub fn show_ui(&mut self) {
        let target = self.current_mode().with_controller_ui();
        self.change_ui_mode(target, None);
    }

    /// Hides every overlay of the current layout.
    pub fn hide_ui(&mut self) {
        let target = self.current_mode().without_controller_ui();
        self.change_ui_mode(target, None);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PERSISTENCE
    // ═══════════════════════════════════════════════════════════════════════

    /// Stores the current snapshot under [`UI_STATE_KEY`].
    ///
    /// # Errors
    ///
    /// Returns the store's error if saving fails.
    pub fn save_state(&self, store: &mut dyn StateStore) -> Result<()> {
        store.save(UI_STATE_KEY, &self.ui_state())
    }

    /// Restores UI-owned fields of a stored snapshot.
    ///
    /// Engine-owned fields (position, playlist, play state) are not
    /// restored; the engine stays the source of truth for those. Returns
    /// whether a snapshot was found.
    ///
    /// # Errors
    ///
    /// Returns the store's error if loading fails.
    pub fn restore_state(&mut self, store: &dyn StateStore) -> Result<bool> {
        let Some(saved) = store.load(UI_STATE_KEY)? else {
            return Ok(false);
        };
        log::info!("Restoring UI state in {:?}", saved.ui_mode);
        self.update(|state| {
            state.content_fit_mode = saved.content_fit_mode;
            state.brightness = saved.brightness;
            state.embedded_ui_config = saved.embedded_ui_config;
        });
        if saved.ui_mode != UiMode::Pip {
            self.change_ui_mode(saved.ui_mode, saved.embedded_ui_config);
        }
        Ok(true)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // INTERNALS
    // ═══════════════════════════════════════════════════════════════════════

    fn current_mode(&self) -> UiMode {
        self.ui_state.borrow().ui_mode
    }

    /// Publishes a modified copy of the snapshot if anything changed.
    fn update(&mut self, modify: impl FnOnce(&mut UiState)) {
        let mut next = self.ui_state.borrow().clone();
        modify(&mut next);
        let changed = *self.ui_state.borrow() != next;
        if changed {
            self.ui_state.send_replace(next);
        }
    }

    /// Commits `mode` locally and brings the timers in line with it.
    fn transition(&mut self, mode: UiMode, config: Option<EmbeddedUiConfig>, entering_pip: bool) {
        let previous = self.current_mode();
        self.update(|state| {
            state.ui_mode = mode;
            if config.is_some() {
                state.embedded_ui_config = config;
            }
            if entering_pip {
                state.entering_pip = true;
            }
        });
        if previous != mode {
            log::debug!("UI mode {previous:?} -> {mode:?}");
        }
        self.sync_timers(previous, mode);
    }

    fn sync_timers(&mut self, previous: UiMode, mode: UiMode) {
        if mode.shows_progress() {
            if !self.progress.is_active() {
                self.refresh_progress();
                self.start_progress();
            }
        } else {
            self.progress.cancel();
        }

        if mode.controller_ui_visible() {
            if !previous.controller_ui_visible() {
                self.reset_auto_hide();
            }
        } else {
            self.auto_hide.cancel();
        }
    }

    fn start_progress(&mut self) {
        if self.shut_down {
            return;
        }
        self.progress
            .start_periodic(self.config.progress_interval(), &self.timer_sender);
    }

    fn reset_auto_hide(&mut self) {
        if self.shut_down {
            return;
        }
        self.auto_hide
            .start_once(self.config.auto_hide_delay(), &self.timer_sender);
    }

    /// Re-samples position, duration and buffer from the engine.
    ///
    /// The thumb is left alone while the user drags it.
    fn refresh_progress(&mut self) {
        let position_ms = self.engine.current_position_ms();
        let duration_ms = self.engine.duration_ms();
        let buffered = f32::from(self.engine.buffered_percentage().min(100)) / 100.0;
        self.update(|state| {
            state.duration_ms = duration_ms;
            state.buffered_percentage = buffered;
            if !state.seek_preview_visible {
                state.playback_position_ms = position_ms;
                state.seeker_position = SeekFraction::from_position(position_ms, duration_ms).value();
            }
            state.playback_position_in_playlist_s = position_in_playlist_s(
                &state.play_list,
                state.current_playlist_item_index,
                position_ms,
            );
        });
    }
}

impl<E: PlaybackEngine> Drop for PlayerViewModel<E> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Snapshot mirroring the engine at construction time.
fn initial_state<E: PlaybackEngine>(
    engine: &E,
    audio: &dyn AudioOutput,
    config: &ViewModelConfig,
) -> UiState {
    let play_list = engine.playlist();
    let index = engine.currently_playing_index();
    let position_ms = engine.current_position_ms();
    let duration_ms = engine.duration_ms();
    let content_ratio = engine
        .video_size()
        .and_then(|size| size.aspect_ratio())
        .unwrap_or(crate::config::DEFAULT_CONTENT_RATIO);

    UiState {
        ui_mode: UiMode::from_play_mode(engine.play_mode()),
        playing: engine.is_playing(),
        is_loading: engine.is_loading(),
        seeker_position: SeekFraction::from_position(position_ms, duration_ms).value(),
        playback_position_ms: position_ms,
        duration_ms,
        buffered_percentage: f32::from(engine.buffered_percentage().min(100)) / 100.0,
        sound_volume: SoundVolume::from_device(audio.volume(), audio.max_volume()).value(),
        content_ratio,
        embedded_ui_ratio: config.clamp_ratio(content_ratio),
        currently_playing: index.and_then(|i| play_list.get(i).cloned()),
        current_playlist_item_index: index,
        chapters: engine.chapters(),
        repeat_mode: engine.repeat_mode(),
        shuffle_enabled: engine.shuffle(),
        playlist_duration_s: total_duration_s(&play_list),
        playback_position_in_playlist_s: position_in_playlist_s(&play_list, index, position_ms),
        play_list,
        ..UiState::default()
    }
}


#[cfg(test)]
mod tests {
    use super::test_fixture::{engine, view_model, view_model_with};
    use super::*;
    use crate::domain::ui::Layout;
    use crate::domain::video::{PlayMode, VideoSize};
    use crate::infrastructure::{EngineCommand, MemoryStateStore};
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;
    use tokio::time::{timeout, Instant};

    fn fullscreen_config() -> EmbeddedUiConfig {
        EmbeddedUiConfig {
            is_fullscreen: true,
            player_aspect_ratio: 16.0 / 9.0,
            screen_width_px: 1920,
            system_bars_light_mode: false,
            brightness: None,
        }
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    #[test]
    fn initial_snapshot_mirrors_engine() {
        let vm = view_model();
        let state = vm.ui_state();
        assert_eq!(state.ui_mode, UiMode::EmbeddedVideo);
        assert_eq!(state.duration_ms, 56_000);
        assert_eq!(state.play_list.len(), 3);
        assert_eq!(state.current_playlist_item_index, Some(0));
        assert_eq!(state.playlist_duration_s, 206);
        assert_abs_diff_eq!(state.sound_volume, 7.0 / 15.0, epsilon = 1e-6);
        assert!(vm.engine().commands().is_empty());
    }

    // -------------------------------------------------------------------------
    // Mode transitions
    // -------------------------------------------------------------------------

    #[test]
    fn mode_change_waits_for_engine_play_mode() {
        let mut vm = view_model();
        vm.change_ui_mode(UiMode::FullscreenVideo, Some(fullscreen_config()));

        assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedVideo);
        assert_eq!(vm.pending_mode(), Some(UiMode::FullscreenVideo));
        assert_eq!(
            vm.engine().commands(),
            &[EngineCommand::SetPlayMode(PlayMode::FullscreenVideo)]
        );

        vm.process_pending_events();
        let state = vm.ui_state();
        assert_eq!(state.ui_mode, UiMode::FullscreenVideo);
        assert_eq!(state.embedded_ui_config, Some(fullscreen_config()));
        assert!(vm.pending_mode().is_none());
    }

    #[test]
    fn mismatching_engine_report_drops_pending_mode() {
        let mut vm = view_model_with(engine().with_manual_play_mode());
        vm.change_ui_mode(UiMode::FullscreenVideo, None);
        vm.process_pending_events();
        assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedVideo);

        vm.engine_mut().confirm_play_mode(PlayMode::EmbeddedAudio);
        vm.process_pending_events();
        assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedAudio);
        assert!(vm.pending_mode().is_none());
    }

    #[test]
    fn controls_toggle_without_engine_round_trip() {
        let mut vm = view_model();
        vm.show_ui();
        assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedVideoControllerUi);
        vm.hide_ui();
        assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedVideo);
        assert!(vm.engine().commands().is_empty());
    }

    #[test]
    fn controls_toggle_keeps_deferred_fullscreen_config() {
        let mut vm = view_model_with(engine().with_manual_play_mode());
        vm.change_ui_mode(UiMode::FullscreenVideo, Some(fullscreen_config()));
        vm.show_ui();
        assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedVideoControllerUi);
        assert_eq!(vm.pending_mode(), Some(UiMode::FullscreenVideo));

        vm.engine_mut().confirm_play_mode(PlayMode::FullscreenVideo);
        vm.process_pending_events();
        let state = vm.ui_state();
        assert_eq!(state.ui_mode, UiMode::FullscreenVideo);
        assert_eq!(state.embedded_ui_config, Some(fullscreen_config()));
        assert_eq!(
            vm.engine().commands(),
            &[EngineCommand::SetPlayMode(PlayMode::FullscreenVideo)]
        );
    }

    #[test]
    fn controls_toggle_while_engine_switches_sends_no_command() {
        let mut vm = view_model();
        vm.change_ui_mode(UiMode::FullscreenVideo, Some(fullscreen_config()));
        // The engine already runs fullscreen; its report is still queued.
        vm.show_ui();
        vm.hide_ui();
        vm.process_pending_events();

        let state = vm.ui_state();
        assert_eq!(state.ui_mode, UiMode::FullscreenVideo);
        assert_eq!(state.embedded_ui_config, Some(fullscreen_config()));
        assert_eq!(
            vm.engine().commands(),
            &[EngineCommand::SetPlayMode(PlayMode::FullscreenVideo)]
        );
    }

    #[test]
    fn pip_from_controller_ui_returns_to_embedded_video() {
        let mut vm = view_model();
        vm.show_ui();
        vm.change_ui_mode(UiMode::Pip, None);

        let state = vm.ui_state();
        assert_eq!(state.ui_mode, UiMode::EmbeddedVideo);
        assert!(state.entering_pip);
        assert!(vm.engine().commands().is_empty());

        vm.done_entering_pip();
        assert!(!vm.ui_state().entering_pip);
    }

    #[test]
    fn pip_from_embedded_audio_returns_to_embedded_video() {
        let mut vm = view_model_with(engine().with_play_mode(PlayMode::EmbeddedAudio));
        assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedAudio);

        vm.change_ui_mode(UiMode::Pip, None);
        let state = vm.ui_state();
        assert_eq!(state.ui_mode, UiMode::EmbeddedVideo);
        assert!(state.entering_pip);
    }

    #[test]
    fn leaving_pip_always_lands_in_fullscreen() {
        for start in [PlayMode::Pip, PlayMode::EmbeddedVideo, PlayMode::EmbeddedAudio] {
            let mut vm = view_model_with(engine().with_play_mode(start));
            vm.on_picture_in_picture_mode_changed(false);
            assert_eq!(vm.ui_state().ui_mode, UiMode::FullscreenVideo, "{start:?}");

            vm.process_pending_events();
            assert_eq!(vm.ui_state().ui_mode, UiMode::FullscreenVideo, "{start:?}");
            assert_eq!(vm.engine().play_mode(), PlayMode::FullscreenVideo);
        }
    }

    #[test]
    fn entering_pip_syncs_engine() {
        let mut vm = view_model();
        vm.on_picture_in_picture_mode_changed(true);
        vm.process_pending_events();
        assert_eq!(vm.ui_state().ui_mode, UiMode::Pip);
        assert_eq!(
            vm.engine().commands(),
            &[EngineCommand::SetPlayMode(PlayMode::Pip)]
        );
    }

    #[test]
    fn quick_pip_exit_skips_stale_pip_report() {
        let mut vm = view_model();
        let mut snapshots = vm.subscribe();
        vm.on_picture_in_picture_mode_changed(true);
        vm.on_picture_in_picture_mode_changed(false);
        snapshots.borrow_and_update();

        assert_eq!(vm.process_pending_events(), 2);
        assert!(!snapshots.has_changed().expect("sender alive"));
        assert_eq!(vm.ui_state().ui_mode, UiMode::FullscreenVideo);
        assert_eq!(
            vm.engine().commands(),
            &[
                EngineCommand::SetPlayMode(PlayMode::Pip),
                EngineCommand::SetPlayMode(PlayMode::FullscreenVideo)
            ]
        );
    }

    #[test]
    fn back_closes_selection_overlay() {
        let mut vm = view_model();
        vm.change_ui_mode(UiMode::StreamSelect(Layout::Embedded), None);
        assert_eq!(vm.ui_state().ui_mode, UiMode::StreamSelect(Layout::Embedded));

        vm.on_back_pressed();
        assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedVideo);
    }

    #[test]
    fn back_from_fullscreen_goes_through_engine() {
        let mut vm = view_model();
        vm.change_ui_mode(UiMode::FullscreenVideo, None);
        vm.process_pending_events();

        vm.on_back_pressed();
        assert_eq!(vm.ui_state().ui_mode, UiMode::FullscreenVideo);
        vm.process_pending_events();
        assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedVideo);
    }

    #[test]
    fn back_without_predecessor_signals_host() {
        let mut vm = view_model();
        let mut signals = vm.external_signals().expect("first take");
        assert!(vm.external_signals().is_none());

        vm.on_back_pressed();
        assert_eq!(signals.try_recv(), Ok(ExternalSignal::BackPressed));
        assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedVideo);
    }

    #[test]
    fn dialog_forces_placeholder() {
        let mut vm = view_model();
        vm.show_ui();
        vm.dialog_visible(true);
        assert_eq!(vm.ui_state().ui_mode, UiMode::Placeholder);

        vm.dialog_visible(false);
        assert_eq!(vm.ui_state().ui_mode, UiMode::Placeholder);
    }

    // -------------------------------------------------------------------------
    // Engine events
    // -------------------------------------------------------------------------

    #[test]
    fn video_size_sets_bounded_embedded_ratio() {
        let mut vm = view_model();
        vm.engine_mut().set_video_size(VideoSize::new(1080, 1920));
        vm.process_pending_events();

        let state = vm.ui_state();
        assert_abs_diff_eq!(state.content_ratio, 0.5625, epsilon = 1e-6);
        assert_abs_diff_eq!(state.embedded_ui_ratio, 4.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn loading_and_chapters_are_mirrored() {
        let mut vm = view_model();
        vm.engine_mut().set_loading(true);
        vm.engine_mut()
            .set_chapters(vec![crate::domain::playlist::Chapter::new("Intro", 0)]);
        assert_eq!(vm.process_pending_events(), 2);

        let state = vm.ui_state();
        assert!(state.is_loading);
        assert_eq!(state.chapters.len(), 1);
    }

    #[test]
    fn progress_refresh_keeps_dragged_thumb() {
        let mut vm = view_model();
        vm.seek_position_changed(0.75);
        vm.engine_mut().advance(5_000);
        vm.refresh_progress();

        let state = vm.ui_state();
        assert_abs_diff_eq!(state.seeker_position, 0.75);
        assert_eq!(state.playback_position_ms, 42_000);
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    #[test]
    fn restore_applies_ui_fields_and_mode() {
        let mut store = MemoryStateStore::new();
        let mut saved = view_model();
        saved.cycle_content_fit_mode();
        saved.change_ui_mode(UiMode::FullscreenVideo, Some(fullscreen_config()));
        saved.process_pending_events();
        saved.save_state(&mut store).unwrap();

        let mut vm = view_model();
        assert!(vm.restore_state(&store).unwrap());
        vm.process_pending_events();

        let state = vm.ui_state();
        assert_eq!(state.content_fit_mode, saved.ui_state().content_fit_mode);
        assert_eq!(state.ui_mode, UiMode::FullscreenVideo);
        assert_eq!(state.embedded_ui_config, Some(fullscreen_config()));
    }

    #[test]
    fn restore_without_snapshot_is_noop() {
        let store = MemoryStateStore::new();
        let mut vm = view_model();
        assert!(!vm.restore_state(&store).unwrap());
        assert_eq!(vm.ui_state(), view_model().ui_state());
    }

    // -------------------------------------------------------------------------
    // Timers and lifecycle
    // -------------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn controls_hide_after_auto_hide_delay() {
        let mut vm = view_model();
        let started = Instant::now();
        vm.show_ui();

        timeout(Duration::from_secs(60), async {
            while vm.ui_state().ui_mode.controller_ui_visible() {
                assert!(vm.process_next_event().await);
            }
        })
        .await
        .expect("controls hidden");

        let elapsed = started.elapsed();
        assert!(elapsed >= vm.config().auto_hide_delay(), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(5), "{elapsed:?}");
        assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedVideo);
    }

    #[tokio::test(start_paused = true)]
    async fn progress_is_sampled_while_controls_are_visible() {
        let mut vm = view_model();
        vm.show_ui();
        vm.engine_mut().advance(1_500);

        assert!(vm.process_next_event().await);
        assert_eq!(vm.ui_state().playback_position_ms, 1_510);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_everything() {
        let mut vm = view_model();
        vm.show_ui();
        vm.shutdown();

        assert!(!vm.process_next_event().await);
        assert_eq!(vm.process_pending_events(), 0);

        tokio::time::advance(Duration::from_secs(10)).await;
        vm.show_ui();
        assert!(!vm.auto_hide.is_active());
        assert!(!vm.progress.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn dialog_cancels_and_restores_auto_hide() {
        let mut vm = view_model();
        vm.show_ui();
        assert!(vm.auto_hide.is_active());

        vm.dialog_visible(true);
        assert!(!vm.auto_hide.is_active());
        assert!(!vm.progress.is_active());

        vm.dialog_visible(false);
        assert!(vm.auto_hide.is_active());
        assert_eq!(vm.ui_state().ui_mode, UiMode::Placeholder);
    }

    #[tokio::test(start_paused = true)]
    async fn controls_toggle_restarts_auto_hide_while_switching() {
        let mut vm = view_model_with(engine().with_manual_play_mode());
        vm.change_ui_mode(UiMode::FullscreenVideo, None);
        vm.show_ui();
        assert!(vm.auto_hide.is_active());
        assert!(vm.progress.is_active());

        vm.hide_ui();
        assert!(!vm.auto_hide.is_active());
        assert_eq!(vm.pending_mode(), Some(UiMode::FullscreenVideo));
    }

    #[test]
    fn no_timers_without_runtime() {
        let mut vm = view_model();
        vm.show_ui();
        assert!(!vm.auto_hide.is_active());
        assert!(!vm.progress.is_active());
    }
}
