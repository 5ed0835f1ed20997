// SPDX-License-Identifier: MPL-2.0
use new_player::application::port::PlaybackEngine;
use new_player::domain::playlist::PlaylistItem;
use new_player::domain::ui::{Layout, UiMode};
use new_player::domain::video::PlayMode;
use new_player::infrastructure::{EngineCommand, MemoryAudio, MemoryEngine};
use new_player::view_model::{ExternalSignal, PlayerViewModel, SeekDirection, ViewModelConfig};
use std::time::Duration;
use tokio::time::timeout;

fn player() -> PlayerViewModel<MemoryEngine> {
    let engine = MemoryEngine::new()
        .with_playlist(vec![
            PlaylistItem::new(10, "First", Some(56_000)),
            PlaylistItem::new(11, "Second", Some(30_000)),
        ])
        .with_fast_seek_amount_secs(24)
        .with_position_ms(10)
        .with_play_mode(PlayMode::EmbeddedVideo);
    PlayerViewModel::new(engine, Box::new(MemoryAudio::new(15, 7)), ViewModelConfig::default())
}

#[tokio::test(start_paused = true)]
async fn test_fullscreen_round_trip_publishes_snapshots() {
    let mut vm = player();
    let mut snapshots = vm.subscribe();
    snapshots.borrow_and_update();

    vm.change_ui_mode(UiMode::FullscreenVideo, None);
    assert!(!snapshots.has_changed().expect("sender alive"));

    assert!(vm.process_next_event().await);
    assert!(snapshots.has_changed().expect("sender alive"));
    assert_eq!(snapshots.borrow_and_update().ui_mode, UiMode::FullscreenVideo);

    vm.on_back_pressed();
    assert!(vm.process_next_event().await);
    assert_eq!(snapshots.borrow_and_update().ui_mode, UiMode::EmbeddedVideo);
}

#[tokio::test(start_paused = true)]
async fn test_seek_and_fast_seek_session() {
    let mut vm = player();
    vm.show_ui();

    vm.seek_position_changed(0.5);
    assert!(vm.engine().commands().is_empty());
    vm.seeking_finished();

    vm.engine_mut().set_current_position_ms(10);
    vm.fast_seek(SeekDirection::Forward);
    assert_eq!(vm.ui_state().fast_seek_seconds, 24);
    vm.finish_fast_seek();

    assert_eq!(
        vm.engine().commands(),
        &[
            EngineCommand::Seek(28_000),
            EngineCommand::Seek(10),
            EngineCommand::Seek(24_010)
        ]
    );
    assert_eq!(vm.ui_state().fast_seek_seconds, 0);
}

#[tokio::test(start_paused = true)]
async fn test_controls_hide_and_progress_stops() {
    let mut vm = player();
    vm.show_ui();

    timeout(Duration::from_secs(30), async {
        while vm.ui_state().ui_mode.controller_ui_visible() {
            assert!(vm.process_next_event().await);
        }
    })
    .await
    .expect("controls hidden by auto-hide");

    // Nothing is scheduled any more in the hidden mode.
    vm.process_pending_events();
    let next = timeout(Duration::from_secs(30), vm.process_next_event()).await;
    assert!(next.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_stream_selection_overlay_and_back_signal() {
    let mut vm = player();
    let mut signals = vm.external_signals().expect("signals available");

    vm.change_ui_mode(UiMode::StreamSelect(Layout::Embedded), None);
    vm.move_playlist_item(1, 0);
    vm.on_stream_item_drag_finished();
    vm.process_pending_events();

    let state = vm.ui_state();
    assert_eq!(state.play_list, vm.engine().playlist());
    assert_eq!(state.current_playlist_item_index, Some(1));

    vm.on_back_pressed();
    assert_eq!(vm.ui_state().ui_mode, UiMode::EmbeddedVideo);
    vm.on_back_pressed();
    assert_eq!(signals.recv().await, Some(ExternalSignal::BackPressed));

    vm.shutdown();
    assert!(!vm.process_next_event().await);
}
