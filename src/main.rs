// SPDX-License-Identifier: MPL-2.0
//! Scripted player session against the in-memory engine.
//!
//! Usage: `new_player [--config <path>] [--verbose]`

use env_logger::{Builder, Target};
use log::LevelFilter;
use new_player::config;
use new_player::domain::playlist::{Chapter, PlaylistItem};
use new_player::domain::ui::{EmbeddedUiConfig, Layout, UiMode, UiState};
use new_player::domain::video::{PlayMode, VideoSize};
use new_player::infrastructure::{MemoryAudio, MemoryEngine, MemoryStateStore};
use new_player::time_units::{format_time_ms, format_time_s};
use new_player::view_model::{ExternalSignal, PlayerViewModel, SeekDirection};
use std::path::PathBuf;

fn init_logger(verbose: bool) {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("new_player", level)
        .init();
}

fn demo_engine() -> MemoryEngine {
    MemoryEngine::new()
        .with_playlist(vec![
            PlaylistItem::new(1, "Opening", Some(56_000)),
            PlaylistItem::new(2, "Interview", Some(1_260_000)),
            PlaylistItem::new(3, "Credits", Some(90_000)),
        ])
        .with_chapters(vec![
            Chapter::new("Cold open", 0),
            Chapter::new("Title", 21_000),
        ])
        .with_video_size(VideoSize::new(1920, 1080))
        .with_fast_seek_amount_secs(10)
        .with_play_mode(PlayMode::EmbeddedVideo)
}

fn log_snapshot(step: &str, state: &UiState) {
    log::info!(
        "{step}: {:?} {} / {} (playlist {} / {}) volume {:.2} brightness {:?} fit {:?}",
        state.ui_mode,
        format_time_ms(state.playback_position_ms),
        format_time_ms(state.duration_ms),
        format_time_s(state.playback_position_in_playlist_s),
        format_time_s(state.playlist_duration_s),
        state.sound_volume,
        state.brightness,
        state.content_fit_mode,
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();
    let verbose = args.contains(["-v", "--verbose"]);
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    init_logger(verbose);

    let config = match &config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };

    let mut vm = PlayerViewModel::new(
        demo_engine(),
        Box::new(MemoryAudio::new(15, 7)),
        config.view_model_config(),
    );
    let mut signals = vm
        .external_signals()
        .ok_or("external signals already taken")?;
    log_snapshot("start", &vm.ui_state());

    vm.play();
    vm.show_ui();
    vm.engine_mut().advance(12_000);
    vm.seek_position_changed(0.5);
    vm.seeking_finished();
    vm.fast_seek(SeekDirection::Forward);
    vm.finish_fast_seek();
    vm.process_pending_events();
    log_snapshot("seek", &vm.ui_state());

    vm.change_ui_mode(
        UiMode::FullscreenVideo,
        Some(EmbeddedUiConfig {
            is_fullscreen: false,
            player_aspect_ratio: vm.ui_state().embedded_ui_ratio,
            screen_width_px: 1080,
            system_bars_light_mode: true,
            brightness: None,
        }),
    );
    vm.process_pending_events();
    vm.brightness_change(0.2, None);
    vm.volume_change(-0.1);
    vm.cycle_content_fit_mode();
    log_snapshot("fullscreen", &vm.ui_state());

    vm.change_ui_mode(UiMode::StreamSelect(Layout::Fullscreen), None);
    vm.move_playlist_item(0, 1);
    vm.move_playlist_item(1, 2);
    vm.on_stream_item_drag_finished();
    vm.stream_selected(1);
    vm.process_pending_events();
    log_snapshot("playlist", &vm.ui_state());

    vm.on_back_pressed();
    vm.show_ui();
    log::info!("Waiting for controls to hide");
    while vm.ui_state().ui_mode.controller_ui_visible() {
        if !vm.process_next_event().await {
            break;
        }
    }
    log_snapshot("auto-hide", &vm.ui_state());

    let mut store = MemoryStateStore::new();
    vm.save_state(&mut store)?;

    vm.on_back_pressed();
    vm.process_pending_events();
    vm.on_back_pressed();
    if let Ok(ExternalSignal::BackPressed) = signals.try_recv() {
        log::info!("Host asked to close the player");
    }
    log_snapshot("closed", &vm.ui_state());
    vm.shutdown();
    Ok(())
}
