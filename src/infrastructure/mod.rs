// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. The adapters here keep all state in memory; hosts
//! plug their native player, mixer and storage in through the same traits.
//!
//! # Available Adapters
//!
//! - [`memory_engine`]: Scriptable playback engine (implements [`PlaybackEngine`])
//! - [`memory_audio`]: Volume-only audio output (implements [`AudioOutput`])
//! - [`memory_store`]: Map-backed snapshot store (implements [`StateStore`])
//!
//! [`PlaybackEngine`]: crate::application::port::PlaybackEngine
//! [`AudioOutput`]: crate::application::port::AudioOutput
//! [`StateStore`]: crate::application::port::StateStore

pub mod memory_audio;
pub mod memory_engine;
pub mod memory_store;

// Re-export main types for convenience
pub use memory_audio::MemoryAudio;
pub use memory_engine::{EngineCommand, MemoryEngine};
pub use memory_store::MemoryStateStore;
