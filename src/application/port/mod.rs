// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the view-model remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`audio`]: System audio output volume
//! - [`engine`]: Media playback engine commands, observables and events
//! - [`state_store`]: Snapshot persistence across process restarts
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Traits are `Send` so the view-model can move between tokio tasks
//! - Engine commands are fire-and-forget; results come back as events
//!
//! # Example
//!
//! ```ignore
//! use new_player::application::port::{AudioOutput, PlaybackEngine};
//!
//! fn mute_and_pause(engine: &mut impl PlaybackEngine, audio: &mut dyn AudioOutput) {
//!     engine.pause();
//!     audio.set_volume(0);
//! }
//! ```

pub mod audio;
pub mod engine;
pub mod state_store;

// Re-export main types for convenience
pub use audio::AudioOutput;
pub use engine::{EngineEvent, PlaybackEngine};
pub use state_store::{StateStore, UI_STATE_KEY};
