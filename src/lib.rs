// SPDX-License-Identifier: MPL-2.0
//! `new_player` is the presentation core of an embeddable video player.
//!
//! It turns the state of a playback engine into immutable UI snapshots and
//! turns user intents (taps, drags, back presses) into engine commands,
//! following a UI-mode state machine for embedded, fullscreen,
//! picture-in-picture and selection layouts. Drawing and gesture recognition
//! stay with the host.
//!
//! # Layers
//!
//! - [`domain`]: Pure types and rules (UI modes, playlist, value newtypes)
//! - [`application`]: Ports the core depends on (engine, audio, state store)
//! - [`infrastructure`]: In-memory adapters for those ports
//! - [`seeker`]: Seek bar geometry
//! - [`view_model`]: The [`PlayerViewModel`](view_model::PlayerViewModel)

#![doc(html_root_url = "https://docs.rs/new_player/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod seeker;
pub mod time_units;
pub mod view_model;

#[cfg(test)]
pub(crate) mod test_utils;
