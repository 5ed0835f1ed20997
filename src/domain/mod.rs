// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core player rules with no runtime dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `serde` derives (so snapshots can be persisted by the host) it
//! depends on `std` only, which keeps every rule testable in isolation.
//!
//! # Modules
//!
//! - [`playlist`]: Playlist types ([`PlaylistItem`](playlist::PlaylistItem),
//!   [`Chapter`](playlist::Chapter)) and reorder helpers
//! - [`ui`]: UI mode table ([`UiMode`](ui::UiMode)) and UI value objects
//!   ([`Brightness`](ui::newtypes::Brightness), [`AutoHideDelay`](ui::newtypes::AutoHideDelay))
//! - [`video`]: Engine-side types ([`PlayMode`](video::PlayMode),
//!   [`RepeatMode`](video::RepeatMode)) and [`SoundVolume`](video::SoundVolume)

pub mod playlist;
pub mod ui;
pub mod video;
