// SPDX-License-Identifier: MPL-2.0
//! UI mode table.
//!
//! [`UiMode`] is the closed set of visual states of the player surface. All
//! facets and transitions are pure functions of the mode so the table can be
//! checked exhaustively without an engine:
//!
//! ```text
//!                 show/hide                  show/hide
//!  EmbeddedVideo ◀─────────▶ ..ControllerUi   FullscreenVideo ◀──▶ ..ControllerUi
//!        ▲                                         │
//!        └──────────────── back ───────────────────┘
//!
//!  StreamSelect(layout) / ChapterSelect(layout) ── back ──▶ hidden mode of layout
//! ```

use crate::domain::video::PlayMode;
use serde::{Deserialize, Serialize};

/// The two primary layout contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    Embedded,
    Fullscreen,
}

impl Layout {
    /// Video mode of this layout with the controller UI hidden.
    #[must_use]
    pub fn hidden_video_mode(self) -> UiMode {
        match self {
            Self::Embedded => UiMode::EmbeddedVideo,
            Self::Fullscreen => UiMode::FullscreenVideo,
        }
    }
}

/// Visual state of the player surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UiMode {
    /// Nothing is rendered (no media, or an external dialog covers the player).
    #[default]
    Placeholder,
    EmbeddedVideo,
    EmbeddedVideoControllerUi,
    EmbeddedAudio,
    FullscreenVideo,
    FullscreenVideoControllerUi,
    FullscreenAudio,
    Pip,
    /// Playlist overlay on top of the given layout.
    StreamSelect(Layout),
    /// Chapter list overlay on top of the given layout.
    ChapterSelect(Layout),
}

impl UiMode {
    /// Every mode, for exhaustive checks.
    pub const ALL: [UiMode; 12] = [
        UiMode::Placeholder,
        UiMode::EmbeddedVideo,
        UiMode::EmbeddedVideoControllerUi,
        UiMode::EmbeddedAudio,
        UiMode::FullscreenVideo,
        UiMode::FullscreenVideoControllerUi,
        UiMode::FullscreenAudio,
        UiMode::Pip,
        UiMode::StreamSelect(Layout::Embedded),
        UiMode::StreamSelect(Layout::Fullscreen),
        UiMode::ChapterSelect(Layout::Embedded),
        UiMode::ChapterSelect(Layout::Fullscreen),
    ];

    /// Layout this mode belongs to, `None` for `Placeholder` and `Pip`.
    #[must_use]
    pub fn layout(self) -> Option<Layout> {
        match self {
            Self::EmbeddedVideo | Self::EmbeddedVideoControllerUi | Self::EmbeddedAudio => {
                Some(Layout::Embedded)
            }
            Self::FullscreenVideo | Self::FullscreenVideoControllerUi | Self::FullscreenAudio => {
                Some(Layout::Fullscreen)
            }
            Self::StreamSelect(layout) | Self::ChapterSelect(layout) => Some(layout),
            Self::Placeholder | Self::Pip => None,
        }
    }

    #[must_use]
    pub fn is_fullscreen(self) -> bool {
        self.layout() == Some(Layout::Fullscreen)
    }

    /// Returns true if the video controller overlay is shown.
    #[must_use]
    pub fn controller_ui_visible(self) -> bool {
        matches!(
            self,
            Self::EmbeddedVideoControllerUi | Self::FullscreenVideoControllerUi
        )
    }

    #[must_use]
    pub fn is_embedded_audio(self) -> bool {
        self == Self::EmbeddedAudio
    }

    #[must_use]
    pub fn is_audio(self) -> bool {
        matches!(self, Self::EmbeddedAudio | Self::FullscreenAudio)
    }

    #[must_use]
    pub fn is_stream_select(self) -> bool {
        matches!(self, Self::StreamSelect(_))
    }

    #[must_use]
    pub fn is_chapter_select(self) -> bool {
        matches!(self, Self::ChapterSelect(_))
    }

    #[must_use]
    pub fn is_selection(self) -> bool {
        self.is_stream_select() || self.is_chapter_select()
    }

    /// Returns true if the mode displays playback progress and therefore
    /// needs periodic progress samples.
    #[must_use]
    pub fn shows_progress(self) -> bool {
        self.controller_ui_visible() || self.is_audio() || self.is_selection()
    }

    /// Engine mode this UI mode requires.
    ///
    /// Selection overlays keep the play mode of the layout below them.
    #[must_use]
    pub fn play_mode(self) -> PlayMode {
        match self {
            Self::Placeholder => PlayMode::Idle,
            Self::EmbeddedVideo | Self::EmbeddedVideoControllerUi => PlayMode::EmbeddedVideo,
            Self::FullscreenVideo | Self::FullscreenVideoControllerUi => PlayMode::FullscreenVideo,
            Self::EmbeddedAudio => PlayMode::EmbeddedAudio,
            Self::FullscreenAudio => PlayMode::FullscreenAudio,
            Self::Pip => PlayMode::Pip,
            Self::StreamSelect(layout) | Self::ChapterSelect(layout) => {
                layout.hidden_video_mode().play_mode()
            }
        }
    }

    /// UI mode shown when the engine enters `play_mode` on its own.
    #[must_use]
    pub fn from_play_mode(play_mode: PlayMode) -> Self {
        match play_mode {
            PlayMode::Idle | PlayMode::BackgroundVideo | PlayMode::BackgroundAudio => {
                Self::Placeholder
            }
            PlayMode::EmbeddedVideo => Self::EmbeddedVideo,
            PlayMode::FullscreenVideo => Self::FullscreenVideo,
            PlayMode::Pip => Self::Pip,
            PlayMode::EmbeddedAudio => Self::EmbeddedAudio,
            PlayMode::FullscreenAudio => Self::FullscreenAudio,
        }
    }

    /// Same layout with the controller overlay shown.
    #[must_use]
    pub fn with_controller_ui(self) -> Self {
        match self {
            Self::EmbeddedVideo => Self::EmbeddedVideoControllerUi,
            Self::FullscreenVideo => Self::FullscreenVideoControllerUi,
            other => other,
        }
    }

    /// Same layout with every overlay hidden.
    #[must_use]
    pub fn without_controller_ui(self) -> Self {
        match self {
            Self::EmbeddedVideoControllerUi => Self::EmbeddedVideo,
            Self::FullscreenVideoControllerUi => Self::FullscreenVideo,
            Self::StreamSelect(layout) | Self::ChapterSelect(layout) => layout.hidden_video_mode(),
            other => other,
        }
    }

    /// Mode reached by back navigation.
    ///
    /// `None` means the mode has no predecessor and the host has to close
    /// the player.
    #[must_use]
    pub fn back_target(self) -> Option<Self> {
        match self {
            Self::StreamSelect(layout) | Self::ChapterSelect(layout) => {
                Some(layout.hidden_video_mode())
            }
            Self::EmbeddedVideoControllerUi => Some(Self::EmbeddedVideo),
            Self::FullscreenVideoControllerUi => Some(Self::FullscreenVideo),
            Self::FullscreenVideo => Some(Self::EmbeddedVideo),
            Self::FullscreenAudio => Some(Self::EmbeddedAudio),
            Self::EmbeddedVideo | Self::EmbeddedAudio | Self::Pip | Self::Placeholder => None,
        }
    }

    /// Mode committed while the surface animates into picture-in-picture.
    ///
    /// Controller and embedded-audio layouts collapse to the bare embedded
    /// video so the floating window shows only the video.
    #[must_use]
    pub fn pip_return_mode(self) -> Self {
        if self.controller_ui_visible() || self.is_embedded_audio() {
            Self::EmbeddedVideo
        } else {
            self
        }
    }
}

/// How the video is scaled into the player surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContentFitMode {
    /// Fill the surface, cutting off what does not fit.
    Crop,
    /// Fill the surface, ignoring the aspect ratio.
    Stretched,
    /// Letterbox inside the surface.
    #[default]
    FitInside,
}

impl ContentFitMode {
    /// Next mode when the fit button is pressed.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::FitInside => Self::Crop,
            Self::Crop => Self::Stretched,
            Self::Stretched => Self::FitInside,
        }
    }
}
