// SPDX-License-Identifier: MPL-2.0
//! UI-mode transitions that depend on the engine play mode.
//!
//! A requested mode whose play mode differs from the engine's is not shown
//! right away. The machine remembers it as pending and the view-model asks
//! the engine to switch. The pending mode is committed when the engine
//! reports the matching play mode; any other report drops it.
//!
//! Transitions forced by the host (picture-in-picture) commit at once and
//! command the engine afterwards. Until the engine reports that play mode,
//! older reports still in the queue are ignored.

use crate::domain::ui::{EmbeddedUiConfig, UiMode};
use crate::domain::video::PlayMode;

/// Transition waiting for the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTransition {
    pub target: UiMode,
    pub config: Option<EmbeddedUiConfig>,
}

/// What the view-model has to do for a mode request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeDecision {
    /// Already in the requested mode.
    Unchanged,
    /// Show `mode` now.
    Commit(UiMode),
    /// Show `return_mode` with the PIP enter animation flag set.
    EnterPip { return_mode: UiMode },
    /// Ask the engine for `play_mode` and wait.
    Defer(PlayMode),
}

/// Pending-transition bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct ModeMachine {
    pending: Option<PendingTransition>,
    forced: Option<PlayMode>,
}

impl ModeMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target of the transition waiting for the engine, if any.
    #[must_use]
    pub fn pending(&self) -> Option<UiMode> {
        self.pending.map(|pending| pending.target)
    }

    /// Drops the pending transition and any forced play mode.
    pub fn clear(&mut self) {
        self.pending = None;
        self.forced = None;
    }

    /// The engine was commanded to `play_mode` after a forced commit.
    pub fn expect_forced(&mut self, play_mode: PlayMode) {
        self.pending = None;
        self.forced = Some(play_mode);
    }

    /// Decides how to reach `target` from `current` while the engine is in
    /// `engine_mode`.
    ///
    /// Switching overlays within the shown play mode (controls, selection
    /// lists) commits right away and leaves a pending layout change in
    /// place. Any other request replaces the pending one.
    pub fn request(
        &mut self,
        current: UiMode,
        target: UiMode,
        config: Option<EmbeddedUiConfig>,
        engine_mode: PlayMode,
    ) -> ModeDecision {
        if target == UiMode::Pip {
            self.clear();
            if current == UiMode::Pip {
                return ModeDecision::Unchanged;
            }
            return ModeDecision::EnterPip {
                return_mode: current.pip_return_mode(),
            };
        }

        let required = target.play_mode();
        if target != current && required == current.play_mode() {
            return ModeDecision::Commit(target);
        }

        self.clear();
        if required != engine_mode {
            self.pending = Some(PendingTransition { target, config });
            return ModeDecision::Defer(required);
        }

        if target == current {
            ModeDecision::Unchanged
        } else {
            ModeDecision::Commit(target)
        }
    }

    /// Reconciles with a play mode reported by the engine.
    ///
    /// Returns the mode to commit with the config captured at request time,
    /// or `None` when `current` already matches the report.
    pub fn on_play_mode_changed(
        &mut self,
        current: UiMode,
        reported: PlayMode,
    ) -> Option<(UiMode, Option<EmbeddedUiConfig>)> {
        if let Some(forced) = self.forced {
            if reported != forced {
                log::debug!("Ignoring stale {reported:?} report, waiting for {forced:?}");
                return None;
            }
            self.forced = None;
        }

        match self.pending.take() {
            Some(pending) if pending.target.play_mode() == reported => {
                Some((pending.target, pending.config))
            }
            Some(pending) => {
                log::debug!(
                    "Dropping pending {:?}: engine switched to {reported:?}",
                    pending.target
                );
                Some((UiMode::from_play_mode(reported), None))
            }
            None if current.play_mode() == reported => None,
            None => Some((UiMode::from_play_mode(reported), None)),
        }
    }
}
