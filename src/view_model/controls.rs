// SPDX-License-Identifier: MPL-2.0
//! Transport, seek and ambient control intents.

use super::PlayerViewModel;
use crate::application::port::PlaybackEngine;
use crate::domain::ui::Brightness;
use crate::domain::video::{SeekFraction, SoundVolume};

/// Direction of a double-tap fast seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Backward,
    Forward,
}

impl SeekDirection {
    /// `-1` or `+1`.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

impl<E: PlaybackEngine> PlayerViewModel<E> {
    // ═══════════════════════════════════════════════════════════════════════
    // TRANSPORT
    // ═══════════════════════════════════════════════════════════════════════

    pub fn play(&mut self) {
        self.engine.play();
        if self.current_mode().controller_ui_visible() {
            self.reset_auto_hide();
        }
    }

    /// Pauses playback. Controls stay visible while paused.
    pub fn pause(&mut self) {
        self.engine.pause();
        self.auto_hide.cancel();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SEEK BAR
    // ═══════════════════════════════════════════════════════════════════════

    /// The user drags the seek bar to `fraction` of the duration.
    ///
    /// Only the preview moves; the engine is not commanded until
    /// [`seeking_finished`](Self::seeking_finished).
    pub fn seek_position_changed(&mut self, fraction: f32) {
        self.auto_hide.cancel();
        let fraction = SeekFraction::new(fraction);
        let duration_ms = self.engine.duration_ms();
        self.update(|state| {
            state.seeker_position = fraction.value();
            state.seek_preview_visible = true;
            state.playback_position_ms = fraction.position_ms(duration_ms);
        });
    }

    /// The user released the seek bar: commit the previewed position.
    pub fn seeking_finished(&mut self) {
        let fraction = SeekFraction::new(self.ui_state.borrow().seeker_position);
        let position_ms = fraction.position_ms(self.engine.duration_ms());
        log::debug!("Seeking to {position_ms} ms");
        self.engine.set_current_position_ms(position_ms);
        self.update(|state| {
            state.seek_preview_visible = false;
            state.playback_position_ms = position_ms;
        });
        self.reset_auto_hide();
    }

    /// Skips one fast seek step in `direction`.
    pub fn fast_seek(&mut self, direction: SeekDirection) {
        let amount_secs = self.engine.fast_seek_amount_secs();
        let step_ms = u64::from(amount_secs) * 1000;
        let duration_ms = self.engine.duration_ms();
        let position_ms = self.engine.current_position_ms();

        let target_ms = match direction {
            SeekDirection::Forward => {
                let target = position_ms.saturating_add(step_ms);
                if duration_ms > 0 {
                    target.min(duration_ms)
                } else {
                    target
                }
            }
            SeekDirection::Backward => position_ms.saturating_sub(step_ms),
        };
        self.engine.set_current_position_ms(target_ms);

        let step_secs = i32::try_from(amount_secs).unwrap_or(i32::MAX);
        self.update(|state| {
            state.fast_seek_seconds = state
                .fast_seek_seconds
                .saturating_add(direction.sign().saturating_mul(step_secs));
            state.playback_position_ms = target_ms;
            state.seeker_position = SeekFraction::from_position(target_ms, duration_ms).value();
        });

        if self.current_mode().controller_ui_visible() {
            self.reset_auto_hide();
        }
    }

    /// The fast seek overlay faded out.
    pub fn finish_fast_seek(&mut self) {
        self.update(|state| state.fast_seek_seconds = 0);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // GESTURES
    // ═══════════════════════════════════════════════════════════════════════

    /// Vertical swipe on the brightness side, fullscreen only.
    ///
    /// `ambient` is the window brightness reported by the host, used as the
    /// starting point until the player has its own override.
    pub fn brightness_change(&mut self, delta: f32, ambient: Option<f32>) {
        let state = self.ui_state.borrow().clone();
        if !state.ui_mode.is_fullscreen() {
            log::debug!("Ignoring brightness gesture in {:?}", state.ui_mode);
            return;
        }
        let brightness = Brightness::seeded(state.brightness.or(ambient)).adjusted_by_gesture(delta);
        self.update(|state| state.brightness = Some(brightness.value()));
    }

    /// Vertical swipe on the volume side.
    pub fn volume_change(&mut self, delta: f32) {
        let current = SoundVolume::new(self.ui_state.borrow().sound_volume);
        let volume = current.adjusted_by_gesture(delta);
        let max_volume = self.audio.max_volume();
        self.audio.set_volume(volume.to_device(max_volume));
        self.update(|state| state.sound_volume = volume.value());
    }

    // ═══════════════════════════════════════════════════════════════════════
    // CONTENT FIT
    // ═══════════════════════════════════════════════════════════════════════

    pub fn cycle_content_fit_mode(&mut self) {
        self.update(|state| state.content_fit_mode = state.content_fit_mode.next());
    }

    /// Changes the narrowest embedded ratio; invalid values are logged and
    /// ignored.
    pub fn set_min_content_ratio(&mut self, ratio: f32) {
        if self.config.set_min_content_ratio(ratio) {
            self.apply_content_ratio_bounds();
        }
    }

    /// Changes the widest embedded ratio; invalid values are logged and
    /// ignored.
    pub fn set_max_content_ratio(&mut self, ratio: f32) {
        if self.config.set_max_content_ratio(ratio) {
            self.apply_content_ratio_bounds();
        }
    }

    fn apply_content_ratio_bounds(&mut self) {
        let content_ratio = self.ui_state.borrow().content_ratio;
        let embedded_ui_ratio = self.config.clamp_ratio(content_ratio);
        self.update(|state| state.embedded_ui_ratio = embedded_ui_ratio);
    }
}
