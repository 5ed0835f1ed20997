// SPDX-License-Identifier: MPL-2.0
//! Configuration injected into a [`PlayerViewModel`](super::PlayerViewModel).

use crate::config::{DEFAULT_MAX_CONTENT_RATIO, DEFAULT_MIN_CONTENT_RATIO};
use crate::domain::ui::{AutoHideDelay, ProgressInterval};
use std::time::Duration;

/// Timings and content-ratio bounds of one view-model.
///
/// Ratio setters validate their input; a rejected value is logged and the
/// previous one is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModelConfig {
    auto_hide_delay: AutoHideDelay,
    progress_interval: ProgressInterval,
    min_content_ratio: f32,
    max_content_ratio: f32,
}

impl Default for ViewModelConfig {
    fn default() -> Self {
        Self {
            auto_hide_delay: AutoHideDelay::default(),
            progress_interval: ProgressInterval::default(),
            min_content_ratio: DEFAULT_MIN_CONTENT_RATIO,
            max_content_ratio: DEFAULT_MAX_CONTENT_RATIO,
        }
    }
}

fn is_valid_ratio(ratio: f32) -> bool {
    ratio.is_finite() && ratio > 0.0
}

impl ViewModelConfig {
    #[must_use]
    pub fn auto_hide_delay(&self) -> Duration {
        self.auto_hide_delay.as_duration()
    }

    pub fn set_auto_hide_delay(&mut self, delay: AutoHideDelay) {
        self.auto_hide_delay = delay;
    }

    #[must_use]
    pub fn progress_interval(&self) -> Duration {
        self.progress_interval.as_duration()
    }

    pub fn set_progress_interval(&mut self, interval: ProgressInterval) {
        self.progress_interval = interval;
    }

    #[must_use]
    pub fn min_content_ratio(&self) -> f32 {
        self.min_content_ratio
    }

    #[must_use]
    pub fn max_content_ratio(&self) -> f32 {
        self.max_content_ratio
    }

    /// Sets the narrowest embedded ratio. Returns `false` if `ratio` is not
    /// positive or exceeds the current maximum.
    pub fn set_min_content_ratio(&mut self, ratio: f32) -> bool {
        if !is_valid_ratio(ratio) || ratio > self.max_content_ratio {
            log::error!(
                "Rejected min content ratio {ratio}: must be positive and at most {}",
                self.max_content_ratio
            );
            return false;
        }
        self.min_content_ratio = ratio;
        true
    }

    /// Sets the widest embedded ratio. Returns `false` if `ratio` is not
    /// positive or below the current minimum.
    pub fn set_max_content_ratio(&mut self, ratio: f32) -> bool {
        if !is_valid_ratio(ratio) || ratio < self.min_content_ratio {
            log::error!(
                "Rejected max content ratio {ratio}: must be positive and at least {}",
                self.min_content_ratio
            );
            return false;
        }
        self.max_content_ratio = ratio;
        true
    }

    /// Sets both bounds at once, validated against each other only.
    pub fn set_content_ratio_bounds(&mut self, min: f32, max: f32) -> bool {
        if !is_valid_ratio(min) || !is_valid_ratio(max) || max < min {
            log::error!("Rejected content ratio bounds {min}..={max}");
            return false;
        }
        self.min_content_ratio = min;
        self.max_content_ratio = max;
        true
    }

    /// Ratio the embedded player takes for a video of `ratio`.
    ///
    /// An unusable ratio falls back to the maximum (the widest layout).
    #[must_use]
    pub fn clamp_ratio(&self, ratio: f32) -> f32 {
        if !is_valid_ratio(ratio) {
            return self.max_content_ratio;
        }
        ratio.clamp(self.min_content_ratio, self.max_content_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn defaults_come_from_config_constants() {
        let config = ViewModelConfig::default();
        assert_abs_diff_eq!(config.min_content_ratio(), DEFAULT_MIN_CONTENT_RATIO);
        assert_abs_diff_eq!(config.max_content_ratio(), DEFAULT_MAX_CONTENT_RATIO);
        assert_eq!(config.auto_hide_delay(), AutoHideDelay::default().as_duration());
    }

    #[test]
    fn invalid_min_is_rejected() {
        let mut config = ViewModelConfig::default();
        assert!(!config.set_min_content_ratio(0.0));
        assert!(!config.set_min_content_ratio(-1.0));
        assert!(!config.set_min_content_ratio(f32::NAN));
        assert!(!config.set_min_content_ratio(3.0));
        assert_abs_diff_eq!(config.min_content_ratio(), DEFAULT_MIN_CONTENT_RATIO);
    }

    #[test]
    fn invalid_max_is_rejected() {
        let mut config = ViewModelConfig::default();
        assert!(!config.set_max_content_ratio(1.0));
        assert!(!config.set_max_content_ratio(f32::INFINITY));
        assert_abs_diff_eq!(config.max_content_ratio(), DEFAULT_MAX_CONTENT_RATIO);

        assert!(config.set_max_content_ratio(2.4));
        assert_abs_diff_eq!(config.max_content_ratio(), 2.4);
    }

    #[test]
    fn bounds_are_validated_together() {
        let mut config = ViewModelConfig::default();
        assert!(config.set_content_ratio_bounds(0.5, 1.0));
        assert!(!config.set_content_ratio_bounds(2.0, 1.0));
        assert_abs_diff_eq!(config.min_content_ratio(), 0.5);
        assert_abs_diff_eq!(config.max_content_ratio(), 1.0);
    }

    #[test]
    fn ratio_is_clamped_into_bounds() {
        let config = ViewModelConfig::default();
        assert_abs_diff_eq!(config.clamp_ratio(9.0 / 16.0), DEFAULT_MIN_CONTENT_RATIO);
        assert_abs_diff_eq!(config.clamp_ratio(2.39), DEFAULT_MAX_CONTENT_RATIO);
        assert_abs_diff_eq!(config.clamp_ratio(1.5), 1.5);
        assert_abs_diff_eq!(config.clamp_ratio(0.0), DEFAULT_MAX_CONTENT_RATIO);
    }
}
