// SPDX-License-Identifier: MPL-2.0
//! Linear mapping between seek bar values and track pixels.
//!
//! Both directions coerce their output into range, so a thumb can never be
//! drawn outside the track and a touch past either end seeks to the end.

use std::ops::RangeInclusive;

/// Pixel offset of `value` on a track `width_px` wide.
///
/// Degenerate inputs (empty range, non-positive width) map to pixel 0.
#[must_use]
pub fn value_to_pixel(value: f32, width_px: f32, range: &RangeInclusive<f32>) -> f32 {
    let span = range.end() - range.start();
    if !(span > 0.0) || !(width_px > 0.0) || value.is_nan() {
        return 0.0;
    }
    let fraction = (value - range.start()) / span;
    (fraction * width_px).clamp(0.0, width_px)
}

/// Value under pixel offset `px` on a track `width_px` wide.
///
/// Degenerate inputs map to the start of the range.
#[must_use]
pub fn pixel_to_value(px: f32, width_px: f32, range: &RangeInclusive<f32>) -> f32 {
    let span = range.end() - range.start();
    if !(span > 0.0) || !(width_px > 0.0) || px.is_nan() {
        return *range.start();
    }
    let fraction = (px / width_px).clamp(0.0, 1.0);
    range.start() + fraction * span
}
