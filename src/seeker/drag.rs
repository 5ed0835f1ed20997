// SPDX-License-Identifier: MPL-2.0
//! Seek bar drag state
//!
//! Gesture recognizers report per-frame deltas rather than absolute
//! positions. The drag keeps a running pixel offset and converts it into a
//! value after every change.

use super::mapping::{pixel_to_value, value_to_pixel};
use std::ops::RangeInclusive;

/// Manages thumb drag state
#[derive(Debug, Clone, Default)]
pub struct SeekerDrag {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Thumb offset accumulated so far
    offset_px: Option<f32>,
}

impl SeekerDrag {
    /// Starts a drag with the thumb at pixel `px`.
    pub fn start(&mut self, px: f32) {
        self.is_dragging = true;
        self.offset_px = Some(px);
    }

    /// Starts a drag with the thumb at the pixel of `value`.
    pub fn start_at_value(&mut self, value: f32, width_px: f32, range: &RangeInclusive<f32>) {
        self.start(value_to_pixel(value, width_px, range));
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.offset_px = None;
    }

    /// Current thumb offset, `None` when not dragging.
    #[must_use]
    pub fn offset_px(&self) -> Option<f32> {
        self.offset_px
    }

    /// Adds a frame delta and returns the value under the moved thumb.
    ///
    /// The offset is kept on the track, so dragging past an end and back
    /// starts moving again right away.
    pub fn drag_by(
        &mut self,
        delta_px: f32,
        width_px: f32,
        range: &RangeInclusive<f32>,
    ) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        let offset = (self.offset_px? + delta_px).clamp(0.0, width_px.max(0.0));
        self.offset_px = Some(offset);
        Some(pixel_to_value(offset, width_px, range))
    }
}
