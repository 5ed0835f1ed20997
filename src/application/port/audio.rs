// SPDX-License-Identifier: MPL-2.0
//! Audio output port definition.
//!
//! The device works in integer volume steps; the view-model converts them
//! with [`SoundVolume`](crate::domain::video::SoundVolume).

/// Port for the system audio output.
pub trait AudioOutput: Send {
    /// Highest volume step of the device.
    fn max_volume(&self) -> u32;

    /// Current volume step.
    fn volume(&self) -> u32;

    /// Sets the volume step. Values above [`max_volume`](Self::max_volume)
    /// are clamped by the implementation.
    fn set_volume(&mut self, volume: u32);
}
