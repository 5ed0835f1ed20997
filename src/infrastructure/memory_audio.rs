// SPDX-License-Identifier: MPL-2.0
//! In-memory audio output.

use crate::application::port::AudioOutput;

/// Audio output that only remembers its volume step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryAudio {
    max_volume: u32,
    volume: u32,
}

impl MemoryAudio {
    /// Creates an output with `max_volume` steps, starting at `volume`.
    #[must_use]
    pub fn new(max_volume: u32, volume: u32) -> Self {
        Self {
            max_volume,
            volume: volume.min(max_volume),
        }
    }
}

impl AudioOutput for MemoryAudio {
    fn max_volume(&self) -> u32 {
        self.max_volume
    }

    fn volume(&self) -> u32 {
        self.volume
    }

    fn set_volume(&mut self, volume: u32) {
        self.volume = volume.min(self.max_volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_is_clamped_to_max() {
        let mut audio = MemoryAudio::new(15, 20);
        assert_eq!(audio.volume(), 15);
        audio.set_volume(4);
        assert_eq!(audio.volume(), 4);
        audio.set_volume(16);
        assert_eq!(audio.volume(), 15);
    }
}
