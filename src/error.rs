// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("State Error: {0}")]
    State(String),
    #[error("Seeker Error: {0}")]
    Seeker(#[from] SeekerError),
}

/// Precondition violations raised while building a seek bar model.
///
/// These indicate a caller bug (markers computed against the wrong range),
/// not user input, so construction fails instead of clamping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeekerError {
    /// The value range is empty, inverted or not finite.
    #[error("invalid seeker range {start}..={end}")]
    InvalidRange { start: f32, end: f32 },

    /// A segment boundary lies outside the value range.
    #[error("segment '{name}' ({start}..{end}) is outside of {range_start}..={range_end}")]
    SegmentOutOfRange {
        name: String,
        start: f32,
        end: f32,
        range_start: f32,
        range_end: f32,
    },

    /// A segment ends before it starts.
    #[error("segment '{name}' ends ({end}) before it starts ({start})")]
    InvertedSegment { name: String, start: f32, end: f32 },

    /// A chapter marker lies outside the value range.
    #[error("chapter '{name}' at {start} is outside of {range_start}..={range_end}")]
    ChapterOutOfRange {
        name: String,
        start: f32,
        range_start: f32,
        range_end: f32,
    },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
