// SPDX-License-Identifier: MPL-2.0
//! Seek bar value model.
//!
//! Pure geometry for a seek bar widget: value/pixel mapping, placement of
//! highlighted segments and chapter markers, and drag accumulation. No
//! drawing happens here; renderers ask for pixel offsets.
//!
//! # Example
//!
//! ```
//! use new_player::seeker::{Argb, ChapterSegment, SeekerModel};
//!
//! let model = SeekerModel::new(
//!     0.0..=60_000.0,
//!     Vec::new(),
//!     vec![ChapterSegment::new("Intro", 0.0, Argb::WHITE)],
//! )
//! .unwrap();
//! assert_eq!(model.thumb_pixel(30_000.0, 300.0), 150.0);
//! ```

pub mod drag;
pub mod mapping;
pub mod segments;

pub use drag::SeekerDrag;
pub use mapping::{pixel_to_value, value_to_pixel};
pub use segments::{Argb, ChapterMarker, ChapterSegment, Segment, SegmentSpan, SeekerModel};
