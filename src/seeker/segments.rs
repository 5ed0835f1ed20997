// SPDX-License-Identifier: MPL-2.0
//! Seek bar model: value range, highlighted segments and chapter markers.
//!
//! Everything placed on the bar is validated against the range once, when
//! the [`SeekerModel`] is built. Drawing code then only asks for pixel
//! offsets and can assume every marker lies on the track.

use super::mapping::{pixel_to_value, value_to_pixel};
use crate::error::SeekerError;
use std::ops::RangeInclusive;

/// Packed `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const WHITE: Self = Self(0xFFFF_FFFF);
}

/// Highlighted span of the bar, e.g. a sponsor or intro section.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: String,
    pub start: f32,
    pub end: f32,
    pub color: Argb,
}

impl Segment {
    #[must_use]
    pub fn new(name: impl Into<String>, start: f32, end: f32, color: Argb) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            color,
        }
    }
}

/// Chapter marker drawn as a gap or tick on the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterSegment {
    pub name: String,
    pub start: f32,
    pub color: Argb,
}

impl ChapterSegment {
    #[must_use]
    pub fn new(name: impl Into<String>, start: f32, color: Argb) -> Self {
        Self {
            name: name.into(),
            start,
            color,
        }
    }
}

/// A segment with its pixel extent on a track of a given width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpan<'a> {
    pub segment: &'a Segment,
    pub start_px: f32,
    pub end_px: f32,
}

/// A chapter with its pixel offset on a track of a given width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChapterMarker<'a> {
    pub chapter: &'a ChapterSegment,
    pub px: f32,
}

/// Validated seek bar content.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekerModel {
    range: RangeInclusive<f32>,
    segments: Vec<Segment>,
    chapters: Vec<ChapterSegment>,
}

impl SeekerModel {
    /// Builds a model, checking every segment and chapter against `range`.
    ///
    /// Chapters are kept sorted by start.
    ///
    /// # Errors
    ///
    /// Returns a [`SeekerError`] if the range is empty or not finite, if a
    /// segment ends before it starts, or if any boundary lies outside the
    /// range.
    pub fn new(
        range: RangeInclusive<f32>,
        segments: Vec<Segment>,
        mut chapters: Vec<ChapterSegment>,
    ) -> Result<Self, SeekerError> {
        let (range_start, range_end) = (*range.start(), *range.end());
        if !range_start.is_finite() || !range_end.is_finite() || range_start >= range_end {
            return Err(SeekerError::InvalidRange {
                start: range_start,
                end: range_end,
            });
        }

        for segment in &segments {
            if segment.end < segment.start {
                return Err(SeekerError::InvertedSegment {
                    name: segment.name.clone(),
                    start: segment.start,
                    end: segment.end,
                });
            }
            if !range.contains(&segment.start) || !range.contains(&segment.end) {
                return Err(SeekerError::SegmentOutOfRange {
                    name: segment.name.clone(),
                    start: segment.start,
                    end: segment.end,
                    range_start,
                    range_end,
                });
            }
        }

        if let Some(chapter) = chapters.iter().find(|c| !range.contains(&c.start)) {
            return Err(SeekerError::ChapterOutOfRange {
                name: chapter.name.clone(),
                start: chapter.start,
                range_start,
                range_end,
            });
        }
        chapters.sort_by(|a, b| a.start.total_cmp(&b.start));

        Ok(Self {
            range,
            segments,
            chapters,
        })
    }

    /// Model with a range and nothing placed on it.
    ///
    /// # Errors
    ///
    /// Returns [`SeekerError::InvalidRange`] for an empty or non-finite range.
    pub fn plain(range: RangeInclusive<f32>) -> Result<Self, SeekerError> {
        Self::new(range, Vec::new(), Vec::new())
    }

    #[must_use]
    pub fn range(&self) -> &RangeInclusive<f32> {
        &self.range
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn chapters(&self) -> &[ChapterSegment] {
        &self.chapters
    }

    /// Pixel extents of every segment.
    #[must_use]
    pub fn segment_spans(&self, width_px: f32) -> Vec<SegmentSpan<'_>> {
        self.segments
            .iter()
            .map(|segment| SegmentSpan {
                segment,
                start_px: value_to_pixel(segment.start, width_px, &self.range),
                end_px: value_to_pixel(segment.end, width_px, &self.range),
            })
            .collect()
    }

    /// Pixel offsets of every chapter, in start order.
    #[must_use]
    pub fn chapter_markers(&self, width_px: f32) -> Vec<ChapterMarker<'_>> {
        self.chapters
            .iter()
            .map(|chapter| ChapterMarker {
                chapter,
                px: value_to_pixel(chapter.start, width_px, &self.range),
            })
            .collect()
    }

    /// Pixel offset of the thumb for `value`.
    #[must_use]
    pub fn thumb_pixel(&self, value: f32, width_px: f32) -> f32 {
        value_to_pixel(value, width_px, &self.range)
    }

    /// End of the buffered indicator for a buffered share in 0.0–1.0.
    #[must_use]
    pub fn buffered_pixel(&self, buffered: f32, width_px: f32) -> f32 {
        if buffered.is_nan() || !(width_px > 0.0) {
            return 0.0;
        }
        buffered.clamp(0.0, 1.0) * width_px
    }

    /// Value under a touch at `px`.
    #[must_use]
    pub fn value_at(&self, px: f32, width_px: f32) -> f32 {
        pixel_to_value(px, width_px, &self.range)
    }

    /// First segment containing `value`.
    #[must_use]
    pub fn segment_at(&self, value: f32) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|segment| segment.start <= value && value <= segment.end)
    }

    /// Chapter playing at `value`: the last one starting at or before it.
    #[must_use]
    pub fn chapter_at(&self, value: f32) -> Option<&ChapterSegment> {
        self.chapters
            .iter()
            .take_while(|chapter| chapter.start <= value)
            .last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const RED: Argb = Argb(0xFFFF_0000);

    fn model() -> SeekerModel {
        SeekerModel::new(
            0.0..=100.0,
            vec![Segment::new("intro", 0.0, 10.0, RED)],
            vec![
                ChapterSegment::new("second", 50.0, Argb::WHITE),
                ChapterSegment::new("first", 0.0, Argb::WHITE),
            ],
        )
        .expect("valid model")
    }

    #[test]
    fn chapters_are_sorted_on_construction() {
        let model = model();
        let names: Vec<&str> = model.chapters().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn segment_outside_range_fails() {
        let err = SeekerModel::new(
            0.0..=100.0,
            vec![Segment::new("outro", 90.0, 120.0, RED)],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, SeekerError::SegmentOutOfRange { ref name, .. } if name == "outro"));
    }

    #[test]
    fn inverted_segment_fails() {
        let err = SeekerModel::new(
            0.0..=100.0,
            vec![Segment::new("backwards", 40.0, 20.0, RED)],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, SeekerError::InvertedSegment { .. }));
    }

    #[test]
    fn chapter_outside_range_fails() {
        let err = SeekerModel::new(
            0.0..=100.0,
            Vec::new(),
            vec![ChapterSegment::new("late", 100.5, Argb::WHITE)],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "chapter 'late' at 100.5 is outside of 0..=100"
        );
    }

    #[test]
    fn empty_or_inverted_range_fails() {
        assert!(matches!(
            SeekerModel::plain(5.0..=5.0),
            Err(SeekerError::InvalidRange { .. })
        ));
        assert!(matches!(
            SeekerModel::plain(5.0..=1.0),
            Err(SeekerError::InvalidRange { .. })
        ));
        assert!(SeekerModel::plain(0.0..=f32::INFINITY).is_err());
    }

    #[test]
    fn boundaries_on_range_edges_are_accepted() {
        let model = SeekerModel::new(
            0.0..=1.0,
            vec![Segment::new("all", 0.0, 1.0, RED)],
            vec![ChapterSegment::new("end", 1.0, Argb::WHITE)],
        );
        assert!(model.is_ok());
    }

    #[test]
    fn spans_and_markers_are_placed_on_track() {
        let model = model();
        let spans = model.segment_spans(200.0);
        assert_eq!(spans.len(), 1);
        assert_abs_diff_eq!(spans[0].start_px, 0.0);
        assert_abs_diff_eq!(spans[0].end_px, 20.0);

        let markers = model.chapter_markers(200.0);
        assert_abs_diff_eq!(markers[1].px, 100.0);
        assert_eq!(markers[1].chapter.name, "second");
    }

    #[test]
    fn thumb_and_buffer_positions() {
        let model = model();
        assert_abs_diff_eq!(model.thumb_pixel(75.0, 200.0), 150.0);
        assert_abs_diff_eq!(model.buffered_pixel(0.5, 200.0), 100.0);
        assert_abs_diff_eq!(model.buffered_pixel(1.5, 200.0), 200.0);
        assert_abs_diff_eq!(model.value_at(50.0, 200.0), 25.0);
    }

    #[test]
    fn lookup_by_value() {
        let model = model();
        assert_eq!(model.segment_at(5.0).map(|s| s.name.as_str()), Some("intro"));
        assert!(model.segment_at(30.0).is_none());
        assert_eq!(model.chapter_at(49.9).map(|c| c.name.as_str()), Some("first"));
        assert_eq!(model.chapter_at(50.0).map(|c| c.name.as_str()), Some("second"));
    }
}
