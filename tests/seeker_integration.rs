// SPDX-License-Identifier: MPL-2.0
use new_player::domain::playlist::Chapter;
use new_player::error::SeekerError;
use new_player::seeker::{Argb, ChapterSegment, Segment, SeekerDrag, SeekerModel};

const SPONSOR: Argb = Argb(0xFF00_D400);

fn chapter_segments(chapters: &[Chapter]) -> Vec<ChapterSegment> {
    chapters
        .iter()
        .map(|chapter| ChapterSegment::new(chapter.title.clone(), chapter.start_ms as f32, Argb::WHITE))
        .collect()
}

#[test]
fn test_engine_chapters_become_markers() {
    let chapters = vec![
        Chapter::new("Intro", 0),
        Chapter::new("Interview", 14_000),
        Chapter::new("Outro", 42_000),
    ];
    let model = SeekerModel::new(
        0.0..=56_000.0,
        vec![Segment::new("sponsor", 14_000.0, 28_000.0, SPONSOR)],
        chapter_segments(&chapters),
    )
    .expect("chapters lie within the item");

    let markers: Vec<f32> = model.chapter_markers(560.0).iter().map(|m| m.px).collect();
    assert_eq!(markers, vec![0.0, 140.0, 420.0]);

    let spans = model.segment_spans(560.0);
    assert_eq!((spans[0].start_px, spans[0].end_px), (140.0, 280.0));
    assert_eq!(model.chapter_at(30_000.0).map(|c| c.name.as_str()), Some("Interview"));
}

#[test]
fn test_chapter_past_duration_is_rejected() {
    let chapters = vec![Chapter::new("Bonus", 60_000)];
    let result = SeekerModel::new(0.0..=56_000.0, Vec::new(), chapter_segments(&chapters));
    assert!(matches!(result, Err(SeekerError::ChapterOutOfRange { .. })));
}

#[test]
fn test_drag_produces_seek_fractions() {
    let model = SeekerModel::plain(0.0..=1.0).expect("unit range");
    let width = 400.0;
    let mut drag = SeekerDrag::default();
    drag.start_at_value(0.25, width, model.range());

    let mut last = None;
    for _ in 0..10 {
        last = drag.drag_by(10.0, width, model.range());
    }
    let value = last.expect("dragging");
    assert!((value - 0.5).abs() < 1e-6, "{value}");
    assert!((model.thumb_pixel(value, width) - 200.0).abs() < 1e-3);

    drag.stop();
    assert!(drag.drag_by(10.0, width, model.range()).is_none());
}
