// SPDX-License-Identifier: MPL-2.0
//! Playlist and chapter types.
//!
//! The engine owns the playlist; these types are the read-only copies the
//! view-model keeps in its snapshots, plus the pure reorder and timing
//! helpers applied to them.

use serde::{Deserialize, Serialize};

/// Unique identifier of a media item inside a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MediaId(pub u64);

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Descriptive metadata shown in the stream selection list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaMetadata {
    pub title: String,
    pub creator: String,
    /// Item duration when the source provides it.
    pub duration_ms: Option<u64>,
    pub thumbnail_url: Option<String>,
}

/// One entry of the playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub media_id: MediaId,
    pub metadata: MediaMetadata,
}

impl PlaylistItem {
    #[must_use]
    pub fn new(media_id: u64, title: impl Into<String>, duration_ms: Option<u64>) -> Self {
        Self {
            media_id: MediaId(media_id),
            metadata: MediaMetadata {
                title: title.into(),
                duration_ms,
                ..MediaMetadata::default()
            },
        }
    }
}

/// Chapter of the current item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub start_ms: u64,
    pub thumbnail_url: Option<String>,
}

impl Chapter {
    #[must_use]
    pub fn new(title: impl Into<String>, start_ms: u64) -> Self {
        Self {
            title: title.into(),
            start_ms,
            thumbnail_url: None,
        }
    }
}

/// Moves the element at `from` so that it ends up at index `to`.
///
/// Returns `false` (and leaves `items` untouched) when either index is out
/// of bounds or both are equal.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Total duration of the playlist in whole seconds.
///
/// Items without a known duration count as zero.
#[must_use]
pub fn total_duration_s(items: &[PlaylistItem]) -> u64 {
    items
        .iter()
        .filter_map(|item| item.metadata.duration_ms)
        .sum::<u64>()
        / 1000
}

/// Position inside the whole playlist in whole seconds: the durations of
/// every item before `current_index` plus the position inside the current one.
#[must_use]
pub fn position_in_playlist_s(
    items: &[PlaylistItem],
    current_index: Option<usize>,
    position_ms: u64,
) -> u64 {
    let Some(index) = current_index.filter(|&index| index < items.len()) else {
        return 0;
    };
    let before: u64 = items[..index]
        .iter()
        .filter_map(|item| item.metadata.duration_ms)
        .sum();
    (before + position_ms) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist() -> Vec<PlaylistItem> {
        vec![
            PlaylistItem::new(1, "Intro", Some(30_000)),
            PlaylistItem::new(2, "Talk", Some(56_000)),
            PlaylistItem::new(3, "Live", None),
        ]
    }

    fn ids(items: &[PlaylistItem]) -> Vec<u64> {
        items.iter().map(|item| item.media_id.0).collect()
    }

    #[test]
    fn move_forward_and_back() {
        let mut items = playlist();
        assert!(move_item(&mut items, 0, 2));
        assert_eq!(ids(&items), vec![2, 3, 1]);

        assert!(move_item(&mut items, 2, 0));
        assert_eq!(ids(&items), vec![1, 2, 3]);
    }

    #[test]
    fn move_out_of_bounds_is_rejected() {
        let mut items = playlist();
        assert!(!move_item(&mut items, 3, 0));
        assert!(!move_item(&mut items, 0, 3));
        assert!(!move_item(&mut items, 1, 1));
        assert_eq!(ids(&items), vec![1, 2, 3]);
    }

    #[test]
    fn total_duration_ignores_unknown_items() {
        assert_eq!(total_duration_s(&playlist()), 86);
        assert_eq!(total_duration_s(&[]), 0);
    }

    #[test]
    fn position_adds_previous_items() {
        let items = playlist();
        assert_eq!(position_in_playlist_s(&items, Some(0), 12_500), 12);
        assert_eq!(position_in_playlist_s(&items, Some(1), 10_000), 40);
        assert_eq!(position_in_playlist_s(&items, Some(2), 1_000), 87);
    }

    #[test]
    fn position_without_current_item_is_zero() {
        let items = playlist();
        assert_eq!(position_in_playlist_s(&items, None, 5_000), 0);
        assert_eq!(position_in_playlist_s(&items, Some(9), 5_000), 0);
    }

    #[test]
    fn media_id_display() {
        assert_eq!(MediaId(42).to_string(), "#42");
    }
}
