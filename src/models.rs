//! Core data models for playlist extraction and CSV export.

use serde::Serialize;

/// One video entry as returned by the playlist metadata dump.
/// `title` and `uploader` may be empty; `duration_sec` defaults to 0.
#[derive(Clone, Debug)]
pub struct VideoEntry {
    pub title: String,
    pub url: String,
    pub uploader: String,
    pub duration_sec: f64,
}

/// Result of the title-parsing heuristic.
/// `artist` is empty when no separator pattern matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedTitle {
    pub song_title: String,
    pub artist: String,
}

/// One output row. `genre` and `hint` stay blank for manual fill-in;
/// `start_time` is the playback offset in seconds and defaults to 0.
#[derive(Clone, Debug, Serialize)]
pub struct QuizRow {
    pub title: String,
    pub youtube_url: String,
    pub artist: String,
    pub genre: String,
    pub hint: String,
    pub start_time: u32,
}
