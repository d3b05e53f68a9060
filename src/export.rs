//! CSV export of parsed playlist entries.
//!
//! One row per video: `title, youtube_url, artist, genre, hint, start_time`.
//! Output is UTF-8 so titles and artists survive in any script.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::{QuizRow, VideoEntry};
use crate::parse;
use crate::progress::create_progress_bar;

/// Column order of the output file.
const CSV_HEADER: [&str; 6] = ["title", "youtube_url", "artist", "genre", "hint", "start_time"];

/// Build the output row for one video.
///
/// Fallback rules: an empty parsed song title falls back to the raw title;
/// an empty parsed artist falls back to the uploader when `use_uploader`
/// is set. `genre` and `hint` are left for manual fill-in.
pub fn build_row(video: &VideoEntry, use_uploader: bool) -> QuizRow {
    let parsed = parse::parse(&video.title);

    let title = if parsed.song_title.is_empty() {
        video.title.clone()
    } else {
        parsed.song_title
    };

    let artist = if !parsed.artist.is_empty() {
        parsed.artist
    } else if use_uploader {
        video.uploader.clone()
    } else {
        String::new()
    };

    QuizRow {
        title,
        youtube_url: video.url.clone(),
        artist,
        genre: String::new(),
        hint: String::new(),
        start_time: 0,
    }
}

/// Write the header and all rows. The header goes out before the loop, so
/// an empty playlist still produces a valid one-line CSV.
fn write_rows<W: Write>(
    writer: &mut csv::Writer<W>,
    videos: &[VideoEntry],
    use_uploader: bool,
) -> Result<usize> {
    writer
        .write_record(CSV_HEADER)
        .context("failed to write CSV header")?;

    let pb = create_progress_bar(videos.len() as u64, "Writing CSV");
    for video in videos {
        writer
            .serialize(build_row(video, use_uploader))
            .context("failed to write CSV row")?;
        pb.inc(1);
    }
    writer.flush().context("failed to flush CSV output")?;
    pb.finish_with_message(format!("Wrote {} rows", videos.len()));

    Ok(videos.len())
}

/// Write all videos to `output` and return the number of rows written.
pub fn write_csv(videos: &[VideoEntry], output: &Path, use_uploader: bool) -> Result<usize> {
    // Header is written by hand in write_rows; serialize must not add its own.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output)
        .with_context(|| format!("failed to create {}", output.display()))?;

    write_rows(&mut writer, videos, use_uploader)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(title: &str, uploader: &str) -> VideoEntry {
        VideoEntry {
            title: title.to_string(),
            url: "https://www.youtube.com/watch?v=abc123".to_string(),
            uploader: uploader.to_string(),
            duration_sec: 200.0,
        }
    }

    fn render(videos: &[VideoEntry], use_uploader: bool) -> String {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        write_rows(&mut writer, videos, use_uploader).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_parsed_fields_win() {
        let row = build_row(&video("IU - Love Poem", "1theK"), true);
        assert_eq!(row.title, "Love Poem");
        assert_eq!(row.artist, "IU");
        assert_eq!(row.genre, "");
        assert_eq!(row.hint, "");
        assert_eq!(row.start_time, 0);
    }

    #[test]
    fn test_raw_title_fallback() {
        // Noise-only titles parse to empty; the raw title is kept instead.
        let row = build_row(&video("[MV]", "1theK"), true);
        assert_eq!(row.title, "[MV]");
        assert_eq!(row.artist, "1theK");
    }

    #[test]
    fn test_uploader_fallback_disabled() {
        let row = build_row(&video("plain title", "1theK"), false);
        assert_eq!(row.title, "plain title");
        assert_eq!(row.artist, "");
    }

    #[test]
    fn test_empty_playlist_still_gets_header() {
        let text = render(&[], true);
        assert_eq!(text, "title,youtube_url,artist,genre,hint,start_time\n");
    }

    #[test]
    fn test_csv_header_and_unicode() {
        let text = render(&[video("아이유 - 밤편지", "")], true);
        assert!(text.starts_with("title,youtube_url,artist,genre,hint,start_time\n"));
        assert!(text.contains("밤편지"));
        assert!(text.contains("아이유"));
        assert_eq!(text.lines().count(), 2);
    }
}
