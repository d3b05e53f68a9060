//! Playlist metadata retrieval via yt-dlp.
//!
//! Runs `yt-dlp -J --flat-playlist <url>` and decodes the single JSON dump
//! it prints. Only metadata is requested; nothing is downloaded. A dump
//! without an `entries` array is a single video and yields one record.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::process::Command;

use crate::models::VideoEntry;

/// Raw entry fields as yt-dlp emits them. Flat-playlist entries carry an
/// `id` but no `webpage_url`; single-video dumps are the reverse.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    webpage_url: Option<String>,
    #[serde(default)]
    uploader: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PlaylistDump {
    /// Null entries appear for deleted or private videos.
    #[serde(default)]
    entries: Option<Vec<Option<RawEntry>>>,
    #[serde(flatten)]
    head: RawEntry,
}

impl RawEntry {
    fn into_video(self) -> VideoEntry {
        let url = if let Some(webpage) = self.webpage_url {
            webpage
        } else if let Some(id) = self.id.filter(|id| !id.is_empty()) {
            format!("https://www.youtube.com/watch?v={id}")
        } else {
            self.url.unwrap_or_default()
        };

        VideoEntry {
            title: self.title.unwrap_or_default(),
            url,
            uploader: self.uploader.or(self.channel).unwrap_or_default(),
            duration_sec: self.duration.unwrap_or(0.0),
        }
    }
}

fn decode_dump(bytes: &[u8]) -> Result<Vec<VideoEntry>> {
    let dump: PlaylistDump =
        serde_json::from_slice(bytes).context("failed to decode yt-dlp output")?;

    let videos = match dump.entries {
        Some(entries) => entries
            .into_iter()
            .flatten()
            .map(RawEntry::into_video)
            .collect(),
        None => vec![dump.head.into_video()],
    };

    Ok(videos)
}

/// Fetch metadata for every video in a playlist (or a single video).
pub fn fetch_playlist_entries(url: &str, verbose: bool) -> Result<Vec<VideoEntry>> {
    let output = Command::new("yt-dlp")
        .args(["-J", "--flat-playlist", url])
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                anyhow!("yt-dlp not found; install it with `pip install yt-dlp`")
            }
            _ => anyhow::Error::new(e).context("failed to run yt-dlp"),
        })?;

    if !output.status.success() {
        bail!(
            "yt-dlp failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let videos = decode_dump(&output.stdout)?;

    if verbose {
        for (i, video) in videos.iter().enumerate() {
            let title = if video.title.is_empty() {
                "Unknown"
            } else {
                video.title.as_str()
            };
            eprintln!("  [{}/{}] {}", i + 1, videos.len(), title);
        }
    }

    Ok(videos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_playlist_dump() {
        let json = br#"{
            "title": "quiz songs",
            "entries": [
                {"id": "abc123", "title": "IU - Love Poem", "uploader": "1theK", "duration": 245.0},
                null,
                {"id": "", "url": "https://example.com/v", "title": "Song", "channel": "Some Channel", "duration": null}
            ]
        }"#;

        let videos = decode_dump(json).unwrap();
        assert_eq!(videos.len(), 2);

        assert_eq!(videos[0].title, "IU - Love Poem");
        assert_eq!(videos[0].url, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(videos[0].uploader, "1theK");
        assert_eq!(videos[0].duration_sec, 245.0);

        // Empty id falls back to the entry's own url; channel backs up uploader.
        assert_eq!(videos[1].url, "https://example.com/v");
        assert_eq!(videos[1].uploader, "Some Channel");
        assert_eq!(videos[1].duration_sec, 0.0);
    }

    #[test]
    fn test_decode_single_video_dump() {
        let json = br#"{
            "id": "xyz789",
            "title": "One Video",
            "webpage_url": "https://www.youtube.com/watch?v=xyz789",
            "uploader": "Channel",
            "duration": 180.0
        }"#;

        let videos = decode_dump(json).unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "One Video");
        assert_eq!(videos[0].url, "https://www.youtube.com/watch?v=xyz789");
        assert_eq!(videos[0].uploader, "Channel");
    }

    #[test]
    fn test_decode_missing_fields() {
        let videos = decode_dump(br#"{"entries": [{}]}"#).unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "");
        assert_eq!(videos[0].url, "");
        assert_eq!(videos[0].uploader, "");
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_dump(b"not json").is_err());
    }
}
