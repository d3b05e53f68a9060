//! Title-parsing heuristic: segment a noisy video title into a cleaned
//! song title and an artist name.
//!
//! Uploaders format titles inconsistently ("Artist - Song", "[MV] Artist
//! 'Song'", "Song | Artist (Official Video)"), so this is a best-effort
//! split, not a guaranteed-correct parse. The hyphen and pipe rules assume
//! the artist comes first; callers accept that some inputs reverse this.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ParsedTitle;

// ============================================================================
// NOISE TAG CATALOG
// ============================================================================

/// Canonical decorative tags stripped before any splitting.
/// Each fragment is matched inside `[...]` and `(...)`, case-insensitively,
/// tolerating internal whitespace. Extend the catalog here; the control flow
/// never changes.
const NOISE_TAGS: &[&str] = &[
    r"M\s*/?\s*V",                         // [MV], (M/V)
    r"Official(?:\s*Music)?(?:\s*Video)?", // (Official), [Official Music Video]
    r"Official\s*Audio",
    r"Official\s*Lyric\s*Video",
    r"Lyrics?",
    r"가사",
    r"Audio",
    r"Live",
    r"HD",
    r"4K",
];

static NOISE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    NOISE_TAGS
        .iter()
        .flat_map(|tag| {
            // One regex per bracket form; "[MV)" and other mismatched pairs
            // must pass through untouched.
            [
                Regex::new(&format!(r"(?i)\[\s*{tag}\s*\]")).unwrap(),
                Regex::new(&format!(r"(?i)\(\s*{tag}\s*\)")).unwrap(),
            ]
        })
        .collect()
});

/// Quote-delimited song title: "Artist 'Song'", "Artist ‘Song’", "Artist 「Song」".
static QUOTED_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*['‘’「](.+?)['‘’」]").unwrap());

/// Trailing parenthesized group, e.g. "(Remix)" at end of string.
static TRAILING_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(([^)]*)\)\s*$").unwrap());

// ============================================================================
// SEPARATOR RULES
// ============================================================================

/// Separator rules tried in order; the first match wins and is used
/// exclusively. Each returns (artist, song_title).
const SPLIT_RULES: &[fn(&str) -> Option<(String, String)>] =
    &[split_on_hyphen, split_on_pipe, split_on_quotes];

fn split_on_hyphen(title: &str) -> Option<(String, String)> {
    title
        .split_once(" - ")
        .map(|(artist, song)| (artist.trim().to_string(), song.trim().to_string()))
}

fn split_on_pipe(title: &str) -> Option<(String, String)> {
    title
        .split_once(" | ")
        .map(|(artist, song)| (artist.trim().to_string(), song.trim().to_string()))
}

fn split_on_quotes(title: &str) -> Option<(String, String)> {
    QUOTED_TITLE
        .captures(title)
        .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
}

// ============================================================================
// PARSER
// ============================================================================

/// Strip the decorative-tag catalog, then collapse whitespace runs and trim.
fn strip_noise_tags(title: &str) -> String {
    let mut result = title.to_string();
    for pattern in NOISE_PATTERNS.iter() {
        result = pattern.replace_all(&result, "").to_string();
    }
    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove one trailing parenthesized group unless it is a featuring credit.
/// "Attention (feat. Quavo)" keeps its group; "Dynamite (Remix)" loses it.
fn strip_trailing_qualifier(song_title: &str) -> String {
    if let Some(caps) = TRAILING_PAREN.captures(song_title) {
        let content = caps[1].to_lowercase();
        if !content.contains("feat.") && !content.contains("featuring") {
            return TRAILING_PAREN.replace(song_title, "").to_string();
        }
    }
    song_title.to_string()
}

/// Parse a raw video title into (song title, artist).
///
/// Total over all inputs: any string, including the empty string, produces
/// a `ParsedTitle`. Absence of a recognized separator is not an error; it
/// yields an empty artist and the normalized title as the song title.
pub fn parse(raw_title: &str) -> ParsedTitle {
    let clean = strip_noise_tags(raw_title);

    let (artist, song_title) = SPLIT_RULES
        .iter()
        .find_map(|rule| rule(&clean))
        .unwrap_or_else(|| (String::new(), clean.clone()));

    let song_title = strip_trailing_qualifier(&song_title);

    ParsedTitle {
        song_title: song_title.trim().to_string(),
        artist: artist.trim().to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
