//! Playlist-to-CSV exporter for building music-quiz datasets.

pub mod export;
pub mod fetch;
pub mod models;
pub mod parse;
pub mod progress;
