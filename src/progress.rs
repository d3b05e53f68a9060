//! Terminal progress reporting for the fetch and export phases.
//!
//! Verbose mode prints one line per playlist entry, which redraws would
//! garble, so every bar and spinner hides itself when verbose is on.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Record the CLI verbose flag; called once from main before any bar exists.
pub fn set_verbose(value: bool) {
    VERBOSE.store(value, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Row-counting bar for the CSV writing phase.
pub fn create_progress_bar(len: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_message(msg.to_string());
    if is_verbose() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
        return pb;
    }
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:30}] {pos}/{len} rows ({elapsed})")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

/// Spinner shown while yt-dlp runs; its runtime is unknown up front.
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(msg.to_string());
    if is_verbose() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
        return pb;
    }
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg} ({elapsed})")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
