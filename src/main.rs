use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use quizlist::{export, fetch, progress};

#[derive(Parser)]
#[command(name = "quizlist")]
#[command(about = "Export a YouTube playlist to a music-quiz CSV")]
struct Args {
    /// Playlist (or single video) URL
    url: String,

    /// Output CSV path
    #[arg(short, long, default_value = "songs.csv")]
    output: PathBuf,

    /// Print each entry while fetching
    #[arg(short, long)]
    verbose: bool,

    /// Do not fall back to the uploader name when no artist is parsed
    #[arg(long)]
    no_uploader: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    progress::set_verbose(args.verbose);

    if !args.url.contains("youtube.com") && !args.url.contains("youtu.be") {
        eprintln!("Warning: this does not look like a YouTube URL");
    }

    let start = Instant::now();

    println!("Fetching playlist metadata: {}", args.url);
    let spinner = progress::create_spinner("Querying yt-dlp");
    let videos = fetch::fetch_playlist_entries(&args.url, args.verbose)?;
    spinner.finish_and_clear();

    if videos.is_empty() {
        bail!("no videos found in playlist");
    }
    println!("Found {} videos", videos.len());

    let rows = export::write_csv(&videos, &args.output, !args.no_uploader)?;

    println!("\n{:=<60}", "");
    println!("Export complete!");
    println!("  Rows: {}", rows);
    println!("  Output: {}", args.output.display());
    println!("  Elapsed: {:.2}s", start.elapsed().as_secs_f64());
    println!("{:=<60}", "");

    println!("\nReview the CSV and fill in:");
    println!("  - title: answer text accepted by the quiz");
    println!("  - artist: performer");
    println!("  - genre, hint: optional");
    println!("  - start_time: playback offset in seconds");

    Ok(())
}
