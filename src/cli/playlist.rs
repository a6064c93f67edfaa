use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{error, info, types::ScrapedTrackRow, youtube};

pub async fn playlist(url: String) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Scraping YouTube playlist...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let (playlist, tracks) = match youtube::scrape_playlist(&url).await {
        Ok(scraped) => scraped,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch YouTube playlist: {}", e);
        }
    };

    pb.finish_and_clear();

    info!("Playlist: {}", playlist.title);
    info!("Playlist ID: {}", playlist.id);
    if !playlist.description.is_empty() {
        info!("Description: {}", playlist.description);
    }
    info!("Tracks: {}", playlist.track_count);

    if tracks.is_empty() {
        return;
    }

    let track_rows: Vec<ScrapedTrackRow> = tracks
        .into_iter()
        .enumerate()
        .map(|(position, track)| ScrapedTrackRow {
            position: position + 1,
            title: track.title,
            artist: track.artist,
        })
        .collect();

    let table = Table::new(track_rows);
    println!("{}", table);
}
