use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::{ConversionManager, TokenManager},
    spotify, success,
    types::{ConversionReport, MatchedTrack, ScrapedTrack, UnmatchedTrackRow},
    utils, warning, youtube,
};

// The original web UI created every playlist under this fixed name.
const DEFAULT_PLAYLIST_NAME: &str = "Imported YouTube Playlist";
const PLAYLIST_DESCRIPTION: &str = "Converted from YouTube using PlaylistPort";

pub async fn convert(url: String, name: Option<String>) {
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
    success!("Found {} tracks in \"{}\"", tracks.len(), playlist.title);

    if tracks.is_empty() {
        warning!("Playlist has no convertible tracks, nothing to do.");
        return;
    }

    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run plportcli auth\n Error: {}",
                e
            );
        }
    };

    let token = token_mgr.get_valid_token().await;
    let me = match spotify::user::get_current_user(&token).await {
        Ok(profile) => profile,
        Err(e) => error!("Failed to fetch Spotify profile: {}", e),
    };

    let playlist_name = name.unwrap_or_else(|| DEFAULT_PLAYLIST_NAME.to_string());
    info!(
        "Creating private playlist \"{playlist_name}\" for {user}",
        playlist_name = playlist_name,
        user = me.display_name.clone().unwrap_or_else(|| me.id.clone())
    );

    let created = match spotify::playlist::create(
        &me.id,
        playlist_name,
        PLAYLIST_DESCRIPTION.to_string(),
    )
    .await
    {
        Ok(resp) => resp,
        Err(e) => error!("Failed to create Spotify playlist: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut matched: Vec<MatchedTrack> = Vec::new();
    let mut unmatched: Vec<ScrapedTrack> = Vec::new();
    let tracks_total = tracks.len();

    for (position, track) in tracks.iter().enumerate() {
        let token = token_mgr.get_valid_token().await;
        let query = utils::build_search_query(track);
        pb.set_message(format!(
            "Searching \"{title}\" ({position}/{tracks_total})",
            title = track.title,
            position = position + 1,
            tracks_total = tracks_total
        ));

        match spotify::search::search_track(&query, &token).await {
            Ok(Some(hit)) => matched.push(MatchedTrack {
                source: track.clone(),
                track: hit,
            }),
            Ok(None) => unmatched.push(track.clone()),
            Err(e) => {
                pb.finish_and_clear();
                error!("Track search failed: {}", e);
            }
        }
    }

    pb.finish_and_clear();
    success!("Matched {}/{} tracks on Spotify", matched.len(), tracks_total);

    let mut track_uris: Vec<String> = matched.iter().map(|m| m.track.uri.clone()).collect();
    utils::remove_duplicate_uris(&mut track_uris);

    // add tracks in batches of 100 (Spotify API limit)
    for chunk in track_uris.chunks(100) {
        if let Err(e) = spotify::playlist::add_tracks(created.id.clone(), chunk.to_vec()).await {
            error!("Failed to add tracks to playlist: {}", e);
        }
    }

    let report = ConversionReport {
        playlist,
        spotify_playlist_id: created.id.clone(),
        spotify_playlist_url: created.external_urls.spotify.clone(),
        matched,
        unmatched: unmatched.clone(),
        converted_at: Utc::now().to_rfc3339(),
    };

    let mut conversion_mgr = ConversionManager::load()
        .await
        .unwrap_or_else(|_| ConversionManager::new(None));
    if let Err(e) = conversion_mgr.add_report(report).persist().await {
        warning!("Cannot cache conversion report. Err: {:?}", e);
    }

    success!("Playlist created: {}", created.external_urls.spotify);

    if !unmatched.is_empty() {
        warning!("{} tracks had no match:", unmatched.len());
        let unmatched_rows: Vec<UnmatchedTrackRow> = unmatched
            .into_iter()
            .map(|track| UnmatchedTrackRow {
                title: track.title,
                artist: track.artist,
            })
            .collect();

        let table = Table::new(unmatched_rows);
        println!("{}", table);
    }
}
