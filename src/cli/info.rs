use tabled::Table;

use crate::{
    info,
    management::ConversionManager,
    types::{ConversionRow, MatchedTrackRow, UnmatchedTrackRow},
    warning,
};

/// Displays cached conversion history.
///
/// With `--conversions` a summary table of all cached runs is printed.
/// With `--playlist-id <id>` the latest cached report for that YouTube
/// playlist is shown in full, as matched and unmatched track tables.
pub async fn info(conversions: bool, playlist_id: Option<String>) {
    if conversions {
        let conversion_mgr = match ConversionManager::load().await {
            Ok(manager) => manager,
            Err(e) => {
                warning!("No cached conversions found. Err: {:?}", e);
                return;
            }
        };

        let reports = conversion_mgr.all().unwrap_or_default();
        if reports.is_empty() {
            info!("No conversions cached yet.");
            return;
        }

        let rows: Vec<ConversionRow> = reports
            .into_iter()
            .map(|report| ConversionRow {
                converted_at: report.converted_at,
                playlist: report.playlist.title,
                matched: report.matched.len(),
                unmatched: report.unmatched.len(),
                url: report.spotify_playlist_url,
            })
            .collect();

        let table = Table::new(rows);
        println!("{}", table);
        return;
    }

    if let Some(playlist_id) = playlist_id {
        let conversion_mgr = match ConversionManager::load().await {
            Ok(manager) => manager,
            Err(e) => {
                warning!("No cached conversions found. Err: {:?}", e);
                return;
            }
        };

        let Some(report) = conversion_mgr.find_by_playlist(&playlist_id) else {
            warning!("No cached conversion for playlist {}.", playlist_id);
            return;
        };

        info!("Playlist: {}", report.playlist.title);
        info!("Converted at: {}", report.converted_at);
        info!("Spotify playlist: {}", report.spotify_playlist_url);
        info!(
            "Matched {} of {} tracks",
            report.matched.len(),
            report.matched.len() + report.unmatched.len()
        );

        if !report.matched.is_empty() {
            let matched_rows: Vec<MatchedTrackRow> = report
                .matched
                .into_iter()
                .map(|m| MatchedTrackRow {
                    title: m.source.title,
                    artist: m.source.artist,
                    spotify_track: format!(
                        "{} ({})",
                        m.track.name,
                        m.track
                            .artists
                            .iter()
                            .map(|a| a.name.clone())
                            .collect::<Vec<String>>()
                            .join(", ")
                    ),
                })
                .collect();

            println!("{}", Table::new(matched_rows));
        }

        if !report.unmatched.is_empty() {
            warning!("{} tracks had no match:", report.unmatched.len());
            let unmatched_rows: Vec<UnmatchedTrackRow> = report
                .unmatched
                .into_iter()
                .map(|track| UnmatchedTrackRow {
                    title: track.title,
                    artist: track.artist,
                })
                .collect();

            println!("{}", Table::new(unmatched_rows));
        }
    }
}
