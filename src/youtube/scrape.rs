use std::fmt;

use reqwest::Client;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::{
    config,
    types::{ScrapedTrack, YouTubePlaylist},
    utils,
};

// YouTube serves a stripped-down document to unknown clients; a desktop
// browser user agent gets the full playlist markup.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const INITIAL_DATA_MARKER: &str = "var ytInitialData = ";

#[derive(Debug)]
pub enum ScrapeError {
    InvalidUrl(String),
    Http(reqwest::Error),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Http(err)
    }
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::InvalidUrl(msg) => write!(f, "{}", msg),
            ScrapeError::Http(err) => write!(f, "Failed to fetch playlist page: {}", err),
        }
    }
}

impl std::error::Error for ScrapeError {}

/// Scrapes a YouTube playlist URL into playlist metadata and its track list.
///
/// Extracts the playlist ID from the URL, fetches the playlist page once and
/// runs both extraction passes over it. The returned `track_count` reflects
/// the tracks that survived filtering, not the raw video count.
///
/// # Errors
///
/// - `ScrapeError::InvalidUrl` - the URL carries no `list` parameter
/// - `ScrapeError::Http` - the playlist page could not be fetched
pub async fn scrape_playlist(
    url: &str,
) -> Result<(YouTubePlaylist, Vec<ScrapedTrack>), ScrapeError> {
    let playlist_id = utils::playlist_id_from_url(url).map_err(ScrapeError::InvalidUrl)?;
    let html = fetch_playlist_page(&playlist_id).await?;

    let tracks = parse_tracks(&html);
    let mut playlist = parse_playlist_meta(&html, &playlist_id);
    playlist.track_count = tracks.len();

    Ok((playlist, tracks))
}

/// Fetches the raw HTML of a playlist page by playlist ID.
pub async fn fetch_playlist_page(playlist_id: &str) -> Result<String, ScrapeError> {
    let client = Client::new();
    let page_url = format!(
        "{base}/playlist?list={id}",
        base = config::youtube_base_url(),
        id = playlist_id
    );

    let response = client
        .get(&page_url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.text().await?)
}

/// Extracts playlist metadata from the OpenGraph meta tags of a playlist page.
///
/// Missing tags fall back to the original defaults: "Unknown Playlist" for
/// the title, empty strings for description and thumbnail. `track_count` is
/// left at zero; the caller fills it in from the parsed track list.
pub fn parse_playlist_meta(html: &str, playlist_id: &str) -> YouTubePlaylist {
    let document = Html::parse_document(html);

    YouTubePlaylist {
        id: playlist_id.to_string(),
        title: meta_content(&document, "og:title").unwrap_or_else(|| "Unknown Playlist".to_string()),
        description: meta_content(&document, "og:description").unwrap_or_default(),
        thumbnail_url: meta_content(&document, "og:image").unwrap_or_default(),
        track_count: 0,
    }
}

/// Extracts the track list from a playlist page.
///
/// Runs the CSS-selector pass over the rendered video elements first and
/// falls back to the embedded `ytInitialData` JSON blob when that pass
/// yields nothing.
pub fn parse_tracks(html: &str) -> Vec<ScrapedTrack> {
    let document = Html::parse_document(html);
    let tracks = tracks_from_renderers(&document);
    if !tracks.is_empty() {
        return tracks;
    }

    tracks_from_initial_data(&document)
}

fn meta_content(document: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!("meta[property=\"{}\"]", property)).unwrap();
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.to_string())
        .filter(|content| !content.is_empty())
}

fn tracks_from_renderers(document: &Html) -> Vec<ScrapedTrack> {
    let video_selector = Selector::parse("ytd-playlist-video-renderer").unwrap();
    let title_selector = Selector::parse("#video-title").unwrap();
    let channel_selector = Selector::parse(".ytd-channel-name").unwrap();

    let mut tracks = Vec::new();
    for element in document.select(&video_selector) {
        let title = element
            .select(&title_selector)
            .next()
            .map(|e| e.text().collect::<Vec<_>>().join(" "))
            .unwrap_or_default();

        let artist = element
            .select(&channel_selector)
            .next()
            .map(|e| e.text().collect::<Vec<_>>().join(" "))
            .unwrap_or_default();

        push_track(&mut tracks, title, artist);
    }

    tracks
}

fn tracks_from_initial_data(document: &Html) -> Vec<ScrapedTrack> {
    let Some(data) = extract_initial_data(document) else {
        return Vec::new();
    };

    let contents = &data["contents"]["twoColumnBrowseResultsRenderer"]["tabs"][0]["tabRenderer"]
        ["content"]["sectionListRenderer"]["contents"][0]["itemSectionRenderer"]["contents"][0]
        ["playlistVideoListRenderer"]["contents"];

    let Some(entries) = contents.as_array() else {
        return Vec::new();
    };

    let mut tracks = Vec::new();
    for entry in entries {
        let renderer = &entry["playlistVideoRenderer"];
        if renderer.is_null() {
            continue;
        }

        let title = renderer["title"]["runs"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        let artist = renderer["shortBylineText"]["runs"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        push_track(&mut tracks, title, artist);
    }

    tracks
}

// Pulls the JSON object out of the `var ytInitialData = {...};` script.
fn extract_initial_data(document: &Html) -> Option<Value> {
    let script_selector = Selector::parse("script").unwrap();
    let script = document
        .select(&script_selector)
        .map(|element| element.inner_html())
        .find(|body| body.contains(INITIAL_DATA_MARKER))?;

    let start = script.find(INITIAL_DATA_MARKER)? + INITIAL_DATA_MARKER.len();
    let end = script.rfind('}')?;
    if end < start {
        return None;
    }

    serde_json::from_str(&script[start..=end]).ok()
}

fn push_track(tracks: &mut Vec<ScrapedTrack>, title: String, artist: String) {
    let title = title.trim().to_string();
    if title.is_empty() || title == "[Deleted video]" || title == "[Private video]" {
        return;
    }

    let artist = artist.trim().to_string();
    let artist = if artist.is_empty() {
        "Unknown Artist".to_string()
    } else {
        artist
    };

    tracks.push(ScrapedTrack { title, artist });
}
