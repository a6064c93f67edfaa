use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Metadata scraped from a YouTube playlist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubePlaylist {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub track_count: usize,
}

/// A single video entry scraped from a YouTube playlist page. The channel
/// name stands in for the artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedTrack {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracks {
    pub items: Vec<SpotifyTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyTrack {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

/// A scraped track together with the Spotify track it resolved to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedTrack {
    pub source: ScrapedTrack,
    pub track: SpotifyTrack,
}

/// The persisted outcome of one conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub playlist: YouTubePlaylist,
    pub spotify_playlist_id: String,
    pub spotify_playlist_url: String,
    pub matched: Vec<MatchedTrack>,
    pub unmatched: Vec<ScrapedTrack>,
    pub converted_at: String,
}

#[derive(Tabled)]
pub struct ScrapedTrackRow {
    pub position: usize,
    pub title: String,
    pub artist: String,
}

#[derive(Tabled)]
pub struct MatchedTrackRow {
    pub title: String,
    pub artist: String,
    pub spotify_track: String,
}

#[derive(Tabled)]
pub struct UnmatchedTrackRow {
    pub title: String,
    pub artist: String,
}

#[derive(Tabled)]
pub struct ConversionRow {
    pub converted_at: String,
    pub playlist: String,
    pub matched: usize,
    pub unmatched: usize,
    pub url: String,
}
