use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};
use url::Url;

use crate::types::ScrapedTrack;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Extracts the playlist ID (the `list` query parameter) from a YouTube
/// playlist or watch URL.
pub fn playlist_id_from_url(url: &str) -> Result<String, String> {
    let parsed = Url::parse(url).map_err(|_| format!("Invalid YouTube playlist URL: {}", url))?;

    let playlist_id = parsed
        .query_pairs()
        .find(|(key, _)| key == "list")
        .map(|(_, value)| value.to_string());

    match playlist_id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(format!("Invalid YouTube playlist URL: {}", url)),
    }
}

/// Builds the free-text Spotify search query for a scraped track. The query
/// is the video title followed by the channel name, matching what a user
/// would type into the search box.
pub fn build_search_query(track: &ScrapedTrack) -> String {
    format!("{} {}", track.title, track.artist)
        .trim()
        .to_string()
}

pub fn remove_duplicate_uris(uris: &mut Vec<String>) {
    let mut seen = HashSet::new();
    uris.retain(|uri| seen.insert(uri.clone()));
}
