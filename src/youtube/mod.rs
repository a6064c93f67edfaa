//! # YouTube Integration Module
//!
//! This module extracts playlist metadata and the track list from a public
//! YouTube playlist page. YouTube offers no public unauthenticated API for
//! playlists, so the extraction is plain HTML scraping of
//! `https://www.youtube.com/playlist?list={id}`.
//!
//! ## Extraction Strategy
//!
//! Two passes run over the fetched document:
//!
//! 1. **Selector pass** - playlist metadata comes from the OpenGraph `<meta>`
//!    tags (`og:title`, `og:description`, `og:image`); tracks come from the
//!    rendered `ytd-playlist-video-renderer` elements, taking the
//!    `#video-title` text as the track title and the `.ytd-channel-name`
//!    text as the artist.
//! 2. **JSON-blob fallback** - when the selector pass yields no tracks (the
//!    server-rendered markup changes regularly), the embedded
//!    `var ytInitialData = {...};` script is located, its JSON object parsed,
//!    and the `playlistVideoListRenderer` contents walked instead.
//!
//! Both passes apply the same filtering rules: entries titled
//! `[Deleted video]` or `[Private video]` are skipped, empty titles are
//! skipped, and a missing channel name becomes `Unknown Artist`.
//!
//! ## Fragility
//!
//! This is best-effort scraping of markup YouTube does not guarantee. The
//! parsing functions are pure (`&str` in, tracks out) so that fixture-based
//! tests can pin the behavior without network access.

mod scrape;

pub use scrape::ScrapeError;
pub use scrape::fetch_playlist_page;
pub use scrape::parse_playlist_meta;
pub use scrape::parse_tracks;
pub use scrape::scrape_playlist;
