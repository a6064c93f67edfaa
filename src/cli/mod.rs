//! # CLI Module
//!
//! This module provides the command-line interface layer for the converter.
//! It implements all user-facing commands and coordinates between the
//! YouTube scraper, the Spotify integration, and the persistence layer.
//!
//! ## Commands
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!   security.
//! - [`playlist`] - Scrapes a YouTube playlist and displays its metadata and
//!   track table without touching Spotify. Useful for checking what a
//!   conversion would work with.
//! - [`convert`] - The full pipeline: scrape the YouTube playlist, search
//!   the Spotify catalog per track, create a private playlist, insert the
//!   matched tracks in batches, and cache the conversion report.
//! - [`info`] - Queries the cached conversion history, either as a summary
//!   table or as a detailed matched/unmatched report for one playlist.
//!
//! ## Design
//!
//! Each command delegates to the `youtube`, `spotify`, and `management`
//! modules while handling user interaction, progress feedback, and error
//! presentation:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Token/History Persistence)
//!     ↓
//! Integration Layer (YouTube Scraping, Spotify API)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! - **Graceful degradation**: a track without a Spotify match is recorded
//!   and reported, never fatal.
//! - **Hard failures stop early**: scraping failures, missing tokens, and
//!   playlist-creation failures terminate with a clear message and a
//!   recovery hint (usually `plportcli auth`).
//! - Long-running operations show progress spinners; results are rendered
//!   as tables.

mod auth;
mod convert;
mod info;
mod playlist;

pub use auth::auth;
pub use convert::convert;
pub use info::info;
pub use playlist::playlist;
