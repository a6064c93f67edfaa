//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! converter: authentication, catalog search, and playlist management. It
//! handles all HTTP communication, OAuth flows, error handling, and rate
//! limiting, providing a clean Rust interface for the CLI layer.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── User Profile (playlist owner)
//!     ├── Catalog Search (one query per scraped track)
//!     └── Playlist Operations (create, populate)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! [`auth`] implements the OAuth 2.0 PKCE (Proof Key for Code Exchange) flow:
//! a cryptographically random code verifier, a SHA256-derived challenge, a
//! temporary local callback server, browser-based user authorization, and the
//! final code-for-token exchange. Tokens are persisted and refreshed through
//! [`crate::management::TokenManager`] with a four-minute expiry buffer, so no
//! client secret ever needs to be stored.
//!
//! [`search`] resolves scraped tracks against the catalog. Matching is
//! deliberately best-effort: a single free-text query per track with
//! `limit=1`, first hit wins. There is no fuzzy scoring or disambiguation; a
//! miss is recorded and the conversion moves on.
//!
//! [`user`] fetches the authenticated user's profile. The profile ID owns
//! every playlist the converter creates.
//!
//! [`playlist`] creates the target playlist (always private) and adds the
//! matched track URIs in batches of at most 100 per request, the Web API's
//! hard limit on `POST /playlists/{id}/tracks`.
//!
//! ## Error Handling
//!
//! All request paths share the same resilience rules:
//!
//! - **429 Too Many Requests**: the `Retry-After` header is respected for
//!   delays up to 120 seconds, then the request is retried; longer delays
//!   produce a warning instead of an unbounded sleep.
//! - **502 Bad Gateway**: retried after a 10 second pause.
//! - Everything else propagates as `reqwest::Error` to the caller.
//!
//! ## API Coverage
//!
//! - `GET /me` - profile of the authenticated user
//! - `GET /search` - track search (`type=track`, `limit=1`)
//! - `POST /users/{user_id}/playlists` - create the private target playlist
//! - `POST /playlists/{playlist_id}/tracks` - batched track insertion
//! - `POST /api/token` - token exchange and refresh operations

pub mod auth;
pub mod playlist;
pub mod search;
pub mod user;
