//! # API Module
//!
//! HTTP endpoints for the temporary local web server that backs the OAuth
//! authentication flow. The server only runs while `plportcli auth` waits
//! for the user to authorize the application in their browser.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles the OAuth callback request from Spotify's
//!   authorization server and completes the PKCE flow by exchanging the
//!   authorization code for an access token.
//! - [`health`] - Health check returning application status and version.
//!
//! The module is built on the [Axum](https://docs.rs/axum) web framework;
//! each endpoint is an async function wired into the router in
//! [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
