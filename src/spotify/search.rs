use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{SearchResponse, SpotifyTrack},
    warning,
};

/// Searches the Spotify catalog for the best-effort match of one track.
///
/// Issues a single free-text search with `type=track` and `limit=1` and
/// returns the first hit, or `None` when the catalog has nothing for the
/// query. There is deliberately no scoring or disambiguation; the caller
/// records a miss and moves on.
///
/// # Arguments
///
/// * `query` - Free-text query, usually built via
///   [`crate::utils::build_search_query`]
/// * `token` - Valid access token for Spotify API authentication
///
/// # Rate Limiting
///
/// 429 responses are retried after the `Retry-After` delay when it is at
/// most 120 seconds; 502 Bad Gateway responses are retried after 10 seconds.
/// Other errors are propagated to the caller.
pub async fn search_track(
    query: &str,
    token: &str,
) -> Result<Option<SpotifyTrack>, reqwest::Error> {
    loop {
        let client = Client::new();
        let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());
        let response = client
            .get(&api_url)
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .bearer_auth(token)
            .send()
            .await;

        let response = match response {
            Ok(resp) => {
                // check for retry-after header
                if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                    if let Some(retry_after) = resp.headers().get("retry-after") {
                        let retry_after = retry_after
                            .to_str()
                            .unwrap_or("0")
                            .parse::<u64>()
                            .unwrap_or(0);
                        if retry_after <= 120 {
                            sleep(Duration::from_secs(retry_after)).await;
                            continue; // retry
                        }

                        warning!(
                            "Retry after has reached an abnormal high of {} seconds. Try again later.",
                            retry_after
                        );
                    }
                }

                match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err); // propagate other errors
                    }
                }
            }
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let json = response.json::<SearchResponse>().await?;
        return Ok(json.tracks.items.into_iter().next());
    }
}
