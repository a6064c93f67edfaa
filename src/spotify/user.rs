use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{config, types::UserProfile};

/// Retrieves the profile of the authenticated user.
///
/// The profile `id` is the owner under which converted playlists are
/// created. Implements the same 502 retry logic as the other request paths;
/// other errors are propagated.
pub async fn get_current_user(token: &str) -> Result<UserProfile, reqwest::Error> {
    loop {
        let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
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
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let profile = response.json::<UserProfile>().await?;
        return Ok(profile);
    }
}
