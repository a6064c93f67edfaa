use plportcli::types::ScrapedTrack;
use plportcli::utils::*;

// Helper function to create a test track
fn create_test_track(title: &str, artist: &str) -> ScrapedTrack {
    ScrapedTrack {
        title: title.to_string(),
        artist: artist.to_string(),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_playlist_id_from_url_valid_inputs() {
    // Plain playlist URL
    let id = playlist_id_from_url("https://www.youtube.com/playlist?list=PLabc123").unwrap();
    assert_eq!(id, "PLabc123");

    // Watch URL with additional parameters
    let id = playlist_id_from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLxyz&index=3")
        .unwrap();
    assert_eq!(id, "PLxyz");

    // Short-link URL carrying a list parameter
    let id = playlist_id_from_url("https://youtu.be/dQw4w9WgXcQ?list=PL123").unwrap();
    assert_eq!(id, "PL123");
}

#[test]
fn test_playlist_id_from_url_invalid_inputs() {
    // URL without a list parameter
    let result = playlist_id_from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Invalid YouTube playlist URL"));

    // Empty list parameter
    let result = playlist_id_from_url("https://www.youtube.com/playlist?list=");
    assert!(result.is_err());

    // Not a URL at all
    let result = playlist_id_from_url("PLabc123");
    assert!(result.is_err());
}

#[test]
fn test_build_search_query() {
    let track = create_test_track("Never Gonna Give You Up", "Rick Astley");
    assert_eq!(
        build_search_query(&track),
        "Never Gonna Give You Up Rick Astley"
    );

    // Unknown artists still contribute to the query
    let track = create_test_track("Some Bootleg Mix", "Unknown Artist");
    assert_eq!(build_search_query(&track), "Some Bootleg Mix Unknown Artist");
}

#[test]
fn test_remove_duplicate_uris() {
    let mut uris = vec![
        "spotify:track:one".to_string(),
        "spotify:track:two".to_string(),
        "spotify:track:one".to_string(), // Duplicate
        "spotify:track:three".to_string(),
        "spotify:track:two".to_string(), // Duplicate
    ];

    remove_duplicate_uris(&mut uris);

    // Should keep the first occurrence of each URI, in order
    assert_eq!(
        uris,
        vec![
            "spotify:track:one".to_string(),
            "spotify:track:two".to_string(),
            "spotify:track:three".to_string(),
        ]
    );
}

#[test]
fn test_remove_duplicate_uris_no_duplicates() {
    let mut uris = vec![
        "spotify:track:one".to_string(),
        "spotify:track:two".to_string(),
    ];

    remove_duplicate_uris(&mut uris);
    assert_eq!(uris.len(), 2);
}
