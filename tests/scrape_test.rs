use plportcli::types::ScrapedTrack;
use plportcli::youtube::{parse_playlist_meta, parse_tracks};

fn track(title: &str, artist: &str) -> ScrapedTrack {
    ScrapedTrack {
        title: title.to_string(),
        artist: artist.to_string(),
    }
}

const RENDERED_PLAYLIST: &str = r#"
<!DOCTYPE html>
<html>
<head>
  <meta property="og:title" content="Road Trip Mix">
  <meta property="og:description" content="Songs for long drives">
  <meta property="og:image" content="https://i.ytimg.com/vi/abc/hqdefault.jpg">
</head>
<body>
  <ytd-playlist-video-renderer>
    <a id="video-title">
      Never Gonna Give You Up
    </a>
    <div class="ytd-channel-name"><a>Rick Astley</a></div>
  </ytd-playlist-video-renderer>
  <ytd-playlist-video-renderer>
    <a id="video-title">[Deleted video]</a>
    <div class="ytd-channel-name"></div>
  </ytd-playlist-video-renderer>
  <ytd-playlist-video-renderer>
    <a id="video-title">[Private video]</a>
    <div class="ytd-channel-name"><a>Some Channel</a></div>
  </ytd-playlist-video-renderer>
  <ytd-playlist-video-renderer>
    <a id="video-title">Africa</a>
    <div class="ytd-channel-name"></div>
  </ytd-playlist-video-renderer>
</body>
</html>
"#;

#[test]
fn test_parse_playlist_meta() {
    let playlist = parse_playlist_meta(RENDERED_PLAYLIST, "PLtest");

    assert_eq!(playlist.id, "PLtest");
    assert_eq!(playlist.title, "Road Trip Mix");
    assert_eq!(playlist.description, "Songs for long drives");
    assert_eq!(
        playlist.thumbnail_url,
        "https://i.ytimg.com/vi/abc/hqdefault.jpg"
    );

    // The caller fills in the track count from the parsed track list
    assert_eq!(playlist.track_count, 0);
}

#[test]
fn test_parse_playlist_meta_defaults() {
    let playlist = parse_playlist_meta("<html><head></head><body></body></html>", "PLtest");

    assert_eq!(playlist.title, "Unknown Playlist");
    assert_eq!(playlist.description, "");
    assert_eq!(playlist.thumbnail_url, "");
}

#[test]
fn test_parse_tracks_from_rendered_markup() {
    let tracks = parse_tracks(RENDERED_PLAYLIST);

    // Deleted and private entries are skipped; a missing channel name
    // becomes "Unknown Artist"; surrounding whitespace is trimmed
    assert_eq!(
        tracks,
        vec![
            track("Never Gonna Give You Up", "Rick Astley"),
            track("Africa", "Unknown Artist"),
        ]
    );
}

#[test]
fn test_parse_tracks_empty_document() {
    let tracks = parse_tracks("<html><body></body></html>");
    assert!(tracks.is_empty());
}

const INITIAL_DATA_PLAYLIST: &str = r#"
<!DOCTYPE html>
<html>
<head><meta property="og:title" content="Blob Only"></head>
<body>
<script>var ytInitialData = {"contents":{"twoColumnBrowseResultsRenderer":{"tabs":[{"tabRenderer":{"content":{"sectionListRenderer":{"contents":[{"itemSectionRenderer":{"contents":[{"playlistVideoListRenderer":{"contents":[
{"playlistVideoRenderer":{"title":{"runs":[{"text":"Take On Me"}]},"shortBylineText":{"runs":[{"text":"a-ha"}]}}},
{"playlistVideoRenderer":{"title":{"runs":[{"text":"[Private video]"}]},"shortBylineText":{"runs":[{"text":"Hidden Channel"}]}}},
{"playlistVideoRenderer":{"title":{"runs":[{"text":"Hung Up"}]}}},
{"continuationItemRenderer":{"trigger":"CONTINUATION_TRIGGER_ON_ITEM_SHOWN"}}
]}}]}}]}}}}]}}};</script>
</body>
</html>
"#;

#[test]
fn test_parse_tracks_falls_back_to_initial_data() {
    let tracks = parse_tracks(INITIAL_DATA_PLAYLIST);

    // No rendered video elements, so the embedded JSON blob is used. The
    // same filtering rules apply: private entries are skipped and a
    // missing byline becomes "Unknown Artist". Non-video entries like the
    // continuation renderer are ignored.
    assert_eq!(
        tracks,
        vec![
            track("Take On Me", "a-ha"),
            track("Hung Up", "Unknown Artist"),
        ]
    );
}

#[test]
fn test_rendered_markup_takes_priority_over_initial_data() {
    let html = r#"<html><body>
        <ytd-playlist-video-renderer>
          <a id="video-title">From Markup</a>
          <div class="ytd-channel-name"><a>Markup Channel</a></div>
        </ytd-playlist-video-renderer>
        <script>var ytInitialData = {"contents":{}};</script>
        </body></html>"#;

    let tracks = parse_tracks(html);
    assert_eq!(tracks, vec![track("From Markup", "Markup Channel")]);
}

#[test]
fn test_parse_tracks_with_malformed_initial_data() {
    // A blob that is not valid JSON falls through to an empty track list
    let html = "<html><body><script>var ytInitialData = {broken;</script></body></html>";
    let tracks = parse_tracks(html);
    assert!(tracks.is_empty());
}
