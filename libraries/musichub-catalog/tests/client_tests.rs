//! Gateway tests against a mock TheAudioDB server.
//!
//! These verify the mapping rules and the swallow-and-log error contract
//! without touching the real API.

use musichub_catalog::{AudioDbClient, CatalogConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AudioDbClient {
    AudioDbClient::new(CatalogConfig::new(server.uri())).unwrap()
}

fn search_record(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "idTrack": id,
        "strTrack": name,
        "strArtist": "Coldplay",
        "strGenre": "Alternative Rock",
        "intYearReleased": "2000",
        "strTrackThumb": "https://img.example/thumb.jpg"
    })
}

// =============================================================================
// Search
// =============================================================================

mod search {
    use super::*;

    #[tokio::test]
    async fn maps_records_into_tracks() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/mostloved.php"))
            .and(query_param("format", "yellow"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "track": [search_record("32795237", "Yellow")]
            })))
            .mount(&server)
            .await;

        let tracks = client_for(&server).search_track("yellow").await;

        assert_eq!(tracks.len(), 1);
        let track = &tracks[0];
        assert_eq!(track.id.as_str(), "32795237");
        assert_eq!(track.name, "Yellow");
        assert_eq!(track.artist, "Coldplay");
        assert_eq!(track.genre.as_deref(), Some("Alternative Rock"));
        assert_eq!(track.year.as_deref(), Some("2000"));
        assert_eq!(track.thumbnail.as_deref(), Some("https://img.example/thumb.jpg"));
        // search results carry no album or release type
        assert!(track.album.is_none());
        assert!(track.kind.is_none());
    }

    #[tokio::test]
    async fn missing_metadata_becomes_unknown() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/mostloved.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "track": [{
                    "idTrack": "1",
                    "strTrack": "Obscure Song",
                    "strArtist": "Nobody",
                    "strGenre": null,
                    "strTrackThumb": ""
                }]
            })))
            .mount(&server)
            .await;

        let tracks = client_for(&server).search_track("obscure").await;

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].genre.as_deref(), Some("Unknown"));
        assert_eq!(tracks[0].year.as_deref(), Some("Unknown"));
        assert!(tracks[0].thumbnail.is_none());
    }

    #[tokio::test]
    async fn results_are_capped_at_ten() {
        let server = MockServer::start().await;

        let records: Vec<_> = (0..14)
            .map(|i| search_record(&i.to_string(), &format!("Song {i}")))
            .collect();
        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/mostloved.php"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "track": records })),
            )
            .mount(&server)
            .await;

        let tracks = client_for(&server).search_track("anything").await;

        assert_eq!(tracks.len(), 10);
        assert_eq!(tracks[9].name, "Song 9");
    }

    #[tokio::test]
    async fn absent_track_field_means_no_results() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/mostloved.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "track": null
            })))
            .mount(&server)
            .await;

        let tracks = client_for(&server)
            .search_track("xyz123nonexistent")
            .await;
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_yields_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/mostloved.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&server)
            .await;

        let tracks = client_for(&server).search_track("yellow").await;
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn server_error_yields_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/mostloved.php"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let tracks = client_for(&server).search_track("yellow").await;
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn unreachable_server_yields_empty_list() {
        let client = AudioDbClient::new(CatalogConfig::new("http://127.0.0.1:1")).unwrap();
        let tracks = client.search_track("yellow").await;
        assert!(tracks.is_empty());
    }
}

// =============================================================================
// Trending
// =============================================================================

mod trending {
    use super::*;

    #[tokio::test]
    async fn maps_records_with_empty_string_sentinels() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/trending.php"))
            .and(query_param("country", "us"))
            .and(query_param("type", "itunes"))
            .and(query_param("format", "singles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "trending": [{
                    "idTrack": "7",
                    "strTrack": "Hit Single",
                    "strArtist": "Star",
                    "strAlbum": "Hits",
                    "strType": "single",
                    "strTrackThumb": ""
                }]
            })))
            .mount(&server)
            .await;

        let tracks = client_for(&server).popular_songs("us").await;

        assert_eq!(tracks.len(), 1);
        let track = &tracks[0];
        assert_eq!(track.album.as_deref(), Some("Hits"));
        assert_eq!(track.kind.as_deref(), Some("single"));
        // trending records carry no genre or year
        assert_eq!(track.genre.as_deref(), Some(""));
        assert_eq!(track.year.as_deref(), Some(""));
        // an empty thumbnail field never becomes a sentinel
        assert!(track.thumbnail.is_none());
    }

    #[tokio::test]
    async fn record_without_album_gets_empty_string() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/trending.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "trending": [{
                    "idTrack": "8",
                    "strTrack": "Loosie",
                    "strArtist": "Someone"
                }]
            })))
            .mount(&server)
            .await;

        let tracks = client_for(&server).popular_songs("gb").await;

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].album.as_deref(), Some(""));
        assert_eq!(tracks[0].kind.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn absent_trending_field_means_no_results() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/trending.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let tracks = client_for(&server).popular_songs("de").await;
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn server_error_yields_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/trending.php"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let tracks = client_for(&server).popular_songs("us").await;
        assert!(tracks.is_empty());
    }
}

// =============================================================================
// Example songs fan-out
// =============================================================================

mod example_songs {
    use super::*;

    fn lookup_body() -> serde_json::Value {
        serde_json::json!({
            "track": [{
                "idTrack": "42",
                "strTrack": "Some Classic",
                "strArtist": "Some Band",
                "strAlbum": "Some Album",
                "strType": "album",
                "strTrackThumb": "https://img.example/c.jpg"
            }]
        })
    }

    #[tokio::test]
    async fn concatenates_every_lookup() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/searchtrack.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(lookup_body()))
            .mount(&server)
            .await;

        let tracks = client_for(&server).example_songs().await;

        // one record per catalog entry, mapped like trending records
        assert_eq!(tracks.len(), 15);
        assert!(tracks.iter().all(|t| t.genre.as_deref() == Some("")));
        assert!(tracks.iter().all(|t| t.album.as_deref() == Some("Some Album")));
    }

    #[tokio::test]
    async fn one_failing_lookup_does_not_discard_the_batch() {
        let server = MockServer::start().await;

        // every lookup for this artist fails...
        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/searchtrack.php"))
            .and(query_param("s", "queen"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .with_priority(1)
            .mount(&server)
            .await;

        // ...while everything else succeeds
        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/searchtrack.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(lookup_body()))
            .mount(&server)
            .await;

        let tracks = client_for(&server).example_songs().await;

        // the two queen lookups contribute nothing; the other 13 survive
        assert_eq!(tracks.len(), 13);
    }

    #[tokio::test]
    async fn lookups_without_results_are_skipped() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/123/searchtrack.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let tracks = client_for(&server).example_songs().await;
        assert!(tracks.is_empty());
    }
}
