//! One-shot subcommands against mocked upstreams: output must be JSON.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::{Value, json};
use surverse::AppState;
use surverse::commands;
use surverse::config::UpstreamArgs;

fn state(server: &ServerGuard) -> AppState {
    AppState::from_config(&UpstreamArgs {
        catalog_url: format!("{}/api.php", server.url()),
        lyrics_url: server.url(),
        youtube_url: server.url(),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn search_prints_songs_as_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("__call".into(), "search.getResults".into()),
            Matcher::UrlEncoded("q".into(), "kesariya".into()),
            Matcher::UrlEncoded("p".into(), "1".into()),
            Matcher::UrlEncoded("n".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({ "results": [{
                "id": "kM2nQ7xT",
                "title": "Kesariya",
                "perma_url": "https://www.jiosaavn.com/song/kesariya/Kesariya1",
                "more_info": {
                    "album": "Brahmastra",
                    "artistMap": { "primary_artists": [{ "name": "Arijit Singh" }] }
                }
            }] })
            .to_string(),
        )
        .create_async()
        .await;

    let out = commands::search(&state(&server), "kesariya", 1, 5).await.unwrap();

    mock.assert_async().await;
    let songs: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(songs[0]["id"], "Kesariya1");
    assert_eq!(songs[0]["title"], "Kesariya");
    assert_eq!(songs[0]["artist"], "Arijit Singh");
    assert_eq!(songs[0]["album"], "Brahmastra");
}

#[tokio::test]
async fn search_with_no_results_prints_empty_array() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let out = commands::search(&state(&server), "x", 1, 20).await.unwrap();
    assert_eq!(serde_json::from_str::<Value>(&out).unwrap(), json!([]));
}

#[tokio::test]
async fn info_for_unknown_song_is_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api.php")
        .match_query(Matcher::UrlEncoded("__call".into(), "song.getDetails".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let err = commands::info(&state(&server), "42").await.unwrap_err();
    assert!(err.to_string().contains("42"));
}

#[tokio::test]
async fn lyrics_prints_fallback_object() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v1/Coldplay/Unknown")
        .with_status(404)
        .create_async()
        .await;

    let out = commands::lyrics(&state(&server), "Coldplay", "Unknown").await.unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(&out).unwrap(),
        json!({ "lyrics": "Lyrics not found" })
    );
}

#[test]
fn decrypt_rejects_garbage() {
    assert!(commands::decrypt("not base64!").is_err());
}
