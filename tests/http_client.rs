//! End-to-end tests of the reqwest transport against a local axum server.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use cover_art_archive::coverart::ReqwestTransport;
use cover_art_archive::{CoverArtClient, CoverArtError, ImageSize, Mbid};

const MBID: &str = "76df3287-6cda-33eb-8e9a-044b5e15ffdd";
const USER_AGENT: &str = "cover-art-archive-tests/0.1 (test@example.com)";
const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

const RELEASE_JSON: &str = r#"{
    "images": [{
        "types": ["Front"],
        "front": true,
        "back": false,
        "edit": 17462565,
        "image": "http://coverartarchive.org/release/76df3287-6cda-33eb-8e9a-044b5e15ffdd/829521842.jpg",
        "comment": "",
        "approved": true,
        "thumbnails": {
            "large": "http://coverartarchive.org/release/76df3287-6cda-33eb-8e9a-044b5e15ffdd/829521842-500.jpg",
            "small": "http://coverartarchive.org/release/76df3287-6cda-33eb-8e9a-044b5e15ffdd/829521842-250.jpg"
        },
        "id": "829521842"
    }],
    "release": "http://musicbrainz.org/release/76df3287-6cda-33eb-8e9a-044b5e15ffdd"
}"#;

type Seen = Arc<Mutex<Vec<String>>>;

fn record(seen: &Seen, headers: &HeaderMap) {
    let agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    seen.lock().unwrap().push(agent);
}

async fn release_info(State(seen): State<Seen>, headers: HeaderMap) -> impl IntoResponse {
    record(&seen, &headers);
    ([(header::CONTENT_TYPE, "application/json")], RELEASE_JSON)
}

async fn front_small(State(seen): State<Seen>, headers: HeaderMap) -> impl IntoResponse {
    record(&seen, &headers);
    Redirect::temporary("/download/829521842_thumb250.jpg")
}

async fn download(State(seen): State<Seen>, headers: HeaderMap) -> impl IntoResponse {
    record(&seen, &headers);
    JPEG_BYTES.to_vec()
}

async fn broken(State(seen): State<Seen>, headers: HeaderMap) -> impl IntoResponse {
    record(&seen, &headers);
    StatusCode::SERVICE_UNAVAILABLE
}

/// Start a fake archive and return its base URL with the request log.
async fn spawn_archive() -> (String, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/release/{mbid}", get(release_info))
        .route("/release/{mbid}/front-250", get(front_small))
        .route("/release/{mbid}/back", get(broken))
        .route("/download/{file}", get(download))
        .with_state(Arc::clone(&seen));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

fn client(base_url: &str) -> CoverArtClient {
    CoverArtClient::builder(USER_AGENT)
        .base_url(base_url)
        .build()
        .unwrap()
}

fn mbid() -> Mbid {
    Mbid::parse(MBID).unwrap()
}

#[tokio::test]
async fn test_release_info_over_http() {
    let (base, seen) = spawn_archive().await;
    let info = client(&base).release_info(&mbid()).await.unwrap();

    assert_eq!(info.images.len(), 1);
    assert_eq!(info.images[0].id, "829521842");
    assert_eq!(info.images[0].edit, 17462565);
    assert_eq!(*seen.lock().unwrap(), vec![USER_AGENT.to_string()]);
}

#[tokio::test]
async fn test_front_follows_redirect_and_uses_final_extension() {
    let (base, seen) = spawn_archive().await;
    let image = client(&base)
        .release_front(&mbid(), ImageSize::Small)
        .await
        .unwrap();

    assert_eq!(image.data, JPEG_BYTES);
    assert_eq!(image.mime_type, "image/jpeg");
    assert_eq!(image.url.path(), "/download/829521842_thumb250.jpg");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|agent| agent == USER_AGENT));
}

#[tokio::test]
async fn test_missing_image_is_not_found() {
    let (base, _seen) = spawn_archive().await;
    let err = client(&base)
        .release_front(&mbid(), ImageSize::Large)
        .await
        .unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err}");
    assert!(err.url().unwrap().path().ends_with("/front-500"));
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let (base, _seen) = spawn_archive().await;
    let err = client(&base)
        .release_back(&mbid(), ImageSize::Original)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn test_connection_refused_is_returned() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .release_info(&mbid())
        .await
        .unwrap_err();

    assert!(matches!(err, CoverArtError::Transport { .. }));
}

#[tokio::test]
async fn test_custom_reqwest_client_without_redirects() {
    let (base, seen) = spawn_archive().await;
    let http_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let client = CoverArtClient::builder(USER_AGENT)
        .base_url(&base)
        .transport(ReqwestTransport::from_client(http_client))
        .build()
        .unwrap();

    let err = client
        .release_front(&mbid(), ImageSize::Small)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::TEMPORARY_REDIRECT));
    assert_eq!(seen.lock().unwrap().len(), 1);
}
