// SPDX-License-Identifier: MPL-2.0
//! Integration tests for saving a source to disk.
//!
//! A one-shot HTTP server on the loopback interface stands in for the
//! stream origin.

mod common;

use common::{player_with, InstantEngine};
use hls_grid::config::{PlayerSettings, HLS_MIME_TYPE};
use hls_grid::error::PlaybackError;
use hls_grid::video_player::{ClockMedia, DownloadRequest, NativeOnlyEngine, Player, PlayerEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const BODY: &[u8] = b"#EXTM3U\n#EXT-X-VERSION:3\n#EXTINF:6.0,\nsegment0.ts\n#EXT-X-ENDLIST\n";

/// Serves one request with `status` and `body`, returning the base URL.
async fn serve_once(status: &'static str, body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = vec![0u8; 4096];
        let _ = socket.read(&mut request).await;

        let header = format!(
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nContent-Type: application/vnd.apple.mpegurl\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = socket.write_all(header.as_bytes()).await;
        let _ = socket.write_all(body).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

/// Player that plays the source natively, without an engine session.
fn native_player(settings: &PlayerSettings) -> Player {
    Player::new(
        Arc::new(ClockMedia::with_native_types([HLS_MIME_TYPE])),
        Arc::new(NativeOnlyEngine),
        settings.clone(),
    )
}

fn settings_in(dir: &std::path::Path) -> PlayerSettings {
    PlayerSettings {
        download_dir: dir.to_path_buf(),
        ..PlayerSettings::default()
    }
}

#[tokio::test]
async fn test_download_request_saves_body() {
    let base = serve_once("200 OK", BODY).await;
    let dir = tempfile::tempdir().unwrap();

    let request = DownloadRequest::new(&format!("{base}/stream.m3u8"), &settings_in(dir.path()));
    let saved = request.run().await.expect("download should succeed");

    assert_eq!(saved, dir.path().join("video.mp4"));
    assert_eq!(std::fs::read(&saved).unwrap(), BODY);
}

#[tokio::test]
async fn test_download_http_error_is_reported() {
    let base = serve_once("404 Not Found", b"missing").await;
    let dir = tempfile::tempdir().unwrap();

    let request = DownloadRequest::new(&format!("{base}/stream.m3u8"), &settings_in(dir.path()));
    let result = request.run().await;

    assert!(matches!(result, Err(PlaybackError::Download(_))));
    assert!(!dir.path().join("video.mp4").exists());
}

#[tokio::test]
async fn test_player_download_reports_completion() {
    let base = serve_once("200 OK", BODY).await;
    let dir = tempfile::tempdir().unwrap();
    let mut player = native_player(&settings_in(dir.path()));
    player.set_source_url(&format!("{base}/stream.m3u8"));
    assert!(player.last_error().is_none());

    assert!(player.download());

    let event = tokio::time::timeout(Duration::from_secs(10), player.next_event())
        .await
        .expect("download should finish")
        .expect("channel should be open");
    match &event {
        PlayerEvent::DownloadFinished(Ok(path)) => {
            assert_eq!(std::fs::read(path).unwrap(), BODY);
        }
        other => panic!("unexpected event {other:?}"),
    }
    player.handle_event(event);
}

#[tokio::test]
async fn test_player_download_failure_is_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let mut player = native_player(&settings_in(dir.path()));
    player.set_source_url("http://127.0.0.1:9/stream.m3u8");

    assert!(player.download());
    let event = tokio::time::timeout(Duration::from_secs(10), player.next_event())
        .await
        .expect("download should finish")
        .expect("channel should be open");
    player.handle_event(event);

    assert!(matches!(
        player.last_error(),
        Some(PlaybackError::Download(_))
    ));
    assert!(!dir.path().join("video.mp4").exists());
}

#[test]
fn test_download_without_runtime_is_refused() {
    let engine = Arc::new(InstantEngine::new(60.0));
    let (mut player, _media) = player_with(engine);
    player.set_source_url("https://example.com/stream.m3u8");

    assert!(!player.download());
    assert!(matches!(
        player.last_error(),
        Some(PlaybackError::Download(_))
    ));
}
