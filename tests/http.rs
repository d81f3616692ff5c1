use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Entry {
    mood: String,
    notes: String,
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct SavedResponse {
    message: String,
    entry: Entry,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct TimelinePoint {
    mood: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct FlashbackItem {
    mood: String,
    notes: String,
}

struct TestServer {
    base_url: String,
    data_path: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let _ = std::fs::remove_file(&self.data_path);
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("mood_journal_http_{}_{}.json", std::process::id(), nanos));
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(seed: Option<&str>) -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    if let Some(contents) = seed {
        std::fs::write(&data_path, contents).expect("seed data file");
    }

    let child = Command::new(env!("CARGO_BIN_EXE_mood_journal"))
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", &data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        data_path,
        child,
    }
}

#[tokio::test]
async fn http_entry_is_saved_once_per_day() {
    let server = spawn_server(None).await;
    let client = Client::new();

    let empty: Vec<Entry> = client
        .get(format!("{}/entries", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(empty.is_empty());

    let response = client
        .post(format!("{}/entry", server.base_url))
        .json(&serde_json::json!({
            "mood": "😀",
            "notes": "  walked the dog  ",
            "timestamp": "1999-01-01T00:00:00.000Z"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let saved: SavedResponse = response.json().await.unwrap();
    assert_eq!(saved.message, "Entry saved successfully!");
    assert_eq!(saved.entry.notes, "walked the dog");
    assert!(!saved.entry.timestamp.starts_with("1999"));

    let entries: Vec<Entry> = client
        .get(format!("{}/entries", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mood, "😀");
    assert_eq!(entries[0].timestamp, saved.entry.timestamp);

    let again = client
        .post(format!("{}/entry", server.base_url))
        .json(&serde_json::json!({ "mood": "😢", "notes": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = again.json().await.unwrap();
    assert_eq!(body.error, "You have already submitted an entry today.");

    let entries: Vec<Entry> = client
        .get(format!("{}/entries", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn http_missing_mood_is_rejected() {
    let server = spawn_server(None).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/entry", server.base_url))
        .json(&serde_json::json!({ "notes": "no mood" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json().await.unwrap();
    assert!(!body.error.is_empty());
}

#[tokio::test]
async fn http_malformed_body_gets_json_error() {
    let server = spawn_server(None).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/entry", server.base_url))
        .header("content-type", "application/json")
        .body("{mood:")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json().await.unwrap();
    assert!(!body.error.is_empty());
}

#[tokio::test]
async fn http_corrupt_file_fails_listing_but_not_append() {
    let server = spawn_server(Some("{ this is not json")).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/entries", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "Failed to parse entries file.");

    let timeline = client
        .get(format!("{}/api/timeline", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(timeline.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = client
        .post(format!("{}/entry", server.base_url))
        .json(&serde_json::json!({ "mood": "😐", "notes": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let entries: Vec<Entry> = client
        .get(format!("{}/entries", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn http_views_over_seeded_history() {
    let seed = serde_json::json!([
        { "mood": "😀", "notes": "first", "timestamp": "2025-01-05T12:00:00.000Z" },
        { "mood": "😢", "notes": "   ", "timestamp": "2025-01-06T12:00:00.000Z" },
        { "mood": "😀", "notes": "", "timestamp": "2025-01-07T12:00:00.000Z" },
        { "mood": "😊", "notes": "spring", "timestamp": "2025-04-10T12:00:00.000Z" }
    ])
    .to_string();
    let server = spawn_server(Some(&seed)).await;
    let client = Client::new();

    let monthly: Vec<TimelinePoint> = client
        .get(format!("{}/api/timeline?mode=monthly", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let moods: Vec<_> = monthly.iter().map(|p| p.mood.as_str()).collect();
    assert_eq!(moods, vec!["😀", "😊"]);
    assert!(monthly.iter().all(|p| !p.label.is_empty()));

    let recent: Vec<TimelinePoint> = client
        .get(format!("{}/api/timeline?mode=last7", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(recent.len(), 4);
    assert_eq!(recent[3].mood, "😊");

    let flashback: Vec<FlashbackItem> = client
        .get(format!("{}/api/flashback?mood=all&limit=all", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let notes: Vec<_> = flashback.iter().map(|item| item.notes.as_str()).collect();
    assert_eq!(notes, vec!["spring", "first"]);

    let none: Vec<FlashbackItem> = client
        .get(format!("{}/api/flashback?mood=%F0%9F%98%A1", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(none.is_empty());

    let filtered: Vec<FlashbackItem> = client
        .get(format!("{}/api/flashback?mood=%F0%9F%98%80&limit=1", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].mood, "😀");

    let bad = client
        .get(format!("{}/api/timeline?mode=yearly", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}
