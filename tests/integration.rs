// End-to-end tests against the public API: the HTTP client against a mock
// server, and the cache store against a throwaway directory.

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use repocard::cache::{CACHE_TTL_MS, CacheStore, cache_key};
use repocard::github::GithubClient;
use repocard::models::{License, Owner, Repo};

fn sample_repo() -> Repo {
    Repo {
        name: "ripgrep".into(),
        full_name: "BurntSushi/ripgrep".into(),
        html_url: "https://github.com/BurntSushi/ripgrep".into(),
        description: Some("ripgrep recursively searches directories for a regex pattern".into()),
        ssh_url: "git@github.com:BurntSushi/ripgrep.git".into(),
        homepage: None,
        stargazers_count: 45_000,
        subscribers_count: 500,
        forks_count: 2_000,
        open_issues_count: 150,
        language: Some("Rust".into()),
        pushed_at: Utc.with_ymd_and_hms(2023, 11, 22, 9, 30, 0).unwrap(),
        owner: Owner {
            login: "BurntSushi".into(),
            html_url: "https://github.com/BurntSushi".into(),
        },
        license: Some(License {
            name: "The Unlicense".into(),
            spdx_id: Some("Unlicense".into()),
        }),
    }
}

#[tokio::test]
async fn fetch_parses_a_success_payload() {
    let mut server = mockito::Server::new_async().await;
    let payload = sample_repo();
    let mock = server
        .mock("GET", "/repos/BurntSushi/ripgrep")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&payload).unwrap())
        .create_async()
        .await;

    let client = GithubClient::with_base_url(server.url()).unwrap();
    let repo = client.fetch_repo("BurntSushi/ripgrep").await.unwrap();
    assert_eq!(repo, payload);
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_surfaces_the_error_message_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/BurntSushi/ripgrep")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"API rate limit exceeded"}"#)
        .create_async()
        .await;

    let client = GithubClient::with_base_url(server.url()).unwrap();
    let err = client.fetch_repo("BurntSushi/ripgrep").await.unwrap_err();
    assert_eq!(err.to_string(), "API rate limit exceeded");
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_falls_back_when_the_error_body_is_not_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/BurntSushi/ripgrep")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let client = GithubClient::with_base_url(server.url()).unwrap();
    let err = client.fetch_repo("BurntSushi/ripgrep").await.unwrap_err();
    assert!(err.to_string().starts_with("GitHub returned HTTP 502"));
    mock.assert_async().await;
}

#[test]
fn cache_round_trips_a_snapshot() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::at(dir.path());
    let key = cache_key("BurntSushi/ripgrep");

    store.write(&key, Some(&sample_repo())).unwrap();
    let entry = store.read(&key);
    assert_eq!(entry.data, Some(sample_repo()));
    assert!(!entry.is_expired(Utc::now().timestamp_millis(), CACHE_TTL_MS));
}

#[test]
fn cache_write_of_nothing_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::at(dir.path());
    let key = cache_key("BurntSushi/ripgrep");

    store.write(&key, Some(&sample_repo())).unwrap();
    let before = store.read(&key);
    store.write(&key, None).unwrap();
    let after = store.read(&key);
    assert_eq!(before.cached_at, after.cached_at);
    assert_eq!(before.data, after.data);
}

#[test]
fn cache_persists_across_store_instances() {
    let dir = TempDir::new().unwrap();
    let key = cache_key("BurntSushi/ripgrep");
    CacheStore::at(dir.path())
        .write(&key, Some(&sample_repo()))
        .unwrap();

    let reopened = CacheStore::at(dir.path());
    assert_eq!(reopened.read(&key).data, Some(sample_repo()));
}
