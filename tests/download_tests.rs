//! Tests for the zipball download command: target naming, force/skip
//! overwrite semantics, and per-repository failure handling.

use gh_backup::commands::DownloadCommand;
use gh_backup::{Command, CommandContext, GitHubClient, RepoSource};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn listing_entry(server_uri: &str, name: &str) -> Value {
    json!({
        "name": name,
        "url": format!("{server_uri}/repos/octocat/{name}"),
        "clone_url": format!("https://github.com/octocat/{name}.git"),
        "fork": false
    })
}

fn context(server: &MockServer, save_path: &std::path::Path, force: bool) -> CommandContext {
    CommandContext {
        client: GitHubClient::with_base_url(None, server.uri()),
        user_login: "octocat".to_string(),
        source: RepoSource::Owned,
        include_forks: false,
        repo_list: Vec::new(),
        save_path: save_path.to_path_buf(),
        force,
        verbose: false,
    }
}

async fn mount_listing(server: &MockServer, names: &[&str]) {
    let uri = server.uri();
    let entries: Vec<Value> = names.iter().map(|n| listing_entry(&uri, n)).collect();
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(entries)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_download_writes_zip_per_repository() {
    let server = MockServer::start().await;
    mount_listing(&server, &["first", "second"]).await;

    for (name, body) in [("first", b"zip-first".as_slice()), ("second", b"zip-second")] {
        Mock::given(method("GET"))
            .and(path(format!("/repos/octocat/{name}/zipball")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
            .mount(&server)
            .await;
    }

    let save_dir = TempDir::new().unwrap();
    let ctx = context(&server, save_dir.path(), false);
    DownloadCommand.execute(&ctx).await.unwrap();

    assert_eq!(
        fs::read(save_dir.path().join("first.zip")).unwrap(),
        b"zip-first"
    );
    assert_eq!(
        fs::read(save_dir.path().join("second.zip")).unwrap(),
        b"zip-second"
    );
}

#[tokio::test]
async fn test_existing_archive_is_skipped_without_force() {
    let server = MockServer::start().await;
    mount_listing(&server, &["repo"]).await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/repo/zipball"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"fresh bytes".to_vec()))
        .expect(0)
        .mount(&server)
        .await;

    let save_dir = TempDir::new().unwrap();
    let target = save_dir.path().join("repo.zip");
    fs::write(&target, b"original bytes").unwrap();

    let ctx = context(&server, save_dir.path(), false);
    DownloadCommand.execute(&ctx).await.unwrap();

    // Untouched: no request was made and the bytes are unchanged
    assert_eq!(fs::read(&target).unwrap(), b"original bytes");
}

#[tokio::test]
async fn test_force_overwrites_existing_archive() {
    let server = MockServer::start().await;
    mount_listing(&server, &["repo"]).await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/repo/zipball"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"fresh bytes".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let save_dir = TempDir::new().unwrap();
    let target = save_dir.path().join("repo.zip");
    fs::write(&target, b"original bytes").unwrap();

    let ctx = context(&server, save_dir.path(), true);
    DownloadCommand.execute(&ctx).await.unwrap();

    assert_eq!(fs::read(&target).unwrap(), b"fresh bytes");
}

#[tokio::test]
async fn test_failed_download_does_not_stop_the_run() {
    let server = MockServer::start().await;
    mount_listing(&server, &["broken", "working"]).await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/broken/zipball"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/working/zipball"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".to_vec()))
        .mount(&server)
        .await;

    let save_dir = TempDir::new().unwrap();
    let ctx = context(&server, save_dir.path(), false);
    DownloadCommand.execute(&ctx).await.unwrap();

    assert!(!save_dir.path().join("broken.zip").exists());
    assert_eq!(fs::read(save_dir.path().join("working.zip")).unwrap(), b"ok");
}

#[tokio::test]
async fn test_all_downloads_failing_propagates_an_error() {
    let server = MockServer::start().await;
    mount_listing(&server, &["only"]).await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/only/zipball"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let save_dir = TempDir::new().unwrap();
    let ctx = context(&server, save_dir.path(), false);
    let result = DownloadCommand.execute(&ctx).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_save_path_is_created_when_missing() {
    let server = MockServer::start().await;
    mount_listing(&server, &["repo"]).await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/repo/zipball"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".to_vec()))
        .mount(&server)
        .await;

    let scratch = TempDir::new().unwrap();
    let nested = scratch.path().join("backups").join("zips");

    let ctx = context(&server, &nested, false);
    DownloadCommand.execute(&ctx).await.unwrap();

    assert!(nested.join("repo.zip").exists());
}
