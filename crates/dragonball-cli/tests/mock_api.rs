//! CLI integration tests against a mock hero API.

mod common;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{run_cli_with_env, run_cli_with_env_failure, run_cli_with_env_success};

const USER: &str = "goku@capsule.corp";
const PASSWORD: &str = "kamehameha";

fn api_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}/api/", server.address().port())
}

async fn mount_api(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("abc123"))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/heros/all"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "photo": "https://img/goku.png", "favorite": false, "name": "Goku", "description": "d"},
            {"id": "2", "photo": "https://img/vegeta.png", "favorite": true, "name": "Vegeta", "description": "e"}
        ])))
        .mount(server)
        .await;
}

fn login_args() -> Vec<&'static str> {
    vec!["login", "--user", USER, "--password", PASSWORD]
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_then_list_heroes() {
    let server = MockServer::start().await;
    mount_api(&server).await;
    let api = api_url(&server);
    let home = TempDir::new().unwrap();

    let stdout = run_cli_with_env_success(&login_args(), home.path(), &api);
    assert!(stdout.contains("Logged in successfully"));
    assert!(stdout.contains(&api));

    let stdout = run_cli_with_env_success(&["heroes"], home.path(), &api);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Goku"));
    assert!(lines[0].contains("https://img/goku.png"));
    assert!(lines[1].contains("Vegeta"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_heroes_json_output() {
    let server = MockServer::start().await;
    mount_api(&server).await;
    let api = api_url(&server);
    let home = TempDir::new().unwrap();

    run_cli_with_env_success(&login_args(), home.path(), &api);
    let stdout = run_cli_with_env_success(&["heroes", "--json"], home.path(), &api);

    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first, json!({"name": "Goku", "imageUrl": "https://img/goku.png"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_credentials_send_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("abc123"))
        .expect(0)
        .mount(&server)
        .await;
    let api = api_url(&server);
    let home = TempDir::new().unwrap();

    let stderr = run_cli_with_env_failure(
        &["login", "--user", "goku", "--password", PASSWORD],
        home.path(),
        &api,
    );
    assert!(stderr.contains("Invalid credentials"));

    let stderr = run_cli_with_env_failure(
        &["login", "--user", USER, "--password", "123"],
        home.path(),
        &api,
    );
    assert!(stderr.contains("Invalid credentials"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let api = api_url(&server);
    let home = TempDir::new().unwrap();

    let stderr = run_cli_with_env_failure(&login_args(), home.path(), &api);
    assert!(stderr.contains("Login failed: Unauthorized"));

    // No session was stored.
    let stderr = run_cli_with_env_failure(&["whoami"], home.path(), &api);
    assert!(stderr.contains("No active session"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_heroes_without_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    let stderr = run_cli_with_env_failure(&["heroes"], home.path(), &api_url(&server));
    assert!(stderr.contains("No active session. Run 'dragonball login' first."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_whoami_and_logout() {
    let server = MockServer::start().await;
    mount_api(&server).await;
    let api = api_url(&server);
    let home = TempDir::new().unwrap();

    run_cli_with_env_success(&login_args(), home.path(), &api);

    let stdout = run_cli_with_env_success(&["whoami"], home.path(), &api);
    assert!(stdout.contains(&api));
    assert!(stdout.contains("Logged in"));

    let stdout = run_cli_with_env_success(&["logout"], home.path(), &api);
    assert!(stdout.contains("Logged out"));

    let output = run_cli_with_env(&["whoami"], home.path(), &api);
    assert!(!output.status.success());
}
