//! CLI tests against a mock backend.
//!
//! Each test runs the built binary with its own temporary credentials file
//! and a wiremock server standing in for the API.

mod common;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{read_credentials, run_cli_failure, run_cli_success, write_credentials};

fn api_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

// ============================================================================
// Session commands
// ============================================================================

#[tokio::test]
async fn test_login_writes_credentials_file() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let creds = dir.path().join("nested").join("credentials.json");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "ana@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "access-a",
            "refreshToken": "refresh-a"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &["login", "--email", "ana@example.com", "--password", "secret123"],
        &creds,
        &api_url(&server),
    )
    .await;

    assert!(stdout.contains("Logged in successfully"));
    let stored = read_credentials(&creds).unwrap();
    assert_eq!(stored["accessToken"], "access-a");
    assert_eq!(stored["refreshToken"], "refresh-a");
}

#[tokio::test]
async fn test_login_rejects_malformed_email_locally() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let creds = dir.path().join("credentials.json");

    run_cli_failure(
        &["login", "--email", "not-an-email", "--password", "secret123"],
        &creds,
        &api_url(&server),
    )
    .await;

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_rejects_short_password_locally() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let creds = dir.path().join("credentials.json");

    let stderr = run_cli_failure(
        &["login", "--email", "ana@example.com", "--password", "12345"],
        &creds,
        &api_url(&server),
    )
    .await;

    assert!(stderr.contains("at least 6"));
    assert!(server.received_requests().await.unwrap().is_empty());
    assert!(!creds.exists());
}

#[tokio::test]
async fn test_whoami_and_logout() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let creds = dir.path().join("credentials.json");
    write_credentials(&creds, "access-a", "refresh-a");

    let stdout = run_cli_success(&["whoami"], &creds, &api_url(&server)).await;
    assert!(stdout.contains("logged in"));
    assert!(!stdout.contains("not logged in"));

    run_cli_success(&["logout"], &creds, &api_url(&server)).await;
    assert!(!creds.exists());

    let stdout = run_cli_success(&["status"], &creds, &api_url(&server)).await;
    assert!(stdout.contains("not logged in"));
}

// ============================================================================
// Authenticated commands
// ============================================================================

#[tokio::test]
async fn test_animal_list_uses_stored_token() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let creds = dir.path().join("credentials.json");
    write_credentials(&creds, "access-a", "refresh-a");

    Mock::given(method("GET"))
        .and(path("/animal"))
        .and(header("authorization", "Bearer access-a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"idAnimal": 1, "nomeAnimal": "Thor"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&["animal", "list"], &creds, &api_url(&server)).await;

    let animal: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(animal["idAnimal"], 1);
    assert_eq!(animal["nomeAnimal"], "Thor");
}

#[tokio::test]
async fn test_expired_session_clears_credentials() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let creds = dir.path().join("credentials.json");
    write_credentials(&creds, "access-a", "refresh-a");

    Mock::given(method("GET"))
        .and(path("/report"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let stderr = run_cli_failure(&["report", "list"], &creds, &api_url(&server)).await;

    assert!(stderr.contains("Session expired"));
    assert!(read_credentials(&creds).is_none());
}

#[tokio::test]
async fn test_refresh_command_rotates_tokens() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let creds = dir.path().join("credentials.json");
    write_credentials(&creds, "access-a", "refresh-a");

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({"refreshToken": "refresh-a"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "access-b",
            "refreshToken": "refresh-b"
        })))
        .expect(1)
        .mount(&server)
        .await;

    run_cli_success(&["refresh"], &creds, &api_url(&server)).await;

    let stored = read_credentials(&creds).unwrap();
    assert_eq!(stored["accessToken"], "access-b");
}

#[tokio::test]
async fn test_register_reports_duplicate() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let creds = dir.path().join("credentials.json");

    Mock::given(method("POST"))
        .and(path("/pessoa"))
        .respond_with(ResponseTemplate::new(409))
        .expect(1)
        .mount(&server)
        .await;

    let stderr = run_cli_failure(
        &[
            "register",
            "--name",
            "Ana Souza",
            "--cpf",
            "529.982.247-25",
            "--phone",
            "(11) 98765-4321",
            "--email",
            "ana@example.com",
            "--password",
            "segredo1",
        ],
        &creds,
        &api_url(&server),
    )
    .await;

    assert!(stderr.contains("CPF or e-mail already registered"));
}

#[tokio::test]
async fn test_register_rejects_short_password_locally() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let creds = dir.path().join("credentials.json");

    let stderr = run_cli_failure(
        &[
            "register",
            "--name",
            "Ana Souza",
            "--cpf",
            "52998224725",
            "--phone",
            "11987654321",
            "--email",
            "ana@example.com",
            "--password",
            "12345",
        ],
        &creds,
        &api_url(&server),
    )
    .await;

    assert!(stderr.contains("at least 6"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Local field commands
// ============================================================================

#[tokio::test]
async fn test_cpf_commands() {
    let dir = TempDir::new().unwrap();
    let creds = dir.path().join("credentials.json");
    let url = "http://127.0.0.1:9";

    let stdout = run_cli_success(&["cpf", "validate", "52998224725"], &creds, url).await;
    assert!(stdout.contains("529.982.247-25"));

    let stderr = run_cli_failure(&["cpf", "validate", "111.111.111-11"], &creds, url).await;
    assert!(stderr.contains("identical"));

    let stdout = run_cli_success(&["cpf", "format", "5299822"], &creds, url).await;
    assert_eq!(stdout.trim(), "529.982.2");
}

#[tokio::test]
async fn test_phone_commands() {
    let dir = TempDir::new().unwrap();
    let creds = dir.path().join("credentials.json");
    let url = "http://127.0.0.1:9";

    let stdout = run_cli_success(&["phone", "format", "11987654321"], &creds, url).await;
    assert_eq!(stdout.trim(), "(11) 98765-4321");

    run_cli_failure(&["phone", "validate", "1198765"], &creds, url).await;
}
