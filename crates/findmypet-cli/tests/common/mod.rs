use std::path::Path;
use std::process::Output;

use tokio::process::Command;

/// Run the CLI binary against `api_url` with an isolated credentials file.
pub async fn run_cli(args: &[&str], credentials: &Path, api_url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_findmypet"))
        .args(args)
        .env("FINDMYPET_API_URL", api_url)
        .env("FINDMYPET_CREDENTIALS", credentials)
        .env("FINDMYPET_TIMEOUT_SECS", "5")
        .env_remove("FINDMYPET_PASSWORD")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub async fn run_cli_success(args: &[&str], credentials: &Path, api_url: &str) -> String {
    let output = run_cli(args, credentials, api_url).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub async fn run_cli_failure(args: &[&str], credentials: &Path, api_url: &str) -> String {
    let output = run_cli(args, credentials, api_url).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Write a token pair the way the credential store does.
pub fn write_credentials(path: &Path, access: &str, refresh: &str) {
    let json = serde_json::json!({"accessToken": access, "refreshToken": refresh});
    std::fs::write(path, serde_json::to_string_pretty(&json).unwrap()).unwrap();
}

/// Read back the stored pair, if any.
pub fn read_credentials(path: &Path) -> Option<serde_json::Value> {
    let json = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&json).ok()
}
