//! Server Startup Tests
//!
//! Tests for server lifecycle, configuration loading, and startup behavior.
//! The binary is started as a child process so that the real `main` runs:
//! configuration is resolved before anything binds, and a missing Retell
//! key must stop the process.

mod mock_upstream;

use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use serde_json::json;
use tempfile::TempDir;
use tokio::time::{sleep, timeout};

use mock_upstream::find_available_port;

const BINARY: &str = env!("CARGO_BIN_EXE_retell-gateway");

/// Kills the child process when the test ends, pass or fail
struct ServerProcess(Child);

impl Drop for ServerProcess {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

/// A command with a clean environment, run from an empty directory so that no
/// stray `.env` file is picked up.
fn gateway_command(work_dir: &TempDir) -> Command {
    let mut command = Command::new(BINARY);
    command
        .env_clear()
        .env("RUST_LOG", "info")
        .current_dir(work_dir.path())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    command
}

async fn wait_for_health(port: u16) -> bool {
    let client = reqwest::Client::new();
    let url = format!("http://127.0.0.1:{port}/");

    let poll = async {
        loop {
            if let Ok(response) = client.get(&url).send().await {
                if response.status().is_success() {
                    return response.json::<serde_json::Value>().await.ok();
                }
            }
            sleep(Duration::from_millis(100)).await;
        }
    };

    matches!(
        timeout(Duration::from_secs(15), poll).await,
        Ok(Some(body)) if body == json!({"status": "OK"})
    )
}

/// Test that a missing RETELL_API_KEY stops the process before it binds
#[test]
fn test_missing_api_key_fails_fast() {
    let work_dir = TempDir::new().unwrap();
    let port = find_available_port();

    let output = gateway_command(&work_dir)
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .output()
        .expect("Failed to run gateway binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("RETELL_API_KEY"),
        "stderr should name the missing variable, got: {stderr}"
    );

    // Nothing was left listening on the port
    assert!(TcpListener::bind(("127.0.0.1", port)).is_ok());
}

/// Test that a blank RETELL_API_KEY is treated as missing
#[test]
fn test_blank_api_key_fails_fast() {
    let work_dir = TempDir::new().unwrap();

    let output = gateway_command(&work_dir)
        .env("RETELL_API_KEY", "   ")
        .env("PORT", find_available_port().to_string())
        .output()
        .expect("Failed to run gateway binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("RETELL_API_KEY"));
}

/// Test that an invalid numeric setting is reported instead of defaulted
#[test]
fn test_invalid_port_fails_fast() {
    let work_dir = TempDir::new().unwrap();

    let output = gateway_command(&work_dir)
        .env("RETELL_API_KEY", "key_test_123")
        .env("PORT", "not-a-port")
        .output()
        .expect("Failed to run gateway binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("PORT"));
}

/// Test that the server starts from environment variables and serves health
#[tokio::test]
async fn test_server_starts_from_environment() {
    let work_dir = TempDir::new().unwrap();
    let port = find_available_port();

    let child = gateway_command(&work_dir)
        .env("RETELL_API_KEY", "key_test_123")
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .spawn()
        .expect("Failed to spawn gateway binary");
    let _server = ServerProcess(child);

    assert!(wait_for_health(port).await, "server did not become healthy");
}

/// Test that the server starts from a .env file in the working directory
#[tokio::test]
async fn test_server_starts_from_dotenv_file() {
    let work_dir = TempDir::new().unwrap();
    let port = find_available_port();
    std::fs::write(
        work_dir.path().join(".env"),
        format!("RETELL_API_KEY=key_from_dotenv\nHOST=127.0.0.1\nPORT={port}\n"),
    )
    .unwrap();

    let child = gateway_command(&work_dir)
        .spawn()
        .expect("Failed to spawn gateway binary");
    let _server = ServerProcess(child);

    assert!(wait_for_health(port).await, "server did not become healthy");
}

/// Test that the server starts from a YAML file passed with --config
#[tokio::test]
async fn test_server_starts_from_yaml_config() {
    let work_dir = TempDir::new().unwrap();
    let port = find_available_port();
    let config_path = work_dir.path().join("config.yaml");
    std::fs::write(
        &config_path,
        format!(
            "server:\n  host: \"127.0.0.1\"\n  port: {port}\nretell:\n  api_key: \"key_from_yaml\"\n"
        ),
    )
    .unwrap();

    let child = gateway_command(&work_dir)
        .arg("--config")
        .arg(&config_path)
        .spawn()
        .expect("Failed to spawn gateway binary");
    let _server = ServerProcess(child);

    assert!(wait_for_health(port).await, "server did not become healthy");
}
