use anyhow::Result;
use hirehub_client::core::form::SubmitOutcome;
use hirehub_client::domain::ports::TOKEN_KEY;
use hirehub_client::{
    ClientConfig, Destination, FileTokenStore, LoginForm, NavigationEffect, NetworkErrorKind,
    SubmissionClient, SubmissionResult, TokenStore, TomlConfig,
};
use httpmock::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

fn test_config(base_url: &str, token_path: &str, timeout_seconds: u64) -> TomlConfig {
    let content = format!(
        r#"
[app]
name = "hirehub-test"

[api]
base_url = "{base_url}"
timeout_seconds = {timeout_seconds}

[storage]
token_path = "{token_path}"
"#
    );
    TomlConfig::from_toml_str(&content).unwrap()
}

#[derive(Clone, Default)]
struct RecordingNavigator {
    destinations: Arc<Mutex<Vec<Destination>>>,
}

impl RecordingNavigator {
    fn recorded(&self) -> Vec<Destination> {
        self.destinations.lock().unwrap().clone()
    }
}

impl NavigationEffect for RecordingNavigator {
    fn navigate(&self, destination: Destination) {
        self.destinations.lock().unwrap().push(destination);
    }
}

/// 完整登入流程：驗證 → 請求 → 分類 → 持久化 token → 導航
#[tokio::test]
async fn test_login_end_to_end_persists_token_under_fixed_key() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let token_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let server = MockServer::start();
    let login_mock = server.mock(|when, then| {
        when.method(POST).path("/login").json_body(serde_json::json!({
            "contact": "+919876543210",
            "password": "Passw0rd!"
        }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"token": "abc123"}));
    });

    let config = test_config(&server.base_url(), &token_path, 10);
    config.validate_config()?;

    let client = SubmissionClient::new(&config)?;
    let store = FileTokenStore::new(config.token_path().to_string());
    let navigator = RecordingNavigator::default();
    let form = LoginForm::new(client, store.clone(), navigator.clone());

    // 10-digit identifier gets the country prefix before it goes on the wire.
    let outcome = form.submit("9876543210", "Passw0rd!").await?;

    login_mock.assert();
    assert!(matches!(
        outcome,
        SubmitOutcome::Completed(SubmissionResult::Success { .. })
    ));
    assert_eq!(navigator.recorded(), vec![Destination::RoleSelection]);

    // Token lands in a file named after the fixed storage key.
    assert_eq!(store.load_token().await?.as_deref(), Some("abc123"));
    assert!(temp_dir.path().join(TOKEN_KEY).exists());

    Ok(())
}

#[tokio::test]
async fn test_login_rejection_surfaces_server_message() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let token_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(401)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "Invalid credentials"}));
    });

    let config = test_config(&server.base_url(), &token_path, 10);
    let client = SubmissionClient::new(&config)?;
    let store = FileTokenStore::new(config.token_path().to_string());
    let navigator = RecordingNavigator::default();
    let form = LoginForm::new(client, store.clone(), navigator.clone());

    let outcome = form.submit("user@example.com", "Passw0rd!").await?;

    assert_eq!(
        outcome,
        SubmitOutcome::Completed(SubmissionResult::ApiError {
            message: "Invalid credentials".to_string(),
        })
    );
    assert_eq!(store.load_token().await?, None);
    assert!(navigator.recorded().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_login_unparseable_error_body_falls_back_to_generic_message() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let token_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(502)
            .header("Content-Type", "text/html")
            .body("<html>Bad Gateway</html>");
    });

    let config = test_config(&server.base_url(), &token_path, 10);
    let client = SubmissionClient::new(&config)?;
    let form = LoginForm::new(
        client,
        FileTokenStore::new(config.token_path().to_string()),
        RecordingNavigator::default(),
    );

    let outcome = form.submit("user@example.com", "Passw0rd!").await?;

    assert_eq!(
        outcome,
        SubmitOutcome::Completed(SubmissionResult::ApiError {
            message: "An error occurred".to_string(),
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_timeout_classifies_with_fixed_user_message() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let token_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"token": "late"}))
            .delay(Duration::from_secs(3));
    });

    // Client timeout below the mock delay forces the timeout path.
    let config = test_config(&server.base_url(), &token_path, 1);
    let client = SubmissionClient::new(&config)?;
    let store = FileTokenStore::new(config.token_path().to_string());
    let navigator = RecordingNavigator::default();
    let form = LoginForm::new(client, store.clone(), navigator.clone());

    let outcome = form.submit("user@example.com", "Passw0rd!").await?;

    match outcome {
        SubmitOutcome::Completed(SubmissionResult::NetworkError { kind, detail }) => {
            assert_eq!(kind, NetworkErrorKind::Timeout);
            assert_eq!(kind.user_message(), "Request timed out. Please try again.");
            assert!(!detail.is_empty());
        }
        other => panic!("expected timeout network error, got {:?}", other),
    }

    // No retry, no persisted token, no navigation.
    assert_eq!(store.load_token().await?, None);
    assert!(navigator.recorded().is_empty());
    assert!(!form.is_submitting());

    Ok(())
}

#[tokio::test]
async fn test_rapid_double_submit_dispatches_exactly_one_request() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let token_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let server = MockServer::start();
    let login_mock = server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"token": "abc123"}))
            .delay(Duration::from_millis(300));
    });

    let config = test_config(&server.base_url(), &token_path, 10);
    let client = SubmissionClient::new(&config)?;
    let form = Arc::new(LoginForm::new(
        client,
        FileTokenStore::new(config.token_path().to_string()),
        RecordingNavigator::default(),
    ));

    let (first, second) = tokio::join!(
        form.submit("user@example.com", "Passw0rd!"),
        form.submit("user@example.com", "Passw0rd!"),
    );

    let outcomes = [first?, second?];
    assert_eq!(
        outcomes
            .iter()
            .filter(|outcome| **outcome == SubmitOutcome::Blocked)
            .count(),
        1
    );
    login_mock.assert_hits(1);

    Ok(())
}

#[tokio::test]
async fn test_validation_failure_never_reaches_the_network() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let token_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let server = MockServer::start();
    let login_mock = server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200);
    });

    let config = test_config(&server.base_url(), &token_path, 10);
    let client = SubmissionClient::new(&config)?;
    let form = LoginForm::new(
        client,
        FileTokenStore::new(config.token_path().to_string()),
        RecordingNavigator::default(),
    );

    // Weak password fails the composition policy locally.
    let outcome = form.submit("user@example.com", "weak").await?;

    match outcome {
        SubmitOutcome::Invalid(errors) => assert_eq!(errors.len(), 1),
        other => panic!("expected Invalid, got {:?}", other),
    }
    login_mock.assert_hits(0);

    Ok(())
}
