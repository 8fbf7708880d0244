//! Test helpers shared across docusense integration tests

use docusense::config::AppConfig;
use tempfile::TempDir;

/// Creates a temporary directory for test artifacts
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Creates a test configuration backed by an in-memory SQLite database
pub fn create_test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.database_url = "sqlite::memory:".to_string();
    config
}

/// Creates a test configuration backed by a file-based SQLite database
/// inside `temp_dir`
pub fn create_test_config_with_file(temp_dir: &TempDir) -> AppConfig {
    let db_path = temp_dir.path().join("test.db");
    let mut config = AppConfig::default();
    config.storage.database_url = format!("sqlite://{}", db_path.to_str().unwrap());
    config
}

/// Checks if Ollama is running and accessible
pub async fn is_ollama_available() -> bool {
    reqwest::Client::new()
        .get("http://127.0.0.1:11434/api/tags")
        .send()
        .await
        .is_ok()
}

/// Checks if a specific Ollama model is available
pub async fn is_ollama_model_available(model: &str) -> bool {
    if !is_ollama_available().await {
        return false;
    }

    let response = reqwest::Client::new()
        .get("http://127.0.0.1:11434/api/tags")
        .send()
        .await;

    if let Ok(resp) = response {
        if let Ok(json) = resp.json::<serde_json::Value>().await {
            if let Some(models) = json.get("models").and_then(|m| m.as_array()) {
                return models.iter().any(|m| {
                    m.get("name")
                        .and_then(|n| n.as_str())
                        .map(|name| name.contains(model))
                        .unwrap_or(false)
                });
            }
        }
    }

    false
}

/// Waits for a condition to be true with timeout
pub async fn wait_for_condition<F>(mut condition: F, timeout_secs: u64) -> bool
where
    F: FnMut() -> bool,
{
    let start = std::time::Instant::now();
    let timeout = std::time::Duration::from_secs(timeout_secs);

    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_config() {
        let config = create_test_config();
        assert_eq!(config.storage.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_create_test_dir() {
        let dir = create_test_dir();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_create_test_config_with_file() {
        let dir = create_test_dir();
        let config = create_test_config_with_file(&dir);
        assert!(config.storage.database_url.starts_with("sqlite://"));
    }

    #[tokio::test]
    async fn test_wait_for_condition() {
        let mut counter = 0;
        let result = wait_for_condition(
            || {
                counter += 1;
                counter >= 3
            },
            1,
        )
        .await;
        assert!(result);
        assert!(counter >= 3);
    }
}
