//! Environment variable precedence

use cardwall_config::{ConfigProvider, FileDiscovery};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

struct EnvGuard(&'static [&'static str]);

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in self.0 {
            std::env::remove_var(key);
        }
    }
}

fn isolated() -> (TempDir, TempDir, ConfigProvider) {
    let global = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let provider = ConfigProvider::with_discovery(FileDiscovery::with_dirs(
        Some(global.path().to_path_buf()),
        Some(project.path().to_path_buf()),
    ));
    (global, project, provider)
}

#[test]
#[serial]
fn test_env_overrides_files() {
    let _guard = EnvGuard(&["CARDWALL_API__BASE_URL", "CARDWALL_LOG__LEVEL"]);
    let (_global, project, provider) = isolated();
    fs::write(
        project.path().join("config.toml"),
        "[api]\nbase_url = \"http://from-file:1\"\ntimeout_secs = 5\n",
    )
    .unwrap();

    std::env::set_var("CARDWALL_API__BASE_URL", "https://from-env.example.com");
    std::env::set_var("CARDWALL_LOG__LEVEL", "trace");

    let config = provider.load().unwrap();
    assert_eq!(config.api.base_url, "https://from-env.example.com");
    assert_eq!(config.api.timeout_secs, 5);
    assert_eq!(config.log.level, "trace");
}

#[test]
#[serial]
fn test_env_session_cookie() {
    let _guard = EnvGuard(&["CARDWALL_API__SESSION_COOKIE"]);
    let (_global, _project, provider) = isolated();

    std::env::set_var("CARDWALL_API__SESSION_COOKIE", "abc123");

    let config = provider.load().unwrap();
    assert_eq!(config.api.session_cookie.as_deref(), Some("abc123"));
}

#[test]
#[serial]
fn test_invalid_env_value_fails_validation() {
    let _guard = EnvGuard(&["CARDWALL_API__BASE_URL"]);
    let (_global, _project, provider) = isolated();

    std::env::set_var("CARDWALL_API__BASE_URL", "file:///etc/passwd");

    let err = provider.load().unwrap_err();
    assert!(err.to_string().contains("api.base_url"));
}
