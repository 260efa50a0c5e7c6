use reclamation_portal::{AppConfig, Env};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

// Environment variables are process-global, so every test here is
// serialized and restores what it touches.

fn clear_portal_vars() {
    // SAFETY: tests in this file run serially and nothing else reads the
    // environment concurrently.
    unsafe {
        env::remove_var("APP_ENV");
        env::remove_var("AUTH_BASE_URL");
        env::remove_var("SESSION_FILE");
    }
}

#[test]
#[serial]
fn load_defaults_to_local() {
    clear_portal_vars();

    let config = AppConfig::load();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.auth_base_url, "http://localhost:8000/api");
}

#[test]
#[serial]
fn load_honors_explicit_overrides() {
    clear_portal_vars();
    // SAFETY: serialized test, see above.
    unsafe {
        env::set_var("APP_ENV", "production");
        env::set_var("AUTH_BASE_URL", "https://reclamation.example/api");
        env::set_var("SESSION_FILE", "/var/lib/portal/session.json");
    }

    let config = AppConfig::load();
    assert_eq!(config.env, Env::Production);
    assert_eq!(config.auth_base_url, "https://reclamation.example/api");
    assert_eq!(
        config.session_path,
        PathBuf::from("/var/lib/portal/session.json")
    );

    clear_portal_vars();
}

#[test]
#[serial]
fn unknown_app_env_falls_back_to_local() {
    clear_portal_vars();
    // SAFETY: serialized test, see above.
    unsafe {
        env::set_var("APP_ENV", "staging");
    }

    let config = AppConfig::load();
    assert_eq!(config.env, Env::Local);

    clear_portal_vars();
}

#[test]
fn default_config_is_safe_for_tests() {
    // No environment required, no panics, usable paths.
    let config = AppConfig::default();
    assert_eq!(config.env, Env::Local);
    assert!(config.session_path.ends_with("reclamation-session.json"));
}
