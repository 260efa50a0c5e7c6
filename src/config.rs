use std::env;
use std::path::PathBuf;

/// AppConfig
///
/// Holds the client engine's entire configuration state. This struct is
/// designed to be immutable once loaded, ensuring every navigation decision
/// in the process sees the same route table location, session file, and
/// collaborator endpoint.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Base URL of the remote reclamation service hosting /auth/login.
    pub auth_base_url: String,
    // Path of the durable session file (the client-side "local storage").
    pub session_path: PathBuf,
    // Runtime environment marker. Controls logging format selection.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, used to switch between human-readable local
/// logging and JSON production logging.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup, without requiring any environment variables.
    fn default() -> Self {
        Self {
            auth_base_url: "http://localhost:8000/api".to_string(),
            session_path: env::temp_dir().join("reclamation-session.json"),
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the configuration at startup.
    /// It reads all parameters from environment variables and implements the
    /// fail-fast principle.
    ///
    /// # Panics
    /// Panics if a critical environment variable required for the current
    /// runtime environment (especially Production) is not found. A client
    /// pointed at no authentication service is better off not starting.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        // The production endpoint is mandatory and must be explicitly set.
        let auth_base_url = match env {
            Env::Production => env::var("AUTH_BASE_URL")
                .expect("FATAL: AUTH_BASE_URL must be set in production."),
            _ => env::var("AUTH_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
        };

        // The session file defaults to a per-user location but can be pinned
        // explicitly (useful for running several portal profiles side by side).
        let session_path = env::var("SESSION_FILE").map(PathBuf::from).unwrap_or_else(|_| {
            dirs_fallback().join("reclamation-portal").join("session.json")
        });

        Self {
            auth_base_url,
            session_path,
            env,
        }
    }
}

/// dirs_fallback
///
/// Resolves the base directory for durable client state: XDG state dir when
/// declared, then the home directory, then the system temp dir as a last
/// resort so the engine still functions (non-durably) in a bare container.
fn dirs_fallback() -> PathBuf {
    if let Ok(dir) = env::var("XDG_STATE_HOME") {
        return PathBuf::from(dir);
    }
    if let Ok(home) = env::var("HOME") {
        return PathBuf::from(home).join(".local").join("state");
    }
    env::temp_dir()
}
