// --- Module Structure ---

// Core engine components.
pub mod auth;
pub mod config;
pub mod models;
pub mod navigator;
pub mod session;

// Module for routing decisions (static table + pure guard).
pub mod routes;

// --- Public Re-exports ---

// Makes the engine's surface easily accessible to the host entry point
// (main.rs) and to embedding frontends.
pub use auth::{AuthError, AuthService, AuthState, HttpAuthClient, MockAuthService};
pub use config::{AppConfig, Env};
pub use models::{LoginRequest, LoginResponse, Role, Session, SessionRecord};
pub use navigator::Navigator;
pub use routes::{Decision, RouteTable, authorize};
pub use session::{FileSessionStore, MemorySessionStore, SessionState, SessionStore};
