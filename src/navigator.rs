use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{AuthError, AuthState};
use crate::models::Role;
use crate::routes::{Decision, RouteTable, authorize};
use crate::session::SessionState;

/// Navigator
///
/// The decision-application layer between the navigation host and the pure
/// route guard. It owns the shared state (session store, authentication
/// collaborator, route table) and exposes the operations the
/// host calls: evaluate a navigation, log in, log out, react to a 401.
///
/// The navigator itself holds no mutable state; everything mutable lives in
/// the `SessionStore`, so cloning is cheap and decisions stay deterministic.
#[derive(Clone)]
pub struct Navigator {
    pub session: SessionState,
    pub auth: AuthState,
    pub routes: Arc<RouteTable>,
}

impl Navigator {
    pub fn new(session: SessionState, auth: AuthState, routes: Arc<RouteTable>) -> Self {
        Self {
            session,
            auth,
            routes,
        }
    }

    /// evaluate
    ///
    /// The single entry point the host invokes on every route change: reads
    /// the current session record and runs the guard. Read-only; never
    /// mutates the store.
    pub fn evaluate(&self, path: &str) -> Decision {
        let record = self.session.get();
        let decision = authorize(record.as_ref(), path, &self.routes);
        tracing::debug!(path, ?decision, "route evaluated");
        decision
    }

    /// login
    ///
    /// Runs the full login flow against the authentication collaborator.
    ///
    /// On success the returned role string is validated against the closed
    /// enumeration *before* anything is written: an out-of-enumeration role
    /// is a hard `AuthError::UnknownRole` and the store stays untouched.
    /// Only then is the full record persisted, and the role's designated
    /// home route returned as the post-login destination.
    ///
    /// On any failure the store is left exactly as it was.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<String, AuthError> {
        // Correlation id so the attempt's log lines can be tied together
        // without ever logging the identifier or secret.
        let attempt_id = Uuid::new_v4();
        tracing::info!(%attempt_id, "login attempt started");

        let response = self.auth.login(identifier, secret).await.map_err(|e| {
            tracing::info!(%attempt_id, error = %e, "login attempt failed");
            e
        })?;

        let role = Role::from_str(&response.role)
            .map_err(|unknown| AuthError::UnknownRole(unknown.0))?;

        let home = self
            .routes
            .home(role)
            // The default table covers every enumerated role; a custom table
            // that omits one means the role has nowhere to land.
            .ok_or_else(|| AuthError::UnknownRole(role.to_string()))?
            .to_string();

        self.session.set(&response.into_record());
        tracing::info!(%attempt_id, %role, home, "login succeeded");

        Ok(home)
    }

    /// logout
    ///
    /// Clears the session on explicit user action, then re-evaluates the
    /// path the actor is currently on. With the session now absent this
    /// yields `RedirectToLogin` unless the current path is already public.
    pub fn logout(&self, current_path: &str) -> Decision {
        tracing::info!("logout requested");
        self.invalidate(current_path)
    }

    /// invalidate
    ///
    /// The 401-class signal path: any API collaborator observing an expired
    /// or revoked credential triggers this. Identical effect to logout:
    /// clear, then re-evaluate the current position.
    pub fn invalidate(&self, current_path: &str) -> Decision {
        self.session.clear();
        self.evaluate(current_path)
    }
}
