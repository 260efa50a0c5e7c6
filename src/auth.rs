use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{LoginRequest, LoginResponse};

/// AuthError
///
/// Failures at the authentication boundary. These are the only errors the
/// engine ever surfaces to the host: authorization outcomes are `Decision`
/// values, never errors. In every variant the SessionStore is left untouched.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The collaborator rejected the credentials or reported a failure.
    /// The message is user-visible (wrong password, locked account, ...).
    #[error("authentication failed: {0}")]
    Rejected(String),

    /// The collaborator could not be reached or returned garbage.
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),

    /// The collaborator answered with a role outside the closed enumeration.
    /// Treated as a failed login rather than a guessable privilege.
    #[error("authentication returned an unrecognized role '{0}'")]
    UnknownRole(String),
}

// 1. AuthService Contract
/// AuthService
///
/// The consumed contract of the external authentication collaborator. The
/// engine does not authenticate anyone itself; it hands the identifier and
/// secret to this service and trusts the opaque credential it gets back.
///
/// The trait split lets tests drive the login flow with `MockAuthService`
/// while production talks HTTP through `HttpAuthClient`.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Attempts to authenticate. On success returns the credential, role
    /// string, and descriptive attributes; on failure, an `AuthError`.
    async fn login(&self, identifier: &str, secret: &str) -> Result<LoginResponse, AuthError>;
}

// 2. The Real Implementation (HTTP)
/// HttpAuthClient
///
/// The concrete collaborator client, posting the login payload to the remote
/// reclamation service. The returned credential is opaque: this client never
/// decodes, verifies, or refreshes it.
#[derive(Clone)]
pub struct HttpAuthClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    /// new
    ///
    /// Constructs the client against the service base URL from AppConfig.
    /// Trailing slashes are trimmed so URL joining stays predictable.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AuthService for HttpAuthClient {
    async fn login(&self, identifier: &str, secret: &str) -> Result<LoginResponse, AuthError> {
        let payload = LoginRequest {
            identifier: identifier.to_string(),
            secret: secret.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The service reports the user-visible reason in the body; fall
            // back to the status line when it doesn't.
            let reason = response
                .text()
                .await
                .ok()
                .filter(|body| !body.is_empty())
                .unwrap_or_else(|| status.to_string());
            return Err(AuthError::Rejected(reason));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))
    }
}

// 3. The Mock Implementation (For Unit Tests)
/// MockAuthService
///
/// A mock collaborator used exclusively for testing the login flow without a
/// network connection. Configured either to succeed with a fixed payload or
/// to fail with a fixed message.
pub struct MockAuthService {
    outcome: Result<LoginResponse, String>,
}

impl MockAuthService {
    /// A collaborator that accepts any credentials and returns `response`.
    pub fn succeeding(response: LoginResponse) -> Self {
        Self {
            outcome: Ok(response),
        }
    }

    /// A collaborator that rejects any credentials with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, _identifier: &str, _secret: &str) -> Result<LoginResponse, AuthError> {
        match &self.outcome {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(AuthError::Rejected(message.clone())),
        }
    }
}

/// AuthState
///
/// The concrete type used to share the authentication collaborator across
/// the navigator and the host.
pub type AuthState = Arc<dyn AuthService>;
