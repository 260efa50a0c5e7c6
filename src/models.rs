use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

// --- Core Session Schemas (Persisted Client-Side) ---

/// Role
///
/// The closed enumeration of actor roles recognized by the portal.
/// Authorization decisions are keyed exclusively on this type: a role string
/// that does not parse into one of these variants is an *unrecognized* role,
/// and the session carrying it is treated as unauthenticated for routing
/// purposes (see `SessionRecord::authenticate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    /// Citizen submitting and tracking their own reclamations.
    User,
    /// Front-desk clerk triaging incoming reclamations.
    Guichetier,
    /// Back-office employee working assigned reclamation tasks.
    Employee,
    /// Administrator managing accounts and portal configuration.
    Admin,
    /// Director consuming aggregate reports and statistics.
    Director,
}

impl Role {
    /// All recognized roles, in a fixed order. Used to build the default
    /// route table and to iterate in tests.
    pub const ALL: [Role; 5] = [
        Role::User,
        Role::Guichetier,
        Role::Employee,
        Role::Admin,
        Role::Director,
    ];

    /// The canonical wire spelling of the role, matching the values the
    /// authentication collaborator returns and the persisted session layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Guichetier => "guichetier",
            Role::Employee => "employee",
            Role::Admin => "admin",
            Role::Director => "director",
        }
    }
}

/// UnknownRole
///
/// Parse failure marker carrying the offending role string. Surfaced to the
/// login flow so an out-of-enumeration role from the collaborator is an
/// explicit error rather than a silently misassigned privilege.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized role '{}'", self.0)
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "guichetier" => Ok(Role::Guichetier),
            "employee" => Ok(Role::Employee),
            "admin" => Ok(Role::Admin),
            "director" => Ok(Role::Director),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SessionRecord
///
/// The flat, all-string session layout as persisted by the SessionStore.
/// This is the *untrusted* shape: `role` is kept as a plain string because
/// stored data may be stale or hand-edited, and the routing invariant demands
/// that malformed records degrade to "anonymous" rather than fail.
///
/// Absent optional keys are semantically equivalent to "not set", which
/// `#[serde(skip_serializing_if)]` preserves across the JSON round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct SessionRecord {
    /// Opaque bearer credential issued by the authentication collaborator.
    /// The engine never inspects or verifies it; it only requires presence.
    pub credential: String,
    /// Role string as received from the collaborator. Validated lazily.
    pub role: String,

    // Descriptive attributes. Carried for display purposes only; none of
    // them participate in authorization decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ministry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl SessionRecord {
    /// authenticate
    ///
    /// Validates the record into a typed `Session`, enforcing the core
    /// invariant: a record with an empty credential, or a role outside the
    /// closed enumeration, is treated as unauthenticated (`None`).
    ///
    /// This is the single validation gate between stored state and the
    /// route authorizer; nothing downstream re-checks the role string.
    pub fn authenticate(&self) -> Option<Session> {
        if self.credential.is_empty() {
            return None;
        }
        let role = Role::from_str(&self.role).ok()?;
        Some(Session {
            credential: self.credential.clone(),
            role,
            department: self.department.clone(),
            ministry: self.ministry.clone(),
            service: self.service.clone(),
            display_name: self.display_name.clone(),
            user_id: self.user_id.clone(),
        })
    }
}

/// Session
///
/// The validated view of a `SessionRecord`: credential known non-empty and
/// role parsed into the closed enumeration. Only obtainable through
/// `SessionRecord::authenticate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub credential: String,
    pub role: Role,
    pub department: Option<String>,
    pub ministry: Option<String>,
    pub service: Option<String>,
    pub display_name: Option<String>,
    pub user_id: Option<String>,
}

// --- Collaborator Payloads (Authentication Boundary) ---

/// LoginRequest
///
/// Input payload posted to the authentication collaborator. The secret is
/// passed through verbatim and never persisted or logged by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct LoginRequest {
    pub identifier: String,
    pub secret: String,
}

/// LoginResponse
///
/// Success payload returned by the authentication collaborator. The `role`
/// arrives as a plain string and is validated against the `Role` enumeration
/// by the login flow before anything is written to the SessionStore.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct LoginResponse {
    pub credential: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ministry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl LoginResponse {
    /// into_record
    ///
    /// Converts the collaborator payload into the flat persisted layout.
    /// Purely structural; role validation happens separately in the login
    /// flow so a bad role never reaches the store.
    pub fn into_record(self) -> SessionRecord {
        SessionRecord {
            credential: self.credential,
            role: self.role,
            department: self.department,
            ministry: self.ministry,
            service: self.service,
            display_name: self.display_name,
            user_id: self.user_id,
        }
    }
}
