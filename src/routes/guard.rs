use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::SessionRecord;
use crate::routes::table::RouteTable;

/// Decision
///
/// The authorization engine's entire output: the host either renders the
/// requested view or navigates to one of the two fixed redirect targets.
/// A `Decision` causes no side effect itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Decision {
    /// Render the requested view.
    Allow,
    /// No usable session; send the actor to the login screen.
    RedirectToLogin,
    /// Authenticated, but the role has no access to this area.
    RedirectToAccessDenied,
}

impl Decision {
    /// redirect_target
    ///
    /// The destination the navigation host should move to, or `None` for
    /// `Allow`. The two targets are fixed public routes, so acting on a
    /// redirect can never itself be redirected.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Decision::Allow => None,
            Decision::RedirectToLogin => Some("/login"),
            Decision::RedirectToAccessDenied => Some("/access-denied"),
        }
    }
}

/// authorize
///
/// The route guard: given the stored session record (if any), the requested
/// path, and the static route table, produce exactly one `Decision`.
///
/// The rules apply in order, first match wins:
/// 1. Public prefixes are reachable by anyone, whatever the session holds.
/// 2. An absent, credential-less, or unrecognized-role session is anonymous
///    and gets sent to login.
/// 3. A path under one of the role's allowed prefixes is rendered.
/// 4. Anything else is a cross-role access attempt: access denied.
///
/// Pure and deterministic: no I/O, no clock, no mutation. Calling it twice
/// with identical inputs yields identical output.
pub fn authorize(record: Option<&SessionRecord>, path: &str, table: &RouteTable) -> Decision {
    if table.is_public(path) {
        return Decision::Allow;
    }

    // Invalid stored state degrades to anonymous rather than erroring: the
    // actor simply has to log in again.
    let Some(session) = record.and_then(SessionRecord::authenticate) else {
        return Decision::RedirectToLogin;
    };

    if table.allows(session.role, path) {
        Decision::Allow
    } else {
        Decision::RedirectToAccessDenied
    }
}

