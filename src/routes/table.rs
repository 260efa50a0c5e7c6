use std::collections::HashMap;

use crate::models::Role;

/// RoleRoutes
///
/// The areas of the portal a single role may enter, plus its designated home
/// route, the default landing destination immediately after login. The home
/// always lives under one of the role's own prefixes.
#[derive(Debug, Clone)]
pub struct RoleRoutes {
    pub prefixes: Vec<String>,
    pub home: String,
}

/// RouteTable
///
/// Static configuration mapping each role to its allowed path prefixes,
/// alongside the globally public prefixes (login, register, access-denied)
/// reachable regardless of session state. Loaded once at startup and
/// immutable thereafter; every navigation decision reads from it.
#[derive(Debug, Clone)]
pub struct RouteTable {
    public: Vec<String>,
    roles: HashMap<Role, RoleRoutes>,
}

impl RouteTable {
    /// new
    ///
    /// Builds a table from explicit parts. Prefixes are normalized on entry
    /// so matching never has to worry about trailing slashes.
    pub fn new(public: Vec<String>, roles: HashMap<Role, RoleRoutes>) -> Self {
        let public = public.into_iter().map(|p| normalize(&p)).collect();
        let roles = roles
            .into_iter()
            .map(|(role, r)| {
                (
                    role,
                    RoleRoutes {
                        prefixes: r.prefixes.iter().map(|p| normalize(p)).collect(),
                        home: normalize(&r.home),
                    },
                )
            })
            .collect();
        Self { public, roles }
    }

    /// portal_defaults
    ///
    /// The fixed production table for the reclamation portal. Each role owns
    /// exactly one dashboard area; the areas are disjoint by construction,
    /// so prefix matching never needs specificity rules.
    pub fn portal_defaults() -> Self {
        let mut roles = HashMap::new();
        roles.insert(
            Role::User,
            RoleRoutes {
                prefixes: vec!["/user-dashboard".into()],
                home: "/user-dashboard".into(),
            },
        );
        roles.insert(
            Role::Guichetier,
            RoleRoutes {
                prefixes: vec!["/guichetier-dashboard".into()],
                home: "/guichetier-dashboard".into(),
            },
        );
        roles.insert(
            Role::Employee,
            RoleRoutes {
                prefixes: vec!["/employee-dashboard".into()],
                home: "/employee-dashboard/tasks".into(),
            },
        );
        roles.insert(
            Role::Admin,
            RoleRoutes {
                prefixes: vec!["/admin-dashboard".into()],
                home: "/admin-dashboard/users".into(),
            },
        );
        roles.insert(
            Role::Director,
            RoleRoutes {
                prefixes: vec!["/director-dashboard".into()],
                home: "/director-dashboard/reports".into(),
            },
        );

        Self::new(
            vec![
                "/login".into(),
                "/register".into(),
                "/access-denied".into(),
            ],
            roles,
        )
    }

    /// is_public
    ///
    /// True when the path falls under one of the public prefixes. Public
    /// routes are reachable by anyone, authenticated or not.
    pub fn is_public(&self, path: &str) -> bool {
        let path = normalize(path);
        self.public.iter().any(|p| prefix_matches(&path, p))
    }

    /// allows
    ///
    /// True when the path falls under one of the role's allowed prefixes.
    /// A role missing from the table has no allowed prefixes at all.
    pub fn allows(&self, role: Role, path: &str) -> bool {
        let path = normalize(path);
        self.roles
            .get(&role)
            .is_some_and(|r| r.prefixes.iter().any(|p| prefix_matches(&path, p)))
    }

    /// home
    ///
    /// The role's designated post-login landing route, if the role is known
    /// to the table.
    pub fn home(&self, role: Role) -> Option<&str> {
        self.roles.get(&role).map(|r| r.home.as_str())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::portal_defaults()
    }
}

/// normalize
///
/// Canonicalizes a path for matching: trailing slashes stripped, with the
/// bare root `/` preserved. `/login/` and `/login` are the same screen.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// prefix_matches
///
/// Segment-aware prefix containment on normalized inputs: `/user-dashboard`
/// contains itself and `/user-dashboard/track`, but not `/user-dashboardx`.
fn prefix_matches(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}
