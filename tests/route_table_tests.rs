use reclamation_portal::{Role, RouteTable};
use reclamation_portal::routes::table::normalize;

#[test]
fn normalize_strips_trailing_slashes_but_keeps_root() {
    assert_eq!(normalize("/login/"), "/login");
    assert_eq!(normalize("/login///"), "/login");
    assert_eq!(normalize("/"), "/");
    assert_eq!(normalize(""), "/");
    assert_eq!(normalize("/user-dashboard/track/"), "/user-dashboard/track");
}

#[test]
fn public_prefixes_are_the_three_fixed_screens() {
    let table = RouteTable::portal_defaults();
    assert!(table.is_public("/login"));
    assert!(table.is_public("/register"));
    assert!(table.is_public("/access-denied"));
    assert!(table.is_public("/login/forgot-password"));

    assert!(!table.is_public("/"));
    assert!(!table.is_public("/user-dashboard"));
    assert!(!table.is_public("/loginx"));
}

#[test]
fn every_role_has_a_home_under_its_own_area() {
    let table = RouteTable::portal_defaults();
    for role in Role::ALL {
        let home = table.home(role).expect("default table covers every role");
        assert!(
            table.allows(role, home),
            "{role} home {home} must fall under one of its own prefixes"
        );
    }
}

#[test]
fn role_areas_are_disjoint() {
    let table = RouteTable::portal_defaults();
    for role in Role::ALL {
        for other in Role::ALL {
            if role == other {
                continue;
            }
            let foreign_home = table.home(other).unwrap();
            assert!(
                !table.allows(role, foreign_home),
                "{role} must not be allowed under {foreign_home}"
            );
        }
    }
}

#[test]
fn allows_is_segment_aware() {
    let table = RouteTable::portal_defaults();
    assert!(table.allows(Role::User, "/user-dashboard"));
    assert!(table.allows(Role::User, "/user-dashboard/"));
    assert!(table.allows(Role::User, "/user-dashboard/new-reclamation"));
    assert!(!table.allows(Role::User, "/user-dashboard-archive"));
}

#[test]
fn custom_tables_may_omit_roles() {
    use reclamation_portal::routes::table::RoleRoutes;
    use std::collections::HashMap;

    // A trimmed deployment knowing only the user role: every other role has
    // no prefixes and no home, i.e. no access anywhere non-public.
    let mut roles = HashMap::new();
    roles.insert(
        Role::User,
        RoleRoutes {
            prefixes: vec!["/user-dashboard".into()],
            home: "/user-dashboard".into(),
        },
    );
    let table = RouteTable::new(vec!["/login".into()], roles);

    assert!(table.allows(Role::User, "/user-dashboard"));
    assert!(!table.allows(Role::Admin, "/user-dashboard"));
    assert_eq!(table.home(Role::Admin), None);
}

#[test]
fn table_normalizes_configured_prefixes() {
    use reclamation_portal::routes::table::RoleRoutes;
    use std::collections::HashMap;

    let mut roles = HashMap::new();
    roles.insert(
        Role::Director,
        RoleRoutes {
            prefixes: vec!["/director-dashboard/".into()],
            home: "/director-dashboard/reports/".into(),
        },
    );
    let table = RouteTable::new(vec!["/login/".into()], roles);

    assert!(table.is_public("/login"));
    assert!(table.allows(Role::Director, "/director-dashboard/reports"));
    assert_eq!(table.home(Role::Director), Some("/director-dashboard/reports"));
}
