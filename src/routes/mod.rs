/// Routing Module Index
///
/// Organizes the route-authorization logic into its two halves, keeping the
/// static configuration separate from the decision procedure. This structure
/// ensures access control is expressed in exactly one place (the guard),
/// consulting exactly one source of truth (the table), rather than being
/// scattered across per-screen checks.

/// The static role -> path-prefix table, public prefixes, and per-role home
/// routes. Immutable after construction.
pub mod table;

/// The pure route-authorization function and its `Decision` output.
/// Consulted by the navigator on every navigation event.
pub mod guard;

pub use guard::{Decision, authorize};
pub use table::RouteTable;
