//! Post-login landing routes.

use crate::Role;

/// Landing page for a freshly authenticated session.
///
/// Staff land on the calendar, clients on their dashboard. An unresolved
/// role falls back to the client dashboard, the least privileged view.
pub fn post_login_route(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) | Some(Role::Employee) | Some(Role::Receptionist) => "/calendar",
        Some(Role::Client) | None => "/dashboard",
    }
}
