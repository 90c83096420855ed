//! Guard decision logic.

use salonbw_auth::{Permission, Role, can};
use salonbw_session::SessionSnapshot;

use crate::redirect::login_redirect;

/// Access requirement declared by a protected route.
///
/// Both checks are optional; when both are present **both** must pass. A
/// requirement with neither admits any authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    roles: Option<Vec<Role>>,
    permission: Option<Permission>,
}

impl RouteRequirement {
    /// Any authenticated user.
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// Only the given roles.
    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: Some(roles.into_iter().collect()),
            permission: None,
        }
    }

    /// Only roles holding the given permission.
    pub fn permission(permission: Permission) -> Self {
        Self {
            roles: None,
            permission: Some(permission),
        }
    }

    /// Add a permission check on top of an existing role check.
    pub fn and_permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }
}

/// Outcome of a guard evaluation for one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// Session not settled yet: render nothing, never protected content.
    Pending,
    /// Not signed in: navigate to the login entry point.
    Unauthenticated { redirect: String },
    /// Signed in but not allowed: render the denial view in place, keeping
    /// the user where they tried to go.
    Forbidden,
    /// Render the protected content.
    Authorized,
}

/// Decide the guard state for `intent` given the current session snapshot.
///
/// Pure and total: no IO, no panics, no errors. Authorization failures are
/// states, not exceptions.
pub fn evaluate(
    requirement: &RouteRequirement,
    session: &SessionSnapshot,
    intent: &str,
) -> GuardState {
    if !session.initialized {
        return GuardState::Pending;
    }

    if !session.authenticated {
        return GuardState::Unauthenticated {
            redirect: login_redirect(intent),
        };
    }

    if let Some(required) = &requirement.roles {
        match session.role {
            Some(role) if required.contains(&role) => {}
            _ => {
                tracing::debug!(?session.role, path = intent, "role check failed");
                return GuardState::Forbidden;
            }
        }
    }

    // Conjunctive with the role check above: both must hold.
    if let Some(permission) = requirement.permission {
        if !can(session.role, permission) {
            tracing::debug!(?session.role, %permission, path = intent, "permission check failed");
            return GuardState::Forbidden;
        }
    }

    GuardState::Authorized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redirect::LOGIN_PATH;

    fn pending() -> SessionSnapshot {
        SessionSnapshot {
            initialized: false,
            authenticated: false,
            role: None,
        }
    }

    fn anonymous() -> SessionSnapshot {
        SessionSnapshot {
            initialized: true,
            authenticated: false,
            role: None,
        }
    }

    fn signed_in(role: Role) -> SessionSnapshot {
        SessionSnapshot {
            initialized: true,
            authenticated: true,
            role: Some(role),
        }
    }

    #[test]
    fn pending_session_renders_nothing_regardless_of_requirement() {
        let requirements = [
            RouteRequirement::authenticated(),
            RouteRequirement::roles([Role::Admin]),
            RouteRequirement::permission(Permission::NavInvoices),
        ];
        for requirement in requirements {
            assert_eq!(evaluate(&requirement, &pending(), "/invoices"), GuardState::Pending);
        }
    }

    #[test]
    fn anonymous_user_is_redirected_with_the_intended_path() {
        let state = evaluate(&RouteRequirement::authenticated(), &anonymous(), "/invoices");
        assert_eq!(
            state,
            GuardState::Unauthenticated {
                redirect: "/auth/login?redirectTo=%2Finvoices".into()
            }
        );
    }

    #[test]
    fn redirect_to_the_login_path_itself_carries_no_return_parameter() {
        let state = evaluate(&RouteRequirement::authenticated(), &anonymous(), LOGIN_PATH);
        assert_eq!(
            state,
            GuardState::Unauthenticated {
                redirect: LOGIN_PATH.into()
            }
        );
    }

    #[test]
    fn wrong_role_is_forbidden_not_redirected() {
        let state = evaluate(
            &RouteRequirement::roles([Role::Admin]),
            &signed_in(Role::Client),
            "/admin/settings",
        );
        assert_eq!(state, GuardState::Forbidden);
    }

    #[test]
    fn matching_role_is_authorized() {
        let state = evaluate(
            &RouteRequirement::roles([Role::Admin, Role::Receptionist]),
            &signed_in(Role::Receptionist),
            "/calendar",
        );
        assert_eq!(state, GuardState::Authorized);
    }

    #[test]
    fn no_requirement_admits_any_authenticated_user() {
        for role in Role::ALL {
            let state = evaluate(&RouteRequirement::authenticated(), &signed_in(role), "/appointments");
            assert_eq!(state, GuardState::Authorized);
        }
    }

    #[test]
    fn role_and_permission_are_conjunctive() {
        // Employee is in the role list but does not hold nav:invoices, so
        // the guard must deny; a weaker OR here would be an authz bug.
        let requirement = RouteRequirement::roles([Role::Client, Role::Employee])
            .and_permission(Permission::NavInvoices);

        assert_eq!(
            evaluate(&requirement, &signed_in(Role::Employee), "/invoices"),
            GuardState::Forbidden,
        );
        assert_eq!(
            evaluate(&requirement, &signed_in(Role::Client), "/invoices"),
            GuardState::Authorized,
        );
    }

    #[test]
    fn permission_only_requirement_uses_the_policy_table() {
        let requirement = RouteRequirement::permission(Permission::NavEmployees);
        assert_eq!(
            evaluate(&requirement, &signed_in(Role::Admin), "/employees"),
            GuardState::Authorized,
        );
        assert_eq!(
            evaluate(&requirement, &signed_in(Role::Client), "/employees"),
            GuardState::Forbidden,
        );
    }

    #[test]
    fn authenticated_session_without_a_role_fails_any_explicit_check() {
        let roleless = SessionSnapshot {
            initialized: true,
            authenticated: true,
            role: None,
        };
        assert_eq!(
            evaluate(&RouteRequirement::roles([Role::Client]), &roleless, "/appointments"),
            GuardState::Forbidden,
        );
        assert_eq!(
            evaluate(
                &RouteRequirement::permission(Permission::NavAppointments),
                &roleless,
                "/appointments",
            ),
            GuardState::Forbidden,
        );
        // No explicit check still admits: authentication alone was asked for.
        assert_eq!(
            evaluate(&RouteRequirement::authenticated(), &roleless, "/appointments"),
            GuardState::Authorized,
        );
    }
}
