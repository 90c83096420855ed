use salonbw_auth::Role;
use salonbw_core::UserId;

/// Authenticated identity for a request.
///
/// Inserted by the bearer middleware; immutable for the request lifetime.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    user_id: UserId,
    role: Role,
}

impl CurrentUser {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
