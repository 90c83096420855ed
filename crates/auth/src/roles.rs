use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity class of an authenticated user.
///
/// The set is closed: role strings arrive from the backend authentication
/// response and anything outside this set fails to parse. Callers treat a
/// missing/unparseable role as "no role", which the policy layer denies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Employee,
    Receptionist,
    Admin,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [Role::Client, Role::Employee, Role::Receptionist, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Employee => "employee",
            Role::Receptionist => "receptionist",
            Role::Admin => "admin",
        }
    }

    /// Staff roles operate the panel; clients only see the self-service area.
    pub fn is_staff(&self) -> bool {
        !matches!(self, Role::Client)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0:?}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            "employee" => Ok(Role::Employee),
            "receptionist" => Ok(Role::Receptionist),
            "admin" => Ok(Role::Admin),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}
