//! `salonbw-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP, storage, and any UI
//! framework. Everything here is deterministic: the role and permission
//! enums, the static role policy, the `can` predicate, post-login routing,
//! and token claims validation.

pub mod claims;
pub mod navigation;
pub mod permissions;
pub mod policy;
pub mod roles;

pub use claims::{AccessClaims, TokenValidationError, validate_claims};
pub use navigation::post_login_route;
pub use permissions::{Permission, PermissionParseError};
pub use policy::{can, permissions_for};
pub use roles::{Role, RoleParseError};
