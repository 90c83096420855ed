//! `salonbw-guard` — the route-guard state machine.
//!
//! A guard decides, per navigation attempt, whether a protected view
//! renders, redirects to login, or shows an in-place denial. The decision
//! itself ([`evaluate`]) is a pure function of the route's requirement and a
//! session snapshot; driving the resulting redirect through a host router is
//! the only effect, and it lives behind the [`Navigator`] boundary.

pub mod navigate;
pub mod redirect;
pub mod state;

pub use navigate::{GuardBinding, NavError, Navigator, RouteGuard};
pub use redirect::{LOGIN_PATH, login_redirect, redirect_target};
pub use state::{GuardState, RouteRequirement, evaluate};
