//! `salonbw-session` — the authentication-session lifecycle.
//!
//! A single [`AuthSession`] is shared by every route guard in the process.
//! The session is the only writer of its own state; guards read immutable
//! [`SessionSnapshot`]s. The asynchronous startup restore is the one place
//! the session suspends: until it settles, snapshots report
//! `initialized == false` and guards render nothing.

pub mod gateway;
pub mod http;
pub mod session;
pub mod store;

pub use gateway::{AuthGateway, Credentials, GatewayError, LoginResponse, UserProfile};
pub use http::HttpAuthGateway;
pub use session::{AuthSession, SessionError, SessionSnapshot};
pub use store::{CredentialStore, InMemoryCredentialStore, TokenPair};
