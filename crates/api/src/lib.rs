//! `salonbw-api` — the authentication HTTP service.
//!
//! Implements the credential-exchange and profile-fetch contracts the client
//! session consumes: login, token refresh, logout, and profile over an
//! in-memory user directory. Tokens are stateless HS256 JWTs carrying the
//! session role.

pub mod app;
pub mod config;
pub mod context;
pub mod directory;
pub mod middleware;
pub mod tokens;
