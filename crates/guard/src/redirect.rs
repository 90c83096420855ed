//! Login redirect construction.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// The login entry point every unauthenticated redirect targets.
pub const LOGIN_PATH: &str = "/auth/login";

/// Query parameter carrying the originally requested path.
pub const REDIRECT_PARAM: &str = "redirectTo";

// Everything a query value must escape, including the separators that would
// otherwise split the parameter.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?')
    .add(b'/');

/// Build the login redirect for an intended path.
///
/// The intent rides along URL-encoded so the login page can return the user
/// after authentication. When the intent already is the login path the
/// parameter is omitted, otherwise login would redirect back to itself.
pub fn login_redirect(intent: &str) -> String {
    if intent == LOGIN_PATH {
        return LOGIN_PATH.to_string();
    }
    let encoded = utf8_percent_encode(intent, QUERY_VALUE);
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={encoded}")
}

/// Decode a `redirectTo` query value back into a return path.
///
/// Only same-origin absolute paths are accepted; anything else (external
/// URLs, scheme-relative `//host` forms, garbage encodings) is rejected so a
/// crafted link cannot bounce users off-site after login.
pub fn redirect_target(value: &str) -> Option<String> {
    let decoded = percent_decode_str(value).decode_utf8().ok()?;
    if decoded.starts_with('/') && !decoded.starts_with("//") {
        Some(decoded.into_owned())
    } else {
        None
    }
}
