//! Session teardown: the fixed set of cookies cleared on logout.
//!
//! Earlier clients stored the session as individual cookies; logout
//! clears those legacy names alongside the encrypted session cookie so
//! no stale credential survives in any browser. Clearing is idempotent
//! and never checks whether a session existed.

/// Legacy single-value cookie names from the pre-encrypted session era.
pub const LEGACY_COOKIE_NAMES: [&str; 7] = [
    "access_token",
    "refresh_token",
    "token_url",
    "expires_at",
    "patient_id",
    "fhir_base_url",
    "user_role",
];

/// Builds the full set of clear cookies: the encrypted session cookie
/// plus every legacy name, each emptied with `Max-Age=0` so the browser
/// deletes it on receipt.
#[must_use]
pub fn clear_cookies(session_cookie_name: &str, secure: bool) -> Vec<String> {
    let mut cookies = Vec::with_capacity(1 + LEGACY_COOKIE_NAMES.len());
    cookies.push(build_clear_cookie(session_cookie_name, secure));
    for name in LEGACY_COOKIE_NAMES {
        cookies.push(build_clear_cookie(name, secure));
    }
    cookies
}

/// Builds one `Set-Cookie` value that deletes the named cookie.
fn build_clear_cookie(name: &str, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!("{name}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax{secure}")
}
