//! Bearer token extraction from `Authorization` header values.

const BEARER_PREFIX_LEN: usize = "Bearer ".len();

/// Extracts the token from an `Authorization` header value
///
/// The `Bearer` scheme is matched case-insensitively. Returns `None` for a
/// missing or empty header, a different scheme, or a bare scheme word with
/// no token. This helper never fails; absence of a token is an ordinary
/// outcome the HTTP layer turns into a 401.
pub fn extract_bearer_token(header: Option<&str>) -> Option<&str> {
    let value = header?;
    if value.len() <= BEARER_PREFIX_LEN || !value.is_char_boundary(BEARER_PREFIX_LEN) {
        return None;
    }

    let (scheme, token) = value.split_at(BEARER_PREFIX_LEN);
    if !scheme.eq_ignore_ascii_case("Bearer ") {
        return None;
    }

    Some(token)
}
