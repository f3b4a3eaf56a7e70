use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use time::Duration;

/// Name of the session cookie carrying the signed token.
pub const SESSION_COOKIE: &str = "cine_token";

/// Build the session cookie set on successful login.
///
/// HttpOnly always; Secure only in production so local development over
/// plain HTTP keeps working.
pub fn session_cookie(token: String, validity_hours: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(validity_hours))
        .build()
}

/// Build the removal cookie set on logout.
///
/// Same name and attributes, empty value, zero lifetime. The client drops
/// the session; there is no server-side state to clear.
pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("token_value".to_string(), 24, false);

        assert_eq!(cookie.name(), "cine_token");
        assert_eq!(cookie.value(), "token_value");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::hours(24)));
    }

    #[test]
    fn test_session_cookie_secure_in_production() {
        let cookie = session_cookie("token_value".to_string(), 24, true);
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_removal_cookie_expires_session() {
        let cookie = removal_cookie(false);

        assert_eq!(cookie.name(), "cine_token");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.http_only(), Some(true));
    }
}
