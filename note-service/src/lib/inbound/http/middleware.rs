use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use axum_extra::extract::cookie::SignedCookieJar;

use crate::domain::user::models::SessionToken;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Name of the signed cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// Middleware that rejects requests without a valid session and adds the
/// resolved `Identity` to request extensions
pub async fn require_signed_in(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = session_token(&jar, req.headers());

    let identity = state
        .auth_service
        .require_signed_in(token)
        .await
        .map_err(|e| {
            tracing::debug!(uri = %req.uri(), "Rejected request without valid session: {}", e);
            ApiError::from(e)
        })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Session token presented by the client, if any.
///
/// The signed cookie takes precedence over an `Authorization: Bearer`
/// header. Unparseable values count as absent.
pub fn session_token(jar: &SignedCookieJar, headers: &HeaderMap) -> Option<SessionToken> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
        .or_else(|| bearer_token(headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .parse()
        .ok()
}

/// Cookie carrying `token`. `secure` restricts it to HTTPS.
pub fn session_cookie(token: SessionToken, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use axum_extra::extract::cookie::Key;

    use super::*;

    fn headers_with_bearer(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(value).unwrap(),
        );
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(
            bearer_token(&headers_with_bearer("Bearer 1234")),
            Some(SessionToken(1234))
        );
        assert_eq!(bearer_token(&headers_with_bearer("Bearer abc")), None);
        assert_eq!(bearer_token(&headers_with_bearer("Basic 1234")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_cookie_takes_precedence_over_bearer() {
        let jar = SignedCookieJar::new(Key::generate()).add(session_cookie(SessionToken(1), false));

        let token = session_token(&jar, &headers_with_bearer("Bearer 2"));
        assert_eq!(token, Some(SessionToken(1)));
    }

    #[test]
    fn test_falls_back_to_bearer() {
        let jar = SignedCookieJar::new(Key::generate());

        let token = session_token(&jar, &headers_with_bearer("Bearer 2"));
        assert_eq!(token, Some(SessionToken(2)));
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie(SessionToken(42), false);

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "42");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_secure_session_cookie() {
        assert_eq!(session_cookie(SessionToken(42), true).secure(), Some(true));
        assert_ne!(session_cookie(SessionToken(42), false).secure(), Some(true));
    }
}
