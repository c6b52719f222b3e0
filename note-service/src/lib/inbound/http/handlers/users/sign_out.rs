use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum_extra::extract::cookie::SignedCookieJar;

use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::middleware::expired_session_cookie;
use crate::inbound::http::middleware::session_token;
use crate::inbound::http::router::AppState;

pub async fn sign_out(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    headers: HeaderMap,
) -> Result<(SignedCookieJar, ApiSuccess<MessageData>), ApiError> {
    let token = session_token(&jar, &headers);

    state.auth_service.sign_out(token).await?;

    Ok((
        jar.remove(expired_session_cookie()),
        ApiSuccess::new(
            StatusCode::OK,
            MessageData::new("User signed out successfully"),
        ),
    ))
}
