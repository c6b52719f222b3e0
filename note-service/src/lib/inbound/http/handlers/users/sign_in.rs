use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::SignedCookieJar;
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::session_cookie;
use crate::inbound::http::router::AppState;

/// Verifies credentials, then stores the session token in the signed cookie
/// and echoes it in the body for bearer-style clients.
pub async fn sign_in(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    WithRejection(Json(body), _): WithRejection<Json<SignInRequest>, ApiError>,
) -> Result<(SignedCookieJar, ApiSuccess<SignInResponseData>), ApiError> {
    let token = state
        .auth_service
        .sign_in(&body.username, &body.password)
        .await?;

    Ok((
        jar.add(session_cookie(token, state.secure_cookie)),
        ApiSuccess::new(
            StatusCode::OK,
            SignInResponseData {
                message: format!("User {} signed in successfully", body.username),
                token: token.value(),
            },
        ),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInResponseData {
    pub message: String,
    pub token: u32,
}
