use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::domain::user::models::Identity;
use crate::inbound::http::handlers::ApiSuccess;

pub async fn profile(Extension(identity): Extension<Identity>) -> ApiSuccess<ProfileResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        ProfileResponseData {
            user: identity.username.to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub user: String,
}
