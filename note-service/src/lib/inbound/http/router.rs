use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::FromRef;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use axum_extra::extract::cookie::Key;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::notes::create_note;
use super::handlers::notes::delete_note;
use super::handlers::notes::get_note;
use super::handlers::notes::list_notes;
use super::handlers::notes::update_note;
use super::handlers::users::profile;
use super::handlers::users::sign_in;
use super::handlers::users::sign_out;
use super::handlers::users::sign_up;
use super::middleware::require_signed_in;
use crate::domain::note::service::NoteService;
use crate::domain::user::service::AuthService;
use crate::outbound::repositories::SqliteNoteRepository;
use crate::outbound::repositories::SqliteSessionRepository;
use crate::outbound::repositories::SqliteUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<SqliteUserRepository, SqliteSessionRepository>>,
    pub note_service: Arc<NoteService<SqliteNoteRepository>>,
    pub cookie_key: Key,
    pub secure_cookie: bool,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn create_router(
    auth_service: Arc<AuthService<SqliteUserRepository, SqliteSessionRepository>>,
    note_service: Arc<NoteService<SqliteNoteRepository>>,
    cookie_key: Key,
    secure_cookie: bool,
) -> Router {
    let state = AppState {
        auth_service,
        note_service,
        cookie_key,
        secure_cookie,
    };

    let public_routes = Router::new()
        .route("/user/sign-up", put(sign_up))
        .route("/user/sign-in", post(sign_in))
        .route("/user/sign-out", get(sign_out))
        .route("/note", get(list_notes));

    let protected_routes = Router::new()
        .route("/user/profile", get(profile))
        .route("/note", put(create_note))
        .route("/note/:id", get(get_note))
        .route("/note/:id", patch(update_note))
        .route("/note/:id", delete(delete_note))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_signed_in,
        ));

    // Headers stay out of the span: they carry session cookies and bearer tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
