use std::sync::Arc;

use axum_extra::extract::cookie::Key;
use note_service::config::DatabaseConfig;
use note_service::domain::note::service::NoteService;
use note_service::domain::user::service::AuthService;
use note_service::inbound::http::router::create_router;
use note_service::outbound::database;
use note_service::outbound::repositories::SqliteNoteRepository;
use note_service::outbound::repositories::SqliteSessionRepository;
use note_service::outbound::repositories::SqliteUserRepository;
use serde_json::json;
use sqlx::SqlitePool;

/// Test application that spawns a real server backed by an in-memory database
pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let pool = database::connect(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to open in-memory database");
        database::migrate(&pool)
            .await
            .expect("Failed to run migrations");

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let auth_service = Arc::new(AuthService::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteSessionRepository::new(pool.clone())),
        ));
        let note_service = Arc::new(NoteService::new(Arc::new(SqliteNoteRepository::new(
            pool.clone(),
        ))));

        let router = create_router(auth_service, note_service, Key::generate(), false);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            pool,
            api_client: Self::client(),
        }
    }

    /// A fresh client with its own cookie store
    pub fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create reqwest client")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(self.url(path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(self.url(path))
    }

    /// Helper to make PATCH request
    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(self.url(path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(self.url(path))
    }

    /// Helper to make GET request with Bearer token and no cookies
    pub fn get_with_bearer(&self, path: &str, token: u64) -> reqwest::RequestBuilder {
        reqwest::Client::new()
            .get(self.url(path))
            .bearer_auth(token)
    }

    pub async fn sign_up(&self, username: &str, password: &str) -> reqwest::Response {
        self.put("/user/sign-up")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/user/sign-in")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Sign up and sign in, returning the issued session token.
    /// The client's cookie store now holds the session cookie.
    pub async fn signed_in_as(&self, username: &str, password: &str) -> u64 {
        self.sign_up(username, password).await;
        let body: serde_json::Value = self
            .sign_in(username, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");
        body["token"].as_u64().expect("token missing from sign-in")
    }
}
