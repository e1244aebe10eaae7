//! Test helpers that build the full router on a temporary store.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use recipehub::{AppState, config::CorsConfig};
use recipehub_notification::{EmailConfig, EmailService, MemoryRelay};
use serde_json::Value;
use sqlx::SqlitePool;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub relay: Arc<MemoryRelay>,
    _dir: TempDir,
}

pub fn email_config() -> EmailConfig {
    EmailConfig {
        smtp_host: "localhost".to_owned(),
        smtp_port: 1025,
        smtp_username: "sender@recipehub.localhost".to_owned(),
        smtp_password: "secret".to_owned(),
        from_address: String::new(),
        feedback_address: "feedback@recipehub.localhost".to_owned(),
        insecure_local_relay: false,
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    setup_test_app_with_relay(Arc::new(MemoryRelay::new())).await
}

pub async fn setup_test_app_with_relay(relay: Arc<MemoryRelay>) -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("users.db").display());
    let pool = recipehub::db::init(&url, 5).await?;

    let state = AppState {
        user_command: recipehub_user::Command::new(pool.clone()),
        email_service: EmailService::with_relay(&email_config(), relay.clone()),
        pool: pool.clone(),
    };

    Ok(TestApp {
        router: recipehub::create_app(state, &CorsConfig::default()),
        pool,
        relay,
        _dir: dir,
    })
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let response = self
            .request(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await;

        let status = response.status();
        (status, json_body(response).await)
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn count_users(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .unwrap();
        count
    }
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn json_body(response: Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
