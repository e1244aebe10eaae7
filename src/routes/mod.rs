use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    routing::{get, post},
};
use recipehub_notification::EmailService;
use serde::Serialize;
use sqlx::SqlitePool;

mod feedback;
mod health;
mod index;
mod signin;
mod signup;

#[derive(Clone)]
pub struct AppState {
    pub user_command: recipehub_user::Command,
    pub email_service: EmailService,
    pub pool: SqlitePool,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Unreadable bodies are handled like bodies with every field missing.
fn json_or_default<T: Default>(input: Result<Json<T>, JsonRejection>) -> T {
    match input {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            T::default()
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page))
        .route("/signup", post(signup::action))
        .route("/signin", post(signin::action))
        .route("/send_feedback", post(feedback::action))
        .with_state(app_state)
}
