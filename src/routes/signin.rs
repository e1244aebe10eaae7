use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use recipehub_shared::Error;
use recipehub_user::SignInInput;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    routes::{AppState, json_or_default},
};

#[derive(Deserialize, Default)]
pub struct ActionInput {
    /// Username or email
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct SignInResponse {
    pub message: &'static str,
    pub username: String,
}

/// POST /signin
///
/// Only reports success or failure, no session or token is issued.
pub async fn action(
    State(app): State<AppState>,
    input: Result<Json<ActionInput>, JsonRejection>,
) -> Result<Json<SignInResponse>, AppError> {
    let input = json_or_default(input);

    let account = app
        .user_command
        .sign_in(SignInInput {
            identifier: input.username.unwrap_or_default(),
            password: input.password.unwrap_or_default(),
        })
        .await
        .map_err(|e| match e {
            Error::Validate(_) => AppError::BadRequest("Missing username/email or password"),
            Error::Unauthorized(message) => AppError::Unauthorized(message),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(SignInResponse {
        message: "Sign in successful!",
        username: account.username,
    }))
}
