use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use recipehub_shared::Error;
use recipehub_user::RegisterInput;
use serde::Deserialize;

use crate::{
    error::AppError,
    routes::{AppState, MessageResponse, json_or_default},
};

#[derive(Deserialize, Default)]
pub struct ActionInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /signup
pub async fn action(
    State(app): State<AppState>,
    input: Result<Json<ActionInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let input = json_or_default(input);

    app.user_command
        .register(RegisterInput {
            username: input.username.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            password: input.password.unwrap_or_default(),
        })
        .await
        .map_err(|e| match e {
            Error::Validate(_) => AppError::BadRequest("Missing username, email, or password"),
            Error::Conflict(message) => AppError::Conflict(message),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully!",
        }),
    ))
}
