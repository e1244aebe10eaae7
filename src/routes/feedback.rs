use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use recipehub_notification::Feedback;
use recipehub_shared::Error;
use serde::Deserialize;

use crate::{
    error::AppError,
    routes::{AppState, MessageResponse, json_or_default},
};

#[derive(Deserialize, Default)]
pub struct ActionInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// POST /send_feedback
pub async fn action(
    State(app): State<AppState>,
    input: Result<Json<ActionInput>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let input = json_or_default(input);

    let feedback = Feedback {
        name: input.name.unwrap_or_default(),
        email: input.email.unwrap_or_default(),
        message: input.message.unwrap_or_default(),
    };

    app.email_service
        .send_feedback(&feedback)
        .await
        .map_err(|e| match e {
            Error::Validate(_) => {
                AppError::BadRequest("Missing name, email, or message in feedback")
            }
            e => AppError::Relay(e.to_string()),
        })?;

    Ok(Json(MessageResponse {
        message: "Feedback sent successfully!",
    }))
}
