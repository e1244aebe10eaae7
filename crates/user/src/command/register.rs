use validator::Validate;

use crate::{digest, repository};

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl super::Command {
    /// Create an account and return its id.
    ///
    /// Uniqueness of username and email is enforced by the store, so of two
    /// concurrent registrations sharing either value exactly one succeeds.
    #[tracing::instrument(skip_all, fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> recipehub_shared::Result<i64> {
        input.validate()?;

        let password = digest::hash_password(&input.password);

        match repository::create(&self.0, input.username, input.email, password).await {
            Ok(id) => {
                tracing::info!(id, "Account registered");

                Ok(id)
            }
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                recipehub_shared::conflict!("Username or email already exists.")
            }
            Err(err) => Err(err.into()),
        }
    }
}
