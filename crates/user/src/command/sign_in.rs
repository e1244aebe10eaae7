use validator::Validate;

use crate::{Account, digest, repository};

#[derive(Validate)]
pub struct SignInInput {
    /// Username or email.
    #[validate(length(min = 1))]
    pub identifier: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl super::Command {
    /// Match identifier and password digest in one lookup. An unknown
    /// identifier and a wrong password fail the same way.
    #[tracing::instrument(skip_all)]
    pub async fn sign_in(&self, input: SignInInput) -> recipehub_shared::Result<Account> {
        input.validate()?;

        let password = digest::hash_password(&input.password);

        let Some(account) =
            repository::find(&self.0, &input.identifier, &password).await?
        else {
            recipehub_shared::unauthorized!("Invalid username/email or password");
        };

        tracing::info!(id = account.id, "Account signed in");

        Ok(account)
    }
}
