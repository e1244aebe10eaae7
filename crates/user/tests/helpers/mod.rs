use std::{path::PathBuf, str::FromStr};

use recipehub_user::{Account, Command, RegisterInput};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    recipehub_db::ensure_schema(&pool).await?;

    Ok(pool)
}

#[allow(dead_code)]
pub async fn create_account(cmd: &Command, name: impl Into<String>) -> anyhow::Result<i64> {
    let name = name.into();
    let id = cmd
        .register(RegisterInput {
            username: name.to_owned(),
            email: format!("{name}@recipehub.localhost"),
            password: "my_password".to_owned(),
        })
        .await?;

    Ok(id)
}

#[allow(dead_code)]
pub async fn find_account(
    pool: &SqlitePool,
    identifier: &str,
) -> anyhow::Result<Option<Account>> {
    let account = sqlx::query_as::<_, Account>(
        "SELECT id, username, email FROM users WHERE username = ?1 OR email = ?1",
    )
    .bind(identifier)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}
