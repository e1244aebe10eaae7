use sqlx::SqlitePool;

mod register;
mod sign_in;

pub use register::RegisterInput;
pub use sign_in::SignInInput;

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    pub fn new(pool: SqlitePool) -> Self {
        Self(pool)
    }
}
