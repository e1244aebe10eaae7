use sea_query::{ColumnDef, SqliteQueryBuilder, Table, TableCreateStatement};
use sqlx::SqlitePool;

pub mod table;

use table::Users;

fn create_users_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Users::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Users::Username)
                .text()
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Users::Email).text().not_null().unique_key())
        .col(ColumnDef::new(Users::Password).text().not_null())
        .to_owned()
}

/// Create the `users` table if it does not exist yet.
///
/// Safe to run on every start: an existing table, including one created by a
/// previous deployment, is left untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let statement = create_users_table_statement().to_string(SqliteQueryBuilder);
    sqlx::query(&statement).execute(pool).await?;

    Ok(())
}
