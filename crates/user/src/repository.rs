use recipehub_db::table::Users;
use sea_query::{Cond, Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
}

pub(crate) async fn create(
    pool: &SqlitePool,
    username: String,
    email: String,
    password: String,
) -> Result<i64, sqlx::Error> {
    let statement = Query::insert()
        .into_table(Users::Table)
        .columns([Users::Username, Users::Email, Users::Password])
        .values_panic([username.into(), email.into(), password.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid())
}

/// Account whose username or email is `identifier` and whose stored digest is
/// `password`.
pub(crate) async fn find(
    pool: &SqlitePool,
    identifier: &str,
    password: &str,
) -> Result<Option<Account>, sqlx::Error> {
    let statement = Query::select()
        .columns([Users::Id, Users::Username, Users::Email])
        .from(Users::Table)
        .cond_where(
            Cond::all()
                .add(
                    Cond::any()
                        .add(Expr::col(Users::Username).eq(identifier))
                        .add(Expr::col(Users::Email).eq(identifier)),
                )
                .add(Expr::col(Users::Password).eq(password)),
        )
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_as_with::<_, Account, _>(&sql, values)
        .fetch_optional(pool)
        .await
}
