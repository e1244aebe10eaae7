use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use sqlx::{Connection, SqlitePool};

#[derive(Serialize)]
pub struct Status {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

impl Status {
    fn new(status: &'static str) -> Json<Self> {
        Json(Self {
            status,
            reason: None,
        })
    }
}

/// GET /health
pub async fn health() -> Json<Status> {
    Status::new("ok")
}

/// GET /ready - 503 until a store connection answers a ping
pub async fn ready(State(pool): State<SqlitePool>) -> (StatusCode, Json<Status>) {
    let ping = async {
        let mut conn = pool.acquire().await?;
        conn.ping().await
    };

    if let Err(e) = ping.await {
        tracing::error!(error = %e, "store is not reachable");

        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Status {
                status: "not_ready",
                reason: Some("database_unavailable"),
            }),
        );
    }

    (StatusCode::OK, Status::new("ready"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ready_answers_when_store_is_open() -> anyhow::Result<()> {
        let pool = SqlitePool::connect("sqlite::memory:").await?;

        let (status, Json(body)) = ready(State(pool)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ready");

        Ok(())
    }

    #[tokio::test]
    async fn ready_reports_closed_store() -> anyhow::Result<()> {
        let pool = SqlitePool::connect("sqlite::memory:").await?;
        pool.close().await;

        let (status, Json(body)) = ready(State(pool)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.reason, Some("database_unavailable"));

        Ok(())
    }
}
