use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: &str) -> Result<Option<models::Account>, String> {
    let query_span = tracing::info_span!("Fetch account by id.");
    sqlx::query_as::<_, models::Account>(
        r#"
        SELECT
            *
        FROM account
        WHERE id=$1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(Some)
    .or_else(|err| match err {
        sqlx::Error::RowNotFound => Ok(None),
        err => {
            tracing::error!("Failed to fetch account, error: {:?}", err);
            Err("Could not fetch data".to_string())
        }
    })
}

#[tracing::instrument(name = "Delete account.", skip(pool))]
pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, String> {
    sqlx::query(
        r#"
        DELETE FROM account
        WHERE id=$1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await
    .map(|result| result.rows_affected() > 0)
    .map_err(|err| {
        tracing::error!("Failed to delete account, error: {:?}", err);
        "Failed to delete".to_string()
    })
}
