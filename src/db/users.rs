use sqlx::PgExecutor;
use uuid::Uuid;

#[tracing::instrument(name = "Check user exists", skip(executor))]
pub async fn user_exists<'e, E>(executor: E, user_id: Uuid) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(executor)
        .await
}

#[tracing::instrument(name = "Find user id by email", skip(executor))]
pub async fn find_user_id_by_email<'e, E>(
    executor: E,
    email: &str,
) -> Result<Option<Uuid>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE LOWER(email) = LOWER($1)")
        .bind(email)
        .fetch_optional(executor)
        .await
}
