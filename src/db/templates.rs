use sqlx::PgExecutor;

use crate::models::workout::WorkoutTemplate;

#[tracing::instrument(name = "Fetch workout template", skip(executor))]
pub async fn find_template<'e, E>(
    executor: E,
    template_id: i32,
) -> Result<Option<WorkoutTemplate>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutTemplate>(
        "SELECT id, name, description FROM workout_templates WHERE id = $1",
    )
    .bind(template_id)
    .fetch_optional(executor)
    .await
}
