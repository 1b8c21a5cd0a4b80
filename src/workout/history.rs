use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::HistorySettings;
use crate::db::{users, workouts};
use crate::error::WorkoutError;

/// Owners whose workouts a user can see: the user and the shared demo account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityGroup {
    owners: Vec<Uuid>,
}

impl VisibilityGroup {
    pub fn new(user_id: Uuid, shared_owners: impl IntoIterator<Item = Uuid>) -> Self {
        let mut owners = vec![user_id];
        for owner in shared_owners {
            if !owners.contains(&owner) {
                owners.push(owner);
            }
        }
        Self { owners }
    }

    pub fn owners(&self) -> &[Uuid] {
        &self.owners
    }

    pub fn contains(&self, user_id: Uuid) -> bool {
        self.owners.contains(&user_id)
    }

    /// Look up the requesting user and the shared account.
    ///
    /// Fails with NotFound when `user_id` does not exist. A configured shared
    /// account that is missing from the database is skipped.
    #[tracing::instrument(name = "Resolve visibility group", skip(pool, settings))]
    pub async fn resolve(
        pool: &PgPool,
        user_id: Uuid,
        settings: &HistorySettings,
    ) -> Result<Self, WorkoutError> {
        if !users::user_exists(pool, user_id).await? {
            return Err(WorkoutError::not_found("User not found"));
        }

        let shared = match settings.demo_account_email.as_deref() {
            Some(email) => {
                let id = users::find_user_id_by_email(pool, email).await?;
                if id.is_none() {
                    tracing::warn!("Demo account {} does not exist, using own workouts only", email);
                }
                id
            }
            None => None,
        };

        Ok(Self::new(user_id, shared))
    }
}

/// Most recent workout of `template_id` visible to `user_id`.
#[tracing::instrument(name = "Resolve last workout", skip(pool, settings))]
pub async fn resolve_one(
    pool: &PgPool,
    settings: &HistorySettings,
    template_id: i32,
    user_id: Uuid,
) -> Result<Option<i32>, WorkoutError> {
    let group = VisibilityGroup::resolve(pool, user_id, settings).await?;
    let ids = workouts::find_recent_workout_ids(pool, group.owners(), template_id, 1).await?;
    Ok(ids.into_iter().next())
}

/// Up to `count` most recent workouts of `template_id` visible to `user_id`, newest first.
///
/// `count` is expected to be validated by the caller; it is still clamped to
/// `1..=settings.max_workouts` here.
#[tracing::instrument(name = "Resolve recent workouts", skip(pool, settings))]
pub async fn resolve_many(
    pool: &PgPool,
    settings: &HistorySettings,
    template_id: i32,
    user_id: Uuid,
    count: i64,
) -> Result<Vec<i32>, WorkoutError> {
    let limit = count.clamp(1, i64::from(settings.max_workouts.max(1)));
    let group = VisibilityGroup::resolve(pool, user_id, settings).await?;
    let ids = workouts::find_recent_workout_ids(pool, group.owners(), template_id, limit).await?;

    tracing::info!("Resolved {} of {} requested workouts", ids.len(), limit);
    Ok(ids)
}
