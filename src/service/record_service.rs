use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::model::record::{Achievement, Activity};
use crate::model::role::Role;
use crate::model::user::User;
use crate::repository::achievement_repo::AchievementRepository;
use crate::repository::activity_repo::ActivityRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait RecordService: Send + Sync {
    async fn record_activity(&self, author: &User, content: String, days_spent: String) -> Result<Activity, ServiceError>;
    async fn record_achievement(&self, author: &User, content: String) -> Result<Achievement, ServiceError>;
    async fn list_activities(&self) -> Result<Vec<Activity>, ServiceError>;
    async fn list_achievements(&self) -> Result<Vec<Achievement>, ServiceError>;
}

pub struct RecordServiceImpl {
    pub activity_repo: Arc<dyn ActivityRepository>,
    pub achievement_repo: Arc<dyn AchievementRepository>,
}

impl RecordServiceImpl {
    pub fn new(
        activity_repo: Arc<dyn ActivityRepository>,
        achievement_repo: Arc<dyn AchievementRepository>,
    ) -> Self {
        Self { activity_repo, achievement_repo }
    }
}

fn ensure_role(author: &User, role: Role) -> Result<(), ServiceError> {
    if author.role != role {
        warn!(username = %author.username, role = %author.role, required = %role, "Role mismatch");
        return Err(ServiceError::Forbidden(format!("Only {} accounts can record this", role)));
    }
    Ok(())
}

#[async_trait]
impl RecordService for RecordServiceImpl {
    #[instrument(skip(self, author, content, days_spent), fields(username = %author.username))]
    async fn record_activity(&self, author: &User, content: String, days_spent: String) -> Result<Activity, ServiceError> {
        ensure_role(author, Role::Student)?;
        let activity = self
            .activity_repo
            .insert(author.username.clone(), content, days_spent)
            .await?;
        info!(activity_id = activity.id, "Activity recorded");
        Ok(activity)
    }

    #[instrument(skip(self, author, content), fields(username = %author.username))]
    async fn record_achievement(&self, author: &User, content: String) -> Result<Achievement, ServiceError> {
        ensure_role(author, Role::Faculty)?;
        let achievement = self.achievement_repo.insert(author.username.clone(), content).await?;
        info!(achievement_id = achievement.id, "Achievement recorded");
        Ok(achievement)
    }

    async fn list_activities(&self) -> Result<Vec<Activity>, ServiceError> {
        Ok(self.activity_repo.list().await?)
    }

    async fn list_achievements(&self) -> Result<Vec<Achievement>, ServiceError> {
        Ok(self.achievement_repo.list().await?)
    }
}
