use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::model::record::Achievement;
use crate::repository::repository_error::RepositoryResult;

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn insert(&self, username: String, content: String) -> RepositoryResult<Achievement>;
    async fn list(&self) -> RepositoryResult<Vec<Achievement>>;
}

#[derive(Default)]
pub struct InMemoryAchievementRepository {
    achievements: RwLock<BTreeMap<u64, Achievement>>,
}

impl InMemoryAchievementRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AchievementRepository for InMemoryAchievementRepository {
    async fn insert(&self, username: String, content: String) -> RepositoryResult<Achievement> {
        let mut achievements = self.achievements.write().await;
        let id = achievements.len() as u64 + 1;
        let achievement = Achievement { id, username, content };
        achievements.insert(id, achievement.clone());
        info!(achievement_id = id, username = %achievement.username, "Achievement inserted");
        Ok(achievement)
    }

    async fn list(&self) -> RepositoryResult<Vec<Achievement>> {
        Ok(self.achievements.read().await.values().cloned().collect())
    }
}
