use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::model::record::Activity;
use crate::repository::repository_error::RepositoryResult;

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn insert(&self, username: String, content: String, days_spent: String) -> RepositoryResult<Activity>;
    /// All activities in insertion order.
    async fn list(&self) -> RepositoryResult<Vec<Activity>>;
}

#[derive(Default)]
pub struct InMemoryActivityRepository {
    activities: RwLock<BTreeMap<u64, Activity>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn insert(&self, username: String, content: String, days_spent: String) -> RepositoryResult<Activity> {
        let mut activities = self.activities.write().await;
        let id = activities.len() as u64 + 1;
        let activity = Activity {
            id,
            username,
            content,
            days_spent,
        };
        activities.insert(id, activity.clone());
        info!(activity_id = id, username = %activity.username, "Activity inserted");
        Ok(activity)
    }

    async fn list(&self) -> RepositoryResult<Vec<Activity>> {
        Ok(self.activities.read().await.values().cloned().collect())
    }
}
