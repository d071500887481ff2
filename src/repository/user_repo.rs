use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::model::user::{NewUser, User};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user under the next sequential id. Fails if the username is taken.
    async fn insert(&self, user: NewUser) -> RepositoryResult<User>;
    async fn find_by_id(&self, id: u64) -> RepositoryResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    async fn find_by_credentials(&self, username: &str, password: &str) -> RepositoryResult<Option<User>>;
}

/// Process-lifetime user table. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<u64, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> RepositoryResult<User> {
        if user.username.is_empty() {
            return Err(RepositoryError::validation("Username cannot be empty"));
        }
        // Duplicate check and id assignment share one write lock.
        let mut users = self.users.write().await;
        if users.values().any(|u| u.username == user.username) {
            warn!(username = %user.username, "Username already registered");
            return Err(RepositoryError::already_exists(format!(
                "Username {} is already registered",
                user.username
            )));
        }
        let id = users.len() as u64 + 1;
        let stored = User {
            id,
            username: user.username,
            password: user.password,
            role: user.role,
        };
        users.insert(id, stored.clone());
        info!(user_id = id, username = %stored.username, "User inserted");
        Ok(stored)
    }

    async fn find_by_id(&self, id: u64) -> RepositoryResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_credentials(&self, username: &str, password: &str) -> RepositoryResult<Option<User>> {
        let users = self.users.read().await;
        let found = users
            .values()
            .find(|u| u.username == username && u.password == password)
            .cloned();
        debug!(username = %username, matched = found.is_some(), "Credential scan finished");
        Ok(found)
    }
}
