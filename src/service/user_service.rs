use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use crate::model::role::Role;
use crate::model::user::{NewUser, User};
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait UserService: Send + Sync {
    async fn register(&self, username: String, password: String, role: Role) -> Result<User, ServiceError>;
    async fn login(&self, username: String, password: String) -> Result<User, ServiceError>;
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, username, password, role), fields(username = %username, role = %role))]
    async fn register(&self, username: String, password: String, role: Role) -> Result<User, ServiceError> {
        info!("Registering new user");
        if self.user_repo.find_by_username(&username).await?.is_some() {
            warn!("Username already taken");
            return Err(ServiceError::Conflict(format!("Username {} is already taken", username)));
        }
        let inserted = self.user_repo.insert(NewUser { username, password, role }).await;
        match &inserted {
            Ok(user) => info!(user_id = user.id, "User registered"),
            Err(e) => error!("Failed to insert user: {e}"),
        }
        Ok(inserted?)
    }

    #[instrument(skip(self, username, password), fields(username = %username))]
    async fn login(&self, username: String, password: String) -> Result<User, ServiceError> {
        info!("User login attempt");
        match self.user_repo.find_by_credentials(&username, &password).await? {
            Some(user) => {
                info!(user_id = user.id, role = %user.role, "User logged in successfully");
                Ok(user)
            }
            None => {
                warn!("Invalid credentials");
                Err(ServiceError::Unauthorized("Invalid username or password".to_string()))
            }
        }
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, ServiceError> {
        Ok(self.user_repo.find_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user_repo::InMemoryUserRepository;

    fn service() -> UserServiceImpl {
        UserServiceImpl::new(Arc::new(InMemoryUserRepository::new()))
    }

    #[tokio::test]
    async fn test_register_twice_is_conflict() {
        let svc = service();
        svc.register("alice".into(), "secret1".into(), Role::Student).await.unwrap();
        let err = svc.register("alice".into(), "secret2".into(), Role::Faculty).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_login_needs_exact_password() {
        let svc = service();
        let registered = svc.register("alice".into(), "secret1".into(), Role::Student).await.unwrap();

        let user = svc.login("alice".into(), "secret1".into()).await.unwrap();
        assert_eq!(user.id, registered.id);
        assert_eq!(user.role, Role::Student);

        let err = svc.login("alice".into(), "secret2".into()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
        let err = svc.login("nobody".into(), "secret1".into()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let svc = service();
        let user = svc.register("bob".into(), "secret1".into(), Role::Faculty).await.unwrap();
        assert_eq!(svc.find_by_id(user.id).await.unwrap().map(|u| u.username), Some("bob".to_string()));
        assert!(svc.find_by_id(99).await.unwrap().is_none());
    }
}
