use std::sync::Arc;

use crate::config::SessionConfig;
use crate::repository::achievement_repo::InMemoryAchievementRepository;
use crate::repository::activity_repo::InMemoryActivityRepository;
use crate::repository::user_repo::InMemoryUserRepository;
use crate::service::record_service::RecordServiceImpl;
use crate::service::user_service::UserServiceImpl;
use crate::util::session::SessionStore;
use crate::util::templates::Templates;

/// Shared handles passed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserServiceImpl>,
    pub record_service: Arc<RecordServiceImpl>,
    pub sessions: Arc<SessionStore>,
    pub templates: Arc<Templates>,
    pub session_config: SessionConfig,
}

impl AppState {
    /// Wires the in-memory tables, services and templates together.
    pub fn new(session_config: SessionConfig) -> Result<Self, handlebars::TemplateError> {
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let activity_repo = Arc::new(InMemoryActivityRepository::new());
        let achievement_repo = Arc::new(InMemoryAchievementRepository::new());

        let user_service = Arc::new(UserServiceImpl::new(user_repo));
        let record_service = Arc::new(RecordServiceImpl::new(activity_repo, achievement_repo));
        let sessions = Arc::new(SessionStore::new(session_config.ttl_seconds()));
        let templates = Arc::new(Templates::new()?);

        Ok(AppState {
            user_service,
            record_service,
            sessions,
            templates,
            session_config,
        })
    }
}
