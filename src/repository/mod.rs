pub mod repository_error;
pub mod user_repo;
pub mod activity_repo;
pub mod achievement_repo;
