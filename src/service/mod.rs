pub mod user_service;
pub mod record_service;
