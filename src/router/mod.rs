pub mod auth_router;
pub mod dashboard_router;
