pub mod session_middleware;
pub mod auth_middleware;
