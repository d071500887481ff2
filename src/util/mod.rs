pub mod cookie;
pub mod error;
pub mod logger;
pub mod session;
pub mod templates;
