pub mod user;
pub mod role;
pub mod record;
