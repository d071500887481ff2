use serde::Serialize;

use crate::model::role::Role;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    // Stored and compared as submitted; hashing is out of scope for this service.
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
}

/// Registration data before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}
