use serde::Serialize;

/// A student's activity entry. `username` is copied from the author at write time.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub id: u64,
    pub username: String,
    pub content: String,
    /// Free text, not checked for being numeric.
    pub days_spent: String,
}

/// A faculty member's achievement entry.
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: u64,
    pub username: String,
    pub content: String,
}
