//! Server-side sessions and flash messages.
//!
//! The browser only holds a random session id; the signed-in user and the
//! pending flash messages live here for the lifetime of the process.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Danger,
    Info,
}

/// A notice shown once, on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

#[derive(Debug)]
struct Session {
    user_id: Option<u64>,
    flashes: Vec<Flash>,
    last_seen: DateTime<Utc>,
}

impl Session {
    fn new(now: DateTime<Utc>) -> Self {
        Session {
            user_id: None,
            flashes: Vec::new(),
            last_seen: now,
        }
    }
}

pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionStore {
    /// A TTL beyond what `Duration` can hold is clamped to `Duration::MAX`.
    pub fn new(ttl_seconds: i64) -> Self {
        SessionStore {
            sessions: RwLock::new(HashMap::new()),
            ttl: Duration::try_seconds(ttl_seconds).unwrap_or(Duration::MAX),
        }
    }

    /// Resolves the presented id to a live session, or starts a new one.
    ///
    /// Returns the session id and whether it was newly created.
    pub async fn load_or_create(&self, presented: Option<&str>) -> (String, bool) {
        self.load_or_create_at(presented, Utc::now()).await
    }

    pub(crate) async fn load_or_create_at(&self, presented: Option<&str>, now: DateTime<Utc>) -> (String, bool) {
        let mut sessions = self.sessions.write().await;
        let ttl = self.ttl;
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= ttl);
        if sessions.len() != before {
            debug!(purged = before - sessions.len(), "Expired sessions purged");
        }

        if let Some(id) = presented {
            if let Some(session) = sessions.get_mut(id) {
                session.last_seen = now;
                return (id.to_string(), false);
            }
        }

        let id = Uuid::new_v4().to_string();
        sessions.insert(id.clone(), Session::new(now));
        debug!("New session started");
        (id, true)
    }

    pub async fn user_id(&self, id: &str) -> Option<u64> {
        self.sessions.read().await.get(id).and_then(|s| s.user_id)
    }

    pub async fn set_user(&self, id: &str, user_id: Option<u64>) {
        if let Some(session) = self.sessions.write().await.get_mut(id) {
            session.user_id = user_id;
            info!(?user_id, "Session user changed");
        }
    }

    /// Signs the user in and moves the session to a fresh id.
    ///
    /// Pending flashes carry over and the old id stops resolving. Returns the new id.
    pub async fn login(&self, id: &str, user_id: u64) -> String {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let mut session = sessions.remove(id).unwrap_or_else(|| Session::new(now));
        session.user_id = Some(user_id);
        session.last_seen = now;

        let new_id = Uuid::new_v4().to_string();
        sessions.insert(new_id.clone(), session);
        info!(user_id, "Session id rotated on login");
        new_id
    }

    pub async fn push_flash(&self, id: &str, flash: Flash) {
        if let Some(session) = self.sessions.write().await.get_mut(id) {
            session.flashes.push(flash);
        }
    }

    /// Removes and returns every pending flash for the session.
    pub async fn take_flashes(&self, id: &str) -> Vec<Flash> {
        match self.sessions.write().await.get_mut(id) {
            Some(session) => std::mem::take(&mut session.flashes),
            None => Vec::new(),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Per-request view of the caller's session, inserted by the session middleware.
///
/// The id can change mid-request (login rotates it); the middleware reads it
/// back when writing the cookie.
#[derive(Clone)]
pub struct SessionHandle {
    id: Arc<RwLock<String>>,
    store: Arc<SessionStore>,
}

impl SessionHandle {
    pub fn new(id: String, store: Arc<SessionStore>) -> Self {
        SessionHandle {
            id: Arc::new(RwLock::new(id)),
            store,
        }
    }

    pub async fn id(&self) -> String {
        self.id.read().await.clone()
    }

    pub async fn user_id(&self) -> Option<u64> {
        let id = self.id.read().await;
        self.store.user_id(&id).await
    }

    pub async fn login(&self, user_id: u64) {
        let mut id = self.id.write().await;
        let rotated = self.store.login(&id, user_id).await;
        *id = rotated;
    }

    pub async fn logout(&self) {
        let id = self.id.read().await;
        self.store.set_user(&id, None).await
    }

    pub async fn flash<T: Into<String>>(&self, category: FlashCategory, message: T) {
        let flash = Flash {
            category,
            message: message.into(),
        };
        let id = self.id.read().await;
        self.store.push_flash(&id, flash).await
    }

    pub async fn take_flashes(&self) -> Vec<Flash> {
        let id = self.id.read().await;
        self.store.take_flashes(&id).await
    }
}
