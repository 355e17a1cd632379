use crate::wizard::BookingSession;
use chrono::{Duration, Utc};
use railbook_catalog::FarePricing;
use railbook_core::Train;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// Idle sessions older than this are dropped
pub const DEFAULT_SESSION_TTL_SECS: i64 = 30 * 60;

/// Live wizard sessions, in memory only
pub struct SessionManager {
    sessions: HashMap<Uuid, BookingSession>,
    pricing: FarePricing,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(pricing: FarePricing, ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            pricing,
            ttl,
        }
    }

    /// Start a fresh wizard for `train`. Abandoned sessions are swept first.
    pub fn open(&mut self, train: Train) -> &BookingSession {
        self.cleanup_expired();

        let session = BookingSession::with_pricing(train, self.pricing);
        let id = session.id;
        info!(session_id = %id, train = %session.train.number, "Booking session opened");
        self.sessions.entry(id).or_insert(session)
    }

    pub fn get(&self, id: &Uuid) -> Option<&BookingSession> {
        self.sessions.get(id)
    }

    /// Mutable access counts as activity
    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut BookingSession> {
        let session = self.sessions.get_mut(id)?;
        session.touch();
        Some(session)
    }

    /// Drop a session when the user navigates away
    pub fn close(&mut self, id: &Uuid) -> Option<BookingSession> {
        let removed = self.sessions.remove(id);
        if removed.is_some() {
            info!(session_id = %id, "Booking session closed");
        }
        removed
    }

    /// Remove sessions idle for longer than the TTL
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Utc::now();
        let ttl = self.ttl;
        let initial_count = self.len();

        self.sessions.retain(|_, session| !session.is_expired(ttl, now));

        let removed = initial_count - self.len();
        if removed > 0 {
            info!(removed, remaining = self.len(), "Expired booking sessions dropped");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(FarePricing::default(), Duration::seconds(DEFAULT_SESSION_TTL_SECS))
    }
}
