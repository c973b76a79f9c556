use crate::models::session::{Session, SessionId};
use std::collections::{HashMap, hash_map::Entry};

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if a session with the same id is already registered.
    pub fn add(&mut self, session: Session) -> bool {
        match self.sessions.entry(session.id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(session);
                true
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn find_all_except(&self, id: &str) -> Vec<&Session> {
        self.sessions
            .values()
            .filter(|session| session.id != id)
            .collect()
    }

    pub fn delete(&mut self, id: &str) -> Option<Session> {
        self.sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
