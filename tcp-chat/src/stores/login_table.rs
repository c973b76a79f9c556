use crate::models::{login::Login, session::SessionId};
use std::collections::HashMap;

/// Which account each session is logged in as. A session holds at most one
/// login, an account may be logged in from several sessions.
#[derive(Debug, Default)]
pub struct LoginTable {
    logins: HashMap<SessionId, Login>,
}

impl LoginTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the login the session had before, if any.
    pub fn add(&mut self, login: Login) -> Option<Login> {
        self.logins.insert(login.session_id.clone(), login)
    }

    pub fn find_by_session(&self, session_id: &str) -> Option<&Login> {
        self.logins.get(session_id)
    }

    pub fn find_by_user(&self, user_id: &str) -> Vec<Login> {
        self.logins
            .values()
            .filter(|login| login.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn delete_by_session(&mut self, session_id: &str) -> Option<Login> {
        self.logins.remove(session_id)
    }

    pub fn delete_by_user(&mut self, user_id: &str) -> Vec<Login> {
        let logins = self.find_by_user(user_id);
        for login in &logins {
            self.logins.remove(&login.session_id);
        }

        logins
    }

    pub fn get_all(&self) -> Vec<&Login> {
        self.logins.values().collect()
    }

    pub fn len(&self) -> usize {
        self.logins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }
}
