use crate::{
    errors::chat_error::ChatError,
    models::{
        login::Login,
        session::{Session, SessionId},
        stats::Stats,
        user::User,
    },
    stores::{login_table::LoginTable, session_registry::SessionRegistry, user_store::UserStore},
};
use log::{error, trace, warn};
use std::collections::HashSet;
use tokio::sync::mpsc::error::TrySendError;

/// Business logic over the session registry, user store and login table.
///
/// Every method is one complete state transition. The service is owned by
/// the broker, which calls it from a single task, so none of the stores need
/// locking.
#[derive(Debug, Default)]
pub struct ChatService {
    sessions: SessionRegistry,
    users: UserStore,
    logins: LoginTable,
}

impl ChatService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_session(&mut self, session: Session) {
        let session_id = session.id.clone();
        if !self.sessions.add(session) {
            error!("Session id {session_id} is already registered");
        }
    }

    /// Best effort: sessions that are already gone are ignored.
    pub fn send_from_server(&mut self, session_id: &str, text: &str) {
        self.send_to_session(session_id, format!("[server] {text}"));
    }

    /// Queues a whole reply as one item so it cannot overflow the session's
    /// own queue halfway through. The writer puts each line on the wire
    /// separately.
    pub fn send_reply_from_server(&mut self, session_id: &str, lines: &[String]) {
        if lines.is_empty() {
            return;
        }

        let reply = lines
            .iter()
            .map(|line| format!("[server] {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.send_to_session(session_id, reply);
    }

    fn send_to_session(&mut self, session_id: &str, line: String) {
        let Some(session) = self.sessions.find_by_id(session_id) else {
            return;
        };

        trace!("S {session_id}: {line}");
        match session.send(line) {
            Ok(()) => (),
            Err(TrySendError::Closed(_)) => {
                trace!("Session {session_id} stopped reading its outbound queue");
            }
            Err(TrySendError::Full(_)) => {
                warn!("Outbound queue of session {session_id} is full, disconnecting it");
                self.quit(session_id);
            }
        }
    }

    fn logged_in_user(&self, session_id: &str) -> Result<&User, ChatError> {
        let login = self
            .logins
            .find_by_session(session_id)
            .ok_or_else(|| ChatError::NotLoggedIn(session_id.to_string()))?;

        self.users.find_by_id(&login.user_id).ok_or_else(|| {
            ChatError::Internal(format!(
                "User {} logged in from session {session_id} was not found",
                login.user_id
            ))
        })
    }

    /// Sends `[name] text` to every other registered session, logged in or
    /// not.
    pub fn broadcast(&mut self, session_id: &str, text: &str) -> Result<(), ChatError> {
        if self.sessions.find_by_id(session_id).is_none() {
            return Err(ChatError::UnknownSession(session_id.to_string()));
        }

        let sender_name = self.logged_in_user(session_id)?.name().to_string();
        let recipients: Vec<SessionId> = self
            .sessions
            .find_all_except(session_id)
            .into_iter()
            .map(|session| session.id.clone())
            .collect();

        for recipient in recipients {
            self.send_to_session(&recipient, format!("[{sender_name}] {text}"));
        }

        Ok(())
    }

    pub fn rename(&mut self, session_id: &str, new_name: &str) -> Result<(), ChatError> {
        let user_id = self.logged_in_user(session_id)?.id.clone();

        if !self.users.rename(&user_id, new_name) {
            return Err(ChatError::NameAlreadyExists {
                session_id: session_id.to_string(),
                name: new_name.to_string(),
            });
        }

        Ok(())
    }

    /// Sends `[p name] text` to every session the partner is logged in from.
    pub fn private_message(
        &mut self,
        session_id: &str,
        partner_name: &str,
        text: &str,
    ) -> Result<(), ChatError> {
        let sender_name = self.logged_in_user(session_id)?.name().to_string();

        let partner = self.users.find_by_name(partner_name).ok_or_else(|| {
            ChatError::PartnerDoesNotExist {
                session_id: session_id.to_string(),
                partner: partner_name.to_string(),
            }
        })?;

        let partner_sessions = self.logins.find_by_user(&partner.id);
        if partner_sessions.is_empty() {
            return Err(ChatError::PartnerNotLoggedIn {
                session_id: session_id.to_string(),
                partner: partner_name.to_string(),
            });
        }

        for login in partner_sessions {
            self.send_to_session(&login.session_id, format!("[p {sender_name}] {text}"));
        }

        Ok(())
    }

    /// Registers a new account. The session stays logged out.
    pub fn create_account(
        &mut self,
        session_id: &str,
        name: &str,
        password: &str,
    ) -> Result<(), ChatError> {
        let user = User::new(name, password).map_err(|source| ChatError::CouldNotCreateUser {
            session_id: session_id.to_string(),
            source,
        })?;

        if !self.users.add(user) {
            return Err(ChatError::NameAlreadyExists {
                session_id: session_id.to_string(),
                name: name.to_string(),
            });
        }

        Ok(())
    }

    pub fn login(&mut self, session_id: &str, name: &str, password: &str) -> Result<(), ChatError> {
        if self.sessions.find_by_id(session_id).is_none() {
            return Err(ChatError::UnknownSession(session_id.to_string()));
        }

        let user = self
            .users
            .find_by_name(name)
            .ok_or_else(|| ChatError::UserDoesNotExist {
                session_id: session_id.to_string(),
                name: name.to_string(),
            })?;

        if !user.password_is_valid(password) {
            return Err(ChatError::InvalidPassword(session_id.to_string()));
        }

        let login = Login::new(user.id.clone(), session_id.to_string());
        self.logins.add(login);
        Ok(())
    }

    pub fn change_password(
        &mut self,
        session_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ChatError> {
        let user_id = self.logged_in_user(session_id)?.id.clone();
        let user = self.users.find_by_id_mut(&user_id).ok_or_else(|| {
            ChatError::Internal(format!("User {user_id} disappeared while changing password"))
        })?;

        if !user.password_is_valid(old_password) {
            return Err(ChatError::InvalidPassword(session_id.to_string()));
        }

        user.set_password(new_password)
            .map_err(|_| ChatError::InvalidPassword(session_id.to_string()))
    }

    /// Empty if the session is not logged in.
    pub fn name_for_session(&self, session_id: &str) -> String {
        self.logged_in_user(session_id)
            .map(|user| user.name().to_string())
            .unwrap_or_default()
    }

    pub fn online_user_names(&self) -> Vec<String> {
        let online: HashSet<&str> = self
            .logins
            .get_all()
            .into_iter()
            .map(|login| login.user_id.as_str())
            .collect();

        self.users
            .get_all()
            .into_iter()
            .filter(|user| online.contains(user.id.as_str()))
            .map(|user| user.name().to_string())
            .collect()
    }

    /// Signals the connection to close and forgets the session. Does nothing
    /// for sessions that are already gone.
    pub fn quit(&mut self, session_id: &str) {
        let Some(session) = self.sessions.delete(session_id) else {
            return;
        };

        session.close();
        self.logins.delete_by_session(session_id);
    }

    pub fn stats(&self) -> Stats {
        let online_users: HashSet<&str> = self
            .logins
            .get_all()
            .into_iter()
            .map(|login| login.user_id.as_str())
            .collect();

        Stats {
            sessions: self.sessions.len(),
            accounts: self.users.len(),
            logins: self.logins.len(),
            online_users: online_users.len(),
        }
    }
}
