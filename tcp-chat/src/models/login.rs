use super::{session::SessionId, user::UserId};

/// Binds a session to the account it authenticated as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub user_id: UserId,
    pub session_id: SessionId,
}

impl Login {
    pub fn new(user_id: UserId, session_id: SessionId) -> Self {
        Login {
            user_id,
            session_id,
        }
    }
}
