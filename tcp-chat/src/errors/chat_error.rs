use super::password_error::PasswordError;
use thiserror::Error;

/// Failures of a single chat operation. They only ever concern the session
/// that issued the operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Received a message from unknown session {0}")]
    UnknownSession(String),
    #[error("Session {0} is not logged in")]
    NotLoggedIn(String),
    #[error("Session {session_id} tried to message non existent partner {partner}")]
    PartnerDoesNotExist { session_id: String, partner: String },
    #[error("Session {session_id} tried to message partner {partner} who is not logged in")]
    PartnerNotLoggedIn { session_id: String, partner: String },
    #[error("Could not create user for session {session_id}: {source}")]
    CouldNotCreateUser {
        session_id: String,
        source: PasswordError,
    },
    #[error("Session {session_id} tried to use the name {name} which already exists")]
    NameAlreadyExists { session_id: String, name: String },
    #[error("Session {session_id} tried to access user {name} which does not exist")]
    UserDoesNotExist { session_id: String, name: String },
    #[error("Session {0} entered an invalid password")]
    InvalidPassword(String),
    #[error("{0}")]
    Internal(String),
}

impl ChatError {
    /// Message that can be shown to the client, `None` for internal errors.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            ChatError::UnknownSession(_) => Some("your session is not known to the server"),
            ChatError::NotLoggedIn(_) => Some("you are not logged in"),
            ChatError::PartnerDoesNotExist { .. } | ChatError::PartnerNotLoggedIn { .. } => {
                Some("your message partner does not seem to be logged in")
            }
            ChatError::CouldNotCreateUser { .. } => {
                Some("could not create user, password is likely invalid")
            }
            ChatError::NameAlreadyExists { .. } => Some("a user with that name already exists"),
            ChatError::UserDoesNotExist { .. } => Some("a user with that name does not exist"),
            ChatError::InvalidPassword(_) => Some("wrong password"),
            ChatError::Internal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_differs_from_diagnostic() {
        let error = ChatError::NotLoggedIn("1234".to_string());
        assert_eq!(error.user_message(), Some("you are not logged in"));
        assert_eq!(error.to_string(), "Session 1234 is not logged in");
    }

    #[test]
    fn internal_error_has_no_user_message() {
        let error = ChatError::Internal("user 42 was not found".to_string());
        assert_eq!(error.user_message(), None);
        assert_eq!(error.to_string(), "user 42 was not found");
    }

    #[test]
    fn could_not_create_user_keeps_password_error_as_source() {
        let error = ChatError::CouldNotCreateUser {
            session_id: "1234".to_string(),
            source: PasswordError::TooLong { max: 72 },
        };

        let source = std::error::Error::source(&error).map(|source| source.to_string());
        assert_eq!(source.as_deref(), Some("Password length exceeds 72 bytes"));
    }
}
