use crate::{chat_service::ChatService, errors::chat_error::ChatError};
use log::{error, info};

pub const INTERNAL_ERROR_REPLY: &str = "internal server error";

/// Tells the session what went wrong without leaking internal details.
pub fn handle_error(chat_service: &mut ChatService, session_id: &str, chat_error: &ChatError) {
    match chat_error.user_message() {
        Some(message) => {
            info!("Recovered from error: {chat_error}");
            chat_service.send_from_server(session_id, message);
        }

        None => {
            error!("Internal server error: {chat_error}");
            chat_service.send_from_server(session_id, INTERNAL_ERROR_REPLY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::Session;
    use tokio::sync::mpsc;
    use tokio_util::sync::CancellationToken;

    fn connect(chat_service: &mut ChatService) -> (String, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(4);
        let session = Session::new(tx, CancellationToken::new());
        let session_id = session.id.clone();
        chat_service.register_session(session);
        (session_id, rx)
    }

    #[test]
    fn user_friendly_error_is_forwarded() {
        let mut chat_service = ChatService::new();
        let (session_id, mut rx) = connect(&mut chat_service);

        let chat_error = ChatError::NotLoggedIn(session_id.clone());
        handle_error(&mut chat_service, &session_id, &chat_error);

        assert_eq!(rx.try_recv().ok().as_deref(), Some("[server] you are not logged in"));
    }

    #[test]
    fn internal_error_is_hidden() {
        let mut chat_service = ChatService::new();
        let (session_id, mut rx) = connect(&mut chat_service);

        let chat_error = ChatError::Internal("user 42 vanished".to_string());
        handle_error(&mut chat_service, &session_id, &chat_error);

        assert_eq!(rx.try_recv().ok().as_deref(), Some("[server] internal server error"));
    }
}
