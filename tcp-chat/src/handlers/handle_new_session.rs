use crate::{chat_service::ChatService, models::session::Session};
use log::info;

pub fn handle_new_session(chat_service: &mut ChatService, session: Session) {
    let session_id = session.id.clone();
    chat_service.register_session(session);
    info!("Registered new session {session_id}");

    chat_service.send_from_server(&session_id, "Welcome to this server!");
}
