use super::handle_error::handle_error;
use crate::{chat_service::ChatService, models::text_message::TextMessage};
use log::trace;

pub fn handle_text_message(chat_service: &mut ChatService, text_message: TextMessage) {
    trace!("C {}: {}", text_message.session_id, text_message.text);

    if let Err(chat_error) = chat_service.broadcast(&text_message.session_id, &text_message.text) {
        handle_error(chat_service, &text_message.session_id, &chat_error);
    }
}
