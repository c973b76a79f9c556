pub mod handle_command;
pub mod handle_error;
pub mod handle_new_session;
pub mod handle_text_message;
