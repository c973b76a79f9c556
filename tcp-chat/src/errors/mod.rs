pub mod chat_error;
pub mod command_error;
pub mod password_error;
pub mod server_error;
