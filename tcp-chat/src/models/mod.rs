pub mod command;
pub mod login;
pub mod session;
pub mod stats;
pub mod text_message;
pub mod user;
