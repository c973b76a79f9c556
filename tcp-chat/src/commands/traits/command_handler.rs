use crate::{
    chat_service::ChatService, errors::command_error::CommandError, models::command::Command,
};

pub trait CommandHandler {
    /// Runs the command and returns the lines to send back to the issuing
    /// session.
    fn handle(
        &self,
        chat_service: &mut ChatService,
        command: &Command,
    ) -> Result<Vec<String>, CommandError>;
}
