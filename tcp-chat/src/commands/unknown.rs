use super::traits::command_handler::CommandHandler;
use crate::{
    chat_service::ChatService, errors::command_error::CommandError, models::command::Command,
};
use log::info;

pub struct Unknown;

impl CommandHandler for Unknown {
    fn handle(
        &self,
        _chat_service: &mut ChatService,
        command: &Command,
    ) -> Result<Vec<String>, CommandError> {
        info!(
            "Session {} sent an unknown command with arguments {:?}",
            command.session_id, command.arguments
        );

        Ok(vec![String::from("Unknown command")])
    }
}
