use super::traits::command_handler::CommandHandler;
use crate::{
    chat_service::ChatService, errors::command_error::CommandError, models::command::Command,
};
use log::info;

pub struct Msg;

impl CommandHandler for Msg {
    fn handle(
        &self,
        chat_service: &mut ChatService,
        command: &Command,
    ) -> Result<Vec<String>, CommandError> {
        let [partner, words @ ..] = command.arguments.as_slice() else {
            return Err(CommandError::WrongNumberOfArguments(
                "/msg <username> <message...>",
            ));
        };

        if words.is_empty() {
            return Err(CommandError::WrongNumberOfArguments(
                "/msg <username> <message...>",
            ));
        }

        chat_service.private_message(&command.session_id, partner, &words.join(" "))?;
        info!("Session {} sent a private message to {partner}", command.session_id);

        Ok(vec![])
    }
}
