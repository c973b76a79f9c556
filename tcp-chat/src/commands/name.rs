use super::traits::command_handler::CommandHandler;
use crate::{
    chat_service::ChatService, errors::command_error::CommandError, models::command::Command,
};
use log::info;

pub struct Name;

impl CommandHandler for Name {
    fn handle(
        &self,
        chat_service: &mut ChatService,
        command: &Command,
    ) -> Result<Vec<String>, CommandError> {
        let [new_name] = command.arguments.as_slice() else {
            return Err(CommandError::WrongNumberOfArguments("/name <new username>"));
        };

        chat_service.rename(&command.session_id, new_name)?;
        info!("Session {} changed name to {new_name}", command.session_id);

        Ok(vec![format!("Changed username to {new_name}")])
    }
}
