use super::traits::command_handler::CommandHandler;
use crate::{
    chat_service::ChatService, errors::command_error::CommandError, models::command::Command,
};
use log::info;

pub struct Acc;

impl CommandHandler for Acc {
    fn handle(
        &self,
        chat_service: &mut ChatService,
        command: &Command,
    ) -> Result<Vec<String>, CommandError> {
        let [name, password] = command.arguments.as_slice() else {
            return Err(CommandError::WrongNumberOfArguments(
                "/acc <username> <password>",
            ));
        };

        chat_service.create_account(&command.session_id, name, password)?;
        info!("Session {} created account {name}", command.session_id);

        Ok(vec![String::from("Created new account, please login now")])
    }
}
