use super::traits::command_handler::CommandHandler;
use crate::{
    chat_service::ChatService, errors::command_error::CommandError, models::command::Command,
};
use log::info;

pub struct Login;

impl CommandHandler for Login {
    fn handle(
        &self,
        chat_service: &mut ChatService,
        command: &Command,
    ) -> Result<Vec<String>, CommandError> {
        let [name, password] = command.arguments.as_slice() else {
            return Err(CommandError::WrongNumberOfArguments(
                "/login <username> <password>",
            ));
        };

        chat_service.login(&command.session_id, name, password)?;
        info!("Session {} logged in as {name}", command.session_id);

        Ok(vec![String::from("Logged in")])
    }
}
