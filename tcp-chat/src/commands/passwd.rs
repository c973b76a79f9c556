use super::traits::command_handler::CommandHandler;
use crate::{
    chat_service::ChatService, errors::command_error::CommandError, models::command::Command,
};
use log::info;

pub struct Passwd;

impl CommandHandler for Passwd {
    fn handle(
        &self,
        chat_service: &mut ChatService,
        command: &Command,
    ) -> Result<Vec<String>, CommandError> {
        let [old_password, new_password] = command.arguments.as_slice() else {
            return Err(CommandError::WrongNumberOfArguments(
                "/passwd <old password> <new password>",
            ));
        };

        chat_service.change_password(&command.session_id, old_password, new_password)?;
        info!("Session {} changed its password", command.session_id);

        Ok(vec![String::from("Changed password")])
    }
}
