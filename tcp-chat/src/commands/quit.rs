use super::traits::command_handler::CommandHandler;
use crate::{
    chat_service::ChatService, errors::command_error::CommandError, models::command::Command,
};
use log::info;

pub struct Quit;

impl CommandHandler for Quit {
    fn handle(
        &self,
        chat_service: &mut ChatService,
        command: &Command,
    ) -> Result<Vec<String>, CommandError> {
        chat_service.quit(&command.session_id);
        info!("Session {} quit", command.session_id);

        Ok(vec![])
    }
}
