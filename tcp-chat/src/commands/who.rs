use super::traits::command_handler::CommandHandler;
use crate::{
    chat_service::ChatService, errors::command_error::CommandError, models::command::Command,
};

pub struct Who;

impl CommandHandler for Who {
    fn handle(
        &self,
        chat_service: &mut ChatService,
        _command: &Command,
    ) -> Result<Vec<String>, CommandError> {
        Ok(chat_service.online_user_names())
    }
}
