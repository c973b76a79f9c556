use super::traits::command_handler::CommandHandler;
use crate::{
    chat_service::ChatService, errors::command_error::CommandError, models::command::Command,
};

pub struct Info;

impl CommandHandler for Info {
    fn handle(
        &self,
        chat_service: &mut ChatService,
        command: &Command,
    ) -> Result<Vec<String>, CommandError> {
        let session_id = &command.session_id;
        let user_name = chat_service.name_for_session(session_id);

        Ok(vec![
            format!("sessionId: {session_id}"),
            format!("userName: {user_name}"),
        ])
    }
}
