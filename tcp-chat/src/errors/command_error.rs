use super::chat_error::ChatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Wrong number of arguments, usage: {0}")]
    WrongNumberOfArguments(&'static str),
    #[error(transparent)]
    Chat(#[from] ChatError),
}
