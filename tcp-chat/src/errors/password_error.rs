use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    Empty,
    #[error("Password length exceeds {max} bytes")]
    TooLong { max: usize },
    #[error("Could not hash password: {0}")]
    Hashing(String),
}
