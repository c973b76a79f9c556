use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Could not bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
    #[error("Could not get local address of listener: {0}")]
    LocalAddr(std::io::Error),
    #[error("Invalid value for {variable}: {value:?}")]
    InvalidConfig {
        variable: &'static str,
        value: String,
    },
}
