use mongodb::error::{Error as MongoError, ErrorKind};
use thiserror::Error;

/// Everything that can go wrong while checking connectivity, folded into a
/// small closed set so callers can tell a bad URI apart from a dead server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("server selection timed out: {0}")]
    Timeout(String),

    #[error("network error: {0}")]
    Network(String),
}

impl From<MongoError> for Error {
    fn from(err: MongoError) -> Self {
        let message = err.to_string();
        match *err.kind {
            ErrorKind::InvalidArgument { .. } => Error::Configuration(message),
            ErrorKind::Authentication { .. } => Error::Auth(message),
            ErrorKind::ServerSelection { .. } => Error::Timeout(message),
            ErrorKind::Io(_) | ErrorKind::DnsResolve { .. } => Error::Network(message),
            // The driver has many more kinds; for a one-shot diagnostic they
            // all amount to "could not talk to the server".
            _ => Error::Network(message),
        }
    }
}
