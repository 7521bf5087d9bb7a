use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
    io,
};

use things_client::ThingsError;

use crate::publisher::PublishError;

#[derive(Debug)]
pub struct ServerError(pub String);

impl Display for ServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl StdError for ServerError {}

impl From<io::Error> for ServerError {
    fn from(err: io::Error) -> Self {
        ServerError(err.to_string())
    }
}

impl From<hyper::Error> for ServerError {
    fn from(err: hyper::Error) -> Self {
        ServerError(err.to_string())
    }
}

impl From<ThingsError> for ServerError {
    fn from(err: ThingsError) -> Self {
        ServerError(err.to_string())
    }
}

impl From<PublishError> for ServerError {
    fn from(err: PublishError) -> Self {
        ServerError(err.to_string())
    }
}

impl From<String> for ServerError {
    fn from(err: String) -> Self {
        ServerError(err)
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
