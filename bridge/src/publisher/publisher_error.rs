use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PublishError(pub String);

impl Display for PublishError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "unable to publish message: {}", self.0)
    }
}

impl StdError for PublishError {}

impl From<reqwest::Error> for PublishError {
    fn from(err: reqwest::Error) -> Self {
        PublishError(err.to_string())
    }
}

pub type PublishResult<T> = Result<T, PublishError>;
