use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};
use things_client::ThingsError;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// Empty credential, rejected without calling the things service.
    Unauthorized,
    Backend(ThingsError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AuthError::Unauthorized => write!(f, "missing or invalid credentials"),
            AuthError::Backend(err) => write!(f, "{}", err),
        }
    }
}

impl StdError for AuthError {}

impl From<ThingsError> for AuthError {
    fn from(err: ThingsError) -> Self {
        AuthError::Backend(err)
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
