use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use channel_topics::TopicError;
use serde_json::Error as JsonError;
use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

use crate::{authorizer::AuthError, publisher::PublishError};

/// Every way a hook request can fail. The broker only ever sees a status code.
#[derive(Debug, Clone, PartialEq)]
pub enum HookError {
    /// Hook header is missing or names another hook.
    UnsupportedRequest,
    MalformedBody(String),
    Topic(TopicError),
    Auth(AuthError),
    /// Anything else. Treated as a defect of the bridge.
    Unclassified(String),
}

impl HookError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HookError::UnsupportedRequest
            | HookError::MalformedBody(_)
            | HookError::Topic(_) => StatusCode::BAD_REQUEST,
            HookError::Auth(AuthError::Unauthorized) => StatusCode::FORBIDDEN,
            HookError::Auth(AuthError::Backend(err)) if err.is_permission_denied() => {
                StatusCode::FORBIDDEN
            }
            HookError::Auth(AuthError::Backend(_)) => StatusCode::SERVICE_UNAVAILABLE,
            HookError::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for HookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            HookError::UnsupportedRequest => write!(f, "unsupported hook request"),
            HookError::MalformedBody(description) => {
                write!(f, "malformed request body: {}", description)
            }
            HookError::Topic(err) => write!(f, "{}", err),
            HookError::Auth(err) => write!(f, "{}", err),
            HookError::Unclassified(description) => write!(f, "{}", description),
        }
    }
}

impl StdError for HookError {}

impl IntoResponse for HookError {
    fn into_response(self) -> Response {
        self.status_code().into_response()
    }
}

impl From<TopicError> for HookError {
    fn from(err: TopicError) -> Self {
        HookError::Topic(err)
    }
}

impl From<AuthError> for HookError {
    fn from(err: AuthError) -> Self {
        HookError::Auth(err)
    }
}

impl From<JsonError> for HookError {
    fn from(err: JsonError) -> Self {
        HookError::MalformedBody(err.to_string())
    }
}

impl From<PublishError> for HookError {
    fn from(err: PublishError) -> Self {
        HookError::Unclassified(err.to_string())
    }
}

pub type HookResult<T> = Result<T, HookError>;
