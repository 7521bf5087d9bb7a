use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Caller input does not conform to the channel topic grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum TopicError {
    MalformedTopic(String),
    MalformedSubtopic(String),
}

impl TopicError {
    pub fn malformed_topic<D: ToString>(description: D) -> Self {
        TopicError::MalformedTopic(description.to_string())
    }

    pub fn malformed_subtopic<D: ToString>(description: D) -> Self {
        TopicError::MalformedSubtopic(description.to_string())
    }
}

impl Display for TopicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TopicError::MalformedTopic(description) => {
                write!(f, "malformed topic: {}", description)
            }
            TopicError::MalformedSubtopic(description) => {
                write!(f, "malformed subtopic: {}", description)
            }
        }
    }
}

impl StdError for TopicError {}

pub type TopicResult<T> = Result<T, TopicError>;
