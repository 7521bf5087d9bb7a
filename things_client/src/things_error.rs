use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Classification of a failed call to the things service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThingsErrorKind {
    PermissionDenied,
    Unauthenticated,
    NotFound,
    InvalidArgument,
    Unavailable,
    DeadlineExceeded,
    Internal,
    Unknown,
}

impl ThingsErrorKind {
    /// Maps a non-successful HTTP status of the things service.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => ThingsErrorKind::InvalidArgument,
            401 => ThingsErrorKind::Unauthenticated,
            403 => ThingsErrorKind::PermissionDenied,
            404 => ThingsErrorKind::NotFound,
            408 | 504 => ThingsErrorKind::DeadlineExceeded,
            502 | 503 => ThingsErrorKind::Unavailable,
            500..=599 => ThingsErrorKind::Internal,
            _ => ThingsErrorKind::Unknown,
        }
    }
}

/// Error structure associated with `ThingsClient`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThingsError {
    pub kind: ThingsErrorKind,
    pub description: String,
}

impl ThingsError {
    pub fn new<D: ToString>(kind: ThingsErrorKind, description: D) -> ThingsError {
        ThingsError {
            kind,
            description: description.to_string(),
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        self.kind == ThingsErrorKind::PermissionDenied
    }
}

impl Display for ThingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "things service {:?}: {}", self.kind, self.description)
    }
}

impl StdError for ThingsError {}

impl From<reqwest::Error> for ThingsError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ThingsErrorKind::DeadlineExceeded
        } else if err.is_connect() {
            ThingsErrorKind::Unavailable
        } else if let Some(status) = err.status() {
            ThingsErrorKind::from_status(status.as_u16())
        } else if err.is_decode() {
            ThingsErrorKind::Internal
        } else {
            ThingsErrorKind::Unknown
        };

        ThingsError::new(kind, err)
    }
}

pub type ThingsResult<T> = Result<T, ThingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(
            ThingsErrorKind::from_status(403),
            ThingsErrorKind::PermissionDenied
        );
        assert_eq!(
            ThingsErrorKind::from_status(401),
            ThingsErrorKind::Unauthenticated
        );
        assert_eq!(ThingsErrorKind::from_status(404), ThingsErrorKind::NotFound);
        assert_eq!(
            ThingsErrorKind::from_status(503),
            ThingsErrorKind::Unavailable
        );
        assert_eq!(
            ThingsErrorKind::from_status(504),
            ThingsErrorKind::DeadlineExceeded
        );
        assert_eq!(ThingsErrorKind::from_status(500), ThingsErrorKind::Internal);
        assert_eq!(ThingsErrorKind::from_status(302), ThingsErrorKind::Unknown);
    }

    #[test]
    fn only_permission_denied_is_a_denial() {
        assert!(ThingsError::new(ThingsErrorKind::PermissionDenied, "").is_permission_denied());
        assert!(!ThingsError::new(ThingsErrorKind::Unauthenticated, "").is_permission_denied());
    }
}
