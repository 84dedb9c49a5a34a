//! Error types for mergington-core.

use std::path::{Path, PathBuf};

/// Errors that can occur while building or mutating the activity catalog.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No activity with this name exists in the catalog
    #[error("Activity not found: {name}")]
    ActivityNotFound {
        /// Name that was looked up
        name: String,
    },

    /// The email is already a participant of the activity
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp {
        /// Participant email
        email: String,
        /// Activity name
        activity: String,
    },

    /// The email is not a participant of the activity
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp {
        /// Participant email
        email: String,
        /// Activity name
        activity: String,
    },

    /// Two seed entries share a name
    #[error("Duplicate activity in seed: {name}")]
    DuplicateActivity {
        /// The repeated activity name
        name: String,
    },

    /// A seed file could not be parsed or is inconsistent
    #[error("Invalid seed: {message}")]
    Seed {
        /// What went wrong
        message: String,
    },

    /// I/O error while reading a seed file
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience `Result` alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// How an error should be classified by a request/response boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The addressed resource does not exist
    NotFound,
    /// The request conflicts with current state or is otherwise rejected
    BadRequest,
    /// Startup or server-side failure
    Internal,
}

impl Error {
    /// Creates an [`Error::ActivityNotFound`].
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Error::ActivityNotFound { name: name.into() }
    }

    /// Creates an [`Error::Seed`].
    pub fn seed<S: Into<String>>(message: S) -> Self {
        Error::Seed {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that produced it.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Classifies the error for callers that translate it into a status.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ActivityNotFound { .. } => ErrorKind::NotFound,
            Error::AlreadySignedUp { .. } | Error::NotSignedUp { .. } => ErrorKind::BadRequest,
            Error::DuplicateActivity { .. } | Error::Seed { .. } | Error::Io { .. } => {
                ErrorKind::Internal
            }
        }
    }

    /// Fixed, client-facing description of the error.
    pub fn detail(&self) -> &'static str {
        match self {
            Error::ActivityNotFound { .. } => "Activity not found",
            Error::AlreadySignedUp { .. } => "Student already signed up for this activity",
            Error::NotSignedUp { .. } => "Student is not signed up for this activity",
            Error::DuplicateActivity { .. } | Error::Seed { .. } | Error::Io { .. } => {
                "Internal server error"
            }
        }
    }
}
