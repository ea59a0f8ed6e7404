//! Error types for folio-core.
//!
//! Every Folio crate reports failures through this one enum so that the
//! API layer can map any error to a stable, caller-visible code.

/// Errors that can occur while resolving or mutating content.
///
/// Marked `#[non_exhaustive]` to allow adding new variants without
/// breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No caller could be resolved for an operation that requires one.
    #[error("Unauthorized: a signed-in caller is required")]
    Unauthorized,

    /// The resolved caller holds none of the required roles.
    #[error("Forbidden: requires one of the roles [{}]", required.join(", "))]
    Forbidden {
        /// Roles any one of which would have been sufficient
        required: Vec<String>,
    },

    /// A referenced item does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What kind of item was looked up (loader name, e.g. "articles")
        kind: String,
        /// The missing key, rendered for display
        id: String,
    },

    /// A batch fetch failed as a whole.
    #[error("Fetch failed in loader '{loader}': {message}")]
    Fetch {
        /// Name of the loader whose batch failed
        loader: String,
        /// Failure reported by the fetch function
        message: String,
    },

    /// A dataset violates one of its invariants (duplicate ids, bad file).
    #[error("Invalid dataset: {message}")]
    Dataset {
        /// What is wrong with the dataset
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (config and dataset files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type alias for Folio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable code surfaced to API callers.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Unauthorized => "UNAUTHORIZED",
            Error::Forbidden { .. } => "FORBIDDEN",
            Error::NotFound { .. } => "NOT_FOUND",
            Error::Fetch { .. } => "FETCH_FAILED",
            Error::Dataset { .. } => "INVALID_DATASET",
            Error::Config { .. } => "CONFIG",
            Error::Io(_) => "IO",
        }
    }

    /// Returns whether retrying the same call could succeed.
    ///
    /// Authorization and lookup failures are deterministic over in-memory
    /// state; a failed fetch leaves its keys uncached, so a retry refetches.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Fetch { .. } => true,
            Error::Io(_) => true,
            Error::Unauthorized => false,
            Error::Forbidden { .. } => false,
            Error::NotFound { .. } => false,
            Error::Dataset { .. } => false,
            Error::Config { .. } => false,
        }
    }

    /// Creates a not-found error for `id` of the given kind.
    pub fn not_found(kind: impl Into<String>, id: impl std::fmt::Display) -> Self {
        Error::NotFound {
            kind: kind.into(),
            id: id.to_string(),
        }
    }

    /// Creates a forbidden error listing the roles that would have sufficed.
    pub fn forbidden<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::Forbidden {
            required: required.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a fetch error for the named loader.
    pub fn fetch(loader: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Fetch {
            loader: loader.into(),
            message: message.into(),
        }
    }

    /// Creates a dataset error.
    pub fn dataset(message: impl Into<String>) -> Self {
        Error::Dataset {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
