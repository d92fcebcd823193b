use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("Contact not found: {0}")]
    ContactNotFound(u64),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed contacts file (line {line}): {message}")]
    Malformed { line: u64, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

/// Coarse classification of a [`ContactsError`].
///
/// Callers that only need to decide between "retry the I/O", "ask for another id" and
/// "fix the query" can branch on this instead of matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backing file could not be read or written, or is malformed.
    Storage,
    /// An operation referenced an id with no live contact.
    NotFound,
    /// Search criteria named an unknown field.
    InvalidQuery,
    /// Bad input at the API/CLI boundary (empty names, bad config values).
    Usage,
}

impl ContactsError {
    pub fn malformed(line: u64, message: impl Into<String>) -> Self {
        ContactsError::Malformed {
            line,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactsError::ContactNotFound(_) => ErrorKind::NotFound,
            ContactsError::InvalidQuery(_) => ErrorKind::InvalidQuery,
            ContactsError::Io(_)
            | ContactsError::Csv(_)
            | ContactsError::Malformed { .. }
            | ContactsError::Serialization(_)
            | ContactsError::Store(_) => ErrorKind::Storage,
            ContactsError::Api(_) => ErrorKind::Usage,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactsError>;
