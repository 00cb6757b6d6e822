use crate::domain::workshop::RecordId;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Failure of a single Record Store call. Calls are best-effort and
/// single-attempt: the error is propagated to the caller, never retried here.
#[derive(Debug, Clone)]
pub struct RemoteFetchError {
    /// Collection the call was addressed to, e.g. "servicos".
    pub collection: String,
    pub cause: FetchFailure,
}

impl RemoteFetchError {
    pub fn new(collection: &str, cause: FetchFailure) -> Self {
        Self { collection: collection.to_string(), cause }
    }
}

/// Underlying cause carried by a `RemoteFetchError`.
#[derive(Debug, Clone)]
pub enum FetchFailure {
    Network(String),
    Http(u16),
    Decode(String),
    NotFound,
    Integrity(DataIntegrityError),
}

/// Malformed record shape coming out of the Record Store. Surfaced instead of
/// silently coerced; the one exception is monetary parsing, which recovers to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataIntegrityError {
    /// Order marked as concluded without a completion date.
    MissingCompletionDate { order_id: RecordId },
    UnknownStatus { record_id: RecordId, value: String },
    UnknownPriority { record_id: RecordId, value: String },
    InvalidTimestamp { record_id: RecordId, value: String },
}

/// Application-level sum of the two failure families.
#[derive(Debug, Clone)]
pub enum AppError {
    Fetch(RemoteFetchError),
    Integrity(DataIntegrityError),
}

impl Display for RemoteFetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "fetch from '{}' failed: {}", self.collection, self.cause)
    }
}

impl Display for FetchFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FetchFailure::Network(msg) => write!(f, "network error: {}", msg),
            FetchFailure::Http(status) => write!(f, "HTTP status {}", status),
            FetchFailure::Decode(msg) => write!(f, "response decode error: {}", msg),
            FetchFailure::NotFound => write!(f, "record not found"),
            FetchFailure::Integrity(e) => write!(f, "malformed record: {}", e),
        }
    }
}

impl Display for DataIntegrityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DataIntegrityError::MissingCompletionDate { order_id } => {
                write!(f, "order {} is concluded but has no completion date", order_id)
            }
            DataIntegrityError::UnknownStatus { record_id, value } => {
                write!(f, "order {} carries unknown status '{}'", record_id, value)
            }
            DataIntegrityError::UnknownPriority { record_id, value } => {
                write!(f, "product {} carries unknown priority '{}'", record_id, value)
            }
            DataIntegrityError::InvalidTimestamp { record_id, value } => {
                write!(f, "record {} carries unparsable timestamp '{}'", record_id, value)
            }
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Fetch(e) => write!(f, "Record Store: {}", e),
            AppError::Integrity(e) => write!(f, "Data integrity: {}", e),
        }
    }
}

impl std::error::Error for RemoteFetchError {}
impl std::error::Error for DataIntegrityError {}
impl std::error::Error for AppError {}

impl From<RemoteFetchError> for AppError {
    fn from(error: RemoteFetchError) -> Self {
        AppError::Fetch(error)
    }
}

impl From<DataIntegrityError> for AppError {
    fn from(error: DataIntegrityError) -> Self {
        AppError::Integrity(error)
    }
}
