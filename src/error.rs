// Error types for the query table and answer sheets

use thiserror::Error;

/// Errors raised by the query table, prompt catalog, and answer sheets
#[derive(Debug, Error)]
pub enum QueryTableError {
    /// The index does not name one of the eleven slots
    #[error("slot index {index} is out of range (expected 0..={max})", max = crate::query::SLOT_COUNT - 1)]
    OutOfRange { index: i64 },

    /// A slot can never hold an empty query
    #[error("query text for slot {index} is empty")]
    EmptyQuery { index: i64 },

    /// An answer sheet listed the same slot twice
    #[error("answer sheet lists slot {index} more than once")]
    DuplicateEntry { index: i64 },

    #[error("malformed answer sheet: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QueryTableError>;
