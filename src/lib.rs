// SkyQuery - answer slots for the airline database assignment
// This is the library root that exposes the public API

pub mod error;
pub mod logging;
pub mod query;
pub mod sheet;

// Re-export commonly used types for convenience
pub use error::{QueryTableError, Result};
pub use query::{prompt, prompts, Prompt, QuerySlot, QueryTable, PLACEHOLDER, SLOT_COUNT};
pub use sheet::{AnswerSheet, SheetEntry};
