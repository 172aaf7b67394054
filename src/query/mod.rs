// Query module - the answer slots and the questions they answer
pub mod prompts;
pub mod table;

pub use prompts::{prompt, prompts, Prompt};
pub use table::{QuerySlot, QueryTable, PLACEHOLDER, SLOT_COUNT, WORKED_EXAMPLE};
